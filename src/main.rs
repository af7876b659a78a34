use simple_crm::app::AppConfig;
use simple_crm::storage::ProspectStore;
use simple_crm::ui;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::load();
    let mut store = match ProspectStore::open(config.db_path()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Failed to open the prospect database: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = ui::run(&mut store) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
