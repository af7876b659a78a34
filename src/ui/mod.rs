pub mod add_prospect;
pub mod dashboard;
pub mod view_prospects;

use crate::error::Result;
use crate::storage::ProspectStore;
use std::io::{self, BufRead, Write};

/// Prints a label, reads one trimmed line. `None` means stdin is closed.
pub fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Top-level navigation loop, the terminal stand-in for a sidebar.
pub fn run(store: &mut ProspectStore) -> Result<()> {
    loop {
        println!();
        println!("Simple CRM");
        println!("  1) Dashboard");
        println!("  2) Add prospect");
        println!("  3) View prospects");
        println!("  q) Quit");
        let Some(choice) = prompt("> ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => dashboard::show(store)?,
            "2" => add_prospect::show(store)?,
            "3" => view_prospects::show(store)?,
            "q" | "Q" => return Ok(()),
            "" => {}
            other => println!("Unknown choice: {other}"),
        }
    }
}
