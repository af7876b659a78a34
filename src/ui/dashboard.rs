use crate::error::Result;
use crate::models::Status;
use crate::storage::ProspectStore;
use crate::ui;
use crate::views;

pub fn show(store: &mut ProspectStore) -> Result<()> {
    let prospects = store.all()?;
    let counts = views::status_counts(&prospects);

    println!();
    println!("Dashboard");
    println!("  Total prospects: {}", prospects.len());
    println!(
        "  Active leads:    {}",
        counts.get(&Status::Contacted).copied().unwrap_or(0)
    );
    println!(
        "  Closed deals:    {}",
        counts.get(&Status::ClosedWon).copied().unwrap_or(0)
    );

    println!();
    println!("Pipeline breakdown");
    for status in Status::ALL {
        if let Some(count) = counts.get(&status) {
            println!("  {:<17} {}", status.label(), count);
        }
    }

    let _ = ui::prompt("\nPress Enter to go back. ")?;
    Ok(())
}
