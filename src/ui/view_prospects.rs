use crate::error::Result;
use crate::models::{Prospect, Status};
use crate::storage::ProspectStore;
use crate::ui::prompt;
use crate::views;
use std::io;

pub fn show(store: &mut ProspectStore) -> Result<()> {
    let prospects = store.all()?;
    println!();
    println!("View prospects");
    if prospects.is_empty() {
        println!("No prospects yet.");
        return Ok(());
    }

    let Some(statuses) = pick_status_filter()? else {
        return Ok(());
    };
    let Some(search) = prompt("Search by name or email (empty for all): ")? else {
        return Ok(());
    };

    let visible = views::filter_prospects(&prospects, &statuses, &search);
    render_table(&visible);
    println!("Total prospects: {}", visible.len());

    delete_flow(store)
}

fn pick_status_filter() -> io::Result<Option<Vec<Status>>> {
    println!("Filter by status (comma-separated numbers, empty for all):");
    for (i, status) in Status::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, status);
    }
    loop {
        let Some(input) = prompt("Statuses: ")? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(Vec::new()));
        }
        let mut picked = Vec::new();
        let mut valid = true;
        for part in input.split(',') {
            match part.trim().parse::<usize>() {
                Ok(n) if (1..=Status::ALL.len()).contains(&n) => {
                    let status = Status::ALL[n - 1];
                    if !picked.contains(&status) {
                        picked.push(status);
                    }
                }
                _ => {
                    valid = false;
                    break;
                }
            }
        }
        if valid {
            return Ok(Some(picked));
        }
        println!(
            "Enter numbers between 1 and {} separated by commas.",
            Status::ALL.len()
        );
    }
}

fn render_table(prospects: &[&Prospect]) {
    println!();
    println!(
        "{:<5} {:<20} {:<14} {:<26} {:<17} {:<17} {}",
        "ID", "Full Name", "Phone", "Email", "Status", "Updated", "Notes"
    );
    for p in prospects {
        println!(
            "{:<5} {:<20} {:<14} {:<26} {:<17} {:<17} {}",
            p.id,
            p.full_name,
            p.phone_number,
            p.email,
            p.status.label(),
            p.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            p.notes
        );
    }
}

fn delete_flow(store: &mut ProspectStore) -> Result<()> {
    let Some(input) = prompt("\nDelete a prospect? Enter its id (empty to go back): ")? else {
        return Ok(());
    };
    if input.is_empty() {
        return Ok(());
    }
    let Ok(id) = input.parse::<i64>() else {
        println!("Not a valid id: {input}");
        return Ok(());
    };

    // The pending-delete confirmation lives and dies inside this flow;
    // leaving the page forgets it.
    let question = format!("Are you sure you want to delete prospect {id}? [y/N]: ");
    let Some(answer) = prompt(&question)? else {
        return Ok(());
    };
    if answer.eq_ignore_ascii_case("y") {
        if store.delete(id)? {
            println!("Prospect deleted successfully!");
        } else {
            println!("No prospect with id {id}.");
        }
    } else {
        println!("Delete cancelled.");
    }
    Ok(())
}
