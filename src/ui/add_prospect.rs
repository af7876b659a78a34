use crate::error::{Error, Result};
use crate::models::{ProspectDraft, Status};
use crate::storage::ProspectStore;
use crate::ui::prompt;
use std::io;

pub fn show(store: &mut ProspectStore) -> Result<()> {
    println!();
    println!("Add new prospect");
    let Some(full_name) = prompt("Full name: ")? else {
        return Ok(());
    };
    let Some(phone_number) = prompt("Phone number: ")? else {
        return Ok(());
    };
    let Some(email) = prompt("Email: ")? else {
        return Ok(());
    };
    let Some(status) = pick_status()? else {
        return Ok(());
    };
    let Some(notes) = prompt("Notes: ")? else {
        return Ok(());
    };

    if full_name.is_empty() || phone_number.is_empty() || email.is_empty() {
        println!("Please fill in all required fields.");
        return Ok(());
    }
    // Courtesy pre-check; the unique index still backs this up if the answer
    // changes between here and the insert.
    if store.email_exists(&email)? {
        println!("A prospect with email {email} already exists!");
        return Ok(());
    }

    let draft = ProspectDraft {
        full_name,
        phone_number,
        email,
        status,
        notes,
    };
    match store.add(&draft) {
        Ok(_) => println!("Prospect added successfully!"),
        Err(Error::DuplicateEmail(email)) => {
            println!("A prospect with email {email} already exists!")
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn pick_status() -> io::Result<Option<Status>> {
    println!("Status:");
    for (i, status) in Status::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, status);
    }
    loop {
        let Some(choice) = prompt("Choose a status [1]: ")? else {
            return Ok(None);
        };
        if choice.is_empty() {
            return Ok(Some(Status::ColdLead));
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=Status::ALL.len()).contains(&n) => {
                return Ok(Some(Status::ALL[n - 1]));
            }
            _ => println!("Enter a number between 1 and {}.", Status::ALL.len()),
        }
    }
}
