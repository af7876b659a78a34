use crate::error::{Error, Result};
use crate::models::{Prospect, ProspectDraft, Status};
use chrono::{NaiveDateTime, Utc};
use log::{debug, info};
use rusqlite::{params, Connection, ErrorCode};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted timestamp layout. Microseconds are always written with six
/// digits; reads parse this exact shape and refuse anything else.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Durable prospect set backed by a single SQLite file.
///
/// One `Connection` is held for the lifetime of the store; mutating methods
/// take `&mut self`, so a shared store serializes its writers. Each call
/// commits before returning.
pub struct ProspectStore {
    conn: Connection,
    db_path: PathBuf,
}

impl ProspectStore {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        let store = Self { conn, db_path };
        store.init()?;
        info!("prospect store open at {}", store.db_path.display());
        Ok(store)
    }

    // Runs on every open, so everything here must stay idempotent.
    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            CREATE TABLE IF NOT EXISTS prospects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                email TEXT NOT NULL,
                status TEXT NOT NULL,
                notes TEXT,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            );
            CREATE UNIQUE INDEX IF NOT EXISTS idx_prospects_email ON prospects(email);
            "#,
        )?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts a new prospect and returns its id. `created_at` and
    /// `updated_at` are stamped here, from one reading of the clock.
    pub fn add(&mut self, draft: &ProspectDraft) -> Result<i64> {
        validate_required(&draft.full_name, &draft.phone_number, &draft.email)?;
        let now = now_stamp();
        let res = self.conn.execute(
            r#"
            INSERT INTO prospects (full_name, phone_number, email, status, notes, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                draft.full_name,
                draft.phone_number,
                draft.email,
                draft.status.label(),
                draft.notes,
                now,
                now
            ],
        );
        match res {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                debug!("added prospect {id}");
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => {
                Err(Error::DuplicateEmail(draft.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Every stored prospect, in whatever order SQLite hands rows back.
    /// Fails if any persisted timestamp or status no longer parses.
    pub fn all(&self) -> Result<Vec<Prospect>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, full_name, phone_number, email, status, notes, created_at, updated_at
             FROM prospects",
        )?;
        let mut rows = stmt.query([])?;
        let mut prospects = Vec::new();
        while let Some(row) = rows.next()? {
            prospects.push(Prospect {
                id: row.get(0)?,
                full_name: row.get(1)?,
                phone_number: row.get(2)?,
                email: row.get(3)?,
                status: parse_status(&row.get::<_, String>(4)?)?,
                notes: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                created_at: parse_timestamp(&row.get::<_, String>(6)?)?,
                updated_at: parse_timestamp(&row.get::<_, String>(7)?)?,
            });
        }
        Ok(prospects)
    }

    /// Overwrites the mutable fields of the row with `prospect.id` and
    /// refreshes `updated_at`; `created_at` is left alone. Returns false if
    /// no row has that id.
    pub fn update(&mut self, prospect: &Prospect) -> Result<bool> {
        validate_required(&prospect.full_name, &prospect.phone_number, &prospect.email)?;
        let now = now_stamp();
        let res = self.conn.execute(
            r#"
            UPDATE prospects
            SET full_name = ?1, phone_number = ?2, email = ?3, status = ?4, notes = ?5, updated_at = ?6
            WHERE id = ?7
            "#,
            params![
                prospect.full_name,
                prospect.phone_number,
                prospect.email,
                prospect.status.label(),
                prospect.notes,
                now,
                prospect.id
            ],
        );
        match res {
            Ok(changed) => Ok(changed > 0),
            Err(err) if is_unique_violation(&err) => {
                Err(Error::DuplicateEmail(prospect.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Hard delete. Returns false if no row had that id.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM prospects WHERE id = ?1", params![id])?;
        if removed > 0 {
            debug!("deleted prospect {id}");
        }
        Ok(removed > 0)
    }

    /// Byte-exact existence check (SQLite BINARY collation, so the
    /// comparison is case-sensitive). The unique index on `email` is what
    /// actually enforces the rule; this is the pre-submission courtesy check.
    pub fn email_exists(&self, email: &str) -> Result<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM prospects WHERE email = ?1)",
            params![email],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

fn validate_required(full_name: &str, phone_number: &str, email: &str) -> Result<()> {
    for (field, value) in [
        ("full_name", full_name),
        ("phone_number", phone_number),
        ("email", email),
    ] {
        if value.trim().is_empty() {
            return Err(Error::EmptyField(field));
        }
    }
    Ok(())
}

fn now_stamp() -> String {
    Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| Error::CorruptTimestamp {
        value: value.to_string(),
        format: TIMESTAMP_FORMAT,
    })
}

fn parse_status(value: &str) -> Result<Status> {
    Status::from_label(value).ok_or_else(|| Error::CorruptStatus(value.to_string()))
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation)
}
