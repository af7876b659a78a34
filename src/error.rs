use thiserror::Error;

/// Everything the store and config layer can fail with. Missing rows are not
/// an error: `update` and `delete` report them as `Ok(false)`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
    #[error("a prospect with email `{0}` already exists")]
    DuplicateEmail(String),
    #[error("stored timestamp `{value}` does not match `{format}`")]
    CorruptTimestamp { value: String, format: &'static str },
    #[error("stored status `{0}` is not a known pipeline stage")]
    CorruptStatus(String),
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
