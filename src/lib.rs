pub mod app;
pub mod error;
pub mod models;
pub mod storage;
pub mod ui;
pub mod views;

pub use error::Error;
pub use models::{Prospect, ProspectDraft, Status};
pub use storage::ProspectStore;
