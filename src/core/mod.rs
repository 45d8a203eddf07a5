pub mod engine;
pub mod importer;
pub mod rows;

pub use crate::domain::model::{ImportJob, JobReport, Record, RowOutcome};
pub use crate::domain::ports::{CredentialStore, RecordTransport};
pub use crate::utils::error::Result;
