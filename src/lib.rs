pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::credentials::FileCredentialStore;
pub use adapters::http::HttpTransport;
pub use config::CliConfig;
pub use core::{engine::ImportEngine, importer::ImportPipeline};
pub use domain::model::{ImportJob, JobReport, Record, RowOutcome};
pub use domain::ports::{CredentialStore, RecordTransport};
pub use utils::error::{ImportError, Result};
