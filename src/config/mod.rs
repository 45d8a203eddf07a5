use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "csv-import")]
#[command(about = "Import CSV rows into a content store, one create request per row")]
pub struct CliConfig {
    /// Base URL of the content store
    #[arg(long, default_value = "http://localhost:1337")]
    pub base_url: String,

    /// Target collection name
    #[arg(long)]
    pub collection: String,

    /// CSV file to import (first line must be the header)
    #[arg(long)]
    pub file: String,

    /// API key; cached locally so later runs can omit it
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the API key cache location
    #[arg(long)]
    pub key_cache: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("collection", &self.collection)?;
        validate_file_extension("file", &self.file, &["csv"])?;
        Ok(())
    }
}
