use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Boundary for issuing one authenticated remote create request per record.
#[async_trait]
pub trait RecordTransport: Send + Sync {
    async fn create(&self, collection: &str, credential: &str, record: &Record) -> Result<()>;
}

/// Single persistent slot holding the API credential. Reads return `None`
/// when nothing has been cached yet; writes take effect immediately.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, value: &str) -> Result<()>;
}
