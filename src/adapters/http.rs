use crate::domain::model::Record;
use crate::domain::ports::RecordTransport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues one authenticated create request per record against the content
/// store's collection endpoint.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RecordTransport for HttpTransport {
    async fn create(&self, collection: &str, credential: &str, record: &Record) -> Result<()> {
        let url = format!("{}/api/{}", self.base_url, collection);

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential)
            .json(&serde_json::json!({ "data": record.fields }))
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }
}
