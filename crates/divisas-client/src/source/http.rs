use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::RateSource;
use crate::config::ClientConfig;
use crate::errors::RateError;
use crate::models::RateRecord;

const SOURCE_ID: &str = "HTTP";

/// Fetches the snapshot with a single `GET` to the configured URL.
#[derive(Clone, Debug)]
pub struct HttpRateSource {
    client: Client,
    url: String,
}

impl HttpRateSource {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: config.source_url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_records(&self) -> Result<Vec<RateRecord>, RateError> {
        debug!("Fetching rate snapshot from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status {
                status: status.as_u16(),
            });
        }

        // Decode separately so a malformed body is a parse failure, not a
        // network one.
        let body = response.bytes().await?;
        let records: Vec<RateRecord> = serde_json::from_slice(&body)?;

        debug!("Fetched {} rate records from {}", records.len(), self.url);
        Ok(records)
    }
}
