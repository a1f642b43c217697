use crate::adapters::decode::decode_records;
use crate::core::{RawRecord, RecordFormat, RecordSource};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpRecordSource {
    client: Client,
    url: String,
    format: RecordFormat,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>, format: RecordFormat, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            format,
        })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Making HTTP request to: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DirectoryError::SourceUnavailable {
                location: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("HTTP response status: {}", status);
        if !status.is_success() {
            return Err(DirectoryError::SourceUnavailable {
                location: self.url.clone(),
                reason: format!("HTTP {}", status),
            });
        }

        let body = response.bytes().await?;
        decode_records(&body, self.format, &self.url)
    }
}
