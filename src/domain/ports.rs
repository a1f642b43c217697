use crate::domain::model::{RawRecord, RecordFormat};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn source_format(&self) -> Option<RecordFormat>;
    fn request_timeout(&self) -> Duration;
}

/// Supplies the raw records once at startup. Errors here are fatal to catalog construction.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn location(&self) -> &str;
    async fn fetch_records(&self) -> Result<Vec<RawRecord>>;
}
