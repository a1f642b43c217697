use crate::adapters::decode::decode_records;
use crate::core::{RawRecord, RecordFormat, RecordSource, Storage};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;

pub struct FileRecordSource<S: Storage> {
    storage: S,
    path: String,
    format: RecordFormat,
}

impl<S: Storage> FileRecordSource<S> {
    pub fn new(storage: S, path: impl Into<String>, format: RecordFormat) -> Self {
        Self {
            storage,
            path: path.into(),
            format,
        }
    }
}

#[async_trait]
impl<S: Storage> RecordSource for FileRecordSource<S> {
    fn location(&self) -> &str {
        &self.path
    }

    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        let bytes = self
            .storage
            .read_file(&self.path)
            .await
            .map_err(|e| match e {
                DirectoryError::IoError(io) => DirectoryError::SourceUnavailable {
                    location: self.path.clone(),
                    reason: io.to_string(),
                },
                other => other,
            })?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path);
        decode_records(&bytes, self.format, &self.path)
    }
}
