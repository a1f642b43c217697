// Adapters layer: concrete record sources (local files, http) and their document decoding.

pub mod decode;
pub mod file_source;
pub mod http_source;
pub mod storage;

pub use file_source::FileRecordSource;
pub use http_source::HttpRecordSource;
pub use storage::LocalStorage;

use crate::core::{ConfigProvider, RecordFormat, RecordSource};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::is_remote_location;

/// Picks the record source for the configured location.
///
/// URLs default to JSON when the path has no recognised extension; files must
/// carry a `.json`/`.csv`/`.xml` extension unless a format is configured.
pub fn open_source<C: ConfigProvider + ?Sized>(config: &C) -> Result<Box<dyn RecordSource>> {
    let location = config.source_location().trim();
    let detected = config
        .source_format()
        .or_else(|| RecordFormat::from_extension(location));

    if is_remote_location(location) {
        let format = detected.unwrap_or(RecordFormat::Json);
        tracing::debug!("Using HTTP record source {} ({:?})", location, format);
        return Ok(Box::new(HttpRecordSource::new(
            location,
            format,
            config.request_timeout(),
        )?));
    }

    let format = detected.ok_or_else(|| DirectoryError::UnsupportedSource {
        location: location.to_string(),
        reason: "cannot infer the record format; use a .json, .csv or .xml file or set the format"
            .to_string(),
    })?;
    tracing::debug!("Using file record source {} ({:?})", location, format);
    Ok(Box::new(FileRecordSource::new(
        LocalStorage::default(),
        location,
        format,
    )))
}
