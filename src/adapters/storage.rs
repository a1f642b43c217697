use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        // absolute paths replace the base
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DirectoryError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_file_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("employees.json"), b"[]").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let data = storage.read_file("employees.json").await.unwrap();
        assert_eq!(data, b"[]");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let err = storage.read_file("missing.json").await.unwrap_err();
        assert!(matches!(err, DirectoryError::IoError(_)));
    }

    #[test]
    fn test_relative_path_joins_base() {
        let storage = LocalStorage::new("/srv/data");
        assert_eq!(
            storage.resolve("hr/employees.json"),
            PathBuf::from("/srv/data/hr/employees.json")
        );
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let storage = LocalStorage::new("/srv/data");
        let absolute = std::env::temp_dir().join("employees.json");
        assert_eq!(storage.resolve(absolute.to_str().unwrap()), absolute);
    }
}
