use crate::domain::ports::Storage;
use crate::utils::error::{Result, SamplerError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        tokio::fs::read(&full_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SamplerError::FileNotFound {
                path: full_path.display().to_string(),
            },
            _ => SamplerError::IoError(e),
        })
    }

    /// Creates or truncates the file. Missing directories are not created.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        tokio::fs::write(&full_path, data)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SamplerError::FileNotFound {
                    path: full_path.display().to_string(),
                },
                _ => SamplerError::IoError(e),
            })
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.full_path(path))
            .await
            .unwrap_or(false)
    }

    fn locate(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}
