//! Local file system storage for in-flight audio

use crate::config::UploadConfig;
use crate::utils::error::{RelayError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

use super::temp::TempFile;

/// Upload directory manager
#[derive(Debug, Clone)]
pub struct UploadStore {
    base_path: PathBuf,
    max_file_size: u64,
}

impl UploadStore {
    /// Create the store, creating the upload directory if it doesn't exist.
    ///
    /// Safe to call repeatedly for the same directory.
    pub async fn new(config: &UploadConfig) -> Result<Self> {
        let path = config.path.clone();

        fs::create_dir_all(&path).await.map_err(|e| {
            RelayError::FileStorage(format!(
                "Failed to create upload directory {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("Upload directory ready at: {}", path.display());
        Ok(Self {
            base_path: path,
            max_file_size: config.max_file_size,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Maximum accepted upload size in bytes
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Name for a freshly uploaded file: `audio-<id><ext>`
    pub fn upload_file_name(extension: &str) -> String {
        format!("audio-{}{}", Uuid::new_v4().simple(), extension)
    }

    /// Name for the synthesized rendition of `stored_name`
    pub fn synthesized_file_name(stored_name: &str) -> String {
        format!("{}-trans-{}.wav", stored_name, Uuid::new_v4().simple())
    }

    /// Create an empty file and return its guard with an open handle.
    ///
    /// Fails if the name is already taken.
    pub async fn create(&self, file_name: &str) -> Result<(TempFile, fs::File)> {
        let path = self.base_path.join(file_name);

        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| RelayError::FileStorage(format!("Failed to create file: {}", e)))?;

        debug!("Temp file created: {}", path.display());
        Ok((TempFile::new(path, file_name.to_string()), file))
    }

    /// Write `content` to a new file
    pub async fn write(&self, file_name: &str, content: &[u8]) -> Result<TempFile> {
        let (guard, mut file) = self.create(file_name).await?;

        file.write_all(content)
            .await
            .map_err(|e| RelayError::FileStorage(format!("Failed to write file: {}", e)))?;
        file.flush()
            .await
            .map_err(|e| RelayError::FileStorage(format!("Failed to write file: {}", e)))?;

        debug!(bytes = content.len(), "File stored: {}", guard.file_name());
        Ok(guard)
    }
}
