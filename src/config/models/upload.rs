//! Upload directory configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where uploaded and synthesized files live while a request is in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory for temporary files, created at startup if absent
    #[serde(default)]
    pub path: PathBuf,
    /// Maximum accepted audio file size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("UPLOAD_PATH is required".to_string());
        }

        if self.max_file_size == 0 {
            return Err("Max file size cannot be 0".to_string());
        }

        Ok(())
    }
}
