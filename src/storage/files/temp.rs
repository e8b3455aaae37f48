//! Scoped temporary files

use bytes::Bytes;
use futures::Stream;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

/// Read size used when streaming a file back to a client
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// A file on disk that is deleted when this guard is dropped.
///
/// Deletion failures are logged and otherwise ignored. A file that is already
/// gone is not an error.
///
/// Removal is a blocking `remove_file` inside `drop`, run on whichever worker
/// thread releases the guard. A request holds at most two guards.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
    file_name: String,
}

impl TempFile {
    pub(crate) fn new(path: PathBuf, file_name: String) -> Self {
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Extension including the leading dot, or an empty string
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Stream this file's contents in chunks.
    ///
    /// The guard, and every guard in `attached`, lives inside the stream, so
    /// all files are removed once the stream is dropped: after the last chunk,
    /// on a read error, or when the consumer goes away early.
    pub fn into_byte_stream(
        self,
        attached: Vec<TempFile>,
    ) -> impl Stream<Item = io::Result<Bytes>> + 'static {
        async_stream::try_stream! {
            let _attached = attached;
            let guard = self;
            let mut file = tokio::fs::File::open(guard.path()).await?;
            let mut buf = vec![0u8; STREAM_CHUNK_SIZE];

            loop {
                let read = file.read(&mut buf).await?;
                if read == 0 {
                    break;
                }
                yield Bytes::copy_from_slice(&buf[..read]);
            }

            debug!("Finished streaming {}", guard.file_name());
        }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Temp file removed: {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "Error deleting temp file"
            ),
        }
    }
}
