//! Audio relay endpoint
//!
//! Accepts one audio file in the multipart field `audio`, runs it through the
//! transcription and synthesis pipeline and streams the synthesized audio
//! back.

use crate::core::audio::{file_extension, is_allowed_extension};
use crate::server::state::AppState;
use crate::storage::{TempFile, UploadStore};
use crate::utils::error::{RelayError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

/// Multipart field carrying the audio file
pub const AUDIO_FIELD: &str = "audio";

/// `POST /audio`
pub async fn relay_audio(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<HttpResponse> {
    info!("Audio relay request");

    if !req.content_type().to_ascii_lowercase().starts_with("multipart/") {
        warn!(content_type = %req.content_type(), "Request is not multipart");
        return Err(RelayError::MissingFile);
    }

    let upload = receive_upload(state.pipeline.store(), payload).await?;
    info!(
        file = %upload.file_name(),
        "Upload stored, starting transcription"
    );

    let output = state.pipeline.run(upload).await.map_err(|e| {
        error!("Relay pipeline failed: {}", e);
        e
    })?;

    let file_name = output.audio.file_name().to_string();
    let body = output.audio.into_byte_stream(vec![output.upload]);

    info!(file = %file_name, "Operation completed successfully");
    Ok(HttpResponse::Ok()
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(file_name)],
        })
        .content_type(output.content_type)
        .streaming(body))
}

/// Walk the multipart stream and store the single `audio` file.
///
/// Text fields are drained and ignored. The file type is checked before any
/// byte reaches the disk.
async fn receive_upload(store: &UploadStore, mut payload: Multipart) -> Result<TempFile> {
    let mut upload: Option<TempFile> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            error!("Error reading multipart field: {}", e);
            RelayError::upload(e.to_string())
        })?;

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let Some(file_name) = file_name else {
            drain(&mut field).await?;
            continue;
        };

        if field.name() != Some(AUDIO_FIELD) || upload.is_some() {
            warn!(field = ?field.name(), "Unexpected file field");
            return Err(RelayError::upload("Unexpected field"));
        }

        let extension = file_extension(&file_name);
        if !is_allowed_extension(&extension) {
            warn!(file = %file_name, "Rejected upload with disallowed extension");
            return Err(RelayError::invalid_file_type("Only audio files are allowed"));
        }

        upload = Some(write_field(store, &mut field, &extension).await?);
    }

    upload.ok_or(RelayError::MissingFile)
}

/// Stream a file field to disk, enforcing the size limit as bytes arrive
async fn write_field(store: &UploadStore, field: &mut Field, extension: &str) -> Result<TempFile> {
    let file_name = UploadStore::upload_file_name(extension);
    let (guard, mut file) = store
        .create(&file_name)
        .await
        .map_err(|e| RelayError::upload_storage(e.details()))?;

    let limit = store.max_file_size();
    let mut written: u64 = 0;

    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        written += chunk.len() as u64;
        if written > limit {
            warn!(limit, "Upload exceeds size limit");
            return Err(RelayError::upload("File too large"));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| RelayError::upload_storage(e.to_string()))?;
    }

    file.flush()
        .await
        .map_err(|e| RelayError::upload_storage(e.to_string()))?;

    debug!(bytes = written, "Upload written: {}", guard.file_name());
    Ok(guard)
}

async fn drain(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}
