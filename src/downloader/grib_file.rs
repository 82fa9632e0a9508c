use crate::errors::{AppError, AppResult};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Streams one remote file to disk.
///
/// The destination is opened with create-or-truncate semantics, so a second
/// file with the same name overwrites the first. The body is copied chunk by
/// chunk; no temp file is used, so an interrupted run can leave a partial
/// file behind.
pub async fn download_file(
    client: &reqwest::Client,
    url: &str,
    file_path: &Path,
) -> AppResult<()> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to download {url}: {e}")))?;

    let status = response.status();
    let mut response = response.error_for_status().map_err(|e| {
        AppError::NetworkError(format!(
            "HTTP {}: Failed to download {url}: {e}",
            status.as_u16()
        ))
    })?;

    let mut file = File::create(file_path).await.map_err(|e| {
        AppError::IoError(format!("Failed to create {}: {}", file_path.display(), e))
    })?;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(|e| {
            AppError::IoError(format!("Failed to write {}: {}", file_path.display(), e))
        })?;
    }

    file.flush().await.map_err(|e| {
        AppError::IoError(format!("Failed to flush {}: {}", file_path.display(), e))
    })?;

    Ok(())
}
