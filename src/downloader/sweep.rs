use crate::errors::{AppError, AppResult};
use crate::models::{date_dir_name, Slot, SLOT_ORDER};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use super::grib_file::download_file;
use super::listing::{fetch_grib_listing, listing_url};

/// Destination directory for one (date, slot) pair.
pub fn target_dir(base_dir: &Path, date: &str, slot: Slot) -> PathBuf {
    base_dir.join(date_dir_name(date)).join(slot.as_str())
}

/// Runs the full download sweep: every date, every slot, every product type.
///
/// Dates are processed in the order given; slots in table order; product
/// types in list order. A failed listing fetch or file download is logged
/// and skipped, never aborting the sweep. Only environmental faults such as
/// an unwritable base directory propagate as errors.
pub async fn run_sweep(
    client: &reqwest::Client,
    dates: &[String],
    base_dir: &Path,
) -> AppResult<()> {
    for date in dates {
        for &slot in SLOT_ORDER {
            fetch_slot(client, date, base_dir, slot).await?;
        }
    }
    Ok(())
}

/// Downloads every GRIB2 file published for one (date, slot) pair.
///
/// The destination directory is created (with parents, idempotently) before
/// any file in the pair is written. Filenames are taken verbatim from the
/// listing, so a name appearing twice overwrites its earlier copy.
pub async fn fetch_slot(
    client: &reqwest::Client,
    date: &str,
    base_dir: &Path,
    slot: Slot,
) -> AppResult<()> {
    let target_dir = target_dir(base_dir, date, slot);

    fs::create_dir_all(&target_dir).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create directory {}: {e}",
            target_dir.display()
        ))
    })?;

    for &file_type in slot.product_types() {
        let url = listing_url(date, slot, file_type);

        let file_names = match fetch_grib_listing(client, &url).await {
            Ok(names) => names,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to access listing");
                continue;
            }
        };

        for file_name in &file_names {
            // Files sit directly under the listing directory, so the download
            // URL is the listing URL plus the bare filename. Kept as plain
            // concatenation to match the server's path layout.
            let file_url = format!("{url}{file_name}");
            let file_path = target_dir.join(file_name);

            match download_file(client, &file_url, &file_path).await {
                Ok(()) => info!(file = %file_name, "Downloaded"),
                Err(e) => warn!(file = %file_name, error = %e, "Failed to download file"),
            }
        }

        info!(
            date = %date,
            slot = slot.as_str(),
            files = file_names.len(),
            "All files downloaded"
        );
    }

    Ok(())
}
