//! Download and fetch operations for ECMWF open-data forecasts.
//!
//! This module provides functions to fetch directory-listing pages from the
//! ECMWF open-data server, extract GRIB2 file links, and download the files
//! into a date/slot-keyed local layout. The main entry point is [`run_sweep`].

mod grib_file;
mod listing;
mod sweep;

// Re-export public API
pub use grib_file::download_file;
pub use listing::{fetch_grib_listing, listing_url, parse_grib_links};
pub use sweep::{fetch_slot, run_sweep, target_dir};
