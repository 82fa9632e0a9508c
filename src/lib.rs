//! ecmwf-cli library
//!
//! This crate provides the core functionality for the `ecmwf-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the
//! forecast download sweep:
//!
//! - [`downloader`] - Fetches listing pages and streams GRIB2 forecast files to disk
//! - [`cli`] - Command-line interface for orchestrating the sweep
//! - [`config`] - TOML configuration file loading
//! - [`models`] - Time slots, product types, and the directory naming scheme
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow downloads every GRIB2 file published for a set of
//! dates into a date/slot-keyed directory tree:
//!
//! ```no_run
//! use ecmwf_cli::{downloader, errors::AppResult};
//! use std::path::Path;
//!
//! # async fn example() -> AppResult<()> {
//! let client = reqwest::Client::new();
//! let dates = vec!["20240311".to_string(), "20240312".to_string()];
//! downloader::run_sweep(&client, &dates, Path::new("data/forecasts")).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod models;
