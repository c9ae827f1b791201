//! uvtax-cli library
//!
//! This crate provides the core functionality for the `uvtax-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library automates a multi-step interaction with the UNIPASS Ghana
//! vehicle-tax assessment portal, which offers no programmatic API: it
//! emulates the browser's form submissions to resolve make/model names into
//! internal codes, retrieves a filtered list of used-vehicle tax
//! assessments, and drills into a selected record's itemized tax breakdown.
//!
//! - [`portal`] - Form encoding, HTML extraction, and the client sequencing
//!   the portal's four endpoints
//! - [`date_range`] - Resolves relative duration tokens into concrete
//!   assessment date ranges
//! - [`models`] - Data structures for vehicle records, detail keys, and tax
//!   line items
//! - [`cli`] - Command-line interface orchestrating the lookup workflow
//! - [`ui`] - Console table rendering for the results
//! - [`config`] - Client configuration with optional TOML overrides
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow resolves the portal's internal codes, searches
//! within a date range, then fetches one record's breakdown:
//!
//! ```no_run
//! use uvtax_cli::{config::ClientConfig, date_range, portal::PortalClient};
//!
//! # async fn example() -> uvtax_cli::errors::AppResult<()> {
//! let client = PortalClient::new(ClientConfig::default())?;
//! let make_code = client.resolve_make_code("Toyota").await?;
//! let model_code = client.resolve_model_code("Toyota", "Camry").await?;
//! let (start, end) = date_range::resolve_range("3m")?;
//! let results = client
//!     .search_vehicles("Toyota", &make_code, "Camry", &model_code, "2024", &start, &end)
//!     .await?;
//! if let Some(latest) = results.first() {
//!     let breakdown = client.fetch_tax_details(&latest.detail_key).await?;
//!     println!("{} tax line(s)", breakdown.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod errors;
pub mod models;
pub mod portal;
pub mod ui;
pub mod utils;
