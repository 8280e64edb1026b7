//! # CarsXE API Client
//!
//! A Rust client for the CarsXE vehicle-data REST API: VIN decoding, market
//! value, vehicle history, recalls, plate decoding, image lookup, OCR, and
//! more — one method per endpoint.
//!
//! ## Features
//!
//! - **Per-endpoint methods**: twelve operations, each validating its
//!   parameters before any network I/O
//! - **Fail-fast validation**: missing or blank required parameters are
//!   reported by name, with zero side effects
//! - **Normalized responses**: every response decodes to a keyed JSON
//!   object regardless of the raw top-level shape
//! - **Async and blocking**: a tokio-native client plus a synchronous
//!   facade driving the same code to completion
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use carsxe_client::{CarsXeClient, Params, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CarsXeClient::new("YOUR_API_KEY");
//!
//!     let mut params = Params::new();
//!     params.insert("vin".to_string(), "WBAFR7C57CC811956".to_string());
//!
//!     let specs = client.specs(params).await?;
//!     println!("{:#?}", specs.get("attributes"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CarsXeClient                           │
//! │  specs() market_value() history() recalls() plate_decoder()│
//! │  images() obd_codes_decoder() vin_ocr() ...                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬───────────┬─────┴─────┬───────────┬─────────────┐
//! │ Endpoint │  Params   │   HTTP    │  Decode   │  Blocking   │
//! ├──────────┼───────────┼───────────┼───────────┼─────────────┤
//! │ Paths    │ Required  │ GET/POST  │ JSON      │ Sync facade │
//! │ Verbs    │ Plate     │ Timeout   │ Normalize │ over async  │
//! │ Table    │ Image     │ Status    │ Shape     │             │
//! └──────────┴───────────┴───────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Endpoint definitions and the descriptor table
pub mod endpoint;

/// Parameter validation
pub mod params;

/// HTTP transport
pub mod http;

/// Response decoding and normalization
pub mod decode;

/// The async API client
pub mod client;

/// Synchronous facade over the async client
pub mod blocking;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use blocking::BlockingCarsXeClient;
pub use client::{CarsXeClient, BASE_URL, SOURCE_TAG};
pub use endpoint::{Endpoint, EndpointDescriptor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
