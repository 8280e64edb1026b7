//! HTTP transport module
//!
//! A thin reqwest wrapper with a uniform timeout and the status contract:
//! transport failures surface as `Error::Network`, non-2xx responses as
//! `Error::HttpStatus` with the raw body retained, and 2xx responses hand
//! the raw body to the response decoder.

mod client;

pub use client::{build_url, HttpClient, HttpClientConfig, HttpClientConfigBuilder};
