//! Blocking client facade
//!
//! Wraps [`CarsXeClient`] for callers without an async runtime. Each client
//! owns one current-thread tokio runtime and drives the async call to
//! completion on it; no thread is spawned per call. Success and error
//! contracts are identical to the async client.

use crate::client::CarsXeClient;
use crate::error::Result;
use crate::http::HttpClientConfig;
use crate::types::{JsonObject, Params};
use tokio::runtime::{Builder, Runtime};

/// Synchronous counterpart of [`CarsXeClient`].
///
/// Must not be used from inside an async context; blocking a runtime
/// worker thread on another runtime deadlocks. Use [`CarsXeClient`] there.
pub struct BlockingCarsXeClient {
    inner: CarsXeClient,
    runtime: Runtime,
}

impl BlockingCarsXeClient {
    /// Create a client with the default transport configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_inner(CarsXeClient::new(api_key))
    }

    /// Create a client with a custom transport configuration
    pub fn with_config(api_key: impl Into<String>, config: HttpClientConfig) -> Self {
        Self::from_inner(CarsXeClient::with_config(api_key, config))
    }

    /// Create a client pointed at a different base URL.
    ///
    /// Intended for tests against a local mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::from_inner(CarsXeClient::with_base_url(api_key, base_url))
    }

    fn from_inner(inner: CarsXeClient) -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build blocking runtime");

        Self { inner, runtime }
    }

    /// Vehicle specifications by VIN
    pub fn specs(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.specs(params))
    }

    /// Market value by VIN
    pub fn market_value(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.market_value(params))
    }

    /// Vehicle history by VIN
    pub fn history(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.history(params))
    }

    /// Safety recalls by VIN
    pub fn recalls(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.recalls(params))
    }

    /// International VIN decoding
    pub fn international_vin_decoder(&self, params: Params) -> Result<JsonObject> {
        self.runtime
            .block_on(self.inner.international_vin_decoder(params))
    }

    /// License plate decoding
    pub fn plate_decoder(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.plate_decoder(params))
    }

    /// Vehicle image lookup
    pub fn images(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.images(params))
    }

    /// OBD trouble code decoding
    pub fn obd_codes_decoder(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.obd_codes_decoder(params))
    }

    /// License plate recognition from an image
    pub fn plate_image_recognition(&self, params: Params) -> Result<JsonObject> {
        self.runtime
            .block_on(self.inner.plate_image_recognition(params))
    }

    /// VIN recognition from an image
    pub fn vin_ocr(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.vin_ocr(params))
    }

    /// Year/make/model lookup
    pub fn year_make_model(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.year_make_model(params))
    }

    /// Lien and theft records by VIN
    pub fn lien_and_theft(&self, params: Params) -> Result<JsonObject> {
        self.runtime.block_on(self.inner.lien_and_theft(params))
    }
}

impl std::fmt::Debug for BlockingCarsXeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingCarsXeClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
