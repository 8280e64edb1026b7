//! CarsXE API client
//!
//! One async method per logical endpoint. Every method follows the same
//! driver: look up the endpoint descriptor, validate the parameter bag,
//! build the request URL with `key` and `source` appended last, send, and
//! normalize the JSON response.

use crate::decode::decode_body;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::http::{build_url, HttpClient, HttpClientConfig};
use crate::params;
use crate::types::{JsonObject, Params};
use serde_json::json;
use tracing::debug;

/// Base URL for the CarsXE API
pub const BASE_URL: &str = "https://api.carsxe.com";

/// Fixed tag identifying this client implementation
pub const SOURCE_TAG: &str = "rust";

/// Query parameter names the client always sets itself
const RESERVED_PARAMS: &[&str] = &["key", "source"];

/// Client for the CarsXE vehicle-data API.
///
/// Holds the API key and base URL; stateless across calls. Cheap to share
/// behind a reference, since the underlying connection handling lives in
/// the transport.
pub struct CarsXeClient {
    api_key: String,
    base_url: String,
    http: HttpClient,
}

impl CarsXeClient {
    /// Create a client with the default transport configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, HttpClientConfig::default())
    }

    /// Create a client with a custom transport configuration
    pub fn with_config(api_key: impl Into<String>, config: HttpClientConfig) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            http: HttpClient::with_config(config),
        }
    }

    /// Create a client pointed at a different base URL.
    ///
    /// Intended for tests against a local mock server; production callers
    /// should use [`CarsXeClient::new`].
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: HttpClient::new(),
        }
    }

    // ========================================================================
    // Endpoint methods
    // ========================================================================

    /// Vehicle specifications by VIN.
    ///
    /// Required: `vin`. Optional: `deepdata`, `disableIntVINDecoding`.
    pub async fn specs(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::Specs, params).await
    }

    /// Market value by VIN.
    ///
    /// Required: `vin`. Optional: `state`.
    pub async fn market_value(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::MarketValue, params).await
    }

    /// Vehicle history by VIN
    pub async fn history(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::History, params).await
    }

    /// Safety recalls by VIN
    pub async fn recalls(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::Recalls, params).await
    }

    /// International VIN decoding
    pub async fn international_vin_decoder(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::InternationalVinDecoder, params).await
    }

    /// License plate decoding.
    ///
    /// Required: `plate`, `country` (defaults to `US` when absent or blank).
    /// Pakistani plates additionally require `state` and `district`; every
    /// other country requires `state`.
    pub async fn plate_decoder(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::PlateDecoder, params).await
    }

    /// Vehicle image lookup.
    ///
    /// Required: `make`, `model`. Optional: `year`, `trim`, `color`,
    /// `transparent`, `angle`, `photoType`, `size`, `license`.
    pub async fn images(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::Images, params).await
    }

    /// OBD trouble code decoding.
    ///
    /// Required: `code`.
    pub async fn obd_codes_decoder(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::ObdCodesDecoder, params).await
    }

    /// License plate recognition from an image.
    ///
    /// Requires one of `upload_url`, `image`, or `imageUrl`; when more than
    /// one is supplied the first in that order wins.
    pub async fn plate_image_recognition(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::PlateImageRecognition, params).await
    }

    /// VIN recognition from an image.
    ///
    /// Requires one of `upload_url`, `image`, or `imageUrl`; when more than
    /// one is supplied the first in that order wins.
    pub async fn vin_ocr(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::VinOcr, params).await
    }

    /// Year/make/model lookup.
    ///
    /// Required: `year`, `make`, `model`. Optional: `trim`.
    pub async fn year_make_model(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::YearMakeModel, params).await
    }

    /// Lien and theft records by VIN
    pub async fn lien_and_theft(&self, params: Params) -> Result<JsonObject> {
        self.call(Endpoint::LienAndTheft, params).await
    }

    // ========================================================================
    // Shared driver
    // ========================================================================

    /// Validate, build, send, decode.
    ///
    /// Validation failures return before any network I/O.
    async fn call(&self, endpoint: Endpoint, mut params: Params) -> Result<JsonObject> {
        let descriptor = endpoint.descriptor();

        let body = if endpoint.is_image_upload() {
            // POST: key/source ride on the URL, the body carries only the
            // selected image source
            let image = params::select_image_source(&params)?.to_string();
            let url = build_url(&self.base_url, descriptor.path, &self.auth_pairs())?;
            debug!("POST {:?}", endpoint);
            self.http.post_json(url, &json!({ "image": image })).await?
        } else {
            match endpoint {
                Endpoint::PlateDecoder => {
                    params::apply_plate_defaults(&mut params);
                    params::validate_plate_params(&params)?;
                }
                _ => params::validate_required(&params, descriptor.required)?,
            }
            let url = build_url(&self.base_url, descriptor.path, &self.query_pairs(&params))?;
            debug!("GET {:?}", endpoint);
            self.http.get(url).await?
        };

        decode_body(&body)
    }

    /// All bag entries except the reserved names, then `key` and `source`
    /// appended last so the client's values always win.
    fn query_pairs(&self, params: &Params) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = params
            .iter()
            .filter(|(name, _)| !RESERVED_PARAMS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        pairs.extend(self.auth_pairs());
        pairs
    }

    /// The `key` and `source` pairs carried by every request
    fn auth_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("key".to_string(), self.api_key.clone()),
            ("source".to_string(), SOURCE_TAG.to_string()),
        ]
    }
}

impl std::fmt::Debug for CarsXeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarsXeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CarsXeClient {
        CarsXeClient::new("test-key")
    }

    fn bag(entries: &[(&str, &str)]) -> Params {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_pairs_append_key_and_source_last() {
        let pairs = client().query_pairs(&bag(&[("vin", "WBA123")]));

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("vin".to_string(), "WBA123".to_string()));
        assert_eq!(pairs[1], ("key".to_string(), "test-key".to_string()));
        assert_eq!(pairs[2], ("source".to_string(), "rust".to_string()));
    }

    #[test]
    fn test_query_pairs_discard_caller_key_and_source() {
        let pairs = client().query_pairs(&bag(&[
            ("vin", "WBA123"),
            ("key", "attacker-key"),
            ("source", "spoofed"),
        ]));

        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("key".to_string(), "test-key".to_string())));
        assert!(pairs.contains(&("source".to_string(), "rust".to_string())));
        assert!(!pairs.iter().any(|(_, v)| v == "attacker-key" || v == "spoofed"));
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(client().base_url, BASE_URL);

        let test_client = CarsXeClient::with_base_url("test-key", "http://127.0.0.1:8080");
        assert_eq!(test_client.base_url, "http://127.0.0.1:8080");
    }
}
