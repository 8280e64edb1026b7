//! Endpoint definitions and the static descriptor table
//!
//! Every logical CarsXE operation is an [`Endpoint`] variant. The descriptor
//! table maps each variant to its path, HTTP verb, and parameter sets, and is
//! built once at startup — there is no runtime mutation.

use crate::types::Method;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A logical CarsXE API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Vehicle specifications by VIN
    Specs,
    /// Market value by VIN
    MarketValue,
    /// Vehicle history by VIN
    History,
    /// Safety recalls by VIN
    Recalls,
    /// International VIN decoding
    InternationalVinDecoder,
    /// License plate decoding
    PlateDecoder,
    /// Vehicle image lookup
    Images,
    /// OBD trouble code decoding
    ObdCodesDecoder,
    /// License plate recognition from an image
    PlateImageRecognition,
    /// VIN recognition from an image
    VinOcr,
    /// Year/make/model lookup
    YearMakeModel,
    /// Lien and theft records by VIN
    LienAndTheft,
}

/// Static description of one endpoint: path, verb, and parameter sets
#[derive(Debug, Clone, Copy)]
pub struct EndpointDescriptor {
    /// Path relative to the API base URL
    pub path: &'static str,
    /// HTTP verb used by the endpoint
    pub method: Method,
    /// Required parameter names, in validation order
    pub required: &'static [&'static str],
    /// Optional parameter names accepted by the endpoint
    pub optional: &'static [&'static str],
}

/// All endpoints, in the order the API documents them
pub const ALL_ENDPOINTS: &[Endpoint] = &[
    Endpoint::Specs,
    Endpoint::MarketValue,
    Endpoint::History,
    Endpoint::Recalls,
    Endpoint::InternationalVinDecoder,
    Endpoint::PlateDecoder,
    Endpoint::Images,
    Endpoint::ObdCodesDecoder,
    Endpoint::PlateImageRecognition,
    Endpoint::VinOcr,
    Endpoint::YearMakeModel,
    Endpoint::LienAndTheft,
];

/// Descriptor table, built once on first access
static DESCRIPTORS: LazyLock<HashMap<Endpoint, EndpointDescriptor>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        Endpoint::Specs,
        EndpointDescriptor {
            path: "specs",
            method: Method::GET,
            required: &["vin"],
            optional: &["deepdata", "disableIntVINDecoding"],
        },
    );
    m.insert(
        Endpoint::MarketValue,
        EndpointDescriptor {
            path: "v2/marketvalue",
            method: Method::GET,
            required: &["vin"],
            optional: &["state"],
        },
    );
    m.insert(
        Endpoint::History,
        EndpointDescriptor {
            path: "history",
            method: Method::GET,
            required: &["vin"],
            optional: &[],
        },
    );
    m.insert(
        Endpoint::Recalls,
        EndpointDescriptor {
            path: "v1/recalls",
            method: Method::GET,
            required: &["vin"],
            optional: &[],
        },
    );
    m.insert(
        Endpoint::InternationalVinDecoder,
        EndpointDescriptor {
            path: "v1/international-vin-decoder",
            method: Method::GET,
            required: &["vin"],
            optional: &[],
        },
    );
    m.insert(
        Endpoint::PlateDecoder,
        EndpointDescriptor {
            path: "v2/platedecoder",
            method: Method::GET,
            required: &["plate", "country"],
            // state and district are conditionally required, see params module
            optional: &["state", "district"],
        },
    );
    m.insert(
        Endpoint::Images,
        EndpointDescriptor {
            path: "images",
            method: Method::GET,
            required: &["make", "model"],
            optional: &[
                "year",
                "trim",
                "color",
                "transparent",
                "angle",
                "photoType",
                "size",
                "license",
            ],
        },
    );
    m.insert(
        Endpoint::ObdCodesDecoder,
        EndpointDescriptor {
            path: "obdcodesdecoder",
            method: Method::GET,
            required: &["code"],
            optional: &[],
        },
    );
    m.insert(
        Endpoint::PlateImageRecognition,
        EndpointDescriptor {
            path: "platerecognition",
            method: Method::POST,
            // any one of the image source aliases, see params module
            required: &[],
            optional: &["upload_url", "image", "imageUrl"],
        },
    );
    m.insert(
        Endpoint::VinOcr,
        EndpointDescriptor {
            path: "v1/vinocr",
            method: Method::POST,
            required: &[],
            optional: &["upload_url", "image", "imageUrl"],
        },
    );
    m.insert(
        Endpoint::YearMakeModel,
        EndpointDescriptor {
            path: "v1/ymm",
            method: Method::GET,
            required: &["year", "make", "model"],
            optional: &["trim"],
        },
    );
    m.insert(
        Endpoint::LienAndTheft,
        EndpointDescriptor {
            path: "v1/lien-theft",
            method: Method::GET,
            required: &["vin"],
            optional: &[],
        },
    );

    m
});

impl Endpoint {
    /// Get the descriptor for this endpoint
    pub fn descriptor(self) -> &'static EndpointDescriptor {
        &DESCRIPTORS[&self]
    }

    /// Path relative to the API base URL
    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    /// HTTP verb used by the endpoint
    pub fn method(self) -> Method {
        self.descriptor().method
    }

    /// True for the image-submission endpoints, which POST a JSON body
    /// instead of encoding the parameter bag as a query string
    pub fn is_image_upload(self) -> bool {
        matches!(self, Endpoint::PlateImageRecognition | Endpoint::VinOcr)
    }
}
