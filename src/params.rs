//! Parameter validation
//!
//! Validates the caller-supplied parameter bag against an endpoint's
//! required-parameter list before any request is built. Validation stops at
//! the first missing name and never touches the network.
//!
//! Two endpoints carry special rules beyond the plain required check:
//! the plate decoder (country default plus country-specific fields) and the
//! image-submission endpoints (one of three alias keys selects the image).

use crate::error::{Error, Result};
use crate::types::Params;

/// Country assumed by the plate decoder when the caller supplies none
pub const DEFAULT_PLATE_COUNTRY: &str = "US";

/// Image source aliases accepted by the upload endpoints, in precedence order
pub const IMAGE_SOURCE_ALIASES: &[&str] = &["upload_url", "image", "imageUrl"];

/// True if the value is empty or whitespace-only
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Look up a parameter, treating blank values as absent
fn get_non_blank<'a>(params: &'a Params, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str).filter(|v| !is_blank(v))
}

/// Check that every required parameter is present and non-blank.
///
/// Names are checked in order and the first failure is returned; missing
/// parameters are never aggregated.
pub fn validate_required(params: &Params, required: &[&str]) -> Result<()> {
    for &name in required {
        if get_non_blank(params, name).is_none() {
            return Err(Error::missing_param(name));
        }
    }
    Ok(())
}

/// Default the plate decoder's `country` to `US` when absent or blank
pub fn apply_plate_defaults(params: &mut Params) {
    if get_non_blank(params, "country").is_none() {
        params.insert("country".to_string(), DEFAULT_PLATE_COUNTRY.to_string());
    }
}

/// Validate the plate decoder bag, including country-specific rules.
///
/// Expects [`apply_plate_defaults`] to have run. After the basic required
/// check on `plate` and `country`, Pakistani plates need both `state` and
/// `district` (checked independently, `state` first); every other country
/// needs `state` alone.
pub fn validate_plate_params(params: &Params) -> Result<()> {
    validate_required(params, &["plate", "country"])?;

    let country = params
        .get("country")
        .map(|c| c.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if country == "pk" || country == "pakistan" {
        if get_non_blank(params, "state").is_none() {
            return Err(Error::missing_param("state"));
        }
        if get_non_blank(params, "district").is_none() {
            return Err(Error::missing_param("district"));
        }
    } else if get_non_blank(params, "state").is_none() {
        return Err(Error::missing_param("state"));
    }

    Ok(())
}

/// Select the image source for the upload endpoints.
///
/// Returns the value of the first alias in [`IMAGE_SOURCE_ALIASES`] that is
/// present and non-blank. Fails only when all three are absent or blank; the
/// error names the primary alias.
pub fn select_image_source(params: &Params) -> Result<&str> {
    IMAGE_SOURCE_ALIASES
        .iter()
        .find_map(|&alias| get_non_blank(params, alias))
        .ok_or_else(|| Error::missing_param(IMAGE_SOURCE_ALIASES[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn missing_name(err: Error) -> String {
        match err {
            Error::MissingParameter { name } => name,
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_required_ok() {
        let bag = params(&[("vin", "WBAFR7C57CC811956")]);
        assert!(validate_required(&bag, &["vin"]).is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "spaces")]
    #[test_case("\t\n" ; "other whitespace")]
    fn test_validate_required_blank_value_fails(value: &str) {
        let bag = params(&[("vin", value)]);
        let err = validate_required(&bag, &["vin"]).unwrap_err();
        assert_eq!(missing_name(err), "vin");
    }

    #[test]
    fn test_validate_required_reports_first_missing_only() {
        let bag = params(&[("model", "Civic")]);
        let err = validate_required(&bag, &["year", "make", "model"]).unwrap_err();
        assert_eq!(missing_name(err), "year");
    }

    #[test]
    fn test_plate_defaults_fill_missing_country() {
        let mut bag = params(&[("plate", "7XER187")]);
        apply_plate_defaults(&mut bag);
        assert_eq!(bag.get("country").map(String::as_str), Some("US"));
    }

    #[test]
    fn test_plate_defaults_replace_blank_country() {
        let mut bag = params(&[("plate", "7XER187"), ("country", "  ")]);
        apply_plate_defaults(&mut bag);
        assert_eq!(bag.get("country").map(String::as_str), Some("US"));
    }

    #[test]
    fn test_plate_defaults_keep_explicit_country() {
        let mut bag = params(&[("plate", "AAA123"), ("country", "AU")]);
        apply_plate_defaults(&mut bag);
        assert_eq!(bag.get("country").map(String::as_str), Some("AU"));
    }

    #[test]
    fn test_plate_requires_state_for_us() {
        let bag = params(&[("plate", "7XER187"), ("country", "US")]);
        let err = validate_plate_params(&bag).unwrap_err();
        assert_eq!(missing_name(err), "state");

        let bag = params(&[("plate", "7XER187"), ("country", "US"), ("state", "CA")]);
        assert!(validate_plate_params(&bag).is_ok());
    }

    #[test_case("PK" ; "upper")]
    #[test_case("pk" ; "lower")]
    #[test_case(" Pakistan " ; "full name padded")]
    fn test_plate_pakistan_requires_state_and_district(country: &str) {
        let bag = params(&[("plate", "LEB-1234"), ("country", country)]);
        assert_eq!(missing_name(validate_plate_params(&bag).unwrap_err()), "state");

        let bag = params(&[
            ("plate", "LEB-1234"),
            ("country", country),
            ("state", "Punjab"),
        ]);
        assert_eq!(
            missing_name(validate_plate_params(&bag).unwrap_err()),
            "district"
        );

        let bag = params(&[
            ("plate", "LEB-1234"),
            ("country", country),
            ("state", "Punjab"),
            ("district", "Lahore"),
        ]);
        assert!(validate_plate_params(&bag).is_ok());
    }

    #[test]
    fn test_plate_missing_plate_checked_first() {
        let bag = params(&[("country", "US"), ("state", "CA")]);
        assert_eq!(missing_name(validate_plate_params(&bag).unwrap_err()), "plate");
    }

    #[test_case("upload_url" ; "primary alias")]
    #[test_case("image" ; "second alias")]
    #[test_case("imageUrl" ; "third alias")]
    fn test_image_source_single_alias(alias: &str) {
        let bag = params(&[(alias, "https://example.com/car.jpg")]);
        assert_eq!(
            select_image_source(&bag).unwrap(),
            "https://example.com/car.jpg"
        );
    }

    #[test]
    fn test_image_source_precedence() {
        let bag = params(&[
            ("imageUrl", "https://example.com/third.jpg"),
            ("image", "https://example.com/second.jpg"),
            ("upload_url", "https://example.com/first.jpg"),
        ]);
        assert_eq!(
            select_image_source(&bag).unwrap(),
            "https://example.com/first.jpg"
        );

        let bag = params(&[
            ("imageUrl", "https://example.com/third.jpg"),
            ("image", "https://example.com/second.jpg"),
        ]);
        assert_eq!(
            select_image_source(&bag).unwrap(),
            "https://example.com/second.jpg"
        );
    }

    #[test]
    fn test_image_source_blank_alias_falls_through() {
        let bag = params(&[
            ("upload_url", "  "),
            ("imageUrl", "https://example.com/third.jpg"),
        ]);
        assert_eq!(
            select_image_source(&bag).unwrap(),
            "https://example.com/third.jpg"
        );
    }

    #[test]
    fn test_image_source_all_missing_or_blank() {
        let err = select_image_source(&params(&[])).unwrap_err();
        assert_eq!(missing_name(err), "upload_url");

        let bag = params(&[("upload_url", ""), ("image", " "), ("imageUrl", "\t")]);
        let err = select_image_source(&bag).unwrap_err();
        assert_eq!(missing_name(err), "upload_url");
    }
}
