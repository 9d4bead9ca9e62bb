//! Wire format of the skip catalog endpoint.
//!
//! `GET {base}/api/skips/by-location?postcode={postcode}&area={area}` returns a
//! JSON array of skip records in display order.

use crate::error::FetchError;
use crate::model::{Location, SkipOption};

/// Path appended to the configured base URL
pub const CATALOG_PATH: &str = "/api/skips/by-location";

/// Query parameters for a location-scoped catalog request
pub fn query_pairs(location: &Location) -> [(&'static str, &str); 2] {
    [
        ("postcode", location.postcode.as_str()),
        ("area", location.area.as_str()),
    ]
}

/// Parse a catalog response body, preserving server order.
pub fn parse_catalog(body: &str) -> Result<Vec<SkipOption>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
