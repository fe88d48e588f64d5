//! NewTypes for values used when first connecting and authenticating
//! with the Bridge API.

use crate::errors::InvalidBridgeUrl;
use aliri_braid::braid;

/// A [BridgeUrl] is the base URL for a Bridge server, e.g.
/// `https://webservices.sagebridge.org/api/v1/`
#[braid(validator, serde)]
pub struct BridgeUrl(String);

impl aliri_braid::Validator for BridgeUrl {
    type Error = InvalidBridgeUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidBridgeUrl::Protocol(s.to_string()))
        } else if !s.ends_with('/') {
            Err(InvalidBridgeUrl::TrailingSlash(s.to_string()))
        } else {
            Ok(())
        }
    }
}
