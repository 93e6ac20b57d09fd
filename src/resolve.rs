//! # Resolution
//!
//! Top-level dispatch from any supported DID string to a [`Key`]. Only
//! `did:web` touches the network; the other methods decode inline.

use crate::did::{self, Method};
use crate::error::Result;
use crate::keys::Key;
use crate::provider::DidResolver;

/// Resolve a DID to a public-only [`Key`].
///
/// Dispatches on the method prefix: `did:key` and `did:jwk` decode the
/// identifier itself; `did:web` fetches the DID Document through `resolver`.
///
/// # Errors
///
/// Returns [`crate::Error::Unresolvable`] for an unsupported method prefix,
/// or the underlying convertor's error.
pub async fn resolve(identifier: &str, resolver: &impl DidResolver) -> Result<Key> {
    let method = Method::of(identifier)?;
    tracing::trace!("resolving {identifier} as did:{method}");
    match method {
        Method::Key => did::key::decode(identifier),
        Method::Jwk => did::jwk::decode(identifier),
        Method::Web => did::web::resolve(identifier, resolver).await,
    }
}

/// The fragment identifier a verification method uses for this DID.
///
/// `did:key` references the key by its multibase value; `did:jwk` and
/// `did:web` use the fixed `0` convention.
///
/// # Errors
///
/// Returns [`crate::Error::Unresolvable`] for an unsupported method prefix.
pub fn key_reference(identifier: &str) -> Result<String> {
    match Method::of(identifier)? {
        Method::Key => {
            let body = identifier.strip_prefix("did:key:").unwrap_or(identifier);
            let body = body.split_once('#').map_or(body, |(id, _)| id);
            Ok(body.to_string())
        }
        Method::Jwk | Method::Web => Ok("0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_follows_method_convention() {
        assert_eq!(
            key_reference("did:key:z6Mkkf9RiKeaAFaQzQGT2zfqqwCYYbPTNhQvyGXjKJ84kW88").unwrap(),
            "z6Mkkf9RiKeaAFaQzQGT2zfqqwCYYbPTNhQvyGXjKJ84kW88"
        );
        assert_eq!(key_reference("did:jwk:eyJrdHki").unwrap(), "0");
        assert_eq!(key_reference("did:web:example.com").unwrap(), "0");
        assert!(key_reference("did:ion:abc").is_err());
    }
}
