//! # did:jwk
//!
//! The `did:jwk` method embeds a public JWK in the identifier:
//! `did:jwk:<base64url(JSON(jwk))>`. The embedded JWK is public-only: `kid`,
//! `key_ops`, and `d` are stripped before encoding.

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::{Error, Result};
use crate::jwk::PublicKeyJwk;
use crate::keys::Key;

/// Encode a key as a `did:jwk` identifier.
///
/// The encoding is deterministic for a given public key: `alg` and `use` are
/// always injected, so re-encoding an imported key yields a stable string.
///
/// # Errors
///
/// Returns an error if the key's public material cannot be serialized as a
/// JWK.
pub fn encode(key: &Key) -> Result<String> {
    let jwk = key.to_jwk()?.stripped();
    let json = serde_json::to_vec(&jwk)
        .map_err(|e| Error::InvalidFormat(format!("JWK serialization failed: {e}")))?;
    Ok(format!("did:jwk:{}", Base64UrlUnpadded::encode_string(&json)))
}

/// Decode a `did:jwk` identifier (any trailing `#fragment` is ignored) into a
/// public-only [`Key`].
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for a missing `did:jwk:` prefix or
/// malformed base64url/JSON, and [`Error::UnsupportedJwk`] for a JWK of an
/// unrecognized key family.
pub fn decode(did: &str) -> Result<Key> {
    let Some(encoded) = did.strip_prefix("did:jwk:") else {
        return Err(Error::InvalidFormat(format!("not a did:jwk: {did}")));
    };
    let encoded = encoded.split_once('#').map_or(encoded, |(id, _)| id);
    let bytes = Base64UrlUnpadded::decode_vec(encoded)
        .map_err(|e| Error::InvalidFormat(format!("invalid base64url: {e}")))?;
    decode_bytes(&bytes)
}

/// Decode the raw JSON payload of a `did:jwk` identifier. Also the target of
/// the `jwk_jcs-pub` multicodec in `did:key` decoding.
pub(crate) fn decode_bytes(bytes: &[u8]) -> Result<Key> {
    let jwk: PublicKeyJwk = serde_json::from_slice(bytes)
        .map_err(|e| Error::InvalidFormat(format!("invalid JWK JSON: {e}")))?;
    if jwk.kty != "RSA" && jwk.crv.is_none() {
        return Err(Error::UnsupportedJwk(format!("JWK has no crv (kty: {})", jwk.kty)));
    }
    Key::from_jwk(&jwk)
}
