//! # Errors
//!
//! Typed errors shared by the key variants and format convertors. Signature
//! verification failure is not an error: `verify` returns `Ok(false)` for a
//! well-formed but cryptographically invalid signature, and only malformed
//! input surfaces here.

use thiserror::Error;

/// Result type for key and convertor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Public error type for key construction, conversion and resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// The named algorithm family is not handled by this crate.
    #[error("key type not supported: {0}")]
    UnsupportedKeyType(String),

    /// A `did:key` multicodec prefix this crate does not (or will not)
    /// decode.
    #[error("multicodec not supported: {0}")]
    UnsupportedCodec(String),

    /// A JWK `kty`/`crv` combination this crate does not handle.
    #[error("JWK not supported: {0}")]
    UnsupportedJwk(String),

    /// A signing or verification algorithm outside the key's algorithm set.
    #[error("algorithm {algorithm} not supported on key type {key_type}")]
    UnsupportedAlgorithm {
        /// The requested algorithm.
        algorithm: String,
        /// The key type the request was made against.
        key_type: String,
    },

    /// Input failed a prefix, shape or encoding check.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Key material is structurally invalid (wrong length, bad point, bad
    /// DER).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The identifier does not use a resolvable scheme.
    #[error("unresolvable identifier: {0}")]
    Unresolvable(String),

    /// A `did:web` document could not be fetched or parsed. Retry policy is
    /// owned by the caller.
    #[error("resolution failure: {0}")]
    Resolution(String),

    /// A DID document contains no verification method this crate can read.
    #[error("no key found in DID document")]
    NoKeyFound,
}
