//! # DID Convertors
//!
//! Bidirectional convertors between a [`crate::Key`] and the supported DID
//! methods: `did:key`, `did:jwk`, and `did:web`. Each method module exposes
//! `encode`/`decode` (or `resolve` for network-backed methods); the
//! [`document`] module builds and consumes W3C DID Documents.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod document;
pub mod jwk;
pub mod key;
pub mod web;

/// DID methods supported by this crate.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Method {
    /// The `did:key` method: the key itself, multibase-encoded.
    #[default]
    #[serde(rename = "key")]
    Key,

    /// The `did:jwk` method: a public JWK, base64url-encoded.
    #[serde(rename = "jwk")]
    Jwk,

    /// The `did:web` method: a DID Document hosted on a web domain.
    #[serde(rename = "web")]
    Web,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Jwk => write!(f, "jwk"),
            Self::Web => write!(f, "web"),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "key" => Ok(Self::Key),
            "jwk" => Ok(Self::Jwk),
            "web" => Ok(Self::Web),
            _ => Err(Error::Unresolvable(format!("unsupported DID method: {s}"))),
        }
    }
}

impl Method {
    /// Determine the method of a DID string from its prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unresolvable`] if the string is not a DID of a
    /// supported method.
    pub fn of(did: &str) -> Result<Self> {
        let rest = did
            .strip_prefix("did:")
            .ok_or_else(|| Error::Unresolvable(format!("not a DID: {did}")))?;
        let method = rest.split(':').next().unwrap_or_default();
        method.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_from_prefix() {
        assert_eq!(Method::of("did:key:z6Mk").unwrap(), Method::Key);
        assert_eq!(Method::of("did:jwk:eyJr").unwrap(), Method::Jwk);
        assert_eq!(Method::of("did:web:example.com").unwrap(), Method::Web);
        assert!(Method::of("did:ion:abc").is_err());
        assert!(Method::of("urn:uuid:abc").is_err());
    }
}
