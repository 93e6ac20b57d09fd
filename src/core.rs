//! # Core
//!
//! Serde helpers shared by the DID document types, plus the hex conventions
//! used for raw key import and export.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decode a hex string into bytes.
///
/// Accepts and strips an optional `0x` prefix, and left-zero-pads odd-length
/// input to an even number of digits.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the input contains non-hex characters.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let stripped = hex.strip_prefix("0x").unwrap_or(hex);
    let padded;
    let normalized = if stripped.len() % 2 == 0 {
        stripped
    } else {
        padded = format!("0{stripped}");
        &padded
    };
    hex::decode(normalized).map_err(|e| Error::InvalidFormat(format!("invalid hex: {e}")))
}

/// Encode bytes as a lowercase hex string.
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// `Kind` allows serde to serialize/deserialize a string or an object.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Kind<T> {
    /// Simple string value
    String(String),

    /// Complex object value
    Object(T),
}

impl<T: Default> Default for Kind<T> {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl<T> From<String> for Kind<T> {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T> Kind<T> {
    /// The string value, if the `Kind` holds one.
    pub const fn as_string(&self) -> Option<&String> {
        match self {
            Self::String(s) => Some(s),
            Self::Object(_) => None,
        }
    }
}

/// `OneMany` allows serde to serialize/deserialize a single object or a set
/// of objects.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneMany<T> {
    /// Single object
    One(T),

    /// Set of objects
    Many(Vec<T>),
}

impl<T: Default> Default for OneMany<T> {
    fn default() -> Self {
        Self::One(T::default())
    }
}

impl<T: Clone + PartialEq> OneMany<T> {
    /// Adds an object. A single object is converted to a set.
    pub fn add(&mut self, item: T) {
        match self {
            Self::One(one) => {
                *self = Self::Many(vec![one.clone(), item]);
            }
            Self::Many(many) => {
                many.push(item);
            }
        }
    }

    /// Returns the number of objects held.
    pub const fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(many) => many.len(),
        }
    }

    /// Returns `true` if the `OneMany` is an empty `Many`.
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::One(_) => false,
            Self::Many(many) => many.is_empty(),
        }
    }
}
