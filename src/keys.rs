//! # Keys
//!
//! A polymorphic asymmetric key. Every supported algorithm family sits behind
//! the same [`Key`] type: Ed25519 and X25519 over Curve25519, ECDSA over
//! secp256k1 and secp256r1 (P-256), and RSASSA-PKCS1-v1.5.
//!
//! A key is either public-only or complete (public and private material).
//! Setting private material always derives the public key at the same moment,
//! so a private-without-public state cannot be observed. Public key bytes are
//! held in compressed form for the EC curves (33 bytes), raw 32 bytes for the
//! Curve25519 families, and SPKI DER for RSA. Private key buffers are wiped
//! on drop.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::core;
use crate::error::{Error, Result};

mod ed25519;
pub(crate) mod rsa;
pub(crate) mod secp256k1;
pub(crate) mod secp256r1;
mod x25519;

/// Algorithm families supported by this crate.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// EdDSA signing key over Curve25519.
    #[default]
    Ed25519,

    /// Key agreement key over Curve25519. Not usable for signing.
    X25519,

    /// ECDSA signing key over secp256k1.
    Secp256k1,

    /// ECDSA signing key over secp256r1 (P-256).
    Secp256r1,

    /// RSASSA-PKCS1-v1.5 signing key.
    #[serde(rename = "RSA")]
    Rsa,
}

impl KeyType {
    /// The multicodec code identifying this key type in `did:key` encoding.
    #[must_use]
    pub const fn codec(self) -> u64 {
        match self {
            Self::Ed25519 => 0xed,
            Self::X25519 => 0xec,
            Self::Secp256k1 => 0xe7,
            Self::Secp256r1 => 0x1200,
            Self::Rsa => 0x1205,
        }
    }

    /// The signing algorithms usable with this key type. Empty for X25519,
    /// which is agreement-only.
    #[must_use]
    pub const fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Ed25519 => &[Algorithm::EdDsa, Algorithm::Ed25519],
            Self::X25519 => &[],
            Self::Secp256k1 => &[Algorithm::Es256K, Algorithm::Es256KR],
            Self::Secp256r1 => &[Algorithm::Es256],
            Self::Rsa => &[Algorithm::Rs256, Algorithm::Rs512],
        }
    }

    /// The algorithm advertised in a JWK when the caller does not choose one.
    #[must_use]
    pub const fn default_algorithm(self) -> Option<Algorithm> {
        match self {
            Self::Ed25519 => Some(Algorithm::EdDsa),
            Self::X25519 => None,
            Self::Secp256k1 => Some(Algorithm::Es256K),
            Self::Secp256r1 => Some(Algorithm::Es256),
            Self::Rsa => Some(Algorithm::Rs256),
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::X25519 => write!(f, "X25519"),
            Self::Secp256k1 => write!(f, "Secp256k1"),
            Self::Secp256r1 => write!(f, "Secp256r1"),
            Self::Rsa => write!(f, "RSA"),
        }
    }
}

impl FromStr for KeyType {
    type Err = Error;

    /// Parse a key type name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKeyType`] for unrecognized names.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ed25519" => Ok(Self::Ed25519),
            "x25519" => Ok(Self::X25519),
            "secp256k1" => Ok(Self::Secp256k1),
            "secp256r1" => Ok(Self::Secp256r1),
            "rsa" => Ok(Self::Rsa),
            _ => Err(Error::UnsupportedKeyType(s.to_string())),
        }
    }
}

/// Signing and verification algorithm identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// EdDSA (RFC 8032) over Ed25519.
    EdDsa,

    /// Alias for [`Self::EdDsa`] carried for interop with callers that name
    /// the curve rather than the scheme.
    Ed25519,

    /// ECDSA over secp256k1 with SHA-256, 64-byte compact signature.
    Es256K,

    /// [`Self::Es256K`] with a trailing recovery byte. The recovery id is
    /// carried for downstream consumers only; no recovery is performed here.
    Es256KR,

    /// ECDSA over P-256 with SHA-256, 64-byte compact signature.
    Es256,

    /// RSASSA-PKCS1-v1.5 with SHA-256.
    Rs256,

    /// RSASSA-PKCS1-v1.5 with SHA-512.
    Rs512,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdDsa => write!(f, "EdDSA"),
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::Es256K => write!(f, "ES256K"),
            Self::Es256KR => write!(f, "ES256K-R"),
            Self::Es256 => write!(f, "ES256"),
            Self::Rs256 => write!(f, "RS256"),
            Self::Rs512 => write!(f, "RS512"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EdDSA" => Ok(Self::EdDsa),
            "Ed25519" => Ok(Self::Ed25519),
            "ES256K" => Ok(Self::Es256K),
            "ES256K-R" => Ok(Self::Es256KR),
            "ES256" => Ok(Self::Es256),
            "RS256" => Ok(Self::Rs256),
            "RS512" => Ok(Self::Rs512),
            _ => Err(Error::InvalidFormat(format!("unknown algorithm: {s}"))),
        }
    }
}

/// An externally managed key record, as issued by a KMS.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedKey {
    /// Key type name. Matched case-insensitively.
    #[serde(rename = "type")]
    pub key_type: String,

    /// Public key as hex.
    pub public_key_hex: String,

    /// Private key as hex, when the KMS releases it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_hex: Option<String>,
}

/// An asymmetric key of one of the supported [`KeyType`] families.
#[derive(Clone)]
pub struct Key {
    key_type: KeyType,
    public: Vec<u8>,
    secret: Option<Zeroizing<Vec<u8>>>,
}

impl Key {
    /// Generate a fresh key with random private material.
    ///
    /// # Errors
    ///
    /// Fails only on underlying RNG or library failure.
    pub fn generate(key_type: KeyType) -> Result<Self> {
        let (secret, public) = match key_type {
            KeyType::Ed25519 => ed25519::generate(),
            KeyType::X25519 => x25519::generate(),
            KeyType::Secp256k1 => secp256k1::generate(),
            KeyType::Secp256r1 => secp256r1::generate(),
            KeyType::Rsa => rsa::generate()?,
        };
        Ok(Self {
            key_type,
            public,
            secret: Some(Zeroizing::new(secret)),
        })
    }

    /// Import a key from raw private key bytes, deriving the public key.
    ///
    /// Curve25519-family input longer than 32 bytes is truncated to the first
    /// 32, accommodating the seed-then-pubkey concatenation convention.
    /// RSA input is a DER-encoded PKCS#8 private key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the bytes are not valid private key
    /// material for the key type.
    pub fn from_private_bytes(key_type: KeyType, bytes: &[u8]) -> Result<Self> {
        let normalized = match key_type {
            KeyType::Ed25519 | KeyType::X25519 if bytes.len() > 32 => &bytes[..32],
            _ => bytes,
        };
        let public = match key_type {
            KeyType::Ed25519 => ed25519::derive_public(normalized)?,
            KeyType::X25519 => x25519::derive_public(normalized)?,
            KeyType::Secp256k1 => secp256k1::derive_public(normalized)?,
            KeyType::Secp256r1 => secp256r1::derive_public(normalized)?,
            KeyType::Rsa => rsa::derive_public(normalized)?,
        };
        Ok(Self {
            key_type,
            public,
            secret: Some(Zeroizing::new(normalized.to_vec())),
        })
    }

    /// Import a public-only key from raw public key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the bytes fail the curve-specific
    /// shape check (32 bytes for the Curve25519 families, 33-byte compressed
    /// point for the secp curves, parseable SPKI DER for RSA).
    pub fn from_public_bytes(key_type: KeyType, bytes: &[u8]) -> Result<Self> {
        match key_type {
            KeyType::Ed25519 | KeyType::X25519 => {
                if bytes.len() != 32 {
                    return Err(Error::InvalidKey(format!(
                        "{key_type} public key must be 32 bytes, got {}",
                        bytes.len()
                    )));
                }
            }
            KeyType::Secp256k1 | KeyType::Secp256r1 => {
                if bytes.len() != 33 || !matches!(bytes[0], 0x02 | 0x03) {
                    return Err(Error::InvalidKey(format!(
                        "{key_type} public key must be a 33-byte compressed point"
                    )));
                }
            }
            KeyType::Rsa => rsa::validate_public(bytes)?,
        }
        Ok(Self {
            key_type,
            public: bytes.to_vec(),
            secret: None,
        })
    }

    /// Import a key from a hex-encoded private key.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex is malformed or the decoded bytes are not
    /// valid private key material.
    pub fn from_private_hex(key_type: KeyType, hex: &str) -> Result<Self> {
        Self::from_private_bytes(key_type, &core::hex_to_bytes(hex)?)
    }

    /// Import a public-only key from a hex-encoded public key.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex is malformed or the decoded bytes fail the
    /// shape check.
    pub fn from_public_hex(key_type: KeyType, hex: &str) -> Result<Self> {
        Self::from_public_bytes(key_type, &core::hex_to_bytes(hex)?)
    }

    /// Construct a key from a type name, optionally importing private
    /// material from hex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKeyType`] for unrecognized names, or an
    /// import error for bad private hex. With no private hex a fresh key is
    /// generated.
    pub fn from_type(name: &str, private_hex: Option<&str>) -> Result<Self> {
        let key_type = KeyType::from_str(name)?;
        match private_hex {
            Some(hex) => Self::from_private_hex(key_type, hex),
            None => Self::generate(key_type),
        }
    }

    /// Construct a key from an externally managed key record.
    ///
    /// Private material is preferred when present (the public key is
    /// re-derived from it); otherwise the record's public hex is used.
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized types or malformed hex.
    pub fn from_managed(record: &ManagedKey) -> Result<Self> {
        let key_type = KeyType::from_str(&record.key_type)?;
        match &record.private_key_hex {
            Some(hex) => Self::from_private_hex(key_type, hex),
            None => Self::from_public_hex(key_type, &record.public_key_hex),
        }
    }

    /// The key's algorithm family.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The public key bytes (compressed form for EC curves, SPKI DER for
    /// RSA).
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public
    }

    /// The public key as hex.
    #[must_use]
    pub fn public_key_hex(&self) -> String {
        core::bytes_to_hex(&self.public)
    }

    /// The private key bytes, when present.
    #[must_use]
    pub fn private_key(&self) -> Option<&[u8]> {
        self.secret.as_deref().map(Vec::as_slice)
    }

    /// The private key as hex, when present.
    #[must_use]
    pub fn private_key_hex(&self) -> Option<String> {
        self.secret.as_deref().map(|s| core::bytes_to_hex(s))
    }

    /// `true` if the key holds private material.
    #[must_use]
    pub const fn has_private_key(&self) -> bool {
        self.secret.is_some()
    }

    /// The signing algorithms usable with this key.
    #[must_use]
    pub const fn algorithms(&self) -> &'static [Algorithm] {
        self.key_type.algorithms()
    }

    /// Sign a message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] if `algorithm` is outside the
    /// key's algorithm set (always, for X25519), or [`Error::InvalidKey`] if
    /// the key holds no private material.
    pub fn sign(&self, algorithm: Algorithm, msg: &[u8]) -> Result<Vec<u8>> {
        self.check_algorithm(algorithm)?;
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| Error::InvalidKey("no private key to sign with".to_string()))?;
        match self.key_type {
            KeyType::Ed25519 => ed25519::sign(secret, msg),
            KeyType::Secp256k1 => secp256k1::sign(secret, algorithm, msg),
            KeyType::Secp256r1 => secp256r1::sign(secret, msg),
            KeyType::Rsa => rsa::sign(secret, algorithm, msg),
            // unreachable behind the algorithm gate
            KeyType::X25519 => Err(Error::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
                key_type: self.key_type.to_string(),
            }),
        }
    }

    /// Verify a signature over a message.
    ///
    /// Returns `Ok(false)` for a well-formed but cryptographically invalid
    /// signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] for an algorithm outside the
    /// key's set, or [`Error::InvalidFormat`] for a malformed signature
    /// encoding (wrong length, bad point).
    pub fn verify(&self, algorithm: Algorithm, signature: &[u8], msg: &[u8]) -> Result<bool> {
        self.check_algorithm(algorithm)?;
        match self.key_type {
            KeyType::Ed25519 => ed25519::verify(&self.public, signature, msg),
            KeyType::Secp256k1 => secp256k1::verify(&self.public, algorithm, signature, msg),
            KeyType::Secp256r1 => secp256r1::verify(&self.public, signature, msg),
            KeyType::Rsa => rsa::verify(&self.public, algorithm, signature, msg),
            KeyType::X25519 => Err(Error::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
                key_type: self.key_type.to_string(),
            }),
        }
    }

    fn check_algorithm(&self, algorithm: Algorithm) -> Result<()> {
        if self.key_type.algorithms().contains(&algorithm) {
            Ok(())
        } else {
            Err(Error::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
                key_type: self.key_type.to_string(),
            })
        }
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("key_type", &self.key_type)
            .field("public", &self.public_key_hex())
            .field("secret", if self.secret.is_some() { &"[redacted]" } else { &"None" })
            .finish()
    }
}
