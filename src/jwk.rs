//! # JSON Web Keys
//!
//! Serialization of a [`Key`]'s public material as a JWK (RFC 7517) and the
//! inverse. EC keys are expanded to uncompressed `x`/`y` coordinates on the
//! way out and re-compressed on the way in. RSA keys carry `n`/`e`. Private
//! material is never embedded.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::keys::{self, Key, KeyType};

/// A public JWK as produced and consumed by this crate.
///
/// Field order is significant when encoding a `did:jwk` identifier, so the
/// struct keeps the order stable rather than sorting keys.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicKeyJwk {
    /// Key type: `OKP`, `EC`, or `RSA`.
    pub kty: String,

    /// Curve name for OKP and EC keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,

    /// Intended use: `sig` or `enc`.
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// Algorithm intended for use with the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    /// Base64url-encoded x coordinate (EC) or raw public key (OKP).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// Base64url-encoded y coordinate (EC only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    /// Base64url-encoded RSA modulus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// Base64url-encoded RSA public exponent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,

    /// Key identifier. By convention, the hex of the compressed public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// Permitted operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_ops: Option<Vec<String>>,

    /// Private scalar or exponent. Accepted on import, never produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl PublicKeyJwk {
    /// A copy with `kid`, `key_ops`, and `d` removed, as required by the
    /// public-only `did:jwk` encoding.
    #[must_use]
    pub fn stripped(&self) -> Self {
        Self {
            kid: None,
            key_ops: None,
            d: None,
            ..self.clone()
        }
    }
}

impl Key {
    /// Serialize the public key as a JWK.
    ///
    /// The JWK always carries `use` and, for signing keys, the key's default
    /// `alg`. `kid` is set to the hex of the public key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the public key bytes fail to parse
    /// (possible only for out-of-band constructed keys).
    pub fn to_jwk(&self) -> Result<PublicKeyJwk> {
        let mut jwk = match self.key_type() {
            KeyType::Ed25519 => PublicKeyJwk {
                kty: "OKP".to_string(),
                crv: Some("Ed25519".to_string()),
                use_: Some("sig".to_string()),
                x: Some(Base64UrlUnpadded::encode_string(self.public_key())),
                ..PublicKeyJwk::default()
            },
            KeyType::X25519 => PublicKeyJwk {
                kty: "OKP".to_string(),
                crv: Some("X25519".to_string()),
                use_: Some("enc".to_string()),
                x: Some(Base64UrlUnpadded::encode_string(self.public_key())),
                key_ops: Some(vec!["encrypt".to_string()]),
                ..PublicKeyJwk::default()
            },
            KeyType::Secp256k1 => {
                let (x, y) = keys::secp256k1::uncompressed_coordinates(self.public_key())?;
                PublicKeyJwk {
                    kty: "EC".to_string(),
                    crv: Some("secp256k1".to_string()),
                    use_: Some("sig".to_string()),
                    x: Some(Base64UrlUnpadded::encode_string(&x)),
                    y: Some(Base64UrlUnpadded::encode_string(&y)),
                    ..PublicKeyJwk::default()
                }
            }
            KeyType::Secp256r1 => {
                let (x, y) = keys::secp256r1::uncompressed_coordinates(self.public_key())?;
                PublicKeyJwk {
                    kty: "EC".to_string(),
                    crv: Some("P-256".to_string()),
                    use_: Some("sig".to_string()),
                    x: Some(Base64UrlUnpadded::encode_string(&x)),
                    y: Some(Base64UrlUnpadded::encode_string(&y)),
                    ..PublicKeyJwk::default()
                }
            }
            KeyType::Rsa => {
                let (n, e) = keys::rsa::public_components(self.public_key())?;
                PublicKeyJwk {
                    kty: "RSA".to_string(),
                    use_: Some("sig".to_string()),
                    n: Some(Base64UrlUnpadded::encode_string(&n)),
                    e: Some(Base64UrlUnpadded::encode_string(&e)),
                    key_ops: Some(vec!["verify".to_string()]),
                    ..PublicKeyJwk::default()
                }
            }
        };
        jwk.alg = self.key_type().default_algorithm().map(|a| a.to_string());
        jwk.kid = Some(self.public_key_hex());
        Ok(jwk)
    }

    /// Import a public-only key from a JWK.
    ///
    /// The key family is selected from the JWK's (`kty`, `crv`) pair. EC
    /// coordinates are re-compressed; RSA keys are rebuilt from `n`/`e`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedJwk`] for an unrecognized (`kty`, `crv`)
    /// pair, or [`Error::InvalidKey`]/[`Error::InvalidFormat`] for missing or
    /// malformed coordinate fields.
    pub fn from_jwk(jwk: &PublicKeyJwk) -> Result<Self> {
        let crv = jwk.crv.as_deref().unwrap_or_default();
        match (jwk.kty.as_str(), crv) {
            ("OKP", "Ed25519") => {
                Self::from_public_bytes(KeyType::Ed25519, &decode_field(jwk, "x")?)
            }
            ("OKP", "X25519") => {
                Self::from_public_bytes(KeyType::X25519, &decode_field(jwk, "x")?)
            }
            ("EC", "secp256k1") => {
                let x = decode_field(jwk, "x")?;
                let y = decode_field(jwk, "y")?;
                let public = keys::secp256k1::compress(&x, &y)?;
                Self::from_public_bytes(KeyType::Secp256k1, &public)
            }
            ("EC", "P-256") => {
                let x = decode_field(jwk, "x")?;
                let y = decode_field(jwk, "y")?;
                let public = keys::secp256r1::compress(&x, &y)?;
                Self::from_public_bytes(KeyType::Secp256r1, &public)
            }
            ("RSA", _) => {
                let n = decode_field(jwk, "n")?;
                let e = decode_field(jwk, "e")?;
                let public = keys::rsa::public_from_components(&n, &e)?;
                Self::from_public_bytes(KeyType::Rsa, &public)
            }
            (kty, crv) => Err(Error::UnsupportedJwk(format!("kty: {kty}, crv: {crv}"))),
        }
    }
}

fn decode_field(jwk: &PublicKeyJwk, name: &str) -> Result<Vec<u8>> {
    let value = match name {
        "x" => &jwk.x,
        "y" => &jwk.y,
        "n" => &jwk.n,
        "e" => &jwk.e,
        _ => &None,
    };
    let value = value
        .as_deref()
        .ok_or_else(|| Error::InvalidKey(format!("JWK is missing `{name}`")))?;
    Base64UrlUnpadded::decode_vec(value)
        .map_err(|e| Error::InvalidFormat(format!("JWK `{name}` is not base64url: {e}")))
}
