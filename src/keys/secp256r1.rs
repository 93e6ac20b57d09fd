//! ECDSA over secp256r1 / P-256 (ES256).
//!
//! Signatures are deterministic (RFC 6979), 64 bytes in `r ‖ s` compact form.

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, FieldBytes, PublicKey};
use rand::rngs::OsRng;

use crate::error::{Error, Result};

pub fn generate() -> (Vec<u8>, Vec<u8>) {
    let signing = SigningKey::random(&mut OsRng);
    let public = signing.verifying_key().to_encoded_point(true);
    (signing.to_bytes().to_vec(), public.as_bytes().to_vec())
}

pub fn derive_public(secret: &[u8]) -> Result<Vec<u8>> {
    let signing = SigningKey::from_slice(secret)
        .map_err(|e| Error::InvalidKey(format!("invalid secp256r1 private key: {e}")))?;
    Ok(signing.verifying_key().to_encoded_point(true).as_bytes().to_vec())
}

pub fn sign(secret: &[u8], msg: &[u8]) -> Result<Vec<u8>> {
    let signing = SigningKey::from_slice(secret)
        .map_err(|e| Error::InvalidKey(format!("invalid secp256r1 private key: {e}")))?;
    let sig: Signature = signing.sign(msg);
    // always emit low-S form
    let sig = sig.normalize_s().unwrap_or(sig);
    Ok(sig.to_bytes().to_vec())
}

pub fn verify(public: &[u8], signature: &[u8], msg: &[u8]) -> Result<bool> {
    let verifying = VerifyingKey::from_sec1_bytes(public)
        .map_err(|e| Error::InvalidKey(format!("invalid secp256r1 public key: {e}")))?;
    if signature.len() != 64 {
        return Err(Error::InvalidFormat("ES256 signature must be 64 bytes".to_string()));
    }
    let sig = Signature::from_slice(signature)
        .map_err(|e| Error::InvalidFormat(format!("malformed ES256 signature: {e}")))?;
    Ok(verifying.verify(msg, &sig).is_ok())
}

/// Expand a compressed point into its 32-byte affine coordinates.
pub fn uncompressed_coordinates(public: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let point = PublicKey::from_sec1_bytes(public)
        .map_err(|e| Error::InvalidKey(format!("invalid secp256r1 public key: {e}")))?
        .to_encoded_point(false);
    let x = point
        .x()
        .ok_or_else(|| Error::InvalidKey("secp256r1 point has no x coordinate".to_string()))?;
    let y = point
        .y()
        .ok_or_else(|| Error::InvalidKey("secp256r1 point has no y coordinate".to_string()))?;
    Ok((x.to_vec(), y.to_vec()))
}

/// Compress 32-byte affine coordinates into a 33-byte SEC1 point.
pub fn compress(x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
    if x.len() != 32 || y.len() != 32 {
        return Err(Error::InvalidKey(
            "secp256r1 coordinates must be 32 bytes".to_string(),
        ));
    }
    let point = EncodedPoint::from_affine_coordinates(
        FieldBytes::from_slice(x),
        FieldBytes::from_slice(y),
        true,
    );
    let Some(public) = Option::<PublicKey>::from(PublicKey::from_encoded_point(&point)) else {
        return Err(Error::InvalidKey("coordinates are not on secp256r1".to_string()));
    };
    Ok(public.to_encoded_point(true).as_bytes().to_vec())
}
