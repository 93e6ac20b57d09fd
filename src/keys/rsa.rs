//! RSASSA-PKCS1-v1.5 signing (RS256, RS512).
//!
//! Private material is a DER-encoded PKCS#8 document; the public key is a
//! DER-encoded SPKI document. Generated keys are 2048-bit.

use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};
use crate::keys::Algorithm;

const BITS: usize = 2048;

pub fn generate() -> Result<(Vec<u8>, Vec<u8>)> {
    let private = RsaPrivateKey::new(&mut OsRng, BITS)
        .map_err(|e| Error::InvalidKey(format!("RSA key generation failed: {e}")))?;
    let secret = private
        .to_pkcs8_der()
        .map_err(|e| Error::InvalidKey(format!("RSA PKCS#8 encoding failed: {e}")))?;
    let public = spki_der(&private.to_public_key())?;
    Ok((secret.as_bytes().to_vec(), public))
}

pub fn derive_public(secret: &[u8]) -> Result<Vec<u8>> {
    spki_der(&parse_private(secret)?.to_public_key())
}

pub fn validate_public(bytes: &[u8]) -> Result<()> {
    parse_public(bytes).map(|_| ())
}

pub fn sign(secret: &[u8], algorithm: Algorithm, msg: &[u8]) -> Result<Vec<u8>> {
    let private = parse_private(secret)?;
    let (scheme, digest) = scheme_and_digest(algorithm, msg);
    private
        .sign(scheme, &digest)
        .map_err(|e| Error::InvalidKey(format!("RSA signing failed: {e}")))
}

pub fn verify(public: &[u8], algorithm: Algorithm, signature: &[u8], msg: &[u8]) -> Result<bool> {
    let public = parse_public(public)?;
    let (scheme, digest) = scheme_and_digest(algorithm, msg);
    Ok(public.verify(scheme, &digest, signature).is_ok())
}

/// The public key's `(n, e)` components as big-endian bytes.
pub fn public_components(public: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let public = parse_public(public)?;
    Ok((public.n().to_bytes_be(), public.e().to_bytes_be()))
}

/// Rebuild an SPKI DER public key from big-endian `(n, e)` components.
pub fn public_from_components(n: &[u8], e: &[u8]) -> Result<Vec<u8>> {
    let public = RsaPublicKey::new(BigUint::from_bytes_be(n), BigUint::from_bytes_be(e))
        .map_err(|e| Error::InvalidKey(format!("invalid RSA public key components: {e}")))?;
    spki_der(&public)
}

fn scheme_and_digest(algorithm: Algorithm, msg: &[u8]) -> (Pkcs1v15Sign, Vec<u8>) {
    match algorithm {
        Algorithm::Rs512 => (Pkcs1v15Sign::new::<Sha512>(), Sha512::digest(msg).to_vec()),
        _ => (Pkcs1v15Sign::new::<Sha256>(), Sha256::digest(msg).to_vec()),
    }
}

fn parse_private(secret: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(secret)
        .map_err(|e| Error::InvalidKey(format!("invalid RSA PKCS#8 private key: {e}")))
}

fn parse_public(bytes: &[u8]) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(bytes)
        .map_err(|e| Error::InvalidKey(format!("invalid RSA SPKI public key: {e}")))
}

fn spki_der(public: &RsaPublicKey) -> Result<Vec<u8>> {
    Ok(public
        .to_public_key_der()
        .map_err(|e| Error::InvalidKey(format!("RSA SPKI encoding failed: {e}")))?
        .into_vec())
}
