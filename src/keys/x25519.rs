//! X25519 key agreement (RFC 7748). Agreement-only: signing is rejected at
//! the algorithm gate before this module is reached.

use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::{Error, Result};

pub fn generate() -> (Vec<u8>, Vec<u8>) {
    let secret = StaticSecret::random_from_rng(OsRng);
    let public = PublicKey::from(&secret);
    (secret.to_bytes().to_vec(), public.as_bytes().to_vec())
}

pub fn derive_public(secret: &[u8]) -> Result<Vec<u8>> {
    let bytes: [u8; 32] = secret
        .try_into()
        .map_err(|_| Error::InvalidKey("X25519 private key must be 32 bytes".to_string()))?;
    let secret = StaticSecret::from(bytes);
    Ok(PublicKey::from(&secret).as_bytes().to_vec())
}
