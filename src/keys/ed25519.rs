//! Ed25519 signing (RFC 8032).

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::{Error, Result};

pub fn generate() -> (Vec<u8>, Vec<u8>) {
    let signing = SigningKey::generate(&mut OsRng);
    (signing.to_bytes().to_vec(), signing.verifying_key().to_bytes().to_vec())
}

pub fn derive_public(secret: &[u8]) -> Result<Vec<u8>> {
    let bytes: [u8; 32] = secret
        .try_into()
        .map_err(|_| Error::InvalidKey("Ed25519 private key must be 32 bytes".to_string()))?;
    let signing = SigningKey::from_bytes(&bytes);
    Ok(signing.verifying_key().to_bytes().to_vec())
}

pub fn sign(secret: &[u8], msg: &[u8]) -> Result<Vec<u8>> {
    let bytes: [u8; 32] = secret
        .try_into()
        .map_err(|_| Error::InvalidKey("Ed25519 private key must be 32 bytes".to_string()))?;
    let signing = SigningKey::from_bytes(&bytes);
    Ok(signing.sign(msg).to_bytes().to_vec())
}

pub fn verify(public: &[u8], signature: &[u8], msg: &[u8]) -> Result<bool> {
    let bytes: [u8; 32] = public
        .try_into()
        .map_err(|_| Error::InvalidKey("Ed25519 public key must be 32 bytes".to_string()))?;
    let verifying = VerifyingKey::from_bytes(&bytes)
        .map_err(|e| Error::InvalidKey(format!("invalid Ed25519 public key: {e}")))?;
    let sig_bytes: [u8; 64] = signature
        .try_into()
        .map_err(|_| Error::InvalidFormat("EdDSA signature must be 64 bytes".to_string()))?;
    Ok(verifying.verify(msg, &Signature::from_bytes(&sig_bytes)).is_ok())
}
