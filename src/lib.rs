//! # DID Keyring
//!
//! Polymorphic cryptographic keys for decentralized identifiers.
//!
//! One [`Key`] type fronts five algorithm families (Ed25519, X25519,
//! Secp256k1, Secp256r1, RSA) and converts between the textual and binary
//! representations used in DID ecosystems: raw hex, JWK, `did:key`,
//! `did:jwk`, and `did:web` DID Documents.
//!
//! ```rust
//! use did_keyring::{Algorithm, Key, KeyType};
//!
//! # fn main() -> did_keyring::Result<()> {
//! let key = Key::generate(KeyType::Ed25519)?;
//! let signature = key.sign(Algorithm::EdDsa, b"hello")?;
//! assert!(key.verify(Algorithm::EdDsa, &signature, b"hello")?);
//!
//! // the same key, three identifiers
//! let did_key = did_keyring::did::key::encode(&key);
//! let did_jwk = did_keyring::did::jwk::encode(&key)?;
//! let jwk = key.to_jwk()?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod did;
mod error;
mod jwk;
mod keys;
pub mod provider;
mod resolve;

pub use self::error::{Error, Result};
pub use self::jwk::PublicKeyJwk;
pub use self::keys::{Algorithm, Key, KeyType, ManagedKey};
pub use self::provider::{DidResolver, HttpResolver};
pub use self::resolve::{key_reference, resolve};
