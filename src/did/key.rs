//! # did:key
//!
//! The `did:key` method encodes the public key directly in the identifier:
//! `did:key:z<base58btc(varint(multicodec) ‖ publicKeyBytes)>`.

use multibase::Base;

use crate::did::jwk as did_jwk;
use crate::error::{Error, Result};
use crate::keys::{Key, KeyType};

/// Multicodec codes registered for key material that this crate recognizes
/// but does not implement: symmetric, BLS, post-quantum, and niche curve
/// codes from the multicodec table.
const UNIMPLEMENTED_CODECS: &[u64] = &[
    0xa0, 0xa1, 0xa2, 0xa3, 0xa4, // AES and ChaCha symmetric keys
    0xea, 0xeb, 0xee, // BLS12-381
    0xef, // Sr25519
    0x1201, 0x1202, // P-384, P-521
    0x1203, 0x1204, // Ed448, X448
    0x1206, // SM2
    0x120b, 0x120c, 0x120d, // ML-KEM
    0x123a,  // encryption multikey
    0x130c, 0x130d, // BLS12-381 key shares
    0x1a14, 0x1a15, 0x1a16, // Lamport
    0xa000, // ChaCha20-Poly1305
];

// jwk_jcs-pub: the payload is a JCS-canonicalized JWK, not raw key bytes.
const JWK_JCS_PUB: u64 = 0xeb51;

/// Encode a key as a `did:key` identifier.
#[must_use]
pub fn encode(key: &Key) -> String {
    format!("did:key:{}", to_multibase(key))
}

/// The multibase portion of a `did:key` identifier: base58btc over
/// `varint(multicodec) ‖ publicKeyBytes`.
#[must_use]
pub fn to_multibase(key: &Key) -> String {
    let mut buf = unsigned_varint::encode::u64_buffer();
    let prefix = unsigned_varint::encode::u64(key.key_type().codec(), &mut buf);
    let mut bytes = Vec::with_capacity(prefix.len() + key.public_key().len());
    bytes.extend_from_slice(prefix);
    bytes.extend_from_slice(key.public_key());
    multibase::encode(Base::Base58Btc, bytes)
}

/// Decode a `did:key` identifier (any trailing `#fragment` is ignored) into a
/// public-only [`Key`].
///
/// The `jwk_jcs-pub` codec (`0xeb51`) wraps a JWK rather than raw key bytes
/// and is delegated to the `did:jwk` convertor.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for a missing `did:key:` prefix, a
/// non-base58btc multibase, or a malformed varint, and
/// [`Error::UnsupportedCodec`] for codec codes outside the implemented set.
pub fn decode(did: &str) -> Result<Key> {
    let Some(encoded) = did.strip_prefix("did:key:") else {
        return Err(Error::InvalidFormat(format!("not a did:key: {did}")));
    };
    let encoded = encoded.split_once('#').map_or(encoded, |(id, _)| id);

    let (base, bytes) = multibase::decode(encoded)
        .map_err(|e| Error::InvalidFormat(format!("invalid multibase: {e}")))?;
    if base != Base::Base58Btc {
        return Err(Error::InvalidFormat("did:key must be base58btc encoded".to_string()));
    }

    let (codec, public) = unsigned_varint::decode::u64(&bytes)
        .map_err(|e| Error::InvalidFormat(format!("invalid multicodec varint: {e}")))?;

    match codec {
        0xed => Key::from_public_bytes(KeyType::Ed25519, public),
        0xec => Key::from_public_bytes(KeyType::X25519, public),
        0xe7 => Key::from_public_bytes(KeyType::Secp256k1, public),
        0x1200 => Key::from_public_bytes(KeyType::Secp256r1, public),
        0x1205 => Key::from_public_bytes(KeyType::Rsa, public),
        JWK_JCS_PUB => did_jwk::decode_bytes(public),
        c if UNIMPLEMENTED_CODECS.contains(&c) => {
            Err(Error::UnsupportedCodec(format!("{c:#x} is registered but not supported")))
        }
        c => Err(Error::UnsupportedCodec(format!("{c:#x} is not a public key codec"))),
    }
}

/// Decode a `did:key` identifier, returning `None` on any failure.
///
/// Used as a type-detection probe by callers sniffing identifier shapes.
#[must_use]
pub fn probe(did: &str) -> Option<Key> {
    decode(did).ok()
}
