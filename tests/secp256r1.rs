//! Secp256r1 / P-256 (ES256) key lifecycle and conversion tests.

use did_keyring::{Algorithm, Key, KeyType};

const PRIVATE_HEX: &str = "44d2575ca39d5b875b17f3ae372183acd1da561dbbfde6591facbca98b83fb11";
const PUBLIC_HEX: &str = "03c6e2792c9be06396a078151bc89e6f553412cab000c7ec71c5b992938356d980";
const DID_KEY: &str = "did:key:zDnaew3eSC3JmvrFcgwgoGULgcm3iQR9han5k2d4P87vsDkdm";
const JWK_X: &str = "xuJ5LJvgY5ageBUbyJ5vVTQSyrAAx-xxxbmSk4NW2YA";
const JWK_Y: &str = "ZHujYr-HhNmVrtdf4icztCM2eMJ6XCq42MwwuhkD6dE";
const SIGNATURE_HEX: &str = "45117074a72e842dfeab6486da56992b30745674afc8a431a9002fdc40ef3d8d0884bad23bedf7215a3308c2854fcb68190b0bdcd23eeddf2decfa7fc5d6eba9";
const DID_JWK: &str = "did:jwk:eyJrdHkiOiJFQyIsImNydiI6IlAtMjU2IiwidXNlIjoic2lnIiwiYWxnIjoiRVMyNTYiLCJ4IjoieHVKNUxKdmdZNWFnZUJVYnlKNXZWVFFTeXJBQXgteHh4Ym1TazROVzJZQSIsInkiOiJaSHVqWXItSGhObVZydGRmNGljenRDTTJlTUo2WENxNDJNd3d1aGtENmRFIn0";

#[test]
fn generate() {
    let key = Key::generate(KeyType::Secp256r1).expect("should generate");
    assert_eq!(key.private_key().unwrap().len(), 32);
    assert_eq!(key.public_key().len(), 33);
    assert!(key.algorithms().contains(&Algorithm::Es256));
}

#[test]
fn import_private_key() {
    let key = Key::from_private_hex(KeyType::Secp256r1, PRIVATE_HEX).expect("should import");
    assert_eq!(key.private_key_hex().unwrap(), PRIVATE_HEX);
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
}

#[test]
fn did_key_round_trip() {
    let key = did_keyring::did::key::decode(DID_KEY).expect("should decode");
    assert_eq!(key.key_type(), KeyType::Secp256r1);
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
    assert_eq!(did_keyring::did::key::encode(&key), DID_KEY);
}

#[test]
fn deterministic_signature() {
    let key = Key::from_private_hex(KeyType::Secp256r1, PRIVATE_HEX).expect("should import");
    let signature = key.sign(Algorithm::Es256, b"Message Data").expect("should sign");
    assert_eq!(signature.len(), 64);
    assert_eq!(hex::encode(&signature), SIGNATURE_HEX);
    assert!(key.verify(Algorithm::Es256, &signature, b"Message Data").expect("should verify"));

    let mut tampered = signature;
    tampered[10] ^= 0xff;
    assert!(!key.verify(Algorithm::Es256, &tampered, b"Message Data").expect("should verify"));
}

#[test]
fn create_jwk() {
    let key = Key::from_private_hex(KeyType::Secp256r1, PRIVATE_HEX).expect("should import");
    let jwk = key.to_jwk().expect("should serialize");
    assert_eq!(jwk.kty, "EC");
    assert_eq!(jwk.crv.as_deref(), Some("P-256"));
    assert_eq!(jwk.x.as_deref(), Some(JWK_X));
    assert_eq!(jwk.y.as_deref(), Some(JWK_Y));
}

#[test]
fn import_jwk_recompresses_point() {
    let jwk = did_keyring::PublicKeyJwk {
        kty: "EC".to_string(),
        crv: Some("P-256".to_string()),
        x: Some(JWK_X.to_string()),
        y: Some(JWK_Y.to_string()),
        ..did_keyring::PublicKeyJwk::default()
    };
    let key = Key::from_jwk(&jwk).expect("should import");
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
}

#[test]
fn did_jwk_encoding_is_stable() {
    let key = Key::from_private_hex(KeyType::Secp256r1, PRIVATE_HEX).expect("should import");
    assert_eq!(did_keyring::did::jwk::encode(&key).unwrap(), DID_JWK);

    // decode and re-encode yields the identical string: alg and use are
    // injected deterministically
    let decoded = did_keyring::did::jwk::decode(DID_JWK).expect("should decode");
    assert_eq!(decoded.public_key_hex(), PUBLIC_HEX);
    assert_eq!(did_keyring::did::jwk::encode(&decoded).unwrap(), DID_JWK);
}
