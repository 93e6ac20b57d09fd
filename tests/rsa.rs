//! RSA (RS256 / RS512) key lifecycle and conversion tests.
//!
//! RSA private material is PKCS#8 DER; public material is SPKI DER. The
//! `did:key` form wraps the SPKI bytes under the `rsa-pub` multicodec.

use did_keyring::{Algorithm, Key, KeyType, ManagedKey};

const PRIVATE_HEX: &str = "308204bc020100300d06092a864886f70d0101010500048204a6308204a20201000282010100b0d697f7c40bc437766e52874ee940d947274842823f8ca3550cb67cd5a19cc9f6da0f4b4203ba02c576e0aba0049de818e064ba23063bf2f037e6d5409a61ebc034470681402a853f7c77bb3a39f8882c566b5417275488d5461282ec7fd4b4685d4c3fc380b106943172a84f6bf5f969b387e8c365ac75185b33eb0b5d05959dad654e5e67450a6c6411e9dee60edd4b5bf9cecc3466b05cd5588b95a7a3d38871ad70cc1a3142d53ab07e8819c17dc7b6f2d32d9c98b75a0e53bc6831211e3388a4037c34e5f51a9e96f7f5b8b26314db38369d2e7da15cc358cc75413e64ec3481e81b034312f0e79f5ebd57c1c9cea4c0519ac7b2a606a82ad6bb5adf690203010001028201000117c266a8927e0aedb36ed5213ab5c8e1f4af30a2076c8211e37b393844c0684b1b3bdef63079b4ccad9863d720502d8001dafd7f7be960edf51a7b14e41f58ca9e48161534654edf7e906adac842edec80383793d10d67af11b8c9905695e4eb84301570cad9cd359b3c9f27a67e25a56e93976fa5b034250b633dbf9b3a8e9882a318111794ae0598e59ac911a53e6374b12630a590d91693e3533565a7353e568de6366c5fe5e499e84e7307ab9e01635d8ec63cac5e61b840875a22f584cf1e15470d02f2b2cfea08784cd105518de7cf15125ba772d6f56db67d0cf74d89f0608d530294f8edaef139594cefc3c2903c8a99527ae00573b642034c2cd502818100d5779fee3a8dbd10f76db517abd22a14f3f8c0a03978b6eaf32aa868536121c11200ba03570f0ae0a6f99a3abbccc0fdc578cd82b55ae012eeac9397466adc070e1f9099a82c672c0ccedccbf7db0a7132e275ea2e990ad95b3b60999c312e8e85b5782802247c970c0f797f7c519d5c198bc502e223efc835130946847bffdb02818100d4129fa3065d26e1e4e52b160a59dbe96681d053fef9f39fd990338da08ba810389f937ef3b967f3e143ac7a93f7e442b11984ac40fb2ce9e4f9ede807a96944414a7c41d2c50b434b390b8083092f7b89e16107e31032a08ef3a2491ef03bc3eaa8723c43e9883736777ed06258461f1ea908af84c1fa2c9fd0bb56579ef30b02818043e64f1ac9c937f063a3a3cca9bca9e20c507d84f982ea3c05a8f5f469412629717e85ac764eb4990cc3ac492e5f4cabebda271482772b7b1a2c0eae3999d7eeee911fbfa07caf3c95be5f010a0fc45c8960fb3cc821aa0fc53337e0e48bc851513a8dc3bc1abafe98b97b5e0fbf2e1c938b9fd8f0f1995dc7740ca93f8ee9ad0281802fcde6e843c5f9becfef0cb05233014c728bee9f1089dd6dfa07f467077a93aedc64b445d8c0c17b0b1b4b24f277dd9f5ef6869ea1a33cf39866f246ec7b36bc690f56452c32b8a039b3a93115d89b3878d332212a00fbb88fa0c1c343d31955c76ea3198ca176d02359fa5f14dc1b2a66a9e9c84edfbefa12286622476c1013028180769a19a0cf5bdacdb9536219c808c73a698f1606bc908b4892559bd9673a60913f97efcf2090e2420785eb8c78647cbb700794bdd45d4a1552555bd8d1bb90ddabce4649b96ac218d684508c4976692865a981d41d22c5666af1ec0285db9d8a589f263683bfd755d3cebfcccbcab11582f56d4fe8e5b514a94a0f008bab5c8c";
const PUBLIC_HEX: &str = "30820122300d06092a864886f70d01010105000382010f003082010a0282010100b0d697f7c40bc437766e52874ee940d947274842823f8ca3550cb67cd5a19cc9f6da0f4b4203ba02c576e0aba0049de818e064ba23063bf2f037e6d5409a61ebc034470681402a853f7c77bb3a39f8882c566b5417275488d5461282ec7fd4b4685d4c3fc380b106943172a84f6bf5f969b387e8c365ac75185b33eb0b5d05959dad654e5e67450a6c6411e9dee60edd4b5bf9cecc3466b05cd5588b95a7a3d38871ad70cc1a3142d53ab07e8819c17dc7b6f2d32d9c98b75a0e53bc6831211e3388a4037c34e5f51a9e96f7f5b8b26314db38369d2e7da15cc358cc75413e64ec3481e81b034312f0e79f5ebd57c1c9cea4c0519ac7b2a606a82ad6bb5adf690203010001";
const DID_KEY: &str = "did:key:z2MGw4gk84USotaWf4AkJ83DcnrfgGaceF86KQXRYMfQ7xqnUFait8jjAP972BmAcheRzy3dsG8iW8GcYS1uZ4Ehc88x3wXbT5afwJuaSKBRkNsv8TNUUhttvsayZziwwR3NUyHFHeLw1nA4a94TCYrmjuT7Qb24tzDmdab9nhrWmDNc91KrnivF4SBQ8juviY8a1kCGcpKY7xUvEJDM72tB5C6rkV4MH9GQoDKNnApRDgWLmfLsK6EbytA1wq6BneP2QNHibSXchuiWc7cjLWkYJH8ATKbNgD326avgvqMh4gNZHJZBzcYLUhPaGZHc2EvxcPvcmrwj94UvaY8sSDzsNX9ZiWpdfn49PgaigCzBxPV3hkv7hUrc2EqWVZqNTViF2xQRk2KLQG13MoFeMv";
const JWK_N: &str = "sNaX98QLxDd2blKHTulA2UcnSEKCP4yjVQy2fNWhnMn22g9LQgO6AsV24KugBJ3oGOBkuiMGO_LwN-bVQJph68A0RwaBQCqFP3x3uzo5-IgsVmtUFydUiNVGEoLsf9S0aF1MP8OAsQaUMXKoT2v1-Wmzh-jDZax1GFsz6wtdBZWdrWVOXmdFCmxkEene5g7dS1v5zsw0ZrBc1ViLlaej04hxrXDMGjFC1TqwfogZwX3HtvLTLZyYt1oOU7xoMSEeM4ikA3w05fUanpb39biyYxTbODadLn2hXMNYzHVBPmTsNIHoGwNDEvDnn169V8HJzqTAUZrHsqYGqCrWu1rfaQ";
const JWK_E: &str = "AQAB";
const RS256_SIGNATURE_HEX: &str = "6d8a383c226a1a25dcd52042e4877ba2e8645e0514b924b331b590cec8ea86021eecd51e4560f512b3ae5cfdda41fd61afdc2f3aede9b58e89ec4e27f6500abda85fa4611c46516e8163974ccab56659d876a3597902d898c9f95367be9f63de7dbef8aa2c993534cd1439fd4796ee1e19f8dace39cf1ee1a900472123153fee3fcec19f3f611e62be1db2ee2fa4792751a7e322033cede5cc88a537484517e98750568e468149f2093c20155860650926af4fce185d4a6c20aee1d95d3eff6447deeefc877defc10635b43052d2999232dad18d175bc9bcdb610e7a12ecb925b445d88be4dd77bca63324a01483beeb6d5a26dec65efd79033869756242e906";
const RS512_SIGNATURE_HEX: &str = "aec03290698f2c218a0a9491ca7b00093737b149c56a2280f54082317d2e2ddd3c15e816b264ff8b0704fcb9c00bfb2eafe3deb6e50978dd100f8d1859b2919bd809ea043bfa997cdf52f90a4199f283405a33526331a6d614ebd2fe4d7571151a9f9719dc6c06ca9d6b5a34a4382e34e0cb93d8db1364ccef8416cda079fd317ae1326e3f72e1a0ae5d80d6cd21490e0c9b7a8dc4caaa6e07b5a14f010212f993acd5311dbfa4f4cf5d14bee56425cb2986127f2a635d3ea8e2fedca07f37265efe53c3e18e5917c4a7d4539356ea6379a7a64d6cbf1245bddfe648da12d0a29fd7ed16022b3efed22cc444b747723387bdf0cdcdcba8ae132ff84e76253052";

#[test]
fn import_private_key() {
    let key = Key::from_private_hex(KeyType::Rsa, PRIVATE_HEX).expect("should import");
    assert!(key.has_private_key());
    assert_eq!(key.private_key().unwrap().len(), 1216);
    assert_eq!(key.private_key_hex().unwrap(), PRIVATE_HEX);
    assert_eq!(key.public_key().len(), 294);
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
}

#[test]
fn import_from_did() {
    let key = did_keyring::did::key::decode(DID_KEY).expect("should decode");
    assert!(!key.has_private_key());
    assert_eq!(key.key_type(), KeyType::Rsa);
    assert_eq!(key.public_key().len(), 294);
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
}

#[test]
fn export_to_did() {
    let key = Key::from_private_hex(KeyType::Rsa, PRIVATE_HEX).expect("should import");
    assert_eq!(did_keyring::did::key::encode(&key), DID_KEY);
}

#[test]
fn import_from_managed_key() {
    let record = ManagedKey {
        key_type: "RSA".to_string(),
        public_key_hex: PUBLIC_HEX.to_string(),
        private_key_hex: Some(PRIVATE_HEX.to_string()),
    };
    let key = Key::from_managed(&record).expect("should import");
    assert_eq!(key.private_key_hex().unwrap(), PRIVATE_HEX);
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
}

#[test]
fn sign_rs256() {
    let key = Key::from_private_hex(KeyType::Rsa, PRIVATE_HEX).expect("should import");
    let signature = key.sign(Algorithm::Rs256, b"Message Data").expect("should sign");
    assert_eq!(signature.len(), 256);
    assert_eq!(hex::encode(&signature), RS256_SIGNATURE_HEX);
    assert!(key.verify(Algorithm::Rs256, &signature, b"Message Data").expect("should verify"));
}

#[test]
fn sign_rs512() {
    let key = Key::from_private_hex(KeyType::Rsa, PRIVATE_HEX).expect("should import");
    let signature = key.sign(Algorithm::Rs512, b"Message Data").expect("should sign");
    assert_eq!(signature.len(), 256);
    assert_eq!(hex::encode(&signature), RS512_SIGNATURE_HEX);
    assert!(key.verify(Algorithm::Rs512, &signature, b"Message Data").expect("should verify"));
}

#[test]
fn algorithms_do_not_cross_verify() {
    let key = Key::from_private_hex(KeyType::Rsa, PRIVATE_HEX).expect("should import");
    let signature = key.sign(Algorithm::Rs256, b"Message Data").expect("should sign");
    assert!(!key.verify(Algorithm::Rs512, &signature, b"Message Data").expect("should verify"));
}

#[test]
fn create_jwk() {
    let key = Key::from_private_hex(KeyType::Rsa, PRIVATE_HEX).expect("should import");
    let jwk = key.to_jwk().expect("should serialize");
    assert_eq!(jwk.kty, "RSA");
    assert_eq!(jwk.n.as_deref(), Some(JWK_N));
    assert_eq!(jwk.e.as_deref(), Some(JWK_E));
    assert_eq!(jwk.alg.as_deref(), Some("RS256"));
    assert_eq!(jwk.key_ops.as_deref(), Some(&["verify".to_string()][..]));
}

#[test]
fn import_jwk_rebuilds_spki() {
    let jwk = did_keyring::PublicKeyJwk {
        kty: "RSA".to_string(),
        n: Some(JWK_N.to_string()),
        e: Some(JWK_E.to_string()),
        ..did_keyring::PublicKeyJwk::default()
    };
    let key = Key::from_jwk(&jwk).expect("should import");
    assert_eq!(key.public_key_hex(), PUBLIC_HEX);
}
