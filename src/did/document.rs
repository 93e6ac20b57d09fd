//! # DID Document
//!
//! A DID Document is a JSON-LD document that contains information related to
//! a DID: its verification methods, verification relationships, and service
//! endpoints. [`DocumentBuilder`] projects a [`Key`] into a single-key
//! document; [`from_document`] recovers the key from a document produced by
//! any conformant implementation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Kind, OneMany};
use crate::did::{jwk as did_jwk, key as did_key};
use crate::error::{Error, Result};
use crate::jwk::PublicKeyJwk;
use crate::keys::{Key, KeyType};

/// The base JSON-LD context common to all DID documents.
pub const BASE_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// A DID Document.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The context of the DID document.
    #[serde(rename = "@context", skip_serializing_if = "Vec::is_empty", default)]
    pub context: Vec<Kind<Value>>,

    /// The DID of the subject this document describes.
    pub id: String,

    /// Verification methods for the DID subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    /// How the subject is expected to be authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<Kind<VerificationMethod>>>,

    /// How the subject is expected to express claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<Kind<VerificationMethod>>>,

    /// How an entity can generate encryption material intended for the
    /// subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<Kind<VerificationMethod>>>,

    /// Methods the subject may use to invoke a cryptographic capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<Kind<VerificationMethod>>>,

    /// Methods the subject may use to delegate a cryptographic capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<Kind<VerificationMethod>>>,

    /// Ways of communicating with the DID subject or related entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<Service>>,
}

/// A way of communicating with the DID subject or associated entities.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// A URI unique to the service.
    pub id: String,

    /// The service type.
    #[serde(rename = "type")]
    pub type_: String,

    /// One or more endpoints for the service.
    #[allow(clippy::struct_field_names)]
    pub service_endpoint: OneMany<Kind<Value>>,
}

/// A cryptographic public key by which interactions with the DID subject can
/// be authenticated or authorized.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// A DID URL that identifies the verification method.
    pub id: String,

    /// The verification method type, e.g. `JsonWebKey` or `Multikey`.
    #[serde(rename = "type")]
    pub type_: String,

    /// The DID of the controller of the verification method.
    pub controller: String,

    /// The public key material.
    #[serde(flatten)]
    pub key: KeyFormat,
}

/// The representation of public key material in a verification method.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all_fields = "camelCase")]
#[serde(untagged)]
pub enum KeyFormat {
    /// The key is encoded as a JWK.
    Jwk {
        /// The public key as a JWK.
        public_key_jwk: PublicKeyJwk,
    },

    /// The key is encoded as a multibase string (the `did:key` body).
    Multibase {
        /// The public key as a multibase string.
        public_key_multibase: String,
    },

    /// The key is encoded as raw base58 (legacy suites).
    Base58 {
        /// The public key as base58btc without a multibase prefix.
        public_key_base58: String,
    },
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self::Multibase {
            public_key_multibase: String::new(),
        }
    }
}

/// The two output representations supported when building a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationFormat {
    /// `publicKeyJwk` with a `did:jwk` default identifier.
    #[default]
    JsonWebKey,

    /// `publicKeyMultibase` with a `did:key` default identifier.
    Multikey,
}

/// The security-vocabulary context implied by a verification method type.
#[must_use]
pub fn security_context(method_type: &str) -> Option<&'static str> {
    match method_type {
        "JsonWebKey2020" => Some("https://w3id.org/security/suites/jws-2020/v1"),
        "Multikey" => Some("https://w3id.org/security/multikey/v1"),
        "EcdsaSecp256k1VerificationKey2020" => {
            Some("https://w3id.org/security/suites/secp256k1-2020/v1")
        }
        "EcdsaSecp256k1VerificationKey2019" => {
            Some("https://w3id.org/security/suites/secp256k1-2019/v1")
        }
        "Ed25519VerificationKey2020" => Some("https://w3id.org/security/suites/ed25519-2020/v1"),
        "Ed25519VerificationKey2018" => Some("https://w3id.org/security/suites/ed25519-2018/v1"),
        "X25519KeyAgreementKey2020" => Some("https://w3id.org/security/suites/x25519-2020/v1"),
        "X25519KeyAgreementKey2019" => Some("https://w3id.org/security/suites/x25519-2019/v1"),
        "EcdsaSecp256r1VerificationKey2019" => Some("https://w3id.org/security/suites/ecdsa-2019/v1"),
        _ => None,
    }
}

/// Builds a single-key DID Document from a [`Key`].
///
/// The verification method is referenced as `#0` throughout, matching the
/// `did:jwk` convention. When no DID is supplied the key's own `did:jwk` or
/// `did:key` identifier is used, per the chosen [`VerificationFormat`].
#[derive(Debug)]
pub struct DocumentBuilder<'a> {
    key: &'a Key,
    format: VerificationFormat,
    method_type: Option<String>,
    did: Option<String>,
    services: Vec<Service>,
}

impl<'a> DocumentBuilder<'a> {
    /// Start building a document for `key`, defaulting to the
    /// [`VerificationFormat::JsonWebKey`] representation.
    #[must_use]
    pub const fn new(key: &'a Key) -> Self {
        Self {
            key,
            format: VerificationFormat::JsonWebKey,
            method_type: None,
            did: None,
            services: Vec::new(),
        }
    }

    /// Choose the public key representation.
    #[must_use]
    pub const fn format(mut self, format: VerificationFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the verification method type string. Also selects the
    /// security-vocabulary context attached to the document.
    #[must_use]
    pub fn method_type(mut self, method_type: impl Into<String>) -> Self {
        self.method_type = Some(method_type.into());
        self
    }

    /// Use an explicit DID instead of deriving one from the key.
    #[must_use]
    pub fn did(mut self, did: impl Into<String>) -> Self {
        self.did = Some(did.into());
        self
    }

    /// Attach a service endpoint.
    #[must_use]
    pub fn service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Build the document.
    ///
    /// X25519 keys are agreement-only: they populate `keyAgreement` and none
    /// of the signing relationships.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be serialized in the chosen
    /// representation.
    pub fn build(self) -> Result<Document> {
        const KEY_REF: &str = "#0";

        let (did, type_, key_format) = match self.format {
            VerificationFormat::JsonWebKey => {
                let did = match self.did {
                    Some(did) => did,
                    None => did_jwk::encode(self.key)?,
                };
                let type_ = self.method_type.unwrap_or_else(|| "JsonWebKey".to_string());
                let key_format = KeyFormat::Jwk {
                    public_key_jwk: self.key.to_jwk()?,
                };
                (did, type_, key_format)
            }
            VerificationFormat::Multikey => {
                let did = self.did.unwrap_or_else(|| did_key::encode(self.key));
                let type_ = self.method_type.unwrap_or_else(|| "Multikey".to_string());
                let key_format = KeyFormat::Multibase {
                    public_key_multibase: did_key::to_multibase(self.key),
                };
                (did, type_, key_format)
            }
        };

        let mut context = vec![Kind::String(BASE_CONTEXT.to_string())];
        if let Some(suite) = security_context(&type_) {
            context.push(Kind::String(suite.to_string()));
        }

        let method_id = format!("{did}{KEY_REF}");
        let method = VerificationMethod {
            id: method_id.clone(),
            type_,
            controller: did.clone(),
            key: key_format,
        };
        let key_ref = || Some(vec![Kind::String(method_id.clone())]);

        let mut doc = Document {
            context,
            id: did,
            verification_method: Some(vec![method]),
            ..Document::default()
        };
        if self.key.key_type() == KeyType::X25519 {
            doc.key_agreement = key_ref();
        } else {
            doc.authentication = key_ref();
            doc.assertion_method = key_ref();
            doc.capability_invocation = key_ref();
            doc.capability_delegation = key_ref();
        }
        if !self.services.is_empty() {
            doc.service = Some(self.services);
        }
        Ok(doc)
    }
}

/// Recover a public-only [`Key`] from a DID Document.
///
/// Verification methods are scanned in document order; the first exposing
/// `publicKeyJwk` or `publicKeyMultibase` wins. Entries in other formats are
/// skipped.
///
/// # Errors
///
/// Returns [`Error::NoKeyFound`] if no verification method carries usable key
/// material.
pub fn from_document(doc: &Document) -> Result<Key> {
    for method in doc.verification_method.as_deref().unwrap_or_default() {
        match &method.key {
            KeyFormat::Jwk { public_key_jwk } => return Key::from_jwk(public_key_jwk),
            KeyFormat::Multibase { public_key_multibase } => {
                return did_key::decode(&format!("did:key:{public_key_multibase}"));
            }
            KeyFormat::Base58 { .. } => {}
        }
    }
    Err(Error::NoKeyFound)
}
