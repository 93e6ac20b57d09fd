//! # Provider Traits
//!
//! [`DidResolver`] is the seam between DID resolution and the network.
//! Implementers need only return the document at the given HTTP URL; this may
//! be by dereferencing the URL directly, consulting a local cache, or proxying
//! through a remote resolver. [`HttpResolver`] is the batteries-included
//! implementation.

use std::future::Future;

use anyhow::Result;

use crate::did::document::Document;

/// Resolves an HTTP URL to the DID Document hosted there.
pub trait DidResolver: Send + Sync {
    /// Fetch and deserialize the DID Document at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be dereferenced or the response is
    /// not a DID Document.
    fn resolve(&self, url: &str) -> impl Future<Output = Result<Document>> + Send;
}

/// A [`DidResolver`] that fetches documents over HTTPS.
#[derive(Clone, Debug, Default)]
pub struct HttpResolver {
    client: reqwest::Client,
}

impl HttpResolver {
    /// Create a resolver with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DidResolver for HttpResolver {
    fn resolve(&self, url: &str) -> impl Future<Output = Result<Document>> + Send {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            let response = client.get(&url).send().await?.error_for_status()?;
            Ok(response.json::<Document>().await?)
        }
    }
}
