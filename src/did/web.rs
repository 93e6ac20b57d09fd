//! # did:web
//!
//! The `did:web` method uses a web domain's reputation to confer trust: the
//! identifier maps to an HTTPS URL hosting a DID Document.
//!
//! See <https://w3c-ccg.github.io/did-method-web>.

use std::fmt::Write as _;

use crate::did::document;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::provider::DidResolver;

/// Convert a `did:web` identifier to the HTTPS URL of its DID Document.
///
/// Path colons become slashes and a percent-encoded port colon (`%3A`) is
/// restored. With no subpath the document lives at
/// `/.well-known/did.json`; with a subpath, at `<path>/did.json`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for a missing `did:web:` prefix or an
/// empty domain.
pub fn url(did: &str) -> Result<String> {
    let Some(id) = did.strip_prefix("did:web:") else {
        return Err(Error::InvalidFormat(format!("not a did:web: {did}")));
    };
    let id = id.split_once('#').map_or(id, |(id, _)| id);
    if id.is_empty() {
        return Err(Error::InvalidFormat("did:web has no domain".to_string()));
    }

    let path = id.replace(':', "/").replace("%3A", ":");
    if path.contains('/') {
        Ok(format!("https://{path}/did.json"))
    } else {
        Ok(format!("https://{path}/.well-known/did.json"))
    }
}

/// Resolve a `did:web` identifier to a public-only [`Key`] by fetching its
/// DID Document and extracting the first recognized verification method.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for a malformed identifier,
/// [`Error::Resolution`] if the document cannot be fetched or parsed, and
/// [`Error::NoKeyFound`] if the document carries no usable key.
pub async fn resolve(did: &str, resolver: &impl DidResolver) -> Result<Key> {
    let http_url = url(did)?;
    tracing::debug!("resolving {did} from {http_url}");
    let doc = resolver
        .resolve(&http_url)
        .await
        .map_err(|e| Error::Resolution(format!("fetching {http_url}: {e}")))?;
    document::from_document(&doc)
}

/// Convert an HTTP URL into the colon-separated host-and-path form used as a
/// `did:web` method-specific identifier.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the URL cannot be parsed or has no
/// host.
pub fn parse_url(http_url: &str) -> Result<String> {
    let parsed = url::Url::parse(http_url)
        .map_err(|e| Error::InvalidFormat(format!("invalid URL {http_url}: {e}")))?;
    let Some(host_str) = parsed.host_str() else {
        return Err(Error::InvalidFormat(format!("no host in URL {http_url}")));
    };
    let mut host = host_str.to_string();
    if let Some(port) = parsed.port() {
        let _ = write!(host, "%3A{port}");
    }
    if let Some(path) = parsed.path().strip_prefix('/') {
        if !path.is_empty() {
            let formatted = path.trim_end_matches('/').replace('/', ":");
            let _ = write!(host, ":{formatted}");
        }
    }
    Ok(host)
}

/// Construct the `did:web` identifier served from a URL.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the URL cannot be parsed. See
/// [`parse_url`].
pub fn default_did(http_url: &str) -> Result<String> {
    Ok(format!("did:web:{}", parse_url(http_url)?))
}
