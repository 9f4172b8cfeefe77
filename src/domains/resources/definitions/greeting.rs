//! Greeting resource definition.
//!
//! A trivial templated text responder: `greeting://{name}` resolves to
//! `"Hello, {name}!"`.

use rmcp::model::{ReadResourceResult, ResourceContents};

use super::super::error::ResourceError;

const SCHEME: &str = "greeting://";

/// Templated greeting resource.
pub struct GreetingResource;

impl GreetingResource {
    /// URI template (RFC 6570) advertised to clients.
    pub const URI_TEMPLATE: &'static str = "greeting://{name}";

    /// The display name of the resource.
    pub const NAME: &'static str = "Greeting";

    /// A description of the resource.
    pub const DESCRIPTION: &'static str = "A personalized greeting by name";

    /// The MIME type of the resource content.
    pub const MIME_TYPE: &'static str = "text/plain";

    /// Check whether a concrete URI is addressed to this template.
    pub fn matches(uri: &str) -> bool {
        uri.starts_with(SCHEME)
    }

    /// Resolve a concrete URI against the template.
    ///
    /// The name must be a single non-empty path segment; anything else is a
    /// schema mismatch the caller should never produce, rejected rather
    /// than guessed at.
    pub fn resolve(uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let name = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| ResourceError::invalid_uri(uri))?;

        if name.is_empty() || name.contains('/') {
            return Err(ResourceError::invalid_uri(format!(
                "greeting name must be a single non-empty segment: {uri}"
            )));
        }

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(format!("Hello, {name}!"), uri)],
        })
    }
}
