//! Resource Registry - central registration of all resource templates.
//!
//! When adding a new templated resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register its template here

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use super::definitions::GreetingResource;

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: GreetingResource::URI_TEMPLATE.to_string(),
            name: GreetingResource::NAME.to_string(),
            title: None,
            description: Some(GreetingResource::DESCRIPTION.to_string()),
            mime_type: Some(GreetingResource::MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}
