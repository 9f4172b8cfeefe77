//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Every resource
//! this server exposes is templated, so reads are resolved by matching the
//! URI against the registered templates.

use rmcp::model::{ReadResourceResult, Resource, ResourceTemplate};
use tracing::info;

use super::definitions::GreetingResource;
use super::error::ResourceError;
use super::registry::get_all_resource_templates;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService with templates from the registry.
    pub fn new() -> Self {
        info!("Initializing ResourceService");
        Self {
            templates: get_all_resource_templates(),
        }
    }

    /// List all available concrete resources.
    ///
    /// Everything here is templated, so there are no concrete entries to
    /// enumerate.
    pub async fn list_resources(&self) -> Vec<Resource> {
        Vec::new()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI, resolving it against the known templates.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if GreetingResource::matches(uri) {
            return GreetingResource::resolve(uri);
        }

        Err(ResourceError::not_found(uri))
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
