//! Resources domain module.
//!
//! Resources are read-only data providers registered with the MCP runtime.
//! This server exposes a single templated resource, `greeting://{name}`.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use error::ResourceError;
pub use service::ResourceService;
