//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (Deserialize + JsonSchema)
//! - `execute()` (core logic)
//! - `to_tool()` (metadata) and `create_route()` (rmcp routing)
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file here (e.g., `my_tool.rs`)
//! 2. Define params, execute(), to_tool(), create_route()
//! 3. Export it below
//! 4. Add the route in `router.rs` and the metadata in `registry.rs`

pub mod common;
mod component_details;
mod deployment_status;

pub use component_details::{ComponentDetailsParams, ComponentDetailsTool};
pub use deployment_status::{DeploymentStatusParams, DeploymentStatusTool};
