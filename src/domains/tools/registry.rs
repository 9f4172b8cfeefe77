//! Tool Registry - central metadata for all tools.
//!
//! This is the single source of truth for which tools exist; the router and
//! the tests both check against it.

use rmcp::model::Tool;

use super::definitions::{ComponentDetailsTool, DeploymentStatusTool};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![ComponentDetailsTool::NAME, DeploymentStatusTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ComponentDetailsTool::to_tool(),
            DeploymentStatusTool::to_tool(),
        ]
    }
}
