//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together for the stdio transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{ComponentDetailsTool, DeploymentStatusTool};
use crate::core::config::Config;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ComponentDetailsTool::create_route(config.clone()))
        .with_route(DeploymentStatusTool::create_route(config))
}
