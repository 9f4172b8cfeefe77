//! Component details tool.
//!
//! Fetches component XML metadata via `GET <accountId>/Component/<id>` and
//! feeds the body through the component shaper: process and profile
//! components become a compact summary, everything else is returned in full.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::common::{error_result, success_result};
use crate::boomi::{ApiFailure, ApiOutcome, BoomiClient, component, credentials};
use crate::core::Config;

/// Parameters for a component details fetch.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetailsParams {
    /// The component to fetch.
    #[schemars(description = "Boomi component id")]
    pub component_id: String,
}

/// Component details tool implementation.
#[derive(Debug, Clone)]
pub struct ComponentDetailsTool;

impl ComponentDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getComponentDetails";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch XML metadata for a Boomi component by id. Process and profile components are condensed into a ten-field summary; other component types are returned as the full raw XML. The raw XML is also saved to the configured dump directory.";

    /// Execute the tool logic.
    pub async fn execute(params: &ComponentDetailsParams, config: &Arc<Config>) -> CallToolResult {
        // This handler also writes local files, so it short-circuits before
        // any I/O when the credential set is incomplete.
        if !credentials::validate(&config.boomi, &config.storage.diagnostics_path) {
            let failure = ApiFailure::missing_credentials(&config.storage.diagnostics_path);
            return error_result(&format!("Error: {}", failure.message));
        }

        info!("Fetching component details for {}", params.component_id);

        let endpoint = format!("{}/Component/{}", config.boomi.account_id, params.component_id);

        let client = BoomiClient::new(config.clone());
        match client.call(&endpoint, Method::GET, None).await {
            ApiOutcome::Failure(failure) => error_result(&format!("Error: {}", failure.message)),
            ApiOutcome::Success(body) => {
                match component::shape(&body, &params.component_id, &config.storage.dump_dir) {
                    Ok(text) => success_result(text),
                    Err(err) => error_result(&format!("Error: {}", err)),
                }
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ComponentDetailsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: ComponentDetailsParams =
                    serde_json::from_value(Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::reply_text;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PROCESS_XML: &str = r#"<bns:Component xmlns:bns="http://api.platform.boomi.com/"
        componentId="c-123" name="Order Sync" type="process" version="4"
        createdBy="alice@example.com" createdDate="2024-01-01T00:00:00Z"
        modifiedBy="bob@example.com" modifiedDate="2024-02-01T00:00:00Z"
        currentVersion="true">
        <bns:description>Syncs orders nightly.</bns:description>
    </bns:Component>"#;

    fn test_config(base_url: String, dir: &std::path::Path) -> Arc<Config> {
        let mut config = Config::default();
        config.boomi.user = "user@example.com".to_string();
        config.boomi.token = "token".to_string();
        config.boomi.account_id = "acct-1".to_string();
        config.boomi.environment_id = "env-1".to_string();
        config.boomi.base_url = base_url;
        config.storage.dump_dir = dir.join("dumps");
        config.storage.diagnostics_path = dir.join("missing.txt");
        Arc::new(config)
    }

    #[test]
    fn test_params_wire_shape() {
        let json = r#"{"componentId": "c-123"}"#;
        let params: ComponentDetailsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.component_id, "c-123");
    }

    #[tokio::test]
    async fn test_process_component_is_summarized() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/acct-1/Component/c-123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PROCESS_XML))
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = ComponentDetailsParams {
            component_id: "c-123".to_string(),
        };

        let result = ComponentDetailsTool::execute(&params, &config).await;
        assert!(!result.is_error.unwrap_or(false));

        let text = reply_text(&result);
        assert!(text.contains("Component summary:"));
        assert!(text.contains("Order Sync"));
        assert!(!text.contains("<bns:Component"));
        assert!(dir.path().join("dumps/component_c-123.xml").exists());
    }

    #[tokio::test]
    async fn test_unknown_type_returns_full_xml() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        let xml = r#"<Component componentId="c-9" name="Conn" type="transport" version="1"/>"#;
        Mock::given(method("GET"))
            .and(path("/acct-1/Component/c-9"))
            .respond_with(ResponseTemplate::new(200).set_body_string(xml))
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = ComponentDetailsParams {
            component_id: "c-9".to_string(),
        };

        let result = ComponentDetailsTool::execute(&params, &config).await;
        let text = reply_text(&result);
        assert!(text.contains("type=\"transport\""));
        assert!(text.contains("<Component"));
    }

    #[tokio::test]
    async fn test_transport_failure_renders_error() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/acct-1/Component/c-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = ComponentDetailsParams {
            component_id: "c-404".to_string(),
        };

        let result = ComponentDetailsTool::execute(&params, &config).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(
            reply_text(&result),
            "Error: Failed to communicate with Boomi API."
        );
    }

    #[tokio::test]
    async fn test_malformed_xml_renders_error() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/acct-1/Component/c-bad"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not xml <"))
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = ComponentDetailsParams {
            component_id: "c-bad".to_string(),
        };

        let result = ComponentDetailsTool::execute(&params, &config).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(reply_text(&result).starts_with("Error: Malformed component XML"));
    }

    #[tokio::test]
    async fn test_missing_credentials_short_circuits_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.dump_dir = dir.path().join("dumps");
        config.storage.diagnostics_path = dir.path().join("missing.txt");
        let config = Arc::new(config);

        let params = ComponentDetailsParams {
            component_id: "c-123".to_string(),
        };

        let result = ComponentDetailsTool::execute(&params, &config).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(reply_text(&result).starts_with("Error: Missing Boomi credentials"));

        // No component dump was attempted
        assert!(!dir.path().join("dumps").exists());
        // But the diagnostic marker was written
        assert!(dir.path().join("missing.txt").exists());
    }

    #[tokio::test]
    async fn test_repeated_calls_are_independent() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/acct-1/Component/c-123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PROCESS_XML))
            .expect(2)
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = ComponentDetailsParams {
            component_id: "c-123".to_string(),
        };

        let first = ComponentDetailsTool::execute(&params, &config).await;
        let second = ComponentDetailsTool::execute(&params, &config).await;

        assert_eq!(reply_text(&first), reply_text(&second));
        assert!(dir.path().join("dumps/component_c-123.xml").exists());
    }
}
