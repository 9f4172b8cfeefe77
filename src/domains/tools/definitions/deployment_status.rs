//! Deployment status query tool.
//!
//! Queries non-current deployment records for an environment via
//! `POST <accountId>/Deployment/query` and replies with the raw query result
//! as pretty-printed JSON.

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
use serde_json::{Value, json};
use tracing::info;

use super::common::{error_result, render_json, success_result};
use crate::boomi::{ApiOutcome, BoomiClient};
use crate::core::Config;

/// Parameters for a deployment status query.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStatusParams {
    /// The environment to query. The literal `"test"` is an override hook:
    /// it substitutes the statically configured environment id.
    #[schemars(
        description = "Environment id to query; pass 'test' to use the configured environment"
    )]
    pub environment_id: String,
}

/// Deployment status query tool implementation.
#[derive(Debug, Clone)]
pub struct DeploymentStatusTool;

impl DeploymentStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "queryDeploymentStatus";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Query non-current deployment records for a Boomi environment. Returns the raw AtomSphere query result as pretty-printed JSON.";

    /// Execute the tool logic.
    pub async fn execute(params: &DeploymentStatusParams, config: &Arc<Config>) -> CallToolResult {
        let environment_id = if params.environment_id == "test" {
            info!(
                "Client passed 'test' as environmentId; using configured value: {}",
                config.boomi.environment_id
            );
            config.boomi.environment_id.clone()
        } else {
            info!(
                "Querying deployments for environment {}",
                params.environment_id
            );
            params.environment_id.clone()
        };

        let endpoint = format!("{}/Deployment/query", config.boomi.account_id);
        let body = deployment_query_filter(&environment_id);

        let client = BoomiClient::new(config.clone());
        match client.call(&endpoint, Method::POST, Some(&body)).await {
            ApiOutcome::Success(body) => success_result(render_json(&body)),
            ApiOutcome::Failure(failure) => error_result(&format!(
                "Error: {}\n{}",
                failure.message,
                failure.details_pretty()
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeploymentStatusParams>(),
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
                let params: DeploymentStatusParams =
                    serde_json::from_value(Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// The fixed query filter shape: and( environmentId EQUALS <env>,
/// current EQUALS false ). Not user-composable beyond the environment id.
pub fn deployment_query_filter(environment_id: &str) -> Value {
    json!({
        "QueryFilter": {
            "expression": {
                "operator": "and",
                "nestedExpression": [
                    {
                        "argument": [environment_id],
                        "operator": "EQUALS",
                        "property": "environmentId",
                    },
                    {
                        "argument": [false],
                        "operator": "EQUALS",
                        "property": "current",
                    },
                ],
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::reply_text;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String, dir: &std::path::Path) -> Arc<Config> {
        let mut config = Config::default();
        config.boomi.user = "user@example.com".to_string();
        config.boomi.token = "token".to_string();
        config.boomi.account_id = "acct-1".to_string();
        config.boomi.environment_id = "env-static".to_string();
        config.boomi.base_url = base_url;
        config.storage.dump_dir = dir.join("dumps");
        config.storage.diagnostics_path = dir.join("missing.txt");
        Arc::new(config)
    }

    #[test]
    fn test_params_wire_shape() {
        let json = r#"{"environmentId": "env-123"}"#;
        let params: DeploymentStatusParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.environment_id, "env-123");
    }

    #[test]
    fn test_query_filter_shape() {
        let filter = deployment_query_filter("env-123");
        assert_eq!(
            filter,
            json!({
                "QueryFilter": {
                    "expression": {
                        "operator": "and",
                        "nestedExpression": [
                            {"argument": ["env-123"], "operator": "EQUALS", "property": "environmentId"},
                            {"argument": [false], "operator": "EQUALS", "property": "current"},
                        ],
                    },
                },
            })
        );
    }

    #[tokio::test]
    async fn test_test_sentinel_substitutes_configured_environment() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/acct-1/Deployment/query"))
            .and(body_json(deployment_query_filter("env-static")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"numberOfResults": 0})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = DeploymentStatusParams {
            environment_id: "test".to_string(),
        };

        let result = DeploymentStatusTool::execute(&params, &config).await;
        assert!(!result.is_error.unwrap_or(false));
    }

    #[tokio::test]
    async fn test_explicit_environment_is_used_verbatim() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/acct-1/Deployment/query"))
            .and(body_json(deployment_query_filter("env-123")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"numberOfResults": 2})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = DeploymentStatusParams {
            environment_id: "env-123".to_string(),
        };

        let result = DeploymentStatusTool::execute(&params, &config).await;
        assert!(!result.is_error.unwrap_or(false));

        let text = reply_text(&result);
        assert!(text.contains("\"numberOfResults\": 2"));
    }

    #[tokio::test]
    async fn test_http_500_renders_error_reply() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/acct-1/Deployment/query"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let config = test_config(server.uri(), dir.path());
        let params = DeploymentStatusParams {
            environment_id: "env-123".to_string(),
        };

        let result = DeploymentStatusTool::execute(&params, &config).await;
        assert!(result.is_error.unwrap_or(false));

        let text = reply_text(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("500"));
    }

    #[tokio::test]
    async fn test_missing_credentials_reply_points_at_marker() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.diagnostics_path = dir.path().join("missing.txt");
        let config = Arc::new(config);

        let params = DeploymentStatusParams {
            environment_id: "env-123".to_string(),
        };

        let result = DeploymentStatusTool::execute(&params, &config).await;
        assert!(result.is_error.unwrap_or(false));

        let text = reply_text(&result);
        assert!(text.starts_with("Error: Missing Boomi credentials"));
    }
}
