// MCP tool surface: thin glue between the protocol SDK and the engine.
// The engine itself never fails on string input; this layer catches anything
// unexpected and reports a protocol error distinct from a zero-match result.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, error};

use crate::matcher::{AdverbMatcher, CheckResult};

/// Fixed rendering for a zero-match result.
pub const NO_ADVERBS_MESSAGE: &str = "No adverbs found.";

/// Render a check result as the user-visible tool message.
pub fn render_result(result: &CheckResult) -> String {
    if result.count == 0 {
        NO_ADVERBS_MESSAGE.to_string()
    } else {
        format!(
            "Found {} adverb(s): {}",
            result.count,
            result.adverbs.join(", ")
        )
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CheckAdverbsParams {
    /// Text to scan for adverbs
    pub text: String,
}

/// MCP service exposing the `check_adverbs` tool over stdio.
#[derive(Clone)]
pub struct AdverbService {
    matcher: Arc<AdverbMatcher>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AdverbService {
    pub fn new(matcher: Arc<AdverbMatcher>) -> Self {
        Self {
            matcher,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Check the supplied text for adverb words and phrases from the curated lexicon"
    )]
    async fn check_adverbs(
        &self,
        Parameters(params): Parameters<CheckAdverbsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(chars = params.text.chars().count(), "check_adverbs request");

        // The engine is total over string input; a panic here is a bug, but
        // it must surface as a tool error, not tear down the server.
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.matcher.check(&params.text)
        }));

        match outcome {
            Ok(result) => Ok(CallToolResult::success(vec![Content::text(
                render_result(&result),
            )])),
            Err(_) => {
                error!("check_adverbs panicked");
                Err(McpError::internal_error("Error checking adverbs", None))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for AdverbService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Detects adverbs in free-form text against a curated word and phrase list. \
                 Call check_adverbs with the text to scan."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
