//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analysis engine and text tools over MCP so assistants can
//! inspect a draft without shelling out to the CLI. Each tool delegates to
//! `wordlens-core`; nothing here computes metrics of its own.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use wordlens_core::analysis::{Engine, frequency, word_cloud};
use wordlens_core::config::AnalysisSettings;
use wordlens_core::text;
use wordlens_core::transform::Tool;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Include the full word frequency map in the result.
    #[serde(default)]
    pub include_frequency: bool,
}

/// Parameters for the `word_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequencyParams {
    /// The text to count words in.
    pub text: String,
    /// Maximum number of words to return.
    pub limit: Option<usize>,
}

/// Parameters for the `transform_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TransformTextParams {
    /// The text to transform.
    pub text: String,
    /// Tool name, e.g. "title-case", "collapse-spaces", "find-replace".
    pub tool: Tool,
    /// Regex to search for (find-replace only).
    pub find: Option<String>,
    /// Replacement text (find-replace only).
    pub replace: Option<String>,
}

/// MCP server exposing the analysis engine to AI assistants.
#[derive(Clone)]
pub struct WordlensServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    engine: Engine,
    max_input_bytes: Option<usize>,
}

impl Default for WordlensServer {
    fn default() -> Self {
        Self::new(AnalysisSettings::default(), None)
    }
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl WordlensServer {
    /// Create a server using `settings`, rejecting text above `max_input_bytes`.
    pub fn new(settings: AnalysisSettings, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            engine: Engine::new(settings),
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serialize(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run the full analysis.
    #[tool(
        description = "Analyze text: counts, vocabulary, sentiment, readability, formality, and topics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", len = params.text.len(), "executing MCP tool");
        self.check_size(&params.text)?;

        let mut result = self.engine.run(&params.text);
        if !params.include_frequency {
            result.word_frequency.clear();
        }
        let json = serialize(&result)?;

        tracing::info!(
            tool = "analyze_text",
            words = result.word_count,
            degraded = result.degraded,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Most frequent repeated words.
    #[tool(description = "List words that occur more than once, most frequent first.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_frequency(
        &self,
        Parameters(params): Parameters<WordFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_frequency", limit = ?params.limit, "executing MCP tool");
        self.check_size(&params.text)?;

        let limit = params
            .limit
            .unwrap_or(self.engine.settings().word_cloud_limit);
        let words = text::extract_words(&params.text);
        let cloud = word_cloud(&frequency::word_frequency(&words), limit);
        let json = serialize(&cloud)?;

        tracing::info!(tool = "word_frequency", count = cloud.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Apply a text tool.
    #[tool(description = "Transform text: case changes, whitespace cleanup, reversal, \
                          JSON formatting, alignment, or regex find-replace.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn transform_text(
        &self,
        Parameters(params): Parameters<TransformTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "transform_text", transform = ?params.tool, "executing MCP tool");
        self.check_size(&params.text)?;

        let output = params
            .tool
            .into_transform(params.find, params.replace)
            .apply(&params.text)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(tool = "transform_text", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[tool_handler]
impl ServerHandler for WordlensServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for writing statistics and signals, \
                 word_frequency for repeated words, transform_text for text tools.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
