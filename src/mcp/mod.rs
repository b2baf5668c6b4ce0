//! MCP server exposing the modernization tools.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo, Tool},
    tool, tool_handler, tool_router,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ErrorData as McpError, ServerHandler, ServiceExt,
};

use crate::{analysis, guides, render};

const INSTRUCTIONS: &str = r#"You are an AI agent code modernizer that converts agent code written with Semantic Kernel or AutoGen to Microsoft Agent Framework.

WORKFLOW for every modernization request:
1. Call analyze_code_patterns to identify the source framework and the patterns used
2. Call get_migration_guide to retrieve the mapping rules for the detected framework
3. Call generate_modernized_code to produce the base modernized structure
4. Complete the generated code so the result is a working program

OUTPUT REQUIREMENTS:
- Include the complete modernized Python source file in a ```python code block
- Convert every function, class and pattern from the original
- Preserve the original application's behavior
- Include all necessary imports and environment setup

KEY MAPPINGS (Semantic Kernel → Agent Framework):
- Kernel() → AzureAIClient().create_agent()
- @kernel_function → plain functions with Annotated type hints as tools
- ChatHistory → agent.get_new_thread()
- FunctionChoiceBehavior.Auto() → automatic tool selection
- kernel.add_plugin() → tools=[...] parameter in create_agent()
- AzureChatCompletion → AzureAIClient with DefaultAzureCredential

KEY MAPPINGS (AutoGen → Agent Framework):
- AssistantAgent → AzureAIClient().create_agent()
- GroupChat/RoundRobinGroupChat → WorkflowBuilder
- UserProxyAgent → workflow handlers
- config_list/llm_config → AzureAIClient configuration
- register_function → tools parameter

Remind developers to install the pinned package versions, configure their .env with Foundry credentials, and review generated code before production use."#;

#[derive(Clone)]
pub struct McpServer {
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Tool definitions with their JSON schemas, as advertised by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "Analyze source code to identify Semantic Kernel or AutoGen patterns. Returns the detected framework, the patterns used, key imports and modernization notes as Markdown. Call this FIRST before generating modernized code."
    )]
    async fn analyze_code_patterns(
        &self,
        params: Parameters<AnalyzeCodePatternsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let report = analysis::analyze_code_patterns(&req.code);

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(
        description = "Generate modernized Microsoft Agent Framework code from Semantic Kernel or AutoGen code. Returns a complete Python listing plus a migration checklist. AutoGen group chats with several agents become a multi-agent workflow."
    )]
    async fn generate_modernized_code(
        &self,
        params: Parameters<GenerateModernizedCodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let text = render::generate_modernized_code(&req.original_code, &req.framework);

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Get a comprehensive migration guide for moving from Semantic Kernel or AutoGen to Microsoft Agent Framework, including concept mappings and before/after examples."
    )]
    async fn get_migration_guide(
        &self,
        params: Parameters<GetMigrationGuideRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let guide = guides::get_migration_guide(&req.source_framework);

        Ok(CallToolResult::success(vec![Content::text(guide)]))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "agent-modernizer".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }
}

/// MCP over streamable HTTP, one server instance per session.
pub fn streamable_http_service() -> StreamableHttpService<McpServer, LocalSessionManager> {
    StreamableHttpService::new(
        || Ok(McpServer::new()),
        LocalSessionManager::default().into(),
        Default::default(),
    )
}

pub async fn run_stdio_server() -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new();
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
