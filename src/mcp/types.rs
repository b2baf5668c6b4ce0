//! Request types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeCodePatternsRequest {
    #[schemars(description = "The source code to analyze for AI agent patterns.")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GenerateModernizedCodeRequest {
    #[schemars(description = "The original Semantic Kernel or AutoGen code to modernize.")]
    pub original_code: String,
    #[schemars(description = "The source framework: 'semantic_kernel' or 'autogen'.")]
    pub framework: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetMigrationGuideRequest {
    #[schemars(description = "The source framework: 'semantic_kernel' or 'autogen'.")]
    pub source_framework: String,
}
