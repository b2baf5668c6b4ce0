use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analysis::{self, ClassificationResult};
use crate::framework::SourceFramework;
use crate::guides;
use crate::mcp::{AnalyzeCodePatternsRequest, GenerateModernizedCodeRequest, McpServer};
use crate::render::{self, ChecklistItem, TemplateVariant};
use crate::tools::{self, ToolCallError};

// ============================================================
// Error Handling
// ============================================================

fn tool_error(e: ToolCallError) -> (StatusCode, String) {
    let status = match e {
        ToolCallError::UnknownTool(_) => StatusCode::NOT_FOUND,
        ToolCallError::MissingArgument { .. } | ToolCallError::InvalidArgument { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    tracing::warn!("Tool call rejected: {}", e);
    (status, e.to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Tools
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
    /// Caller context, logged but otherwise ignored.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolCallResponse {
    pub name: String,
    pub text: String,
}

pub async fn list_tools(State(server): State<McpServer>) -> Json<Vec<Tool>> {
    Json(server.tools())
}

pub async fn call_tool(
    Json(req): Json<ToolCallRequest>,
) -> Result<Json<ToolCallResponse>, (StatusCode, String)> {
    if !req.metadata.is_empty() {
        tracing::debug!(metadata = ?req.metadata, "Tool call metadata");
    }

    let text = tools::call_tool(&req.name, &req.arguments).map_err(tool_error)?;

    Ok(Json(ToolCallResponse {
        name: req.name,
        text,
    }))
}

// ============================================================
// Analysis
// ============================================================

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: ClassificationResult,
    /// The Markdown report returned by the `analyze_code_patterns` tool.
    pub report: String,
}

pub async fn analyze(Json(req): Json<AnalyzeCodePatternsRequest>) -> Json<AnalyzeResponse> {
    let result = analysis::classify(&req.code);
    let report = result.to_string();

    Json(AnalyzeResponse { result, report })
}

// ============================================================
// Generation
// ============================================================

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// `None` when the framework label was not recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<SourceFramework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<TemplateVariant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,
    pub text: String,
}

pub async fn generate(Json(req): Json<GenerateModernizedCodeRequest>) -> Json<GenerateResponse> {
    let response = match SourceFramework::from_render_label(&req.framework) {
        Some(framework) => {
            let artifact = render::render(&req.original_code, framework);
            GenerateResponse {
                framework: Some(framework),
                variant: Some(artifact.variant),
                text: artifact.to_string(),
                checklist: artifact.checklist,
            }
        }
        None => GenerateResponse {
            framework: None,
            variant: None,
            checklist: Vec::new(),
            text: render::UNKNOWN_FRAMEWORK_MESSAGE.to_string(),
        },
    };

    Json(response)
}

// ============================================================
// Guides
// ============================================================

#[derive(Debug, Serialize)]
pub struct GuideResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<SourceFramework>,
    pub text: &'static str,
}

pub async fn get_guide(Path(framework): Path<String>) -> Json<GuideResponse> {
    Json(GuideResponse {
        framework: SourceFramework::from_guide_label(&framework),
        text: guides::get_migration_guide(&framework),
    })
}
