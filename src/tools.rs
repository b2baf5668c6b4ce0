//! Name-based dispatch over the three modernization tools.
//!
//! The MCP server routes calls through its own tool router; this module
//! serves callers that only have a tool name and a JSON argument object,
//! such as the REST `tools/call` endpoint.

use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{analysis, guides, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    AnalyzeCodePatterns,
    GenerateModernizedCode,
    GetMigrationGuide,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        Self::AnalyzeCodePatterns,
        Self::GenerateModernizedCode,
        Self::GetMigrationGuide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyzeCodePatterns => "analyze_code_patterns",
            Self::GenerateModernizedCode => "generate_modernized_code",
            Self::GetMigrationGuide => "get_migration_guide",
        }
    }
}

impl FromStr for ToolName {
    type Err = ToolCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolCallError::UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing argument '{argument}' for tool {tool}")]
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },

    #[error("Argument '{argument}' for tool {tool} must be a string")]
    InvalidArgument {
        tool: &'static str,
        argument: &'static str,
    },
}

/// Invoke a tool by name with a JSON object of string arguments.
pub fn call_tool(name: &str, arguments: &Map<String, Value>) -> Result<String, ToolCallError> {
    let tool = ToolName::from_str(name)?;

    tracing::debug!(tool = tool.as_str(), "Calling tool");

    let text = match tool {
        ToolName::AnalyzeCodePatterns => {
            analysis::analyze_code_patterns(string_arg(tool, arguments, "code")?)
        }
        ToolName::GenerateModernizedCode => render::generate_modernized_code(
            string_arg(tool, arguments, "original_code")?,
            string_arg(tool, arguments, "framework")?,
        ),
        ToolName::GetMigrationGuide => {
            guides::get_migration_guide(string_arg(tool, arguments, "source_framework")?)
                .to_string()
        }
    };

    Ok(text)
}

fn string_arg<'a>(
    tool: ToolName,
    arguments: &'a Map<String, Value>,
    argument: &'static str,
) -> Result<&'a str, ToolCallError> {
    match arguments.get(argument) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ToolCallError::InvalidArgument {
            tool: tool.as_str(),
            argument,
        }),
        None => Err(ToolCallError::MissingArgument {
            tool: tool.as_str(),
            argument,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn dispatches_guide_lookup() {
        let text = call_tool("get_migration_guide", &args(json!({ "source_framework": "sk" })))
            .expect("tool call failed");
        assert_eq!(text, guides::get_migration_guide("semantic_kernel"));
    }

    #[test]
    fn rejects_unknown_tool() {
        let err = call_tool("delete_everything", &Map::new()).unwrap_err();
        assert_eq!(err, ToolCallError::UnknownTool("delete_everything".to_string()));
    }

    #[test]
    fn reports_missing_argument() {
        let err = call_tool("generate_modernized_code", &args(json!({ "original_code": "" })))
            .unwrap_err();
        assert_eq!(
            err,
            ToolCallError::MissingArgument {
                tool: "generate_modernized_code",
                argument: "framework",
            }
        );
    }

    #[test]
    fn rejects_non_string_argument() {
        let err = call_tool("analyze_code_patterns", &args(json!({ "code": 42 }))).unwrap_err();
        assert!(matches!(err, ToolCallError::InvalidArgument { argument: "code", .. }));
    }

    #[test]
    fn every_tool_name_round_trips() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>(), Ok(tool));
        }
    }
}
