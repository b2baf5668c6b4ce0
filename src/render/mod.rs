//! Snippet renderer producing Microsoft Agent Framework code.
//!
//! A handful of names are pulled out of the original snippet with regular
//! expressions and substituted into one of three fixed listings:
//!
//! - single tool: Semantic Kernel code with `@kernel_function` tools
//! - single agent: AutoGen code without a group chat
//! - multi-agent workflow: AutoGen group chats with more than one agent
//!
//! Extraction misses fall back to defaults. The only soft error is an
//! unrecognized framework label.

mod template;
mod templates;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::framework::SourceFramework;

pub use template::Template;
pub use templates::DEFAULT_INSTRUCTIONS;

/// Returned instead of an artifact when the framework label is unknown.
pub const UNKNOWN_FRAMEWORK_MESSAGE: &str =
    "Unable to determine source framework. Please specify 'semantic_kernel' or 'autogen'.";

/// Maximum number of `@kernel_function` tools converted.
pub const MAX_TOOL_FUNCTIONS: usize = 5;

/// Maximum number of AutoGen agents carried into a workflow.
pub const MAX_AGENTS: usize = 4;

static KERNEL_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)@(?:kernel_function|sk_function).*?\ndef\s+(\w+)")
        .expect("Valid kernel function regex")
});

static SK_INSTRUCTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:system_message|instructions?)\s*[=:]\s*["']([^"']+)["']"#)
        .expect("Valid instructions regex")
});

static SYSTEM_MESSAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"system_message\s*[=:]\s*["']([^"']+)["']"#).expect("Valid system message regex")
});

static GROUP_CHAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GroupChat\(|GroupChatManager").expect("Valid group chat regex"));

static AGENT_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*=\s*(?:AssistantAgent|ConversableAgent|UserProxyAgent)\(")
        .expect("Valid agent assignment regex")
});

// ============================================================
// Artifact types
// ============================================================

/// The listing shape chosen for a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    SingleTool,
    SingleAgent,
    MultiAgentWorkflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    /// Handled by the generated listing.
    Done,
    /// Needs a human to finish or verify.
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub status: ChecklistStatus,
    pub text: &'static str,
}

impl ChecklistItem {
    pub const fn done(text: &'static str) -> Self {
        Self {
            status: ChecklistStatus::Done,
            text,
        }
    }

    pub const fn review(text: &'static str) -> Self {
        Self {
            status: ChecklistStatus::Review,
            text,
        }
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.status {
            ChecklistStatus::Done => "✅",
            ChecklistStatus::Review => "⚠️",
        };
        write!(f, "{} {}", mark, self.text)
    }
}

/// A named orchestration pattern, listed as prose under multi-agent output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrchestrationPattern {
    pub name: &'static str,
    pub description: &'static str,
}

/// A rendered replacement listing plus its migration checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedArtifact {
    pub variant: TemplateVariant,
    /// Python source of the replacement program.
    pub body: String,
    pub checklist: Vec<ChecklistItem>,
    /// Empty except for the multi-agent workflow variant.
    pub orchestration_patterns: Vec<OrchestrationPattern>,
}

impl RenderedArtifact {
    fn heading(&self) -> &'static str {
        match self.variant {
            TemplateVariant::SingleTool | TemplateVariant::SingleAgent => {
                "Modernized Code (Agent Framework)"
            }
            TemplateVariant::MultiAgentWorkflow => "Modernized Multi-Agent Workflow (Agent Framework)",
        }
    }
}

impl fmt::Display for RenderedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.heading())?;
        writeln!(f)?;
        writeln!(f, "```python")?;
        writeln!(f, "{}", self.body)?;
        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(f, "### Migration Checklist:")?;
        for (i, item) in self.checklist.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, item)?;
        }
        if !self.orchestration_patterns.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Orchestration Patterns Available:")?;
            for pattern in &self.orchestration_patterns {
                writeln!(f, "- **{}**: {}", pattern.name, pattern.description)?;
            }
        }
        Ok(())
    }
}

// ============================================================
// Extraction
// ============================================================

/// Names and instructions pulled from Semantic Kernel code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticKernelExtraction {
    /// Functions declared after `@kernel_function`, at most [`MAX_TOOL_FUNCTIONS`].
    pub tool_names: Vec<String>,
    pub instructions: String,
}

pub fn extract_semantic_kernel(code: &str) -> SemanticKernelExtraction {
    let tool_names = KERNEL_FUNCTION
        .captures_iter(code)
        .take(MAX_TOOL_FUNCTIONS)
        .map(|caps| caps[1].to_string())
        .collect();

    SemanticKernelExtraction {
        tool_names,
        instructions: first_capture(&SK_INSTRUCTIONS, code),
    }
}

/// Agents and instructions pulled from AutoGen code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoGenExtraction {
    /// Variables assigned an AutoGen agent, at most [`MAX_AGENTS`].
    pub agent_names: Vec<String>,
    pub instructions: String,
    pub has_group_chat: bool,
}

impl AutoGenExtraction {
    pub fn is_multi_agent(&self) -> bool {
        self.has_group_chat && self.agent_names.len() > 1
    }
}

pub fn extract_autogen(code: &str) -> AutoGenExtraction {
    let agent_names = AGENT_ASSIGNMENT
        .captures_iter(code)
        .take(MAX_AGENTS)
        .map(|caps| caps[1].to_string())
        .collect();

    AutoGenExtraction {
        agent_names,
        instructions: first_capture(&SYSTEM_MESSAGE, code),
        has_group_chat: GROUP_CHAT.is_match(code),
    }
}

fn first_capture(regex: &Regex, code: &str) -> String {
    regex
        .captures(code)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string())
}

// ============================================================
// Rendering
// ============================================================

/// Render a replacement artifact for `code` written against `framework`.
pub fn render(code: &str, framework: SourceFramework) -> RenderedArtifact {
    let artifact = match framework {
        SourceFramework::SemanticKernel => render_single_tool(&extract_semantic_kernel(code)),
        SourceFramework::AutoGen => {
            let extraction = extract_autogen(code);
            if extraction.is_multi_agent() {
                render_multi_agent(&extraction)
            } else {
                render_single_agent(&extraction)
            }
        }
    };

    tracing::debug!(
        framework = framework.as_str(),
        variant = ?artifact.variant,
        "Rendered modernized code"
    );

    artifact
}

/// Render modernized code for a caller supplied framework label.
///
/// Returns [`UNKNOWN_FRAMEWORK_MESSAGE`] when the label is not recognized.
pub fn generate_modernized_code(original_code: &str, framework: &str) -> String {
    match SourceFramework::from_render_label(framework) {
        Some(framework) => render(original_code, framework).to_string(),
        None => {
            tracing::debug!(label = framework, "Unrecognized framework label");
            UNKNOWN_FRAMEWORK_MESSAGE.to_string()
        }
    }
}

pub fn render_single_tool(extraction: &SemanticKernelExtraction) -> RenderedArtifact {
    let tools = if extraction.tool_names.is_empty() {
        String::new()
    } else {
        let stubs: String = extraction
            .tool_names
            .iter()
            .map(|name| templates::TOOL_STUB.render(&[("name", name.as_str())]))
            .collect();
        templates::SEMANTIC_KERNEL_TOOLS.render(&[("stubs", stubs.as_str())])
    };

    let tool_list = if extraction.tool_names.is_empty() {
        templates::NO_TOOLS_PLACEHOLDER.to_string()
    } else {
        extraction.tool_names.join(", ")
    };

    let body = templates::SEMANTIC_KERNEL_LISTING.render(&[
        ("tools", tools.as_str()),
        ("instructions", extraction.instructions.as_str()),
        ("tool_list", tool_list.as_str()),
    ]);

    RenderedArtifact {
        variant: TemplateVariant::SingleTool,
        body,
        checklist: templates::SEMANTIC_KERNEL_CHECKLIST.to_vec(),
        orchestration_patterns: Vec::new(),
    }
}

pub fn render_single_agent(extraction: &AutoGenExtraction) -> RenderedArtifact {
    let body =
        templates::SINGLE_AGENT_LISTING.render(&[("instructions", extraction.instructions.as_str())]);

    RenderedArtifact {
        variant: TemplateVariant::SingleAgent,
        body,
        checklist: templates::SINGLE_AGENT_CHECKLIST.to_vec(),
        orchestration_patterns: Vec::new(),
    }
}

pub fn render_multi_agent(extraction: &AutoGenExtraction) -> RenderedArtifact {
    let agents = extraction
        .agent_names
        .iter()
        .map(|name| templates::AGENT_ENTRY.render(&[("name", name.as_str())]))
        .collect::<Vec<_>>()
        .join("\n");

    let body = templates::MULTI_AGENT_LISTING.render(&[
        ("instructions", extraction.instructions.as_str()),
        ("agents", agents.as_str()),
    ]);

    RenderedArtifact {
        variant: TemplateVariant::MultiAgentWorkflow,
        body,
        checklist: templates::MULTI_AGENT_CHECKLIST.to_vec(),
        orchestration_patterns: templates::ORCHESTRATION_PATTERNS.to_vec(),
    }
}
