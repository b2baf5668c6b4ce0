//! Source framework labels.
//!
//! Callers identify the framework a snippet was written against with a free
//! form label. The renderer and the guide lookup accept slightly different
//! alias sets, so both are kept here side by side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A framework that code can be modernized from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceFramework {
    SemanticKernel,
    #[serde(rename = "autogen")]
    AutoGen,
}

/// Label aliases accepted when generating modernized code.
const RENDER_ALIASES: &[(&str, SourceFramework)] = &[
    ("semantic_kernel", SourceFramework::SemanticKernel),
    ("sk", SourceFramework::SemanticKernel),
    ("semantickernel", SourceFramework::SemanticKernel),
    ("autogen", SourceFramework::AutoGen),
    ("pyautogen", SourceFramework::AutoGen),
    ("auto-gen", SourceFramework::AutoGen),
];

/// Label aliases accepted when looking up a migration guide.
const GUIDE_ALIASES: &[(&str, SourceFramework)] = &[
    ("semantic_kernel", SourceFramework::SemanticKernel),
    ("sk", SourceFramework::SemanticKernel),
    ("autogen", SourceFramework::AutoGen),
    ("pyautogen", SourceFramework::AutoGen),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized source framework '{0}'")]
pub struct ParseFrameworkError(pub String);

impl SourceFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SemanticKernel => "semantic_kernel",
            Self::AutoGen => "autogen",
        }
    }

    /// Resolve a label using the renderer's alias set.
    pub fn from_render_label(label: &str) -> Option<Self> {
        lookup(RENDER_ALIASES, label)
    }

    /// Resolve a label using the guide repository's alias set.
    pub fn from_guide_label(label: &str) -> Option<Self> {
        lookup(GUIDE_ALIASES, label)
    }
}

fn lookup(aliases: &[(&str, SourceFramework)], label: &str) -> Option<SourceFramework> {
    let label = label.to_lowercase();
    aliases
        .iter()
        .find(|(alias, _)| *alias == label)
        .map(|(_, framework)| *framework)
}

impl FromStr for SourceFramework {
    type Err = ParseFrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_render_label(s).ok_or_else(|| ParseFrameworkError(s.to_string()))
    }
}

impl fmt::Display for SourceFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying a snippet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DetectedFramework {
    SemanticKernel,
    #[serde(rename = "autogen")]
    AutoGen,
    Unknown,
}

impl DetectedFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SemanticKernel => "semantic_kernel",
            Self::AutoGen => "autogen",
            Self::Unknown => "unknown",
        }
    }

    /// Human readable name, e.g. "Semantic Kernel".
    pub fn display_name(&self) -> String {
        title_case(self.as_str())
    }
}

impl From<SourceFramework> for DetectedFramework {
    fn from(framework: SourceFramework) -> Self {
        match framework {
            SourceFramework::SemanticKernel => Self::SemanticKernel,
            SourceFramework::AutoGen => Self::AutoGen,
        }
    }
}

impl fmt::Display for DetectedFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn a snake_case identifier into space separated title case words.
pub(crate) fn title_case(ident: &str) -> String {
    ident
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
