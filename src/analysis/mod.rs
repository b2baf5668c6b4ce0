//! Pattern classifier for Semantic Kernel and AutoGen code.
//!
//! Every idiom of both dictionaries is tested against the input; the
//! framework with more matching idioms wins. Only presence counts, not the
//! number of occurrences.

mod idioms;

use std::fmt;

use serde::Serialize;

use crate::framework::{title_case, DetectedFramework};

pub use idioms::{
    IdiomRule, AUTOGEN_IDIOMS, AUTOGEN_NOTES, SEMANTIC_KERNEL_IDIOMS, SEMANTIC_KERNEL_NOTES,
};

use idioms::{CompiledIdiom, AUTOGEN_COMPILED, IMPORT_LINE, SEMANTIC_KERNEL_COMPILED};

/// Maximum number of import lines kept in a result.
pub const MAX_IMPORT_LINES: usize = 20;

/// Number of import lines shown in the Markdown report.
const REPORT_IMPORT_LINES: usize = 10;

/// The outcome of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub detected_framework: DetectedFramework,
    /// Idioms of the detected framework that matched, in dictionary order.
    pub matched_idioms: Vec<&'static str>,
    /// Import statements in source order, at most [`MAX_IMPORT_LINES`].
    pub import_lines: Vec<String>,
    /// Modernization notes in note-table order.
    pub notes: Vec<&'static str>,
}

/// Classify `source` as Semantic Kernel, AutoGen or unknown.
///
/// Ties between two non-zero match counts go to AutoGen. This is kept as an
/// explicit policy so reports stay stable for callers comparing output.
pub fn classify(source: &str) -> ClassificationResult {
    let sk_matches = matching_idioms(&SEMANTIC_KERNEL_COMPILED, source);
    let autogen_matches = matching_idioms(&AUTOGEN_COMPILED, source);

    let (detected_framework, matched_idioms) =
        if sk_matches.len() > autogen_matches.len() && !sk_matches.is_empty() {
            (DetectedFramework::SemanticKernel, sk_matches)
        } else if !autogen_matches.is_empty() {
            (DetectedFramework::AutoGen, autogen_matches)
        } else {
            (DetectedFramework::Unknown, Vec::new())
        };

    let notes = modernization_notes(detected_framework, &matched_idioms);

    tracing::debug!(
        framework = detected_framework.as_str(),
        idioms = matched_idioms.len(),
        "Classified source"
    );

    ClassificationResult {
        detected_framework,
        matched_idioms,
        import_lines: import_lines(source),
        notes,
    }
}

fn matching_idioms(rules: &[CompiledIdiom], source: &str) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|idiom| idiom.regex.is_match(source))
        .map(|idiom| idiom.rule.name)
        .collect()
}

/// Extract import statements in source order, capped at [`MAX_IMPORT_LINES`].
pub fn import_lines(source: &str) -> Vec<String> {
    IMPORT_LINE
        .find_iter(source)
        .take(MAX_IMPORT_LINES)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Look up notes for the matched idioms of `framework`.
pub fn modernization_notes(framework: DetectedFramework, matched: &[&str]) -> Vec<&'static str> {
    let table = match framework {
        DetectedFramework::SemanticKernel => SEMANTIC_KERNEL_NOTES,
        DetectedFramework::AutoGen => AUTOGEN_NOTES,
        DetectedFramework::Unknown => return Vec::new(),
    };

    table
        .iter()
        .filter(|(idiom, _)| matched.contains(idiom))
        .map(|(_, note)| *note)
        .collect()
}

/// Classify `code` and render the result as a Markdown report.
pub fn analyze_code_patterns(code: &str) -> String {
    classify(code).to_string()
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Code Analysis Results")?;
        writeln!(f)?;
        writeln!(
            f,
            "### Detected Framework: {}",
            self.detected_framework.display_name()
        )?;
        writeln!(f)?;
        writeln!(f, "### Patterns Found:")?;
        for idiom in &self.matched_idioms {
            writeln!(f, "- {}", title_case(idiom))?;
        }
        writeln!(f)?;
        writeln!(f, "### Key Imports:")?;
        writeln!(f, "```python")?;
        for line in self.import_lines.iter().take(REPORT_IMPORT_LINES) {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(f, "### Modernization Notes:")?;
        for note in &self.notes {
            writeln!(f, "- {}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_creation_alone_is_semantic_kernel() {
        let result = classify("kernel = Kernel()");

        assert_eq!(result.detected_framework, DetectedFramework::SemanticKernel);
        assert_eq!(result.matched_idioms, vec!["kernel_creation"]);
        assert_eq!(
            result.notes,
            vec!["Replace `Kernel()` with `AzureAIClient().create_agent()` for agent creation"]
        );
    }

    #[test]
    fn equal_counts_resolve_to_autogen() {
        // one idiom from each dictionary
        let result = classify("k = Kernel()\nbot = UserProxyAgent(name='u')");

        assert_eq!(result.detected_framework, DetectedFramework::AutoGen);
        assert_eq!(result.matched_idioms, vec!["user_proxy"]);
    }

    #[test]
    fn plain_text_is_unknown() {
        let result = classify("hello world");

        assert_eq!(result.detected_framework, DetectedFramework::Unknown);
        assert!(result.matched_idioms.is_empty());
        assert!(result.notes.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = classify("FROM AUTOGEN IMPORT thing");
        assert_eq!(result.detected_framework, DetectedFramework::AutoGen);
        assert_eq!(result.matched_idioms, vec!["autogen_import"]);
    }

    #[test]
    fn notes_follow_table_order_not_dictionary_order() {
        let source = "from semantic_kernel.functions import kernel_function\n\
                      kernel = Kernel()\n\
                      planner = SequentialPlanner(kernel)\n";
        let result = classify(source);

        assert_eq!(
            result.matched_idioms,
            vec!["kernel_import", "kernel_creation", "plugin_import", "planner"]
        );
        assert_eq!(result.notes.len(), 3);
        assert!(result.notes[0].contains("Kernel()"));
        assert!(result.notes[1].contains("planners"));
        assert!(result.notes[2].contains("plugins"));
    }

    #[test]
    fn import_lines_are_capped_and_ordered() {
        let source: String = (0..25).map(|i| format!("import mod{}\n", i)).collect();
        let lines = import_lines(&source);

        assert_eq!(lines.len(), MAX_IMPORT_LINES);
        assert_eq!(lines[0], "import mod0");
        assert_eq!(lines[19], "import mod19");
    }

    #[test]
    fn indented_imports_are_ignored() {
        let lines = import_lines("def f():\n    import os\nfrom a.b import c\n");
        assert_eq!(lines, vec!["from a.b import c"]);
    }

    #[test]
    fn report_lists_first_ten_imports() {
        let source: String = (0..12).map(|i| format!("import mod{}\n", i)).collect();
        let report = analyze_code_patterns(&source);

        assert!(report.contains("import mod9\n"));
        assert!(!report.contains("import mod10"));
        assert!(report.contains("### Detected Framework: Unknown"));
    }

    #[test]
    fn report_titles_idioms() {
        let report = analyze_code_patterns("groupchat = GroupChat(agents=[a, b])");
        assert!(report.contains("### Detected Framework: Autogen"));
        assert!(report.contains("- Group Chat\n"));
    }
}
