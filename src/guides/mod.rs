//! Static migration guides.

use crate::framework::SourceFramework;

/// Returned when a guide is requested for an unrecognized framework.
pub const UNKNOWN_GUIDE_MESSAGE: &str =
    "Please specify 'semantic_kernel' or 'autogen' as the source framework.";

const SEMANTIC_KERNEL_GUIDE: &str = include_str!("semantic_kernel.md");
const AUTOGEN_GUIDE: &str = include_str!("autogen.md");

/// The migration guide for `framework`.
pub fn guide(framework: SourceFramework) -> &'static str {
    match framework {
        SourceFramework::SemanticKernel => SEMANTIC_KERNEL_GUIDE,
        SourceFramework::AutoGen => AUTOGEN_GUIDE,
    }
}

/// Look up a guide by caller supplied label, falling back to
/// [`UNKNOWN_GUIDE_MESSAGE`].
pub fn get_migration_guide(source_framework: &str) -> &'static str {
    match SourceFramework::from_guide_label(source_framework) {
        Some(framework) => guide(framework),
        None => UNKNOWN_GUIDE_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_a_document() {
        assert_eq!(get_migration_guide("sk"), get_migration_guide("semantic_kernel"));
        assert_eq!(get_migration_guide("pyautogen"), get_migration_guide("AutoGen"));
    }

    #[test]
    fn guides_are_distinct() {
        assert_ne!(
            guide(SourceFramework::SemanticKernel),
            guide(SourceFramework::AutoGen)
        );
        assert!(guide(SourceFramework::AutoGen).starts_with("# AutoGen to Microsoft Agent Framework"));
    }

    #[test]
    fn render_only_aliases_are_not_guides() {
        assert_eq!(get_migration_guide("auto-gen"), UNKNOWN_GUIDE_MESSAGE);
    }
}
