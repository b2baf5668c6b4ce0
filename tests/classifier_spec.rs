use agent_modernizer::analysis::{self, MAX_IMPORT_LINES};
use agent_modernizer::framework::DetectedFramework;
use speculate2::speculate;

const SEMANTIC_KERNEL_AGENT: &str = r#"
import asyncio
from semantic_kernel import Kernel
from semantic_kernel.connectors.ai.open_ai import AzureChatCompletion
from semantic_kernel.functions import kernel_function

kernel = Kernel()
kernel.add_service(AzureChatCompletion(deployment_name="gpt-4o"))
"#;

const AUTOGEN_GROUP_CHAT: &str = r#"
import autogen

config_list = [{"model": "gpt-4"}]
writer = autogen.AssistantAgent(name="writer", llm_config={"config_list": config_list})
user = autogen.UserProxyAgent(name="user", code_execution_config={"work_dir": "out"})
chat = autogen.GroupChat(agents=[user, writer], messages=[])
manager = autogen.GroupChatManager(groupchat=chat)
"#;

speculate! {
    describe "classify" {
        it "detects Semantic Kernel from its imports and kernel" {
            let result = analysis::classify(SEMANTIC_KERNEL_AGENT);

            assert_eq!(result.detected_framework, DetectedFramework::SemanticKernel);
            assert_eq!(
                result.matched_idioms,
                vec!["kernel_import", "kernel_creation", "plugin_import", "connector"]
            );
            assert_eq!(result.import_lines.len(), 4);
            assert_eq!(result.import_lines[0], "import asyncio");
        }

        it "detects AutoGen group chats" {
            let result = analysis::classify(AUTOGEN_GROUP_CHAT);

            assert_eq!(result.detected_framework, DetectedFramework::AutoGen);
            assert!(result.matched_idioms.contains(&"group_chat"));
            assert!(result.matched_idioms.contains(&"user_proxy"));
            assert!(result.matched_idioms.contains(&"config_list"));
            assert!(result.notes.iter().any(|note| note.contains("GroupChat")));
        }

        it "returns unknown for empty input" {
            let result = analysis::classify("");

            assert_eq!(result.detected_framework, DetectedFramework::Unknown);
            assert!(result.matched_idioms.is_empty());
            assert!(result.import_lines.is_empty());
            assert!(result.notes.is_empty());
        }

        it "matches idioms case-insensitively" {
            let result = analysis::classify("KERNEL = KERNEL()");
            assert_eq!(result.detected_framework, DetectedFramework::SemanticKernel);
        }

        it "is deterministic" {
            let first = analysis::classify(AUTOGEN_GROUP_CHAT);
            let second = analysis::classify(AUTOGEN_GROUP_CHAT);
            assert_eq!(first, second);
        }

        it "caps import lines" {
            let source: String = (0..30).map(|i| format!("import module_{}\n", i)).collect();
            let result = analysis::classify(&source);

            assert_eq!(result.import_lines.len(), MAX_IMPORT_LINES);
            assert_eq!(result.import_lines[0], "import module_0");
            assert_eq!(result.import_lines[MAX_IMPORT_LINES - 1], "import module_19");
        }
    }

    describe "analyze_code_patterns" {
        it "renders a Markdown report" {
            let report = analysis::analyze_code_patterns("kernel = Kernel()");

            assert!(report.starts_with("## Code Analysis Results"));
            assert!(report.contains("### Detected Framework: Semantic Kernel"));
            assert!(report.contains("- Kernel Creation"));
            assert!(report.contains("### Modernization Notes:"));
        }

        it "shows at most ten imports" {
            let source: String = (0..15).map(|i| format!("import module_{}\n", i)).collect();
            let report = analysis::analyze_code_patterns(&source);

            assert!(report.contains("import module_9\n"));
            assert!(!report.contains("import module_10"));
        }

        it "reports unknown frameworks" {
            let report = analysis::analyze_code_patterns("print('hello')");
            assert!(report.contains("### Detected Framework: Unknown"));
        }
    }
}
