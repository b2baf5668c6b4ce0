//! Idiom dictionaries and modernization note tables.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A named construct recognizable in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdiomRule {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Semantic Kernel idioms, in report order.
pub const SEMANTIC_KERNEL_IDIOMS: &[IdiomRule] = &[
    IdiomRule {
        name: "kernel_import",
        pattern: r"from\s+semantic_kernel|import\s+semantic_kernel",
    },
    IdiomRule {
        name: "kernel_creation",
        pattern: r"Kernel\(\)|kernel\s*=\s*Kernel",
    },
    IdiomRule {
        name: "plugin_import",
        pattern: r"from\s+semantic_kernel\.functions|\.plugins",
    },
    IdiomRule {
        name: "chat_completion",
        pattern: r"ChatCompletionClientBase|add_chat_service",
    },
    IdiomRule {
        name: "native_function",
        pattern: r"@kernel_function|@sk_function",
    },
    IdiomRule {
        name: "prompt_template",
        pattern: r"PromptTemplateConfig|ChatPromptTemplate",
    },
    IdiomRule {
        name: "planner",
        pattern: r"ActionPlanner|SequentialPlanner|StepwisePlanner",
    },
    IdiomRule {
        name: "memory",
        pattern: r"SemanticTextMemory|VolatileMemoryStore",
    },
    IdiomRule {
        name: "connector",
        pattern: r"AzureChatCompletion|OpenAIChatCompletion",
    },
];

/// AutoGen idioms, in report order.
pub const AUTOGEN_IDIOMS: &[IdiomRule] = &[
    IdiomRule {
        name: "autogen_import",
        pattern: r"from\s+autogen|import\s+autogen|from\s+pyautogen|import\s+pyautogen",
    },
    IdiomRule {
        name: "assistant_agent",
        pattern: r"AssistantAgent\(|ConversableAgent\(",
    },
    IdiomRule {
        name: "user_proxy",
        pattern: r"UserProxyAgent\(",
    },
    IdiomRule {
        name: "group_chat",
        pattern: r"GroupChat\(|GroupChatManager\(",
    },
    IdiomRule {
        name: "config_list",
        pattern: r"config_list|llm_config",
    },
    IdiomRule {
        name: "code_execution",
        pattern: r"code_execution_config|CodeExecutorAgent",
    },
    IdiomRule {
        name: "function_calling",
        pattern: r"register_function|function_map",
    },
    IdiomRule {
        name: "nested_chat",
        pattern: r"register_nested_chats|nested_chat",
    },
];

/// Semantic Kernel notes. Order here is the order notes are reported in.
pub const SEMANTIC_KERNEL_NOTES: &[(&str, &str)] = &[
    (
        "kernel_creation",
        "Replace `Kernel()` with `AzureAIClient().create_agent()` for agent creation",
    ),
    (
        "native_function",
        "Replace `@kernel_function` decorated functions with standard Python functions as tools",
    ),
    (
        "chat_completion",
        "Replace chat completion services with `AzureAIClient` or `OpenAIChatClient`",
    ),
    (
        "planner",
        "Replace planners with `WorkflowBuilder` for orchestration",
    ),
    (
        "memory",
        "Replace SK memory with Agent Framework thread persistence or external stores",
    ),
    (
        "connector",
        "Replace connectors with Agent Framework clients (AzureAIClient, OpenAIChatClient)",
    ),
    (
        "prompt_template",
        "Replace PromptTemplateConfig with agent instructions parameter",
    ),
    (
        "plugin_import",
        "Convert plugins to standard tool functions with type annotations",
    ),
];

/// AutoGen notes. Order here is the order notes are reported in.
pub const AUTOGEN_NOTES: &[(&str, &str)] = &[
    (
        "assistant_agent",
        "Replace `AssistantAgent` with `ChatAgent` from Agent Framework",
    ),
    (
        "user_proxy",
        "Replace `UserProxyAgent` with workflow handlers and human-in-loop patterns",
    ),
    (
        "group_chat",
        "Replace `GroupChat` with `WorkflowBuilder` multi-agent orchestration",
    ),
    (
        "config_list",
        "Replace `config_list` with Agent Framework client configuration",
    ),
    (
        "code_execution",
        "Replace code execution config with secure tool implementations",
    ),
    (
        "function_calling",
        "Replace `register_function` with tools parameter in agent creation",
    ),
    (
        "nested_chat",
        "Replace nested chats with workflow orchestration patterns",
    ),
];

/// An idiom rule paired with its compiled, case-insensitive pattern.
pub(crate) struct CompiledIdiom {
    pub rule: IdiomRule,
    pub regex: Regex,
}

fn compile(rules: &[IdiomRule]) -> Vec<CompiledIdiom> {
    rules
        .iter()
        .map(|rule| CompiledIdiom {
            rule: *rule,
            regex: RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build()
                .expect("Valid idiom regex"),
        })
        .collect()
}

pub(crate) static SEMANTIC_KERNEL_COMPILED: Lazy<Vec<CompiledIdiom>> =
    Lazy::new(|| compile(SEMANTIC_KERNEL_IDIOMS));

pub(crate) static AUTOGEN_COMPILED: Lazy<Vec<CompiledIdiom>> =
    Lazy::new(|| compile(AUTOGEN_IDIOMS));

/// Lines shaped like `from x import y` or `import x`.
pub(crate) static IMPORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:from|import)\s+[\w\.]+.*$").expect("Valid import line regex")
});
