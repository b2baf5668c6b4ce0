//! Fixed listings, checklists and orchestration notes for the three
//! template variants.

use super::template::Template;
use super::{ChecklistItem, OrchestrationPattern};

pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful AI assistant.";

const INSTALL_STEP: &str =
    "Install requirements: `pip install agent-framework-azure-ai==1.0.0b260107`";

const CREDENTIALS_STEP: &str = "Update .env with your Foundry credentials";

// ============================================================
// Single tool (Semantic Kernel)
// ============================================================

pub const SEMANTIC_KERNEL_LISTING: Template = Template(
    r#""""
Modernized Agent - Converted from Semantic Kernel to Microsoft Agent Framework
"""

import asyncio
import os
from typing import Annotated
from dotenv import load_dotenv

from agent_framework.azure import AzureAIClient
from azure.identity.aio import DefaultAzureCredential

# Load environment variables
load_dotenv(override=True)
{{tools}}

async def main() -> None:
    """Main entry point for the modernized agent."""

    # Create the agent using Azure AI Client
    async with (
        DefaultAzureCredential() as credential,
        AzureAIClient(
            project_endpoint=os.getenv("FOUNDRY_PROJECT_ENDPOINT"),
            model_deployment_name=os.getenv("FOUNDRY_MODEL_DEPLOYMENT_NAME"),
            credential=credential,
        ).create_agent(
            name="ModernizedAgent",
            instructions="""{{instructions}}""",
            # tools=[{{tool_list}}],
        ) as agent,
    ):
        # Multi-turn conversation with thread persistence
        thread = agent.get_new_thread()

        print("Agent ready. Type 'quit' to exit.")
        while True:
            user_input = input("You: ")
            if user_input.lower() == "quit":
                break

            print("Agent: ", end="", flush=True)
            async for chunk in agent.run_stream(user_input, thread=thread):
                if chunk.text:
                    print(chunk.text, end="", flush=True)
            print()


if __name__ == "__main__":
    asyncio.run(main())
"#,
);

pub const SEMANTIC_KERNEL_TOOLS: Template = Template(
    r#"
# Tools (converted from Semantic Kernel functions)
# Note: Review and adjust type annotations as needed

{{stubs}}
"#,
);

pub const TOOL_STUB: Template = Template(
    r#"
def {{name}}(
    # Add appropriate parameters with Annotated types
    param: Annotated[str, "Description of parameter"]
) -> str:
    """Description of what this tool does."""
    raise NotImplementedError("Port the logic of the original @kernel_function {{name}}")
"#,
);

pub const NO_TOOLS_PLACEHOLDER: &str = "# Add tools here";

pub const SEMANTIC_KERNEL_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem::done("Replaced Kernel with AzureAIClient"),
    ChecklistItem::done("Converted @kernel_function decorators to standard tool functions"),
    ChecklistItem::done("Added thread persistence for multi-turn conversations"),
    ChecklistItem::done("Used async streaming for better UX"),
    ChecklistItem::review("Review and complete tool implementations"),
    ChecklistItem::review(CREDENTIALS_STEP),
    ChecklistItem::review(INSTALL_STEP),
];

// ============================================================
// Single agent (AutoGen)
// ============================================================

pub const SINGLE_AGENT_LISTING: Template = Template(
    r#""""
Modernized Agent - Converted from AutoGen to Microsoft Agent Framework
"""

import asyncio
import os
from typing import Annotated
from dotenv import load_dotenv

from agent_framework.azure import AzureAIClient
from azure.identity.aio import DefaultAzureCredential

# Load environment variables
load_dotenv(override=True)


# Define tools (converted from AutoGen function registrations)
def example_tool(
    query: Annotated[str, "The query to process."],
) -> str:
    """Example tool - replace with your actual tool logic."""
    return f"Processed: {query}"


async def main() -> None:
    """Main entry point for the modernized agent."""

    async with (
        DefaultAzureCredential() as credential,
        AzureAIClient(
            project_endpoint=os.getenv("FOUNDRY_PROJECT_ENDPOINT"),
            model_deployment_name=os.getenv("FOUNDRY_MODEL_DEPLOYMENT_NAME"),
            credential=credential,
        ).create_agent(
            name="ModernizedAgent",
            instructions="""{{instructions}}""",
            tools=[example_tool],
        ) as agent,
    ):
        thread = agent.get_new_thread()

        print("Agent ready. Type 'quit' to exit.")
        while True:
            user_input = input("You: ")
            if user_input.lower() == "quit":
                break

            print("Agent: ", end="", flush=True)
            async for chunk in agent.run_stream(user_input, thread=thread):
                if chunk.text:
                    print(chunk.text, end="", flush=True)
            print()


if __name__ == "__main__":
    asyncio.run(main())
"#,
);

pub const SINGLE_AGENT_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem::done("Replaced AssistantAgent with AzureAIClient.create_agent()"),
    ChecklistItem::done("Replaced config_list with environment-based configuration"),
    ChecklistItem::done("Added streaming support for better UX"),
    ChecklistItem::review("Convert registered functions to tool functions with Annotated types"),
    ChecklistItem::review(CREDENTIALS_STEP),
    ChecklistItem::review(INSTALL_STEP),
];

// ============================================================
// Multi-agent workflow (AutoGen group chat)
// ============================================================

pub const MULTI_AGENT_LISTING: Template = Template(
    r#""""
Modernized Multi-Agent Workflow - Converted from AutoGen GroupChat to Agent Framework Workflow
"""

import asyncio
import os
from uuid import uuid4
from dotenv import load_dotenv

from agent_framework import (
    WorkflowBuilder,
    WorkflowContext,
    handler,
    AgentRunUpdateEvent,
    AgentRunResponseUpdate,
    TextContent,
    Role,
)
from agent_framework.azure import AzureAIClient
from azure.identity.aio import DefaultAzureCredential

# Load environment variables
load_dotenv(override=True)

# Instructions carried over from the original system message
BASE_INSTRUCTIONS = """{{instructions}}"""


class OrchestratorExecutor:
    """Orchestrates the multi-agent workflow."""

    def __init__(self, agents: dict):
        self.agents = agents
        self.id = "orchestrator"

    @handler
    async def handle(self, messages: list, ctx: WorkflowContext) -> str:
        """Process messages through the agent workflow."""

        # Example: Sequential agent invocation (customize based on your needs)
        result = ""
        for name, agent in self.agents.items():
            response = await agent.run(messages)
            result += f"\n[{name}]: {response.text}"

            await ctx.add_event(
                AgentRunUpdateEvent(
                    self.id,
                    data=AgentRunResponseUpdate(
                        contents=[TextContent(text=f"[{name}]: {response.text}")],
                        role=Role.ASSISTANT,
                        response_id=str(uuid4()),
                    ),
                )
            )

        return result


async def main() -> None:
    """Main entry point for the multi-agent workflow."""

    endpoint = os.getenv("FOUNDRY_PROJECT_ENDPOINT")
    model = os.getenv("FOUNDRY_MODEL_DEPLOYMENT_NAME")

    async with DefaultAzureCredential() as credential:
        # Create agents (converted from AutoGen agents)
        agents = {
{{agents}}
        }

        # Build the workflow
        orchestrator = OrchestratorExecutor(agents)

        workflow = (
            WorkflowBuilder()
            .set_start_executor(orchestrator)
            .build()
        )

        # Run as agent
        agent = workflow.as_agent()
        thread = agent.get_new_thread()

        print("Multi-agent workflow ready. Type 'quit' to exit.")
        while True:
            user_input = input("You: ")
            if user_input.lower() == "quit":
                break

            async for chunk in agent.run_stream(user_input, thread=thread):
                if chunk.text:
                    print(chunk.text, end="", flush=True)
            print()


if __name__ == "__main__":
    asyncio.run(main())
"#,
);

pub const AGENT_ENTRY: Template = Template(
    r#"        "{{name}}": AzureAIClient(project_endpoint=endpoint, model_deployment_name=model, credential=credential).create_agent(name="{{name}}", instructions=f"{BASE_INSTRUCTIONS}\n\nYou are the {{name}} agent."),"#,
);

pub const MULTI_AGENT_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem::done("Replaced GroupChat with WorkflowBuilder"),
    ChecklistItem::done("Converted AutoGen agents to Agent Framework agents"),
    ChecklistItem::done("Added orchestration logic via WorkflowContext"),
    ChecklistItem::review("Customize the orchestration pattern (sequential, parallel, conditional)"),
    ChecklistItem::review("Add error handling and retry logic"),
    ChecklistItem::review(CREDENTIALS_STEP),
    ChecklistItem::review(INSTALL_STEP),
];

pub const ORCHESTRATION_PATTERNS: &[OrchestrationPattern] = &[
    OrchestrationPattern {
        name: "Sequential",
        description: "Agents execute one after another",
    },
    OrchestrationPattern {
        name: "Parallel (Fan-out/Fan-in)",
        description: "Agents execute simultaneously",
    },
    OrchestrationPattern {
        name: "Conditional",
        description: "Route based on context",
    },
    OrchestrationPattern {
        name: "Loop",
        description: "Iterate until condition met",
    },
    OrchestrationPattern {
        name: "Human-in-Loop",
        description: "Pause for human input",
    },
];
