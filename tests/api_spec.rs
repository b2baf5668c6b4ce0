use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use agent_modernizer::api::{create_router, ToolCallResponse};
use agent_modernizer::config::ServerConfig;
use agent_modernizer::guides;
use agent_modernizer::render::UNKNOWN_FRAMEWORK_MESSAGE;

fn setup() -> TestServer {
    let app = create_router(&ServerConfig::default());
    TestServer::new(app).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
    }
}

mod tools {
    use super::*;

    #[tokio::test]
    async fn lists_three_tools_with_schemas() {
        let server = setup();

        let response = server.get("/api/v1/tools").await;

        response.assert_status_ok();
        let tools: Vec<Value> = response.json();
        assert_eq!(tools.len(), 3);

        let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
        assert!(names.contains(&"analyze_code_patterns"));
        assert!(names.contains(&"generate_modernized_code"));
        assert!(names.contains(&"get_migration_guide"));

        for tool in &tools {
            assert!(tool.get("description").is_some());
            assert!(tool.get("inputSchema").is_some());
        }
    }

    #[tokio::test]
    async fn calls_a_tool_by_name() {
        let server = setup();

        let response = server
            .post("/api/v1/tools/call")
            .json(&json!({
                "name": "analyze_code_patterns",
                "arguments": { "code": "kernel = Kernel()" }
            }))
            .await;

        response.assert_status_ok();
        let result: ToolCallResponse = response.json();
        assert_eq!(result.name, "analyze_code_patterns");
        assert!(result.text.contains("### Detected Framework: Semantic Kernel"));
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let server = setup();

        let response = server
            .post("/api/v1/tools/call")
            .json(&json!({ "name": "run_agent", "arguments": {} }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_argument_is_bad_request() {
        let server = setup();

        let response = server
            .post("/api/v1/tools/call")
            .json(&json!({
                "name": "generate_modernized_code",
                "arguments": { "original_code": "kernel = Kernel()" }
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("framework"));
    }

    #[tokio::test]
    async fn accepts_gateway_payloads_with_empty_strings() {
        let server = setup();

        let response = server
            .post("/api/v1/tools/call")
            .json(&json!({
                "name": "get_migration_guide",
                "arguments": { "source_framework": "autogen" },
                "metadata": "",
                "conversation": "abc",
                "model": ""
            }))
            .await;

        response.assert_status_ok();
        let result: ToolCallResponse = response.json();
        assert_eq!(result.text, guides::get_migration_guide("autogen"));
    }
}

mod analyze {
    use super::*;

    #[tokio::test]
    async fn returns_structured_result_and_report() {
        let server = setup();

        let response = server
            .post("/api/v1/analyze")
            .json(&json!({ "code": "import autogen\nuser = UserProxyAgent(name='u')" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["detected_framework"], "autogen");
        assert_eq!(body["matched_idioms"], json!(["autogen_import", "user_proxy"]));
        assert_eq!(body["import_lines"], json!(["import autogen"]));
        assert!(body["report"]
            .as_str()
            .is_some_and(|r| r.starts_with("## Code Analysis Results")));
    }

    #[tokio::test]
    async fn rejects_payload_without_code() {
        let server = setup();

        let response = server.post("/api/v1/analyze").json(&json!({})).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

mod generate {
    use super::*;

    #[tokio::test]
    async fn renders_multi_agent_workflow() {
        let server = setup();

        let response = server
            .post("/api/v1/generate")
            .json(&json!({
                "original_code": "a = AssistantAgent(name='a')\nb = AssistantAgent(name='b')\nchat = GroupChat(agents=[a, b])",
                "framework": "autogen"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["framework"], "autogen");
        assert_eq!(body["variant"], "multi_agent_workflow");
        assert_eq!(body["checklist"].as_array().map(Vec::len), Some(7));
        assert_eq!(body["checklist"][0]["status"], "done");
    }

    #[tokio::test]
    async fn unknown_framework_returns_message() {
        let server = setup();

        let response = server
            .post("/api/v1/generate")
            .json(&json!({ "original_code": "", "framework": "crewai" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.get("framework").is_none());
        assert!(body.get("checklist").is_none());
        assert_eq!(body["text"], UNKNOWN_FRAMEWORK_MESSAGE);
    }
}

mod guides_route {
    use super::*;

    #[tokio::test]
    async fn returns_guide_for_alias() {
        let server = setup();

        let response = server.get("/api/v1/guides/sk").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["framework"], "semantic_kernel");
        assert_eq!(body["text"], guides::get_migration_guide("semantic_kernel"));
    }

    #[tokio::test]
    async fn unknown_framework_returns_message() {
        let server = setup();

        let response = server.get("/api/v1/guides/langgraph").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.get("framework").is_none());
        assert_eq!(body["text"], guides::UNKNOWN_GUIDE_MESSAGE);
    }
}
