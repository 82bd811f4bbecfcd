/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the tool server that:
/// 1. Reads one JSON-RPC request per line
/// 2. Turns tool calls into habit tracker intents and views
/// 3. Writes one JSON-RPC response per line
///
/// Requests are handled strictly one after another, so each mutation is
/// applied and saved before the next request is read.

use schemars::gen::SchemaGenerator;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::storage::KeyValueStore;
use crate::tools::{self, *};
use crate::tracker::HabitTracker;
use crate::ServerError;

/// MCP server that exposes a habit tracker as tools
pub struct McpServer<S: KeyValueStore> {
    tracker: HabitTracker<S>,
    initialized: bool,
}

impl<S: KeyValueStore> McpServer<S> {
    pub fn new(tracker: HabitTracker<S>) -> Self {
        Self {
            tracker,
            initialized: false,
        }
    }

    pub fn tracker(&self) -> &HabitTracker<S> {
        &self.tracker
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Serve requests over stdin/stdout until stdin closes
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await
    }

    /// Serve line-delimited requests from `reader`, answering on `writer`
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (input closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        writer.write_all(response_str.as_bytes()).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read request: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns None for blank lines and notifications.
    pub async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        self.handle_request(request)
    }

    fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.method == "initialized" || request.method == "notifications/initialized" {
            self.initialized = true;
        }

        // notifications get no reply
        let id = request.id?;

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version '{}'", request.jsonrpc),
                None,
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "initialized" | "notifications/initialized" => JsonRpcResponse::success(id, Value::Null),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tool_definitions() })),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        };

        Some(response)
    }

    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Habit Grid".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        to_response(id, &result)
    }

    fn handle_tools_call(&mut self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        debug!("Calling tool {}", tool_params.name);
        let result = self.call_tool(&tool_params.name, tool_params.arguments);
        to_response(id, &result)
    }

    fn call_tool(&mut self, name: &str, args: Map<String, Value>) -> ToolCallResult {
        let tracker = &mut self.tracker;

        match name {
            "habit_add" => with_args(args, |p: AddHabitParams| {
                let response = tools::add_habit(tracker, p);
                structured(response.message.clone(), &response)
            }),
            "habit_delete" => with_args(args, |p: DeleteHabitParams| {
                let response = tools::delete_habit(tracker, p);
                structured(response.message.clone(), &response)
            }),
            "habit_toggle" => with_args(args, |p: ToggleParams| match tools::toggle_habit(tracker, p) {
                Ok(response) => structured(response.message.clone(), &response),
                Err(e) => ToolCallResult::error(e.to_string()),
            }),
            "habit_checklist" => with_args(args, |p: ChecklistParams| match tools::get_checklist(&*tracker, p) {
                Ok(view) => structured(view.render(), &view),
                Err(e) => ToolCallResult::error(e.to_string()),
            }),
            "habit_calendar" => with_args(args, |p: CalendarParams| match tools::get_calendar(&*tracker, p) {
                Ok(grid) => structured(grid.render(), &grid),
                Err(e) => ToolCallResult::error(e.to_string()),
            }),
            "habit_tooltip" => with_args(args, |p: TooltipParams| match tools::get_tooltip(&*tracker, p) {
                Ok(Some(text)) => ToolCallResult::success(text, None),
                Ok(None) => ToolCallResult::success("No such habit.".to_string(), None),
                Err(e) => ToolCallResult::error(e.to_string()),
            }),
            "habit_stats" => with_args(args, |p: StatsParams| match tools::get_stats(&*tracker, p) {
                Ok(response) => structured(response.message.clone(), &response.stats),
                Err(e) => ToolCallResult::error(e.to_string()),
            }),
            "habit_window" => with_args(args, |p: WindowParams| {
                let response = tools::change_window(tracker, p);
                structured(response.message.clone(), &response)
            }),
            "habit_reset" => with_args(args, |_: EmptyParams| {
                let response = tools::reset_habits(tracker);
                structured(response.message.clone(), &response)
            }),
            "storage_info" => with_args(args, |_: EmptyParams| {
                let response = tools::storage_info(&*tracker);
                structured(response.message.clone(), &response)
            }),
            _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
        }
    }
}

/// Deserialize tool arguments into `P` and hand them to `f`
fn with_args<P, F>(args: Map<String, Value>, f: F) -> ToolCallResult
where
    P: DeserializeOwned,
    F: FnOnce(P) -> ToolCallResult,
{
    match serde_json::from_value::<P>(Value::Object(args)) {
        Ok(params) => f(params),
        Err(e) => ToolCallResult::error(format!("Invalid arguments: {}", e)),
    }
}

fn structured<T: Serialize>(text: String, view: &T) -> ToolCallResult {
    ToolCallResult::success(text, serde_json::to_value(view).ok())
}

fn to_response<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("Failed to encode result: {}", e),
            None,
        ),
    }
}

fn schema_of<P: JsonSchema>() -> Value {
    let schema = SchemaGenerator::default().into_root_schema_for::<P>();
    serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" }))
}

fn tool(name: &str, description: &str, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// Every tool this server answers to
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        tool("habit_add", "Add a habit to track", schema_of::<AddHabitParams>()),
        tool("habit_delete", "Delete a habit and its history", schema_of::<DeleteHabitParams>()),
        tool(
            "habit_toggle",
            "Mark a habit done or not done for a day (defaults to today)",
            schema_of::<ToggleParams>(),
        ),
        tool("habit_checklist", "Show each habit's state for one day", schema_of::<ChecklistParams>()),
        tool(
            "habit_calendar",
            "Show the calendar grid for the current window",
            schema_of::<CalendarParams>(),
        ),
        tool("habit_tooltip", "Describe one calendar cell", schema_of::<TooltipParams>()),
        tool(
            "habit_stats",
            "Completion totals and rates over the current window",
            schema_of::<StatsParams>(),
        ),
        tool("habit_window", "Change how many days the calendar shows", schema_of::<WindowParams>()),
        tool("habit_reset", "Erase saved data and restore the default habits", schema_of::<EmptyParams>()),
        tool("storage_info", "Report the size of the saved habit data", schema_of::<EmptyParams>()),
    ]
}
