use grove_model::{ModelMessage, ModelRequest, ModelTool, ToolChoice};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::OpenAIConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub r#type: String,
    pub function: FunctionCall,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Choice {
    pub message: Message,
    pub finish_reason: Option<String>,
}

// --------------------------------------------
// Types shared between requests and responses
// --------------------------------------------

// The assistant variant doubles as the received message shape, so the
// exact structure the service produced can be echoed back verbatim in
// the follow-up request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },
    Tool {
        tool_call_id: String,
        content: String,
    },
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionTool {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tool {
    r#type: &'static str,
    function: FunctionTool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    // The policy only makes sense when tools are declared.
    let tool_choice = if req.tools.is_empty() {
        None
    } else {
        Some(match req.tool_choice {
            ToolChoice::Auto => "auto",
            ToolChoice::None => "none",
        })
    };
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: req.messages.iter().map(create_message).collect(),
        tools: req.tools.iter().map(create_tool).collect(),
        tool_choice,
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    match msg {
        ModelMessage::System(content) => Message::System {
            content: content.clone(),
        },
        ModelMessage::User(content) => Message::User {
            content: content.clone(),
        },
        ModelMessage::Assistant(content) => Message::Assistant {
            content: Some(content.clone()),
            tool_calls: None,
        },
        ModelMessage::Tool(result) => Message::Tool {
            tool_call_id: result.id.clone(),
            content: result.content.clone(),
        },
        ModelMessage::Opaque(opaque_message) => {
            // Opaque messages from this provider always have `Message` type.
            let Some(msg) = opaque_message.to_raw::<Message>() else {
                return Message::Assistant {
                    content: None,
                    tool_calls: None,
                };
            };
            msg.clone()
        }
    }
}

#[inline]
fn create_tool(tool: &ModelTool) -> Tool {
    Tool {
        r#type: "function",
        function: FunctionTool {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use grove_model::{OpaqueMessage, ToolCallResult};
    use serde_json::json;

    use super::*;
    use crate::OpenAIConfigBuilder;

    #[test]
    fn test_create_request() {
        let request = ModelRequest {
            messages: vec![
                ModelMessage::System(
                    "I am an expert in palm oil trees.".to_owned(),
                ),
                ModelMessage::User("Plan the visits.".to_owned()),
            ],
            tools: vec![ModelTool {
                name: "visit_locations".to_owned(),
                description: "Visit a location".to_owned(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "locations": { "type": "array" }
                    },
                    "required": ["locations"]
                }),
            }],
            tool_choice: ToolChoice::Auto,
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx")
            .with_model("custom")
            .build();
        let expected = ChatCompletionRequest {
            model: "custom".to_owned(),
            messages: vec![
                Message::System {
                    content: "I am an expert in palm oil trees.".to_owned(),
                },
                Message::User {
                    content: "Plan the visits.".to_owned(),
                },
            ],
            tools: vec![Tool {
                r#type: "function",
                function: FunctionTool {
                    name: "visit_locations".to_owned(),
                    description: "Visit a location".to_owned(),
                    parameters: json!({
                        "type": "object",
                        "properties": {
                            "locations": { "type": "array" }
                        },
                        "required": ["locations"]
                    }),
                },
            }],
            tool_choice: Some("auto"),
        };
        assert_eq!(create_request(&request, &config), expected);
    }

    #[test]
    fn test_tool_choice_is_omitted_without_tools() {
        let request = ModelRequest {
            messages: vec![ModelMessage::User("Hi".to_owned())],
            tools: vec![],
            tool_choice: ToolChoice::Auto,
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx").build();
        let serialized =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert!(serialized.get("tool_choice").is_none());
        assert!(serialized.get("tools").is_none());
    }

    #[test]
    fn test_opaque_message_roundtrip() {
        let native = Message::Assistant {
            content: None,
            tool_calls: Some(vec![ToolCall {
                id: "call_1".to_owned(),
                r#type: "function".to_owned(),
                function: FunctionCall {
                    name: "visit_locations".to_owned(),
                    arguments: r#"{"locations":[]}"#.to_owned(),
                },
            }]),
        };
        let opaque = OpaqueMessage::new("chatcmpl-1", native.clone());
        let echoed = create_message(&ModelMessage::Opaque(opaque));
        assert_eq!(echoed, native);
    }

    #[test]
    fn test_tool_result_message() {
        let msg = create_message(&ModelMessage::Tool(ToolCallResult {
            id: "call_1".to_owned(),
            name: "visit_locations".to_owned(),
            content: "1 locations are visited.".to_owned(),
        }));
        let serialized = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            serialized,
            json!({
                "role": "tool",
                "tool_call_id": "call_1",
                "content": "1 locations are visited."
            })
        );
    }
}
