//! Implements the provider protocol with a tiny hand-written fake to
//! make sure the traits are usable from an external crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::future::ready;

use grove_model::{
    AssistantTurn, ErrorKind, ModelMessage, ModelProvider, ModelProviderError,
    ModelRequest, OpaqueMessage, ToolCallRequest, ToolChoice,
};

#[derive(Debug)]
struct FakeModelError(ErrorKind);

impl Display for FakeModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeModelError {}

impl ModelProviderError for FakeModelError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Echoes the last user message, or requests a tool invocation when the
/// user asks for one.
struct FakeModelProvider;

impl ModelProvider for FakeModelProvider {
    type Error = FakeModelError;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<AssistantTurn, Self::Error>> + Send + 'static
    {
        let last_user = req.messages.iter().rev().find_map(|msg| match msg {
            ModelMessage::User(text) => Some(text.clone()),
            _ => None,
        });
        let turn = match last_user.as_deref() {
            None => Err(FakeModelError(ErrorKind::Other)),
            Some("use the tool") => {
                let call = ToolCallRequest {
                    id: "tool:1".to_owned(),
                    name: req.tools[0].name.clone(),
                    arguments: r#"{"value":42}"#.to_owned(),
                };
                Ok(AssistantTurn::tool_call("", call)
                    .with_opaque(OpaqueMessage::new("msg:1", "native")))
            }
            Some(text) => Ok(AssistantTurn::text(format!("You said {text}"))),
        };
        ready(turn)
    }
}

#[tokio::test]
async fn test_text_turn() {
    let provider = FakeModelProvider;
    let req = ModelRequest {
        messages: vec![ModelMessage::User("Hi".to_owned())],
        tools: vec![],
        tool_choice: ToolChoice::Auto,
    };
    let turn = provider.send_request(&req).await.unwrap();
    assert_eq!(turn.text, "You said Hi");
    assert!(turn.tool_call.is_none());
}

#[tokio::test]
async fn test_tool_call_turn() {
    use grove_model::ModelTool;
    use serde_json::json;

    let provider = FakeModelProvider;
    let req = ModelRequest {
        messages: vec![ModelMessage::User("use the tool".to_owned())],
        tools: vec![ModelTool {
            name: "answer".to_owned(),
            description: "Answers".to_owned(),
            parameters: json!({ "type": "object" }),
        }],
        tool_choice: ToolChoice::Auto,
    };
    let turn = provider.send_request(&req).await.unwrap();
    let call = turn.tool_call.unwrap();
    assert_eq!(call.name, "answer");
    assert_eq!(call.arguments, r#"{"value":42}"#);
    let opaque = turn.opaque.unwrap();
    assert_eq!(*opaque.to_raw::<&str>().unwrap(), "native");
}

#[tokio::test]
async fn test_error_kind() {
    let provider = FakeModelProvider;
    let req = ModelRequest {
        messages: vec![],
        tools: vec![],
        tool_choice: ToolChoice::Auto,
    };
    let err = provider.send_request(&req).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}
