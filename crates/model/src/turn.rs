use serde::{Deserialize, Serialize};

use crate::OpaqueMessage;

/// The reason why a model turn has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFinishReason {
    /// The model needs a tool invocation before it can continue.
    ToolCalls,
    /// The model has finished generating text.
    Stop,
}

/// Describes a tool invocation requested by the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The name of the tool to invoke.
    pub name: String,
    /// The argument payload, exactly as the service serialized it.
    ///
    /// The payload is kept raw here so that a malformed payload surfaces
    /// when the invocation is dispatched, not while the response is being
    /// received.
    pub arguments: String,
}

/// One complete assistant turn, as returned by a single round trip.
///
/// A turn carries either plain text or a single tool call request. When
/// a provider needs its native message structure echoed back in a later
/// request (tool-call turns usually do), it attaches it as `opaque`.
#[derive(Clone, Debug)]
pub struct AssistantTurn {
    /// The text content of the turn. May be empty for tool-call turns.
    pub text: String,
    /// The tool invocation requested by this turn, if any.
    pub tool_call: Option<ToolCallRequest>,
    /// Why the model stopped generating.
    pub finish_reason: ModelFinishReason,
    /// The provider-native message for history reconstruction.
    pub opaque: Option<OpaqueMessage>,
}

impl AssistantTurn {
    /// Creates a text-only turn.
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tool_call: None,
            finish_reason: ModelFinishReason::Stop,
            opaque: None,
        }
    }

    /// Creates a turn that requests a tool invocation.
    #[inline]
    pub fn tool_call<S: Into<String>>(text: S, call: ToolCallRequest) -> Self {
        Self {
            text: text.into(),
            tool_call: Some(call),
            finish_reason: ModelFinishReason::ToolCalls,
            opaque: None,
        }
    }

    /// Attaches a provider-native message to this turn.
    #[inline]
    pub fn with_opaque(mut self, opaque: OpaqueMessage) -> Self {
        self.opaque = Some(opaque);
        self
    }
}
