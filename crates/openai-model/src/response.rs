use grove_model::{
    AssistantTurn, ErrorKind, ModelFinishReason, OpaqueMessage, ToolCallRequest,
};

use crate::Error;
use crate::proto::{ChatCompletion, Message};

/// Converts a completion body into one assistant turn.
///
/// The exchange protocol allows at most one tool invocation per turn;
/// extra tool calls in the body are dropped with a warning.
pub(crate) fn parse_turn(
    completion: ChatCompletion,
) -> Result<AssistantTurn, Error> {
    // Requests leave `n` at its default, so the body is expected to
    // carry one choice; only the first is ever considered.
    let Some(choice) = completion.choices.into_iter().next() else {
        return Err(Error::new(
            "response contained no choices",
            ErrorKind::Other,
        ));
    };

    let Message::Assistant {
        content,
        tool_calls,
    } = &choice.message
    else {
        return Err(Error::new(
            "response message has a non-assistant role",
            ErrorKind::Other,
        ));
    };

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("tool_calls") => ModelFinishReason::ToolCalls,
        _ => ModelFinishReason::Stop,
    };

    let tool_call = match tool_calls.as_deref() {
        None | Some([]) => None,
        Some([call, rest @ ..]) => {
            if !rest.is_empty() {
                warn!("dropping {} extra tool call(s)", rest.len());
            }
            Some(ToolCallRequest {
                id: call.id.clone(),
                name: call.function.name.clone(),
                arguments: call.function.arguments.clone(),
            })
        }
    };

    let text = content.clone().unwrap_or_default();
    let opaque = OpaqueMessage::new(completion.id, choice.message);

    Ok(AssistantTurn {
        text,
        tool_call,
        finish_reason,
        opaque: Some(opaque),
    })
}
