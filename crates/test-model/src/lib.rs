//! A local fake model for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::future::ready;
use std::sync::{Arc, Mutex};

use grove_model::{
    AssistantTurn, ErrorKind, ModelProvider, ModelProviderError, ModelRequest,
    OpaqueMessage,
};

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// The provider-native shape of a scripted assistant message.
///
/// Scripted turns carry one of these as their opaque payload, standing
/// in for whatever wire-level message a real provider would want echoed
/// back on the follow-up request. Tests can downcast the payload to
/// this type to verify it was carried through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScriptedMessage {
    /// The script position that produced the turn.
    pub step: usize,
    /// The text of the turn.
    pub text: String,
}

#[derive(Clone)]
enum ConversationStep {
    /// A message appended by the caller: system instructions, a user
    /// input, or a tool result.
    Input,
    /// A scripted assistant turn.
    AssistantTurn(PresetTurn),
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the conversation script,
/// which is how the model should respond to a request. The step for a
/// request is selected by the number of history messages in it: one
/// [`Input`](TestModelProvider::add_input_step) step per caller-appended
/// message, and an assistant step at every position where the model is
/// expected to answer. If there is no matching assistant step, an error
/// is returned.
///
/// The provider also records every request it receives, which the
/// exchange tests use to verify the number of round trips and what
/// each of them carried.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    conversation_script: Vec<ConversationStep>,
    received_requests: Arc<Mutex<Vec<ModelRequest>>>,
}

impl TestModelProvider {
    /// Appends a placeholder step for a caller-appended message.
    #[inline]
    pub fn add_input_step(&mut self) {
        self.conversation_script.push(ConversationStep::Input);
    }

    /// Appends a scripted assistant turn.
    #[inline]
    pub fn add_assistant_step(&mut self, preset: PresetTurn) {
        self.conversation_script
            .push(ConversationStep::AssistantTurn(preset));
    }

    /// Returns how many requests this provider has received so far.
    #[inline]
    pub fn remote_calls(&self) -> usize {
        self.received_requests.lock().unwrap().len()
    }

    /// Returns copies of the received requests, in arrival order.
    #[inline]
    pub fn received_requests(&self) -> Vec<ModelRequest> {
        self.received_requests.lock().unwrap().clone()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<AssistantTurn, Self::Error>> + Send + 'static
    {
        self.received_requests.lock().unwrap().push(req.clone());

        let step_idx = req.messages.len();
        let result = match self.conversation_script.get(step_idx) {
            None => Err(Error {
                message: "no enough steps",
                kind: ErrorKind::RateLimitExceeded,
            }),
            Some(ConversationStep::Input) => Err(Error {
                message: "not an assistant turn step",
                kind: ErrorKind::Other,
            }),
            Some(ConversationStep::AssistantTurn(preset)) => {
                if let Some(kind) = preset.failure {
                    Err(Error {
                        message: "scripted failure",
                        kind,
                    })
                } else {
                    let text = preset.text.as_str();
                    let turn = match &preset.tool_call {
                        Some(call) => {
                            AssistantTurn::tool_call(text, call.clone())
                        }
                        None => AssistantTurn::text(text),
                    };
                    let id = format!("msg:{step_idx}");
                    Ok(turn.with_opaque(OpaqueMessage::new(
                        id,
                        ScriptedMessage {
                            step: step_idx,
                            text: preset.text.clone(),
                        },
                    )))
                }
            }
        };
        ready(result)
    }
}
