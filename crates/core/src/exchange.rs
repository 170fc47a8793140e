
use grove_model::{
    AssistantTurn, ModelMessage, ModelProvider, ModelProviderError,
    ModelRequest, ToolCallRequest, ToolCallResult, ToolChoice,
};
use tracing::Instrument;

use crate::model_client::ModelClient;
use crate::tool::{Error as ToolError, Registry, Tool};
use crate::transcript::{Entry, Transcript};

/// [`Exchange`] builder.
pub struct ExchangeBuilder {
    model_client: ModelClient,
    registry: Registry,
}

impl ExchangeBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            registry: Registry::default(),
        }
    }

    /// Declares a tool. Tools keep their registration order.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        self.registry.add_tool(tool);
        self
    }

    /// Builds the exchange.
    #[inline]
    pub fn build(self) -> Exchange {
        Exchange {
            model_client: self.model_client,
            registry: self.registry,
        }
    }
}

/// The terminal state of an exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The model answered directly without requesting a tool.
    Answered,
    /// The requested tool invocation could not be dispatched. The
    /// exchange ends without a second round trip; this is a degraded
    /// result, not a failure of the exchange itself.
    Unresolved(ToolError),
    /// A tool was executed and the follow-up turn was received.
    Complete,
}

/// What an exchange produced: the full transcript, the terminal state,
/// and how many round trips were made.
#[derive(Clone, Debug)]
pub struct ExchangeReport {
    transcript: Transcript,
    outcome: Outcome,
    remote_calls: u32,
}

impl ExchangeReport {
    /// Returns the accumulated transcript.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the terminal state of the exchange.
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the number of round trips that were made.
    #[inline]
    pub fn remote_calls(&self) -> u32 {
        self.remote_calls
    }

    /// Consumes the report and returns the transcript.
    #[inline]
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

enum State {
    AwaitingFirstResponse,
    Dispatching(ToolCallRequest),
    AwaitingSecondResponse,
    Answered,
    Unresolved(ToolError),
    Complete,
}

/// One two-round interaction with a remote completion service,
/// optionally executing one declared tool in between.
///
/// The first round trip lets the model either answer directly or
/// request exactly one tool invocation. If a registered tool is
/// requested, it is executed, its result is appended to the transcript,
/// and a second round trip asks the model to continue. A request for an
/// undeclared tool or an unparsable argument payload ends the exchange
/// early with an [`Outcome::Unresolved`] diagnostic.
pub struct Exchange {
    model_client: ModelClient,
    registry: Registry,
}

impl Exchange {
    /// Runs the exchange over the given initial transcript.
    ///
    /// The exchange is fully sequential: each of the (at most two)
    /// remote calls is awaited to completion, attempted exactly once.
    /// Remote service failures are propagated to the caller; tool
    /// dispatch problems are reported through the outcome instead.
    pub async fn run(
        &self,
        transcript: Transcript,
    ) -> Result<ExchangeReport, Box<dyn ModelProviderError>> {
        let mut transcript = transcript;
        let mut remote_calls = 0u32;
        let mut state = State::AwaitingFirstResponse;

        let outcome = loop {
            state = match state {
                State::AwaitingFirstResponse => {
                    let turn = self
                        .request_turn(&transcript, &mut remote_calls)
                        .await?;
                    let tool_call = turn.tool_call.clone();
                    push_assistant_turn(&mut transcript, turn);
                    match tool_call {
                        None => State::Answered,
                        Some(call) => State::Dispatching(call),
                    }
                }
                State::Dispatching(call) => self
                    .dispatch_tool_call(&mut transcript, call)
                    .await,
                State::AwaitingSecondResponse => {
                    let turn = self
                        .request_turn(&transcript, &mut remote_calls)
                        .await?;
                    push_assistant_turn(&mut transcript, turn);
                    State::Complete
                }
                State::Answered => break Outcome::Answered,
                State::Unresolved(err) => break Outcome::Unresolved(err),
                State::Complete => break Outcome::Complete,
            };
        };

        debug!("exchange finished: {outcome:?} ({remote_calls} remote calls)");
        Ok(ExchangeReport {
            transcript,
            outcome,
            remote_calls,
        })
    }

    async fn request_turn(
        &self,
        transcript: &Transcript,
        remote_calls: &mut u32,
    ) -> Result<AssistantTurn, Box<dyn ModelProviderError>> {
        // Declarations stay attached on both round trips; the model is
        // never required to invoke another tool.
        let request = ModelRequest {
            messages: transcript.messages(),
            tools: self.registry.declarations(),
            tool_choice: ToolChoice::Auto,
        };
        *remote_calls += 1;
        self.model_client.send_request(request).await
    }

    async fn dispatch_tool_call(
        &self,
        transcript: &mut Transcript,
        call: ToolCallRequest,
    ) -> State {
        let span = debug_span!("tool dispatch", tool = %call.name);
        let fut = {
            let _enter = span.enter();

            let Some(tool) = self.registry.lookup(&call.name) else {
                warn!("tool not found: {}", call.name);
                return State::Unresolved(
                    ToolError::unknown_tool().with_reason(call.name),
                );
            };

            match tool.dispatch(&call.arguments) {
                Ok(fut) => fut,
                Err(err) => {
                    warn!("argument payload rejected: {err}");
                    return State::Unresolved(err);
                }
            }
        };

        // A tool that ran but failed is not fatal: its error text goes
        // back to the model as the result of the invocation.
        let content = match fut.instrument(span).await {
            Ok(content) => content,
            Err(err) => {
                warn!("tool execution failed: {err}");
                format!("Tool failed: {}", err.reason())
            }
        };
        transcript.push_tool_result(ToolCallResult {
            id: call.id,
            name: call.name,
            content,
        });
        State::AwaitingSecondResponse
    }
}

fn push_assistant_turn(transcript: &mut Transcript, turn: AssistantTurn) {
    let msg = match turn.opaque {
        Some(opaque) => ModelMessage::Opaque(opaque),
        // Downgrade to a text-only message.
        None => ModelMessage::Assistant(turn.text.clone()),
    };
    transcript.push(Entry {
        msg,
        text: turn.text,
    });
}
