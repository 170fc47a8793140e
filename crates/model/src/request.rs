use serde_json::Value;

use crate::OpaqueMessage;

/// A request to be sent to the model provider.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelRequest {
    /// The input messages.
    pub messages: Vec<ModelMessage>,
    /// Tools that are declared to the model.
    pub tools: Vec<ModelTool>,
    /// Whether the model may request a tool invocation.
    pub tool_choice: ToolChoice,
}

/// A complete message.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelMessage {
    /// The system instructions.
    System(String),
    /// A user input text.
    User(String),
    /// An assistant text.
    Assistant(String),
    /// A tool invocation result.
    Tool(ToolCallResult),
    /// An opaque message (usually a history message from the model).
    Opaque(OpaqueMessage),
}

/// The result of invoking a tool, tagged with the invocation it answers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolCallResult {
    /// The unique identifier of the tool call request being answered.
    pub id: String,
    /// The name of the tool that produced the result.
    pub name: String,
    /// The textual result of the tool call.
    pub content: String,
}

/// Describes a tool that is declared to the model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelTool {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool.
    ///
    /// For most model providers, the parameters should typically be
    /// defined by a [JSON schema](https://json-schema.org/).
    pub parameters: Value,
}

/// The tool-call policy attached to a request.
///
/// Both round trips of an exchange declare the tools and leave the
/// decision to the model, so [`ToolChoice::Auto`] is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolChoice {
    /// The model decides whether to invoke a declared tool.
    #[default]
    Auto,
    /// The model must answer with text only.
    None,
}
