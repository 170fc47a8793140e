//! Tool call supports.

mod error;
mod object;
mod registry;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{Error, ErrorKind};
pub(crate) use registry::Registry;

/// The result of executing a tool.
pub type ToolResult = Result<String, Error>;

/// A tool that can be invoked by the model.
///
/// Implementations of this trait should be stateless, and may not
/// maintain any internal state: dispatching the same invocation twice
/// must produce the same result, side effects of the tool itself aside.
///
/// The argument payload from the model is parsed into `Input` before
/// `execute` is called; tools never see malformed payloads. Parameter
/// structs should reject unknown fields so that a payload that doesn't
/// match the declared schema fails at dispatch.
pub trait Tool: Send + Sync + 'static {
    /// The type of input that the tool accepts.
    type Input: DeserializeOwned;

    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Returns the parameter schema of the tool.
    fn parameter_schema(&self) -> &Value;

    /// Executes the tool with the given input.
    ///
    /// This method must return a future that is fully independent of
    /// `self`.
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = ToolResult> + Send + 'static;
}
