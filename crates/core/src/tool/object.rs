use std::pin::Pin;

use grove_model::ModelTool;

use super::{Error, Tool, ToolResult};

pub(crate) trait ToolObject: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn declaration(&self) -> ModelTool;

    /// Parses the raw argument payload and starts the tool.
    ///
    /// A payload that cannot be parsed into the tool's input is rejected
    /// here, before anything runs.
    fn dispatch(
        &self,
        arguments: &str,
    ) -> Result<Pin<Box<dyn Future<Output = ToolResult> + Send>>, Error>;
}

pub(crate) struct ToolObjectImpl<T: Tool>(pub T);

impl<T: Tool> ToolObject for ToolObjectImpl<T> {
    #[inline]
    fn name(&self) -> &str {
        self.0.name()
    }

    #[inline]
    fn declaration(&self) -> ModelTool {
        ModelTool {
            name: self.0.name().to_owned(),
            description: self.0.description().to_owned(),
            parameters: self.0.parameter_schema().clone(),
        }
    }

    fn dispatch(
        &self,
        arguments: &str,
    ) -> Result<Pin<Box<dyn Future<Output = ToolResult> + Send>>, Error> {
        // Some services serialize a no-argument invocation as an empty
        // string rather than an empty object.
        let arguments = if arguments.trim().is_empty() {
            "{}"
        } else {
            arguments
        };
        let input: T::Input = serde_json::from_str(arguments).map_err(
            |err| Error::malformed_arguments().with_reason(format!("{err}")),
        )?;
        Ok(Box::pin(self.0.execute(input)))
    }
}
