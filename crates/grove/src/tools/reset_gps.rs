use std::future::ready;

use grove_core::tool::{Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ResetGpsLocationParameters {}

/// A tool for resetting the current gps location.
pub struct ResetGpsLocationTool {
    parameter_schema: Value,
}

impl ResetGpsLocationTool {
    /// Creates a new reset-gps tool.
    #[inline]
    pub fn new() -> Self {
        ResetGpsLocationTool {
            parameter_schema: schema_for!(ResetGpsLocationParameters)
                .to_value(),
        }
    }
}

impl Default for ResetGpsLocationTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ResetGpsLocationTool {
    type Input = ResetGpsLocationParameters;

    fn name(&self) -> &str {
        "reset_gps_location"
    }

    fn description(&self) -> &str {
        "Reset all gps location"
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        _input: ResetGpsLocationParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        debug!("reset gps location");
        ready(Ok("gps location is reset".to_owned()))
    }
}
