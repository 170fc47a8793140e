use grove_core::tool::{Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GpsLocation {
    #[schemars(description = "id")]
    id: f64,
    #[schemars(description = "latitude")]
    latitude: f64,
    #[schemars(description = "longitude")]
    longitude: f64,
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VisitLocationsParameters {
    #[schemars(description = "the gps locations")]
    locations: Vec<GpsLocation>,
}

/// A tool for marking a set of surveyed gps locations as visited.
pub struct VisitLocationsTool {
    parameter_schema: Value,
}

impl VisitLocationsTool {
    /// Creates a new visit-locations tool.
    #[inline]
    pub fn new() -> Self {
        VisitLocationsTool {
            parameter_schema: schema_for!(VisitLocationsParameters).to_value(),
        }
    }
}

impl Default for VisitLocationsTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for VisitLocationsTool {
    type Input = VisitLocationsParameters;

    fn name(&self) -> &str {
        "visit_locations"
    }

    fn description(&self) -> &str {
        "Visit a location"
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: VisitLocationsParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            for location in &input.locations {
                debug!(
                    "visiting location {} at ({}, {})",
                    location.id, location.latitude, location.longitude
                );
            }
            Ok(format!("{} locations are visited.", input.locations.len()))
        }
    }
}
