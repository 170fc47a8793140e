//! The survey tools declared to the model.

mod reset_gps;
mod visit_locations;

pub use reset_gps::ResetGpsLocationTool;
pub use visit_locations::VisitLocationsTool;
