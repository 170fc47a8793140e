//! A plantation field assistant built on the two-round tool-invocation
//! exchange.
//!
//! The crate includes a CLI for running one survey exchange in the
//! terminal. And you can also use it as a library to bring the
//! assistant into your own host apps.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod assistant;
pub mod tools;

pub use assistant::FieldAssistant;

/// Re-exports of [`grove_core`] crate.
pub mod core {
    pub use grove_core::*;
}
