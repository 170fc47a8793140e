//! Core logic: the transcript, the tool registry, and the two-round
//! tool-invocation exchange.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod exchange;
mod model_client;
pub mod tool;
pub mod transcript;

pub use exchange::{Exchange, ExchangeBuilder, ExchangeReport, Outcome};
