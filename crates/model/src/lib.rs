//! An abstraction layer for chat-completion services.
//!
//! This crate establishes the vocabulary that the exchange logic uses
//! to talk to a remote completion service: transcripts go out as
//! [`ModelRequest`]s, and each round trip produces one [`AssistantTurn`].
//! Concrete services implement [`ModelProvider`] in their own crates.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod opaque;
mod provider;
mod request;
mod turn;

pub use error::*;
pub use opaque::*;
pub use provider::*;
pub use request::*;
pub use turn::*;
