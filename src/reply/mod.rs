//! Reply engines
//!
//! The chat route treats reply generation as an opaque collaborator: it hands
//! over a lowercased message and gets a response string back. The `Replier`
//! trait is that seam. The built-in implementation is a keyword rule engine,
//! but anything pure and synchronous fits behind it.

mod rules;

use thiserror::Error;

pub use rules::RuleEngine;

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Engine failure: {0}")]
    Engine(String),
}

/// Produces a response for a single user message.
///
/// Implementations must be pure: the same message always yields the same
/// reply, and no state is shared across calls. Callers pass the message
/// already lowercased.
pub trait Replier: Send + Sync {
    fn reply(&self, message: &str) -> Result<String, ReplyError>;
}
