//! Asna conversational agent core.
//!
//! This crate provides the agent's intent matcher and its response
//! strategies. Both strategies implement the [`Responder`] trait: given
//! free-text input they always return a reply string, never an error.
//!
//! - [`Matcher`] maps input to a reply using an ordered table of
//!   regex-triggered [`Rule`]s, with a fixed fallback when nothing matches.
//! - [`GeminiResponder`] delegates to the Gemini API and converts any
//!   failure into an in-band `"Error: ..."` reply.
//!
//! # Example
//!
//! ```rust
//! use asna_agent::{Matcher, builtin_rules};
//!
//! let matcher = Matcher::compile(&builtin_rules())?;
//! let reply = matcher.respond("Hello!");
//! assert!(!reply.is_empty());
//! # Ok::<(), asna_agent::Error>(())
//! ```

mod error;
mod gemini;
mod matcher;
mod picker;
mod responder;
mod rule;

pub use error::{Error, Result};
pub use gemini::{DEFAULT_MODEL, GeminiResponder};
pub use matcher::Matcher;
pub use picker::{FixedPicker, RandomPicker, ReplyPicker};
pub use responder::Responder;
pub use rule::{FALLBACK_REPLY, Rule, builtin_rules};

/// The agent's display name.
pub const AGENT_NAME: &str = "Asna";
