//! Response strategy interface.

use async_trait::async_trait;

use crate::matcher::Matcher;

/// A response strategy: maps free-text input to a reply.
///
/// Implementations never fail. Strategies with failure modes of their own
/// (e.g. remote model calls) absorb them into the returned string, so
/// callers need no error handling.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, text: &str) -> String;
}

#[async_trait]
impl Responder for Matcher {
    async fn respond(&self, text: &str) -> String {
        Matcher::respond(self, text)
    }
}
