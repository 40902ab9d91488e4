//! Business assistant client.
//!
//! The server never calls a completion model. [`CannedAssistant`] echoes the
//! question inside a fixed reply; a real completion client would implement
//! the same trait.

use async_trait::async_trait;

use common::AppResult;

#[cfg(test)]
use mockall::automock;

/// Reply sent when the assistant fails for any reason.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm currently experiencing technical difficulties. Please try again later.";

/// Text-in, text-out assistant.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, message: &str) -> AppResult<String>;
}

/// Development-mode assistant that never leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAssistant;

#[async_trait]
impl Assistant for CannedAssistant {
    async fn reply(&self, message: &str) -> AppResult<String> {
        Ok(format!(
            "Thank you for your question: \"{}\". As an AI assistant, I'd be happy to help with business advice, but I'm currently in development mode.",
            message
        ))
    }
}
