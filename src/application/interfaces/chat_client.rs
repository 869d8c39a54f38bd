use async_trait::async_trait;

use crate::domain::{ApiKey, DomainError};

/// An interface for sending a single-message prompt to a chat-completion model
/// and receiving the text of its first reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. The credential is passed per call and must not be retained.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as the only `user` message and return the first choice's
    /// message content unmodified.
    async fn complete(&self, api_key: &ApiKey, prompt: &str) -> Result<String, DomainError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}
