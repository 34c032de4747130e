use crate::error::AiError;

/// A generative text-completion provider.
///
/// One network call per `complete` invocation, no internal retry; retries,
/// if any, belong to the caller. Implementations hold nothing mutable
/// besides construction-time configuration and the credential, so a client
/// is safe to share across concurrent calls. Timeouts are the transport
/// layer's concern.
#[async_trait::async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one prompt and return the provider's unmodified text reply.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}
