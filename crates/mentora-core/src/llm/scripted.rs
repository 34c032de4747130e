use crate::error::AiError;
use crate::llm::traits::GenerativeClient;
use std::sync::atomic::{AtomicUsize, Ordering};

const TUTOR_REPLIES: [&str; 5] = [
    "That's a great question! Let me help you understand this concept step by step.",
    "I can see you're working on this topic. Here's how I'd approach this problem...",
    "Excellent! You're on the right track. Let me provide some additional insights.",
    "This is a common area where students need clarification. Let me break it down for you.",
    "Perfect question for learning! Here's what you need to know about this topic.",
];

/// Offline stand-in for the hosted provider: serves a fixed reply list
/// round-robin. Selected explicitly at construction wherever a
/// [`GenerativeClient`] is expected; the real client never falls back to
/// this one at runtime.
pub struct ScriptedClient {
    replies: Vec<String>,
    next: AtomicUsize,
}

impl ScriptedClient {
    /// A client serving the stock tutor replies.
    pub fn new() -> Self {
        Self::with_replies(TUTOR_REPLIES.iter().map(|r| r.to_string()).collect())
    }

    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies,
            next: AtomicUsize::new(0),
        }
    }
}

impl Default for ScriptedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GenerativeClient for ScriptedClient {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        if self.replies.is_empty() {
            return Err(AiError::Unavailable(
                "scripted client has no replies".to_string(),
            ));
        }
        let i = self.next.fetch_add(1, Ordering::Relaxed) % self.replies.len();
        Ok(self.replies[i].clone())
    }
}
