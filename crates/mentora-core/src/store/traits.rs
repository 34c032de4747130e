use crate::error::StoreError;
use crate::models::{ChatMessage, Course, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata recorded when a chat session is first persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSessionMeta {
    pub subject: Option<String>,
    pub started_at: DateTime<Utc>,
}

/// A chat session as read back from the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredChatSession {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}

/// Remote document store for generated courses and chat transcripts.
///
/// Every operation is a single request/response exchange; no transaction
/// spans multiple calls. `append_chat_turn` replaces the stored `messages`
/// field wholesale — last-writer-wins, no merge and no concurrency check, so
/// two writers on the same session will silently clobber each other's
/// history. That weak-consistency property is accepted and documented, not
/// something callers should try to compensate for.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save_course(&self, course: &Course, owner_id: &str)
        -> Result<RecordId, StoreError>;

    async fn create_chat_session(
        &self,
        meta: &ChatSessionMeta,
        owner_id: &str,
    ) -> Result<RecordId, StoreError>;

    async fn append_chat_turn(
        &self,
        session_id: &RecordId,
        messages: &[ChatMessage],
    ) -> Result<(), StoreError>;

    async fn list_courses(&self, owner_id: &str) -> Result<Vec<Course>, StoreError>;

    async fn list_chat_sessions(
        &self,
        owner_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<StoredChatSession>, StoreError>;
}
