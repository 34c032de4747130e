use crate::error::SessionBusy;
use crate::llm::GenerativeClient;
use crate::models::{ChatMessage, RecordId, Sender};
use crate::parser;
use crate::prompt;
use crate::store::{ChatSessionMeta, DocumentStore};
use chrono::{DateTime, Utc};

/// Shown in place of a reply when the provider call fails. The session
/// absorbs provider errors: a broken conversation view is worse than a
/// degraded one, so a turn always resolves with an assistant message.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble answering right now. Please try again in a moment.";

/// An interactive tutoring conversation.
///
/// Two states, Idle and AwaitingResponse, with exactly one provider call in
/// flight per turn. The message log is append-only and stays authoritative
/// in memory; persistence is best-effort and never blocks or rolls back a
/// turn. The session is discarded when the conversation view closes — there
/// is no close protocol with the store.
pub struct ChatSession {
    llm: Box<dyn GenerativeClient>,
    store: Option<Box<dyn DocumentStore>>,
    owner_id: String,
    subject: Option<String>,
    messages: Vec<ChatMessage>,
    awaiting_response: bool,
    remote_id: Option<RecordId>,
    started_at: DateTime<Utc>,
    next_id: u64,
}

impl ChatSession {
    pub fn new(llm: Box<dyn GenerativeClient>, owner_id: impl Into<String>) -> Self {
        Self {
            llm,
            store: None,
            owner_id: owner_id.into(),
            subject: None,
            messages: Vec::new(),
            awaiting_response: false,
            remote_id: None,
            started_at: Utc::now(),
            next_id: 0,
        }
    }

    /// Scope the session to a subject: conditions the tutor persona and tags
    /// every message.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_store(mut self, store: Box<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Seed the opening assistant message the conversation view shows.
    pub fn with_greeting(mut self) -> Self {
        let greeting = match &self.subject {
            Some(subject) => format!(
                "Hello! I'm your AI tutor for {subject}. What would you like to learn today?"
            ),
            None => "Hello! I'm your AI tutor. I can help you with any subject. \
                     What would you like to learn today?"
                .to_string(),
        };
        self.push(Sender::Assistant, greeting);
        self
    }

    /// Run one turn: append the user message, ask the provider, append the
    /// assistant reply, and return it.
    ///
    /// Rejected with [`SessionBusy`] while a previous turn is still awaiting
    /// its response. Provider errors are absorbed into [`FALLBACK_REPLY`];
    /// either way the session is Idle again when this returns.
    pub async fn submit(&mut self, text: impl Into<String>) -> Result<ChatMessage, SessionBusy> {
        if self.awaiting_response {
            return Err(SessionBusy);
        }

        let text = text.into();
        let chat_prompt = prompt::build_chat_prompt(&text, self.subject.as_deref());
        self.push(Sender::User, text);
        self.awaiting_response = true;

        let outcome = self.llm.complete(&chat_prompt).await;
        self.awaiting_response = false;

        let reply = match outcome {
            Ok(raw) => {
                let reply = self.push(Sender::Assistant, parser::parse_chat_reply(raw));
                self.persist_turn().await;
                reply
            }
            Err(err) => {
                tracing::warn!("provider call failed, substituting fallback reply: {}", err);
                self.push(Sender::Assistant, FALLBACK_REPLY.to_string())
            }
        };

        Ok(reply)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a provider call is in flight; drives the typing indicator.
    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Handle to the persisted record, populated after the first successful
    /// persistence call.
    pub fn remote_id(&self) -> Option<&RecordId> {
        self.remote_id.as_ref()
    }

    fn push(&mut self, sender: Sender, content: String) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            content,
            sender,
            timestamp: Utc::now(),
            subject: self.subject.clone(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Best-effort, at-most-once persistence of the current log. Failures
    /// are logged and never touch the in-memory conversation.
    async fn persist_turn(&mut self) {
        let Some(store) = self.store.as_deref() else {
            return;
        };

        if self.remote_id.is_none() {
            let meta = ChatSessionMeta {
                subject: self.subject.clone(),
                started_at: self.started_at,
            };
            match store.create_chat_session(&meta, &self.owner_id).await {
                Ok(id) => self.remote_id = Some(id),
                Err(err) => {
                    tracing::warn!("failed to create remote chat session: {}", err);
                    return;
                }
            }
        }

        if let Some(id) = &self.remote_id {
            if let Err(err) = store.append_chat_turn(id, &self.messages).await {
                tracing::warn!("failed to persist chat turn: {}", err);
            }
        }
    }
}
