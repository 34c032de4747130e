pub mod config;
pub mod course;
pub mod error;
pub mod llm;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod session;
pub mod store;

// Re-export key types
pub use config::Settings;
pub use course::CourseRequestFlow;
pub use error::{AiError, ConfigError, CourseGenError, ParseError, SessionBusy, StoreError};
pub use llm::{GeminiClient, GenerativeClient, ScriptedClient};
pub use models::{ChatMessage, Course, CourseModule, LearningRequest, Level, RecordId, Sender};
pub use session::ChatSession;
pub use store::{AtlasClient, ChatSessionMeta, DocumentStore, StoredChatSession};
