use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty of a learning request, reused as the difficulty of the course
/// generated for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        })
    }
}

/// What the user wants to learn. Constructed by the caller, never persisted
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningRequest {
    pub subject: String,
    pub level: Level,
    pub duration: String,
}

impl LearningRequest {
    pub fn new(subject: impl Into<String>, level: Level, duration: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            level,
            duration: duration.into(),
        }
    }
}

/// One unit of a generated course. Ids are unique within the owning course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A generated course outline.
///
/// `id` is assigned locally at receipt time and never trusted from the
/// provider reply; `modules` is non-empty for a successfully generated
/// course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Level,
    pub estimated_duration: String,
    pub modules: Vec<CourseModule>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in a chat session's message log. Owned by the session that
/// created it and immutable once appended; ids increase monotonically within
/// a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Opaque handle to a persisted record, as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
