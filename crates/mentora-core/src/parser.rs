//! Extraction of typed domain objects from free-text provider replies.
//!
//! The course path assumes the first balanced JSON object in the reply is
//! the payload (the shape requested by [`crate::prompt::build_course_prompt`]);
//! the chat path carries the reply through untouched.

use crate::error::ParseError;
use crate::models::{Course, CourseModule, Level};
use serde::Deserialize;
use uuid::Uuid;

/// Find the first balanced `open`..`close` block in `raw`.
///
/// Depth-aware rather than first-`open`/last-`close`: the prose around the
/// payload may itself contain delimiters. String literals and escapes are
/// honored so a brace inside a JSON string does not unbalance the scan.
fn extract_balanced(raw: &str, open: char, close: char) -> Option<&str> {
    let start = raw.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in raw[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            _ if c == open => depth += 1,
            _ if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + i + close.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoursePayload {
    title: Option<String>,
    description: Option<String>,
    difficulty: Option<Level>,
    estimated_duration: Option<String>,
    modules: Option<Vec<ModulePayload>>,
    #[serde(default)]
    prerequisites: Vec<String>,
}

// Provider-supplied ids are dropped; fresh ones are assigned on success.
#[derive(Debug, Deserialize)]
struct ModulePayload {
    title: Option<String>,
    description: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
}

fn required(field: Option<String>, name: &'static str) -> Result<String, ParseError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ParseError::MissingField(name)),
    }
}

/// Parse a course-generation reply into a [`Course`].
///
/// Required fields must be present and non-empty, and `modules` must contain
/// at least one entry. The course id and module ids are always regenerated
/// locally so identity never depends on provider output.
pub fn parse_course(raw: &str) -> Result<Course, ParseError> {
    let json = extract_balanced(raw, '{', '}').ok_or(ParseError::NoJsonFound)?;
    let payload: CoursePayload = serde_json::from_str(json)?;

    let modules = match payload.modules {
        Some(modules) if !modules.is_empty() => modules,
        _ => return Err(ParseError::MissingField("modules")),
    };

    let modules = modules
        .into_iter()
        .enumerate()
        .map(|(i, module)| {
            Ok(CourseModule {
                id: format!("module-{}", i + 1),
                title: required(module.title, "modules.title")?,
                description: module.description.unwrap_or_default(),
                duration: module.duration.unwrap_or_default(),
                topics: module.topics,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(Course {
        id: format!("course-{}", Uuid::new_v4()),
        title: required(payload.title, "title")?,
        description: required(payload.description, "description")?,
        difficulty: payload
            .difficulty
            .ok_or(ParseError::MissingField("difficulty"))?,
        estimated_duration: required(payload.estimated_duration, "estimatedDuration")?,
        modules,
        prerequisites: payload.prerequisites,
    })
}

/// The chat path carries the free-text reply straight through as the message
/// body; unlike the course path there is no structural payload to extract.
pub fn parse_chat_reply(raw: String) -> String {
    raw
}

/// Parse a topic-suggestion reply: the first balanced JSON array of strings.
pub fn parse_topic_list(raw: &str) -> Result<Vec<String>, ParseError> {
    let json = extract_balanced(raw, '[', ']').ok_or(ParseError::NoJsonFound)?;
    Ok(serde_json::from_str(json)?)
}
