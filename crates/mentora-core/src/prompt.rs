//! Prompt construction for the generative provider.
//!
//! Pure functions, no I/O. The course prompt's JSON-shape instruction is a
//! protocol contract with [`crate::parser::parse_course`], which expects the
//! first balanced JSON object in the reply to be the course payload.

use crate::models::LearningRequest;

/// Build the course-generation prompt. The subject, level and duration of
/// the request are embedded verbatim.
pub fn build_course_prompt(request: &LearningRequest) -> String {
    format!(
        r#"Generate a comprehensive course structure for {subject} at {level} level that can be completed in {duration}.

Please provide a JSON response with the following structure:
{{
  "title": "Course Title",
  "description": "Brief course description",
  "difficulty": "{level}",
  "estimatedDuration": "{duration}",
  "modules": [
    {{
      "id": "module-1",
      "title": "Module Title",
      "description": "Module description",
      "duration": "2 hours",
      "topics": ["Topic 1", "Topic 2", "Topic 3"]
    }}
  ],
  "prerequisites": ["Prerequisite 1", "Prerequisite 2"]
}}

Make sure the course is well-structured, progressive, and practical with real-world applications."#,
        subject = request.subject,
        level = request.level,
        duration = request.duration,
    )
}

/// Build a single chat-turn prompt. The tutor persona is specialised when
/// the session carries a subject tag.
pub fn build_chat_prompt(message: &str, subject: Option<&str>) -> String {
    let persona = match subject {
        Some(subject) => format!("You are an expert AI tutor specializing in {subject}."),
        None => "You are an AI tutor assistant.".to_string(),
    };

    format!(
        "{persona} Help the user with their educational questions. Be detailed, helpful, and encouraging. Provide examples and step-by-step explanations when appropriate.\n\nUser question: {message}\n\nPlease provide a comprehensive and helpful response:"
    )
}

/// Build the topic-suggestion prompt: asks for a bare JSON array of strings.
pub fn build_recommendation_prompt(interests: &[String]) -> String {
    format!(
        "Based on a user's interests: {}, suggest 5 personalized learning topics or courses that would help them grow. Return only a JSON array of strings.",
        interests.join(", ")
    )
}
