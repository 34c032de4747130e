use mentora_core::{
    AiError, ChatMessage, ChatSessionMeta, Course, CourseGenError, CourseRequestFlow,
    DocumentStore, GenerativeClient, LearningRequest, Level, ParseError, RecordId, StoreError,
    StoredChatSession,
};
use std::sync::{Arc, Mutex};

/// Mock provider serving pre-programmed outcomes in declaration order.
struct MockProvider {
    outcomes: Mutex<Vec<Result<String, AiError>>>,
}

impl MockProvider {
    fn new(mut outcomes: Vec<Result<String, AiError>>) -> Self {
        outcomes.reverse();
        Self {
            outcomes: Mutex::new(outcomes),
        }
    }
}

#[async_trait::async_trait]
impl GenerativeClient for MockProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok("out of scripted replies".to_string()))
    }
}

/// Store that records saved courses and serves them back.
#[derive(Clone, Default)]
struct SavedCourses {
    courses: Arc<Mutex<Vec<(Course, String)>>>,
}

struct MockStore {
    log: SavedCourses,
}

#[async_trait::async_trait]
impl DocumentStore for MockStore {
    async fn save_course(&self, course: &Course, owner_id: &str) -> Result<RecordId, StoreError> {
        self.log
            .courses
            .lock()
            .unwrap()
            .push((course.clone(), owner_id.to_string()));
        Ok(RecordId::new("record-42"))
    }

    async fn create_chat_session(
        &self,
        _meta: &ChatSessionMeta,
        _owner_id: &str,
    ) -> Result<RecordId, StoreError> {
        Ok(RecordId::new("chat-record-1"))
    }

    async fn append_chat_turn(
        &self,
        _session_id: &RecordId,
        _messages: &[ChatMessage],
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_courses(&self, owner_id: &str) -> Result<Vec<Course>, StoreError> {
        Ok(self
            .log
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, owner)| owner == owner_id)
            .map(|(course, _)| course.clone())
            .collect())
    }

    async fn list_chat_sessions(
        &self,
        _owner_id: &str,
        _subject: Option<&str>,
    ) -> Result<Vec<StoredChatSession>, StoreError> {
        Ok(Vec::new())
    }
}

const ALGEBRA_REPLY: &str = r#"Sure! Here is a course outline:

{
  "title": "Algebra Basics",
  "description": "A gentle introduction to algebra",
  "difficulty": "Beginner",
  "estimatedDuration": "1 week",
  "modules": [
    {
      "title": "Variables and Expressions",
      "description": "What a variable is",
      "duration": "2 hours",
      "topics": ["Variables", "Expressions"]
    },
    {
      "title": "Simple Equations",
      "description": "Solving for x",
      "duration": "3 hours",
      "topics": ["Equations"]
    }
  ],
  "prerequisites": ["Arithmetic"]
}

Happy studying!"#;

fn algebra_request() -> LearningRequest {
    LearningRequest::new("Algebra", Level::Beginner, "1 week")
}

#[tokio::test]
async fn generate_maps_the_request_onto_a_typed_course() {
    let provider = MockProvider::new(vec![Ok(ALGEBRA_REPLY.to_string())]);
    let flow = CourseRequestFlow::new(Box::new(provider));

    let course = flow.generate(&algebra_request()).await.unwrap();

    assert_eq!(course.difficulty, Level::Beginner);
    assert_eq!(course.estimated_duration, "1 week");
    assert!(!course.modules.is_empty());
    assert!(course.id.starts_with("course-"));
    assert_eq!(course.modules[0].id, "module-1");
}

#[tokio::test]
async fn rate_limiting_collapses_to_provider_failed() {
    let provider = MockProvider::new(vec![Err(AiError::RateLimited)]);
    let flow = CourseRequestFlow::new(Box::new(provider));

    let err = flow.generate(&algebra_request()).await.unwrap_err();
    assert!(matches!(
        err,
        CourseGenError::ProviderFailed(AiError::RateLimited)
    ));
}

#[tokio::test]
async fn prose_only_reply_collapses_to_unparsable() {
    let provider = MockProvider::new(vec![Ok(
        "I'm not able to produce a course right now.".to_string()
    )]);
    let flow = CourseRequestFlow::new(Box::new(provider));

    let err = flow.generate(&algebra_request()).await.unwrap_err();
    assert!(matches!(
        err,
        CourseGenError::UnparsableReply(ParseError::NoJsonFound)
    ));
}

#[tokio::test]
async fn generate_and_save_are_independent_calls() {
    let log = SavedCourses::default();
    let provider = MockProvider::new(vec![
        Ok(ALGEBRA_REPLY.to_string()),
        Ok(ALGEBRA_REPLY.to_string()),
    ]);
    let flow = CourseRequestFlow::new(Box::new(provider)).with_store(Box::new(MockStore {
        log: log.clone(),
    }));

    // two drafts, only one saved
    let _draft = flow.generate(&algebra_request()).await.unwrap();
    let keeper = flow.generate(&algebra_request()).await.unwrap();

    let record = flow.save(&keeper, "user-1").await.unwrap();
    assert_eq!(record.as_str(), "record-42");
    assert_eq!(log.courses.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn save_without_a_store_is_unavailable() {
    let provider = MockProvider::new(vec![Ok(ALGEBRA_REPLY.to_string())]);
    let flow = CourseRequestFlow::new(Box::new(provider));

    let course = flow.generate(&algebra_request()).await.unwrap();
    let err = flow.save(&course, "user-1").await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[tokio::test]
async fn list_saved_returns_the_owners_courses() {
    let log = SavedCourses::default();
    let provider = MockProvider::new(vec![Ok(ALGEBRA_REPLY.to_string())]);
    let flow = CourseRequestFlow::new(Box::new(provider)).with_store(Box::new(MockStore {
        log: log.clone(),
    }));

    let course = flow.generate(&algebra_request()).await.unwrap();
    flow.save(&course, "user-1").await.unwrap();

    let courses = flow.list_saved("user-1").await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Algebra Basics");

    assert!(flow.list_saved("someone-else").await.unwrap().is_empty());
}

#[tokio::test]
async fn recommendations_parse_a_topic_array_out_of_prose() {
    let provider = MockProvider::new(vec![Ok(
        r#"Here are some ideas: ["Linear algebra", "Statistics"] — have fun!"#.to_string(),
    )]);
    let flow = CourseRequestFlow::new(Box::new(provider));

    let topics = flow
        .recommend_topics(&["math".to_string(), "data".to_string()])
        .await;
    assert_eq!(topics, vec!["Linear algebra", "Statistics"]);
}

#[tokio::test]
async fn recommendation_failures_collapse_to_an_empty_list() {
    let provider = MockProvider::new(vec![
        Err(AiError::Unavailable("down".to_string())),
        Ok("no list here".to_string()),
    ]);
    let flow = CourseRequestFlow::new(Box::new(provider));

    assert!(flow.recommend_topics(&["math".to_string()]).await.is_empty());
    assert!(flow.recommend_topics(&["math".to_string()]).await.is_empty());
}
