use crate::error::{CourseGenError, StoreError};
use crate::llm::GenerativeClient;
use crate::models::{Course, LearningRequest, RecordId};
use crate::parser;
use crate::prompt;
use crate::store::DocumentStore;

/// One-shot course generation: prompt, provider call, typed [`Course`].
///
/// Generation and persistence are independent: a caller may generate any
/// number of drafts before choosing to save one.
pub struct CourseRequestFlow {
    llm: Box<dyn GenerativeClient>,
    store: Option<Box<dyn DocumentStore>>,
}

impl CourseRequestFlow {
    pub fn new(llm: Box<dyn GenerativeClient>) -> Self {
        Self { llm, store: None }
    }

    pub fn with_store(mut self, store: Box<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Generate a course outline for the request. Provider and parse
    /// failures collapse into [`CourseGenError`]; the caller decides the
    /// messaging.
    pub async fn generate(&self, request: &LearningRequest) -> Result<Course, CourseGenError> {
        let course_prompt = prompt::build_course_prompt(request);
        let raw = self.llm.complete(&course_prompt).await?;
        Ok(parser::parse_course(&raw)?)
    }

    /// Persist a generated course. Explicit and separate from `generate`.
    pub async fn save(&self, course: &Course, owner_id: &str) -> Result<RecordId, StoreError> {
        self.store()?.save_course(course, owner_id).await
    }

    /// Previously saved courses for this owner, newest first.
    pub async fn list_saved(&self, owner_id: &str) -> Result<Vec<Course>, StoreError> {
        self.store()?.list_courses(owner_id).await
    }

    /// Personalized topic suggestions. A ranking hint rather than a primary
    /// operation: any provider or parse failure collapses to an empty list.
    pub async fn recommend_topics(&self, interests: &[String]) -> Vec<String> {
        let rec_prompt = prompt::build_recommendation_prompt(interests);
        match self.llm.complete(&rec_prompt).await {
            Ok(raw) => match parser::parse_topic_list(&raw) {
                Ok(topics) => topics,
                Err(err) => {
                    tracing::warn!("could not parse topic suggestions: {}", err);
                    Vec::new()
                }
            },
            Err(err) => {
                tracing::warn!("topic suggestion call failed: {}", err);
                Vec::new()
            }
        }
    }

    fn store(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.store
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable("no document store configured".to_string()))
    }
}
