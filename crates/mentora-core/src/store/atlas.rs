use crate::error::StoreError;
use crate::models::{ChatMessage, Course, RecordId};
use crate::store::traits::{ChatSessionMeta, DocumentStore, StoredChatSession};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

const COURSES_COLLECTION: &str = "courses";
const CHATS_COLLECTION: &str = "chats";

/// Client for the MongoDB Atlas Data API: one POST per action, credential in
/// the `api-key` header.
pub struct AtlasClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    data_source: String,
    database: String,
}

impl AtlasClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url:
                "https://ap-south-1.aws.data.mongodb-api.com/app/data-service/endpoint/data/v1"
                    .to_string(),
            data_source: "Cluster0".to_string(),
            database: "ai_tutor".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = data_source.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    async fn action(
        &self,
        action: &str,
        collection: &str,
        body: Value,
    ) -> Result<Value, StoreError> {
        let url = format!("{}/action/{}", self.base_url, action);

        let mut payload = json!({
            "dataSource": self.data_source,
            "database": self.database,
            "collection": collection,
        });
        if let (Some(target), Some(extra)) = (payload.as_object_mut(), body.as_object()) {
            for (key, value) in extra {
                target.insert(key.clone(), value.clone());
            }
        }

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => StoreError::Unauthorized,
                404 => StoreError::NotFound,
                _ => StoreError::Unavailable(format!("store returned {status}")),
            });
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct InsertOneResponse {
    #[serde(rename = "insertedId")]
    inserted_id: String,
}

#[derive(Debug, Deserialize)]
struct FindResponse<T> {
    #[serde(default = "Vec::new")]
    documents: Vec<T>,
}

#[async_trait::async_trait]
impl DocumentStore for AtlasClient {
    async fn save_course(
        &self,
        course: &Course,
        owner_id: &str,
    ) -> Result<RecordId, StoreError> {
        let now = Utc::now();
        let mut document =
            serde_json::to_value(course).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if let Some(fields) = document.as_object_mut() {
            fields.insert("userId".to_string(), json!(owner_id));
            fields.insert("createdAt".to_string(), json!(now));
            fields.insert("updatedAt".to_string(), json!(now));
        }

        let value = self
            .action("insertOne", COURSES_COLLECTION, json!({ "document": document }))
            .await?;
        let inserted: InsertOneResponse =
            serde_json::from_value(value).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(RecordId::new(inserted.inserted_id))
    }

    async fn create_chat_session(
        &self,
        meta: &ChatSessionMeta,
        owner_id: &str,
    ) -> Result<RecordId, StoreError> {
        let value = self
            .action(
                "insertOne",
                CHATS_COLLECTION,
                json!({
                    "document": {
                        "subject": meta.subject,
                        "messages": [],
                        "startedAt": meta.started_at,
                        "userId": owner_id,
                        "updatedAt": Utc::now(),
                    }
                }),
            )
            .await?;
        let inserted: InsertOneResponse =
            serde_json::from_value(value).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(RecordId::new(inserted.inserted_id))
    }

    async fn append_chat_turn(
        &self,
        session_id: &RecordId,
        messages: &[ChatMessage],
    ) -> Result<(), StoreError> {
        self.action(
            "updateOne",
            CHATS_COLLECTION,
            json!({
                "filter": { "_id": { "$oid": session_id.as_str() } },
                "update": {
                    "$set": {
                        "messages": messages,
                        "updatedAt": Utc::now(),
                    }
                },
            }),
        )
        .await?;
        Ok(())
    }

    async fn list_courses(&self, owner_id: &str) -> Result<Vec<Course>, StoreError> {
        let value = self
            .action(
                "find",
                COURSES_COLLECTION,
                json!({
                    "filter": { "userId": owner_id },
                    "sort": { "createdAt": -1 },
                }),
            )
            .await?;
        let found: FindResponse<Course> =
            serde_json::from_value(value).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(found.documents)
    }

    async fn list_chat_sessions(
        &self,
        owner_id: &str,
        subject: Option<&str>,
    ) -> Result<Vec<StoredChatSession>, StoreError> {
        let mut filter = json!({ "userId": owner_id });
        if let Some(subject) = subject {
            filter["subject"] = json!(subject);
        }

        let value = self
            .action(
                "find",
                CHATS_COLLECTION,
                json!({
                    "filter": filter,
                    "sort": { "startedAt": -1 },
                }),
            )
            .await?;
        let found: FindResponse<StoredChatSession> =
            serde_json::from_value(value).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(found.documents)
    }
}
