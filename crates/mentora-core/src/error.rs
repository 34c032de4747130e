use thiserror::Error;

/// Failures from the generative-AI provider.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("provider rejected the API key")]
    Unauthorized,

    #[error("provider rate limit or quota exceeded")]
    RateLimited,

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider reply did not match the expected envelope: {0}")]
    Malformed(String),
}

/// Failures while turning a raw provider reply into a typed course.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("reply contains no JSON payload")]
    NoJsonFound,

    #[error("invalid JSON in reply: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("course payload is missing `{0}`")]
    MissingField(&'static str),
}

/// Failures from the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store rejected the API key")]
    Unauthorized,

    #[error("record not found")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Collapsed error surfaced by [`CourseRequestFlow::generate`].
///
/// [`CourseRequestFlow::generate`]: crate::course::CourseRequestFlow::generate
#[derive(Error, Debug)]
pub enum CourseGenError {
    #[error("course generation failed at the provider: {0}")]
    ProviderFailed(#[from] AiError),

    #[error("course reply could not be parsed: {0}")]
    UnparsableReply(#[from] ParseError),
}

/// Returned by [`ChatSession::submit`] while a previous turn is still in
/// flight. The caller queues or drops the input; the session never does.
///
/// [`ChatSession::submit`]: crate::session::ChatSession::submit
#[derive(Error, Debug)]
#[error("a turn is already awaiting a response")]
pub struct SessionBusy;

/// Failures loading or saving local settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
