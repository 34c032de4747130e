mod atlas;
mod traits;

pub use atlas::AtlasClient;
pub use traits::{ChatSessionMeta, DocumentStore, StoredChatSession};
