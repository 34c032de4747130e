mod gemini;
mod scripted;
mod traits;

pub use gemini::GeminiClient;
pub use scripted::ScriptedClient;
pub use traits::GenerativeClient;
