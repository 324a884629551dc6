//! Provider relay clients

pub mod claude;
pub mod gemini;
pub mod headers;
pub mod openai;

pub use claude::ClaudeClient;
pub use gemini::GeminiClient;
pub use openai::OpenAIClient;
