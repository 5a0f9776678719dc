pub mod client;
pub mod models;
pub mod openai_compat;
pub mod providers;

pub use models::{ChatMessage, ChatRequest, ChatRole};
pub use openai_compat::{CompletionEndpoint, EndpointError, OpenAiCompatEndpoint};
pub use providers::Provider;
