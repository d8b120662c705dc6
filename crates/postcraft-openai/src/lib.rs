mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{API_KEY_ENV, OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
