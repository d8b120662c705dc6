//! # `postcraft` – the umbrella crate
//!
//! | Crate                  | What it provides                                                        |
//! |------------------------|-------------------------------------------------------------------------|
//! | **`postcraft-core`**   | Messages, provider trait, `GenerationClient`, `GenerationResult`, errors |
//! | **`postcraft-prompt`** | Section builder, message chaining, instruction rule tables             |
//! | **`postcraft-types`**  | Request descriptors, preambles, `PromptComposer`                       |
//! | **`postcraft-openai`** | OpenAI `chat/completions` backend *(feature `openai`)*                 |
//!
//! On top of the re-exports this crate adds [`agent::ContentAgent`], which
//! pairs each use case with its preamble and generation settings.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use postcraft::{agent::ContentAgent, types::RequestDescriptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = postcraft::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let agent = ContentAgent::new(backend);
//!     let result = agent
//!         .generate_reddit_content(&RequestDescriptor::new("budgeting tips", "personalfinance"))
//!         .await;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```
pub mod agent;

pub use postcraft_core::*;
pub use postcraft_prompt as prompt;
pub use postcraft_types as types;

#[cfg(feature = "openai")]
pub use postcraft_openai as openai;
