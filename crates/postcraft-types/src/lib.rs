//! Everything that describes *what* to generate.
//!
//! * [`request`] – the Reddit request descriptor and its optional preference
//!   objects.
//! * [`composer`] – turns a descriptor into one instruction string.
//! * [`instructions`] – the venue / post-type instruction table.
//! * [`context`] and [`reply`] – renderers for free-text prompts with extra
//!   context and for comment replies.
//! * [`fragments`] – role preambles and static messages.
pub mod composer;
pub mod context;
pub mod fragments;
pub mod instructions;
pub mod reply;
pub mod request;

pub use composer::PromptComposer;
pub use request::{
    ContentStrategyPreferences, ContentStructure, OptimizationPreferences, PersonaPreferences,
    PostType, RequestDescriptor, TitleStrategy,
};
