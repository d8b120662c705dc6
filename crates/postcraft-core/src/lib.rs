//! Provider-agnostic building blocks shared by every postcraft crate.
//!
//! * [`generic`] – chat messages and roles independent of any provider.
//! * [`model`] – logical model identifiers.
//! * [`provider`] – the [`provider::ChatCompletionProvider`] trait a backend
//!   implements.
//! * [`client`] – [`GenerationClient`], the one boundary that talks to a
//!   backend and turns every outcome into a [`GenerationResult`].
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod result;
pub mod template;

pub use client::{GenerationClient, GenerationSettings};
pub use result::GenerationResult;
