pub mod builder;
pub mod chain;
pub mod rules;
