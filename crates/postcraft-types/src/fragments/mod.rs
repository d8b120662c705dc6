mod preamble;
mod static_fragment;

pub use preamble::Preamble;
pub use static_fragment::StaticFragment;
