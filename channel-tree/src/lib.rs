//! Channel hierarchy snapshot and the matchers that run over it.
mod matcher;
mod tree;

pub use matcher::*;
pub use tree::*;
