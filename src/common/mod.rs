//! Common utilities shared across the porttrack codebase.
//!
//! Key components:
//! - **Text utilities**: title casing and offset-to-line lookup

pub mod text;

pub use text::{title_case, LineIndex};
