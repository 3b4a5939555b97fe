//! tagstack - Balanced markup builder
//!
//! Builds markup text by appending opening tags, content and closing tags
//! while a stack of pending closing markers keeps the output balanced.
//! Closing is either automatic or explicit and validated.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{CloseMode, HtmlTag, Tag, TagBuilder};
pub use error::TagstackError;
