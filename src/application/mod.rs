//! Application layer - Use cases and orchestration

pub mod list_tags;
pub mod render;

pub use list_tags::{ListTagsService, TagListing};
pub use render::RenderService;
