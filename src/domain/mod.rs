//! Domain layer - Tag stack discipline and tag descriptors

pub mod builder;
pub mod close_stack;
pub mod mode;
pub mod script;
pub mod tag;
pub mod text;

pub use builder::TagBuilder;
pub use close_stack::CloseStack;
pub use mode::CloseMode;
pub use script::{Script, Step};
pub use tag::{CustomTag, HtmlTag, Tag, TagCatalog, TagRef};
pub use text::repeat;
