//! Error types for tagstack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagstack
#[derive(Debug, Error)]
pub enum TagstackError {
    #[error("Structural mismatch: expected closing marker '{expected}' but '{actual}' was pending")]
    StructuralMismatch { expected: String, actual: String },

    #[error("Cannot close tag: no tag is open")]
    EmptyStack,

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Invalid tag name: {0}")]
    InvalidTagName(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Step {step}: {source}")]
    AtStep {
        step: usize,
        #[source]
        source: Box<TagstackError>,
    },

    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TagstackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagstackError::StructuralMismatch { .. } => 2,
            TagstackError::EmptyStack => 3,
            TagstackError::UnknownTag(_) => 4,
            TagstackError::AtStep { source, .. } => source.exit_code(),
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagstackError::StructuralMismatch { expected, actual } => {
                format!(
                    "Structural mismatch: tried to close with '{}' but the innermost open tag \
                    closes with '{}'\n\n\
                    Suggestions:\n\
                    • Close tags in the reverse order they were opened\n\
                    • Close the innermost tag first (it closes with '{}')",
                    expected, actual, actual
                )
            }
            TagstackError::EmptyStack => "Cannot close tag: no tag is open\n\n\
                Suggestions:\n\
                • Remove the extra close step\n\
                • In auto mode, content already closes the innermost tag"
                .to_string(),
            TagstackError::UnknownTag(name) => {
                format!(
                    "Unknown tag: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'tagstack tags' to see the available tags\n\
                    • Tag names are case-insensitive (e.g., p, H1, span)\n\
                    • Declare custom tags with [[tag]] entries in tagstack.toml",
                    name
                )
            }
            TagstackError::AtStep { step, source } => {
                format!("Step {}: {}", step, source.display_with_suggestions())
            }
            TagstackError::Config(msg) => {
                if msg.contains("Invalid mode") {
                    format!(
                        "{}\n\n\
                        Valid modes: auto, manual\n\
                        Example: tagstack render page.toml --mode manual",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagstackError
pub type Result<T> = std::result::Result<T, TagstackError>;
