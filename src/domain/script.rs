//! Document scripts: a TOML list of builder steps

use crate::domain::builder::TagBuilder;
use crate::domain::mode::CloseMode;
use crate::domain::tag::TagCatalog;
use crate::error::{Result, TagstackError};
use serde::{Deserialize, Serialize};

/// A single builder operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Open the named tag
    Open(String),
    /// Close the named tag (validated)
    Close(String),
    /// Append raw text
    Content(String),
    /// Append spaces
    Space(usize),
    /// Append non-breaking spaces
    Nbsp(usize),
    /// Emit a line break when true
    LineBreak(bool),
    /// Switch close mode for the remaining steps
    Mode(CloseMode),
}

/// Sequence of steps, optionally pinned to a close mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CloseMode>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| TagstackError::Script(format!("Failed to parse script: {}", e)))
    }

    /// Apply every step to `builder`, resolving tag names through `catalog`.
    ///
    /// Errors are tagged with the 1-based number of the failing step.
    pub fn apply(&self, builder: &mut TagBuilder, catalog: &TagCatalog) -> Result<()> {
        for (idx, step) in self.steps.iter().enumerate() {
            Self::apply_step(step, builder, catalog).map_err(|e| TagstackError::AtStep {
                step: idx + 1,
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    fn apply_step(step: &Step, builder: &mut TagBuilder, catalog: &TagCatalog) -> Result<()> {
        tracing::trace!(?step, depth = builder.depth(), "applying step");

        match step {
            Step::Open(name) => {
                let tag = catalog.resolve(name)?;
                builder.open(&tag);
            }
            Step::Close(name) => {
                let tag = catalog.resolve(name)?;
                builder.close(&tag)?;
            }
            Step::Content(text) => {
                builder.content(text);
            }
            Step::Space(count) => {
                builder.space(*count);
            }
            Step::Nbsp(count) => {
                builder.nbsp(*count);
            }
            Step::LineBreak(enabled) => {
                if *enabled {
                    builder.line_break();
                }
            }
            Step::Mode(mode) => {
                builder.set_mode(*mode);
            }
        }

        Ok(())
    }

    /// Run the script on a fresh builder in `mode` and render the result
    pub fn execute(&self, catalog: &TagCatalog, mode: CloseMode) -> Result<String> {
        let mut builder = TagBuilder::with_mode(mode);
        self.apply(&mut builder, catalog)?;
        Ok(builder.into_string())
    }
}
