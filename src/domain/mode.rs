//! Close mode definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Close modes determine who is responsible for emitting closing markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CloseMode {
    /// Content closes the innermost open tag; rendering closes the rest
    #[default]
    Auto,
    /// Every tag is closed explicitly and each close is validated
    Manual,
}

impl CloseMode {
    /// Whether appending content implicitly closes the innermost tag
    pub fn closes_on_content(&self) -> bool {
        matches!(self, CloseMode::Auto)
    }

    /// Whether rendering drains every tag still open
    pub fn drains_on_render(&self) -> bool {
        matches!(self, CloseMode::Auto)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CloseMode::Auto => "auto",
            CloseMode::Manual => "manual",
        }
    }
}

impl fmt::Display for CloseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(CloseMode::Auto),
            "manual" => Ok(CloseMode::Manual),
            _ => Err(format!(
                "Invalid mode: '{}'. Valid modes are: auto, manual",
                s
            )),
        }
    }
}
