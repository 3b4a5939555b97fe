//! List tags use case

use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::Config;

/// One row of the tag listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagListing {
    pub name: String,
    pub opening: String,
    pub closing: Option<String>,
    pub custom: bool,
}

/// Service for listing every tag available to scripts.
pub struct ListTagsService {
    config: Config,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Built-in tags followed by the config's custom tags.
    pub fn execute(&self) -> Result<Vec<TagListing>> {
        let catalog = self.config.catalog()?;

        Ok(catalog
            .entries()
            .map(|tag| TagListing {
                name: tag.name().to_string(),
                opening: tag.opening_marker().to_string(),
                closing: tag.closing_marker().map(str::to_string),
                custom: tag.is_custom(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomTag, HtmlTag};

    #[test]
    fn lists_builtins_only_by_default() {
        let tags = ListTagsService::new(Config::default()).execute().unwrap();
        assert_eq!(tags.len(), HtmlTag::ALL.len());
        assert!(tags.iter().all(|t| !t.custom));

        let br = tags.iter().find(|t| t.name == "br").unwrap();
        assert_eq!(br.opening, "<br>");
        assert_eq!(br.closing, None);
    }

    #[test]
    fn lists_custom_tags_last() {
        let config = Config {
            tags: vec![CustomTag::new("em", "<em>", Some("</em>".to_string()))],
            ..Config::default()
        };
        let tags = ListTagsService::new(config).execute().unwrap();

        let last = tags.last().unwrap();
        assert_eq!(last.name, "em");
        assert_eq!(last.closing.as_deref(), Some("</em>"));
        assert!(last.custom);
    }
}
