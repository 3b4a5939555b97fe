//! Tag descriptors and the built-in tag catalog

use crate::error::{Result, TagstackError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Anything that can be opened and closed by a [`TagBuilder`](super::TagBuilder).
///
/// Void tags such as `<br>` have no closing marker.
pub trait Tag {
    fn opening_marker(&self) -> &str;
    fn closing_marker(&self) -> Option<&str>;
}

impl<T: Tag + ?Sized> Tag for &T {
    fn opening_marker(&self) -> &str {
        (**self).opening_marker()
    }

    fn closing_marker(&self) -> Option<&str> {
        (**self).closing_marker()
    }
}

/// Built-in HTML tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlTag {
    Html,
    Head,
    Body,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Pre,
    Span,
    B,
    I,
    U,
    Br,
}

impl HtmlTag {
    /// Every built-in tag, in catalog order
    pub const ALL: [HtmlTag; 16] = [
        HtmlTag::Html,
        HtmlTag::Head,
        HtmlTag::Body,
        HtmlTag::H1,
        HtmlTag::H2,
        HtmlTag::H3,
        HtmlTag::H4,
        HtmlTag::H5,
        HtmlTag::H6,
        HtmlTag::P,
        HtmlTag::Pre,
        HtmlTag::Span,
        HtmlTag::B,
        HtmlTag::I,
        HtmlTag::U,
        HtmlTag::Br,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HtmlTag::Html => "html",
            HtmlTag::Head => "head",
            HtmlTag::Body => "body",
            HtmlTag::H1 => "h1",
            HtmlTag::H2 => "h2",
            HtmlTag::H3 => "h3",
            HtmlTag::H4 => "h4",
            HtmlTag::H5 => "h5",
            HtmlTag::H6 => "h6",
            HtmlTag::P => "p",
            HtmlTag::Pre => "pre",
            HtmlTag::Span => "span",
            HtmlTag::B => "b",
            HtmlTag::I => "i",
            HtmlTag::U => "u",
            HtmlTag::Br => "br",
        }
    }

    /// Heading tag for level 1-6
    pub fn heading(level: u8) -> Option<HtmlTag> {
        match level {
            1 => Some(HtmlTag::H1),
            2 => Some(HtmlTag::H2),
            3 => Some(HtmlTag::H3),
            4 => Some(HtmlTag::H4),
            5 => Some(HtmlTag::H5),
            6 => Some(HtmlTag::H6),
            _ => None,
        }
    }
}

impl Tag for HtmlTag {
    fn opening_marker(&self) -> &str {
        match self {
            HtmlTag::Html => "<html>",
            HtmlTag::Head => "<head>",
            HtmlTag::Body => "<body>",
            HtmlTag::H1 => "<h1>",
            HtmlTag::H2 => "<h2>",
            HtmlTag::H3 => "<h3>",
            HtmlTag::H4 => "<h4>",
            HtmlTag::H5 => "<h5>",
            HtmlTag::H6 => "<h6>",
            HtmlTag::P => "<p>",
            HtmlTag::Pre => "<pre>",
            HtmlTag::Span => "<span>",
            HtmlTag::B => "<b>",
            HtmlTag::I => "<i>",
            HtmlTag::U => "<u>",
            HtmlTag::Br => "<br>",
        }
    }

    fn closing_marker(&self) -> Option<&str> {
        match self {
            HtmlTag::Html => Some("</html>"),
            HtmlTag::Head => Some("</head>"),
            HtmlTag::Body => Some("</body>"),
            HtmlTag::H1 => Some("</h1>"),
            HtmlTag::H2 => Some("</h2>"),
            HtmlTag::H3 => Some("</h3>"),
            HtmlTag::H4 => Some("</h4>"),
            HtmlTag::H5 => Some("</h5>"),
            HtmlTag::H6 => Some("</h6>"),
            HtmlTag::P => Some("</p>"),
            HtmlTag::Pre => Some("</pre>"),
            HtmlTag::Span => Some("</span>"),
            HtmlTag::B => Some("</b>"),
            HtmlTag::I => Some("</i>"),
            HtmlTag::U => Some("</u>"),
            HtmlTag::Br => None,
        }
    }
}

impl FromStr for HtmlTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        HtmlTag::ALL
            .into_iter()
            .find(|tag| tag.name() == lower)
            .ok_or_else(|| format!("Unknown built-in tag: '{}'", s))
    }
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A caller-defined tag, usually declared in `tagstack.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTag {
    pub name: String,
    pub open: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl CustomTag {
    pub fn new(name: impl Into<String>, open: impl Into<String>, close: Option<String>) -> Self {
        CustomTag {
            name: name.into(),
            open: open.into(),
            close,
        }
    }
}

impl Tag for CustomTag {
    fn opening_marker(&self) -> &str {
        &self.open
    }

    fn closing_marker(&self) -> Option<&str> {
        self.close.as_deref()
    }
}

/// A tag resolved by name from a [`TagCatalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRef<'a> {
    Builtin(HtmlTag),
    Custom(&'a CustomTag),
}

impl TagRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            TagRef::Builtin(tag) => tag.name(),
            TagRef::Custom(tag) => &tag.name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, TagRef::Custom(_))
    }
}

impl Tag for TagRef<'_> {
    fn opening_marker(&self) -> &str {
        match self {
            TagRef::Builtin(tag) => tag.opening_marker(),
            TagRef::Custom(tag) => tag.opening_marker(),
        }
    }

    fn closing_marker(&self) -> Option<&str> {
        match self {
            TagRef::Builtin(tag) => tag.closing_marker(),
            TagRef::Custom(tag) => tag.closing_marker(),
        }
    }
}

/// Custom tag names: lowercase letter followed by lowercase letters, digits, `_` or `-`
fn tag_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap())
}

/// Name lookup over the built-in tags plus any custom tags
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    custom: Vec<CustomTag>,
}

impl TagCatalog {
    /// Catalog containing only the built-in tags
    pub fn builtin() -> Self {
        TagCatalog::default()
    }

    /// Catalog extended with custom tags.
    ///
    /// Custom names are validated and may neither repeat nor shadow a built-in.
    pub fn with_custom(custom: Vec<CustomTag>) -> Result<Self> {
        for (idx, tag) in custom.iter().enumerate() {
            if !tag_name_regex().is_match(&tag.name) {
                return Err(TagstackError::InvalidTagName(format!(
                    "'{}' (names must match [a-z][a-z0-9_-]*)",
                    tag.name
                )));
            }
            if HtmlTag::from_str(&tag.name).is_ok() {
                return Err(TagstackError::InvalidTagName(format!(
                    "'{}' is a built-in tag",
                    tag.name
                )));
            }
            if custom[..idx].iter().any(|other| other.name == tag.name) {
                return Err(TagstackError::InvalidTagName(format!(
                    "'{}' is declared more than once",
                    tag.name
                )));
            }
        }

        Ok(TagCatalog { custom })
    }

    /// Resolve a tag by name (case-insensitive), built-ins first
    pub fn resolve(&self, name: &str) -> Result<TagRef<'_>> {
        if let Ok(tag) = HtmlTag::from_str(name) {
            return Ok(TagRef::Builtin(tag));
        }

        let lower = name.to_lowercase();
        self.custom
            .iter()
            .find(|tag| tag.name == lower)
            .map(TagRef::Custom)
            .ok_or_else(|| TagstackError::UnknownTag(name.to_string()))
    }

    /// Every tag in the catalog, built-ins first
    pub fn entries(&self) -> impl Iterator<Item = TagRef<'_>> {
        HtmlTag::ALL
            .into_iter()
            .map(TagRef::Builtin)
            .chain(self.custom.iter().map(TagRef::Custom))
    }
}
