//! Fluent markup builder with a stack of pending closing markers

use crate::domain::close_stack::CloseStack;
use crate::domain::mode::CloseMode;
use crate::domain::tag::{HtmlTag, Tag};
use crate::domain::text::repeat;
use crate::error::{Result, TagstackError};
use std::fmt;
use std::ops::Range;

const SPACE: &str = " ";
const NBSP: &str = "&nbsp;";

/// Builds markup text by appending opening tags, content and closing tags.
///
/// Every opened tag pushes its closing marker (empty for void tags) onto a
/// stack. In [`CloseMode::Auto`] each content append closes the innermost tag
/// and [`render`](Self::render) closes whatever is left. In
/// [`CloseMode::Manual`] tags are closed with [`close`](Self::close), which
/// rejects anything but the innermost open tag.
#[derive(Debug, Clone, Default)]
pub struct TagBuilder {
    buffer: String,
    pending: CloseStack<String>,
    mode: CloseMode,
}

impl TagBuilder {
    pub fn with_mode(mode: CloseMode) -> Self {
        TagBuilder {
            buffer: String::new(),
            pending: CloseStack::new(),
            mode,
        }
    }

    pub fn auto_closing() -> Self {
        Self::with_mode(CloseMode::Auto)
    }

    pub fn manual_closing() -> Self {
        Self::with_mode(CloseMode::Manual)
    }

    pub fn mode(&self) -> CloseMode {
        self.mode
    }

    /// Switch modes; tags already open stay open
    pub fn set_mode(&mut self, mode: CloseMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Number of tags opened but not yet closed
    pub fn depth(&self) -> usize {
        self.pending.len()
    }

    /// Closing markers still pending, innermost first
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    pub fn open<T: Tag + ?Sized>(&mut self, tag: &T) -> &mut Self {
        self.buffer.push_str(tag.opening_marker());
        self.pending
            .push(tag.closing_marker().unwrap_or_default().to_string());
        self
    }

    /// Close the innermost open tag, which must be `tag`.
    ///
    /// On error nothing is emitted and the pending stack is left as it was.
    pub fn close<T: Tag + ?Sized>(&mut self, tag: &T) -> Result<&mut Self> {
        let expected = tag.closing_marker().unwrap_or_default();

        let actual = self.pending.pop().ok_or_else(|| {
            tracing::debug!(expected, "close requested with no open tag");
            TagstackError::EmptyStack
        })?;

        if actual != expected {
            tracing::debug!(expected, actual = %actual, "close out of order");
            let err = TagstackError::StructuralMismatch {
                expected: expected.to_string(),
                actual: actual.clone(),
            };
            self.pending.push(actual);
            return Err(err);
        }

        self.buffer.push_str(&actual);
        Ok(self)
    }

    /// Append `text` verbatim; in auto mode then close the innermost tag, if any.
    pub fn content(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buffer.push_str(text.as_ref());
        if self.mode.closes_on_content() {
            if let Some(marker) = self.pending.pop() {
                self.buffer.push_str(&marker);
            }
        }
        self
    }

    /// Like [`content`](Self::content), but `None` leaves the builder untouched.
    pub fn content_opt<S: AsRef<str>>(&mut self, text: Option<S>) -> &mut Self {
        match text {
            Some(text) => self.content(text),
            None => self,
        }
    }

    /// Produce the text built so far.
    ///
    /// In auto mode every tag still open is closed first, innermost first.
    /// In manual mode open tags are left unclosed and remain pending.
    pub fn render(&mut self) -> String {
        if self.mode.drains_on_render() {
            for marker in self.pending.drain() {
                self.buffer.push_str(&marker);
            }
        }
        self.buffer.clone()
    }

    /// Render and take ownership of the text
    pub fn into_string(mut self) -> String {
        self.render();
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Character at `index`, counted in characters
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.buffer.chars().nth(index)
    }

    /// Borrow the characters in `range` (character positions, end exclusive)
    pub fn sub_sequence(&self, range: Range<usize>) -> Option<&str> {
        if range.start > range.end {
            return None;
        }
        let start = self.byte_offset(range.start)?;
        let end = self.byte_offset(range.end)?;
        Some(&self.buffer[start..end])
    }

    fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.buffer
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.buffer.len()))
            .nth(char_index)
    }

    pub fn html(&mut self) -> &mut Self {
        self.open(&HtmlTag::Html)
    }

    pub fn close_html(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::Html)
    }

    pub fn head(&mut self) -> &mut Self {
        self.open(&HtmlTag::Head)
    }

    pub fn close_head(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::Head)
    }

    pub fn body(&mut self) -> &mut Self {
        self.open(&HtmlTag::Body)
    }

    pub fn close_body(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::Body)
    }

    /// Open `<html><body>` in one call
    pub fn html_and_body(&mut self) -> &mut Self {
        self.html().body()
    }

    /// Close `</body></html>`; fails unless body is the innermost open tag
    pub fn close_body_and_html(&mut self) -> Result<&mut Self> {
        self.close_body()?.close_html()
    }

    /// Open `<h1>` through `<h6>`
    pub fn heading(&mut self, level: u8) -> Result<&mut Self> {
        let tag = Self::heading_tag(level)?;
        Ok(self.open(&tag))
    }

    pub fn close_heading(&mut self, level: u8) -> Result<&mut Self> {
        let tag = Self::heading_tag(level)?;
        self.close(&tag)
    }

    fn heading_tag(level: u8) -> Result<HtmlTag> {
        HtmlTag::heading(level).ok_or_else(|| {
            TagstackError::InvalidTagName(format!("h{} (heading levels are 1-6)", level))
        })
    }

    pub fn paragraph(&mut self) -> &mut Self {
        self.open(&HtmlTag::P)
    }

    pub fn close_paragraph(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::P)
    }

    pub fn pre(&mut self) -> &mut Self {
        self.open(&HtmlTag::Pre)
    }

    pub fn close_pre(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::Pre)
    }

    pub fn span(&mut self) -> &mut Self {
        self.open(&HtmlTag::Span)
    }

    pub fn close_span(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::Span)
    }

    pub fn bold(&mut self) -> &mut Self {
        self.open(&HtmlTag::B)
    }

    pub fn close_bold(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::B)
    }

    pub fn italic(&mut self) -> &mut Self {
        self.open(&HtmlTag::I)
    }

    pub fn close_italic(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::I)
    }

    pub fn underline(&mut self) -> &mut Self {
        self.open(&HtmlTag::U)
    }

    pub fn close_underline(&mut self) -> Result<&mut Self> {
        self.close(&HtmlTag::U)
    }

    /// Emit `<br>` without leaving anything pending
    pub fn line_break(&mut self) -> &mut Self {
        self.open(&HtmlTag::Br);
        // void: the empty marker just pushed is closed on the spot
        self.pending.pop();
        self
    }

    /// Append `count` spaces; never closes a tag
    pub fn space(&mut self, count: usize) -> &mut Self {
        self.buffer.push_str(&repeat(SPACE, count));
        self
    }

    /// Append `count` non-breaking spaces; never closes a tag
    pub fn nbsp(&mut self, count: usize) -> &mut Self {
        self.buffer.push_str(&repeat(NBSP, count));
        self
    }
}

impl fmt::Display for TagBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl AsRef<str> for TagBuilder {
    fn as_ref(&self) -> &str {
        &self.buffer
    }
}
