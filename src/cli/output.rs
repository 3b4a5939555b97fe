//! Output formatting utilities

use crate::application::TagListing;
use std::path::PathBuf;

/// Format the tag listing as aligned columns
pub fn format_tag_list(tags: &[TagListing]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let width = tags.iter().map(|t| t.name.len()).max().unwrap_or(0);

    let mut output = String::new();
    for tag in tags {
        let closing = tag.closing.as_deref().unwrap_or("(void)");
        let marker = if tag.custom { "  [custom]" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {}  {}{}\n",
            tag.name,
            tag.opening,
            closing,
            marker,
            width = width
        ));
    }
    output
}

/// Format the files written by a batch render
pub fn format_written(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "No scripts found".to_string();
    }

    let mut output = String::new();
    for path in paths {
        output.push_str(&format!("Rendered {}\n", path.display()));
    }
    output
}
