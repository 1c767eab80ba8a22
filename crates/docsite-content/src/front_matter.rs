//! YAML front matter extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::excerpt::{first_paragraph, strip_markdown};

/// Line that opens and closes the metadata block.
const DELIMITER: &str = "---";

/// Metadata key holding an explicit excerpt.
const EXCERPT_KEY: &str = "excerpt";

/// A document split into metadata, body and excerpt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Metadata from the YAML block (empty when the document has none).
    pub data: BTreeMap<String, Value>,
    /// Plain-text excerpt with markdown formatting removed.
    pub excerpt: String,
    /// Markdown body after the metadata block.
    pub content: String,
}

impl FrontMatter {
    /// Build from metadata and body, deriving the excerpt.
    ///
    /// The excerpt comes from the `excerpt` metadata field when it is a
    /// string, otherwise from the first paragraph of `content`.
    #[must_use]
    pub fn new(data: BTreeMap<String, Value>, content: String) -> Self {
        let excerpt = match data.get(EXCERPT_KEY).and_then(Value::as_str) {
            Some(explicit) => strip_markdown(explicit),
            None => first_paragraph(&content),
        };
        Self {
            data,
            excerpt,
            content,
        }
    }

    /// Document with no metadata; the whole text is content.
    #[must_use]
    pub fn without_metadata(text: &str) -> Self {
        Self::new(BTreeMap::new(), text.to_owned())
    }

    /// String value of a metadata field.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// `title` metadata field.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    /// `description` metadata field.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }

    /// Serialize metadata and content back into a markdown document.
    ///
    /// Extracting the result yields the same `data` and `content`.
    pub fn to_markdown(&self) -> Result<String, FrontMatterError> {
        if self.data.is_empty() {
            if opens_block(&self.content) {
                return Ok(format!("{DELIMITER}\n{DELIMITER}\n{}", self.content));
            }
            return Ok(self.content.clone());
        }
        let yaml = serde_yaml::to_string(&self.data)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", self.content))
    }
}

/// Error extracting front matter.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// The metadata block was opened but never closed.
    #[error("front matter block opened but never closed")]
    Unterminated,
    /// The metadata block is not a YAML mapping with string keys.
    #[error("invalid front matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split a raw document into metadata, body and excerpt.
///
/// A document without a metadata block yields empty `data` and the whole
/// input as `content`.
///
/// # Errors
///
/// Returns [`FrontMatterError::Unterminated`] when the opening `---` line has
/// no matching closing line, and [`FrontMatterError::Yaml`] when the block is
/// not a string-keyed mapping.
pub fn extract(raw: &str) -> Result<FrontMatter, FrontMatterError> {
    let Some((yaml, content)) = split(raw)? else {
        return Ok(FrontMatter::without_metadata(raw));
    };

    let data: Option<BTreeMap<String, Value>> = if yaml.trim().is_empty() {
        None
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(FrontMatter::new(data.unwrap_or_default(), content.to_owned()))
}

/// Split into `(yaml, content)` when the document opens a metadata block.
fn split(raw: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let Some(rest) = strip_delimiter_line(strip_bom(raw)) else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Ok(Some((&rest[..offset], &rest[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Whether `text` starts with a line `extract` reads as a block opening.
fn opens_block(text: &str) -> bool {
    strip_delimiter_line(strip_bom(text)).is_some()
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Strip an opening `---` line, returning the text after it.
fn strip_delimiter_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}
