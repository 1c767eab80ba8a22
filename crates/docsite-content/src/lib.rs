//! Front matter extraction and markdown excerpts for docsite.
//!
//! Documents fetched from upstream repositories start with an optional YAML
//! metadata block:
//!
//! ```text
//! ---
//! title: Overview
//! description: What the library does
//! ---
//!
//! # Overview
//! ...
//! ```
//!
//! [`extract`] splits such a document into its metadata ([`FrontMatter::data`]),
//! the markdown body ([`FrontMatter::content`]) and a plain-text excerpt
//! ([`FrontMatter::excerpt`]).
//!
//! # Example
//!
//! ```
//! use docsite_content::extract;
//!
//! let doc = "---\ntitle: Overview\n---\nTanStack Query is **powerful**.\n";
//! let front_matter = extract(doc).unwrap();
//!
//! assert_eq!(front_matter.title(), Some("Overview"));
//! assert_eq!(front_matter.excerpt, "TanStack Query is powerful.");
//! assert_eq!(front_matter.content, "TanStack Query is **powerful**.\n");
//! ```

mod excerpt;
mod front_matter;

pub use excerpt::{first_paragraph, strip_markdown};
pub use front_matter::{FrontMatter, FrontMatterError, extract};
