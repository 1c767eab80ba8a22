//! Upstream document fetching for docsite.
//!
//! This crate provides a [`ContentSource`] trait for retrieving a single file
//! at a single revision of an upstream repository. Caching is layered on top
//! by the caller; every [`ContentSource::fetch`] call reaches the backend.
//!
//! # Implementations
//!
//! - [`GitHubSource`]: raw content host (`raw.githubusercontent.com`) over HTTP
//! - [`LocalSource`]: sibling checkouts on the local filesystem (development)
//! - [`MockSource`]: in-memory files for testing (behind `mock` feature flag)
//!
//! # Outcomes
//!
//! A fetch has three outcomes, mirroring how the raw content host answers:
//!
//! - `Ok(Some(text))`: the file exists at that revision
//! - `Ok(None)`: the host answered 404; the file or revision does not exist
//! - `Err(FetchError)`: anything else (bad request, non-404 failure status,
//!   transport error)
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use docsite_source::{ContentSource, GitHubSource};
//!
//! let source = GitHubSource::new(GitHubSource::DEFAULT_BASE_URL, Duration::from_secs(30));
//! match source.fetch("tanstack/query", "main", "docs/overview.md")? {
//!     Some(text) => println!("{} bytes", text.len()),
//!     None => println!("not found"),
//! }
//! # Ok::<(), docsite_source::FetchError>(())
//! ```

mod github;
mod local;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use github::GitHubSource;
pub use local::LocalSource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::{ContentSource, DOCUMENT_EXTENSIONS, FetchError, validate_request};
