//! Library registry, version resolution and legacy redirects for docsite.
//!
//! Every documented library is a [`Library`] record enumerated at compile
//! time in [`LibraryRegistry::builtin`]. A library knows:
//!
//! - where its docs live (`repo`, `docs_root`, `default_doc`)
//! - which version is current and which branch holds it
//!   ([`Library::resolve_branch`])
//! - which legacy URL shapes redirect where ([`RedirectTable`])
//!
//! The registry is validated once at startup with
//! [`LibraryRegistry::validate`]; after that, lookups and redirect matching
//! cannot fail.
//!
//! # Example
//!
//! ```
//! use docsite_library::LibraryRegistry;
//!
//! let registry = LibraryRegistry::builtin();
//! registry.validate().unwrap();
//!
//! let query = registry.get("query").unwrap();
//! assert_eq!(query.resolve_branch(Some("latest")), "main");
//! assert_eq!(query.resolve_branch(Some("v4")), "v4");
//! ```

mod builtin;
mod error;
mod library;
mod redirect;
mod registry;

pub use error::{LibraryError, RedirectError};
pub use library::{LATEST, Library};
pub use redirect::{RedirectRule, RedirectTable, apply_redirects};
pub use registry::LibraryRegistry;
