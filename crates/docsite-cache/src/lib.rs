//! Time-bounded LRU cache for docsite.
//!
//! [`TtlCache`] maps keys to values with a per-entry expiry and a fixed
//! maximum entry count. Two rules govern what a lookup returns:
//!
//! - An entry is never returned once its expiry has passed. The stale entry
//!   is dropped on the lookup that notices it.
//! - When an insertion would exceed capacity, the least-recently-used entry
//!   is evicted first. Both [`TtlCache::get`] and [`TtlCache::set`] count as
//!   a use.
//!
//! The cache is meant to be constructed once at startup and shared by
//! reference (`Arc<TtlCache<_, _>>`) with every consumer.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use std::time::Duration;
//! use docsite_cache::TtlCache;
//!
//! let cache = TtlCache::new(NonZeroUsize::new(300).unwrap(), Some(Duration::from_secs(1)));
//! cache.insert("docs/overview".to_owned(), "# Overview".to_owned());
//! assert_eq!(cache.get(&"docs/overview".to_owned()), Some("# Overview".to_owned()));
//! ```

mod ttl;

pub use ttl::{CachedEntry, TtlCache};
