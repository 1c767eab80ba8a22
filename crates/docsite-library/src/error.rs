//! Error types for library validation.

/// Malformed redirect table.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RedirectError {
    /// The analytics marker is empty.
    #[error("redirect marker cannot be empty")]
    EmptyMarker,

    /// A rule has an empty `from` or `to`.
    #[error("redirect rule {index} has an empty path")]
    EmptyPath {
        /// Position of the rule in the table.
        index: usize,
    },

    /// A rule path starts with `/` (paths are relative to the path start).
    #[error("redirect path must not start with '/': {path}")]
    LeadingSlash {
        /// Offending path.
        path: String,
    },

    /// Two rules share the same `from`.
    #[error("duplicate redirect source: {from}")]
    Duplicate {
        /// Repeated source path.
        from: String,
    },

    /// A rule can never fire because an earlier rule's prefix matches it.
    #[error("redirect source {from} is shadowed by earlier rule {by}")]
    Shadowed {
        /// Unreachable source path.
        from: String,
        /// Earlier source path that matches first.
        by: String,
    },
}

/// Library registry error.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Library record has a missing or inconsistent field.
    #[error("library {library}: {message}")]
    Invalid {
        /// Library id.
        library: String,
        /// What is wrong.
        message: String,
    },

    /// Library redirect table is malformed.
    #[error("library {library}: {source}")]
    Redirect {
        /// Library id.
        library: String,
        /// Redirect table error.
        #[source]
        source: RedirectError,
    },

    /// Two libraries share an id.
    #[error("duplicate library id: {0}")]
    DuplicateId(String),

    /// No library with the requested id.
    #[error("unknown library: {0}")]
    UnknownLibrary(String),
}
