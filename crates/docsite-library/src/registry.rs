//! Library registry.

use std::collections::HashSet;

use crate::builtin::BUILTIN_LIBRARIES;
use crate::error::LibraryError;
use crate::library::Library;

/// Set of documented libraries.
#[derive(Clone, Debug)]
pub struct LibraryRegistry {
    libraries: Vec<Library>,
}

impl LibraryRegistry {
    /// Registry of the libraries compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_LIBRARIES.to_vec())
    }

    /// Registry of arbitrary libraries.
    #[must_use]
    pub fn new(libraries: Vec<Library>) -> Self {
        Self { libraries }
    }

    /// Library by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Library> {
        self.libraries.iter().find(|library| library.id == id)
    }

    /// Library by id, as an error when unknown.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UnknownLibrary`] if no library has this id.
    pub fn require(&self, id: &str) -> Result<&Library, LibraryError> {
        self.get(id)
            .ok_or_else(|| LibraryError::UnknownLibrary(id.to_owned()))
    }

    /// Libraries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Library> {
        self.libraries.iter()
    }

    /// Number of libraries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Whether the registry has no libraries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Legacy redirect destination for `request_url` across all libraries.
    ///
    /// Libraries and their tables are tried in declaration order; the first
    /// matching rule wins.
    #[must_use]
    pub fn find_redirect(&self, request_url: &str) -> Option<String> {
        let (library, destination) = self.libraries.iter().find_map(|library| {
            library
                .redirects
                .iter()
                .find_map(|table| table.apply(request_url))
                .map(|destination| (library.id, destination))
        })?;

        tracing::debug!(library, from = request_url, to = %destination, "Legacy redirect");
        Some(destination)
    }

    /// Validate every library and check ids are unique.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), LibraryError> {
        let mut seen = HashSet::new();
        for library in &self.libraries {
            library.validate()?;
            if !seen.insert(library.id) {
                return Err(LibraryError::DuplicateId(library.id.to_owned()));
            }
        }
        Ok(())
    }
}

impl Default for LibraryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
