//! Library record and version resolution.

use crate::error::LibraryError;
use crate::redirect::RedirectTable;

/// Version token meaning "whatever is current".
pub const LATEST: &str = "latest";

/// A documented library.
///
/// Records are compile-time constants, so every field is `'static`.
#[derive(Clone, Copy, Debug)]
pub struct Library {
    /// URL slug (e.g., `"query"`).
    pub id: &'static str,
    /// Display name (e.g., `"TanStack Query"`).
    pub name: &'static str,
    /// Upstream repository (`owner/name`).
    pub repo: &'static str,
    /// Current version label (e.g., `"v5"`).
    pub latest_version: &'static str,
    /// Branch holding the current version's docs.
    pub latest_branch: &'static str,
    /// Version labels offered to readers, newest first.
    pub available_versions: &'static [&'static str],
    /// Doc shown when a version is opened without a path, relative to
    /// `docs_root` and without extension.
    pub default_doc: &'static str,
    /// Directory in the repository holding the docs.
    pub docs_root: &'static str,
    /// Legacy URL redirect tables, evaluated in order.
    pub redirects: &'static [RedirectTable],
}

impl Library {
    /// Whether `version` names the current version.
    ///
    /// The empty string counts as latest so a bare `/query` URL works.
    #[must_use]
    pub fn is_latest(&self, version: &str) -> bool {
        version.is_empty() || version == LATEST || version == self.latest_version
    }

    /// Branch holding the docs for a requested version.
    ///
    /// `None`, `"latest"` and the current version label map to
    /// `latest_branch`. Anything else is used verbatim as a branch name;
    /// whether it exists is left to the upstream.
    #[must_use]
    pub fn resolve_branch<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(version) if !self.is_latest(version) => version,
            _ => self.latest_branch,
        }
    }

    /// Concrete version label for display (`"latest"` → `latest_version`).
    #[must_use]
    pub fn resolve_version<'a>(&'a self, requested: &'a str) -> &'a str {
        if self.is_latest(requested) {
            self.latest_version
        } else {
            requested
        }
    }

    /// Repository path of a doc (`{docs_root}/{doc}`), without extension.
    #[must_use]
    pub fn doc_path(&self, doc: &str) -> String {
        let doc = doc.trim_matches('/');
        if self.docs_root.is_empty() {
            doc.to_owned()
        } else {
            format!("{}/{doc}", self.docs_root)
        }
    }

    /// Check the record is complete and consistent.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Invalid`] for missing fields or an unlisted
    /// `latest_version`, and [`LibraryError::Redirect`] for a malformed
    /// redirect table.
    pub fn validate(&self) -> Result<(), LibraryError> {
        let invalid = |message: &str| LibraryError::Invalid {
            library: self.id.to_owned(),
            message: message.to_owned(),
        };

        if self.id.is_empty() {
            return Err(invalid("id cannot be empty"));
        }
        for (field, value) in [
            ("name", self.name),
            ("repo", self.repo),
            ("latest_version", self.latest_version),
            ("latest_branch", self.latest_branch),
            ("default_doc", self.default_doc),
        ] {
            if value.is_empty() {
                return Err(invalid(&format!("{field} cannot be empty")));
            }
        }
        if !self.repo.contains('/') {
            return Err(invalid("repo must be in owner/name form"));
        }
        if !self.available_versions.contains(&self.latest_version) {
            return Err(invalid(&format!(
                "latest_version {} is not in available_versions",
                self.latest_version
            )));
        }

        for table in self.redirects {
            table.validate().map_err(|source| LibraryError::Redirect {
                library: self.id.to_owned(),
                source,
            })?;
        }

        Ok(())
    }
}
