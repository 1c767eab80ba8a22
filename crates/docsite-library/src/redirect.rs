//! Legacy URL redirect tables.
//!
//! Documentation reorganizations leave old links in the wild. A
//! [`RedirectTable`] maps those old paths to their new home. Rules are
//! prefix matches evaluated in declaration order; the first match wins and
//! the remainder of the path is carried over to the destination.
//!
//! Destinations carry a `?from={marker}` query parameter so analytics can
//! attribute the visit to the legacy link.

use crate::error::RedirectError;

/// A single `from` → `to` mapping.
///
/// Both paths are relative to the table's path starts and have no leading
/// slash (e.g., `"v3/docs/overview"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedirectRule {
    /// Old path prefix.
    pub from: &'static str,
    /// Replacement prefix.
    pub to: &'static str,
}

impl RedirectRule {
    /// Create a rule.
    #[must_use]
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// Ordered redirect rules sharing path starts and an analytics marker.
///
/// A rule matches request paths starting with `/{from_path_start}/{from}`
/// and redirects to `/{to_path_start}/{to}`. An empty path start means the
/// rule paths are relative to the site root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedirectTable {
    /// First path segment(s) of old URLs (e.g., `"react-query"`).
    pub from_path_start: &'static str,
    /// First path segment(s) of new URLs (e.g., `"query"`).
    pub to_path_start: &'static str,
    /// Value of the `from` query parameter on destinations.
    pub marker: &'static str,
    /// Rules in match order.
    pub rules: &'static [RedirectRule],
}

impl RedirectTable {
    /// Destination for `request_url`, or `None` when no rule matches.
    ///
    /// `request_url` may be a path (`/query/v3/docs/overview#top`) or an
    /// absolute URL. The query string of the request is dropped; the
    /// fragment is preserved.
    #[must_use]
    pub fn apply(&self, request_url: &str) -> Option<String> {
        let (without_fragment, fragment) = match request_url.split_once('#') {
            Some((head, fragment)) => (head, Some(fragment)),
            None => (request_url, None),
        };
        let without_query = without_fragment
            .split_once('?')
            .map_or(without_fragment, |(path, _)| path);
        let path = strip_origin(without_query);

        self.rules.iter().find_map(|rule| {
            let prefix = join_path(self.from_path_start, rule.from);
            let rest = path.strip_prefix(prefix.as_str())?;

            let mut destination = format!(
                "{}{rest}?from={}",
                join_path(self.to_path_start, rule.to),
                self.marker
            );
            if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
                destination.push('#');
                destination.push_str(fragment);
            }
            Some(destination)
        })
    }

    /// Check the table is well-formed.
    ///
    /// Rejects an empty marker, empty or absolute rule paths, duplicate
    /// sources, and rules shadowed by an earlier, shorter prefix.
    pub fn validate(&self) -> Result<(), RedirectError> {
        if self.marker.is_empty() {
            return Err(RedirectError::EmptyMarker);
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.from.is_empty() || rule.to.is_empty() {
                return Err(RedirectError::EmptyPath { index });
            }
            for path in [rule.from, rule.to] {
                if path.starts_with('/') {
                    return Err(RedirectError::LeadingSlash {
                        path: path.to_owned(),
                    });
                }
            }

            for earlier in &self.rules[..index] {
                if earlier.from == rule.from {
                    return Err(RedirectError::Duplicate {
                        from: rule.from.to_owned(),
                    });
                }
                if rule.from.starts_with(earlier.from) {
                    return Err(RedirectError::Shadowed {
                        from: rule.from.to_owned(),
                        by: earlier.from.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Apply `table` to `request_url`.
///
/// See [`RedirectTable::apply`].
#[must_use]
pub fn apply_redirects(table: &RedirectTable, request_url: &str) -> Option<String> {
    table.apply(request_url)
}

/// `/{start}/{path}`, or `/{path}` when `start` is empty.
fn join_path(start: &str, path: &str) -> String {
    if start.is_empty() {
        format!("/{path}")
    } else {
        format!("/{start}/{path}")
    }
}

/// Drop `scheme://host` from an absolute URL.
fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, after_scheme)) => after_scheme
            .find('/')
            .map_or("/", |slash| &after_scheme[slash..]),
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RANGER: RedirectTable = RedirectTable {
        from_path_start: "ranger",
        to_path_start: "ranger",
        marker: "reactRangerV3",
        rules: &[RedirectRule::new("v3/docs/overview", "v3/docs/introduction")],
    };

    #[test]
    fn test_apply_matches_prefix() {
        assert_eq!(
            RANGER.apply("/ranger/v3/docs/overview"),
            Some("/ranger/v3/docs/introduction?from=reactRangerV3".to_owned())
        );
    }

    #[test]
    fn test_apply_free_function() {
        assert_eq!(
            apply_redirects(&RANGER, "/ranger/v3/docs/overview"),
            RANGER.apply("/ranger/v3/docs/overview")
        );
    }

    #[test]
    fn test_apply_no_match() {
        assert_eq!(RANGER.apply("/ranger/v3/docs/installation"), None);
        assert_eq!(RANGER.apply("/query/v3/docs/overview"), None);
        assert_eq!(RANGER.apply("/"), None);
    }

    #[test]
    fn test_apply_plain_prefix_carries_remainder() {
        assert_eq!(
            RANGER.apply("/ranger/v3/docs/overview-extra"),
            Some("/ranger/v3/docs/introduction-extra?from=reactRangerV3".to_owned())
        );
    }

    #[test]
    fn test_apply_keeps_rest_of_path() {
        assert_eq!(
            RANGER.apply("/ranger/v3/docs/overview/details"),
            Some("/ranger/v3/docs/introduction/details?from=reactRangerV3".to_owned())
        );
    }

    #[test]
    fn test_apply_preserves_fragment_and_drops_query() {
        assert_eq!(
            RANGER.apply("/ranger/v3/docs/overview?tab=react#usage"),
            Some("/ranger/v3/docs/introduction?from=reactRangerV3#usage".to_owned())
        );
    }

    #[test]
    fn test_apply_absolute_url() {
        assert_eq!(
            RANGER.apply("https://tanstack.com/ranger/v3/docs/overview"),
            Some("/ranger/v3/docs/introduction?from=reactRangerV3".to_owned())
        );
    }

    #[test]
    fn test_first_declared_rule_wins() {
        const RULES: &[RedirectRule] = &[
            RedirectRule::new(
                "v3/docs/guides/queries",
                "v3/docs/framework/react/guides/queries",
            ),
            RedirectRule::new("v3/docs/guides", "v3/docs/framework/react/guides"),
        ];
        let table = RedirectTable {
            from_path_start: "query",
            to_path_start: "query",
            marker: "m",
            rules: RULES,
        };

        assert_eq!(
            table.apply("/query/v3/docs/guides/queries"),
            Some("/query/v3/docs/framework/react/guides/queries?from=m".to_owned())
        );
        assert_eq!(
            table.apply("/query/v3/docs/guides/mutations"),
            Some("/query/v3/docs/framework/react/guides/mutations?from=m".to_owned())
        );
    }

    #[test]
    fn test_apply_across_path_starts() {
        const RULES: &[RedirectRule] = &[RedirectRule::new("v3/docs/", "v3/docs/framework/react/")];
        let table = RedirectTable {
            from_path_start: "react-query",
            to_path_start: "query",
            marker: "reactQueryV3",
            rules: RULES,
        };

        assert_eq!(
            table.apply("/react-query/v3/docs/overview"),
            Some("/query/v3/docs/framework/react/overview?from=reactQueryV3".to_owned())
        );
    }

    #[test]
    fn test_apply_root_path_start() {
        const RULES: &[RedirectRule] = &[RedirectRule::new("docs", "latest/docs")];
        let table = RedirectTable {
            from_path_start: "",
            to_path_start: "query",
            marker: "root",
            rules: RULES,
        };

        assert_eq!(
            table.apply("/docs/overview"),
            Some("/query/latest/docs/overview?from=root".to_owned())
        );
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(RANGER.validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_marker() {
        let table = RedirectTable {
            marker: "",
            ..RANGER
        };
        assert_eq!(table.validate(), Err(RedirectError::EmptyMarker));
    }

    #[test]
    fn test_validate_empty_path() {
        const RULES: &[RedirectRule] = &[RedirectRule::new("a", "b"), RedirectRule::new("", "c")];
        let table = RedirectTable {
            rules: RULES,
            ..RANGER
        };
        assert_eq!(table.validate(), Err(RedirectError::EmptyPath { index: 1 }));
    }

    #[test]
    fn test_validate_leading_slash() {
        const RULES: &[RedirectRule] = &[RedirectRule::new("a", "/b")];
        let table = RedirectTable {
            rules: RULES,
            ..RANGER
        };
        assert_eq!(
            table.validate(),
            Err(RedirectError::LeadingSlash {
                path: "/b".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_duplicate() {
        const RULES: &[RedirectRule] = &[RedirectRule::new("a", "b"), RedirectRule::new("a", "c")];
        let table = RedirectTable {
            rules: RULES,
            ..RANGER
        };
        assert_eq!(
            table.validate(),
            Err(RedirectError::Duplicate {
                from: "a".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_shadowed() {
        const RULES: &[RedirectRule] = &[
            RedirectRule::new("v3/docs", "x"),
            RedirectRule::new("v3/docs/overview", "y"),
        ];
        let table = RedirectTable {
            rules: RULES,
            ..RANGER
        };
        assert_eq!(
            table.validate(),
            Err(RedirectError::Shadowed {
                from: "v3/docs/overview".to_owned(),
                by: "v3/docs".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_partial_segment_prefix_shadows() {
        const RULES: &[RedirectRule] = &[
            RedirectRule::new("v3/docs/over", "x"),
            RedirectRule::new("v3/docs/overview", "y"),
        ];
        let table = RedirectTable {
            rules: RULES,
            ..RANGER
        };
        assert_eq!(
            table.validate(),
            Err(RedirectError::Shadowed {
                from: "v3/docs/overview".to_owned(),
                by: "v3/docs/over".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_longer_prefix_first_ok() {
        const RULES: &[RedirectRule] = &[
            RedirectRule::new("v3/docs/overview", "y"),
            RedirectRule::new("v3/docs", "x"),
        ];
        let table = RedirectTable {
            rules: RULES,
            ..RANGER
        };
        assert_eq!(table.validate(), Ok(()));
    }
}
