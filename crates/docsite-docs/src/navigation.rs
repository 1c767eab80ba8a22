//! Docs navigation config (`{docs_root}/config.json`).
//!
//! Each library keeps a JSON file next to its docs describing the sidebar:
//! sections of links, optionally split per framework. Unknown fields are
//! ignored so upstream can add keys without breaking the service.

use serde::{Deserialize, Serialize};

/// Filename of the navigation config inside the docs root.
pub const NAVIGATION_FILE: &str = "config.json";

/// Sidebar navigation for one library at one branch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsNavigation {
    /// Sidebar sections in display order.
    #[serde(default)]
    pub sections: Vec<NavSection>,
    /// Search index settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_search: Option<DocSearch>,
}

/// A titled group of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSection {
    /// Section heading.
    pub label: String,
    /// Links shared by every framework.
    #[serde(default)]
    pub children: Vec<NavItem>,
    /// Framework-specific links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<FrameworkMenu>,
    /// Whether the section starts collapsed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsible: bool,
}

/// A sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text.
    pub label: String,
    /// Doc path relative to the docs root.
    pub to: String,
    /// Optional badge text (e.g., "new").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Links for one framework within a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkMenu {
    /// Framework id (e.g., `"react"`).
    pub label: String,
    /// Links for this framework.
    #[serde(default)]
    pub children: Vec<NavItem>,
}

/// Search index settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSearch {
    /// Search application id.
    pub app_id: String,
    /// Public search key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
}

impl DocsNavigation {
    /// Repository path of the navigation config for a docs root.
    #[must_use]
    pub fn file_path(docs_root: &str) -> String {
        let root = docs_root.trim_matches('/');
        if root.is_empty() {
            NAVIGATION_FILE.to_owned()
        } else {
            format!("{root}/{NAVIGATION_FILE}")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CONFIG: &str = r#"{
        "$schema": "./config.schema.json",
        "docSearch": { "appId": "APP", "apiKey": "KEY", "indexName": "tanstack" },
        "sections": [
            {
                "label": "Getting Started",
                "children": [{ "label": "Overview", "to": "framework/react/overview" }],
                "frameworks": [
                    {
                        "label": "react",
                        "children": [{
                            "label": "Installation",
                            "to": "framework/react/installation",
                            "badge": "new"
                        }]
                    }
                ]
            },
            { "label": "API", "collapsible": true, "children": [] }
        ]
    }"#;

    #[test]
    fn test_parse_config() {
        let nav: DocsNavigation = serde_json::from_str(CONFIG).unwrap();

        assert_eq!(nav.sections.len(), 2);
        assert_eq!(nav.sections[0].label, "Getting Started");
        assert_eq!(nav.sections[0].frameworks[0].label, "react");
        assert_eq!(
            nav.sections[0].frameworks[0].children[0].badge.as_deref(),
            Some("new")
        );
        assert!(nav.sections[1].collapsible);
        assert_eq!(nav.doc_search.unwrap().index_name, "tanstack");
    }

    #[test]
    fn test_file_path() {
        assert_eq!(DocsNavigation::file_path("docs"), "docs/config.json");
        assert_eq!(
            DocsNavigation::file_path("docs/router/"),
            "docs/router/config.json"
        );
        assert_eq!(DocsNavigation::file_path(""), "config.json");
    }

    #[test]
    fn test_serialize_skips_empty_optionals() {
        let nav = DocsNavigation {
            sections: vec![NavSection {
                label: "Guide".to_owned(),
                children: vec![],
                frameworks: vec![],
                collapsible: false,
            }],
            doc_search: None,
        };

        assert_eq!(
            serde_json::to_value(&nav).unwrap(),
            serde_json::json!({ "sections": [{ "label": "Guide", "children": [] }] })
        );
    }
}
