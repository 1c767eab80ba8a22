//! Libraries compiled into the binary.

use crate::library::Library;
use crate::redirect::{RedirectRule, RedirectTable};

const QUERY_REDIRECTS: &[RedirectTable] = &[
    RedirectTable {
        from_path_start: "query",
        to_path_start: "query",
        marker: "reactQueryV3",
        rules: &[
            RedirectRule::new("latest/docs/react/", "latest/docs/framework/react/"),
            RedirectRule::new("latest/docs/vue/", "latest/docs/framework/vue/"),
            RedirectRule::new("latest/docs/solid/", "latest/docs/framework/solid/"),
            RedirectRule::new("latest/docs/svelte/", "latest/docs/framework/svelte/"),
            RedirectRule::new("v4/docs/react/", "v4/docs/framework/react/"),
            RedirectRule::new("v4/docs/vue/", "v4/docs/framework/vue/"),
        ],
    },
    RedirectTable {
        from_path_start: "react-query",
        to_path_start: "query",
        marker: "reactQueryV3",
        rules: &[
            RedirectRule::new("v3/docs", "v3/docs"),
            RedirectRule::new("docs", "latest/docs/framework/react"),
        ],
    },
];

const ROUTER_REDIRECTS: &[RedirectTable] = &[RedirectTable {
    from_path_start: "router",
    to_path_start: "router",
    marker: "reactLocation",
    rules: &[
        RedirectRule::new("latest/docs/guide/", "latest/docs/framework/react/guide/"),
        RedirectRule::new("latest/docs/api/", "latest/docs/framework/react/api/"),
    ],
}];

const TABLE_REDIRECTS: &[RedirectTable] = &[RedirectTable {
    from_path_start: "react-table",
    to_path_start: "table",
    marker: "reactTableV7",
    rules: &[
        RedirectRule::new("v7/docs", "v7/docs"),
        RedirectRule::new("docs", "latest/docs"),
    ],
}];

const RANGER_REDIRECTS: &[RedirectTable] = &[RedirectTable {
    from_path_start: "ranger",
    to_path_start: "ranger",
    marker: "reactRangerV3",
    rules: &[RedirectRule::new("v3/docs/overview", "v3/docs/introduction")],
}];

pub(crate) const BUILTIN_LIBRARIES: &[Library] = &[
    Library {
        id: "query",
        name: "TanStack Query",
        repo: "tanstack/query",
        latest_version: "v5",
        latest_branch: "main",
        available_versions: &["v5", "v4", "v3"],
        default_doc: "framework/react/overview",
        docs_root: "docs",
        redirects: QUERY_REDIRECTS,
    },
    Library {
        id: "router",
        name: "TanStack Router",
        repo: "tanstack/router",
        latest_version: "v1",
        latest_branch: "main",
        available_versions: &["v1"],
        default_doc: "framework/react/overview",
        docs_root: "docs/router",
        redirects: ROUTER_REDIRECTS,
    },
    Library {
        id: "table",
        name: "TanStack Table",
        repo: "tanstack/table",
        latest_version: "v8",
        latest_branch: "main",
        available_versions: &["v8", "v7"],
        default_doc: "introduction",
        docs_root: "docs",
        redirects: TABLE_REDIRECTS,
    },
    Library {
        id: "form",
        name: "TanStack Form",
        repo: "tanstack/form",
        latest_version: "v1",
        latest_branch: "main",
        available_versions: &["v1", "v0"],
        default_doc: "overview",
        docs_root: "docs",
        redirects: &[],
    },
    Library {
        id: "virtual",
        name: "TanStack Virtual",
        repo: "tanstack/virtual",
        latest_version: "v3",
        latest_branch: "main",
        available_versions: &["v3", "v2"],
        default_doc: "introduction",
        docs_root: "docs",
        redirects: &[],
    },
    Library {
        id: "ranger",
        name: "TanStack Ranger",
        repo: "tanstack/ranger",
        latest_version: "v0",
        latest_branch: "main",
        available_versions: &["v0", "v3"],
        default_doc: "overview",
        docs_root: "docs",
        redirects: RANGER_REDIRECTS,
    },
    Library {
        id: "store",
        name: "TanStack Store",
        repo: "tanstack/store",
        latest_version: "v0",
        latest_branch: "main",
        available_versions: &["v0"],
        default_doc: "overview",
        docs_root: "docs",
        redirects: &[],
    },
    Library {
        id: "start",
        name: "TanStack Start",
        repo: "tanstack/router",
        latest_version: "v0",
        latest_branch: "main",
        available_versions: &["v0"],
        default_doc: "framework/react/overview",
        docs_root: "docs/start",
        redirects: &[],
    },
];
