use serde::Serialize;

/// A search-engine prefix token the builder can attach to the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operator {
    /// Token prefix including the colon, e.g. `intitle:`.
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Operators offered as toggles. `site:` and `filetype:` have dedicated draft fields.
pub const OPERATORS: &[Operator] = &[
    Operator {
        name: "intitle:",
        label: "Title",
        description: "Pages with the keyword in the HTML title.",
    },
    Operator {
        name: "allintitle:",
        label: "All Title",
        description: "Pages with every word of the keyword in the title.",
    },
    Operator {
        name: "inurl:",
        label: "URL",
        description: "Pages with the keyword anywhere in the URL.",
    },
    Operator {
        name: "allinurl:",
        label: "All URL",
        description: "Pages with every word of the keyword in the URL.",
    },
    Operator {
        name: "intext:",
        label: "Body",
        description: "Pages with the keyword in the visible body text.",
    },
    Operator {
        name: "allintext:",
        label: "All Body",
        description: "Pages with every word of the keyword in the body text.",
    },
    Operator {
        name: "inanchor:",
        label: "Anchor",
        description: "Pages linked to with the keyword as anchor text.",
    },
    Operator {
        name: "ext:",
        label: "Extension",
        description: "Documents whose file extension matches the keyword.",
    },
    Operator {
        name: "related:",
        label: "Related",
        description: "Sites similar to the given domain.",
    },
    Operator {
        name: "cache:",
        label: "Cache",
        description: "The search engine's cached copy of a page.",
    },
];

/// File types selectable as a `filetype:` constraint.
pub const FILE_TYPES: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "log", "sql", "env", "xml",
    "json", "conf", "ini", "bak", "csv",
];

/// Look up an operator by token. Accepts the token with or without its trailing colon.
pub fn find_operator(token: &str) -> Option<&'static Operator> {
    let token = token.trim();
    let bare = token.strip_suffix(':').unwrap_or(token);
    OPERATORS
        .iter()
        .find(|op| op.name.strip_suffix(':') == Some(bare))
}

/// Normalize a user-entered file type: lowercase, leading dot dropped.
pub fn normalize_file_type(file_type: &str) -> String {
    file_type.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_token_ends_with_colon() {
        for op in OPERATORS {
            assert!(op.name.ends_with(':'), "{} missing colon", op.name);
            assert!(!op.label.is_empty());
        }
    }

    #[test]
    fn find_operator_accepts_bare_token() {
        assert_eq!(find_operator("intitle").map(|op| op.name), Some("intitle:"));
        assert_eq!(find_operator("inurl:").map(|op| op.name), Some("inurl:"));
        assert!(find_operator("nosuch").is_none());
    }

    #[test]
    fn find_operator_does_not_match_prefixes() {
        assert_eq!(find_operator("allintitle").map(|op| op.name), Some("allintitle:"));
        assert_eq!(find_operator("title"), None);
    }

    #[test]
    fn normalize_file_type_strips_dot() {
        assert_eq!(normalize_file_type(".PDF"), "pdf");
        assert_eq!(normalize_file_type(" env "), "env");
    }
}
