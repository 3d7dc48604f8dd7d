//! Query drafts and the dork assembly algorithm.
//!
//! A [`QueryDraft`] is an immutable snapshot of the builder form. Every edit
//! returns a new draft and [`QueryDraft::assemble`] is a pure function of it.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryDraft {
    domain: String,
    keyword: String,
    /// Operator tokens in toggle order, each at most once.
    active_operators: Vec<String>,
    file_type: Option<String>,
}

impl QueryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn active_operators(&self) -> &[String] {
        &self.active_operators
    }

    pub fn file_type(&self) -> Option<&str> {
        self.file_type.as_deref()
    }

    pub fn is_operator_active(&self, token: &str) -> bool {
        self.active_operators.iter().any(|op| op == token)
    }

    pub fn with_domain(&self, domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..self.clone()
        }
    }

    pub fn with_keyword(&self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..self.clone()
        }
    }

    /// Select a file type. An empty string clears the constraint.
    pub fn with_file_type(&self, file_type: impl Into<String>) -> Self {
        let file_type = file_type.into();
        Self {
            file_type: (!file_type.is_empty()).then_some(file_type),
            ..self.clone()
        }
    }

    /// Add the operator if it is inactive, remove it otherwise.
    pub fn toggle_operator(&self, token: &str) -> Self {
        let mut active_operators = self.active_operators.clone();
        if let Some(pos) = active_operators.iter().position(|op| op == token) {
            active_operators.remove(pos);
        } else {
            active_operators.push(token.to_string());
        }
        Self {
            active_operators,
            ..self.clone()
        }
    }

    /// Activate each operator in order, skipping ones already active.
    pub fn with_operators<I, S>(&self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().fold(self.clone(), |draft, token| {
            if draft.is_operator_active(token.as_ref()) {
                draft
            } else {
                draft.toggle_operator(token.as_ref())
            }
        })
    }

    pub fn clear_keyword(&self) -> Self {
        self.with_keyword(String::new())
    }

    /// Replace the keyword with a picked suggestion.
    pub fn apply_suggestion(&self, suggestion: &str) -> Self {
        self.with_keyword(suggestion)
    }

    /// True when the draft assembles to an empty query.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty() && self.keyword.is_empty() && self.file_type.is_none()
    }

    /// Assemble the dork string.
    ///
    /// Segments, in order: `site:<domain>`, one `<operator><keyword>` per
    /// active operator (or the raw keyword when none is active), then
    /// `filetype:<ext>`. Joined with single spaces.
    pub fn assemble(&self) -> String {
        let mut parts = Vec::new();

        if !self.domain.is_empty() {
            parts.push(format!("site:{}", self.domain));
        }

        if !self.keyword.is_empty() {
            if self.active_operators.is_empty() {
                parts.push(raw_term(&self.keyword));
            } else {
                let term = quote_phrase(&self.keyword);
                for op in &self.active_operators {
                    parts.push(format!("{}{}", op, term));
                }
            }
        }

        if let Some(ref file_type) = self.file_type {
            parts.push(format!("filetype:{}", file_type));
        }

        parts.join(" ")
    }
}

/// Wrap a multi-word keyword in double quotes unless it is already quoted.
fn quote_phrase(keyword: &str) -> String {
    if keyword.contains(' ') && !keyword.starts_with('"') {
        format!("\"{}\"", keyword)
    } else {
        keyword.to_string()
    }
}

/// A keyword with a colon is taken as expert syntax and passed through untouched.
// NOTE: this also catches plain text such as "time: 5pm".
fn raw_term(keyword: &str) -> String {
    if keyword.contains(':') {
        keyword.to_string()
    } else {
        quote_phrase(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_empty_string() {
        let draft = QueryDraft::new();
        assert_eq!(draft.assemble(), "");
        assert!(draft.is_empty());
    }

    #[test]
    fn full_draft_in_fixed_order() {
        let draft = QueryDraft::new()
            .with_file_type("pdf")
            .toggle_operator("intitle:")
            .with_keyword("admin panel")
            .with_domain("example.com");
        assert_eq!(
            draft.assemble(),
            "site:example.com intitle:\"admin panel\" filetype:pdf"
        );
    }

    #[test]
    fn bare_keyword() {
        assert_eq!(QueryDraft::new().with_keyword("password").assemble(), "password");
    }

    #[test]
    fn colon_keyword_passes_through() {
        assert_eq!(
            QueryDraft::new().with_keyword("inurl:config").assemble(),
            "inurl:config"
        );
        assert_eq!(
            QueryDraft::new().with_keyword("time: 5pm").assemble(),
            "time: 5pm"
        );
    }

    #[test]
    fn multi_word_raw_keyword_is_quoted() {
        assert_eq!(
            QueryDraft::new().with_keyword("internal use only").assemble(),
            "\"internal use only\""
        );
    }

    #[test]
    fn already_quoted_keyword_is_not_requoted() {
        let draft = QueryDraft::new().with_keyword("\"admin panel\"");
        assert_eq!(draft.assemble(), "\"admin panel\"");
        assert_eq!(
            draft.toggle_operator("intext:").assemble(),
            "intext:\"admin panel\""
        );
    }

    #[test]
    fn every_operator_gets_the_keyword() {
        let draft = QueryDraft::new()
            .with_keyword("db backup")
            .toggle_operator("inurl:")
            .toggle_operator("intitle:");
        assert_eq!(draft.assemble(), "inurl:\"db backup\" intitle:\"db backup\"");
    }

    #[test]
    fn operator_with_colon_keyword_is_still_prefixed() {
        let draft = QueryDraft::new()
            .with_keyword("inurl:config")
            .toggle_operator("intitle:");
        assert_eq!(draft.assemble(), "intitle:inurl:config");
    }

    #[test]
    fn operators_without_keyword_emit_nothing() {
        let draft = QueryDraft::new()
            .toggle_operator("intitle:")
            .with_domain("gov.uk");
        assert_eq!(draft.assemble(), "site:gov.uk");
    }

    #[test]
    fn toggle_twice_restores_draft() {
        let draft = QueryDraft::new().with_keyword("login");
        let toggled = draft.toggle_operator("inurl:").toggle_operator("inurl:");
        assert_eq!(toggled, draft);
    }

    #[test]
    fn with_operators_skips_duplicates() {
        let draft = QueryDraft::new()
            .with_keyword("x")
            .with_operators(["inurl:", "intitle:", "inurl:"]);
        assert_eq!(draft.active_operators(), ["inurl:", "intitle:"]);
    }

    #[test]
    fn empty_file_type_clears_constraint() {
        let draft = QueryDraft::new().with_file_type("log").with_file_type("");
        assert_eq!(draft.file_type(), None);
        assert_eq!(draft.assemble(), "");
    }

    #[test]
    fn edits_do_not_mutate_original() {
        let original = QueryDraft::new().with_keyword("password");
        let _ = original.with_domain("example.com").clear_keyword();
        assert_eq!(original.assemble(), "password");
    }

    #[test]
    fn apply_suggestion_replaces_keyword() {
        let draft = QueryDraft::new()
            .with_keyword("admin")
            .apply_suggestion("admin login");
        assert_eq!(draft.keyword(), "admin login");
    }
}
