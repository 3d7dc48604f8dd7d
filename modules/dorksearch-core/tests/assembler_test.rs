//! Query assembly properties over many drafts.

use dorksearch_core::{QueryDraft, FILE_TYPES, OPERATORS};

const KEYWORDS: &[&str] = &[
    "password",
    "admin panel",
    "\"index of\"",
    "inurl:config",
    "db backup 2024",
    "login",
];

#[test]
fn scenario_full_draft() {
    let draft = QueryDraft::new()
        .with_domain("example.com")
        .with_keyword("admin panel")
        .with_operators(["intitle:"])
        .with_file_type("pdf");
    assert_eq!(
        draft.assemble(),
        "site:example.com intitle:\"admin panel\" filetype:pdf"
    );
}

#[test]
fn scenario_bare_keyword() {
    assert_eq!(QueryDraft::new().with_keyword("password").assemble(), "password");
}

#[test]
fn scenario_expert_syntax_passes_through() {
    assert_eq!(
        QueryDraft::new().with_keyword("inurl:config").assemble(),
        "inurl:config"
    );
}

#[test]
fn multi_word_raw_keywords_are_quoted_once() {
    for keyword in KEYWORDS.iter().filter(|k| k.contains(' ') && !k.contains(':')) {
        let out = QueryDraft::new().with_keyword(*keyword).assemble();
        if keyword.starts_with('"') {
            assert_eq!(out, *keyword);
        } else {
            assert_eq!(out, format!("\"{}\"", keyword));
        }
    }
}

#[test]
fn each_operator_gets_keyword_without_separator() {
    for keyword in KEYWORDS {
        let draft = QueryDraft::new()
            .with_keyword(*keyword)
            .with_operators(OPERATORS.iter().map(|op| op.name));
        let out = draft.assemble();

        let term = if keyword.contains(' ') && !keyword.starts_with('"') {
            format!("\"{}\"", keyword)
        } else {
            keyword.to_string()
        };
        for op in OPERATORS {
            let expected = format!("{}{}", op.name, term);
            assert!(out.contains(&expected), "{out} missing {expected}");
        }
    }
}

#[test]
fn domain_first_filetype_last_regardless_of_edit_order() {
    for file_type in FILE_TYPES {
        let a = QueryDraft::new()
            .with_file_type(*file_type)
            .with_keyword("secret")
            .toggle_operator("intext:")
            .with_domain("gov.uk");
        let b = QueryDraft::new()
            .with_domain("gov.uk")
            .toggle_operator("intext:")
            .with_keyword("secret")
            .with_file_type(*file_type);

        let out = a.assemble();
        assert_eq!(out, b.assemble());
        assert!(out.starts_with("site:gov.uk "));
        assert!(out.ends_with(&format!(" filetype:{}", file_type)));
    }
}

#[test]
fn assembly_is_deterministic() {
    let draft = QueryDraft::new()
        .with_domain("example.org")
        .with_keyword("db backup")
        .with_operators(["inurl:", "intitle:"])
        .with_file_type("sql");
    let first = draft.assemble();
    for _ in 0..10 {
        assert_eq!(draft.assemble(), first);
    }
}

#[test]
fn segments_are_single_space_separated() {
    let out = QueryDraft::new()
        .with_domain("a.com")
        .with_keyword("x")
        .with_operators(["inurl:", "intext:"])
        .with_file_type("log")
        .assemble();
    assert!(!out.contains("  "));
    assert_eq!(out.split(' ').count(), 4);
}
