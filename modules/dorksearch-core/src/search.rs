pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Search-engine results URL for a dork, with the query percent-encoded as `q`.
///
/// A base that already carries a query string gets `q` appended with `&`.
pub fn search_url(base: &str, query: &str) -> String {
    let base = base.trim_end_matches(['?', '&']);
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}q={}", base, separator, urlencoding::encode(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_operators_and_quotes() {
        assert_eq!(
            search_url(DEFAULT_SEARCH_URL, "site:example.com intitle:\"admin panel\""),
            "https://www.google.com/search?q=site%3Aexample.com%20intitle%3A%22admin%20panel%22"
        );
    }

    #[test]
    fn custom_engine() {
        assert_eq!(
            search_url("https://duckduckgo.com/", "inurl:login"),
            "https://duckduckgo.com/?q=inurl%3Alogin"
        );
    }

    #[test]
    fn base_with_query_string_appends_param() {
        assert_eq!(
            search_url("https://duckduckgo.com/?ia=web", "inurl:login"),
            "https://duckduckgo.com/?ia=web&q=inurl%3Alogin"
        );
        assert_eq!(
            search_url("https://duckduckgo.com/?ia=web&", "inurl:login"),
            "https://duckduckgo.com/?ia=web&q=inurl%3Alogin"
        );
        assert_eq!(
            search_url("https://www.google.com/search?", "x"),
            "https://www.google.com/search?q=x"
        );
    }
}
