use std::collections::BTreeMap;

use url::Url;
use url::form_urlencoded;

use crate::options::SearchOptions;

/// The docs.github.com search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://docs.github.com/api/search/v1";

/// Highlight field holding the matched-content fragments.
pub const CONTENT_EXPLICIT: &str = "content_explicit";

/// Outgoing query parameters.
///
/// A key may hold several values. Keys encode in sorted order, values in
/// the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the parameters for a search.
    ///
    /// `version` must already be normalized.
    pub fn for_search(opts: &SearchOptions, version: &str) -> Self {
        let mut params = Self::new();
        params.set("query", &opts.query);
        params.set("size", opts.size.to_string());
        params.set("version", version);
        params.set("language", &opts.language);

        if opts.page > 0 {
            params.set("page", opts.page.to_string());
        }
        if !opts.sort.is_empty() {
            params.set("sort", &opts.sort);
        }

        for highlight in &opts.highlights {
            params.add("highlights", highlight);
        }
        if opts.matched_content {
            // Matched content is rendered from these fragments
            params.add("highlights", CONTENT_EXPLICIT);
        }

        // The API needs at least one include; explicit includes always win
        if !opts.includes.is_empty() {
            for include in &opts.includes {
                params.add("include", include);
            }
        } else if opts.matched_content {
            params.add("include", "toplevel");
        } else {
            params.add("include", "intro");
        }

        for toplevel in &opts.toplevel {
            params.add("toplevel", toplevel);
        }
        for aggregate in &opts.aggregate {
            params.add("aggregate", aggregate);
        }

        params
    }

    /// Replace all values of `key`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), vec![value.into()]);
    }

    /// Append a value to `key`.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.into());
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.values
            .get(key)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.values {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// Parse an encoded query string.
    pub fn decode(query: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params.add(&key, value);
        }
        params
    }

    /// Attach the parameters to `endpoint`.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(endpoint)?;
        url.set_query(Some(&self.encode()));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn opts() -> SearchOptions {
        SearchOptions {
            query: "ssh key".to_string(),
            size: 5,
            version: "free-pro-team".to_string(),
            language: "en".to_string(),
            page: 0,
            sort: String::new(),
            highlights: Vec::new(),
            includes: Vec::new(),
            toplevel: Vec::new(),
            aggregate: Vec::new(),
            matched_content: false,
            debug: false,
            format: OutputFormat::Pretty,
            plain: false,
        }
    }

    #[test]
    fn test_required_parameters() {
        let params = QueryParams::for_search(&opts(), "free-pro-team");
        assert_eq!(params.get("query"), Some("ssh key"));
        assert_eq!(params.get("size"), Some("5"));
        assert_eq!(params.get("version"), Some("free-pro-team"));
        assert_eq!(params.get("language"), Some("en"));
        assert!(!params.contains_key("page"));
        assert!(!params.contains_key("sort"));
        assert!(!params.contains_key("highlights"));
        assert!(!params.contains_key("toplevel"));
        assert!(!params.contains_key("aggregate"));
    }

    #[test]
    fn test_version_comes_from_argument() {
        let params = QueryParams::for_search(&opts(), "enterprise-server@3.17");
        assert_eq!(params.get("version"), Some("enterprise-server@3.17"));
    }

    #[test]
    fn test_page_only_when_positive() {
        let mut o = opts();
        o.page = 3;
        assert_eq!(QueryParams::for_search(&o, "fpt").get("page"), Some("3"));
        o.page = -1;
        assert!(!QueryParams::for_search(&o, "fpt").contains_key("page"));
    }

    #[test]
    fn test_sort_when_set() {
        let mut o = opts();
        o.sort = "relevance".to_string();
        assert_eq!(QueryParams::for_search(&o, "fpt").get("sort"), Some("relevance"));
    }

    #[test]
    fn test_default_include_is_intro() {
        let params = QueryParams::for_search(&opts(), "fpt");
        assert_eq!(params.get_all("include"), ["intro"]);
    }

    #[test]
    fn test_matched_content_include_is_toplevel() {
        let mut o = opts();
        o.matched_content = true;
        let params = QueryParams::for_search(&o, "fpt");
        assert_eq!(params.get_all("include"), ["toplevel"]);
    }

    #[test]
    fn test_explicit_includes_win() {
        let mut o = opts();
        o.includes = vec!["headings".to_string()];
        assert_eq!(
            QueryParams::for_search(&o, "fpt").get_all("include"),
            ["headings"]
        );
        o.matched_content = true;
        assert_eq!(
            QueryParams::for_search(&o, "fpt").get_all("include"),
            ["headings"]
        );
    }

    #[test]
    fn test_matched_content_adds_content_explicit() {
        let mut o = opts();
        o.matched_content = true;
        assert_eq!(
            QueryParams::for_search(&o, "fpt").get_all("highlights"),
            ["content_explicit"]
        );

        o.highlights = vec!["title".to_string(), "term".to_string()];
        assert_eq!(
            QueryParams::for_search(&o, "fpt").get_all("highlights"),
            ["title", "term", "content_explicit"]
        );
    }

    #[test]
    fn test_duplicate_highlights_preserved() {
        let mut o = opts();
        o.highlights = vec!["content_explicit".to_string()];
        o.matched_content = true;
        assert_eq!(
            QueryParams::for_search(&o, "fpt").get_all("highlights"),
            ["content_explicit", "content_explicit"]
        );
    }

    #[test]
    fn test_repeated_filters_in_order() {
        let mut o = opts();
        o.toplevel = vec!["Actions".to_string(), "Codespaces".to_string()];
        o.aggregate = vec!["toplevel".to_string(), "toplevel".to_string()];
        let params = QueryParams::for_search(&o, "fpt");
        assert_eq!(params.get_all("toplevel"), ["Actions", "Codespaces"]);
        assert_eq!(params.get_all("aggregate"), ["toplevel", "toplevel"]);
    }

    #[test]
    fn test_encode_sorts_keys() {
        let params = QueryParams::for_search(&opts(), "free-pro-team");
        assert_eq!(
            params.encode(),
            "include=intro&language=en&query=ssh+key&size=5&version=free-pro-team"
        );
    }

    #[test]
    fn test_to_url() {
        let params = QueryParams::for_search(&opts(), "free-pro-team");
        let url = params.to_url(SEARCH_ENDPOINT).unwrap();
        assert_eq!(
            url.as_str(),
            "https://docs.github.com/api/search/v1?include=intro&language=en&query=ssh+key&size=5&version=free-pro-team"
        );
    }

    #[test]
    fn test_to_url_rejects_bad_endpoint() {
        assert!(QueryParams::new().to_url("not a url").is_err());
    }

    #[test]
    fn test_query_round_trip() {
        let queries = [
            "ssh key",
            "\"quoted phrase\"",
            "a & b",
            "c++ + more",
            "100% = done?",
            "日本語のドキュメント",
            "café résumé",
        ];
        for query in queries {
            let mut params = QueryParams::new();
            params.set("query", query);
            let decoded = QueryParams::decode(&params.encode());
            assert_eq!(decoded.get("query"), Some(query), "round trip of {query:?}");
        }
    }
}
