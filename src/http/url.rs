//! URL construction for Klara API requests.
//!
//! Paths may embed `:name` placeholders which are substituted from
//! path-parameter pairs before the query string is appended.

/// Serializes query pairs as `key=value` joined by `&`.
///
/// Deliberately performs NO percent-encoding: the upstream API expects the
/// query string exactly as given, so the default form encoding is bypassed.
/// Values containing `&` or `=` therefore produce ambiguous pair boundaries;
/// callers own that hazard.
pub fn serialize_query(query: &[(&str, &str)]) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Substitutes `:key` placeholders in `path` from the given pairs.
///
/// Each key replaces the first occurrence of its placeholder, in the order
/// the pairs are given. Unmatched placeholders are left in place and extra
/// pairs are ignored; no error is raised either way.
pub fn substitute_path_params(path: &str, path_params: &[(&str, &str)]) -> String {
    let mut path = path.to_string();
    for (key, value) in path_params {
        path = path.replacen(&format!(":{}", key), value, 1);
    }
    path
}

/// Builds the absolute request URL from the base origin, a path template,
/// query pairs, and path-parameter pairs.
pub fn build_url(
    base_url: &str,
    path: &str,
    query: &[(&str, &str)],
    path_params: &[(&str, &str)],
) -> String {
    let path = substitute_path_params(path, path_params);

    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    let query = serialize_query(query);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_plain_path() {
        let url = build_url("https://api.klara.ch", "/organisations", &[], &[]);
        assert_eq!(url, "https://api.klara.ch/organisations");
    }

    #[test]
    fn test_build_url_joins_slashes() {
        let url = build_url("https://api.klara.ch/", "organisations", &[], &[]);
        assert_eq!(url, "https://api.klara.ch/organisations");
    }

    #[test]
    fn test_build_url_substitutes_path_param() {
        let url = build_url(
            "https://api.klara.ch",
            "/organisations/:id/letters",
            &[],
            &[("id", "42")],
        );
        assert_eq!(url, "https://api.klara.ch/organisations/42/letters");
        assert!(!url.contains(":id"));
    }

    #[test]
    fn test_build_url_multiple_path_params_in_order() {
        let url = build_url(
            "https://api.klara.ch",
            "/organisations/:organisationId/letters/:letterId",
            &[],
            &[("organisationId", "42"), ("letterId", "ltr_7")],
        );
        assert_eq!(url, "https://api.klara.ch/organisations/42/letters/ltr_7");
    }

    #[test]
    fn test_build_url_unresolved_placeholder_passes_through() {
        let url = build_url("https://api.klara.ch", "/organisations/:id", &[], &[]);
        assert_eq!(url, "https://api.klara.ch/organisations/:id");
    }

    #[test]
    fn test_build_url_extra_path_params_ignored() {
        let url = build_url(
            "https://api.klara.ch",
            "/organisations",
            &[],
            &[("id", "42")],
        );
        assert_eq!(url, "https://api.klara.ch/organisations");
    }

    #[test]
    fn test_build_url_appends_query_in_order() {
        let url = build_url(
            "https://api.klara.ch",
            "/letters",
            &[("page", "2"), ("status", "sent")],
            &[],
        );
        assert_eq!(url, "https://api.klara.ch/letters?page=2&status=sent");
    }

    #[test]
    fn test_serialize_query_empty() {
        assert_eq!(serialize_query(&[]), "");
    }

    #[test]
    fn test_serialize_query_does_not_percent_encode() {
        // Known hazard by contract: separators in values are not escaped.
        let query = serialize_query(&[("filter", "a&b=c"), ("q", "hello world")]);
        assert_eq!(query, "filter=a&b=c&q=hello world");
    }

    #[test]
    fn test_substitute_path_params_first_occurrence_only() {
        let path = substitute_path_params("/:id/child/:id", &[("id", "42")]);
        assert_eq!(path, "/42/child/:id");
    }
}
