//! Country name suggestions for the free-text input.

/// Catalog entries whose lowercase form contains the lowercase query, in
/// catalog order. An empty query yields nothing.
pub fn suggest<S: AsRef<str>>(query: &str, catalog: &[S]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::suggestion_names;

    #[test]
    fn empty_query_yields_nothing() {
        assert!(suggest("", suggestion_names()).is_empty());
    }

    #[test]
    fn matching_ignores_case_and_keeps_order() {
        assert_eq!(suggest("tür", suggestion_names()), vec!["Türkiye"]);
        assert_eq!(suggest("TUR", suggestion_names()), vec!["Turkey"]);
        assert_eq!(suggest("an", suggestion_names()), vec!["Germany", "France", "Finland", "Japan", "Iceland"]);
    }

    #[test]
    fn matches_are_exactly_the_containing_entries() {
        let catalog = suggestion_names();
        for q in ["a", "e", "s", "land", "us", "xyz", " "] {
            let got = suggest(q, catalog);
            let expected: Vec<String> = catalog
                .iter()
                .filter(|c| c.to_lowercase().contains(&q.to_lowercase()))
                .map(|c| c.to_string())
                .collect();
            assert_eq!(got, expected, "query {:?}", q);
        }
    }

    #[test]
    fn query_is_not_trimmed() {
        assert!(suggest("japan ", suggestion_names()).is_empty());
    }
}
