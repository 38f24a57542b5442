//! Insertion-ordered query parameters.

/// Ordered `key=value` pairs appended to a request URI.
///
/// Pairs are emitted in insertion order, verbatim: no sorting and no
/// percent-encoding. Callers pre-encode keys or values containing reserved
/// characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a pair, builder-style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Returns true if no pairs have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build the final request URI.
    ///
    /// Appends `?k1=v1&k2=v2` to `base` in insertion order; an empty
    /// mapping returns `base` unchanged, with no trailing `?`.
    pub fn append_to(&self, base: &str) -> String {
        if self.pairs.is_empty() {
            return base.to_string();
        }

        let mut url = String::with_capacity(base.len() + 16 * self.pairs.len());
        url.push_str(base);
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_leaves_base_unchanged() {
        let params = QueryParams::new();
        assert_eq!(params.append_to("https://api.example.com/items"), "https://api.example.com/items");
    }

    #[test]
    fn test_single_pair() {
        let params = QueryParams::new().with("page", "2");
        assert_eq!(params.append_to("/items"), "/items?page=2");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let params = QueryParams::new()
            .with("zebra", "1")
            .with("apple", "2")
            .with("mango", "3");
        assert_eq!(params.append_to("/items"), "/items?zebra=1&apple=2&mango=3");
    }

    #[test]
    fn test_values_inserted_verbatim() {
        // No percent-encoding: callers pre-encode reserved characters.
        let params = QueryParams::new().with("q", "a b&c");
        assert_eq!(params.append_to("/search"), "/search?q=a b&c");
    }

    #[test]
    fn test_duplicate_keys_kept() {
        let params = QueryParams::new().with("tag", "red").with("tag", "blue");
        assert_eq!(params.append_to("/items"), "/items?tag=red&tag=blue");
    }

    #[test]
    fn test_from_array() {
        let params = QueryParams::from([("a", "1"), ("b", "2")]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.append_to("/x"), "/x?a=1&b=2");
    }

    proptest! {
        #[test]
        fn prop_built_uri_preserves_order(
            pairs in proptest::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9]{0,8}"), 0..8)
        ) {
            let params: QueryParams = pairs.iter().cloned().collect();
            let url = params.append_to("/base");

            if pairs.is_empty() {
                prop_assert_eq!(url, "/base");
            } else {
                let expected: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                prop_assert_eq!(url, format!("/base?{}", expected.join("&")));
            }
        }
    }
}
