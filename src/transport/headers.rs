//! Standard header construction.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE};

/// Build the headers sent on every request.
pub fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

    headers
}

/// Build the headers for requests carrying a JSON body.
pub fn json_body_headers() -> HeaderMap {
    let mut headers = base_headers();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_headers() {
        let headers = base_headers();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT_ENCODING).unwrap(), "gzip");
        assert!(!headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_json_body_headers() {
        let headers = json_body_headers();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT_ENCODING).unwrap(), "gzip");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}
