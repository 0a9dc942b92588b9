//! URL normalization
//!
//! An [`Endpoint`] is a raw URL string with a guaranteed `http://` or
//! `https://` prefix. No other validation happens here; malformed hosts
//! are passed through and fail at fetch time.

use std::fmt;
use std::io::{self, BufRead};

/// Scheme prepended to inputs that carry neither `http://` nor `https://`
const DEFAULT_SCHEME: &str = "http://";

/// A normalized, scheme-prefixed URL ready to be fetched
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Borrow the endpoint as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the endpoint, returning the URL string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a raw string into an [`Endpoint`]
///
/// Trailing line endings are stripped first, then `http://` is prepended
/// unless the string already starts with `http://` or `https://`.
/// Any input is accepted.
pub fn normalize(raw: &str) -> Endpoint {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.starts_with("http://") || line.starts_with("https://") {
        Endpoint(line.to_string())
    } else {
        Endpoint(format!("{DEFAULT_SCHEME}{line}"))
    }
}

/// Read one endpoint per line from a line-oriented source
///
/// Blank lines are skipped.
pub fn read_endpoints<R: BufRead>(reader: R) -> io::Result<Vec<Endpoint>> {
    let mut endpoints = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim_end_matches(['\r', '\n']).is_empty() {
            continue;
        }
        endpoints.push(normalize(&line));
    }
    Ok(endpoints)
}

/// Concatenate positional URLs and file endpoints, positional first
pub fn collect_endpoints<S: AsRef<str>>(positional: &[S], from_file: Vec<Endpoint>) -> Vec<Endpoint> {
    let mut endpoints: Vec<Endpoint> = positional.iter().map(|raw| normalize(raw.as_ref())).collect();
    endpoints.extend(from_file);
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bare_host_gets_http_prefix() {
        assert_eq!(normalize("example.com").as_str(), "http://example.com");
    }

    #[test]
    fn test_schemed_urls_unchanged() {
        assert_eq!(normalize("http://example.com").as_str(), "http://example.com");
        assert_eq!(
            normalize("https://example.com/path?q=1").as_str(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("example.com");
        let twice = normalize(once.as_str());
        assert_eq!(once, twice);
        assert_eq!(twice.as_str(), "http://example.com");
    }

    #[test]
    fn test_line_endings_stripped_before_scheme_check() {
        assert_eq!(normalize("example.com\r\n").as_str(), "http://example.com");
        assert_eq!(normalize("https://example.com\n").as_str(), "https://example.com");
    }

    #[test]
    fn test_other_schemes_are_prefixed_not_rejected() {
        assert_eq!(normalize("ftp://host").as_str(), "http://ftp://host");
        assert_eq!(normalize("HTTP://host").as_str(), "http://HTTP://host");
    }

    #[test]
    fn test_read_endpoints_crlf_and_blank_lines() {
        let input = Cursor::new("a.com\r\nhttps://b.com\n\n\r\nc.com");
        let endpoints = read_endpoints(input).unwrap();
        let urls: Vec<&str> = endpoints.iter().map(Endpoint::as_str).collect();
        assert_eq!(urls, vec!["http://a.com", "https://b.com", "http://c.com"]);
    }

    #[test]
    fn test_collect_endpoints_positional_first() {
        let from_file = vec![normalize("file1.com"), normalize("file2.com")];
        let endpoints = collect_endpoints(&["arg.com", "https://arg2.com"], from_file);
        let urls: Vec<&str> = endpoints.iter().map(Endpoint::as_str).collect();
        assert_eq!(
            urls,
            vec![
                "http://arg.com",
                "https://arg2.com",
                "http://file1.com",
                "http://file2.com"
            ]
        );
    }
}
