//! Page title extraction

use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| match Selector::parse("title") {
    Ok(selector) => Some(selector),
    Err(e) => {
        tracing::error!("Failed to parse title selector: {}", e);
        None
    }
});

/// Extract the text of the first `<title>` element
///
/// Returns `None` when the document has no title or the title is blank.
/// Surrounding whitespace is trimmed.
pub fn extract_title(html: &str) -> Option<String> {
    let selector = TITLE_SELECTOR.as_ref()?;
    let document = Html::parse_document(html);
    let element = document.select(selector).next()?;
    let title = element.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title>Example Domain</title></head><body></body></html>";
        assert_eq!(extract_title(html), Some("Example Domain".to_string()));
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<title>First</title><title>Second</title>";
        assert_eq!(extract_title(html), Some("First".to_string()));
    }

    #[test]
    fn test_title_trimmed() {
        let html = "<title>\n   Spaced Out \n</title>";
        assert_eq!(extract_title(html), Some("Spaced Out".to_string()));
    }

    #[test]
    fn test_missing_or_blank_title() {
        assert_eq!(extract_title("<html><body><h1>No title</h1></body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
        assert_eq!(extract_title(""), None);
        assert_eq!(extract_title("{\"json\": true}"), None);
    }

    #[test]
    fn test_malformed_markup() {
        let html = "<html><head><title>Unclosed";
        assert_eq!(extract_title(html), Some("Unclosed".to_string()));
    }
}
