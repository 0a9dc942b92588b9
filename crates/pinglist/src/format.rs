//! Result rendering
//!
//! Every format is a pure function of the record list. Fields are
//! emitted verbatim: no quoting or escaping of embedded separators.

use crate::error::FormatError;
use crate::types::ProbeRecord;
use std::fmt;
use std::str::FromStr;

/// Column names shared by the header-carrying formats
const COLUMNS: [&str; 6] = [
    "Url",
    "Title",
    "Status code",
    "Status message",
    "Server",
    "Content length",
];

/// Output format selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderFormat {
    /// Comma-separated with a header row
    Csv,
    /// Human-readable bullet list
    #[default]
    List,
    /// Markdown table
    Markdown,
    /// Tab-separated with a header row
    Table,
    /// Renders nothing
    None,
}

impl RenderFormat {
    /// All formats, in selector order
    pub const ALL: [RenderFormat; 5] = [
        RenderFormat::Csv,
        RenderFormat::List,
        RenderFormat::Markdown,
        RenderFormat::Table,
        RenderFormat::None,
    ];

    /// Selector string for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Csv => "csv",
            RenderFormat::List => "list",
            RenderFormat::Markdown => "md",
            RenderFormat::Table => "table",
            RenderFormat::None => "none",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(RenderFormat::Csv),
            "list" => Ok(RenderFormat::List),
            "md" => Ok(RenderFormat::Markdown),
            "table" => Ok(RenderFormat::Table),
            "none" => Ok(RenderFormat::None),
            other => Err(FormatError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `records` in `format`
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn format_with(format: RenderFormat, records: &[ProbeRecord]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(records.len() + 2);

    match format {
        RenderFormat::None => return String::new(),
        RenderFormat::Csv => {
            lines.push(COLUMNS.join(","));
            lines.extend(records.iter().map(|r| fields(r).join(",")));
        }
        RenderFormat::List => {
            lines.extend(records.iter().map(|r| {
                format!(
                    "- {} ({}) ({} {}) {} {}",
                    r.title, r.url, r.status_code, r.status_message, r.server, r.content_length
                )
            }));
        }
        RenderFormat::Markdown => {
            lines.push(format!("|{}|", COLUMNS.join("|")));
            lines.push(format!("|{}|", ["---"; 6].join("|")));
            lines.extend(records.iter().map(|r| format!("|{}|", fields(r).join("|"))));
        }
        RenderFormat::Table => {
            lines.push(COLUMNS.join("\t"));
            lines.extend(records.iter().map(|r| fields(r).join("\t")));
        }
    }

    lines.join("\n")
}

/// Render `records` using a format selector string
///
/// Unknown selectors fail with [`FormatError::InvalidFormat`] before any
/// output is produced.
pub fn format_with_name(selector: &str, records: &[ProbeRecord]) -> Result<String, FormatError> {
    let format = selector.parse::<RenderFormat>()?;
    Ok(format_with(format, records))
}

/// Record fields in column order
fn fields(record: &ProbeRecord) -> [String; 6] {
    [
        record.url.clone(),
        record.title.clone(),
        record.status_code.to_string(),
        record.status_message.clone(),
        record.server.clone(),
        record.content_length.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::normalize;

    fn example_record() -> ProbeRecord {
        ProbeRecord {
            url: "http://example.com".to_string(),
            title: "Example".to_string(),
            status_code: 200,
            status_message: "OK".to_string(),
            server: "nginx".to_string(),
            content_length: 600,
        }
    }

    fn unreachable_record() -> ProbeRecord {
        ProbeRecord::unreachable(&normalize("badhost"))
    }

    #[test]
    fn test_selector_round_trip() {
        for format in RenderFormat::ALL {
            assert_eq!(format.as_str().parse::<RenderFormat>(), Ok(format));
        }
        assert_eq!(RenderFormat::default(), RenderFormat::List);
    }

    #[test]
    fn test_invalid_selector() {
        assert_eq!(
            "xml".parse::<RenderFormat>(),
            Err(FormatError::InvalidFormat("xml".to_string()))
        );
        assert_eq!(
            "CSV".parse::<RenderFormat>(),
            Err(FormatError::InvalidFormat("CSV".to_string()))
        );
        assert!(matches!(
            format_with_name("xml", &[example_record()]),
            Err(FormatError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(format_with(RenderFormat::None, &[]), "");
        assert_eq!(
            format_with(RenderFormat::None, &[example_record(), unreachable_record()]),
            ""
        );
    }

    #[test]
    fn test_csv_empty_is_header_only() {
        assert_eq!(
            format_with(RenderFormat::Csv, &[]),
            "Url,Title,Status code,Status message,Server,Content length"
        );
    }

    #[test]
    fn test_csv_single_record() {
        let output = format_with_name("csv", &[example_record()]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Url,Title,Status code,Status message,Server,Content length",
                "http://example.com,Example,200,OK,nginx,600",
            ]
        );
    }

    #[test]
    fn test_csv_no_escaping() {
        let mut record = example_record();
        record.title = "Hello, \"World\"".to_string();
        let output = format_with(RenderFormat::Csv, &[record]);
        assert!(output.ends_with("http://example.com,Hello, \"World\",200,OK,nginx,600"));
    }

    #[test]
    fn test_list() {
        let output = format_with(RenderFormat::List, &[example_record(), unreachable_record()]);
        assert_eq!(
            output,
            "- Example (http://example.com) (200 OK) nginx 600\n\
             - http://badhost (http://badhost) (0 could not connect) UNKNOWN 0"
        );
        assert_eq!(format_with(RenderFormat::List, &[]), "");
    }

    #[test]
    fn test_markdown() {
        let output = format_with(RenderFormat::Markdown, &[example_record()]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "|Url|Title|Status code|Status message|Server|Content length|"
        );
        assert_eq!(lines[1], "|---|---|---|---|---|---|");
        assert_eq!(lines[2], "|http://example.com|Example|200|OK|nginx|600|");
    }

    #[test]
    fn test_table_uses_fixed_tabs() {
        let output = format_with(RenderFormat::Table, &[example_record(), unreachable_record()]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "Url\tTitle\tStatus code\tStatus message\tServer\tContent length"
        );
        assert_eq!(lines[1], "http://example.com\tExample\t200\tOK\tnginx\t600");
        assert_eq!(
            lines[2],
            "http://badhost\thttp://badhost\t0\tcould not connect\tUNKNOWN\t0"
        );
    }

    #[test]
    fn test_header_and_row_column_counts_match() {
        let records = vec![example_record(), unreachable_record()];
        for (format, sep) in [(RenderFormat::Csv, ','), (RenderFormat::Table, '\t'), (RenderFormat::Markdown, '|')] {
            let output = format_with(format, &records);
            let counts: Vec<usize> = output.lines().map(|l| l.matches(sep).count()).collect();
            assert!(counts.windows(2).all(|w| w[0] == w[1]), "{format}: {counts:?}");
        }
    }
}
