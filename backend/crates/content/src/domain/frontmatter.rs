//! Frontmatter Parser
//!
//! ```text
//! ---
//! slug: "my-post"
//! title: Hello
//! ---
//! Body text...
//! ```
//!
//! Input that does not have this shape is not an error: the whole text becomes
//! the body and the metadata is empty.

use std::collections::HashMap;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Loosely-typed result of parsing one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: HashMap<String, String>,
    pub body: String,
}

impl ParsedDocument {
    fn body_only(text: &str) -> Self {
        Self {
            metadata: HashMap::new(),
            body: text.to_string(),
        }
    }

    /// Metadata value, treating an empty value as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Split raw file text into metadata and body
///
/// The body is everything after the closing delimiter line, verbatim.
pub fn parse(raw: &str) -> ParsedDocument {
    let text = raw.strip_prefix(BOM).unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => {
            let mut offset = first.len();
            let mut metadata = HashMap::new();

            for line in lines {
                offset += line.len();
                if is_delimiter(line) {
                    return ParsedDocument {
                        metadata,
                        body: text[offset..].to_string(),
                    };
                }
                if let Some((key, value)) = parse_line(line) {
                    metadata.insert(key.to_string(), value.to_string());
                }
            }

            // No closing delimiter
            ParsedDocument::body_only(text)
        }
        _ => ParsedDocument::body_only(text),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// `key: value` split at the first colon; lines without one are skipped
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, strip_quotes(value.trim())))
}

/// Remove one layer of matching single or double quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_document() {
        let doc = parse("---\nslug: \"my-post\"\ntitle: \"Hello\"\ncategory: guides\n---\nHi there");
        assert_eq!(doc.get("slug"), Some("my-post"));
        assert_eq!(doc.get("title"), Some("Hello"));
        assert_eq!(doc.get("category"), Some("guides"));
        assert_eq!(doc.body, "Hi there");
    }

    #[test]
    fn test_body_is_verbatim() {
        let doc = parse("---\ntitle: x\n---\n\n# Heading\n\nText: with colon\n---\nmore\n");
        assert_eq!(doc.body, "\n# Heading\n\nText: with colon\n---\nmore\n");
        assert_eq!(doc.metadata.len(), 1);
    }

    #[test]
    fn test_no_delimiters_is_all_body() {
        let doc = parse("Just some text\nslug: nope\n");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "Just some text\nslug: nope\n");
    }

    #[test]
    fn test_missing_closing_delimiter_is_all_body() {
        let raw = "---\ntitle: Unclosed\nbody";
        let doc = parse(raw);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn test_empty_input() {
        let doc = parse("");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_empty_metadata_block() {
        let doc = parse("---\n---\nbody");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_closing_delimiter_at_end_of_input() {
        let doc = parse("---\ntitle: x\n---");
        assert_eq!(doc.get("title"), Some("x"));
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_crlf_and_bom() {
        let doc = parse("\u{feff}---\r\ntitle: 'Windows'\r\nauthor: Ana\r\n---\r\nBody\r\n");
        assert_eq!(doc.get("title"), Some("Windows"));
        assert_eq!(doc.get("author"), Some("Ana"));
        assert_eq!(doc.body, "Body\r\n");
    }

    #[test]
    fn test_split_at_first_colon() {
        let doc = parse("---\nfeaturedImage: https://cdn.example.com/a.png\ntime: 10:30\n---\n");
        assert_eq!(doc.get("featuredImage"), Some("https://cdn.example.com/a.png"));
        assert_eq!(doc.get("time"), Some("10:30"));
    }

    #[test]
    fn test_lines_without_colon_or_key_are_ignored() {
        let doc = parse("---\njust words\n: orphan value\n  \ntitle: ok\n---\n");
        assert_eq!(doc.metadata.len(), 1);
        assert_eq!(doc.get("title"), Some("ok"));
    }

    #[test]
    fn test_quote_stripping() {
        assert_eq!(strip_quotes("\"double\""), "double");
        assert_eq!(strip_quotes("'single'"), "single");
        assert_eq!(strip_quotes("\"\"quoted twice\"\""), "\"quoted twice\"");
        assert_eq!(strip_quotes("\"mismatched'"), "\"mismatched'");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("''"), "");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[test]
    fn test_empty_value_reads_as_absent() {
        let doc = parse("---\ntitle: \"\"\n---\n");
        assert_eq!(doc.metadata.get("title").map(String::as_str), Some(""));
        assert_eq!(doc.get("title"), None);
    }
}
