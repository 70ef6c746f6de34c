//! Preview rendering: pretty JSON text plus highlighted markup
//!
//! The text is what gets copied and downloaded. The markup is display
//! only; removing its spans and entities gives back the text unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::builder::StructuredDataDocument;

/// Token class used for highlighting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
    Key,
    String,
    Number,
    Boolean,
    Null,
    /// Whitespace, punctuation and anything unrecognised
    Plain,
}

impl TokenClass {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Key => Some("json-key"),
            Self::String => Some("json-string"),
            Self::Number => Some("json-number"),
            Self::Boolean => Some("json-boolean"),
            Self::Null => Some("json-null"),
            Self::Plain => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub class: TokenClass,
}

/// Split JSON text into classified tokens in a single pass.
///
/// Concatenating the token texts yields the input.
pub fn tokenize(json: &str) -> Vec<Token<'_>> {
    let bytes = json.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let class = match bytes[pos] {
            b'"' => {
                pos += 1;
                let mut escaped = false;
                while pos < bytes.len() {
                    let b = bytes[pos];
                    pos += 1;
                    if escaped {
                        escaped = false;
                    } else if b == b'\\' {
                        escaped = true;
                    } else if b == b'"' {
                        break;
                    }
                }
                // A string followed by a colon is a key
                let next = bytes[pos..]
                    .iter()
                    .find(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
                if next == Some(&b':') {
                    TokenClass::Key
                } else {
                    TokenClass::String
                }
            }
            b'-' | b'0'..=b'9' => {
                pos += 1;
                while pos < bytes.len()
                    && matches!(bytes[pos], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
                {
                    pos += 1;
                }
                TokenClass::Number
            }
            b'a'..=b'z' => {
                while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                match &json[start..pos] {
                    "true" | "false" => TokenClass::Boolean,
                    "null" => TokenClass::Null,
                    _ => TokenClass::Plain,
                }
            }
            b' ' | b'\t' | b'\r' | b'\n' => {
                while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\r' | b'\n') {
                    pos += 1;
                }
                TokenClass::Plain
            }
            _ => {
                // Advance one full character so slices stay on UTF-8 boundaries
                pos += json[pos..].chars().next().map_or(1, char::len_utf8);
                TokenClass::Plain
            }
        };

        tokens.push(Token {
            text: &json[start..pos],
            class,
        });
    }

    tokens
}

/// Generate syntax-highlighted HTML from JSON text
pub fn highlight(json: &str) -> String {
    let mut html = String::with_capacity(json.len() * 2);

    for token in tokenize(json) {
        let escaped = escape_html(token.text);
        match token.class.css_class() {
            Some(class) => {
                html.push_str(r#"<span class=""#);
                html.push_str(class);
                html.push_str(r#"">"#);
                html.push_str(&escaped);
                html.push_str("</span>");
            }
            None => html.push_str(&escaped),
        }
    }

    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Rendered preview of a document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Pretty JSON, the canonical copy/download payload
    pub text: String,
    /// Highlighted markup for display
    pub html: String,
}

impl Preview {
    pub fn render(document: &StructuredDataDocument) -> Self {
        let text = document.to_pretty();
        let html = highlight(&text);
        Self { text, html }
    }

    /// The text wrapped for embedding in a page's `<head>`
    pub fn script_tag(&self) -> String {
        // Keep a literal "</script" in a value from closing the tag early
        let body = self.text.replace("</", "<\\/");
        format!("<script type=\"application/ld+json\">\n{}\n</script>", body)
    }

    pub fn format(&self, format: PreviewFormat) -> String {
        match format {
            PreviewFormat::Json => self.text.clone(),
            PreviewFormat::Html => self.html.clone(),
            PreviewFormat::Script => self.script_tag(),
        }
    }
}

/// Output flavour for command line and API consumers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    #[default]
    Json,
    Html,
    Script,
}

impl fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Html => "html",
            Self::Script => "script",
        };
        f.write_str(name)
    }
}

impl FromStr for PreviewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            "script" => Ok(Self::Script),
            other => Err(format!("unknown preview format '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strip_markup(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => out.push(ch),
                _ => {}
            }
        }
        out.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
    }

    #[test]
    fn test_tokenize_classes() {
        let tokens = tokenize(r#"{"a": "b", "n": -1.5e3, "t": true, "z": null}"#);
        let classified: Vec<(&str, TokenClass)> = tokens
            .iter()
            .filter(|t| t.class != TokenClass::Plain)
            .map(|t| (t.text, t.class))
            .collect();

        assert_eq!(
            classified,
            vec![
                ("\"a\"", TokenClass::Key),
                ("\"b\"", TokenClass::String),
                ("\"n\"", TokenClass::Key),
                ("-1.5e3", TokenClass::Number),
                ("\"t\"", TokenClass::Key),
                ("true", TokenClass::Boolean),
                ("\"z\"", TokenClass::Key),
                ("null", TokenClass::Null),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        let tokens = tokenize(r#"["say \"hi\"", 1]"#);
        assert_eq!(tokens[1].text, r#""say \"hi\"""#);
        assert_eq!(tokens[1].class, TokenClass::String);
    }

    #[test]
    fn test_highlight_wraps_and_escapes() {
        let html = highlight(r#"{"name": "<b>&</b>"}"#);
        assert_eq!(
            html,
            r#"{<span class="json-key">"name"</span>: <span class="json-string">"&lt;b&gt;&amp;&lt;/b&gt;"</span>}"#
        );
    }

    #[test]
    fn test_highlight_preserves_text() {
        let doc = StructuredDataDocument::from(json!({
            "@context": "https://schema.org",
            "name": "Caf\u{e9} <Ünïcode> & \"quotes\"",
            "count": 3,
            "active": false,
            "nothing": null,
            "tags": ["a", "b"]
        }));
        let preview = Preview::render(&doc);

        assert_eq!(strip_markup(&preview.html), preview.text);
        assert!(preview.html.contains(r#"<span class="json-number">3</span>"#));
        assert!(preview.html.contains(r#"<span class="json-boolean">false</span>"#));
        assert!(preview.html.contains(r#"<span class="json-null">null</span>"#));
    }

    #[test]
    fn test_text_is_two_space_indented() {
        let doc = StructuredDataDocument::from(json!({ "@type": "Thing", "brand": { "name": "X" } }));
        let preview = Preview::render(&doc);
        assert_eq!(
            preview.text,
            "{\n  \"@type\": \"Thing\",\n  \"brand\": {\n    \"name\": \"X\"\n  }\n}"
        );
    }

    #[test]
    fn test_script_tag() {
        let doc = StructuredDataDocument::from(json!({ "name": "</script><b>" }));
        let tag = Preview::render(&doc).script_tag();
        assert!(tag.starts_with("<script type=\"application/ld+json\">\n"));
        assert!(tag.ends_with("\n</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);
    }

    #[test]
    fn test_preview_format_parse() {
        assert_eq!("HTML".parse::<PreviewFormat>(), Ok(PreviewFormat::Html));
        assert!("xml".parse::<PreviewFormat>().is_err());
        assert_eq!(PreviewFormat::Script.to_string(), "script");
    }
}
