//! Minimal text-to-HTML rendering: paragraphs and line breaks only

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One or more blank lines between paragraphs
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Render plain text into `<p>` paragraphs.
///
/// Blank lines separate paragraphs and single newlines inside a paragraph
/// become `<br>`. Text is not escaped. Empty input renders to an empty string.
///
/// # Examples
/// ```
/// use forside_rs::content::md_to_html;
///
/// assert_eq!(md_to_html("a\nb\n\nc"), "<p>a<br>b</p>\n<p>c</p>");
/// ```
pub fn md_to_html(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    PARAGRAPH_BREAK
        .split(text)
        .map(|p| format!("<p>{}</p>", p.split('\n').collect::<Vec<_>>().join("<br>")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an optional field, treating an absent one like empty text
pub fn md_to_html_opt(text: Option<&str>) -> String {
    text.map(md_to_html).unwrap_or_default()
}
