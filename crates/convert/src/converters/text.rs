//! Text-level helpers shared by the emitter.

use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());

/// Collapse every whitespace run to one space and trim the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prefix the LaTeX specials `% & _ # $` with a backslash.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '&' | '_' | '#' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Append a text node: cleaned, escaped and followed by one separating space.
/// Whitespace-only text contributes nothing.
pub fn push_text(out: &mut String, raw: &str) {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return;
    }
    out.push_str(&escape_latex(&cleaned));
    out.push(' ');
}

/// List items cannot hold paragraph breaks.
pub fn collapse_paragraph_breaks(text: &str) -> String {
    PARAGRAPH_BREAKS.replace_all(text, "\n").into_owned()
}
