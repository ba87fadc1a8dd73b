//! Textual cleanup of emitted LaTeX.
//!
//! The emitter separates every text chunk with a space and every block with
//! blank lines; these passes tidy up what that leaves behind. Order matters:
//! the trimming passes can create blank-line runs that the collapsing pass
//! then merges.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());
// Horizontal whitespace only: newlines are left for the blank-line pass.
static SPACE_BEFORE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+\n").unwrap());
static SPACE_BEFORE_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\\item").unwrap());
static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\n\s*){3,}").unwrap());

/// Apply the cleanup passes to emitted LaTeX.
pub fn post_process(latex: &str) -> String {
    let latex = SPACE_BEFORE_PUNCTUATION.replace_all(latex, "$1");
    let latex = SPACE_BEFORE_NEWLINE.replace_all(&latex, "\n");
    let latex = SPACE_BEFORE_ITEM.replace_all(&latex, r"\item");
    let latex = BLANK_LINE_RUNS.replace_all(&latex, "\n\n");
    latex.trim().to_string()
}
