//! Strips bold markup from completion text.
//!
//! Matching is deliberately narrow: exact lowercase `<strong>`/`<b>` tags with no
//! attributes, and `**text**` pairs on a single line.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(strong|b)>").expect("valid bold tag regex"));

static MARKDOWN_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid markdown bold regex"));

/// Removes `<strong>`, `</strong>`, `<b>`, `</b>` and unwraps `**text**`, keeping the text.
pub fn strip_bold(text: &str) -> String {
    let without_tags = BOLD_TAG.replace_all(text, "");
    MARKDOWN_BOLD.replace_all(&without_tags, "${1}").into_owned()
}
