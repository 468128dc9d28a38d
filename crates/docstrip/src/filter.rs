//! Regex-driven removal of generated documentation blocks.
//!
//! The generator emits each API entry with an `<h4 class="parameters">`
//! heading followed by a `<table class="list">`, and an
//! `<h4 class="returnvalue">` heading followed by a closing paragraph. Both
//! patterns pair those exact markers with non-greedy wildcards rather than
//! parsing HTML, so they only match markup laid out the way the generator
//! emits it today. Reordering the generated output changes what, if
//! anything, gets removed.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// "Parameters" heading through the end of its `list` table.
static PARAMETER_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)<h4.class=.parameters.*?</h4>.*?<table.class=.list.*?</table>")
        .expect("parameter block pattern is valid")
});

/// "Return Value" heading through the end of its trailing paragraph.
static RETURN_VALUE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)<h4.class=.returnvalue.*?Return.Value.*?</p>")
        .expect("return value block pattern is valid")
});

/// Deletes every generated parameter table and return-value block from
/// `text`.
///
/// Parameter blocks are removed first, then return-value blocks, matching
/// the order the generator emits them within an entry. Documents containing
/// neither block are returned borrowed and unchanged.
///
/// # Examples
///
/// ```
/// let html = concat!(
///     "<p>intro</p>\n",
///     "<h4 class=\"parameters\">Parameters</h4>\n",
///     "<table class=\"list\"><tr><td>x</td></tr></table>\n",
///     "<p>outro</p>",
/// );
/// let cleaned = docstrip::strip_generated_sections(html);
/// assert_eq!(cleaned, "<p>intro</p>\n\n<p>outro</p>");
/// ```
pub fn strip_generated_sections(text: &str) -> Cow<'_, str> {
    match PARAMETER_BLOCK.replace_all(text, "") {
        Cow::Borrowed(unchanged) => RETURN_VALUE_BLOCK.replace_all(unchanged, ""),
        Cow::Owned(stripped) => {
            Cow::Owned(RETURN_VALUE_BLOCK.replace_all(&stripped, "").into_owned())
        }
    }
}
