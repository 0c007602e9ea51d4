//! Rich-text field cleanup.
//!
//! # Responsibility
//! - Reduce HTML field values to plain text for display and search.
//! - Keep media filenames visible when requested.
//! - Collapse verbose editor spans into minimal inline tags.
//!
//! # Invariants
//! - Passes always run in order: style/script blocks, generic tags, entities.
//! - Malformed markup and unknown entities never fail; they pass through.

pub mod entities;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static STYLE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style.*?>.*?</style>").expect("valid style block regex"));
static SCRIPT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script.*?>.*?</script>").expect("valid script block regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag regex"));
static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#?[0-9A-Za-z_]+;").expect("valid entity regex"));
static IMG_SRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img src=["']?([^"'>]+)["']? ?/?>"#).expect("valid img src regex")
});
static BOLD_SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span style="font-weight:600;">(.*?)</span>"#).expect("valid bold span regex")
});
static ITALIC_SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span style="font-style:italic;">(.*?)</span>"#)
        .expect("valid italic span regex")
});
static UNDERLINE_SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span style="text-decoration: underline;">(.*?)</span>"#)
        .expect("valid underline span regex")
});

/// Strips markup and decodes entities.
///
/// `<style>` and `<script>` blocks are dropped with their content, then all
/// remaining tags are removed, then character references are decoded.
pub fn strip_html(html: &str) -> String {
    let text = STYLE_BLOCK_RE.replace_all(html, "");
    let text = SCRIPT_BLOCK_RE.replace_all(&text, "");
    let text = TAG_RE.replace_all(&text, "");
    decode_entities(&text)
}

/// Strips markup like [`strip_html`] but keeps `<img src>` filenames.
///
/// Each image becomes its filename padded with one space on each side.
pub fn strip_html_media(html: &str) -> String {
    let text = IMG_SRC_RE.replace_all(html, " ${1} ");
    strip_html(&text)
}

/// Rewrites editor-generated bold/italic/underline spans to `<b>`, `<i>`, `<u>`.
pub fn minimize_html(html: &str) -> String {
    let text = BOLD_SPAN_RE.replace_all(html, "<b>${1}</b>");
    let text = ITALIC_SPAN_RE.replace_all(&text, "<i>${1}</i>");
    UNDERLINE_SPAN_RE
        .replace_all(&text, "<u>${1}</u>")
        .into_owned()
}

/// Decodes named, decimal and hex character references.
///
/// References that do not resolve (unknown names, out-of-range code points,
/// malformed numbers) are kept verbatim, including `&` and `;`.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let reference = &caps[0];
            match decode_reference(reference) {
                Some(ch) => ch.to_string(),
                None => reference.to_string(),
            }
        })
        .into_owned()
}

fn decode_reference(reference: &str) -> Option<char> {
    let body = reference.strip_prefix('&')?.strip_suffix(';')?;
    match body.strip_prefix('#') {
        Some(numeric) => {
            let code = match numeric.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
        None => entities::lookup(body),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_reference, minimize_html, strip_html};

    #[test]
    fn decode_reference_handles_each_form() {
        assert_eq!(decode_reference("&#65;"), Some('A'));
        assert_eq!(decode_reference("&#x41;"), Some('A'));
        assert_eq!(decode_reference("&eacute;"), Some('\u{00E9}'));
        assert_eq!(decode_reference("&#X41;"), None);
        assert_eq!(decode_reference("&#x;"), None);
        assert_eq!(decode_reference("&#xD800;"), None);
    }

    #[test]
    fn style_block_is_removed_before_generic_tags() {
        let html = "<style type=\"text/css\">\n.card { color: red; }\n</style>front";
        assert_eq!(strip_html(html), "front");
    }

    #[test]
    fn generic_tag_removal_does_not_cross_lines() {
        assert_eq!(strip_html("a <b\n> c"), "a <b\n> c");
    }

    #[test]
    fn minimize_leaves_other_spans_alone() {
        let html = r#"<span style="color:red;">x</span>"#;
        assert_eq!(minimize_html(html), html);
    }
}
