//! Reading and rewriting the HTML fragments the CGI programs return.
//!
//! Fragments are treated as opaque markup except for two things: the text of
//! `<td>` cells, which [`format_fragment`] rewrites through a [`RowSchema`], and
//! `<option>` elements, which [`parse_options`] turns into [`SelectOption`]s so the
//! select lists can be rendered as real elements.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::format::format_rows;
use crate::options::SelectOption;
use crate::schema::RowSchema;

// Compiled once, reused for every fragment.

/// A `<td>` cell and its content. `<tdata>` and friends are not cells.
static CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<td(?:[\s/][^>]*)?>(.*?)</td").expect("cell regex must compile")
});

/// An `<option>` opening tag, capturing its attributes.
static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<option(\s[^>]*)?>").expect("option regex must compile")
});

/// Where an option's label ends when the closing tag is omitted.
static OPTION_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?option[\s/>]|</select").expect("option end regex must compile")
});

/// One attribute, with an optional double-quoted, single-quoted or bare value.
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>/]+)))?"#)
        .expect("attribute regex must compile")
});

/// Byte range of every `<td>` cell's content, in document order.
///
/// A cell without a closing `</td>` ends the scan.
pub fn cell_spans(html: &str) -> Vec<Range<usize>> {
    CELL_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.range()))
        .collect()
}

/// Text of every `<td>` cell, in document order.
pub fn cells(html: &str) -> Vec<String> {
    cell_spans(html)
        .into_iter()
        .map(|span| html[span].to_string())
        .collect()
}

/// Replace the content of the first `replacements.len()` cells.
pub fn replace_cells(html: &str, replacements: &[String]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    for (span, text) in cell_spans(html).into_iter().zip(replacements) {
        out.push_str(&html[cursor..span.start]);
        out.push_str(text);
        cursor = span.end;
    }
    out.push_str(&html[cursor..]);
    out
}

/// Format every table cell of a fragment according to `schema`.
///
/// A fragment without cells is returned unchanged.
pub fn format_fragment(html: &str, schema: &RowSchema) -> String {
    let mut values = cells(html);
    if values.is_empty() {
        return html.to_string();
    }
    format_rows(&mut values, schema);
    replace_cells(html, &values)
}

/// Parse the `<option>` elements of a select-list fragment.
///
/// An option without a `value` attribute uses its label as value, as a browser
/// would. A missing `</option>` ends the label at the next option.
pub fn parse_options(html: &str) -> Vec<SelectOption> {
    OPTION_RE
        .captures_iter(html)
        .map(|caps| {
            let tag_end = caps.get(0).map_or(0, |m| m.end());
            let content_end = OPTION_END_RE
                .find_at(html, tag_end)
                .map_or(html.len(), |m| m.start());
            let label = decode_entities(html[tag_end..content_end].trim());

            let mut value = None;
            let mut selected = false;
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            for attr in ATTRIBUTE_RE.captures_iter(attrs) {
                let name = attr.get(1).map_or("", |m| m.as_str());
                if name.eq_ignore_ascii_case("value") {
                    let raw = (2..=4).find_map(|i| attr.get(i)).map_or("", |m| m.as_str());
                    value = Some(decode_entities(raw));
                } else if name.eq_ignore_ascii_case("selected") {
                    selected = true;
                }
            }

            SelectOption {
                value: value.unwrap_or_else(|| label.clone()),
                label,
                selected,
            }
        })
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
