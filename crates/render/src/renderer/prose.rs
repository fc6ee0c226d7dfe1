//! Inline Markdown for authored prose (descriptions, notes, bullets).

/// Rendered prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prose {
    pub html: String,
    /// True when the HTML holds block elements (several paragraphs, lists,
    /// headings) and cannot sit inside `<p>`.
    pub block: bool,
}

/// Renders `text` as Markdown, unwrapping a single enclosing paragraph.
///
/// Raw HTML in the source is escaped rather than passed through.
pub fn markdown_prose(text: &str) -> Prose {
    let html = markdown::to_html(text);
    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => Prose {
            html: inner.to_string(),
            block: false,
        },
        _ => Prose {
            html: trimmed.to_string(),
            block: !trimmed.is_empty(),
        },
    }
}

/// [`markdown_prose`] without the block flag, for `<li>` and `<td>` content
/// where block HTML is valid.
pub fn inline_markdown(text: &str) -> String {
    markdown_prose(text).html
}
