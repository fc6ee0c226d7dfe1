//! HTML output buffer shared by every presentation component.

use utilidoc_core::Slugger;

use super::RenderOptions;
use super::prose::{inline_markdown, markdown_prose};

/// Accumulates the HTML of one page (or one standalone fragment).
///
/// Components never build strings themselves; they write through the
/// `push_*` helpers so text and attribute escaping stays in one place.
pub struct Context<'a> {
    html: String,
    slugger: Slugger,
    options: &'a RenderOptions,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            html: String::with_capacity(8192),
            slugger: Slugger::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Writes a raw string without escaping (for markup this crate generates).
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Writes text content with HTML escaping.
    pub fn push_text(&mut self, s: &str) {
        html_escape::encode_text_to_string(s, &mut self.html);
    }

    /// Writes an escaped value for use inside a double-quoted attribute.
    pub fn push_attr_value(&mut self, s: &str) {
        html_escape::encode_double_quoted_attribute_to_string(s, &mut self.html);
    }

    /// Writes authored prose as `<p class="{prefix}-{name}">`, or as a `div`
    /// when the Markdown renders to block elements.
    pub fn paragraph(&mut self, name: &str, s: &str) {
        let (html, block) = if self.options.markdown_prose {
            let prose = markdown_prose(s);
            (prose.html, prose.block)
        } else {
            let mut escaped = String::new();
            html_escape::encode_text_to_string(s, &mut escaped);
            (escaped, false)
        };
        let tag = if block { "div" } else { "p" };
        self.open(tag, name);
        self.html.push_str(&html);
        self.close(tag);
    }

    /// Writes authored prose, as inline Markdown when enabled.
    pub fn push_prose(&mut self, s: &str) {
        if self.options.markdown_prose {
            let rendered = inline_markdown(s);
            self.html.push_str(&rendered);
        } else {
            self.push_text(s);
        }
    }

    /// Prefixed class name for this crate's own styling hooks.
    pub fn class(&self, name: &str) -> String {
        if self.options.class_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}-{}", self.options.class_prefix, name)
        }
    }

    /// Writes `<tag class="{prefix}-{name}">`.
    pub fn open(&mut self, tag: &str, name: &str) {
        let class = self.class(name);
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push_str(" class=\"");
        self.push_attr_value(&class);
        self.html.push_str("\">");
    }

    /// Writes `</tag>`.
    pub fn close(&mut self, tag: &str) {
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }

    /// Writes a heading, with a unique anchor id when anchors are enabled.
    pub fn heading(&mut self, level: u8, text: &str) {
        let level = level.clamp(1, 6);
        self.html.push_str(&format!("<h{}", level));
        if self.options.heading_anchors {
            let id = self.slugger.next_slug(text);
            self.html.push_str(" id=\"");
            self.push_attr_value(&id);
            self.html.push('"');
        }
        self.html.push('>');
        self.push_text(text);
        self.html.push_str(&format!("</h{}>", level));
    }

    /// Writes a titled `<section>` and lets `body` fill it.
    pub fn section(&mut self, name: &str, title: &str, body: impl FnOnce(&mut Self)) {
        self.open("section", name);
        self.heading(2, title);
        body(self);
        self.close("section");
    }

    /// Writes an escaped code block.
    pub fn push_code(&mut self, code: &str, lang: Option<&str>) {
        self.html.push_str("<pre tabindex=\"0\">");
        match lang {
            Some(lang) => {
                self.html.push_str("<code class=\"language-");
                self.push_attr_value(lang);
                self.html.push_str("\">");
            }
            None => self.html.push_str("<code>"),
        }
        self.push_text(code);
        self.html.push_str("</code></pre>");
    }

    /// Writes a copy button. `copied` switches the label to the feedback state.
    pub fn copy_button(&mut self, text: &str, identity: &str, copied: bool) {
        let class = self.class("copy");
        self.html.push_str("<button type=\"button\" class=\"");
        self.push_attr_value(&class);
        if copied {
            self.html.push_str(" is-copied");
        }
        self.html.push_str("\" data-copy=\"");
        self.push_attr_value(text);
        self.html.push_str("\" data-copy-id=\"");
        self.push_attr_value(identity);
        self.html.push_str("\">");
        self.html.push_str(if copied { "Copied!" } else { "Copy" });
        self.html.push_str("</button>");
    }

    /// Writes a bullet list, rendering each item as prose.
    pub fn bullet_list(&mut self, name: &str, items: &[String]) {
        self.open("ul", name);
        for item in items {
            self.html.push_str("<li>");
            self.push_prose(item);
            self.html.push_str("</li>");
        }
        self.close("ul");
    }

    /// Returns the accumulated HTML.
    pub fn finish(self) -> String {
        self.html
    }
}
