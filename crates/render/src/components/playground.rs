//! Playground panel: control buttons, live preview, and copyable markup.

use utilidoc_core::{MarkupBuilder, Playground};

use crate::renderer::Context;

/// Copy identity of a playground's markup block.
pub fn playground_identity(id: &str) -> String {
    format!("playground:{}", id)
}

/// Everything derived from one playground selection.
///
/// `preview_html` and `markup` come from a single `build_markup` call, so the
/// rendered preview and the copyable text always show the same selection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundOutput {
    pub class_string: String,
    pub markup: String,
    pub preview_html: String,
}

impl PlaygroundOutput {
    /// Derives class string, markup, and preview from the current selection.
    ///
    /// The preview embeds the markup unescaped; templates and tokens are
    /// authored content and are trusted like the rest of the schema.
    pub fn derive(playground: &Playground, builder: &impl MarkupBuilder) -> Self {
        let selection = playground.selection();
        let markup = builder.build_markup(&selection);
        Self {
            class_string: selection.class_string(),
            preview_html: markup.clone(),
            markup,
        }
    }
}

/// Renders a playground panel.
pub fn playground(
    ctx: &mut Context,
    id: &str,
    title: &str,
    playground: &Playground,
    builder: &impl MarkupBuilder,
    copied: Option<&str>,
) {
    let output = PlaygroundOutput::derive(playground, builder);
    let identity = playground_identity(id);
    let title = if title.is_empty() { "Playground" } else { title };

    ctx.push_raw("<section class=\"");
    let class = ctx.class("playground");
    ctx.push_attr_value(&class);
    ctx.push_raw("\" data-playground=\"");
    ctx.push_attr_value(id);
    ctx.push_raw("\">");
    ctx.heading(2, title);

    ctx.open("div", "controls");
    for dimension in playground.dimensions() {
        let selected = playground.token(&dimension.id);
        ctx.push_raw("<fieldset class=\"");
        let class = ctx.class("dimension");
        ctx.push_attr_value(&class);
        ctx.push_raw("\" data-dimension=\"");
        ctx.push_attr_value(&dimension.id);
        ctx.push_raw("\"><legend>");
        ctx.push_text(if dimension.label.is_empty() {
            &dimension.id
        } else {
            &dimension.label
        });
        ctx.push_raw("</legend>");
        for token in &dimension.tokens {
            let active = selected == Some(token.as_str());
            ctx.push_raw("<button type=\"button\" class=\"");
            let class = ctx.class("token");
            ctx.push_attr_value(&class);
            if active {
                ctx.push_raw(" is-active");
            }
            ctx.push_raw("\" data-token=\"");
            ctx.push_attr_value(token);
            ctx.push_raw(if active {
                "\" aria-pressed=\"true\">"
            } else {
                "\" aria-pressed=\"false\">"
            });
            ctx.push_text(token);
            ctx.push_raw("</button>");
        }
        ctx.push_raw("</fieldset>");
    }
    ctx.close("div");

    ctx.open("div", "preview");
    ctx.push_raw(&output.preview_html);
    ctx.close("div");

    ctx.open("p", "composed");
    ctx.push_raw("<code>");
    ctx.push_text(&output.class_string);
    ctx.push_raw("</code>");
    ctx.close("p");

    ctx.open("div", "markup");
    ctx.push_code(&output.markup, Some("html"));
    ctx.copy_button(&output.markup, &identity, copied == Some(identity.as_str()));
    ctx.close("div");

    ctx.close("section");
}
