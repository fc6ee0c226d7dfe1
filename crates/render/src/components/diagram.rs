use utilidoc_core::Diagram;

use crate::renderer::Context;

const DEMO_ITEMS: usize = 3;

/// Renders the diagram for the selected variant: explanation plus a live demo
/// container carrying the diagram's classes.
pub fn diagram(ctx: &mut Context, diagram: &Diagram) {
    ctx.open("figure", "diagram");
    ctx.open("div", "diagram-stage");
    ctx.push_raw("<div class=\"");
    ctx.push_attr_value(&diagram.classes);
    ctx.push_raw("\">");
    for i in 1..=DEMO_ITEMS {
        let item = ctx.class("diagram-item");
        ctx.push_raw(&format!("<div class=\"{}\">{}</div>", item, i));
    }
    ctx.push_raw("</div>");
    ctx.close("div");

    ctx.push_raw("<figcaption>");
    ctx.open("strong", "diagram-title");
    ctx.push_text(&diagram.title);
    ctx.close("strong");
    ctx.push_raw(" ");
    ctx.push_prose(&diagram.description);
    ctx.open("code", "diagram-classes");
    ctx.push_text(&diagram.classes);
    ctx.close("code");
    ctx.push_raw("</figcaption>");
    ctx.close("figure");
}
