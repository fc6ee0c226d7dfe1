use crate::renderer::Context;

/// Copy identity of a class chip.
pub fn chip_identity(class: &str) -> String {
    format!("chip:{}", class)
}

/// Renders every variant as a copyable class chip.
///
/// `copied` is the clipboard indicator; the matching chip shows its copied
/// state.
pub fn utility_grid(ctx: &mut Context, types: &[String], copied: Option<&str>) {
    if types.is_empty() {
        return;
    }

    ctx.section("utilities", "Utilities", |ctx| {
        ctx.open("ul", "utility-grid");
        for class in types {
            let identity = chip_identity(class);
            ctx.open("li", "chip");
            ctx.push_raw("<code>");
            ctx.push_text(class);
            ctx.push_raw("</code>");
            ctx.copy_button(class, &identity, copied == Some(identity.as_str()));
            ctx.close("li");
        }
        ctx.close("ul");
    });
}
