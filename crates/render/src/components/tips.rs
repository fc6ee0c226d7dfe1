use crate::renderer::Context;

/// Renders a titled tips list (benefits, use cases, additional sections).
///
/// Writes nothing for an empty list.
pub fn tips_list(ctx: &mut Context, name: &str, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ctx.section(name, title, |ctx| ctx.bullet_list("tips", items));
}
