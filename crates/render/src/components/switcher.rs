use utilidoc_core::VariantSelector;

use crate::renderer::Context;

/// Renders one toggle button per variant. The host wires `data-variant`
/// clicks back to [`VariantSelector::select`].
pub fn variant_switcher(ctx: &mut Context, selector: &VariantSelector) {
    let button_class = ctx.class("variant");
    ctx.push_raw("<div class=\"");
    let group_class = ctx.class("switcher");
    ctx.push_attr_value(&group_class);
    ctx.push_raw("\" role=\"group\" aria-label=\"Variants\">");

    for option in selector.options() {
        ctx.push_raw("<button type=\"button\" class=\"");
        ctx.push_attr_value(&button_class);
        if option.selected {
            ctx.push_raw(" is-active");
        }
        ctx.push_raw("\" data-variant=\"");
        ctx.push_attr_value(option.key);
        ctx.push_raw(if option.selected {
            "\" aria-pressed=\"true\">"
        } else {
            "\" aria-pressed=\"false\">"
        });
        ctx.push_text(option.key);
        ctx.push_raw("</button>");
    }

    ctx.push_raw("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderOptions;

    #[test]
    fn marks_current_variant() {
        let mut selector = VariantSelector::new(vec!["x".into(), "y".into()]).unwrap();
        selector.select("y").unwrap();

        let options = RenderOptions::default();
        let mut ctx = Context::new(&options);
        variant_switcher(&mut ctx, &selector);
        assert_eq!(
            ctx.finish(),
            "<div class=\"ud-switcher\" role=\"group\" aria-label=\"Variants\">\
             <button type=\"button\" class=\"ud-variant\" data-variant=\"x\" aria-pressed=\"false\">x</button>\
             <button type=\"button\" class=\"ud-variant is-active\" data-variant=\"y\" aria-pressed=\"true\">y</button>\
             </div>"
        );
    }
}
