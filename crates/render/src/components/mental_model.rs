use utilidoc_core::UtilityContent;

use crate::renderer::Context;

/// Renders the mental-model panel: layer label plus feature bullets.
///
/// Writes nothing when the family has neither.
pub fn mental_model(ctx: &mut Context, content: &UtilityContent) {
    if content.mental_model_features.is_empty() && content.layer_assignment.is_empty() {
        return;
    }

    ctx.section("mental-model", "Mental model", |ctx| {
        if !content.layer_assignment.is_empty() {
            ctx.open("p", "layer");
            ctx.push_text(&content.layer_assignment);
            ctx.close("p");
        }
        if !content.mental_model_features.is_empty() {
            ctx.bullet_list("features", &content.mental_model_features);
        }
    });
}
