use utilidoc_core::CodeExample;

use crate::renderer::Context;

/// Copy identity of an example's code block.
pub fn example_identity(variant: &str, index: usize) -> String {
    format!("example:{}:{}", variant, index)
}

/// Renders the example cards of one variant, each with a copy button.
pub fn example_cards(
    ctx: &mut Context,
    variant: &str,
    examples: &[CodeExample],
    copied: Option<&str>,
) {
    if examples.is_empty() {
        return;
    }

    ctx.section("examples", "Examples", |ctx| {
        for (index, example) in examples.iter().enumerate() {
            let identity = example_identity(variant, index);
            ctx.open("article", "example");
            ctx.heading(3, &example.title);
            if !example.note.is_empty() {
                ctx.paragraph("example-note", &example.note);
            }
            ctx.push_code(&example.code, Some("html"));
            ctx.copy_button(&example.code, &identity, copied == Some(identity.as_str()));
            ctx.close("article");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderOptions;

    #[test]
    fn cards_are_copyable() {
        let options = RenderOptions::default();
        let mut ctx = Context::new(&options);
        example_cards(
            &mut ctx,
            "items-center",
            &[CodeExample {
                title: "Icon button".into(),
                note: String::new(),
                code: "<button class=\"flex items-center\">".into(),
            }],
            Some("example:items-center:0"),
        );
        let html = ctx.finish();
        assert!(html.contains("<h3 id=\"icon-button\">Icon button</h3>"));
        assert!(!html.contains("ud-example-note"));
        assert!(html.contains("&lt;button class=\"flex items-center\"&gt;"));
        assert!(html.contains(
            "data-copy=\"&lt;button class=&quot;flex items-center&quot;&gt;\" data-copy-id=\"example:items-center:0\">Copied!"
        ));
    }
}
