use utilidoc_core::{Mistake, MistakeLevel};

use crate::renderer::Context;

fn role(level: MistakeLevel) -> &'static str {
    match level {
        MistakeLevel::Critical => "alert",
        MistakeLevel::Warning | MistakeLevel::Info => "note",
    }
}

/// Renders common-mistake call-outs, one `<aside>` per mistake.
pub fn mistake_callouts(ctx: &mut Context, mistakes: &[Mistake]) {
    if mistakes.is_empty() {
        return;
    }

    ctx.section("mistakes", "Common mistakes", |ctx| {
        for mistake in mistakes {
            let class = format!(
                "{} {}",
                ctx.class("callout"),
                ctx.class(&format!("callout-{}", mistake.level.as_str()))
            );
            ctx.push_raw("<aside class=\"");
            ctx.push_attr_value(&class);
            ctx.push_raw(&format!(
                "\" role=\"{}\" data-level=\"{}\">",
                role(mistake.level),
                mistake.level.as_str()
            ));
            ctx.push_raw("<strong>");
            ctx.push_text(&mistake.title);
            ctx.push_raw("</strong>");
            ctx.paragraph("mistake-reason", &mistake.reason);
            if !mistake.example.is_empty() {
                ctx.push_code(&mistake.example, Some("html"));
            }
            ctx.push_raw("</aside>");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderOptions;

    fn mistake(level: MistakeLevel, example: &str) -> Mistake {
        Mistake {
            title: "Wrong axis".into(),
            reason: "Columns swap the axes.".into(),
            example: example.into(),
            level,
        }
    }

    #[test]
    fn level_drives_class_and_role() {
        let options = RenderOptions::default();
        let mut ctx = Context::new(&options);
        mistake_callouts(
            &mut ctx,
            &[
                mistake(MistakeLevel::Critical, "<div class=\"flex-col\">"),
                mistake(MistakeLevel::Info, ""),
            ],
        );
        let html = ctx.finish();
        assert!(html.contains(
            "<aside class=\"ud-callout ud-callout-critical\" role=\"alert\" data-level=\"critical\">"
        ));
        assert!(html.contains(
            "<aside class=\"ud-callout ud-callout-info\" role=\"note\" data-level=\"info\">"
        ));
        assert_eq!(html.matches("<pre").count(), 1);
        assert!(html.contains("&lt;div class=\"flex-col\"&gt;"));
    }

    #[test]
    fn empty_list_writes_nothing() {
        let options = RenderOptions::default();
        let mut ctx = Context::new(&options);
        mistake_callouts(&mut ctx, &[]);
        assert_eq!(ctx.finish(), "");
    }
}
