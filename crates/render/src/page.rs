//! The generic utility family page.
//!
//! A [`FamilyPage`] is the single rendering path for every family: it owns the
//! page's variant selector and playground instances, and projects the content
//! schema through the presentation components on each [`FamilyPage::render`].

use utilidoc_core::{
    ContentError, Playground, PlaygroundSpec, UtilityContent, VariantSelector, VariantView,
};

use crate::components;
use crate::renderer::{Context, RenderOptions};

struct MountedPlayground {
    spec: PlaygroundSpec,
    state: Playground,
}

/// A mounted family page.
pub struct FamilyPage<'c> {
    slug: String,
    content: &'c UtilityContent,
    selector: VariantSelector,
    playgrounds: Vec<MountedPlayground>,
}

impl<'c> FamilyPage<'c> {
    /// Mounts a page: selects the first variant and instantiates every
    /// playground declared in the content.
    pub fn mount(slug: impl Into<String>, content: &'c UtilityContent) -> Result<Self, ContentError> {
        let slug = slug.into();
        let selector = VariantSelector::new(content.types.clone()).map_err(|_| {
            ContentError::EmptyVariants { slug: slug.clone() }
        })?;
        let mut page = Self {
            slug,
            content,
            selector,
            playgrounds: Vec::new(),
        };
        for spec in &content.playgrounds {
            page.add_playground(spec.clone())?;
        }
        Ok(page)
    }

    /// Adds a playground declared outside the content (page-level descriptor).
    pub fn with_playground(mut self, spec: PlaygroundSpec) -> Result<Self, ContentError> {
        self.add_playground(spec)?;
        Ok(self)
    }

    fn add_playground(&mut self, spec: PlaygroundSpec) -> Result<(), ContentError> {
        let state = spec.instantiate()?;
        self.playgrounds.push(MountedPlayground { spec, state });
        Ok(())
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn content(&self) -> &'c UtilityContent {
        self.content
    }

    pub fn selector(&self) -> &VariantSelector {
        &self.selector
    }

    /// Currently selected variant key.
    pub fn current_variant(&self) -> &str {
        self.selector.current()
    }

    /// Variant-scoped content for the current selection.
    pub fn view(&self) -> VariantView<'_> {
        self.selector.view(self.content)
    }

    /// Switches the displayed variant.
    pub fn select_variant(&mut self, key: &str) -> Result<(), ContentError> {
        self.selector.select(key)
    }

    /// Ids of the mounted playgrounds, in render order.
    pub fn playground_ids(&self) -> impl Iterator<Item = &str> {
        self.playgrounds.iter().map(|p| p.spec.id.as_str())
    }

    pub fn playground(&self, id: &str) -> Option<&Playground> {
        self.find(id).map(|p| &p.state)
    }

    /// Derived class string, markup, and preview of one playground.
    pub fn playground_output(&self, id: &str) -> Option<components::PlaygroundOutput> {
        self.find(id).map(|p| {
            components::PlaygroundOutput::derive(&p.state, &p.spec.markup_template())
        })
    }

    /// Changes one dimension of one playground.
    pub fn select_token(
        &mut self,
        playground: &str,
        dimension: &str,
        token: &str,
    ) -> Result<(), ContentError> {
        let mounted = self
            .playgrounds
            .iter_mut()
            .find(|p| p.spec.id == playground)
            .ok_or_else(|| ContentError::UnknownDimension {
                id: format!("{}/{}", playground, dimension),
            })?;
        mounted.state.select(dimension, token)
    }

    fn find(&self, id: &str) -> Option<&MountedPlayground> {
        self.playgrounds.iter().find(|p| p.spec.id == id)
    }

    /// Renders the full page.
    ///
    /// `copied` is the identity currently shown by the clipboard indicator,
    /// if any. Sections whose optional schema field is absent are omitted.
    pub fn render(&self, options: &RenderOptions, copied: Option<&str>) -> String {
        let mut ctx = Context::new(options);
        let content = self.content;
        let view = self.view();

        ctx.push_raw("<article class=\"");
        let class = ctx.class("family");
        ctx.push_attr_value(&class);
        ctx.push_raw("\" data-family=\"");
        ctx.push_attr_value(&self.slug);
        ctx.push_raw("\" data-variant=\"");
        ctx.push_attr_value(view.key);
        ctx.push_raw("\">");

        ctx.open("header", "header");
        ctx.heading(1, &content.title);
        if !content.description.is_empty() {
            ctx.paragraph("description", &content.description);
        }
        ctx.close("header");

        components::mental_model(&mut ctx, content);
        if let Some(table) = &content.comparison_table {
            components::comparison_table(&mut ctx, table);
        }

        ctx.section("variants", "Variants", |ctx| {
            components::variant_switcher(ctx, &self.selector);
            if let Some(diagram) = view.diagram {
                components::diagram(ctx, diagram);
            }
        });

        components::utility_grid(&mut ctx, &content.types, copied);

        if let Some(benefits) = view.benefits {
            components::tips_list(&mut ctx, "benefits", "Benefits", benefits);
        }
        if let Some(use_cases) = view.common_use_cases {
            components::tips_list(&mut ctx, "use-cases", "Common use cases", use_cases);
        }
        if let Some(examples) = view.examples {
            components::example_cards(&mut ctx, view.key, examples, copied);
        }
        if let Some(mistakes) = view.common_mistakes {
            components::mistake_callouts(&mut ctx, mistakes);
        }
        for (title, items) in &view.additional_sections {
            components::tips_list(&mut ctx, "additional", title, items);
        }

        for mounted in &self.playgrounds {
            components::playground(
                &mut ctx,
                &mounted.spec.id,
                &mounted.spec.title,
                &mounted.state,
                &mounted.spec.markup_template(),
                copied,
            );
        }

        ctx.push_raw("</article>");
        ctx.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utilidoc_core::{CodeExample, ControlDimension, Diagram, default_registry};

    fn two_variant_family() -> UtilityContent {
        let mut content = UtilityContent::new("Demo", "A *demo* family.", ["x", "y"]);
        for key in ["x", "y"] {
            content.diagrams.insert(
                key.to_string(),
                Diagram {
                    title: format!("diagram {}", key),
                    description: String::new(),
                    classes: format!("demo-{}", key),
                },
            );
        }
        content.examples = Some(
            [(
                "y".to_string(),
                vec![CodeExample {
                    title: "Only y".into(),
                    note: String::new(),
                    code: "<i class=\"y\"></i>".into(),
                }],
            )]
            .into(),
        );
        content
    }

    #[test]
    fn switching_variant_switches_panels() {
        let content = two_variant_family();
        let mut page = FamilyPage::mount("demo", &content).unwrap();
        let options = RenderOptions::default();

        let before = page.render(&options, None);
        assert!(before.contains("data-variant=\"x\">"));
        assert!(before.contains("diagram x"));
        assert!(!before.contains("Only y"));

        page.select_variant("y").unwrap();
        let after = page.render(&options, None);
        assert!(after.contains("diagram y"));
        assert!(!after.contains("diagram x"));
        assert!(after.contains("Only y"));
    }

    #[test]
    fn absent_sections_are_omitted() {
        let content = UtilityContent::new("Bare", "", ["only"]);
        let page = FamilyPage::mount("bare", &content).unwrap();
        let html = page.render(&RenderOptions::default(), None);

        for class in [
            "ud-comparison",
            "ud-mental-model",
            "ud-benefits",
            "ud-examples",
            "ud-mistakes",
            "ud-playground",
            "ud-description",
            "ud-diagram",
        ] {
            assert!(!html.contains(class), "{} should be omitted", class);
        }
        assert!(html.contains("ud-switcher"));
        assert!(html.contains("ud-utility-grid"));
    }

    #[test]
    fn multi_paragraph_description_is_not_nested_in_p() {
        let content = UtilityContent::new("Long", "First.\n\nSecond.", ["only"]);
        let page = FamilyPage::mount("long", &content).unwrap();
        let html = page.render(&RenderOptions::default(), None);
        assert!(html.contains("<div class=\"ud-description\"><p>First.</p>"));
        assert!(!html.contains("<p class=\"ud-description\">"));
    }

    #[test]
    fn mount_rejects_family_without_variants() {
        let content = UtilityContent::new("Empty", "", Vec::<String>::new());
        assert!(matches!(
            FamilyPage::mount("empty", &content),
            Err(ContentError::EmptyVariants { slug }) if slug == "empty"
        ));
    }

    #[test]
    fn page_level_playground_descriptor() {
        let content = two_variant_family();
        let mut page = FamilyPage::mount("demo", &content)
            .unwrap()
            .with_playground(PlaygroundSpec {
                id: "demo-pg".into(),
                title: "Try it".into(),
                dimensions: vec![ControlDimension::new("size", ["s", "m", "l"])],
                template: "<b class=\"{classes}\"></b>".into(),
            })
            .unwrap();

        page.select_token("demo-pg", "size", "l").unwrap();
        assert!(page.select_token("missing", "size", "l").is_err());
        let output = page.playground_output("demo-pg").unwrap();
        assert_eq!(output.markup, "<b class=\"l\"></b>");
        assert!(
            page.render(&RenderOptions::default(), None)
                .contains("<div class=\"ud-preview\"><b class=\"l\"></b></div>")
        );
    }

    #[test]
    fn copied_indicator_reaches_chips() {
        let content = default_registry().lookup("flex").unwrap();
        let page = FamilyPage::mount("flex", content).unwrap();
        let html = page.render(&RenderOptions::default(), Some("chip:flex-none"));
        assert_eq!(html.matches("Copied!").count(), 1);
        assert!(html.contains("data-copy-id=\"chip:flex-none\">Copied!"));
    }

    #[test]
    fn builtin_flex_direction_has_live_playground() {
        let content = default_registry().lookup("flex-direction").unwrap();
        let mut page = FamilyPage::mount("flex-direction", content).unwrap();
        assert_eq!(page.playground_ids().collect::<Vec<_>>(), vec!["flex-layout"]);

        page.select_token("flex-layout", "direction", "flex-col").unwrap();
        let output = page.playground_output("flex-layout").unwrap();
        assert_eq!(output.class_string, "flex-col flex-nowrap gap-4 items-start");
        assert!(output.markup.starts_with("<div class=\"flex flex-col flex-nowrap gap-4 items-start\">"));
    }
}
