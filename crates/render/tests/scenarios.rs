//! End-to-end flows: registry → page → selection → rendered output.

use once_cell::sync::Lazy;
use utilidoc_core::{
    CodeExample, ContentModule, ContentRegistry, ControlDimension, MarkupTemplate, Playground,
    RegistryOptions, UtilityContent, default_registry,
};
use utilidoc_render::{FamilyPage, PlaygroundOutput, RenderOptions, render_family};

fn example(title: &str) -> CodeExample {
    CodeExample {
        title: title.to_string(),
        note: String::new(),
        code: format!("<p>{}</p>", title),
    }
}

static TWO_MODULES: Lazy<ContentRegistry> = Lazy::new(|| {
    ContentRegistry::from_modules(
        [
            ContentModule::new().with("a", UtilityContent::new("First", "", ["a1"])),
            ContentModule::new().with("b", UtilityContent::new("Second", "", ["b1"])),
        ],
        &RegistryOptions::default(),
    )
    .unwrap()
    .0
});

#[test]
fn registry_lookup_from_two_modules() {
    let registry = &*TWO_MODULES;
    assert_eq!(registry.lookup("a").unwrap().title, "First");
    assert!(registry.lookup("c").is_none());

    let options = RenderOptions::default();
    assert!(render_family(registry, "a", None, &options).unwrap().is_some());
    assert!(render_family(registry, "c", None, &options).unwrap().is_none());
    assert!(render_family(registry, "a", Some("zzz"), &options).is_err());
}

#[test]
fn later_render_sees_the_same_registry() {
    let html = render_family(&TWO_MODULES, "b", None, &RenderOptions::default())
        .unwrap()
        .unwrap();
    assert!(html.contains("<h1 id=\"second\">Second</h1>"));
}

#[test]
fn clicking_a_variant_swaps_examples() {
    let mut content = UtilityContent::new("Demo", "", ["x", "y"]);
    content.examples = Some(
        [
            ("x".to_string(), vec![example("example for x")]),
            ("y".to_string(), vec![example("example for y")]),
        ]
        .into(),
    );

    let mut page = FamilyPage::mount("demo", &content).unwrap();
    assert_eq!(page.current_variant(), "x");
    assert_eq!(page.view().examples.unwrap()[0].title, "example for x");

    page.select_variant("y").unwrap();
    assert_eq!(page.view().examples.unwrap()[0].title, "example for y");

    let html = page.render(&RenderOptions::default(), None);
    assert!(html.contains("example for y"));
    assert!(!html.contains("example for x"));
    assert!(html.contains("data-variant=\"y\" aria-pressed=\"true\""));
}

#[test]
fn playground_composes_latest_selection() {
    let mut playground = Playground::new(vec![
        ControlDimension::new("direction", ["row", "col"]),
        ControlDimension::new("gap", ["sm", "lg"]),
    ])
    .unwrap();
    assert_eq!(playground.class_string(), "row sm");

    playground.select("direction", "col").unwrap();
    playground.select("gap", "lg").unwrap();
    assert_eq!(playground.class_string(), "col lg");

    let template = MarkupTemplate::new("<div class=\"{classes}\"><span>item</span></div>");
    let output = PlaygroundOutput::derive(&playground, &template);
    assert!(output.markup.contains("col"));
    assert!(output.markup.contains("lg"));
    assert!(!output.markup.contains("row"));
    assert!(!output.markup.contains("sm"));
    assert_eq!(output.markup, playground.markup(&template));
}

#[test]
fn builtin_playground_markup_snapshot() {
    let content = default_registry().lookup("flex-direction").unwrap();
    let mut page = FamilyPage::mount("flex-direction", content).unwrap();
    page.select_token("flex-layout", "direction", "flex-col").unwrap();
    page.select_token("flex-layout", "gap", "gap-8").unwrap();

    let output = page.playground_output("flex-layout").unwrap();
    insta::assert_snapshot!(output.markup, @r#"
<div class="flex flex-col flex-nowrap gap-8 items-start">
  <div>1</div>
  <div>2</div>
  <div>3</div>
</div>
"#);
}

#[test]
fn rendering_is_deterministic() {
    let content = default_registry().lookup("align-items").unwrap();
    let page = FamilyPage::mount("align-items", content).unwrap();
    let options = RenderOptions::default();
    assert_eq!(page.render(&options, None), page.render(&options, None));
}

#[test]
fn builtin_align_items_page_structure() {
    let content = default_registry().lookup("align-items").unwrap();
    let mut page = FamilyPage::mount("align-items", content).unwrap();
    page.select_variant("items-center").unwrap();
    let html = page.render(&RenderOptions::default(), None);

    assert!(html.starts_with(
        "<article class=\"ud-family\" data-family=\"align-items\" data-variant=\"items-center\">"
    ));
    assert!(html.contains("<h1 id=\"align-items\">Align Items</h1>"));
    assert!(html.contains("<strong>cross axis</strong>"));
    assert!(html.contains("<h2 id=\"cross-axis-behavior\">Cross-axis behavior</h2>"));
    assert!(html.contains("<h2 id=\"benefits\">Benefits</h2>"));
    assert!(html.contains("<h2 id=\"common-use-cases\">Common use cases</h2>"));
    assert!(html.contains("<h3 id=\"icon-button\">Icon button</h3>"));
    assert!(html.contains("data-level=\"warning\""));
    assert!(html.contains("<h2 id=\"accessibility\">Accessibility</h2>"));
    assert!(html.ends_with("</article>"));
}
