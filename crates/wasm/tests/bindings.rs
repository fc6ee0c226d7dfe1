use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use utilidoc_wasm::{
    WasmAutoCycle, WasmCopier, WasmFamilyPage, WasmPlayground, families, render_family,
};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FamilySummary {
    slug: String,
    title: String,
    types: Vec<String>,
    default_variant: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PlaygroundOutput {
    class_string: String,
    markup: String,
    preview_html: String,
}

#[derive(Deserialize, Debug)]
struct Outcome {
    kind: String,
}

fn js(value: serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .expect("plain JS object")
}

#[wasm_bindgen_test]
fn lists_builtin_families() {
    let result = families().expect("families should serialize");
    let families: Vec<FamilySummary> =
        serde_wasm_bindgen::from_value(result).expect("deserialize families");

    let slugs: Vec<_> = families.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(slugs, vec!["align-items", "flex", "flex-direction", "justify-content"]);

    let align = &families[0];
    assert_eq!(align.title, "Align Items");
    assert_eq!(align.default_variant.as_deref(), Some("items-start"));
    assert_eq!(align.types.first(), align.default_variant.as_ref());
}

#[wasm_bindgen_test]
fn renders_family_with_config() {
    let config = js(serde_json::json!({ "classPrefix": "docs" }));
    let html = render_family("align-items", Some("items-center".into()), config)
        .expect("render should succeed")
        .expect("family exists");

    assert!(html.starts_with("<article class=\"docs-family\" data-family=\"align-items\" data-variant=\"items-center\">"));
}

#[wasm_bindgen_test]
fn unknown_slug_renders_nothing_and_unknown_variant_fails() {
    assert_eq!(render_family("grid-flow", None, JsValue::UNDEFINED).ok(), Some(None));
    assert!(render_family("align-items", Some("items-nowhere".into()), JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn page_tracks_variant_and_playground_state() {
    let mut page = WasmFamilyPage::new("flex-direction", JsValue::UNDEFINED).expect("mount");
    assert_eq!(page.slug(), "flex-direction");
    assert_eq!(page.playground_ids(), vec!["flex-layout".to_string()]);

    let first = page.current_variant();
    assert!(page.select_variant("not-a-variant").is_err());
    assert_eq!(page.current_variant(), first);

    page.select_token("flex-layout", "gap", "gap-8").expect("select token");
    assert!(page.select_token("flex-layout", "gap", "gap-99").is_err());

    let output: PlaygroundOutput =
        serde_wasm_bindgen::from_value(page.playground_output("flex-layout").expect("output"))
            .expect("deserialize output");
    assert_eq!(output.class_string, "flex-row flex-nowrap gap-8 items-start");
    assert_eq!(output.preview_html, output.markup);
    assert!(page.render().contains("<code>flex-row flex-nowrap gap-8 items-start</code>"));
}

#[wasm_bindgen_test]
fn unknown_family_cannot_mount() {
    assert!(WasmFamilyPage::new("grid-flow", JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn standalone_playground_from_descriptor() {
    let spec = js(serde_json::json!({
        "id": "box",
        "dimensions": [
            { "id": "pad", "tokens": ["p-2", "p-4"], "default": "p-4" },
            { "id": "round", "tokens": ["rounded", "rounded-full"] }
        ],
        "template": "<div class=\"{classes}\"></div>"
    }));
    let mut playground = WasmPlayground::new(spec).expect("valid playground");

    assert_eq!(playground.class_string(), "p-4 rounded");
    playground.select("round", "rounded-full").expect("select");
    assert_eq!(playground.markup(), "<div class=\"p-4 rounded-full\"></div>");
    assert!(playground.select("pad", "p-8").is_err());
    assert_eq!(playground.token("pad").as_deref(), Some("p-4"));

    playground.reset();
    assert_eq!(playground.class_string(), "p-4 rounded");
}

#[wasm_bindgen_test]
fn empty_playground_is_rejected() {
    let spec = js(serde_json::json!({
        "id": "none",
        "dimensions": [{ "id": "pad", "tokens": [] }],
        "template": "{classes}"
    }));
    assert!(WasmPlayground::new(spec).is_err());
}

#[wasm_bindgen_test]
fn copier_without_clipboard_api_reports_unsupported() {
    // The test runner's global has no navigator.clipboard.
    let copier = WasmCopier::new(JsValue::UNDEFINED);
    assert!(copier.last_outcome().expect("outcome").is_undefined());

    copier.copy("flex", "chip:flex");
    assert_eq!(copier.copied(), None);
    assert!(!copier.is_copied("chip:flex"));

    let outcome: Outcome =
        serde_wasm_bindgen::from_value(copier.last_outcome().expect("outcome")).expect("kind");
    assert_eq!(outcome.kind, "unsupported");
}

#[wasm_bindgen_test]
fn auto_cycle_pauses_and_jumps() {
    let cycle = WasmAutoCycle::new(3, js(serde_json::json!({ "intervalMs": 60_000 })));
    assert!(cycle.is_running());
    assert_eq!(cycle.current(), 0);

    cycle.jump_to(4);
    assert_eq!(cycle.current(), 1);

    cycle.pause();
    assert!(!cycle.is_running());
    cycle.resume();
    assert!(cycle.is_running());
    drop(cycle);
}

#[wasm_bindgen_test]
fn single_frame_cycle_never_starts() {
    let cycle = WasmAutoCycle::new(1, JsValue::UNDEFINED);
    assert!(!cycle.is_running());
}
