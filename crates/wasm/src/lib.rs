use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use utilidoc_core::{
    AutoCycle, ClipboardOptions, ClipboardService, CycleOptions, Playground, PlaygroundSpec,
    default_registry,
};
use utilidoc_render::{FamilyPage, PlaygroundOutput, RenderOptions};

mod host;

pub use host::{BrowserClipboard, BrowserScheduler};

// ============================================================================
// Render Config
// ============================================================================

/// Configuration accepted by the page and render functions.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmRenderConfig {
    #[serde(default, alias = "markdownProse")]
    pub markdown_prose: Option<bool>,
    #[serde(default, alias = "headingAnchors")]
    pub heading_anchors: Option<bool>,
    #[serde(default, alias = "classPrefix")]
    pub class_prefix: Option<String>,
    /// How long the copied indicator stays up, in milliseconds.
    #[serde(default, alias = "feedbackMs")]
    pub feedback_ms: Option<u64>,
}

fn parse_config(config: JsValue) -> WasmRenderConfig {
    if config.is_undefined() || config.is_null() {
        return WasmRenderConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_render_options(cfg: &WasmRenderConfig) -> RenderOptions {
    let defaults = RenderOptions::default();
    RenderOptions {
        markdown_prose: cfg.markdown_prose.unwrap_or(defaults.markdown_prose),
        heading_anchors: cfg.heading_anchors.unwrap_or(defaults.heading_anchors),
        class_prefix: cfg.class_prefix.clone().unwrap_or(defaults.class_prefix),
    }
}

fn build_clipboard_options(cfg: &WasmRenderConfig) -> ClipboardOptions {
    let mut options = ClipboardOptions::default();
    if let Some(feedback_ms) = cfg.feedback_ms {
        options.feedback_ms = feedback_ms;
    }
    options
}

fn browser_copier(cfg: &WasmRenderConfig) -> ClipboardService<String> {
    ClipboardService::new(
        Rc::new(BrowserClipboard),
        Rc::new(BrowserScheduler),
        build_clipboard_options(cfg),
    )
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Registry API
// ============================================================================

/// One entry of the built-in family index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySummary {
    pub slug: String,
    pub title: String,
    pub types: Vec<String>,
    pub default_variant: Option<String>,
}

/// Lists the built-in families, sorted by slug.
///
/// # Returns
///
/// A JavaScript array of `{ slug, title, types, defaultVariant }` objects.
#[wasm_bindgen]
pub fn families() -> Result<JsValue, JsError> {
    let summaries: Vec<FamilySummary> = default_registry()
        .iter()
        .map(|(slug, content)| FamilySummary {
            slug: slug.to_string(),
            title: content.title.clone(),
            types: content.types.clone(),
            default_variant: content.default_variant().map(str::to_string),
        })
        .collect();
    to_js(&summaries)
}

/// Renders a built-in family page to static HTML.
///
/// # Arguments
///
/// * `slug` - Family slug, e.g. `"align-items"`
/// * `variant` - Variant key to select; the first variant when omitted
/// * `config` - Optional render configuration (JsValue)
///
/// # Returns
///
/// The page HTML, or `undefined` for an unknown slug. Unknown variant keys
/// are an error.
#[wasm_bindgen(js_name = render_family)]
pub fn render_family(
    slug: &str,
    variant: Option<String>,
    config: JsValue,
) -> Result<Option<String>, JsError> {
    let cfg = parse_config(config);
    let options = build_render_options(&cfg);
    Ok(utilidoc_render::render_family(
        default_registry(),
        slug,
        variant.as_deref(),
        &options,
    )?)
}

// ============================================================================
// Interactive Page
// ============================================================================

/// A mounted, interactive family page.
///
/// Owns the page's variant selector, its playgrounds, and a clipboard service
/// backed by `navigator.clipboard`. Call `render()` after any change; register
/// `onChange` to learn when the copied indicator clears itself.
#[wasm_bindgen]
pub struct WasmFamilyPage {
    page: FamilyPage<'static>,
    options: RenderOptions,
    copier: ClipboardService<String>,
}

#[wasm_bindgen]
impl WasmFamilyPage {
    #[wasm_bindgen(constructor)]
    pub fn new(slug: &str, config: JsValue) -> Result<WasmFamilyPage, JsError> {
        let content = default_registry()
            .lookup(slug)
            .ok_or_else(|| JsError::new(&format!("Unknown family '{}'", slug)))?;
        let cfg = parse_config(config);
        Ok(WasmFamilyPage {
            page: FamilyPage::mount(slug, content)?,
            options: build_render_options(&cfg),
            copier: browser_copier(&cfg),
        })
    }

    pub fn slug(&self) -> String {
        self.page.slug().to_string()
    }

    #[wasm_bindgen(js_name = currentVariant)]
    pub fn current_variant(&self) -> String {
        self.page.current_variant().to_string()
    }

    #[wasm_bindgen(js_name = selectVariant)]
    pub fn select_variant(&mut self, key: &str) -> Result<(), JsError> {
        Ok(self.page.select_variant(key)?)
    }

    #[wasm_bindgen(js_name = playgroundIds)]
    pub fn playground_ids(&self) -> Vec<String> {
        self.page.playground_ids().map(str::to_string).collect()
    }

    #[wasm_bindgen(js_name = selectToken)]
    pub fn select_token(
        &mut self,
        playground: &str,
        dimension: &str,
        token: &str,
    ) -> Result<(), JsError> {
        Ok(self.page.select_token(playground, dimension, token)?)
    }

    /// `{ classString, markup, previewHtml }` of one playground.
    #[wasm_bindgen(js_name = playgroundOutput)]
    pub fn playground_output(&self, playground: &str) -> Result<JsValue, JsError> {
        let output = self
            .page
            .playground_output(playground)
            .ok_or_else(|| JsError::new(&format!("Unknown playground '{}'", playground)))?;
        to_js(&output)
    }

    /// Copies `text`; on success `identity` shows as copied on the next render.
    pub fn copy(&self, text: &str, identity: &str) {
        self.copier.copy(text, identity.to_string());
    }

    pub fn copied(&self) -> Option<String> {
        self.copier.copied()
    }

    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.copier.on_change(move || {
            let _ = callback.call0(&JsValue::NULL);
        });
    }

    pub fn render(&self) -> String {
        self.page.render(&self.options, self.copier.copied().as_deref())
    }
}

// ============================================================================
// Standalone Playground
// ============================================================================

/// A playground built from a JS descriptor:
/// `{ id, title?, dimensions: [{ id, label?, tokens, default? }], template }`.
#[wasm_bindgen]
pub struct WasmPlayground {
    spec: PlaygroundSpec,
    state: Playground,
}

#[wasm_bindgen]
impl WasmPlayground {
    #[wasm_bindgen(constructor)]
    pub fn new(spec: JsValue) -> Result<WasmPlayground, JsError> {
        let spec: PlaygroundSpec = serde_wasm_bindgen::from_value(spec)
            .map_err(|e| JsError::new(&format!("Invalid playground: {}", e)))?;
        let state = spec.instantiate()?;
        Ok(WasmPlayground { spec, state })
    }

    pub fn select(&mut self, dimension: &str, token: &str) -> Result<(), JsError> {
        Ok(self.state.select(dimension, token)?)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn token(&self, dimension: &str) -> Option<String> {
        self.state.token(dimension).map(str::to_string)
    }

    #[wasm_bindgen(js_name = classString)]
    pub fn class_string(&self) -> String {
        self.state.class_string()
    }

    pub fn markup(&self) -> String {
        self.state.markup(&self.spec.markup_template())
    }

    /// `{ classString, markup, previewHtml }` for the current selection.
    pub fn output(&self) -> Result<JsValue, JsError> {
        to_js(&PlaygroundOutput::derive(
            &self.state,
            &self.spec.markup_template(),
        ))
    }
}

// ============================================================================
// Clipboard
// ============================================================================

/// Click-to-copy with a transient copied indicator, for hosts that render
/// their own markup.
#[wasm_bindgen]
pub struct WasmCopier {
    service: ClipboardService<String>,
}

#[wasm_bindgen]
impl WasmCopier {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> WasmCopier {
        WasmCopier {
            service: browser_copier(&parse_config(config)),
        }
    }

    pub fn copy(&self, text: &str, identity: &str) {
        self.service.copy(text, identity.to_string());
    }

    pub fn copied(&self) -> Option<String> {
        self.service.copied()
    }

    #[wasm_bindgen(js_name = isCopied)]
    pub fn is_copied(&self, identity: &str) -> bool {
        self.service.is_copied(&identity.to_string())
    }

    /// `{ kind: "ok" | "denied" | "unsupported" }` of the latest completed
    /// write, or `undefined` before the first one.
    #[wasm_bindgen(js_name = lastOutcome)]
    pub fn last_outcome(&self) -> Result<JsValue, JsError> {
        match self.service.last_outcome() {
            Some(outcome) => to_js(&outcome),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: js_sys::Function) {
        self.service.on_change(move || {
            let _ = callback.call0(&JsValue::NULL);
        });
    }
}

// ============================================================================
// Auto-cycling Demo
// ============================================================================

/// Frame counter for an auto-advancing demo, driven by `setTimeout`.
///
/// Calling `free()` (or letting the JS wrapper be collected) cancels the
/// pending tick.
#[wasm_bindgen]
pub struct WasmAutoCycle {
    cycle: AutoCycle,
}

#[wasm_bindgen]
impl WasmAutoCycle {
    /// `config` accepts `{ intervalMs }`; the default interval is 2000 ms.
    #[wasm_bindgen(constructor)]
    pub fn new(frames: usize, config: JsValue) -> WasmAutoCycle {
        let options: CycleOptions = if config.is_undefined() || config.is_null() {
            CycleOptions::default()
        } else {
            serde_wasm_bindgen::from_value(config).unwrap_or_default()
        };
        WasmAutoCycle {
            cycle: AutoCycle::start(frames, Rc::new(BrowserScheduler), &options),
        }
    }

    pub fn current(&self) -> usize {
        self.cycle.current()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.cycle.is_running()
    }

    pub fn pause(&self) {
        self.cycle.pause();
    }

    pub fn resume(&self) {
        self.cycle.resume();
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&self, index: usize) {
        self.cycle.jump_to(index);
    }

    #[wasm_bindgen(js_name = onTick)]
    pub fn on_tick(&self, callback: js_sys::Function) {
        self.cycle.on_tick(move || {
            let _ = callback.call0(&JsValue::NULL);
        });
    }
}
