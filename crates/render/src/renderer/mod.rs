//! Rendering primitives: options, the HTML context, and prose handling.

mod context;
pub mod prose;

pub use context::Context;

/// Rendering options for family pages.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Whether prose fields are rendered as inline Markdown.
    #[serde(default = "default_true")]
    pub markdown_prose: bool,
    /// Whether section headings get `id` anchors.
    #[serde(default = "default_true")]
    pub heading_anchors: bool,
    /// Prefix for the renderer's own class names (`ud-section`, `ud-chip`, ...).
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,
}

fn default_true() -> bool {
    true
}

fn default_class_prefix() -> String {
    "ud".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            markdown_prose: default_true(),
            heading_anchors: default_true(),
            class_prefix: default_class_prefix(),
        }
    }
}
