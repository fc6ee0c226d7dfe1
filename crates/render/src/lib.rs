//! utilidoc HTML rendering: presentation components, the generic family page,
//! and whole-site rendering.

/// Presentation components (pure projections of schema data).
pub mod components;
/// The generic utility family page.
pub mod page;
/// Rendering options, HTML context, and prose handling.
pub mod renderer;
/// Parallel rendering of every registered family.
pub mod site;

pub use components::PlaygroundOutput;
pub use page::FamilyPage;
pub use renderer::{Context, RenderOptions};
pub use site::{PageResult, SiteOptions, SiteRenderResult, SiteStats, render_site};

use utilidoc_core::{ContentError, ContentRegistry};

/// Renders one family from `registry` with `variant` selected (or the
/// default variant). Returns `Ok(None)` for an unknown slug.
pub fn render_family(
    registry: &ContentRegistry,
    slug: &str,
    variant: Option<&str>,
    options: &RenderOptions,
) -> Result<Option<String>, ContentError> {
    let Some(content) = registry.lookup(slug) else {
        return Ok(None);
    };
    let mut page = FamilyPage::mount(slug, content)?;
    if let Some(key) = variant {
        page.select_variant(key)?;
    }
    Ok(Some(page.render(options, None)))
}
