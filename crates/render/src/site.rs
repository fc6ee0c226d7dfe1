//! Whole-site rendering: every registered family's default page, in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use utilidoc_core::ContentRegistry;

use crate::page::FamilyPage;
use crate::renderer::RenderOptions;

/// Options for site rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOptions {
    /// Maximum number of threads to use. Defaults to rayon's global pool.
    #[serde(default)]
    pub max_threads: Option<usize>,
    #[serde(default)]
    pub render: RenderOptions,
}

/// Result for a single family page.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub slug: String,
    /// Rendered HTML (present on success).
    pub html: Option<String>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for a site render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub processing_time_ms: f64,
}

/// Every page result, sorted by slug, plus statistics.
#[derive(Debug, Clone, Serialize)]
pub struct SiteRenderResult {
    pub pages: Vec<PageResult>,
    pub stats: SiteStats,
}

/// Renders the default view of every family in `registry`.
///
/// A family that cannot be mounted (no variants, broken playground) is
/// reported in its [`PageResult`] and does not stop the others.
pub fn render_site(registry: &ContentRegistry, options: &SiteOptions) -> SiteRenderResult {
    let start = Instant::now();

    let pool = options.max_threads.and_then(|threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| log::warn!("Falling back to the global thread pool: {}", err))
            .ok()
    });

    let families: Vec<_> = registry.iter().collect();
    let total = families.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let render_one = |(slug, content): (&str, &utilidoc_core::UtilityContent)| -> PageResult {
        match FamilyPage::mount(slug, content) {
            Ok(page) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                PageResult {
                    slug: slug.to_string(),
                    html: Some(page.render(&options.render, None)),
                    error: None,
                }
            }
            Err(err) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("Skipping '{}': {}", slug, err);
                PageResult {
                    slug: slug.to_string(),
                    html: None,
                    error: Some(err.to_string()),
                }
            }
        }
    };

    let pages: Vec<PageResult> = if let Some(pool) = pool {
        pool.install(|| families.into_par_iter().map(render_one).collect())
    } else {
        families.into_par_iter().map(render_one).collect()
    };

    let elapsed = start.elapsed();

    SiteRenderResult {
        pages,
        stats: SiteStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}
