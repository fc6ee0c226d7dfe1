//! Built-in utility families shipped with the crate.
//!
//! Each family group lives in its own YAML module, authored independently
//! and merged in a fixed order. The merged registry is built once, on first
//! use, and shared for the lifetime of the process.

use once_cell::sync::Lazy;

use super::{ContentModule, ContentRegistry, RegistryOptions};
use crate::error::ContentError;

const ALIGNMENT_MODULE: &str = include_str!("content/alignment.yaml");
const FLEXBOX_MODULE: &str = include_str!("content/flexbox.yaml");

static DEFAULT_REGISTRY: Lazy<ContentRegistry> = Lazy::new(|| {
    match builtin_modules().and_then(|modules| {
        ContentRegistry::from_modules(modules, &RegistryOptions::default())
    }) {
        Ok((registry, _)) => registry,
        Err(err) => {
            log::warn!("Built-in content failed to load: {}", err);
            ContentRegistry::default()
        }
    }
});

/// Parses the built-in modules in merge order.
pub fn builtin_modules() -> Result<Vec<ContentModule>, ContentError> {
    Ok(vec![
        ContentModule::from_yaml_str(ALIGNMENT_MODULE)?,
        ContentModule::from_yaml_str(FLEXBOX_MODULE)?,
    ])
}

/// The process-wide registry of built-in families.
///
/// # Example
///
/// ```
/// use utilidoc_core::registry::defaults::default_registry;
///
/// let registry = default_registry();
/// assert!(registry.lookup("align-items").is_some());
/// assert!(registry.lookup("not-a-family").is_none());
/// ```
pub fn default_registry() -> &'static ContentRegistry {
    &DEFAULT_REGISTRY
}
