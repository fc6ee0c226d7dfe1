//! Per-page variant selection.

use crate::error::ContentError;
use crate::schema::{UtilityContent, VariantView};

/// Which variant of a multi-variant family is currently displayed.
///
/// There is no "nothing selected" state: construction picks the first key and
/// every transition targets a member of the family's `types`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelector {
    types: Vec<String>,
    current: usize,
}

/// A selectable variant, as offered to the switcher buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantOption<'a> {
    pub key: &'a str,
    pub selected: bool,
}

impl VariantSelector {
    /// Mounts a selector over `content.types`, selecting the first key.
    pub fn for_content(content: &UtilityContent) -> Result<Self, ContentError> {
        Self::new(content.types.clone()).map_err(|_| ContentError::EmptyVariants {
            slug: content.title.clone(),
        })
    }

    pub fn new(types: Vec<String>) -> Result<Self, ContentError> {
        if types.is_empty() {
            return Err(ContentError::EmptyVariants {
                slug: String::new(),
            });
        }
        Ok(Self { types, current: 0 })
    }

    /// Currently displayed key.
    pub fn current(&self) -> &str {
        &self.types[self.current]
    }

    /// Transitions to `key`. Unknown keys are rejected and the state is kept.
    pub fn select(&mut self, key: &str) -> Result<(), ContentError> {
        let index = self
            .types
            .iter()
            .position(|t| t == key)
            .ok_or_else(|| ContentError::UnknownVariant {
                key: key.to_string(),
            })?;
        if index != self.current {
            log::debug!("Variant {} -> {}", self.types[self.current], key);
        }
        self.current = index;
        Ok(())
    }

    /// Every key in display order with its selected flag.
    pub fn options(&self) -> impl Iterator<Item = VariantOption<'_>> {
        self.types
            .iter()
            .enumerate()
            .map(move |(i, key)| VariantOption {
                key,
                selected: i == self.current,
            })
    }

    /// The variant-scoped content to display for the current key.
    pub fn view<'a>(&'a self, content: &'a UtilityContent) -> VariantView<'a> {
        content.variant(self.current())
    }
}
