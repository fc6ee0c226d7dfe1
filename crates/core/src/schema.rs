//! Content schema describing one utility family declaratively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::playground::PlaygroundSpec;

/// Map keyed by variant key (a member of [`UtilityContent::types`]).
pub type VariantMap<T> = BTreeMap<String, T>;

/// Documentation for one utility family (e.g. align-items).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UtilityContent {
    /// Page title.
    pub title: String,
    /// Introductory prose.
    pub description: String,
    /// Mental-model bullet points, in display order.
    #[serde(default)]
    pub mental_model_features: Vec<String>,
    /// Free-text classification label (e.g. "Layout layer").
    #[serde(default)]
    pub layer_assignment: String,
    /// Optional side-by-side comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_table: Option<ComparisonTable>,
    /// Variant keys. Order defines display order and the default selection.
    pub types: Vec<String>,
    /// One diagram per variant.
    #[serde(default)]
    pub diagrams: VariantMap<Diagram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<VariantMap<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_use_cases: Option<VariantMap<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<VariantMap<Vec<CodeExample>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_mistakes: Option<VariantMap<Vec<Mistake>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_sections: Option<Vec<AdditionalSection>>,
    /// Declarative playgrounds rendered on the family page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub playgrounds: Vec<PlaygroundSpec>,
}

/// Comparison table with a header row and feature rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub title: String,
    /// Header cells. The first column labels the row feature.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

/// One row of a [`ComparisonTable`].
///
/// `values` is expected to hold `columns.len() - 1` cells; the renderer pads
/// or truncates rows that do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub feature: String,
    pub values: Vec<String>,
}

/// Visual explanation of one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    pub description: String,
    /// Classes applied to the diagram's demo container.
    pub classes: String,
}

/// Copyable code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub title: String,
    pub note: String,
    pub code: String,
}

/// How loudly a mistake call-out should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MistakeLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

impl MistakeLevel {
    /// Stable lowercase name, used in class names and data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            MistakeLevel::Info => "info",
            MistakeLevel::Warning => "warning",
            MistakeLevel::Critical => "critical",
        }
    }
}

/// A common mistake call-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    pub title: String,
    pub reason: String,
    pub example: String,
    #[serde(default)]
    pub level: MistakeLevel,
}

/// Extra titled bullet list, keyed by variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSection {
    pub title: String,
    pub content: VariantMap<Vec<String>>,
}

/// Everything a page shows for one selected variant.
///
/// Every field is pulled from the per-variant maps with exactly the selected
/// key; absent entries are `None` or empty, never another variant's data.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantView<'a> {
    pub key: &'a str,
    pub diagram: Option<&'a Diagram>,
    pub benefits: Option<&'a [String]>,
    pub common_use_cases: Option<&'a [String]>,
    pub examples: Option<&'a [CodeExample]>,
    pub common_mistakes: Option<&'a [Mistake]>,
    /// `(section title, bullets)` for each additional section that has
    /// content for this key, in section order.
    pub additional_sections: Vec<(&'a str, &'a [String])>,
}

impl UtilityContent {
    /// Creates a family with the given variants and no optional content.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            types: types.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// The variant shown before any interaction.
    pub fn default_variant(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Returns true if `key` is one of this family's variants.
    pub fn has_variant(&self, key: &str) -> bool {
        self.types.iter().any(|t| t == key)
    }

    /// Projects the per-variant maps onto a single key.
    pub fn variant<'a>(&'a self, key: &'a str) -> VariantView<'a> {
        fn list<'a, T>(map: &'a Option<VariantMap<Vec<T>>>, key: &str) -> Option<&'a [T]> {
            map.as_ref()
                .and_then(|m| m.get(key))
                .map(|items| items.as_slice())
        }

        let additional_sections = self
            .additional_sections
            .iter()
            .flatten()
            .filter_map(|section| {
                section
                    .content
                    .get(key)
                    .map(|items| (section.title.as_str(), items.as_slice()))
            })
            .collect();

        VariantView {
            key,
            diagram: self.diagrams.get(key),
            benefits: list(&self.benefits, key),
            common_use_cases: list(&self.common_use_cases, key),
            examples: list(&self.examples, key),
            common_mistakes: list(&self.common_mistakes, key),
            additional_sections,
        }
    }

    /// Every `(field name, key)` referenced by a per-variant map.
    pub(crate) fn referenced_keys(&self) -> Vec<(&'static str, &str)> {
        fn keys<'a, T>(
            field: &'static str,
            map: Option<&'a VariantMap<T>>,
            out: &mut Vec<(&'static str, &'a str)>,
        ) {
            if let Some(map) = map {
                out.extend(map.keys().map(|k| (field, k.as_str())));
            }
        }

        let mut out = Vec::new();
        keys("diagrams", Some(&self.diagrams), &mut out);
        keys("benefits", self.benefits.as_ref(), &mut out);
        keys("commonUseCases", self.common_use_cases.as_ref(), &mut out);
        keys("examples", self.examples.as_ref(), &mut out);
        keys("commonMistakes", self.common_mistakes.as_ref(), &mut out);
        for section in self.additional_sections.iter().flatten() {
            keys("additionalSections", Some(&section.content), &mut out);
        }
        out
    }
}
