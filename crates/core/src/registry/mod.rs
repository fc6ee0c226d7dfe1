//! Slug → family lookup table merged from independently authored modules.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ContentError, SchemaDiagnostics};
use crate::schema::UtilityContent;
use crate::validate::validate_content;

/// One authored module: a set of families keyed by slug.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentModule {
    families: BTreeMap<String, UtilityContent>,
}

impl ContentModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a family in this module.
    pub fn with(mut self, slug: impl Into<String>, content: UtilityContent) -> Self {
        self.families.insert(slug.into(), content);
        self
    }

    /// Parses a YAML mapping of `slug: UtilityContent`.
    pub fn from_yaml_str(source: &str) -> Result<Self, ContentError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON object of `slug: UtilityContent`.
    pub fn from_json_str(source: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl FromIterator<(String, UtilityContent)> for ContentModule {
    fn from_iter<I: IntoIterator<Item = (String, UtilityContent)>>(iter: I) -> Self {
        Self {
            families: iter.into_iter().collect(),
        }
    }
}

/// How the validation pass treats inconsistent content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip validation entirely.
    Off,
    /// Log every finding and keep the content.
    #[default]
    Warn,
    /// Fail the build on the first family with error-level findings.
    Strict,
}

/// Registry construction options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryOptions {
    #[serde(default)]
    pub validation: ValidationMode,
}

/// Collects modules before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<String, UtilityContent>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a module. On slug collision the later module's family replaces
    /// the earlier one entirely; sub-fields are never merged.
    pub fn register(mut self, module: ContentModule) -> Self {
        for (slug, content) in module.families {
            if self.entries.insert(slug.clone(), content).is_some() {
                log::debug!("Content for '{}' replaced by a later module", slug);
            }
        }
        self
    }

    /// Freezes the registry after running the validation pass.
    pub fn build(
        self,
        options: &RegistryOptions,
    ) -> Result<(ContentRegistry, SchemaDiagnostics), ContentError> {
        let mut diagnostics = SchemaDiagnostics::new();

        if options.validation != ValidationMode::Off {
            for (slug, content) in &self.entries {
                let issues = validate_content(slug, content);
                if options.validation == ValidationMode::Strict
                    && issues.iter().any(|issue| issue.is_error())
                {
                    return Err(ContentError::InvalidSchema {
                        slug: slug.clone(),
                        issues: issues.into_iter().filter(|i| i.is_error()).collect(),
                    });
                }
                for issue in &issues {
                    log::warn!("{}", issue);
                }
                diagnostics.extend(issues);
            }
        }

        Ok((
            ContentRegistry {
                entries: self.entries,
            },
            diagnostics,
        ))
    }
}

/// Immutable slug → [`UtilityContent`] table.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    entries: BTreeMap<String, UtilityContent>,
}

impl ContentRegistry {
    /// Shorthand for a builder with `modules` registered in order.
    pub fn from_modules(
        modules: impl IntoIterator<Item = ContentModule>,
        options: &RegistryOptions,
    ) -> Result<(Self, SchemaDiagnostics), ContentError> {
        modules
            .into_iter()
            .fold(RegistryBuilder::new(), RegistryBuilder::register)
            .build(options)
    }

    /// Looks up a family. `None` is the "not found" case.
    pub fn lookup(&self, slug: &str) -> Option<&UtilityContent> {
        self.entries.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Registered slugs in sorted order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UtilityContent)> {
        self.entries.iter().map(|(slug, content)| (slug.as_str(), content))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
