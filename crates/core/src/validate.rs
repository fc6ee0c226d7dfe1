//! Construction-time consistency checks for family content.

use std::collections::HashSet;

use crate::error::{ContentError, IssueKind, SchemaIssue};
use crate::schema::UtilityContent;
use crate::slug::is_valid_slug;

/// Checks one family and returns every finding.
///
/// Errors mark content that would silently vanish or break a page: missing
/// variants and per-variant keys that are not in `types`. Everything else is
/// a warning.
pub fn validate_content(slug: &str, content: &UtilityContent) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    if !is_valid_slug(slug) {
        issues.push(SchemaIssue::warning(slug, IssueKind::MalformedSlug));
    }

    if content.types.is_empty() {
        issues.push(SchemaIssue::error(slug, IssueKind::NoVariants));
    }

    let mut seen = HashSet::new();
    for key in &content.types {
        if !seen.insert(key.as_str()) {
            issues.push(SchemaIssue::warning(
                slug,
                IssueKind::DuplicateVariant { key: key.clone() },
            ));
        }
    }

    for (field, key) in content.referenced_keys() {
        if !seen.contains(key) {
            issues.push(SchemaIssue::error(
                slug,
                IssueKind::OrphanVariantKey {
                    field,
                    key: key.to_string(),
                },
            ));
        }
    }

    if let Some(table) = &content.comparison_table {
        let expected = table.columns.len().saturating_sub(1);
        for row in &table.rows {
            if row.values.len() != expected {
                issues.push(SchemaIssue::warning(
                    slug,
                    IssueKind::ComparisonRowArity {
                        feature: row.feature.clone(),
                        found: row.values.len(),
                        expected,
                    },
                ));
            }
        }
    }

    let mut playground_ids = HashSet::new();
    for spec in &content.playgrounds {
        if !playground_ids.insert(spec.id.as_str()) {
            issues.push(SchemaIssue::warning(
                slug,
                IssueKind::Playground {
                    id: spec.id.clone(),
                    message: "playground id is declared twice".to_string(),
                },
            ));
        }
        if spec.dimensions.is_empty() {
            issues.push(SchemaIssue::warning(
                slug,
                IssueKind::Playground {
                    id: spec.id.clone(),
                    message: "no control dimensions".to_string(),
                },
            ));
        }
        // Same rules as `Playground::new`, checked without instantiating.
        let mut dimension_ids = HashSet::new();
        for dimension in &spec.dimensions {
            let broken = if dimension.tokens.is_empty() {
                Some(ContentError::EmptyDimension {
                    id: dimension.id.clone(),
                })
            } else if !dimension_ids.insert(dimension.id.as_str()) {
                Some(ContentError::DuplicateDimension {
                    id: dimension.id.clone(),
                })
            } else {
                None
            };
            if let Some(err) = broken {
                issues.push(SchemaIssue::error(
                    slug,
                    IssueKind::Playground {
                        id: spec.id.clone(),
                        message: err.to_string(),
                    },
                ));
            }
            if let Some(default) = &dimension.default
                && !dimension.tokens.contains(default)
            {
                issues.push(SchemaIssue::warning(
                    slug,
                    IssueKind::Playground {
                        id: spec.id.clone(),
                        message: format!(
                            "default '{}' is not a token of dimension '{}'",
                            default, dimension.id
                        ),
                    },
                ));
            }
        }
    }

    issues
}
