use thiserror::Error;

/// Errors that can occur while loading, registering, or interacting with content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A YAML content module failed to parse.
    #[error("YAML content error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A JSON content module failed to parse.
    #[error("JSON content error: {0}")]
    Json(#[from] serde_json::Error),
    /// Strict validation rejected a family.
    #[error("Invalid content for '{slug}': {}", summarize(.issues))]
    InvalidSchema {
        /// Slug of the rejected family
        slug: String,
        /// Every error-level finding for that family
        issues: Vec<SchemaIssue>,
    },
    /// A family declares no variants, so nothing can be selected.
    #[error("Utility family '{slug}' declares no variants")]
    EmptyVariants {
        /// Slug (or title) of the family
        slug: String,
    },
    /// Selection of a key that is not one of the family's `types`.
    #[error("Unknown variant: {key}")]
    UnknownVariant {
        /// The rejected key
        key: String,
    },
    /// A playground dimension id that does not exist.
    #[error("Unknown playground dimension: {id}")]
    UnknownDimension {
        /// The rejected dimension id
        id: String,
    },
    /// A token outside the dimension's token set.
    #[error("Token '{token}' is not allowed in dimension '{dimension}'")]
    UnknownToken {
        /// Dimension id
        dimension: String,
        /// The rejected token
        token: String,
    },
    /// A playground dimension without any token.
    #[error("Playground dimension '{id}' has no tokens")]
    EmptyDimension {
        /// Dimension id
        id: String,
    },
    /// Two dimensions of one playground share an id.
    #[error("Playground dimension '{id}' is declared twice")]
    DuplicateDimension {
        /// Dimension id
        id: String,
    },
}

fn summarize(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.kind.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Severity of a schema finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Content that would silently render nothing or render wrongly
    Error,
    /// Content that renders, but probably not as the author intended
    Warning,
}

/// What a schema finding is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// `types` is empty
    NoVariants,
    /// A key appears twice in `types`
    DuplicateVariant {
        /// Repeated key
        key: String,
    },
    /// A per-variant map references a key missing from `types`
    OrphanVariantKey {
        /// Field holding the orphan (e.g. "examples")
        field: &'static str,
        /// Offending key
        key: String,
    },
    /// A comparison row has the wrong number of values
    ComparisonRowArity {
        /// Row feature label
        feature: String,
        /// Number of values the row carries
        found: usize,
        /// `columns.len() - 1`
        expected: usize,
    },
    /// The slug is not lowercase kebab-case
    MalformedSlug,
    /// A playground declaration that cannot be instantiated
    Playground {
        /// Playground id
        id: String,
        /// Human-readable detail
        message: String,
    },
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::NoVariants => write!(f, "no variants declared in types"),
            IssueKind::DuplicateVariant { key } => write!(f, "variant '{}' listed twice", key),
            IssueKind::OrphanVariantKey { field, key } => {
                write!(f, "{} references '{}' which is not in types", field, key)
            }
            IssueKind::ComparisonRowArity {
                feature,
                found,
                expected,
            } => write!(
                f,
                "comparison row '{}' has {} values, expected {}",
                feature, found, expected
            ),
            IssueKind::MalformedSlug => write!(f, "slug is not lowercase kebab-case"),
            IssueKind::Playground { id, message } => write!(f, "playground '{}': {}", id, message),
        }
    }
}

/// A single validation finding for one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Slug of the family the issue belongs to
    pub slug: String,
    /// What is wrong
    pub kind: IssueKind,
    /// How bad it is
    pub severity: IssueSeverity,
}

impl SchemaIssue {
    /// Create an error-level issue
    pub fn error(slug: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            slug: slug.into(),
            kind,
            severity: IssueSeverity::Error,
        }
    }

    /// Create a warning-level issue
    pub fn warning(slug: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            slug: slug.into(),
            kind,
            severity: IssueSeverity::Warning,
        }
    }

    /// Returns true for error-level issues
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        write!(f, "{} in {}: {}", severity, self.slug, self.kind)
    }
}

/// Collection of validation findings produced while building a registry
#[derive(Debug, Clone, Default)]
pub struct SchemaDiagnostics {
    /// All findings, in discovery order
    pub issues: Vec<SchemaIssue>,
}

impl SchemaDiagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every issue from an iterator
    pub fn extend(&mut self, issues: impl IntoIterator<Item = SchemaIssue>) {
        self.issues.extend(issues);
    }

    /// Error-level findings
    pub fn errors(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    /// Warning-level findings
    pub fn warnings(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    /// Findings for a single family
    pub fn for_slug<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a SchemaIssue> {
        self.issues.iter().filter(move |issue| issue.slug == slug)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Check if there are any findings at all
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Get total count of all findings
    pub fn count(&self) -> usize {
        self.issues.len()
    }
}
