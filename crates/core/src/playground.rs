//! Class-name playgrounds built from independent control dimensions.
//!
//! A [`Playground`] holds one selected token per [`ControlDimension`]. The
//! composed class string, the markup text, and the live preview are all
//! derived from the same [`Selection`], so they can never drift apart.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// One independent axis of choice (e.g. gap size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDimension {
    /// Identifier, unique within a playground. Also the template placeholder name.
    pub id: String,
    /// Button group label.
    #[serde(default)]
    pub label: String,
    /// Allowed utility class names, in display order.
    pub tokens: Vec<String>,
    /// Initially selected token. Falls back to the first token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ControlDimension {
    /// Creates a dimension whose default is its first token.
    pub fn new(
        id: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            tokens: tokens.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Sets the button group label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the initially selected token.
    pub fn with_default(mut self, token: impl Into<String>) -> Self {
        self.default = Some(token.into());
        self
    }

    fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    fn default_index(&self) -> usize {
        match self.default.as_deref() {
            None => 0,
            Some(token) => self.position(token).unwrap_or_else(|| {
                log::warn!(
                    "Playground dimension '{}': default '{}' is not an allowed token, using '{}'",
                    self.id,
                    token,
                    self.tokens[0]
                );
                0
            }),
        }
    }
}

/// Declarative playground description, authored alongside family content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub dimensions: Vec<ControlDimension>,
    /// Markup template. See [`MarkupTemplate`] for placeholder syntax.
    pub template: String,
}

impl PlaygroundSpec {
    /// Instantiates a live playground with every dimension at its default.
    pub fn instantiate(&self) -> Result<Playground, ContentError> {
        Playground::new(self.dimensions.clone())
    }

    /// The markup builder declared by this spec.
    pub fn markup_template(&self) -> MarkupTemplate {
        MarkupTemplate::new(self.template.clone())
    }
}

/// The current cross-section of a playground: one token per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    entries: Vec<(String, String)>,
}

impl Selection {
    /// Builds a selection from `(dimension id, token)` pairs in dimension order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(id, token)| (id.into(), token.into()))
                .collect(),
        }
    }

    /// The token selected for `dimension`.
    pub fn token(&self, dimension: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == dimension)
            .map(|(_, token)| token.as_str())
    }

    /// Selected tokens in dimension order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, token)| token.as_str())
    }

    /// `(dimension id, token)` pairs in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, token)| (id.as_str(), token.as_str()))
    }

    /// Space-joined tokens, skipping empty ones (an empty token means "none").
    pub fn class_string(&self) -> String {
        self.tokens()
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Pure function from a selection to a markup snippet.
pub trait MarkupBuilder {
    /// Must be deterministic: equal selections give byte-identical output.
    fn build_markup(&self, selection: &Selection) -> String;
}

impl<F> MarkupBuilder for F
where
    F: Fn(&Selection) -> String,
{
    fn build_markup(&self, selection: &Selection) -> String {
        self(selection)
    }
}

/// String template markup builder.
///
/// `{classes}` expands to the composed class string and `{<dimension id>}`
/// to that dimension's token. Unknown placeholders are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupTemplate {
    source: String,
}

impl MarkupTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl MarkupBuilder for MarkupTemplate {
    fn build_markup(&self, selection: &Selection) -> String {
        let mut out = String::with_capacity(self.source.len() + 32);
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let name = &after[..close];
            let replacement = if name == "classes" {
                Some(selection.class_string())
            } else {
                selection.token(name).map(str::to_string)
            };
            match replacement {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }
}

/// Live playground state: one valid token index per dimension.
#[derive(Debug, Clone)]
pub struct Playground {
    dimensions: Vec<ControlDimension>,
    selected: Vec<usize>,
}

impl Playground {
    /// Creates a playground with every dimension initialized to a valid token.
    ///
    /// Dimensions without tokens and duplicate dimension ids are rejected, so a
    /// constructed playground can never hold an empty selection.
    pub fn new(dimensions: Vec<ControlDimension>) -> Result<Self, ContentError> {
        for (i, dimension) in dimensions.iter().enumerate() {
            if dimension.tokens.is_empty() {
                return Err(ContentError::EmptyDimension {
                    id: dimension.id.clone(),
                });
            }
            if dimensions[..i].iter().any(|d| d.id == dimension.id) {
                return Err(ContentError::DuplicateDimension {
                    id: dimension.id.clone(),
                });
            }
        }

        let selected = dimensions.iter().map(ControlDimension::default_index).collect();
        Ok(Self {
            dimensions,
            selected,
        })
    }

    pub fn dimensions(&self) -> &[ControlDimension] {
        &self.dimensions
    }

    /// Selects `token` in `dimension`, leaving every other dimension untouched.
    pub fn select(&mut self, dimension: &str, token: &str) -> Result<(), ContentError> {
        let index = self
            .dimensions
            .iter()
            .position(|d| d.id == dimension)
            .ok_or_else(|| ContentError::UnknownDimension {
                id: dimension.to_string(),
            })?;
        let position =
            self.dimensions[index]
                .position(token)
                .ok_or_else(|| ContentError::UnknownToken {
                    dimension: dimension.to_string(),
                    token: token.to_string(),
                })?;
        self.selected[index] = position;
        Ok(())
    }

    /// Returns every dimension to its default token.
    pub fn reset(&mut self) {
        for (slot, dimension) in self.selected.iter_mut().zip(&self.dimensions) {
            *slot = dimension.default_index();
        }
    }

    /// Currently selected token of one dimension.
    pub fn token(&self, dimension: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .zip(&self.selected)
            .find(|(d, _)| d.id == dimension)
            .map(|(d, &i)| d.tokens[i].as_str())
    }

    /// Snapshot of the current cross-section.
    pub fn selection(&self) -> Selection {
        Selection::from_pairs(
            self.dimensions
                .iter()
                .zip(&self.selected)
                .map(|(d, &i)| (d.id.as_str(), d.tokens[i].as_str())),
        )
    }

    /// The composed class string.
    pub fn class_string(&self) -> String {
        self.selection().class_string()
    }

    /// Markup for the current selection.
    pub fn markup(&self, builder: &impl MarkupBuilder) -> String {
        builder.build_markup(&self.selection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direction_gap() -> Playground {
        Playground::new(vec![
            ControlDimension::new("direction", ["row", "col"]),
            ControlDimension::new("gap", ["sm", "lg"]),
        ])
        .unwrap()
    }

    #[test]
    fn defaults_to_first_token() {
        let playground = direction_gap();
        assert_eq!(playground.class_string(), "row sm");
    }

    #[test]
    fn explicit_default_is_honored() {
        let playground = Playground::new(vec![
            ControlDimension::new("gap", ["gap-2", "gap-4", "gap-8"]).with_default("gap-4"),
        ])
        .unwrap();
        assert_eq!(playground.token("gap"), Some("gap-4"));
    }

    #[test]
    fn unknown_default_falls_back_to_first_token() {
        let playground = Playground::new(vec![
            ControlDimension::new("gap", ["gap-2", "gap-4"]).with_default("gap-99"),
        ])
        .unwrap();
        assert_eq!(playground.token("gap"), Some("gap-2"));
    }

    #[test]
    fn empty_dimension_is_rejected() {
        let empty: [&str; 0] = [];
        let err = Playground::new(vec![ControlDimension::new("wrap", empty)]).unwrap_err();
        assert!(matches!(err, ContentError::EmptyDimension { id } if id == "wrap"));
    }

    #[test]
    fn duplicate_dimension_is_rejected() {
        let err = Playground::new(vec![
            ControlDimension::new("gap", ["a"]),
            ControlDimension::new("gap", ["b"]),
        ])
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateDimension { .. }));
    }

    #[test]
    fn changing_one_dimension_leaves_others_alone() {
        let mut playground = direction_gap();
        playground.select("gap", "lg").unwrap();
        assert_eq!(playground.token("direction"), Some("row"));
        playground.select("direction", "col").unwrap();
        assert_eq!(playground.token("gap"), Some("lg"));
    }

    #[test]
    fn invalid_selection_keeps_state() {
        let mut playground = direction_gap();
        assert!(matches!(
            playground.select("gap", "xl"),
            Err(ContentError::UnknownToken { .. })
        ));
        assert!(matches!(
            playground.select("align", "start"),
            Err(ContentError::UnknownDimension { .. })
        ));
        assert_eq!(playground.class_string(), "row sm");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut playground = direction_gap();
        playground.select("direction", "col").unwrap();
        playground.reset();
        assert_eq!(playground.class_string(), "row sm");
    }

    #[test]
    fn markup_is_referentially_transparent() {
        let template = MarkupTemplate::new(r#"<div class="flex {classes}"></div>"#);
        let playground = direction_gap();
        let first = playground.markup(&template);
        let second = playground.markup(&template);
        assert_eq!(first, second);
        assert_eq!(first, r#"<div class="flex row sm"></div>"#);
    }

    #[test]
    fn template_expands_dimension_placeholders() {
        let template = MarkupTemplate::new("<div class=\"{direction}\"><p class=\"{gap}\">{x}</p>");
        let selection = Selection::from_pairs([("direction", "col"), ("gap", "lg")]);
        assert_eq!(
            template.build_markup(&selection),
            "<div class=\"col\"><p class=\"lg\">{x}</p>"
        );
    }

    #[test]
    fn unclosed_placeholder_is_copied_verbatim() {
        let template = MarkupTemplate::new("a {classes} b {oops");
        let selection = Selection::from_pairs([("d", "t")]);
        assert_eq!(template.build_markup(&selection), "a t b {oops");
    }

    #[test]
    fn empty_token_is_skipped_in_class_string() {
        let selection = Selection::from_pairs([("wrap", ""), ("gap", "gap-2")]);
        assert_eq!(selection.class_string(), "gap-2");
    }

    #[test]
    fn closures_are_markup_builders() {
        let builder = |s: &Selection| format!("<ul class=\"{}\"></ul>", s.class_string());
        assert_eq!(direction_gap().markup(&builder), "<ul class=\"row sm\"></ul>");
    }

    #[test]
    fn spec_instantiates_with_defaults() {
        let spec = PlaygroundSpec {
            id: "flex".into(),
            title: "Flex".into(),
            dimensions: vec![ControlDimension::new("direction", ["flex-row", "flex-col"])],
            template: "<div class=\"flex {classes}\"></div>".into(),
        };
        let playground = spec.instantiate().unwrap();
        assert_eq!(
            playground.markup(&spec.markup_template()),
            "<div class=\"flex flex-row\"></div>"
        );
    }
}
