use std::collections::HashMap;

/// Returns true if `slug` is lowercase kebab-case: ASCII lowercase letters and
/// digits separated by single hyphens, with no leading or trailing hyphen.
///
/// # Examples
///
/// ```
/// use utilidoc_core::slug::is_valid_slug;
///
/// assert!(is_valid_slug("align-items"));
/// assert!(is_valid_slug("grid-cols-12"));
/// assert!(!is_valid_slug("Align Items"));
/// assert!(!is_valid_slug("align--items"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Generates unique anchor ids for the section headings of one page.
#[derive(Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Returns the next unique slug for `text`.
    pub fn next_slug(&mut self, text: &str) -> String {
        slugify(text, &mut self.counts)
    }

    /// Reserves a slug so future auto-generated slugs won't collide with it.
    pub fn reserve(&mut self, slug: &str) {
        *self.counts.entry(slug.to_string()).or_insert(0) += 1;
    }
}

/// Slugify `text`, updating `counts` to keep results unique.
///
/// Letters and digits are lowercased and kept, every other run of characters
/// becomes a single hyphen, and leading/trailing hyphens are trimmed. Repeats
/// get a numeric suffix (`-1`, `-2`, ...).
pub fn slugify(text: &str, counts: &mut HashMap<String, usize>) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("section");
    }

    let entry = counts.entry(slug.clone()).or_insert(0);
    if *entry > 0 {
        slug.push_str(&format!("-{}", *entry));
    }
    *entry += 1;

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        let mut counts = HashMap::new();
        assert_eq!(slugify("Common Mistakes", &mut counts), "common-mistakes");
    }

    #[test]
    fn deduplication() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Examples"), "examples");
        assert_eq!(slugger.next_slug("Examples"), "examples-1");
        assert_eq!(slugger.next_slug("Examples"), "examples-2");
    }

    #[test]
    fn punctuation_collapses_and_trims() {
        let mut counts = HashMap::new();
        assert_eq!(slugify("  flex: 1 1 0%  ", &mut counts), "flex-1-1-0");
        assert_eq!(slugify("`items-center`", &mut counts), "items-center");
    }

    #[test]
    fn unicode_preserved() {
        let mut counts = HashMap::new();
        assert_eq!(slugify("Ausrichtung Übersicht", &mut counts), "ausrichtung-übersicht");
    }

    #[test]
    fn empty_text_falls_back() {
        let mut counts = HashMap::new();
        assert_eq!(slugify("!!!", &mut counts), "section");
    }

    #[test]
    fn reserved_slugs_are_skipped() {
        let mut slugger = Slugger::new();
        slugger.reserve("playground");
        assert_eq!(slugger.next_slug("Playground"), "playground-1");
    }

    #[test]
    fn valid_slug_shapes() {
        assert!(is_valid_slug("flex-direction"));
        assert!(is_valid_slug("z-index"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-flex"));
        assert!(!is_valid_slug("flex-"));
        assert!(!is_valid_slug("flex_grow"));
    }
}
