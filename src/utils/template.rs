//! Literal tag substitution over text content.

use indexmap::IndexMap;

/// Result of applying a replacement map to a piece of content.
///
/// `replaced` lists the (tag, value) pairs that matched, in application
/// order.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub content: String,
    pub replaced: Vec<(String, String)>,
}

impl Substitution {
    pub fn modified(&self) -> bool {
        !self.replaced.is_empty()
    }
}

/// Apply every replacement pair to `content`, in map order.
///
/// Pairs are applied sequentially: each one rewrites the output of the
/// previous, so an earlier value can itself be picked up by a later tag.
/// A pair only counts as replaced when the content contains its tag at the
/// time its turn comes. Tags are matched as literal substrings, every
/// occurrence at once.
pub fn apply(content: &str, replacements: &IndexMap<String, String>) -> Substitution {
    let mut result = content.to_string();
    let mut replaced = Vec::new();

    for (tag, value) in replacements {
        if result.contains(tag.as_str()) {
            result = result.replace(tag.as_str(), value);
            replaced.push((tag.clone(), value.clone()));
        }
    }

    Substitution {
        content: result,
        replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence_of_a_tag() {
        let result = apply(
            "{{HOST}}/a and {{HOST}}/b",
            &map(&[("{{HOST}}", "example.com")]),
        );
        assert_eq!(result.content, "example.com/a and example.com/b");
        assert!(result.modified());
        assert!(!result.content.contains("{{HOST}}"));
    }

    #[test]
    fn applies_pairs_sequentially_in_map_order() {
        let result = apply("A", &map(&[("A", "B"), ("B", "C")]));
        assert_eq!(result.content, "C");
        assert_eq!(
            result.replaced,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn skips_tags_absent_from_content() {
        let result = apply("plain text", &map(&[("{{MISSING}}", "value")]));
        assert_eq!(result.content, "plain text");
        assert!(!result.modified());
        assert!(result.replaced.is_empty());
    }

    #[test]
    fn matches_literal_substrings_without_boundaries() {
        let result = apply("prefix{{X}}suffix", &map(&[("{{X}}", "-")]));
        assert_eq!(result.content, "prefix-suffix");
    }

    #[test]
    fn records_only_matching_pairs() {
        let result = apply(
            "{{A}} only",
            &map(&[("{{A}}", "1"), ("{{B}}", "2")]),
        );
        assert_eq!(result.content, "1 only");
        assert_eq!(result.replaced, vec![("{{A}}".to_string(), "1".to_string())]);
    }
}
