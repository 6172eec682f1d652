//! Style tags attached to outfits.
//!
//! Tags are stored lowercase and trimmed, so every comparison against a tag
//! set is case-insensitive. Order of insertion is kept because the first
//! tag drives caption theming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of lowercase style tags without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a tag set, normalising case and dropping blanks and duplicates.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for tag in tags {
            set.insert(tag.as_ref());
        }
        set
    }

    /// Inserts a tag. Returns false when it was blank or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = normalize(tag);
        if tag.is_empty() || self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Removes a tag. Returns true when it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = normalize(tag);
        let before = self.0.len();
        self.0.retain(|t| *t != tag);
        self.0.len() != before
    }

    /// True when the tag is in the set (case-insensitive).
    pub fn contains(&self, tag: &str) -> bool {
        let tag = normalize(tag);
        self.0.iter().any(|t| *t == tag)
    }

    /// True when any of `candidates` is in the set.
    pub fn intersects(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|c| self.contains(c))
    }

    /// True when any tag contains `needle` as a case-insensitive substring.
    pub fn any_contains(&self, needle: &str) -> bool {
        let needle = normalize(needle);
        self.0.iter().any(|t| t.contains(&needle))
    }

    /// First tag in insertion order.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        TagSet::from_tags(tags)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_lowercased_and_trimmed() {
        let tags = TagSet::from_tags(["  Y2K ", "Coquette"]);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["y2k", "coquette"]);
    }

    #[test]
    fn duplicates_are_rejected_case_insensitively() {
        let mut tags = TagSet::from_tags(["summer"]);
        assert!(!tags.insert("SUMMER"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn blank_tags_are_dropped() {
        let tags = TagSet::from_tags(["", "   ", "glam"]);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let tags = TagSet::from_tags(["vintage", "glam", "cozy"]);
        assert_eq!(tags.first(), Some("vintage"));
    }

    #[test]
    fn contains_ignores_case() {
        let tags = TagSet::from_tags(["Winter"]);
        assert!(tags.contains("WINTER"));
        assert!(tags.intersects(&["coat", "winter"]));
        assert!(!tags.intersects(&["summer"]));
    }

    #[test]
    fn remove_reports_presence() {
        let mut tags = TagSet::from_tags(["glam", "party"]);
        assert!(tags.remove("GLAM"));
        assert!(!tags.remove("glam"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn any_contains_matches_substrings() {
        let tags = TagSet::from_tags(["streetwear"]);
        assert!(tags.any_contains("STREET"));
        assert!(!tags.any_contains("boho"));
    }

    #[test]
    fn deserialization_normalises() {
        let tags: TagSet = serde_json::from_str(r#"["Glam","glam","Party"]"#).unwrap();
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["glam","party"]"#);
    }
}
