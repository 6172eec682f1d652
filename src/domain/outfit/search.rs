//! Closet search: free-text query plus tag chips.

use super::Outfit;

/// Filter applied to the closet grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosetFilter {
    /// Case-insensitive substring matched against notes, category and tags.
    pub query: Option<String>,
    /// Keep outfits where any selected tag is a substring of one of their tags.
    pub selected_tags: Vec<String>,
}

impl ClosetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when the outfit passes both the query and the tag selection.
    pub fn matches(&self, outfit: &Outfit) -> bool {
        self.matches_query(outfit) && self.matches_tags(outfit)
    }

    fn matches_query(&self, outfit: &Outfit) -> bool {
        let query = match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };
        outfit.notes.to_lowercase().contains(&query)
            || outfit.category.label().to_lowercase().contains(&query)
            || outfit.tags.any_contains(&query)
    }

    fn matches_tags(&self, outfit: &Outfit) -> bool {
        let selected: Vec<&str> = self
            .selected_tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if selected.is_empty() {
            return true;
        }
        selected.iter().any(|tag| outfit.tags.any_contains(tag))
    }

    /// Applies the filter, keeping store order.
    pub fn apply(&self, outfits: Vec<Outfit>) -> Vec<Outfit> {
        outfits.into_iter().filter(|o| self.matches(o)).collect()
    }
}
