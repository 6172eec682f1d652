//! Outfit record - a cataloged look with its image and metadata.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    next_id_after, OutfitId, PlanningId, Rating, TagSet, Timestamp, ValidationError,
};

use super::planning::{NewPlanning, PlanningEntry, PlanningPatch};
use super::Category;

/// A single cataloged clothing look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub image_url: String,
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(default)]
    pub rating: Rating,
    pub date_added: Timestamp,
    #[serde(default)]
    pub worn_dates: Vec<Timestamp>,
    #[serde(default)]
    pub planned_dates: Vec<PlanningEntry>,
}

/// Data supplied when uploading a new outfit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewOutfit {
    pub image_url: String,
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub date_added: Option<Timestamp>,
    #[serde(default)]
    pub worn_dates: Option<Vec<Timestamp>>,
}

impl NewOutfit {
    pub fn new(image_url: impl Into<String>, category: Category) -> Self {
        Self {
            image_url: image_url.into(),
            category,
            notes: String::new(),
            tags: TagSet::new(),
            rating: None,
            date_added: None,
            worn_dates: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = TagSet::from_tags(tags);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_date_added(mut self, date_added: Timestamp) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// Checks the upload has an image.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::empty_field("image_url"));
        }
        Ok(())
    }
}

/// Partial update of an outfit. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutfitPatch {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Option<TagSet>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub worn_dates: Option<Vec<Timestamp>>,
}

impl OutfitPatch {
    pub fn rating(rating: Rating) -> Self {
        Self {
            rating: Some(rating),
            ..Default::default()
        }
    }

    pub fn tags(tags: TagSet) -> Self {
        Self {
            tags: Some(tags),
            ..Default::default()
        }
    }
}

impl Outfit {
    /// Builds a stored outfit from an upload, filling creation defaults.
    pub fn create(id: OutfitId, data: NewOutfit) -> Result<Self, ValidationError> {
        data.validate()?;
        Ok(Self {
            id,
            image_url: data.image_url,
            category: data.category,
            notes: data.notes,
            tags: data.tags,
            rating: data.rating.unwrap_or_default(),
            date_added: data.date_added.unwrap_or_else(Timestamp::now),
            worn_dates: data.worn_dates.unwrap_or_default(),
            planned_dates: Vec::new(),
        })
    }

    /// Merges a patch into this outfit.
    pub fn apply(&mut self, patch: OutfitPatch) -> Result<(), ValidationError> {
        if let Some(image_url) = patch.image_url {
            if image_url.trim().is_empty() {
                return Err(ValidationError::empty_field("image_url"));
            }
            self.image_url = image_url;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(worn_dates) = patch.worn_dates {
            self.worn_dates = worn_dates;
        }
        Ok(())
    }

    /// Records that the outfit was worn at `at`.
    pub fn mark_worn(&mut self, at: Timestamp) {
        self.worn_dates.push(at);
    }

    pub fn is_favorite(&self) -> bool {
        self.rating.is_favorite()
    }

    pub fn is_planned(&self) -> bool {
        !self.planned_dates.is_empty()
    }

    /// Looks up a planning entry by id.
    pub fn planning(&self, id: PlanningId) -> Option<&PlanningEntry> {
        self.planned_dates.iter().find(|p| p.id == id)
    }

    /// Schedules this outfit, assigning the next planning id for this outfit.
    pub fn add_planning(&mut self, data: NewPlanning) -> &PlanningEntry {
        let id = PlanningId::new(next_id_after(self.planned_dates.iter().map(|p| p.id)));
        self.planned_dates.push(PlanningEntry::create(id, data));
        &self.planned_dates[self.planned_dates.len() - 1]
    }

    /// Updates a planning entry. Returns None if it does not exist.
    pub fn update_planning(&mut self, id: PlanningId, patch: PlanningPatch) -> Option<&PlanningEntry> {
        let entry = self.planned_dates.iter_mut().find(|p| p.id == id)?;
        entry.apply(patch);
        Some(&*entry)
    }

    /// Removes a planning entry. Returns false if it did not exist.
    pub fn remove_planning(&mut self, id: PlanningId) -> bool {
        let before = self.planned_dates.len();
        self.planned_dates.retain(|p| p.id != id);
        self.planned_dates.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn upload() -> NewOutfit {
        NewOutfit::new("https://img.example/1.jpg", Category::Dress)
            .with_notes("Garden party")
            .with_tags(["Cottagecore", "floral"])
    }

    #[test]
    fn create_fills_defaults() {
        let outfit = Outfit::create(OutfitId::new(1), upload()).unwrap();
        assert_eq!(outfit.rating, Rating::UNRATED);
        assert!(outfit.worn_dates.is_empty());
        assert!(outfit.planned_dates.is_empty());
        assert_eq!(outfit.tags.first(), Some("cottagecore"));
    }

    #[test]
    fn create_keeps_supplied_date_and_rating() {
        let added = Timestamp::now();
        let data = upload()
            .with_rating(Rating::new(5).unwrap())
            .with_date_added(added);
        let outfit = Outfit::create(OutfitId::new(1), data).unwrap();
        assert_eq!(outfit.date_added, added);
        assert_eq!(outfit.rating.value(), 5);
    }

    #[test]
    fn create_rejects_missing_image() {
        let data = NewOutfit::new("  ", Category::Top);
        assert!(Outfit::create(OutfitId::new(1), data).is_err());
    }

    #[test]
    fn apply_patch_merges_fields() {
        let mut outfit = Outfit::create(OutfitId::new(1), upload()).unwrap();
        outfit
            .apply(OutfitPatch {
                notes: Some("Updated".to_string()),
                rating: Some(Rating::new(4).unwrap()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(outfit.notes, "Updated");
        assert!(outfit.is_favorite());
        assert_eq!(outfit.category, Category::Dress);
    }

    #[test]
    fn planning_ids_are_scoped_to_outfit() {
        let mut outfit = Outfit::create(OutfitId::new(1), upload()).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let first = outfit.add_planning(NewPlanning::new(day)).id;
        let second = outfit.add_planning(NewPlanning::new(day)).id;
        assert_eq!(first, PlanningId::new(1));
        assert_eq!(second, PlanningId::new(2));
        assert!(outfit.is_planned());
    }

    #[test]
    fn update_and_remove_planning() {
        let mut outfit = Outfit::create(OutfitId::new(1), upload()).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let id = outfit.add_planning(NewPlanning::new(day)).id;

        let updated = outfit
            .update_planning(
                id,
                PlanningPatch {
                    event_title: Some("Wedding".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.event_title.as_deref(), Some("Wedding"));

        assert!(outfit.remove_planning(id));
        assert!(!outfit.remove_planning(id));
        assert!(outfit.update_planning(id, PlanningPatch::default()).is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "id": 3,
            "image_url": "https://img.example/3.jpg",
            "category": "Full Outfit",
            "date_added": "2024-05-01T10:00:00Z"
        }"#;
        let outfit: Outfit = serde_json::from_str(json).unwrap();
        assert_eq!(outfit.category, Category::FullOutfit);
        assert!(outfit.tags.is_empty());
        assert!(outfit.rating.is_unrated());
    }
}
