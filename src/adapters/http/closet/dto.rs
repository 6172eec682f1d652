//! Request and response DTOs for closet endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Rating, TagSet, Timestamp, ValidationError};
use crate::domain::lookbook::ClosetStats;
use crate::domain::outfit::{Category, ClosetFilter, NewOutfit, Outfit, OutfitPatch, PlanningEntry};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/outfits
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOutfitRequest {
    pub image_url: String,
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: Option<u8>,
    pub date_added: Option<DateTime<Utc>>,
}

impl CreateOutfitRequest {
    pub fn into_new_outfit(self) -> Result<NewOutfit, ValidationError> {
        let mut data = NewOutfit::new(self.image_url, self.category)
            .with_notes(self.notes)
            .with_tags(self.tags);
        if let Some(rating) = self.rating {
            data = data.with_rating(Rating::new(rating)?);
        }
        if let Some(added) = self.date_added {
            data = data.with_date_added(Timestamp::from_datetime(added));
        }
        Ok(data)
    }
}

/// PATCH /api/outfits/:id - every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOutfitRequest {
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<u8>,
    pub worn_dates: Option<Vec<DateTime<Utc>>>,
}

impl UpdateOutfitRequest {
    pub fn into_patch(self) -> Result<OutfitPatch, ValidationError> {
        Ok(OutfitPatch {
            image_url: self.image_url,
            category: self.category,
            notes: self.notes,
            tags: self.tags.map(TagSet::from_tags),
            rating: self.rating.map(Rating::new).transpose()?,
            worn_dates: self
                .worn_dates
                .map(|dates| dates.into_iter().map(Timestamp::from_datetime).collect()),
        })
    }
}

/// POST /api/outfits/:id/worn
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkWornRequest {
    pub worn_at: Option<DateTime<Utc>>,
}

/// GET /api/outfits/search?q=&tags=a,b
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Comma-separated tag selection.
    pub tags: Option<String>,
}

impl SearchParams {
    pub fn into_filter(self) -> ClosetFilter {
        let mut filter = ClosetFilter::new();
        if let Some(q) = self.q {
            filter = filter.with_query(q);
        }
        if let Some(tags) = self.tags {
            filter = filter.with_tags(tags.split(',').map(str::trim).filter(|t| !t.is_empty()));
        }
        filter
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningResponse {
    pub id: u32,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PlanningEntry> for PlanningResponse {
    fn from(entry: PlanningEntry) -> Self {
        Self {
            id: entry.id.value(),
            date: entry.date,
            event_title: entry.event_title,
            reminder: entry.reminder,
            created_at: *entry.created_at.as_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitResponse {
    pub id: u32,
    pub image_url: String,
    pub category: Category,
    pub category_emoji: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub rating: u8,
    pub favorite: bool,
    pub date_added: DateTime<Utc>,
    pub worn_dates: Vec<DateTime<Utc>>,
    pub planned_dates: Vec<PlanningResponse>,
}

impl From<Outfit> for OutfitResponse {
    fn from(outfit: Outfit) -> Self {
        Self {
            id: outfit.id.value(),
            category_emoji: outfit.category.emoji().to_string(),
            favorite: outfit.is_favorite(),
            image_url: outfit.image_url,
            category: outfit.category,
            notes: outfit.notes,
            tags: outfit.tags.iter().map(str::to_string).collect(),
            rating: outfit.rating.value(),
            date_added: *outfit.date_added.as_datetime(),
            worn_dates: outfit.worn_dates.iter().map(|t| *t.as_datetime()).collect(),
            planned_dates: outfit.planned_dates.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitListResponse {
    pub outfits: Vec<OutfitResponse>,
    pub total: usize,
}

impl From<Vec<Outfit>> for OutfitListResponse {
    fn from(outfits: Vec<Outfit>) -> Self {
        Self {
            total: outfits.len(),
            outfits: outfits.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosetStatsResponse {
    pub total_looks: usize,
    pub favorites: usize,
    pub style_tags: usize,
}

impl From<ClosetStats> for ClosetStatsResponse {
    fn from(stats: ClosetStats) -> Self {
        Self {
            total_looks: stats.total_looks,
            favorites: stats.favorites,
            style_tags: stats.style_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OutfitId;

    #[test]
    fn create_request_deserializes_with_defaults() {
        let json = r#"{"image_url":"https://img/1.jpg","category":"Full Outfit"}"#;
        let req: CreateOutfitRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.category, Category::FullOutfit);
        assert!(req.tags.is_empty());
        assert!(req.rating.is_none());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let req = UpdateOutfitRequest {
            rating: Some(9),
            ..Default::default()
        };
        assert_eq!(req.into_patch().unwrap_err().field(), "rating");
    }

    #[test]
    fn search_params_split_tags() {
        let filter = SearchParams {
            q: Some("denim".to_string()),
            tags: Some("casual, ,y2k".to_string()),
        }
        .into_filter();
        assert_eq!(filter.query.as_deref(), Some("denim"));
        assert_eq!(filter.selected_tags.len(), 2);
    }

    #[test]
    fn outfit_response_flattens_value_objects() {
        let outfit = Outfit::create(
            OutfitId::new(3),
            NewOutfit::new("https://img/3.jpg", Category::Outerwear)
                .with_tags(["Winter", "coat"])
                .with_rating(Rating::new(4).unwrap()),
        )
        .unwrap();

        let response = OutfitResponse::from(outfit);
        assert_eq!(response.id, 3);
        assert_eq!(response.tags, vec!["winter", "coat"]);
        assert!(response.favorite);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["category"], "Outerwear");
    }
}
