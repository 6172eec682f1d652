//! Request and response DTOs for moodboard endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::OutfitId;
use crate::domain::moodboard::{
    Decoration, DecorationKind, DecorationPlacement, ItemPlacement, Moodboard, MoodboardPatch,
    NewMoodboard, PlacedItem,
};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/moodboards - a blank name gets a generated one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMoodboardRequest {
    pub name: Option<String>,
}

impl From<CreateMoodboardRequest> for NewMoodboard {
    fn from(req: CreateMoodboardRequest) -> Self {
        NewMoodboard {
            name: req.name,
            ..Default::default()
        }
    }
}

/// PATCH /api/moodboards/:id - rename and/or replace the canvas wholesale
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMoodboardRequest {
    pub name: Option<String>,
    pub items: Option<Vec<PlacedItem>>,
    pub decorations: Option<Vec<Decoration>>,
}

impl From<UpdateMoodboardRequest> for MoodboardPatch {
    fn from(req: UpdateMoodboardRequest) -> Self {
        MoodboardPatch {
            name: req.name,
            items: req.items,
            decorations: req.decorations,
        }
    }
}

/// POST /api/moodboards/:id/items - drop an outfit onto the canvas
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceItemRequest {
    pub outfit_id: u32,
    pub image_url: String,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl From<PlaceItemRequest> for ItemPlacement {
    fn from(req: PlaceItemRequest) -> Self {
        let mut placement =
            ItemPlacement::dropped_at(OutfitId::new(req.outfit_id), req.image_url, req.x, req.y);
        if let Some(width) = req.width {
            placement.width = width;
        }
        if let Some(height) = req.height {
            placement.height = height;
        }
        placement
    }
}

/// PATCH /api/moodboards/:id/items/:element_id - drag and/or resize
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArrangeItemRequest {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ArrangeItemRequest {
    /// Position and size only count when both halves are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }

    pub fn size(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }
}

/// POST /api/moodboards/:id/decorations
#[derive(Debug, Clone, Deserialize)]
pub struct AddDecorationRequest {
    pub kind: DecorationKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl From<AddDecorationRequest> for DecorationPlacement {
    fn from(req: AddDecorationRequest) -> Self {
        DecorationPlacement::new(req.kind, req.x, req.y, req.rotation)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedItemResponse {
    pub id: u32,
    pub outfit_id: u32,
    pub image_url: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<PlacedItem> for PlacedItemResponse {
    fn from(item: PlacedItem) -> Self {
        Self {
            id: item.id.value(),
            outfit_id: item.outfit_id.value(),
            image_url: item.image_url,
            x: item.x,
            y: item.y,
            width: item.width,
            height: item.height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorationResponse {
    pub id: u32,
    pub kind: DecorationKind,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl From<Decoration> for DecorationResponse {
    fn from(decoration: Decoration) -> Self {
        Self {
            id: decoration.id.value(),
            emoji: decoration.kind.emoji().to_string(),
            kind: decoration.kind,
            x: decoration.x,
            y: decoration.y,
            rotation: decoration.rotation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodboardResponse {
    pub id: u32,
    pub name: String,
    pub items: Vec<PlacedItemResponse>,
    pub decorations: Vec<DecorationResponse>,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl From<Moodboard> for MoodboardResponse {
    fn from(board: Moodboard) -> Self {
        Self {
            id: board.id.value(),
            name: board.name,
            items: board.items.into_iter().map(Into::into).collect(),
            decorations: board.decorations.into_iter().map(Into::into).collect(),
            created_at: *board.created_at.as_datetime(),
            last_modified: *board.last_modified.as_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodboardListResponse {
    pub moodboards: Vec<MoodboardResponse>,
    pub total: usize,
}

impl From<Vec<Moodboard>> for MoodboardListResponse {
    fn from(boards: Vec<Moodboard>) -> Self {
        Self {
            total: boards.len(),
            moodboards: boards.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of a canvas edit that created an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasEditResponse {
    pub element_id: u32,
    pub moodboard: MoodboardResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::moodboard::DEFAULT_ITEM_SIZE;

    #[test]
    fn dropped_item_gets_default_size() {
        let req: PlaceItemRequest =
            serde_json::from_str(r#"{"outfit_id":4,"image_url":"u.jpg","x":10,"y":20}"#).unwrap();
        let placement = ItemPlacement::from(req);
        assert_eq!(placement.width, DEFAULT_ITEM_SIZE);
        assert_eq!(placement.height, DEFAULT_ITEM_SIZE);
        assert_eq!(placement.outfit_id, OutfitId::new(4));
    }

    #[test]
    fn arrange_needs_both_coordinates() {
        let req = ArrangeItemRequest {
            x: Some(5.0),
            width: Some(80.0),
            height: Some(60.0),
            ..Default::default()
        };
        assert_eq!(req.position(), None);
        assert_eq!(req.size(), Some((80.0, 60.0)));
    }

    #[test]
    fn decoration_kind_is_lowercase() {
        let req: AddDecorationRequest =
            serde_json::from_str(r#"{"kind":"bow","x":1,"y":2}"#).unwrap();
        assert_eq!(req.kind, DecorationKind::Bow);
        assert_eq!(req.rotation, 0.0);
    }
}
