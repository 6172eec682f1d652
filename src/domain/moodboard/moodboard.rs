//! Moodboard aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{next_id_after, ElementId, MoodboardId, Timestamp, ValidationError};

use super::canvas::{
    check_finite, check_size, normalize_rotation, Decoration, DecorationPlacement, ItemPlacement,
    PlacedItem,
};

/// A free-form collage of outfit images and decorations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moodboard {
    pub id: MoodboardId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
}

/// Data for a new moodboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewMoodboard {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}

impl NewMoodboard {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Partial update of a moodboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoodboardPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<PlacedItem>>,
    #[serde(default)]
    pub decorations: Option<Vec<Decoration>>,
}

impl MoodboardPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Patch that replaces the canvas with the board's current elements.
    pub fn canvas_of(board: &Moodboard) -> Self {
        Self {
            name: None,
            items: Some(board.items.clone()),
            decorations: Some(board.decorations.clone()),
        }
    }
}

impl Moodboard {
    /// Builds a stored moodboard. A blank name becomes "Untitled Board <millis>".
    pub fn create(id: MoodboardId, data: NewMoodboard, now: Timestamp) -> Self {
        let name = match data.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Untitled Board {}", now.as_datetime().timestamp_millis()),
        };
        let mut decorations = data.decorations;
        for decoration in &mut decorations {
            decoration.rotation = normalize_rotation(decoration.rotation);
        }
        Self {
            id,
            name,
            items: data.items,
            decorations,
            created_at: now,
            last_modified: now,
        }
    }

    /// Applies a patch and stamps `last_modified`.
    pub fn apply(&mut self, patch: MoodboardPatch, now: Timestamp) -> Result<(), ValidationError> {
        if let Some(name) = patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
            self.name = name.to_string();
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(mut decorations) = patch.decorations {
            for decoration in &mut decorations {
                decoration.rotation = normalize_rotation(decoration.rotation);
            }
            self.decorations = decorations;
        }
        self.last_modified = now;
        Ok(())
    }

    /// Next element id. Items and decorations share one id space.
    fn next_element_id(&self) -> ElementId {
        let ids = self
            .items
            .iter()
            .map(|i| i.id)
            .chain(self.decorations.iter().map(|d| d.id));
        ElementId::new(next_id_after(ids))
    }

    pub fn place_item(&mut self, placement: ItemPlacement) -> Result<&PlacedItem, ValidationError> {
        placement.validate()?;
        let item = PlacedItem {
            id: self.next_element_id(),
            outfit_id: placement.outfit_id,
            image_url: placement.image_url,
            x: placement.x,
            y: placement.y,
            width: placement.width,
            height: placement.height,
        };
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Moves an item. Returns false when no such item exists.
    pub fn move_item(&mut self, id: ElementId, x: f64, y: f64) -> Result<bool, ValidationError> {
        check_finite("x", x)?;
        check_finite("y", y)?;
        Ok(match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.x = x;
                item.y = y;
                true
            }
            None => false,
        })
    }

    /// Resizes an item. Returns false when no such item exists.
    pub fn resize_item(&mut self, id: ElementId, width: f64, height: f64) -> Result<bool, ValidationError> {
        check_size("width", width)?;
        check_size("height", height)?;
        Ok(match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.width = width;
                item.height = height;
                true
            }
            None => false,
        })
    }

    pub fn add_decoration(&mut self, placement: DecorationPlacement) -> Result<&Decoration, ValidationError> {
        placement.validate()?;
        let decoration = Decoration {
            id: self.next_element_id(),
            kind: placement.kind,
            x: placement.x,
            y: placement.y,
            rotation: normalize_rotation(placement.rotation),
        };
        self.decorations.push(decoration);
        Ok(&self.decorations[self.decorations.len() - 1])
    }

    /// Removes the item or decoration with this id.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let before = self.items.len() + self.decorations.len();
        self.items.retain(|i| i.id != id);
        self.decorations.retain(|d| d.id != id);
        self.items.len() + self.decorations.len() != before
    }

    pub fn element_count(&self) -> usize {
        self.items.len() + self.decorations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OutfitId;
    use crate::domain::moodboard::DecorationKind;
    use chrono::{TimeZone, Utc};

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_datetime(Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn board() -> Moodboard {
        Moodboard::create(MoodboardId::new(1), NewMoodboard::named("Spring"), at(1_700_000_000))
    }

    #[test]
    fn blank_name_gets_untitled_label() {
        let board = Moodboard::create(MoodboardId::new(2), NewMoodboard::default(), at(1_700_000_000));
        assert_eq!(board.name, "Untitled Board 1700000000000");
        assert_eq!(board.created_at, board.last_modified);
    }

    #[test]
    fn items_and_decorations_share_ids() {
        let mut board = board();
        let item_id = board
            .place_item(ItemPlacement::dropped_at(OutfitId::new(4), "https://img.test/4.jpg", 50.0, 50.0))
            .unwrap()
            .id;
        let deco_id = board
            .add_decoration(DecorationPlacement::new(DecorationKind::Heart, 10.0, 10.0, -30.0))
            .unwrap()
            .id;
        assert_eq!(item_id, ElementId::new(1));
        assert_eq!(deco_id, ElementId::new(2));
        assert_eq!(board.decorations[0].rotation, 330.0);
    }

    #[test]
    fn remove_element_finds_either_kind() {
        let mut board = board();
        board
            .place_item(ItemPlacement::dropped_at(OutfitId::new(1), "https://img.test/1.jpg", 0.0, 0.0))
            .unwrap();
        board
            .add_decoration(DecorationPlacement::new(DecorationKind::Star, 0.0, 0.0, 0.0))
            .unwrap();

        assert!(board.remove_element(ElementId::new(2)));
        assert!(board.decorations.is_empty());
        assert!(board.remove_element(ElementId::new(1)));
        assert!(!board.remove_element(ElementId::new(1)));
        assert_eq!(board.element_count(), 0);
    }

    #[test]
    fn move_and_resize_report_missing_items() {
        let mut board = board();
        board
            .place_item(ItemPlacement::dropped_at(OutfitId::new(1), "https://img.test/1.jpg", 100.0, 100.0))
            .unwrap();
        assert!(board.move_item(ElementId::new(1), 5.0, 6.0).unwrap());
        assert!(board.resize_item(ElementId::new(1), 120.0, 80.0).unwrap());
        assert!(!board.move_item(ElementId::new(9), 0.0, 0.0).unwrap());
        assert!(board.resize_item(ElementId::new(1), -1.0, 80.0).is_err());

        let item = &board.items[0];
        assert_eq!((item.x, item.y, item.width, item.height), (5.0, 6.0, 120.0, 80.0));
    }

    #[test]
    fn apply_refreshes_last_modified() {
        let mut board = board();
        board.apply(MoodboardPatch::rename("Summer"), at(1_700_000_500)).unwrap();
        assert_eq!(board.name, "Summer");
        assert_eq!(board.last_modified, at(1_700_000_500));
        assert!(board.created_at.is_before(&board.last_modified));
    }

    #[test]
    fn apply_rejects_blank_rename() {
        let mut board = board();
        assert!(board.apply(MoodboardPatch::rename("  "), at(1_700_000_500)).is_err());
        assert_eq!(board.name, "Spring");
    }
}
