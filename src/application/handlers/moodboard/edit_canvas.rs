//! Canvas edit handlers.
//!
//! Each edit re-reads the board, applies the change through the domain
//! model, then writes the whole canvas back. The store stamps
//! `last_modified` on the write.

use std::sync::Arc;

use crate::domain::foundation::{ElementId, MoodboardId};
use crate::domain::moodboard::{
    DecorationPlacement, ItemPlacement, Moodboard, MoodboardError, MoodboardPatch,
};
use crate::ports::MoodboardRepository;

/// Result of an edit that created an element.
#[derive(Debug, Clone)]
pub struct CanvasEditResult {
    pub moodboard: Moodboard,
    pub element_id: ElementId,
}

struct CanvasEditor {
    repository: Arc<dyn MoodboardRepository>,
}

impl CanvasEditor {
    async fn edit<T, F>(&self, id: MoodboardId, change: F) -> Result<(Moodboard, T), MoodboardError>
    where
        F: FnOnce(&mut Moodboard) -> Result<T, MoodboardError>,
    {
        let mut board = self.repository.get_by_id(id).await?;
        let outcome = change(&mut board)?;
        let saved = self
            .repository
            .update(id, MoodboardPatch::canvas_of(&board))
            .await?;
        Ok((saved, outcome))
    }
}

/// Command to drop an outfit image onto a board.
#[derive(Debug, Clone)]
pub struct PlaceItemCommand {
    pub moodboard_id: MoodboardId,
    pub placement: ItemPlacement,
}

pub struct PlaceItemHandler {
    editor: CanvasEditor,
}

impl PlaceItemHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self {
            editor: CanvasEditor { repository },
        }
    }

    pub async fn handle(&self, cmd: PlaceItemCommand) -> Result<CanvasEditResult, MoodboardError> {
        let (moodboard, element_id) = self
            .editor
            .edit(cmd.moodboard_id, |board| {
                Ok(board.place_item(cmd.placement)?.id)
            })
            .await?;
        tracing::debug!(moodboard_id = %cmd.moodboard_id, element_id = %element_id, "item placed");
        Ok(CanvasEditResult {
            moodboard,
            element_id,
        })
    }
}

/// Command to move and/or resize a placed item.
#[derive(Debug, Clone, Copy)]
pub struct ArrangeItemCommand {
    pub moodboard_id: MoodboardId,
    pub element_id: ElementId,
    pub position: Option<(f64, f64)>,
    pub size: Option<(f64, f64)>,
}

pub struct ArrangeItemHandler {
    editor: CanvasEditor,
}

impl ArrangeItemHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self {
            editor: CanvasEditor { repository },
        }
    }

    pub async fn handle(&self, cmd: ArrangeItemCommand) -> Result<Moodboard, MoodboardError> {
        let missing = MoodboardError::element_not_found(cmd.moodboard_id, cmd.element_id);
        let (moodboard, ()) = self
            .editor
            .edit(cmd.moodboard_id, |board| {
                let found = board.items.iter().any(|i| i.id == cmd.element_id);
                if !found {
                    return Err(missing);
                }
                if let Some((x, y)) = cmd.position {
                    board.move_item(cmd.element_id, x, y)?;
                }
                if let Some((width, height)) = cmd.size {
                    board.resize_item(cmd.element_id, width, height)?;
                }
                Ok(())
            })
            .await?;
        Ok(moodboard)
    }
}

/// Command to stick a decoration onto a board.
#[derive(Debug, Clone)]
pub struct AddDecorationCommand {
    pub moodboard_id: MoodboardId,
    pub placement: DecorationPlacement,
}

pub struct AddDecorationHandler {
    editor: CanvasEditor,
}

impl AddDecorationHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self {
            editor: CanvasEditor { repository },
        }
    }

    pub async fn handle(&self, cmd: AddDecorationCommand) -> Result<CanvasEditResult, MoodboardError> {
        let (moodboard, element_id) = self
            .editor
            .edit(cmd.moodboard_id, |board| {
                Ok(board.add_decoration(cmd.placement)?.id)
            })
            .await?;
        Ok(CanvasEditResult {
            moodboard,
            element_id,
        })
    }
}

/// Command to remove an item or decoration.
#[derive(Debug, Clone, Copy)]
pub struct RemoveElementCommand {
    pub moodboard_id: MoodboardId,
    pub element_id: ElementId,
}

pub struct RemoveElementHandler {
    editor: CanvasEditor,
}

impl RemoveElementHandler {
    pub fn new(repository: Arc<dyn MoodboardRepository>) -> Self {
        Self {
            editor: CanvasEditor { repository },
        }
    }

    pub async fn handle(&self, cmd: RemoveElementCommand) -> Result<Moodboard, MoodboardError> {
        let (moodboard, ()) = self
            .editor
            .edit(cmd.moodboard_id, |board| {
                if board.remove_element(cmd.element_id) {
                    Ok(())
                } else {
                    Err(MoodboardError::element_not_found(
                        cmd.moodboard_id,
                        cmd.element_id,
                    ))
                }
            })
            .await?;
        Ok(moodboard)
    }
}
