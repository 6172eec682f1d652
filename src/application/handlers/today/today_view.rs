//! TodayView - per-view state for the look of the day.
//!
//! Keeps the last candidate pool so "shuffle" can reselect without another
//! store round trip. Each refresh takes a token from a monotonic counter;
//! a refresh that finishes after a newer one has started does not overwrite
//! the view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::errors::TodayError;
use super::look_of_the_day::{LookOfTheDay, LookOfTheDayHandler, LookOfTheDayResult};

/// Outcome of a refresh.
#[derive(Debug, Clone)]
pub struct Refreshed {
    pub look: LookOfTheDay,
    /// False when a newer refresh started first and this result was dropped.
    pub applied: bool,
}

struct Snapshot {
    token: u64,
    result: LookOfTheDayResult,
}

pub struct TodayView {
    handler: Arc<LookOfTheDayHandler>,
    latest_token: AtomicU64,
    current: Mutex<Option<Snapshot>>,
}

impl TodayView {
    pub fn new(handler: Arc<LookOfTheDayHandler>) -> Self {
        Self {
            handler,
            latest_token: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Runs the full pipeline and, unless superseded, makes it current.
    pub async fn refresh(&self) -> Result<Refreshed, TodayError> {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.handler.handle().await?;

        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let superseded = self.latest_token.load(Ordering::SeqCst) != token
            || current.as_ref().is_some_and(|s| s.token > token);
        if superseded {
            tracing::debug!(token, "discarding stale look of the day");
            return Ok(Refreshed {
                look: result.look,
                applied: false,
            });
        }

        let look = result.look.clone();
        *current = Some(Snapshot { token, result });
        Ok(Refreshed {
            look,
            applied: true,
        })
    }

    /// Reselects from the cached pool. None until a refresh has landed.
    pub fn shuffle(&self) -> Option<LookOfTheDay> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = current.as_mut()?;
        let look = self
            .handler
            .compose(&snapshot.result.candidates, &snapshot.result.weather);
        snapshot.result.look = look.clone();
        Some(look)
    }

    pub fn current(&self) -> Option<LookOfTheDay> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.result.look.clone())
    }
}
