//! Simulated network latency for the in-memory stores.

use std::time::Duration;

/// Per-operation delays applied before a store call completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub planning: Duration,
    pub query: Duration,
}

impl Latency {
    /// Delays that mimic a remote API.
    pub fn simulated() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
            planning: Duration::from_millis(300),
            query: Duration::from_millis(300),
        }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            planning: Duration::ZERO,
            query: Duration::ZERO,
        }
    }

    pub fn from_flag(simulate: bool) -> Self {
        if simulate {
            Self::simulated()
        } else {
            Self::none()
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

pub(super) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_selects_profile() {
        assert_eq!(Latency::from_flag(true).create, Duration::from_millis(400));
        assert_eq!(Latency::from_flag(false), Latency::none());
    }
}
