//! In-memory store adapters seeded from the bundled mock dataset.

mod latency;
mod moodboard_store;
mod outfit_store;
mod seed;

pub use latency::Latency;
pub use moodboard_store::InMemoryMoodboardStore;
pub use outfit_store::InMemoryOutfitStore;
