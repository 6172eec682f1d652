//! Lookbook - personal outfit closet and daily styling service
//!
//! Keeps a closet of photographed outfits, plans them onto calendar dates,
//! arranges them on moodboards, and picks a weather-appropriate look of the
//! day with a caption to match.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
