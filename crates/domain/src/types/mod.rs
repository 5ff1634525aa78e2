//! Domain types and models

pub mod game;

pub use game::{GamePlatform, GameRecord, TimeToBeat};
