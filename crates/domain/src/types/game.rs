//! Game metadata types
//!
//! `GameRecord` is the local shape produced by a metadata lookup. Every field
//! is optional because the upstream catalogue is sparse; persistence is left
//! to whoever consumes the record.

use serde::{Deserialize, Serialize};

/// Game metadata as produced by a lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Identifier of the game in the upstream catalogue
    pub external_id: Option<u64>,
    /// Aggregated critic rating rounded to an integer (0-100)
    pub critic_score: Option<i64>,
    /// Community rating rounded to an integer (0-100)
    pub user_score: Option<i64>,
    /// Seconds to finish the main story
    pub main_story_completion_time: Option<i64>,
    /// Seconds to complete everything
    pub completionist_time: Option<i64>,
    /// Platform names exactly as reported upstream, in upstream order
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl GameRecord {
    /// Platforms from [`GameRecord::platforms`] that belong to the closed
    /// [`GamePlatform`] set. Unknown names are skipped; duplicates kept once.
    pub fn known_platforms(&self) -> Vec<GamePlatform> {
        let mut known = Vec::new();
        let names = self.platforms.iter();
        for platform in names.filter_map(|name| GamePlatform::from_igdb_name(name)) {
            if !known.contains(&platform) {
                known.push(platform);
            }
        }
        known
    }
}

/// Platforms tracked locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GamePlatform {
    PC = 0,
    NintendoSwitch = 1,
    XboxOne = 2,
    XboxSeriesXOrS = 3,
    Playstation4 = 4,
    Playstation5 = 5,
}

impl GamePlatform {
    /// Every variant in discriminant order
    pub const ALL: [GamePlatform; 6] = [
        Self::PC,
        Self::NintendoSwitch,
        Self::XboxOne,
        Self::XboxSeriesXOrS,
        Self::Playstation4,
        Self::Playstation5,
    ];

    /// Canonical IGDB platform name for this variant
    pub const fn igdb_name(self) -> &'static str {
        match self {
            Self::PC => "PC (Microsoft Windows)",
            Self::NintendoSwitch => "Nintendo Switch",
            Self::XboxOne => "Xbox One",
            Self::XboxSeriesXOrS => "Xbox Series X|S",
            Self::Playstation4 => "PlayStation 4",
            Self::Playstation5 => "PlayStation 5",
        }
    }

    /// Map an IGDB platform name onto the local set
    ///
    /// Matching is exact apart from surrounding whitespace and ASCII case.
    /// Names outside the set (e.g. "Linux", "Mac") return `None`.
    pub fn from_igdb_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|platform| platform.igdb_name().eq_ignore_ascii_case(name))
    }

    /// Small integer code used for local classification
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`GamePlatform::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.code() == code)
    }
}

/// Crowd-sourced completion estimates for one game, in seconds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeToBeat {
    #[serde(default)]
    pub hastily: Option<i64>,
    #[serde(default)]
    pub normally: Option<i64>,
    #[serde(default)]
    pub completely: Option<i64>,
}
