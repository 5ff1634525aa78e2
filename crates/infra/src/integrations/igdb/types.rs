//! IGDB response payloads

use serde::Deserialize;

/// Row of the `external_games` resource
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExternalGameRow {
    #[serde(default)]
    pub game: Option<IgdbGame>,
}

/// Expanded `game` object
///
/// IGDB omits fields it has no value for, so everything is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IgdbGame {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub aggregated_rating: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub platforms: Option<Vec<IgdbPlatform>>,
}

impl IgdbGame {
    /// True when the object carried none of the requested fields (`{}`)
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.summary.is_none()
            && self.aggregated_rating.is_none()
            && self.rating.is_none()
            && self.platforms.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IgdbPlatform {
    #[serde(default)]
    pub name: Option<String>,
}
