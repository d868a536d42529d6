//! Browse categories and recommendation models.

use serde::{Deserialize, Serialize};

use super::common::{Image, SeedType};
use super::nullable::null_as_default;
use super::track::Track;

/// Category used to tag items in Spotify.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub href: Option<String>,

    /// Category icons in various sizes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub icons: Vec<Image>,

    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Genres available as recommendation seeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedsGenres {
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
}

/// Seed that recommendations were generated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    /// Tracks available after min/max filters were applied.
    #[serde(rename = "afterFilteringSize", default, deserialize_with = "null_as_default")]
    pub after_filtering_size: u32,

    /// Tracks available after relinking for regional availability.
    #[serde(rename = "afterRelinkingSize", default, deserialize_with = "null_as_default")]
    pub after_relinking_size: u32,

    /// Link to the seed object; null for genre seeds.
    pub href: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Size of the pool before any filtering.
    #[serde(rename = "initialPoolSize", default, deserialize_with = "null_as_default")]
    pub initial_pool_size: u32,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_: SeedType,
}

/// Recommendation result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    #[serde(default, deserialize_with = "null_as_default")]
    pub seeds: Vec<Seed>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_seeds() {
        let json = r#"{
            "seeds": [
                {"initialPoolSize": 500, "afterFilteringSize": 380, "afterRelinkingSize": 365,
                 "href": "https://api.spotify.com/v1/artists/4NHQUGzhtTLFvgF5SZesLK",
                 "id": "4NHQUGzhtTLFvgF5SZesLK", "type": "ARTIST"},
                {"initialPoolSize": 250, "afterFilteringSize": 172, "afterRelinkingSize": 144,
                 "href": null, "id": "classical", "type": "MOOD"}
            ],
            "tracks": [{"name": "Recommended", "duration_ms": 1000}]
        }"#;
        let recommendations: Recommendations = serde_json::from_str(json).unwrap();
        assert_eq!(recommendations.seeds.len(), 2);
        assert_eq!(recommendations.seeds[0].type_, SeedType::Artist);
        assert_eq!(recommendations.seeds[0].initial_pool_size, 500);
        assert_eq!(recommendations.seeds[1].type_, SeedType::Unknown);
        assert_eq!(recommendations.tracks[0].name, "Recommended");
    }
}
