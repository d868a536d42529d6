//! Audio feature models.

use serde::{Deserialize, Serialize};

use super::common::ObjectType;
use super::nullable::null_as_default;

/// Audio features of a single track.
///
/// Numeric fields the API leaves out decode as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioFeaturesTrack {
    #[serde(deserialize_with = "null_as_default")]
    pub acousticness: f32,
    pub analysis_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub danceability: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_ms: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub energy: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instrumentalness: f32,
    /// Pitch class notation, -1 when no key was detected.
    #[serde(deserialize_with = "null_as_default")]
    pub key: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub liveness: f32,
    /// Overall loudness in decibels.
    #[serde(deserialize_with = "null_as_default")]
    pub loudness: f32,
    /// 1 for major, 0 for minor.
    #[serde(deserialize_with = "null_as_default")]
    pub mode: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub speechiness: f32,
    /// Estimated tempo in beats per minute.
    #[serde(deserialize_with = "null_as_default")]
    pub tempo: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub time_signature: i32,
    pub track_href: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,
    pub uri: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub valence: f32,
}

impl AudioFeaturesTrack {
    /// Whether the track is in a major key.
    pub fn is_major(&self) -> bool {
        self.mode == 1
    }
}

/// Audio features of several tracks. Entries are `None` for IDs the API
/// could not resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioFeaturesTracks {
    #[serde(deserialize_with = "null_as_default")]
    pub audio_features: Vec<Option<AudioFeaturesTrack>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_features_list_with_null() {
        let json = r#"{
            "audio_features": [
                {"danceability": 0.735, "energy": 0.578, "key": 5, "mode": 0,
                 "tempo": 98.002, "id": "06AKEBrKUckW0KREUWRnvT", "type": "audio_features",
                 "duration_ms": 255349, "time_signature": 4},
                null
            ]
        }"#;
        let features: AudioFeaturesTracks = serde_json::from_str(json).unwrap();
        let first = features.audio_features[0].as_ref().unwrap();
        assert_eq!(first.key, 5);
        assert!(!first.is_major());
        assert_eq!(first.type_, Some(ObjectType::AudioFeatures));
        assert_eq!(first.acousticness, 0.0);
        assert!(features.audio_features[1].is_none());
    }
}
