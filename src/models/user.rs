//! User profile models.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Followers, Image, ObjectType, Product};
use super::nullable::null_as_default;

/// Public profile of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPublic {
    /// Name displayed on the profile, if set.
    pub display_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    pub followers: Option<Followers>,

    pub href: Option<String>,

    /// Spotify user ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    pub uri: Option<String>,
}

impl UserPublic {
    /// Display name, falling back to the user ID.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// Profile of the current user, including private fields the granted
/// scopes expose.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPrivate {
    /// Birth date, requires the `user-read-birthdate` scope.
    pub birthdate: Option<String>,

    /// Country (ISO 3166-1 alpha-2), requires `user-read-private`.
    pub country: Option<String>,

    pub display_name: Option<String>,

    /// Email address, requires `user-read-email`.
    pub email: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,

    pub followers: Option<Followers>,

    pub href: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,

    /// Subscription level, requires `user-read-private`.
    pub product: Option<Product>,

    #[serde(rename = "type")]
    pub type_: Option<ObjectType>,

    pub uri: Option<String>,
}

impl UserPrivate {
    /// Whether the user has a premium subscription.
    pub fn is_premium(&self) -> bool {
        self.product == Some(Product::Premium)
    }
}
