// src/models/photo.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::request::validate_required;
use super::AuthorAttribution;

/// Photo reference attached to a place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Resource name, e.g. places/{place_id}/photos/{photo}
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_px: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_px: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author_attributions: Vec<AuthorAttribution>,
}

/// Request for a photo's media URI
/// DOCUMENTATION: Bounds are only sent when positive
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PhotoMediaRequest {
    #[validate(custom = "validate_required")]
    pub name: String,
    #[serde(default)]
    pub max_width_px: i32,
    #[serde(default)]
    pub max_height_px: i32,
}

impl PhotoMediaRequest {
    pub fn new(name: impl Into<String>) -> Self {
        PhotoMediaRequest {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Resolved photo media
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoMediaResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo_uri: String,
}
