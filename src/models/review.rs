// src/models/review.rs

use serde::{Deserialize, Serialize};

/// Text with the language it is written in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language_code: String,
}

/// Review or photo author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorAttribution {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo_uri: String,
}

/// Calendar date of the reviewed visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewVisitDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// User review of a place
/// DOCUMENTATION: Keeps both the (possibly translated) text and the original text;
/// choosing between them is left to the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relative_publish_time_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorAttribution>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub publish_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flag_content_uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub google_maps_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<ReviewVisitDate>,
}
