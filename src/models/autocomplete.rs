// src/models/autocomplete.rs

use serde::{Deserialize, Serialize};

/// Single autocomplete prediction
/// DOCUMENTATION: kind is "place" for place predictions and "query" for query predictions;
/// place-only fields stay empty for query predictions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteSuggestion {
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub place_id: String,
    /// Resource name, e.g. places/{place_id}
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub place: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub main_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secondary_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub suggestions: Vec<AutocompleteSuggestion>,
}
