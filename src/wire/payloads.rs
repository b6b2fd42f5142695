// src/wire/payloads.rs
// DOCUMENTATION: Upstream JSON shapes returned by the Places API (v1)
// PURPOSE: Mirror the wire schema exactly; no cleanup happens here

use serde::Deserialize;

/// Response from places:searchText and places:searchNearby
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    #[serde(default)]
    pub places: Vec<PlaceItem>,
    #[serde(default)]
    pub next_page_token: String,
}

/// Place resource as returned by search and details
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceItem {
    #[serde(default)]
    pub id: String,
    pub display_name: Option<LocalizedTextPayload>,
    #[serde(default)]
    pub formatted_address: String,
    pub location: Option<LocationPayload>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<i32>,
    /// Enum code such as PRICE_LEVEL_MODERATE
    #[serde(default)]
    pub price_level: String,
    pub price_range: Option<PriceRangePayload>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub primary_type: String,
    pub primary_type_display_name: Option<LocalizedTextPayload>,
    #[serde(default)]
    pub business_status: String,
    #[serde(default)]
    pub google_maps_uri: String,
    pub editorial_summary: Option<LocalizedTextPayload>,
    pub generative_summary: Option<SummaryPayload>,
    pub review_summary: Option<SummaryPayload>,
    pub current_opening_hours: Option<OpeningHoursPayload>,
    pub regular_opening_hours: Option<OpeningHoursPayload>,
    #[serde(default)]
    pub national_phone_number: String,
    #[serde(default)]
    pub website_uri: String,
    #[serde(default)]
    pub reviews: Vec<ReviewPayload>,
    #[serde(default)]
    pub photos: Vec<PhotoPayload>,
    pub serves_beer: Option<bool>,
    pub serves_breakfast: Option<bool>,
    pub serves_brunch: Option<bool>,
    pub serves_cocktails: Option<bool>,
    pub serves_coffee: Option<bool>,
    pub serves_dessert: Option<bool>,
    pub serves_dinner: Option<bool>,
    pub serves_lunch: Option<bool>,
    pub serves_vegetarian_food: Option<bool>,
    pub serves_wine: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedTextPayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language_code: String,
}

/// Generative and review summaries both wrap an overview text
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryPayload {
    pub overview: Option<LocalizedTextPayload>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LocationPayload {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangePayload {
    pub start_price: Option<MoneyPayload>,
    pub end_price: Option<MoneyPayload>,
}

/// google.type.Money; units is an int64 encoded as a decimal string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyPayload {
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub nanos: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursPayload {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relative_publish_time_description: String,
    pub text: Option<LocalizedTextPayload>,
    pub original_text: Option<LocalizedTextPayload>,
    pub rating: Option<f64>,
    pub author_attribution: Option<AuthorAttributionPayload>,
    #[serde(default)]
    pub publish_time: String,
    #[serde(default)]
    pub flag_content_uri: String,
    #[serde(default)]
    pub google_maps_uri: String,
    pub visit_date: Option<VisitDatePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttributionPayload {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub photo_uri: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct VisitDatePayload {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: i32,
    #[serde(default)]
    pub day: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPayload {
    #[serde(default)]
    pub name: String,
    pub width_px: Option<i32>,
    pub height_px: Option<i32>,
    #[serde(default)]
    pub author_attributions: Vec<AuthorAttributionPayload>,
}

/// Response from places:autocomplete
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompletePayload {
    #[serde(default)]
    pub suggestions: Vec<SuggestionPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPayload {
    pub place_prediction: Option<PlacePredictionPayload>,
    pub query_prediction: Option<QueryPredictionPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePredictionPayload {
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub place_id: String,
    pub text: Option<LocalizedTextPayload>,
    pub structured_format: Option<StructuredFormatPayload>,
    #[serde(default)]
    pub types: Vec<String>,
    pub distance_meters: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPredictionPayload {
    pub text: Option<LocalizedTextPayload>,
    pub structured_format: Option<StructuredFormatPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredFormatPayload {
    pub main_text: Option<LocalizedTextPayload>,
    pub secondary_text: Option<LocalizedTextPayload>,
}

/// Response from {photo}/media?skipHttpRedirect=true
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMediaPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo_uri: String,
}
