// src/models/place.rs
// DOCUMENTATION: Core domain structures for places
// PURPOSE: Stable, presentation-ready model returned by every client operation

use serde::{Deserialize, Serialize};

use super::{Photo, Review};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        LatLng {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

/// Amount of money in a currency
/// DOCUMENTATION: units is parsed from the upstream decimal string,
/// nanos is in [-999999999, 999999999] and shares the sign of units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

/// Modern low/high cost estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_price: Option<Money>,
}

/// "Serves X" amenity flags
/// DOCUMENTATION: Each flag is tri-state: true, false, or not reported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amenities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_beer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_breakfast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_brunch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_cocktails: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_coffee: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_dessert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_dinner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_lunch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_vegetarian_food: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves_wine: Option<bool>,
}

impl Amenities {
    /// Labels of every flag set to true, in display order
    /// DOCUMENTATION: Order is fixed: Beer, Breakfast, Brunch, Cocktails, Coffee,
    /// Dessert, Dinner, Lunch, Vegetarian, Wine
    pub fn served(&self) -> Vec<&'static str> {
        [
            (self.serves_beer, "Beer"),
            (self.serves_breakfast, "Breakfast"),
            (self.serves_brunch, "Brunch"),
            (self.serves_cocktails, "Cocktails"),
            (self.serves_coffee, "Coffee"),
            (self.serves_dessert, "Dessert"),
            (self.serves_dinner, "Dinner"),
            (self.serves_lunch, "Lunch"),
            (self.serves_vegetarian_food, "Vegetarian"),
            (self.serves_wine, "Wine"),
        ]
        .into_iter()
        .filter(|(flag, _)| *flag == Some(true))
        .map(|(_, label)| label)
        .collect()
    }
}

/// Compact view of a place
/// DOCUMENTATION: Returned by text search, nearby search and route waypoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<i32>,
    /// Price level: 0 (free) to 4 (very expensive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
    /// Upstream order and duplicates are preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

/// Detailed view of a place
/// DOCUMENTATION: Returned by details lookups. Reviews and photos are only
/// populated when their field groups were requested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub google_maps_uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub primary_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub primary_type_display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub editorial_summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generative_summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub review_summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,
    /// Weekday descriptions from the regular opening hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(flatten)]
    pub amenities: Amenities,
}

/// Place candidate for a free-text location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub place_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// Text search results with pagination token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<PlaceSummary>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// Nearby search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    pub results: Vec<PlaceSummary>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

/// Resolved location candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationResolveResponse {
    pub results: Vec<ResolvedLocation>,
}
