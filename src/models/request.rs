// src/models/request.rs
// DOCUMENTATION: Typed request DTOs for every client operation
// PURPOSE: Caller-facing inputs, validated before any request is shaped

use geo_types::LineString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::LatLng;

/// Reject values that are blank after trimming
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn validate_price_levels(levels: &[i32]) -> Result<(), ValidationError> {
    if levels.iter().any(|level| !(0..=4).contains(level)) {
        let mut err = ValidationError::new("range");
        err.message = Some("price levels must be between 0 and 4".into());
        return Err(err);
    }
    Ok(())
}

/// Circular area used to bias or restrict results
/// DOCUMENTATION: Coordinates are not range-checked, only the radius is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationBias {
    pub lat: f64,
    pub lng: f64,
    #[validate(range(min = 1.0, max = 50000.0, message = "must be between 1 and 50000"))]
    pub radius_m: f64,
}

impl LocationBias {
    pub fn new(center: LatLng, radius_m: f64) -> Self {
        LocationBias {
            lat: center.lat,
            lng: center.lng,
            radius_m,
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Optional search refinements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Filters {
    /// Appended to the query text
    #[serde(default)]
    pub keyword: String,
    /// Only the first type is sent (includedType)
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub open_now: Option<bool>,
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[validate(custom = "validate_price_levels")]
    #[serde(default)]
    pub price_levels: Vec<i32>,
}

/// Text search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(custom = "validate_required")]
    pub query: String,
    #[validate]
    #[serde(default)]
    pub filters: Option<Filters>,
    #[validate]
    #[serde(default)]
    pub location_bias: Option<LocationBias>,
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub page_token: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Nearby search around a required circle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NearbySearchRequest {
    #[validate]
    #[serde(default)]
    pub location_restriction: Option<LocationBias>,
    #[serde(default)]
    pub included_types: Vec<String>,
    #[serde(default)]
    pub excluded_types: Vec<String>,
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    #[serde(default)]
    pub limit: Option<u32>,
    /// POPULARITY or DISTANCE
    #[serde(default)]
    pub rank_preference: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
}

/// Autocomplete for partial input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AutocompleteRequest {
    #[validate(custom = "validate_required")]
    pub input: String,
    /// Groups autocomplete calls with a following details call for billing
    #[serde(default)]
    pub session_token: String,
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub types: Vec<String>,
    #[validate]
    #[serde(default)]
    pub location_bias: Option<LocationBias>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
}

impl AutocompleteRequest {
    pub fn new(input: impl Into<String>) -> Self {
        AutocompleteRequest {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Attach a freshly minted UUIDv4 session token
    pub fn with_new_session(mut self) -> Self {
        self.session_token = Uuid::new_v4().to_string();
        self
    }
}

/// Optional field groups for details lookups
/// DOCUMENTATION: Excluded by default because they are payload-heavy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Reviews,
    Photos,
}

impl FieldGroup {
    pub fn field(&self) -> &'static str {
        match self {
            FieldGroup::Reviews => "reviews",
            FieldGroup::Photos => "photos",
        }
    }
}

/// Details lookup by place ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct DetailsRequest {
    #[validate(custom = "validate_required")]
    pub place_id: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
    /// Appended to the field mask in this order
    #[serde(default)]
    pub field_groups: Vec<FieldGroup>,
}

impl DetailsRequest {
    pub fn new(place_id: impl Into<String>) -> Self {
        DetailsRequest {
            place_id: place_id.into(),
            ..Default::default()
        }
    }

    pub fn with_reviews(self) -> Self {
        self.with_group(FieldGroup::Reviews)
    }

    pub fn with_photos(self) -> Self {
        self.with_group(FieldGroup::Photos)
    }

    fn with_group(mut self, group: FieldGroup) -> Self {
        if !self.field_groups.contains(&group) {
            self.field_groups.push(group);
        }
        self
    }

    pub fn includes(&self, group: FieldGroup) -> bool {
        self.field_groups.contains(&group)
    }
}

/// Resolve free text (a city, a neighborhood) into candidate places
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationResolveRequest {
    #[validate(custom = "validate_required")]
    pub location_text: String,
    #[validate(range(min = 1, max = 10, message = "must be between 1 and 10"))]
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
}

/// Text search repeated around each waypoint of a route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RouteRequest {
    #[validate(custom = "validate_required")]
    pub query: String,
    #[validate(length(min = 1, message = "at least one waypoint is required"))]
    pub waypoints: Vec<LatLng>,
    #[validate(range(min = 1.0, max = 50000.0, message = "must be between 1 and 50000"))]
    pub radius_m: f64,
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub region: String,
}

impl RouteRequest {
    /// Build a route request by sampling evenly spaced vertices of a path
    /// DOCUMENTATION: Always keeps the first and last vertex when at least two are wanted
    pub fn along(
        query: impl Into<String>,
        path: &LineString<f64>,
        max_waypoints: usize,
        radius_m: f64,
    ) -> Self {
        RouteRequest {
            query: query.into(),
            waypoints: sample_waypoints(path, max_waypoints),
            radius_m,
            ..Default::default()
        }
    }
}

fn sample_waypoints(path: &LineString<f64>, max_waypoints: usize) -> Vec<LatLng> {
    let points: Vec<LatLng> = path.points().map(LatLng::from).collect();
    if max_waypoints == 0 || points.is_empty() {
        return Vec::new();
    }
    if points.len() <= max_waypoints {
        return points;
    }
    if max_waypoints == 1 {
        return vec![points[0]];
    }

    let last = points.len() - 1;
    let steps = max_waypoints - 1;
    (0..max_waypoints)
        .map(|i| points[(i * last + steps / 2) / steps])
        .collect()
}
