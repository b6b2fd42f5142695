// src/services/request_shaper.rs
// DOCUMENTATION: Outgoing request shaping
// PURPOSE: Turn typed requests into method, path, query, body and field mask
//
// Shaping is pure: no I/O, no clock, no shared state. Validation happens here so that
// an invalid request never reaches the transport.

use reqwest::Method;
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::errors::PlacesError;
use crate::models::{
    AutocompleteRequest, DetailsRequest, LatLng, LocationBias, LocationResolveRequest,
    NearbySearchRequest, PhotoMediaRequest, RouteRequest, SearchRequest,
};
use crate::services::mapper::price_level_code;

/// Base field list for details lookups, in emission order
pub const DETAILS_FIELD_MASK_BASE: [&str; 30] = [
    "id",
    "displayName",
    "formattedAddress",
    "location",
    "rating",
    "userRatingCount",
    "priceLevel",
    "priceRange",
    "types",
    "primaryType",
    "primaryTypeDisplayName",
    "businessStatus",
    "googleMapsUri",
    "editorialSummary",
    "generativeSummary",
    "reviewSummary",
    "regularOpeningHours",
    "currentOpeningHours",
    "nationalPhoneNumber",
    "websiteUri",
    "servesBeer",
    "servesBreakfast",
    "servesBrunch",
    "servesCocktails",
    "servesCoffee",
    "servesDessert",
    "servesDinner",
    "servesLunch",
    "servesVegetarianFood",
    "servesWine",
];

const SUMMARY_FIELDS: [&str; 9] = [
    "places.id",
    "places.displayName",
    "places.formattedAddress",
    "places.location",
    "places.rating",
    "places.userRatingCount",
    "places.priceLevel",
    "places.types",
    "places.currentOpeningHours",
];

const RESOLVE_FIELDS: [&str; 5] = [
    "places.id",
    "places.displayName",
    "places.formattedAddress",
    "places.location",
    "places.types",
];

const DEFAULT_RESOLVE_LIMIT: u32 = 5;

/// Request ready to hand to the transport (minus base URL and credentials)
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRequest {
    pub method: Method,
    /// Path relative to the API base URL, always starting with '/'
    pub path: String,
    /// Query parameters in emission order; blank hints are never present
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Comma-joined X-Goog-FieldMask value, None when the endpoint takes no mask
    pub field_mask: Option<String>,
}

/// Pure request shaping
pub trait Shape {
    fn shape(&self) -> Result<ShapedRequest, PlacesError>;
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Insert a string into a JSON body only when it is non-blank after trimming
fn insert_hint(body: &mut Map<String, Value>, key: &str, value: &str) {
    if let Some(value) = non_blank(value) {
        body.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn push_hint(query: &mut Vec<(String, String)>, key: &str, value: &str) {
    if let Some(value) = non_blank(value) {
        query.push((key.to_string(), value.to_string()));
    }
}

fn circle(bias: &LocationBias) -> Value {
    json!({
        "circle": {
            "center": {"latitude": bias.lat, "longitude": bias.lng},
            "radius": bias.radius_m,
        }
    })
}

fn non_blank_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| non_blank(v))
        .map(str::to_string)
        .collect()
}

/// Field mask for summary-shaped searches
pub fn summary_field_mask(with_page_token: bool) -> String {
    let mut fields: Vec<&str> = SUMMARY_FIELDS.to_vec();
    if with_page_token {
        fields.push("nextPageToken");
    }
    fields.join(",")
}

/// Field mask for details: fixed base list, then optional groups in request order
pub fn details_field_mask(req: &DetailsRequest) -> String {
    let mut fields: Vec<&str> = DETAILS_FIELD_MASK_BASE.to_vec();
    for group in &req.field_groups {
        let field = group.field();
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields.join(",")
}

impl Shape for SearchRequest {
    fn shape(&self) -> Result<ShapedRequest, PlacesError> {
        self.validate()?;

        let mut text_query = self.query.trim().to_string();
        let mut body = Map::new();

        if let Some(filters) = &self.filters {
            if let Some(keyword) = non_blank(&filters.keyword) {
                text_query.push(' ');
                text_query.push_str(keyword);
            }
            if let Some(included) = filters.types.iter().find_map(|t| non_blank(t)) {
                body.insert("includedType".to_string(), json!(included));
            }
            if let Some(open_now) = filters.open_now {
                body.insert("openNow".to_string(), json!(open_now));
            }
            if let Some(min_rating) = filters.min_rating {
                body.insert("minRating".to_string(), json!(min_rating));
            }
            let levels: Vec<&str> = filters
                .price_levels
                .iter()
                .filter_map(|level| price_level_code(*level))
                .collect();
            if !levels.is_empty() {
                body.insert("priceLevels".to_string(), json!(levels));
            }
        }

        body.insert("textQuery".to_string(), json!(text_query));
        if let Some(limit) = self.limit {
            body.insert("pageSize".to_string(), json!(limit));
        }
        insert_hint(&mut body, "pageToken", &self.page_token);
        if let Some(bias) = &self.location_bias {
            body.insert("locationBias".to_string(), circle(bias));
        }
        insert_hint(&mut body, "languageCode", &self.language);
        insert_hint(&mut body, "regionCode", &self.region);

        Ok(ShapedRequest {
            method: Method::POST,
            path: "/places:searchText".to_string(),
            query: Vec::new(),
            body: Some(Value::Object(body)),
            field_mask: Some(summary_field_mask(true)),
        })
    }
}

impl Shape for NearbySearchRequest {
    fn shape(&self) -> Result<ShapedRequest, PlacesError> {
        let restriction = self
            .location_restriction
            .as_ref()
            .ok_or_else(|| PlacesError::missing("location_restriction"))?;
        self.validate()?;

        let mut body = Map::new();
        body.insert("locationRestriction".to_string(), circle(restriction));

        let included = non_blank_list(&self.included_types);
        if !included.is_empty() {
            body.insert("includedTypes".to_string(), json!(included));
        }
        let excluded = non_blank_list(&self.excluded_types);
        if !excluded.is_empty() {
            body.insert("excludedTypes".to_string(), json!(excluded));
        }
        if let Some(limit) = self.limit {
            body.insert("maxResultCount".to_string(), json!(limit));
        }
        insert_hint(&mut body, "rankPreference", &self.rank_preference);
        insert_hint(&mut body, "languageCode", &self.language);
        insert_hint(&mut body, "regionCode", &self.region);

        Ok(ShapedRequest {
            method: Method::POST,
            path: "/places:searchNearby".to_string(),
            query: Vec::new(),
            body: Some(Value::Object(body)),
            field_mask: Some(summary_field_mask(false)),
        })
    }
}

impl Shape for AutocompleteRequest {
    fn shape(&self) -> Result<ShapedRequest, PlacesError> {
        self.validate()?;

        let mut body = Map::new();
        body.insert("input".to_string(), json!(self.input.trim()));
        insert_hint(&mut body, "sessionToken", &self.session_token);

        let types = non_blank_list(&self.types);
        if !types.is_empty() {
            body.insert("includedPrimaryTypes".to_string(), json!(types));
        }
        if let Some(bias) = &self.location_bias {
            body.insert("locationBias".to_string(), circle(bias));
        }
        insert_hint(&mut body, "languageCode", &self.language);
        insert_hint(&mut body, "regionCode", &self.region);

        Ok(ShapedRequest {
            method: Method::POST,
            path: "/places:autocomplete".to_string(),
            query: Vec::new(),
            body: Some(Value::Object(body)),
            field_mask: None,
        })
    }
}

impl Shape for DetailsRequest {
    fn shape(&self) -> Result<ShapedRequest, PlacesError> {
        self.validate()?;

        let mut query = Vec::new();
        push_hint(&mut query, "languageCode", &self.language);
        push_hint(&mut query, "regionCode", &self.region);

        Ok(ShapedRequest {
            method: Method::GET,
            path: format!("/places/{}", self.place_id.trim()),
            query,
            body: None,
            field_mask: Some(details_field_mask(self)),
        })
    }
}

impl Shape for LocationResolveRequest {
    fn shape(&self) -> Result<ShapedRequest, PlacesError> {
        self.validate()?;

        let mut body = Map::new();
        body.insert("textQuery".to_string(), json!(self.location_text.trim()));
        body.insert(
            "pageSize".to_string(),
            json!(self.limit.unwrap_or(DEFAULT_RESOLVE_LIMIT)),
        );
        insert_hint(&mut body, "languageCode", &self.language);
        insert_hint(&mut body, "regionCode", &self.region);

        Ok(ShapedRequest {
            method: Method::POST,
            path: "/places:searchText".to_string(),
            query: Vec::new(),
            body: Some(Value::Object(body)),
            field_mask: Some(RESOLVE_FIELDS.join(",")),
        })
    }
}

impl Shape for PhotoMediaRequest {
    fn shape(&self) -> Result<ShapedRequest, PlacesError> {
        self.validate()?;

        let name = self.name.trim();
        let name = name.strip_prefix('/').unwrap_or(name);

        let mut query = vec![("skipHttpRedirect".to_string(), "true".to_string())];
        if self.max_width_px > 0 {
            query.push(("maxWidthPx".to_string(), self.max_width_px.to_string()));
        }
        if self.max_height_px > 0 {
            query.push(("maxHeightPx".to_string(), self.max_height_px.to_string()));
        }

        Ok(ShapedRequest {
            method: Method::GET,
            path: format!("/{}/media", name),
            query,
            body: None,
            field_mask: None,
        })
    }
}

/// Shape one location-biased text search per waypoint
/// DOCUMENTATION: Fails on the first invalid input; nothing is shaped partially
pub fn shape_route(req: &RouteRequest) -> Result<Vec<(LatLng, ShapedRequest)>, PlacesError> {
    req.validate()?;

    req.waypoints
        .iter()
        .map(|waypoint| {
            let search = SearchRequest {
                query: req.query.clone(),
                location_bias: Some(LocationBias::new(*waypoint, req.radius_m)),
                limit: req.limit,
                language: req.language.clone(),
                region: req.region.clone(),
                ..Default::default()
            };
            search.shape().map(|shaped| (*waypoint, shaped))
        })
        .collect()
}
