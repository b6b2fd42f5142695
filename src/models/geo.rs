// src/models/geo.rs
// DOCUMENTATION: GeoJSON export for place lists
// PURPOSE: Hand search results to mapping tools without a custom schema

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};

use super::PlaceSummary;

/// Build a FeatureCollection of Point features
/// DOCUMENTATION: Geometry is [lng, lat], the feature id is the place id and
/// properties carry the serialized summary. Places without a location are skipped
pub fn to_feature_collection(places: &[PlaceSummary]) -> FeatureCollection {
    let features = places
        .iter()
        .filter_map(|place| {
            let location = place.location?;
            let geometry = Geometry::new(Value::Point(vec![location.lng, location.lat]));
            let properties: Option<JsonObject> = match serde_json::to_value(place) {
                Ok(serde_json::Value::Object(map)) => Some(map),
                _ => None,
            };
            Some(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: Some(Id::String(place.place_id.clone())),
                properties,
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
