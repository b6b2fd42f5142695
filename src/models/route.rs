// src/models/route.rs

use serde::{Deserialize, Serialize};

use super::{LatLng, PlaceSummary};

/// Search results around one waypoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteWaypoint {
    pub location: LatLng,
    pub results: Vec<PlaceSummary>,
}

/// Per-waypoint results in route order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub waypoints: Vec<RouteWaypoint>,
}
