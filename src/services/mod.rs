// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod mapper;
pub mod places_client;
pub mod request_shaper;
pub mod transport;

pub use places_client::*;
pub use request_shaper::{details_field_mask, shape_route, summary_field_mask, Shape, ShapedRequest};
pub use transport::*;
