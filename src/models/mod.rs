// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export domain and request components

pub mod autocomplete;
pub mod geo;
pub mod photo;
pub mod place;
pub mod request;
pub mod review;
pub mod route;

pub use autocomplete::*;
pub use geo::*;
pub use photo::*;
pub use place::*;
pub use request::*;
pub use review::*;
pub use route::*;
