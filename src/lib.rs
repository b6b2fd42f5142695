// src/lib.rs
// DOCUMENTATION: Google Places (API v1) client core
// PURPOSE: Shape requests, call the API, map wire payloads into domain models and render them
//
// Layout:
//   config   - ClientConfig loaded from the environment
//   errors   - PlacesError, the single error type of the crate
//   models   - domain requests and responses (snake_case JSON)
//   wire     - upstream payloads (camelCase JSON) and the decoder
//   services - request shaping, mapping, transport and the PlacesClient facade
//   render   - deterministic text reports

pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod services;
pub mod wire;

pub use config::ClientConfig;
pub use errors::PlacesError;
pub use services::{CallContext, PlacesClient, ReqwestTransport, Transport};
