// src/wire/decode.rs
// DOCUMENTATION: Strict structural decoding of upstream payloads
// PURPOSE: Turn raw response bytes into wire structs or fail the whole call

use serde::de::DeserializeOwned;

use crate::errors::PlacesError;

/// Decode a raw payload into a wire struct
/// DOCUMENTATION: Wrong types or truncated JSON fail with PlacesError::Decode naming
/// the target entity. Nothing is partially populated
pub fn decode<T: DeserializeOwned>(bytes: &[u8], entity: &'static str) -> Result<T, PlacesError> {
    serde_json::from_slice(bytes).map_err(|source| {
        log::error!("Failed to decode {}: {}", entity, source);
        PlacesError::Decode { entity, source }
    })
}
