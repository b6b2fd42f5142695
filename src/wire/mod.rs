// src/wire/mod.rs
// DOCUMENTATION: Wire module organization
// PURPOSE: Re-export upstream payload shapes and the decoder

pub mod decode;
pub mod payloads;

pub use decode::decode;
pub use payloads::*;
