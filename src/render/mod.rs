// src/render/mod.rs
// DOCUMENTATION: Text rendering module

pub mod color;
pub mod text;

pub use color::{color_enabled, Color};
pub use text::{
    format_money, format_price_range, format_title, render_autocomplete, render_details,
    render_nearby, render_resolve, render_route, render_search, unique_strings, EMPTY_RESULTS,
};
