//! GeoJSON output for the crate's geometries.
//!
//! GeoJSON positions are always `[longitude, latitude]`, the same order as WKT.

mod geometry;
mod line_string;

pub use geometry::*;
pub use line_string::*;
