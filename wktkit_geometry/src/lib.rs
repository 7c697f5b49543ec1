//! Reading and writing the WKT geometries that location-aware backends store for
//! clients, dealers, coverage areas and tracked routes.
//!
//! The single-kind functions in [`wkt`] are the codec proper. [`parse_wkt`] reads any
//! supported geometry into a [`Geometry`], and [`GeoJsonGeometry`] turns it into
//! GeoJSON for map views.

mod error;
mod geometry;
pub mod geojson;
mod types;
pub mod wkt;

pub use error::*;
pub use geojson::*;
pub use geometry::*;
pub use types::*;
pub use wkt::*;
