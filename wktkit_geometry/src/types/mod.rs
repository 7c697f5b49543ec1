// Geometry value types of the `wktkit_geometry` crate: the two coordinate orders
// (`LngLat`, `LatLng`) and the multipoint, line string, ring and polygon geometries
// built from them. All of them implement `GeometryTrait`, the composite ones also
// `CompositeGeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_point;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
