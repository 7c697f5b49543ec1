use super::{
	CompositeGeometryTrait, GeometryTrait, LngLat,
	traits::{bounds_of, verify_finite},
};
use crate::{GeoJsonGeometry, GeoJsonLineString, WktError, WktResult};

/// Represents a sequence of connected positions, e.g. a tracked route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<LngLat>);

impl LineStringGeometry {
	/// Returns the GeoJSON `LineString` object for this line.
	#[must_use]
	pub fn to_geojson_line_string(&self) -> GeoJsonLineString {
		GeoJsonLineString::new(self.0.iter().map(|c| c.to_array()).collect())
	}
}

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the line has at least two finite points.
	fn verify(&self) -> WktResult<()> {
		if self.0.len() < 2 {
			return Err(WktError::invalid("a line string needs at least 2 points"));
		}
		verify_finite(&self.0)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}

	fn contains_point(&self, _lng: f64, _lat: f64) -> bool {
		false
	}

	fn to_geojson(&self) -> GeoJsonGeometry {
		GeoJsonGeometry::LineString(self.0.iter().map(|c| c.to_array()).collect())
	}
}

impl CompositeGeometryTrait<LngLat> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LngLat> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LngLat> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LngLat> {
		self.0
	}
}

crate::impl_from_array!(LineStringGeometry, LngLat);

impl From<LineStringGeometry> for geo::LineString<f64> {
	fn from(value: LineStringGeometry) -> Self {
		geo::LineString::new(value.0.into_iter().map(geo::Coord::from).collect())
	}
}
