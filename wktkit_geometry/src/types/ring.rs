use super::{
	CompositeGeometryTrait, GeometryTrait, LngLat,
	traits::{bounds_of, verify_finite},
};
use crate::{GeoJsonGeometry, WktError, WktResult};

/// Represents a closed ring: a connected series of positions forming a loop.
/// This structure is the building block of polygons, e.g. the boundary of a coverage area.
/// The first and last positions must be identical for the ring to be closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingGeometry(pub Vec<LngLat>);

impl RingGeometry {
	/// Returns `true` if the ring has positions and its first and last ones coincide.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Repeats the first position at the end unless the ring is already closed.
	pub fn close(&mut self) {
		if let Some(first) = self.0.first().copied()
			&& !self.is_closed()
		{
			self.0.push(first);
		}
	}

	/// Computes the signed area of the ring using the shoelace formula,
	/// in squared degrees. Counterclockwise rings are positive.
	#[must_use]
	pub fn area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.lng - p1.lng) * (p1.lat + p2.lat);
				p2 = p1;
			}
		}
		sum / 2.0
	}
}

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring has at least 4 positions (3 unique plus the closing one)
	/// and is closed.
	fn verify(&self) -> WktResult<()> {
		if self.0.len() < 4 {
			return Err(WktError::invalid("a ring needs at least 4 points"));
		}
		if !self.is_closed() {
			return Err(WktError::invalid("a ring must be closed"));
		}
		verify_finite(&self.0)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}

	fn contains_point(&self, lng: f64, lat: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 3 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let (xi, yi) = (coords[i].lng, coords[i].lat);
			let (xj, yj) = (coords[j].lng, coords[j].lat);

			// edge crosses the horizontal ray to the right of the position
			if ((yi > lat) != (yj > lat)) && (lng < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}

	fn to_geojson(&self) -> GeoJsonGeometry {
		GeoJsonGeometry::Polygon(vec![self.0.iter().map(|c| c.to_array()).collect()])
	}
}

impl CompositeGeometryTrait<LngLat> for RingGeometry {
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

crate::impl_from_array!(RingGeometry, LngLat);

impl From<RingGeometry> for geo::LineString<f64> {
	fn from(value: RingGeometry) -> Self {
		geo::LineString::new(value.0.into_iter().map(geo::Coord::from).collect())
	}
}
