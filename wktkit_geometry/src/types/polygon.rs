use super::*;
use crate::{GeoJsonGeometry, WktError, WktResult};

/// A polygon: the first ring is the outer boundary, any further rings are holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Builds a polygon from a single open or closed outer ring, closing it if needed.
	#[must_use]
	pub fn from_outer(points: &[LngLat]) -> Self {
		let mut ring = RingGeometry::from(points);
		ring.close();
		Self(vec![ring])
	}

	#[must_use]
	pub fn outer(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// Area of the outer ring minus the area of all holes, in squared degrees.
	#[must_use]
	pub fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(outer) = rings.next() else {
			return 0.0;
		};
		rings.fold(outer.area().abs(), |sum, hole| sum - hole.area().abs())
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> WktResult<()> {
		if self.0.is_empty() {
			return Err(WktError::invalid("a polygon needs at least one ring"));
		}
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		// holes lie inside the outer ring
		self.outer().and_then(GeometryTrait::compute_bounds)
	}

	fn contains_point(&self, lng: f64, lat: f64) -> bool {
		let mut rings = self.0.iter();
		match rings.next() {
			Some(outer) => outer.contains_point(lng, lat) && !rings.any(|hole| hole.contains_point(lng, lat)),
			None => false,
		}
	}

	fn to_geojson(&self) -> GeoJsonGeometry {
		GeoJsonGeometry::Polygon(
			self
				.0
				.iter()
				.map(|ring| ring.0.iter().map(|c| c.to_array()).collect())
				.collect(),
		)
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<PolygonGeometry> for geo::Polygon<f64> {
	fn from(value: PolygonGeometry) -> Self {
		let mut rings = value.0.into_iter().map(geo::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
		geo::Polygon::new(exterior, rings.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[4, 4], [6, 4], [6, 6], [4, 6], [4, 4]],
		])
	}

	#[test]
	fn from_outer_closes_ring() {
		let polygon = PolygonGeometry::from_outer(&[LngLat::new(0.0, 0.0), LngLat::new(1.0, 0.0), LngLat::new(1.0, 1.0)]);
		assert_eq!(polygon.len(), 1);
		assert_eq!(polygon.outer().unwrap().len(), 4);
		assert!(polygon.verify().is_ok());
	}

	#[test]
	fn area_subtracts_holes() {
		assert_relative_eq!(with_hole().area(), 96.0);
		assert_eq!(PolygonGeometry::new().area(), 0.0);
	}

	#[test]
	fn verify() {
		assert!(with_hole().verify().is_ok());
		assert!(PolygonGeometry::new().verify().is_err());
		assert!(PolygonGeometry::from(&[[[0, 0], [1, 1], [0, 0]]]).verify().is_err());
	}

	#[test]
	fn contains_point_respects_holes() {
		let polygon = with_hole();
		assert!(polygon.contains_point(2.0, 2.0));
		assert!(!polygon.contains_point(5.0, 5.0));
		assert!(!polygon.contains_point(12.0, 5.0));
		assert!(!PolygonGeometry::new().contains_point(0.0, 0.0));
	}

	#[test]
	fn contains_point_agrees_with_geo() {
		use geo::Contains;
		let polygon = with_hole();
		let geo_polygon = geo::Polygon::from(polygon.clone());
		for (lng, lat) in [(2.0, 2.0), (5.0, 5.0), (12.0, 5.0), (9.5, 0.5)] {
			assert_eq!(
				polygon.contains_point(lng, lat),
				geo_polygon.contains(&geo::Point::new(lng, lat)),
				"disagreement at ({lng}, {lat})"
			);
		}
	}

	#[test]
	fn compute_bounds_uses_outer_ring() {
		assert_eq!(with_hole().compute_bounds(), Some([0.0, 0.0, 10.0, 10.0]));
		assert!(PolygonGeometry::new().compute_bounds().is_none());
	}

	#[test]
	fn to_geojson() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]);
		assert_eq!(
			polygon.to_geojson(),
			GeoJsonGeometry::Polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]])
		);
	}
}
