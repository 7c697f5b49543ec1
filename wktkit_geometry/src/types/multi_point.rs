use super::{
	CompositeGeometryTrait, GeometryTrait, LngLat,
	traits::{bounds_of, verify_finite},
};
use crate::{GeoJsonGeometry, WktResult};

/// Represents a collection of points, e.g. the stops of a delivery route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPointGeometry(pub Vec<LngLat>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> WktResult<()> {
		verify_finite(&self.0)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}

	/// Points cannot contain other points, so this always returns `false`.
	fn contains_point(&self, _lng: f64, _lat: f64) -> bool {
		false
	}

	fn to_geojson(&self) -> GeoJsonGeometry {
		GeoJsonGeometry::MultiPoint(self.0.iter().map(|c| c.to_array()).collect())
	}
}

impl CompositeGeometryTrait<LngLat> for MultiPointGeometry {
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

crate::impl_from_array!(MultiPointGeometry, LngLat);

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> MultiPointGeometry {
		MultiPointGeometry::from(&[[1, 2], [3, 4], [5, 6]])
	}

	#[test]
	fn verify_ok() {
		assert!(sample().verify().is_ok());
		assert!(MultiPointGeometry::new().verify().is_ok());
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(sample().compute_bounds(), Some([1.0, 2.0, 5.0, 6.0]));
		assert!(MultiPointGeometry::new().compute_bounds().is_none());
	}

	#[test]
	fn contains_point_always_false() {
		assert!(!sample().contains_point(1.0, 2.0));
	}

	#[test]
	fn to_geojson() {
		assert_eq!(
			sample().to_geojson(),
			GeoJsonGeometry::MultiPoint(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])
		);
	}

	#[test]
	fn composite_push_first_last() {
		let mut mp = MultiPointGeometry::new();
		assert!(mp.is_empty());
		mp.push(LngLat::new(1.0, 2.0));
		mp.push(LngLat::new(3.0, 4.0));
		assert_eq!(mp.len(), 2);
		assert_eq!(mp.first(), Some(&LngLat::new(1.0, 2.0)));
		assert_eq!(mp.last(), Some(&LngLat::new(3.0, 4.0)));
		assert_eq!(mp.into_iter().count(), 2);
	}

	#[test]
	fn from_vec_of_tuples() {
		let mp = MultiPointGeometry::from(vec![(1.0, 2.0), (3.0, 4.0)]);
		assert_eq!(mp.into_inner(), vec![LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0)]);
	}

	#[test]
	fn from_parsed_slice() {
		let points = vec![LngLat::new(-3.7, 40.4), LngLat::new(2.2, 41.4)];
		let mp = MultiPointGeometry::from(&points[..]);
		assert_eq!(mp.as_vec(), &points);
	}
}
