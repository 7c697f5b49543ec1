use super::{GeometryTrait, LngLat, traits::verify_finite};
use crate::{GeoJsonGeometry, WktResult};

/// A single position is the point geometry; it needs no wrapper type.
impl GeometryTrait for LngLat {
	fn verify(&self) -> WktResult<()> {
		verify_finite([self])
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.lng, self.lat, self.lng, self.lat])
	}

	/// Points cannot contain other points, so this always returns `false`.
	fn contains_point(&self, _lng: f64, _lat: f64) -> bool {
		false
	}

	fn to_geojson(&self) -> GeoJsonGeometry {
		GeoJsonGeometry::Point(self.to_array())
	}
}
