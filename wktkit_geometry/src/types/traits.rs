use super::LngLat;
use crate::{GeoJsonGeometry, WktResult};
use std::fmt::Debug;

/// Defines the basic interface shared by all geometry values.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry.
	/// For example, checks if there are enough points or if rings are properly closed.
	/// Returns [`crate::WktError::InvalidGeometry`] if the geometry is invalid.
	fn verify(&self) -> WktResult<()>;

	/// Compute the bounding box of this geometry.
	///
	/// Returns `Some([lng_min, lat_min, lng_max, lat_max])`, or `None` if the geometry is empty.
	fn compute_bounds(&self) -> Option<[f64; 4]>;

	/// Checks if a position is inside this geometry.
	///
	/// Closed geometries (rings, polygons) use ray casting. Points and lines always
	/// return `false`. Positions exactly on the boundary may return either value.
	fn contains_point(&self, lng: f64, lat: f64) -> bool;

	/// Returns the GeoJSON geometry object, coordinates in `[lng, lat]` order.
	fn to_geojson(&self) -> GeoJsonGeometry;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a ring is made of coordinates.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over owned elements of the composite geometry.
	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

pub(crate) fn bounds_of<'a>(coords: impl IntoIterator<Item = &'a LngLat>) -> Option<[f64; 4]> {
	let mut iter = coords.into_iter();
	let first = iter.next()?;
	let mut bounds = [first.lng, first.lat, first.lng, first.lat];
	for c in iter {
		bounds[0] = bounds[0].min(c.lng);
		bounds[1] = bounds[1].min(c.lat);
		bounds[2] = bounds[2].max(c.lng);
		bounds[3] = bounds[3].max(c.lat);
	}
	Some(bounds)
}

pub(crate) fn verify_finite<'a>(coords: impl IntoIterator<Item = &'a LngLat>) -> WktResult<()> {
	match coords.into_iter().find(|c| !c.is_finite()) {
		Some(c) => Err(crate::WktError::invalid(format!("coordinate {c:?} is not finite"))),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bounds_of_coordinates() {
		let coords = [LngLat::new(3.0, -1.0), LngLat::new(-2.0, 4.0), LngLat::new(1.0, 1.0)];
		assert_eq!(bounds_of(&coords), Some([-2.0, -1.0, 3.0, 4.0]));
		assert_eq!(bounds_of(&[]), None);
	}

	#[test]
	fn finite_check() {
		assert!(verify_finite(&[LngLat::new(1.0, 2.0)]).is_ok());
		assert!(verify_finite(&[LngLat::new(1.0, 2.0), LngLat::new(f64::NAN, 0.0)]).is_err());
	}
}
