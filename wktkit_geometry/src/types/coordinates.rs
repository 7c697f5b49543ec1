//! The two coordinate orders in use: `LngLat` as written in WKT and GeoJSON, and
//! `LatLng` as expected by web map libraries.
//!
//! They are separate types on purpose. Converting between them swaps the components
//! and must be spelled out with [`LngLat::to_lat_lng`] or [`LatLng::to_lng_lat`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A position in WKT order: longitude first, latitude second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
	pub lng: f64,
	pub lat: f64,
}

impl LngLat {
	#[must_use]
	pub fn new(lng: f64, lat: f64) -> Self {
		Self { lng, lat }
	}

	/// Returns the same position in map-library order.
	#[must_use]
	pub fn to_lat_lng(self) -> LatLng {
		LatLng::new(self.lat, self.lng)
	}

	/// Returns `[lng, lat]`, the GeoJSON position layout.
	#[must_use]
	pub fn to_array(self) -> [f64; 2] {
		[self.lng, self.lat]
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.lng.is_finite() && self.lat.is_finite()
	}

	/// Checks `-180 <= lng <= 180` and `-90 <= lat <= 90`.
	#[must_use]
	pub fn is_in_range(&self) -> bool {
		self.lng.abs() <= 180.0 && self.lat.abs() <= 90.0
	}
}

/// Writes the WKT coordinate pair `lng lat`.
impl Display for LngLat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.lng, self.lat)
	}
}

impl From<[f64; 2]> for LngLat {
	fn from(value: [f64; 2]) -> Self {
		LngLat::new(value[0], value[1])
	}
}

impl<'a, T> From<&'a [T; 2]> for LngLat
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		LngLat::new(value[0].into(), value[1].into())
	}
}

impl From<(f64, f64)> for LngLat {
	fn from(value: (f64, f64)) -> Self {
		LngLat::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for LngLat {
	fn from(value: &(f64, f64)) -> Self {
		LngLat::new(value.0, value.1)
	}
}

impl From<&LngLat> for LngLat {
	fn from(value: &LngLat) -> Self {
		*value
	}
}

impl From<LngLat> for [f64; 2] {
	fn from(value: LngLat) -> Self {
		value.to_array()
	}
}

impl From<geo::Coord> for LngLat {
	fn from(value: geo::Coord) -> Self {
		LngLat::new(value.x, value.y)
	}
}

impl From<LngLat> for geo::Coord {
	fn from(value: LngLat) -> Self {
		geo::Coord {
			x: value.lng,
			y: value.lat,
		}
	}
}

/// A position in map-library order: latitude first, longitude second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	#[must_use]
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Returns the same position in WKT order.
	#[must_use]
	pub fn to_lng_lat(self) -> LngLat {
		LngLat::new(self.lng, self.lat)
	}

	/// Returns `[lat, lng]`, the tuple layout map libraries take.
	#[must_use]
	pub fn to_array(self) -> [f64; 2] {
		[self.lat, self.lng]
	}
}

impl From<LatLng> for [f64; 2] {
	fn from(value: LatLng) -> Self {
		value.to_array()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_fields() {
		let c = LngLat::new(13.404954, 52.520008);
		assert_eq!(c.lng, 13.404954);
		assert_eq!(c.lat, 52.520008);
	}

	#[test]
	fn swapping_orders() {
		let c = LngLat::new(-74.006, 40.7128);
		let ll = c.to_lat_lng();
		assert_eq!(ll, LatLng::new(40.7128, -74.006));
		assert_eq!(ll.to_array(), [40.7128, -74.006]);
		assert_eq!(ll.to_lng_lat(), c);
		assert_eq!(c.to_array(), [-74.006, 40.7128]);
	}

	#[test]
	fn display_is_wkt_pair() {
		assert_eq!(LngLat::new(10.5, -20.25).to_string(), "10.5 -20.25");
		assert_eq!(LngLat::new(1.0, 2.0).to_string(), "1 2");
	}

	#[rstest]
	#[case(0.0, 0.0, true)]
	#[case(180.0, 90.0, true)]
	#[case(-180.0, -90.0, true)]
	#[case(180.1, 0.0, false)]
	#[case(0.0, -90.5, false)]
	#[case(200.0, 10.0, false)]
	fn range_check(#[case] lng: f64, #[case] lat: f64, #[case] expected: bool) {
		assert_eq!(LngLat::new(lng, lat).is_in_range(), expected);
	}

	#[test]
	fn finiteness() {
		assert!(LngLat::new(1.0, 2.0).is_finite());
		assert!(!LngLat::new(f64::NAN, 2.0).is_finite());
		assert!(!LngLat::new(1.0, f64::INFINITY).is_finite());
	}

	#[test]
	fn from_conversions() {
		assert_eq!(LngLat::from([1.0, 2.0]), LngLat::new(1.0, 2.0));
		assert_eq!(LngLat::from(&[3, 4]), LngLat::new(3.0, 4.0));
		assert_eq!(LngLat::from((5.0, 6.0)), LngLat::new(5.0, 6.0));
		assert_eq!(LngLat::from(&(7.0, 8.0)), LngLat::new(7.0, 8.0));
		let arr: [f64; 2] = LngLat::new(9.0, 10.0).into();
		assert_eq!(arr, [9.0, 10.0]);
	}

	#[test]
	fn geo_coord_round_trip() {
		let gc = geo::Coord { x: 11.0, y: 22.0 };
		let c = LngLat::from(gc);
		assert_eq!(c, LngLat::new(11.0, 22.0));
		assert_eq!(geo::Coord::from(c), gc);
	}

	#[test]
	fn serde_field_names() {
		let json = serde_json::to_string(&LngLat::new(1.5, 2.5)).unwrap();
		assert_eq!(json, r#"{"lng":1.5,"lat":2.5}"#);
		let json = serde_json::to_string(&LatLng::new(2.5, 1.5)).unwrap();
		assert_eq!(json, r#"{"lat":2.5,"lng":1.5}"#);
	}
}
