use serde::{Deserialize, Serialize};

/// The only value of the `type` member of [`GeoJsonLineString`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStringTag {
	#[default]
	LineString,
}

/// A GeoJSON `LineString` object: `{"type":"LineString","coordinates":[[lng,lat],...]}`.
///
/// This is what route and tracking views draw, so it has its own type instead of
/// being one variant of [`super::GeoJsonGeometry`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonLineString {
	#[serde(rename = "type")]
	pub tag: LineStringTag,
	pub coordinates: Vec<[f64; 2]>,
}

impl GeoJsonLineString {
	#[must_use]
	pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
		Self {
			tag: LineStringTag::LineString,
			coordinates,
		}
	}
}
