use super::GeoJsonLineString;
use serde::{Deserialize, Serialize};

/// A GeoJSON geometry object such as `{"type":"Point","coordinates":[1.0,2.0]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeoJsonGeometry {
	Point([f64; 2]),
	MultiPoint(Vec<[f64; 2]>),
	LineString(Vec<[f64; 2]>),
	Polygon(Vec<Vec<[f64; 2]>>),
}

impl GeoJsonGeometry {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoJsonGeometry::Point(_) => "Point",
			GeoJsonGeometry::MultiPoint(_) => "MultiPoint",
			GeoJsonGeometry::LineString(_) => "LineString",
			GeoJsonGeometry::Polygon(_) => "Polygon",
		}
	}

	/// Serializes to compact JSON.
	#[must_use]
	pub fn stringify(&self) -> String {
		// plain enums of floats and arrays cannot fail to serialize
		serde_json::to_string(self).unwrap_or_default()
	}
}

impl From<GeoJsonLineString> for GeoJsonGeometry {
	fn from(value: GeoJsonLineString) -> Self {
		GeoJsonGeometry::LineString(value.coordinates)
	}
}
