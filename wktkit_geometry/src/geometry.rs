use crate::{
	GeoJsonGeometry, GeometryTrait, LineStringGeometry, LngLat, MultiPointGeometry, PolygonGeometry, WktError,
	WktResult,
	wkt::{join_pairs, parse_pair, parse_pair_list, parse_rings},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt, str::FromStr};

lazy_static! {
	static ref RE_GEOMETRY: Regex = Regex::new(r"(?is)^\s*([A-Z]+)\s*\((.*)\)\s*$").unwrap();
}

/// Any of the geometries this crate reads and writes.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
	Point(LngLat),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
}

impl Geometry {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
		}
	}

	/// Total number of positions, counting every ring of a polygon.
	#[must_use]
	pub fn coordinate_count(&self) -> usize {
		match self {
			Geometry::Point(_) => 1,
			Geometry::MultiPoint(g) => g.0.len(),
			Geometry::LineString(g) => g.0.len(),
			Geometry::Polygon(g) => g.0.iter().map(|ring| ring.0.len()).sum(),
		}
	}
}

impl GeometryTrait for Geometry {
	fn verify(&self) -> WktResult<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
		}
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
		}
	}

	fn contains_point(&self, lng: f64, lat: f64) -> bool {
		match self {
			Geometry::Polygon(g) => g.contains_point(lng, lat),
			_ => false,
		}
	}

	fn to_geojson(&self) -> GeoJsonGeometry {
		match self {
			Geometry::Point(g) => g.to_geojson(),
			Geometry::MultiPoint(g) => g.to_geojson(),
			Geometry::LineString(g) => g.to_geojson(),
			Geometry::Polygon(g) => g.to_geojson(),
		}
	}
}

/// Reads any supported WKT geometry, dispatching on its keyword.
///
/// Unlike the single-kind readers in [`crate::wkt`], the whole text must be the
/// geometry: no prefix, no trailing text.
pub fn parse_wkt(wkt: &str) -> WktResult<Geometry> {
	if wkt.trim().is_empty() {
		return Err(WktError::Absent);
	}

	let captures = RE_GEOMETRY
		.captures(wkt)
		.ok_or_else(|| WktError::malformed("WKT", "expected 'KEYWORD(...)'"))?;
	let keyword = captures[1].to_ascii_uppercase();
	let body = &captures[2];

	let geometry = match keyword.as_str() {
		"POINT" => Geometry::Point(parse_pair("POINT", body)?),
		"MULTIPOINT" => Geometry::MultiPoint(MultiPointGeometry(parse_pair_list("MULTIPOINT", body, true)?)),
		"LINESTRING" => {
			let coords = parse_pair_list("LINESTRING", body, false)?;
			if coords.len() < 2 {
				return Err(WktError::malformed(
					"LINESTRING",
					format!("a line string needs at least 2 points, got {}", coords.len()),
				));
			}
			Geometry::LineString(LineStringGeometry(coords))
		}
		"POLYGON" => {
			let inner = body
				.trim()
				.strip_prefix('(')
				.and_then(|s| s.strip_suffix(')'))
				.ok_or_else(|| WktError::malformed("POLYGON", "rings must be wrapped in parentheses"))?;
			Geometry::Polygon(PolygonGeometry(parse_rings("POLYGON", inner)?))
		}
		other => {
			return Err(WktError::malformed("WKT", format!("unsupported geometry type '{other}'")));
		}
	};

	log::trace!("read {} with {} coordinates", geometry.type_name(), geometry.coordinate_count());
	Ok(geometry)
}

impl FromStr for Geometry {
	type Err = WktError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_wkt(s)
	}
}

/// Writes the geometry as WKT. Polygon rings are written closed.
impl fmt::Display for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Geometry::Point(p) => write!(f, "POINT({p})"),
			Geometry::MultiPoint(g) => write!(f, "MULTIPOINT({})", join_pairs(&g.0)),
			Geometry::LineString(g) => write!(f, "LINESTRING({})", join_pairs(&g.0)),
			Geometry::Polygon(g) => {
				let rings = g
					.0
					.iter()
					.map(|ring| {
						let mut ring = ring.clone();
						ring.close();
						format!("({})", join_pairs(&ring.0))
					})
					.collect::<Vec<_>>();
				write!(f, "POLYGON({})", rings.join(", "))
			}
		}
	}
}

impl From<LngLat> for Geometry {
	fn from(value: LngLat) -> Self {
		Geometry::Point(value)
	}
}

impl From<MultiPointGeometry> for Geometry {
	fn from(value: MultiPointGeometry) -> Self {
		Geometry::MultiPoint(value)
	}
}

impl From<LineStringGeometry> for Geometry {
	fn from(value: LineStringGeometry) -> Self {
		Geometry::LineString(value)
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(value: PolygonGeometry) -> Self {
		Geometry::Polygon(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("POINT(1 2)", "Point", 1)]
	#[case("point (1 2)", "Point", 1)]
	#[case("MULTIPOINT(1 2, 3 4)", "MultiPoint", 2)]
	#[case("MultiPoint((1 2), (3 4), (5 6))", "MultiPoint", 3)]
	#[case("LINESTRING(1 2, 3 4)", "LineString", 2)]
	#[case(" POLYGON((0 0, 1 0, 1 1, 0 0)) ", "Polygon", 4)]
	#[case("POLYGON((0 0, 9 0, 9 9, 0 0), (1 1, 2 1, 2 2, 1 1))", "Polygon", 8)]
	fn dispatch(#[case] wkt: &str, #[case] type_name: &str, #[case] count: usize) {
		let geometry = parse_wkt(wkt).unwrap();
		assert_eq!(geometry.type_name(), type_name);
		assert_eq!(geometry.coordinate_count(), count);
	}

	#[rstest]
	#[case("CIRCLE(1 2)")]
	#[case("SRID=4326;POINT(1 2)")]
	#[case("POINT(1 2) trailing")]
	#[case("LINESTRING(1 2)")]
	#[case("POLYGON(0 0, 1 0, 1 1, 0 0)")]
	#[case("POINT(1 2, 3 4)")]
	#[case("not a geometry")]
	fn dispatch_rejects(#[case] wkt: &str) {
		assert!(matches!(parse_wkt(wkt), Err(WktError::Malformed { .. })));
	}

	#[test]
	fn dispatch_absent() {
		assert_eq!(parse_wkt(" \n"), Err(WktError::Absent));
	}

	#[test]
	fn from_str() {
		let geometry: Geometry = "POINT(-3.7 40.4)".parse().unwrap();
		assert_eq!(geometry, Geometry::Point(LngLat::new(-3.7, 40.4)));
	}

	#[rstest]
	#[case("POINT(1 2)")]
	#[case("MULTIPOINT(1 2, 3.5 -4)")]
	#[case("LINESTRING(10 20, 30 40, 50 60)")]
	#[case("POLYGON((0 0, 9 0, 9 9, 0 0), (1 1, 2 1, 2 2, 1 1))")]
	fn display_round_trip(#[case] wkt: &str) {
		assert_eq!(parse_wkt(wkt).unwrap().to_string(), wkt);
	}

	#[test]
	fn display_closes_polygon_rings() {
		let geometry = parse_wkt("POLYGON((0 0, 1 0, 1 1))").unwrap();
		assert_eq!(geometry.to_string(), "POLYGON((0 0, 1 0, 1 1, 0 0))");
	}

	#[test]
	fn delegates_to_geometry_trait() {
		let polygon = parse_wkt("POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))").unwrap();
		assert!(polygon.verify().is_ok());
		assert!(polygon.contains_point(5.0, 5.0));
		assert_eq!(polygon.compute_bounds(), Some([0.0, 0.0, 10.0, 10.0]));

		let open = parse_wkt("POLYGON((0 0, 1 0, 1 1))").unwrap();
		assert!(matches!(open.verify(), Err(WktError::InvalidGeometry(_))));

		let point = Geometry::from(LngLat::new(1.0, 2.0));
		assert_eq!(point.to_geojson(), GeoJsonGeometry::Point([1.0, 2.0]));
		assert!(!point.contains_point(1.0, 2.0));
	}
}
