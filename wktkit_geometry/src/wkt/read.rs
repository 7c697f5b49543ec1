//! Readers for the WKT geometries found in backend payloads.
//!
//! Two coordinate orders come out of here. [`parse_point`], [`parse_point_list`] and
//! [`parse_multi_point`] keep the WKT order and return [`LngLat`]. [`parse_point_strict`]
//! and [`parse_polygon`] return [`LatLng`], which is what map widgets consume.

use super::grammar::{parse_pair, parse_pair_list, parse_rings};
use crate::{
	GeoJsonLineString, LatLng, LineStringGeometry, LngLat, MultiPointGeometry, PolygonGeometry, WktError, WktResult,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref RE_POINT: Regex = Regex::new(r"(?i)\bPOINT\s*\(([^)]*)\)").unwrap();
	static ref RE_MULTIPOINT: Regex = Regex::new(r"(?i)\bMULTIPOINT\s*\(((?:[^()]|\([^()]*\))*)\)").unwrap();
	static ref RE_POLYGON: Regex = Regex::new(r"(?i)^\s*POLYGON\s*\(\s*\((.*)\)\s*\)\s*$").unwrap();
	static ref RE_LINESTRING: Regex = Regex::new(r"(?i)^LINESTRING\s*\((.+)\)$").unwrap();
	static ref RE_VALID_POINT: Regex = Regex::new(r"(?i)^POINT\(\s*-?[0-9]+\.?[0-9]*\s+-?[0-9]+\.?[0-9]*\s*\)$").unwrap();
}

fn check_present(wkt: &str) -> WktResult<&str> {
	let trimmed = wkt.trim();
	if trimmed.is_empty() {
		Err(WktError::Absent)
	} else {
		Ok(trimmed)
	}
}

fn traced<T>(kind: &str, wkt: &str, result: WktResult<T>) -> WktResult<T> {
	if let Err(err) = &result {
		log::trace!("could not read {kind} from {wkt:?}: {err}");
	}
	result
}

/// Reads the first `POINT(lng lat)` found anywhere in the text.
///
/// Lenient: the keyword may appear after a prefix such as `SRID=4326;`, and the
/// coordinates are not range checked.
pub fn parse_point(wkt: &str) -> WktResult<LngLat> {
	traced("POINT", wkt, read_point(wkt))
}

fn read_point(wkt: &str) -> WktResult<LngLat> {
	let wkt = check_present(wkt)?;
	let captures = RE_POINT
		.captures(wkt)
		.ok_or_else(|| WktError::malformed("POINT", "expected 'POINT(lng lat)'"))?;
	parse_pair("POINT", &captures[1])
}

/// Reads a point and returns it as `LatLng`, rejecting coordinates outside of
/// `[-180, 180]` x `[-90, 90]` with [`WktError::OutOfRange`].
pub fn parse_point_strict(wkt: &str) -> WktResult<LatLng> {
	traced("POINT", wkt, read_point_strict(wkt))
}

fn read_point_strict(wkt: &str) -> WktResult<LatLng> {
	let point = read_point(wkt)?;
	if !point.is_in_range() {
		return Err(WktError::OutOfRange {
			lng: point.lng,
			lat: point.lat,
		});
	}
	Ok(point.to_lat_lng())
}

/// Reads a single point and wraps it in a one-element list, for callers that treat
/// every location as a list of markers.
pub fn parse_point_list(wkt: &str) -> WktResult<Vec<LngLat>> {
	parse_point(wkt).map(|point| vec![point])
}

/// Reads `MULTIPOINT(lng lat, ...)` or `MULTIPOINT((lng lat), ...)`, keeping the order.
///
/// `MULTIPOINT()` yields an empty list, mirroring [`super::multi_point_to_wkt`].
pub fn parse_multi_point(wkt: &str) -> WktResult<Vec<LngLat>> {
	traced("MULTIPOINT", wkt, read_multi_point(wkt))
}

fn read_multi_point(wkt: &str) -> WktResult<Vec<LngLat>> {
	let wkt = check_present(wkt)?;
	let captures = RE_MULTIPOINT
		.captures(wkt)
		.ok_or_else(|| WktError::malformed("MULTIPOINT", "expected 'MULTIPOINT(lng lat, ...)'"))?;
	parse_pair_list("MULTIPOINT", &captures[1], true)
}

/// Same as [`parse_multi_point`], returning a geometry value.
pub fn parse_multi_point_geometry(wkt: &str) -> WktResult<MultiPointGeometry> {
	parse_multi_point(wkt).map(MultiPointGeometry)
}

/// Reads `POLYGON((lng lat, ...))` and returns the outer ring as `LatLng`.
///
/// Ring closure is not required. Holes are read and validated but not returned;
/// use [`parse_polygon_geometry`] to keep them.
pub fn parse_polygon(wkt: &str) -> WktResult<Vec<LatLng>> {
	let polygon = parse_polygon_geometry(wkt)?;
	Ok(polygon
		.0
		.into_iter()
		.next()
		.map(|outer| outer.0.into_iter().map(LngLat::to_lat_lng).collect())
		.unwrap_or_default())
}

/// Reads a whole `POLYGON((outer), (hole), ...)` with all of its rings.
pub fn parse_polygon_geometry(wkt: &str) -> WktResult<PolygonGeometry> {
	traced("POLYGON", wkt, read_polygon(wkt))
}

fn read_polygon(wkt: &str) -> WktResult<PolygonGeometry> {
	let wkt = check_present(wkt)?;
	let captures = RE_POLYGON
		.captures(wkt)
		.ok_or_else(|| WktError::malformed("POLYGON", "expected 'POLYGON((lng lat, ...))'"))?;
	parse_rings("POLYGON", &captures[1]).map(PolygonGeometry)
}

/// Reads `LINESTRING(lng lat, lng lat, ...)` with at least two points.
pub fn parse_line_string(wkt: &str) -> WktResult<LineStringGeometry> {
	traced("LINESTRING", wkt, read_line_string(wkt))
}

fn read_line_string(wkt: &str) -> WktResult<LineStringGeometry> {
	let wkt = check_present(wkt)?;
	let captures = RE_LINESTRING
		.captures(wkt)
		.ok_or_else(|| WktError::malformed("LINESTRING", "expected 'LINESTRING(lng lat, ...)'"))?;
	let coords = parse_pair_list("LINESTRING", &captures[1], false)?;
	if coords.len() < 2 {
		return Err(WktError::malformed(
			"LINESTRING",
			format!("a line string needs at least 2 points, got {}", coords.len()),
		));
	}
	Ok(LineStringGeometry(coords))
}

/// Converts a line string, as stored by PostGIS for tracked routes, to a GeoJSON `LineString`.
///
/// `None` and empty text give [`WktError::Absent`]. Every failure is logged as a warning.
pub fn line_string_to_geojson(wkt: Option<&str>) -> WktResult<GeoJsonLineString> {
	let result = match wkt {
		None => Err(WktError::Absent),
		Some(wkt) => read_line_string(wkt).map(|line| line.to_geojson_line_string()),
	};
	if let Err(err) = &result {
		log::warn!("error parsing WKT line string {wkt:?}: {err}");
	}
	result
}

/// Checks the exact form the dealer forms submit: `POINT(lng lat)` with nothing around it,
/// plain decimal coordinates and no space before the parenthesis.
pub fn is_valid_point_wkt(wkt: &str) -> bool {
	RE_VALID_POINT.is_match(wkt)
}
