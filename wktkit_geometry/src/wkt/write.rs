//! Writers producing the WKT text the backend stores in its geometry columns.

use crate::{LngLat, WktError, WktResult};

/// Joins positions as `lng lat, lng lat, ...`.
pub(crate) fn join_pairs<'a>(points: impl IntoIterator<Item = &'a LngLat>) -> String {
	points
		.into_iter()
		.map(|p| p.to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

/// Writes `POINT(lng lat)`. The coordinates are not range checked.
pub fn point_to_wkt(lng: f64, lat: f64) -> String {
	format!("POINT({})", LngLat::new(lng, lat))
}

/// Writes `MULTIPOINT(lng lat, ...)` in the given order; no points give `MULTIPOINT()`.
pub fn multi_point_to_wkt(points: &[LngLat]) -> String {
	format!("MULTIPOINT({})", join_pairs(points))
}

/// Writes `POLYGON((p1, ..., pn, p1))`.
///
/// The ring is always closed by repeating the first point, even if the caller already
/// passed a closed ring. Fewer than 3 points fail with [`WktError::InvalidGeometry`].
pub fn polygon_to_wkt(points: &[LngLat]) -> WktResult<String> {
	let Some(first) = points.first() else {
		return Err(WktError::invalid("a polygon needs at least 3 points, got 0"));
	};
	if points.len() < 3 {
		return Err(WktError::invalid(format!(
			"a polygon needs at least 3 points, got {}",
			points.len()
		)));
	}
	Ok(format!("POLYGON(({}))", join_pairs(points.iter().chain([first]))))
}
