//! Shared building blocks of the WKT readers: compiled patterns, number tokens,
//! coordinate pairs and ring lists.

use crate::{LngLat, RingGeometry, WktError, WktResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	/// An optionally signed decimal number: `12`, `-12.5`, `+.5`, `12.`
	static ref RE_NUMBER: Regex = Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap();

	/// The `),(` between two rings of a polygon.
	static ref RE_RING_SEPARATOR: Regex = Regex::new(r"\)\s*,\s*\(").unwrap();
}

/// Parses one coordinate token. Only plain decimal notation is accepted, so `NaN`,
/// `inf` and exponents are rejected even though `f64::from_str` would take them.
pub(crate) fn parse_number(token: &str) -> WktResult<f64> {
	if !RE_NUMBER.is_match(token) {
		return Err(WktError::NonNumericCoordinate(token.to_string()));
	}
	match token.parse::<f64>() {
		Ok(value) if value.is_finite() => Ok(value),
		_ => Err(WktError::NonNumericCoordinate(token.to_string())),
	}
}

/// Parses `lng lat` separated by one or more whitespace characters.
pub(crate) fn parse_pair(kind: &'static str, text: &str) -> WktResult<LngLat> {
	let tokens = text.split_whitespace().collect::<Vec<_>>();
	if tokens.len() != 2 {
		return Err(WktError::malformed(
			kind,
			format!("expected a 'lng lat' pair but got '{}'", text.trim()),
		));
	}
	Ok(LngLat::new(parse_number(tokens[0])?, parse_number(tokens[1])?))
}

/// Parses a comma separated list of pairs. Empty input yields an empty list.
///
/// With `allow_wrapped` every pair may be wrapped in its own parentheses,
/// as in `MULTIPOINT((1 2), (3 4))`.
pub(crate) fn parse_pair_list(kind: &'static str, text: &str, allow_wrapped: bool) -> WktResult<Vec<LngLat>> {
	if text.trim().is_empty() {
		return Ok(Vec::new());
	}

	text
		.split(',')
		.map(|item| {
			let mut item = item.trim();
			if allow_wrapped && let Some(inner) = item.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
				item = inner;
			}
			if item.is_empty() {
				return Err(WktError::malformed(kind, "empty coordinate pair"));
			}
			parse_pair(kind, item)
		})
		.collect()
}

/// Parses the inside of `POLYGON( ... )` after the outer `(` of the first ring and
/// before the `)` of the last ring, e.g. `0 0, 1 0, 1 1, 0 0), (0.2 0.2, ...`.
pub(crate) fn parse_rings(kind: &'static str, text: &str) -> WktResult<Vec<RingGeometry>> {
	RE_RING_SEPARATOR
		.split(text)
		.map(|ring| {
			let coords = parse_pair_list(kind, ring, false)?;
			if coords.is_empty() {
				return Err(WktError::malformed(kind, "empty ring"));
			}
			Ok(RingGeometry(coords))
		})
		.collect()
}
