pub mod check;
pub mod multi_point;
pub mod parse;
pub mod point;
pub mod polygon;

use anyhow::{Context, Result, bail};
use wktkit_geometry::LngLat;

/// Parses a single coordinate in degrees. `nan` and `inf` are refused, the WKT
/// readers would not take them back.
pub fn parse_degrees(value: &str) -> Result<f64> {
	let degrees = value.trim().parse::<f64>()?;
	if !degrees.is_finite() {
		bail!("'{}' is not a finite number", value.trim());
	}
	Ok(degrees)
}

/// Parses a command line position written as `lng,lat`.
pub fn parse_position(value: &str) -> Result<LngLat> {
	let Some((lng, lat)) = value.split_once(',') else {
		bail!("expected a position as 'lng,lat', got '{value}'");
	};
	let lng = parse_degrees(lng).with_context(|| format!("invalid longitude in '{value}'"))?;
	let lat = parse_degrees(lat).with_context(|| format!("invalid latitude in '{value}'"))?;
	Ok(LngLat::new(lng, lat))
}
