use super::parse_position;
use anyhow::{Context, Result};
use wktkit_geometry::{GeometryTrait, LngLat, parse_wkt};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// WKT geometry, e.g. "POLYGON((0 0, 1 0, 1 1, 0 0))"
	#[arg()]
	wkt: String,

	/// also report whether the geometry contains this "lng,lat" position
	#[arg(long, value_name = "LNG,LAT", allow_hyphen_values = true, value_parser = parse_position)]
	contains: Option<LngLat>,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let geometry = parse_wkt(&arguments.wkt).with_context(|| format!("cannot read {:?}", arguments.wkt))?;
	geometry
		.verify()
		.with_context(|| format!("{} is not valid", geometry.type_name()))?;

	let mut lines = vec![
		format!("type: {}", geometry.type_name()),
		format!("coordinates: {}", geometry.coordinate_count()),
	];
	if let Some(bounds) = geometry.compute_bounds() {
		lines.push(format!("bounds: {bounds:?}"));
	}
	if let Some(position) = arguments.contains {
		lines.push(format!("contains {position}: {}", geometry.contains_point(position.lng, position.lat)));
	}
	Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[derive(Parser, Debug)]
	struct TestCli {
		#[command(flatten)]
		arguments: Subcommand,
	}

	fn render(args: &[&str]) -> Result<String> {
		let cli = TestCli::try_parse_from(std::iter::once("check").chain(args.iter().copied()))?;
		run(&cli.arguments)
	}

	#[test]
	fn valid_polygon() {
		assert_eq!(
			render(&["POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))", "--contains", "5,5"]).unwrap(),
			"type: Polygon\ncoordinates: 5\nbounds: [0.0, 0.0, 10.0, 10.0]\ncontains 5 5: true"
		);
	}

	#[test]
	fn outside_position() {
		let output = render(&["POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))", "--contains", "-5,5"]).unwrap();
		assert!(output.ends_with("contains -5 5: false"));
	}

	#[test]
	fn open_ring_is_invalid() {
		let err = render(&["POLYGON((0 0, 10 0, 10 10))"]).unwrap_err();
		assert_eq!(format!("{err:#}"), "Polygon is not valid: invalid geometry: a ring needs at least 4 points");
	}

	#[test]
	fn point() {
		assert_eq!(
			render(&["POINT(1 2)"]).unwrap(),
			"type: Point\ncoordinates: 1\nbounds: [1.0, 2.0, 1.0, 2.0]"
		);
	}
}
