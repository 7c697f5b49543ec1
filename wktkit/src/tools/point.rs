use super::parse_degrees;
use wktkit_geometry::point_to_wkt;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// longitude in degrees
	#[arg(value_parser = parse_degrees)]
	lng: f64,

	/// latitude in degrees
	#[arg(value_parser = parse_degrees)]
	lat: f64,
}

pub fn run(arguments: &Subcommand) -> String {
	point_to_wkt(arguments.lng, arguments.lat)
}
