use super::parse_position;
use wktkit_geometry::{LngLat, multi_point_to_wkt};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// points as "lng,lat", written in the given order
	#[arg(required = true, num_args = 1.., allow_hyphen_values = true, value_parser = parse_position)]
	positions: Vec<LngLat>,
}

pub fn run(arguments: &Subcommand) -> String {
	multi_point_to_wkt(&arguments.positions)
}
