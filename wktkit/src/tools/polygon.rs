use super::parse_position;
use anyhow::{Context, Result};
use wktkit_geometry::{LngLat, polygon_to_wkt};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// corners of the polygon as "lng,lat", at least three;
	/// the ring is closed automatically
	#[arg(required = true, num_args = 1.., allow_hyphen_values = true, value_parser = parse_position, verbatim_doc_comment)]
	positions: Vec<LngLat>,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	polygon_to_wkt(&arguments.positions).context("cannot write polygon")
}
