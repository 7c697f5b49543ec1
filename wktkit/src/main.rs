mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Write a POINT from a longitude and a latitude
	Point(tools::point::Subcommand),

	#[command(name = "multipoint")]
	/// Write a MULTIPOINT from a list of positions
	MultiPoint(tools::multi_point::Subcommand),

	/// Write a closed POLYGON from a list of positions
	Polygon(tools::polygon::Subcommand),

	#[clap(alias = "read")]
	/// Read a WKT geometry and print it as GeoJSON
	Parse(tools::parse::Subcommand),

	#[clap(alias = "verify")]
	/// Read a WKT geometry and check that it is valid
	Check(tools::check::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	log::debug!("running {:?}", cli.command);
	let output = match &cli.command {
		Commands::Point(arguments) => tools::point::run(arguments),
		Commands::MultiPoint(arguments) => tools::multi_point::run(arguments),
		Commands::Polygon(arguments) => tools::polygon::run(arguments)?,
		Commands::Parse(arguments) => tools::parse::run(arguments)?,
		Commands::Check(arguments) => tools::check::run(arguments)?,
	};
	println!("{output}");
	Ok(())
}
