use anyhow::{Context, Result, bail};
use wktkit_geometry::{Geometry, GeometryTrait, LatLng, parse_point_strict, parse_polygon, parse_wkt};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// WKT geometry, e.g. "POINT(-3.7 40.4)"
	#[arg()]
	wkt: String,

	/// print [lat, lng] pairs for map libraries instead of GeoJSON;
	/// points are range checked, polygons print their outer ring
	#[arg(long, verbatim_doc_comment)]
	lat_lng: bool,

	/// pretty print the JSON
	#[arg(long, short)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let geometry = parse_wkt(&arguments.wkt).with_context(|| format!("cannot read {:?}", arguments.wkt))?;
	log::info!("read a {}", geometry.type_name());

	let json = if arguments.lat_lng {
		lat_lng_json(&geometry, &arguments.wkt)?
	} else {
		serde_json::to_value(geometry.to_geojson())?
	};

	Ok(if arguments.pretty {
		serde_json::to_string_pretty(&json)?
	} else {
		serde_json::to_string(&json)?
	})
}

fn lat_lng_json(geometry: &Geometry, wkt: &str) -> Result<serde_json::Value> {
	let pairs: Vec<[f64; 2]> = match geometry {
		Geometry::Point(_) => vec![parse_point_strict(wkt)?.to_array()],
		Geometry::Polygon(_) => parse_polygon(wkt)?.into_iter().map(LatLng::to_array).collect(),
		other => bail!("--lat-lng supports points and polygons, not a {}", other.type_name()),
	};
	Ok(serde_json::to_value(pairs)?)
}
