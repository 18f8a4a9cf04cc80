use std::{fs::File, io::BufReader, path::PathBuf, sync::Arc};

use clap::Args;
use comfy_table::Table;
use courier_directions::{
    directions_client::DirectionsClient, lat_lng::LatLng, offline::OfflineProvider,
    provider::TravelMode,
};
use courier_optimizer::{
    problem::stop::{StartLocation, Stop},
    solution::route_order::RouteOrder,
    solver::{
        refresh_coordinator::RouteRefreshCoordinator, route_optimizer::RouteOptimizer,
        route_optimizer_params::RouteOptimizerParams,
    },
};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct OptimizeArgs {
    /// JSON file with the list of stops
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Courier position as LAT,LNG
    #[arg(short, long, value_parser = parsers::parse_lat_lng, allow_hyphen_values = true)]
    pub start: LatLng,

    /// driving, walking or bicycling
    #[arg(short, long, default_value = "driving")]
    pub mode: TravelMode,

    /// Try a traffic-aware optimization first
    #[arg(long)]
    pub traffic: bool,

    /// Never call the directions provider
    #[arg(long)]
    pub offline: bool,
}

pub fn client(offline: bool) -> DirectionsClient {
    if offline {
        DirectionsClient::Offline(OfflineProvider)
    } else {
        DirectionsClient::from_env()
    }
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let stops: Vec<Stop> = serde_json::from_reader(BufReader::new(f))?;

    let optimizer = RouteOptimizer::new(
        Arc::new(client(args.offline)),
        RouteOptimizerParams {
            mode: args.mode,
            ..RouteOptimizerParams::default()
        },
    );
    let start: StartLocation = args.start.into();

    let route = if args.traffic {
        let outcome = RouteRefreshCoordinator::new(optimizer)
            .refresh(&stops, &start)
            .await?;
        info!("Optimization type: {}", outcome.optimization_type);
        outcome.route
    } else {
        optimizer.optimize(&stops, &start).await?
    };

    println!("{}", route_table(&route));

    info!(
        "Finished: method = {}, stops = {}, distance = {}m, duration = {}s, excluded = {}",
        route.method,
        route.stop_count,
        route.total_distance.value(),
        route.total_duration.as_secs(),
        route.excluded.len(),
    );

    Ok(())
}

fn route_table(route: &RouteOrder) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Lat", "Lng", "From previous (m)"]);

    for route_stop in &route.stops {
        let coordinates = route_stop.stop.coordinates;
        table.add_row(vec![
            (route_stop.position + 1).to_string(),
            route_stop.stop.id.to_string(),
            coordinates.lat.map(|lat| lat.to_string()).unwrap_or_default(),
            coordinates.lng.map(|lng| lng.to_string()).unwrap_or_default(),
            route_stop
                .distance_from_previous
                .map(|distance| format!("{:.0}", distance.value()))
                .unwrap_or_else(|| String::from("-")),
        ]);
    }

    table
}
