use std::sync::Arc;

use clap::Args;
use comfy_table::Table;
use courier_directions::{lat_lng::LatLng, provider::TravelMode};
use courier_optimizer::{
    directions::{directions_result::DirectionsResult, directions_service::DirectionsService},
    problem::stop::Coordinates,
};
use tracing::info;

use crate::{optimize::client, parsers};

#[derive(Args)]
pub struct DirectionsArgs {
    #[arg(long, value_parser = parsers::parse_lat_lng, allow_hyphen_values = true)]
    pub origin: LatLng,

    #[arg(long, value_parser = parsers::parse_lat_lng, allow_hyphen_values = true)]
    pub destination: LatLng,

    /// Intermediate point as LAT,LNG, can be repeated
    #[arg(
        short,
        long = "waypoint",
        value_parser = parsers::parse_lat_lng,
        allow_hyphen_values = true
    )]
    pub waypoints: Vec<LatLng>,

    /// driving, walking or bicycling
    #[arg(short, long, default_value = "driving")]
    pub mode: TravelMode,
}

pub async fn run(args: DirectionsArgs) -> anyhow::Result<()> {
    let service = DirectionsService::new(Arc::new(client(false)), args.mode);

    let origin = Coordinates::from(args.origin);
    let destination = Coordinates::from(args.destination);
    let waypoints: Vec<Coordinates> = args.waypoints.into_iter().map(Coordinates::from).collect();

    let directions = service
        .get_directions(Some(&origin), Some(&destination), &waypoints)
        .await?;

    println!("{}", steps_table(&directions));

    info!(
        "Finished: steps = {}, distance = {}m, duration = {}s",
        directions.steps.len(),
        directions.distance.value(),
        directions.duration.as_secs(),
    );

    Ok(())
}

fn steps_table(directions: &DirectionsResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Instruction", "Distance", "Duration"]);

    for (index, step) in directions.steps.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            step.instruction.clone(),
            step.distance.text.clone(),
            step.duration.text.clone(),
        ]);
    }

    table
}
