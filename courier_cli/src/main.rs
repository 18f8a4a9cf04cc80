use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{directions::DirectionsArgs, optimize::OptimizeArgs};

mod directions;
mod optimize;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Order a list of stops starting from the courier position
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Turn-by-turn directions between two points
    #[command(visible_alias = "d")]
    Directions {
        #[command(flatten)]
        args: DirectionsArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(args).await?,
        Some(Commands::Directions { args }) => directions::run(args).await?,
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use courier_directions::{lat_lng::LatLng, provider::TravelMode};

    use super::*;

    #[test]
    fn test_optimize_southern_start() {
        let cli = Cli::try_parse_from([
            "courier", "optimize", "-i", "stops.json", "--start", "-33.9,151.2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Optimize { args }) => {
                assert_eq!(args.start, LatLng::new(-33.9, 151.2));
                assert_eq!(args.mode, TravelMode::Driving);
                assert!(!args.traffic);
            }
            _ => panic!("expected the optimize command"),
        }
    }

    #[test]
    fn test_directions_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "courier",
            "directions",
            "--origin",
            "-33.9,151.2",
            "--destination",
            "-34.0,-58.4",
            "--waypoint",
            "-33.95,151.1",
            "-w",
            "-33.97,151.0",
            "--mode",
            "walking",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Directions { args }) => {
                assert_eq!(args.origin, LatLng::new(-33.9, 151.2));
                assert_eq!(args.destination, LatLng::new(-34.0, -58.4));
                assert_eq!(
                    args.waypoints,
                    vec![LatLng::new(-33.95, 151.1), LatLng::new(-33.97, 151.0)]
                );
                assert_eq!(args.mode, TravelMode::Walking);
            }
            _ => panic!("expected the directions command"),
        }
    }
}
