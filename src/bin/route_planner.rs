use clap::Parser;
use colored::Colorize;
use flight_routes::graph::Graph;
use flight_routes::{flight_network, format_summary, plan_route, RouteRequest};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest flight route between two cities")]
struct Cli {
    /// Departure city
    departure: Option<String>,

    /// Arrival city
    arrival: Option<String>,

    /// List the cities of the network and exit
    #[arg(long, conflicts_with_all = ["departure", "arrival"])]
    cities: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let network = flight_network();

    if cli.cities {
        for city in network.nodes() {
            println!("{}", city);
        }
        return ExitCode::SUCCESS;
    }

    let request = RouteRequest {
        start: cli.departure,
        end: cli.arrival,
    };

    match plan_route(&network, &request) {
        Ok(route) => {
            println!("{}", format_summary(&route).bright_blue().bold());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
