//! Command-line surface.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use fuel_core::{FuelRecordInput, VehicleInput};

#[derive(Debug, Parser)]
#[command(name = "fuel")]
#[command(about = "Track vehicles, fill-ups and fuel consumption")]
#[command(version)]
pub struct Cli {
    /// Base URL of the fuel API
    #[arg(
        long,
        global = true,
        env = "FUEL_API_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage vehicles
    #[command(subcommand)]
    Vehicles(VehicleCommand),
    /// Manage fuel records
    #[command(subcommand)]
    Fuel(FuelCommand),
    /// Show consumption statistics for a vehicle
    Stats {
        #[arg(long)]
        vehicle_id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum VehicleCommand {
    /// List all vehicles
    List,
    /// Show one vehicle
    Get { id: u64 },
    /// Register a vehicle
    Add(VehicleArgs),
    /// Replace a vehicle's brand, model and year
    Update {
        id: u64,
        #[command(flatten)]
        fields: VehicleArgs,
    },
    /// Delete a vehicle and its fuel records
    Delete { id: u64 },
}

#[derive(Debug, Subcommand)]
pub enum FuelCommand {
    /// List all fuel records
    List,
    /// Show one fuel record
    Get { id: u64 },
    /// Log a fill-up
    Add(FuelArgs),
    /// Change a fill-up's liters, price and odometer
    Update {
        id: u64,
        #[command(flatten)]
        fields: FuelArgs,
    },
    /// Delete a fuel record
    Delete { id: u64 },
    /// List the fuel records of one vehicle
    ForVehicle {
        #[arg(long)]
        vehicle_id: u64,
    },
}

/// Vehicle fields. All optional here; the server reports what is missing.
#[derive(Debug, Args)]
pub struct VehicleArgs {
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,
}

impl From<VehicleArgs> for VehicleInput {
    fn from(args: VehicleArgs) -> Self {
        VehicleInput {
            brand: args.brand,
            model: args.model,
            year: args.year,
        }
    }
}

#[derive(Debug, Args)]
pub struct FuelArgs {
    #[arg(long)]
    pub vehicle_id: Option<u64>,
    #[arg(long, allow_negative_numbers = true)]
    pub liters: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub odometer: Option<i64>,
    /// RFC 3339 fill-up time; the server uses "now" when omitted
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<FuelArgs> for FuelRecordInput {
    fn from(args: FuelArgs) -> Self {
        FuelRecordInput {
            vehicle_id: args.vehicle_id,
            liters: args.liters,
            price: args.price,
            odometer: args.odometer,
            timestamp: args.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fuel_add() {
        let cli = Cli::try_parse_from([
            "fuel", "fuel", "add", "--vehicle-id", "3", "--liters", "40.5", "--price", "1.6",
            "--odometer", "-10",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://localhost:8080");
        let Commands::Fuel(FuelCommand::Add(args)) = cli.command else {
            panic!("expected fuel add");
        };
        let input = FuelRecordInput::from(args);
        assert_eq!(input.vehicle_id, Some(3));
        assert_eq!(input.liters, Some(40.5));
        assert_eq!(input.odometer, Some(-10));
        assert_eq!(input.timestamp, None);
    }

    #[test]
    fn test_parse_vehicle_update_and_stats() {
        let cli = Cli::try_parse_from([
            "fuel", "--base-url", "http://api:9000", "vehicles", "update", "7", "--brand", "Honda",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://api:9000");
        let Commands::Vehicles(VehicleCommand::Update { id, fields }) = cli.command else {
            panic!("expected vehicles update");
        };
        assert_eq!(id, 7);
        assert_eq!(fields.brand.as_deref(), Some("Honda"));
        assert_eq!(fields.year, None);

        let cli = Cli::try_parse_from(["fuel", "stats", "--vehicle-id", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { vehicle_id: 2 }));
    }

    #[test]
    fn test_stats_requires_vehicle_id() {
        assert!(Cli::try_parse_from(["fuel", "stats"]).is_err());
    }
}
