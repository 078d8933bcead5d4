//! # fuel
//!
//! Command-line client for the fuel API.
//!
//! Exits with status 1 when the server rejects a request, so scripts can
//! chain commands with `&&`.

mod cli;
mod client;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use fuel_core::{FuelRecordInput, VehicleInput};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, FuelCommand, VehicleCommand};
use crate::client::FuelClient;
use crate::output::{render_action, render_data, render_stats, Output};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = FuelClient::new(cli.base_url);
    debug!(base_url = client.base_url(), "Running command");

    let output = run(&client, cli.command).await?;
    output.print();

    Ok(if output.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn run(client: &FuelClient, command: Commands) -> Result<Output> {
    let output = match command {
        Commands::Vehicles(command) => match command {
            VehicleCommand::List => render_data(&client.get("/api/vehicles").await?),
            VehicleCommand::Get { id } => {
                render_data(&client.get(&format!("/api/vehicles/{}", id)).await?)
            }
            VehicleCommand::Add(fields) => {
                let body = VehicleInput::from(fields);
                render_action(&client.post("/api/vehicles", &body).await?)
            }
            VehicleCommand::Update { id, fields } => {
                let body = VehicleInput::from(fields);
                render_action(&client.put(&format!("/api/vehicles/{}", id), &body).await?)
            }
            VehicleCommand::Delete { id } => {
                render_action(&client.delete(&format!("/api/vehicles/{}", id)).await?)
            }
        },

        Commands::Fuel(command) => match command {
            FuelCommand::List => render_data(&client.get("/api/fuel-records").await?),
            FuelCommand::Get { id } => {
                render_data(&client.get(&format!("/api/fuel-records/{}", id)).await?)
            }
            FuelCommand::Add(fields) => {
                let body = FuelRecordInput::from(fields);
                render_action(&client.post("/api/fuel-records", &body).await?)
            }
            FuelCommand::Update { id, fields } => {
                let body = FuelRecordInput::from(fields);
                render_action(
                    &client
                        .put(&format!("/api/fuel-records/{}", id), &body)
                        .await?,
                )
            }
            FuelCommand::Delete { id } => {
                render_action(&client.delete(&format!("/api/fuel-records/{}", id)).await?)
            }
            FuelCommand::ForVehicle { vehicle_id } => render_data(
                &client
                    .get(&format!("/api/vehicles/{}/fuel", vehicle_id))
                    .await?,
            ),
        },

        Commands::Stats { vehicle_id } => render_stats(
            &client
                .get(&format!("/api/vehicles/{}/fuel/stats", vehicle_id))
                .await?,
        ),
    };

    Ok(output)
}
