//! Command-line interface for Hyundai's BlueLink service.
//!
//! Every invocation performs its own fresh login; no session state is
//! persisted across invocations.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bluelink_rs::{BlueLinkClient, Credentials, StartOptions, Temperature, Vehicle, Vin};

#[derive(Parser)]
#[command(name = "bluelink")]
#[command(version, about = "CLI for Hyundai's BlueLink service")]
struct Cli {
    /// BlueLink account email
    #[arg(long, env = "BLUELINK_EMAIL", hide_env_values = true)]
    email: String,

    /// BlueLink account password
    #[arg(long, env = "BLUELINK_PASSWORD", hide_env_values = true)]
    password: String,

    /// BlueLink account PIN
    #[arg(long, env = "BLUELINK_PIN", hide_env_values = true)]
    pin: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List VINs and nicknames for the account
    Cars,

    /// Lock the doors
    Lock {
        /// VIN of the car
        vin: String,
    },

    /// Unlock the doors
    Unlock {
        /// VIN of the car
        vin: String,
    },

    /// Start the engine with climate options
    Start {
        /// VIN of the car
        vin: String,

        /// How long to run the engine, in minutes (1-10)
        #[arg(long, default_value_t = 10)]
        duration: u8,

        /// Cabin temperature: LO, HI, or degrees Fahrenheit
        #[arg(long, default_value = "LO")]
        temp: Temperature,

        /// Run the defroster
        #[arg(long)]
        defrost: bool,

        /// Driver seat heat level (0 = off)
        #[arg(long = "driver-seat-heat", default_value_t = 4)]
        driver_seat_heat: u8,

        /// Passenger seat heat level (0 = off)
        #[arg(long = "passenger-seat-heat", default_value_t = 4)]
        passenger_seat_heat: u8,
    },

    /// Stop the engine
    Stop {
        /// VIN of the car
        vin: String,
    },

    /// Locate the car
    Find {
        /// VIN of the car
        vin: String,
    },

    /// Read the odometer
    Odometer {
        /// VIN of the car
        vin: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Credentials are assembled here, at the boundary, and passed by value
    // into the client.
    let credentials = Credentials::new(cli.email, cli.password, cli.pin);
    let client = BlueLinkClient::new(credentials)?;
    client.login().await.context("login failed")?;

    match cli.command {
        Commands::Cars => {
            for (vin, car) in client.vehicles().list().await? {
                println!("{} - {}", car.model(), vin);
            }
        }
        Commands::Lock { vin } => {
            get_car(&client, &vin).await?.lock().await?;
            println!("Locking...");
        }
        Commands::Unlock { vin } => {
            get_car(&client, &vin).await?.unlock().await?;
            println!("Unlocking...");
        }
        Commands::Start {
            vin,
            duration,
            temp,
            defrost,
            driver_seat_heat,
            passenger_seat_heat,
        } => {
            let options = StartOptions::new()
                .duration_minutes(duration)
                .temperature(temp)
                .defrost(defrost)
                .driver_seat_heat(driver_seat_heat)
                .passenger_seat_heat(passenger_seat_heat);
            get_car(&client, &vin).await?.start(&options).await?;
            println!("Starting...");
        }
        Commands::Stop { vin } => {
            get_car(&client, &vin).await?.stop().await?;
            println!("Stopping...");
        }
        Commands::Find { vin } => {
            let (latitude, longitude) = get_car(&client, &vin).await?.find().await?;
            println!("Latitude: {latitude}");
            println!("Longitude: {longitude}");
        }
        Commands::Odometer { vin } => {
            let mileage = get_car(&client, &vin).await?.odometer().await?;
            println!("{}", format_thousands(mileage));
        }
    }

    Ok(())
}

async fn get_car(client: &BlueLinkClient, vin: &str) -> Result<Vehicle> {
    let vin = Vin::new(vin);
    client
        .vehicles()
        .get(&vin)
        .await?
        .ok_or_else(|| anyhow!("Car with VIN {vin} not found."))
}

/// Thousands-separated display formatting; a CLI concern only, the library
/// returns the plain integer.
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(764), "764");
        assert_eq!(format_thousands(7643), "7,643");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
