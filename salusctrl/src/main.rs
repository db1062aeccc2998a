#[macro_use]
extern crate tracing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use salusapi::{ClientConfig, Endpoints, SalusClient};
use tracing_subscriber::prelude::*;

mod config;
mod list;

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    #[clap(short, long, action)]
    verbose: bool,
    #[clap(short, long, global = true, help = "account email, defaults to SALUS_USER")]
    user: Option<String>,
    #[clap(short, long, global = true, help = "defaults to SALUS_PASSWORD")]
    password: Option<String>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lists the thermostats of the account.
    List,
    /// Prints current and target temperature of one or all thermostats.
    Reading {
        #[clap(long, help = "The device id (devId) of the thermostat to query.")]
        device: Option<String>,
    },
    /// Sets the target temperature of a thermostat.
    Set {
        #[clap(long)]
        device: String,
        #[clap(short, long, help = "Target temperature in °C")]
        temperature: f64,
    },
    /// Logs in and prints the session token.
    Token,
}

fn client(args: &Args, env: &config::EnvConfig) -> Result<SalusClient> {
    let (user, password) = env.credentials(args.user.clone(), args.password.clone())?;
    let mut config = ClientConfig::default();
    if let Some(base_url) = &env.base_url {
        config.endpoints = Endpoints::new(base_url)?;
    }
    Ok(SalusClient::with_config(user, password, config)?)
}

fn reading(client: &mut SalusClient, device: Option<&str>) -> Result<()> {
    let devices = client.get_devices()?;
    let devices = match device {
        None => devices,
        Some(id) => match devices.into_iter().find(|dev| dev.id() == id) {
            None => return Err(anyhow::anyhow!("Cannot find device with id {:?}", id)),
            Some(device) => vec![device],
        },
    };

    let mut readings = Vec::with_capacity(devices.len());
    for device in devices {
        let reading = client.get_device_reading(device.id())?;
        readings.push((device, reading));
    }
    list::reading_table(&readings).printstd();
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        "info,salusapi=trace,reqwest=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().parse_lossy(log_level))
        .with(tracing_forest::ForestLayer::default())
        .init();

    let env = config::EnvConfig::new()?;
    let mut client = client(&args, &env)?;

    match &args.command {
        Command::List => {
            let devices = client.get_devices()?;
            info!("found {} devices", devices.len());
            list::device_table(&devices).printstd();
        }
        Command::Reading { device } => reading(&mut client, device.as_deref())?,
        Command::Set {
            device,
            temperature,
        } => {
            client.set_target_temperature(device, *temperature)?;
            println!("target temperature of {} set to {:.1}°C", device, temperature);
        }
        Command::Token => println!("{}", client.get_token_from_api()?),
    }

    Ok(())
}
