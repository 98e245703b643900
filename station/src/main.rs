use anyhow::Context;
use clap::{Parser, ValueEnum};
use settings::StationSettings;
use simulate::SimulatorConfig;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;

mod bridge;
mod primary;
mod secondary;
mod settings;
mod simulate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Primary,
    Secondary,
}

#[derive(Parser)]
#[command(author, version, about = "Primary/secondary station driver for the WiFi radar")]
struct Args {
    /// Run as the merging primary or as a pushing secondary
    #[arg(long, value_enum)]
    mode: Mode,
    /// Primary address to push to (secondary mode)
    #[arg(long)]
    host: Option<String>,
    /// Load station settings from YAML
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the listening/push port
    #[arg(long)]
    port: Option<u16>,
    /// Reply ACK to accepted submissions (primary mode)
    #[arg(long, default_value_t = false)]
    ack: bool,
    /// Wait for the primary's ACK reply (secondary mode)
    #[arg(long, default_value_t = false)]
    expect_ack: bool,
    /// Networks reported per simulated scan
    #[arg(long, default_value_t = 3)]
    simulated_networks: usize,
    /// Seed for the simulated scan source
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = if let Some(path) = args.settings {
        StationSettings::load(path)?
    } else {
        StationSettings::default()
    };
    if let Some(port) = args.port {
        settings.listen_port = port;
    }
    if args.ack {
        settings.acknowledge = true;
    }

    let simulator = SimulatorConfig {
        network_count: args.simulated_networks,
        seed: args.seed,
        ..SimulatorConfig::default()
    };

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating tokio runtime")?;
    match args.mode {
        Mode::Primary => runtime.block_on(primary::run(settings, simulator)),
        Mode::Secondary => {
            let host = args.host.context("--host is required in secondary mode")?;
            runtime.block_on(secondary::run(host, settings, args.expect_ack, simulator))
        }
    }
}
