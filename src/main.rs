//! `boardmap` command line — inspect supported boards and build their
//! descriptors against a live or staged sysfs tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use boardmap::boards::{self, BoardKind};
use boardmap::sysfs::Sysfs;

#[derive(Parser, Debug)]
#[command(name = "boardmap", version, about = "Board descriptors for x86 SBCs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported boards
    List,
    /// Build a board descriptor and print it
    Build {
        /// Board identifier (see `boardmap list`)
        board: String,
        /// Probe this directory instead of /sys (staged fixtures, chroots)
        #[arg(long)]
        sysfs_root: Option<PathBuf>,
        /// Emit the full descriptor as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match Cli::parse().command {
        Command::List => cmd_list(),
        Command::Build {
            board,
            sysfs_root,
            json,
        } => cmd_build(&board, sysfs_root, json),
    }
}

fn cmd_list() -> Result<()> {
    for kind in BoardKind::ALL {
        let def = kind.definition();
        println!(
            "{:<16} {} ({} pins, {} gpio)",
            kind.id(),
            def.platform_name,
            def.phy_pin_count,
            def.gpio_count
        );
    }
    Ok(())
}

fn cmd_build(board: &str, sysfs_root: Option<PathBuf>, json: bool) -> Result<()> {
    let kind: BoardKind = board.parse()?;
    let sysfs = match sysfs_root {
        Some(root) => Sysfs::with_root(root),
        None => Sysfs::system(),
    };
    let descriptor = boards::build(kind, &sysfs)
        .with_context(|| format!("failed to build descriptor for {}", kind.id()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    println!(
        "{} v{} — {} pins",
        descriptor.platform_name,
        descriptor.platform_version,
        descriptor.phy_pin_count()
    );
    for bus in &descriptor.i2c_buses {
        println!(
            "  i2c-{:<3} sda={} scl={}",
            bus.bus_id, descriptor.pins[bus.sda].name, descriptor.pins[bus.scl].name
        );
    }
    for bus in &descriptor.spi_buses {
        println!(
            "  spidev{}.{} cs={}",
            bus.bus_id, bus.slave_select, descriptor.pins[bus.cs].name
        );
    }
    for dev in &descriptor.uart_devices {
        println!(
            "  {} tx={} rx={}",
            dev.device_path, descriptor.pins[dev.tx].name, descriptor.pins[dev.rx].name
        );
    }
    for ch in &descriptor.pwm_channels {
        println!(
            "  pwm{}:{} pin={}",
            ch.controller, ch.channel, descriptor.pins[ch.pin].name
        );
    }
    for ch in &descriptor.aio_channels {
        println!("  aio{} pin={}", ch.channel, descriptor.pins[ch.pin].name);
    }
    for warning in &descriptor.warnings {
        println!("  warning: {warning}");
    }
    Ok(())
}
