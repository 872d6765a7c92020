/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Reads a room description, drives the vacuum through it, and prints where it stopped and how
//! much dirt it picked up.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use room_cleaner::RoomSetup;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "clean-room",
    version,
    about = "Clean a room with a robotic vacuum",
    long_about = "Reads the room dimensions, the robot's starting position, the dirt positions and \
                  a string of N/S/E/W instructions from a text file, then prints the robot's final \
                  position followed by the number of dirt patches removed."
)]
struct Cli {
    /// Input text file.
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Only output log messages of this severity or above. RUST_LOG takes precedence when set.
    #[arg(short, long = "loglevel", value_enum, default_value_t = LogLevel::Warning)]
    log_level: LogLevel,

    /// Print the report as JSON instead of two lines.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    #[value(name = "CRITICAL")]
    Critical,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
}

impl LogLevel {
    // tracing has no level above error.
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Critical | LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Logs go to stderr so stdout stays exactly the report.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("read input file {}", cli.input.display()))?;
    let setup: RoomSetup = raw
        .parse()
        .with_context(|| format!("parse {}", cli.input.display()))?;
    tracing::info!(input = %cli.input.display(), "input file processed");

    let report = setup.run()?;
    if cli.json {
        println!("{}", serde_json::to_string(&report).context("serialize report")?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
