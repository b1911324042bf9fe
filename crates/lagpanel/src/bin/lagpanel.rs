//! Panel lag CLI tool.
//!
//! Reads a CSV panel, shifts one column within each group and writes the
//! result to stdout as CSV.
//!
//! Usage: `cargo run --features cli --bin lagpanel -- INPUT.csv [--steps N]`
//! Example: `cargo run --features cli --bin lagpanel -- panel.csv --steps -1 --output target_lead`

use std::{env, io, process};

use lagpanel::{
    engine::{ComputePlacement, ShiftStrategy, Steps},
    frame::{FrameLagConfig, lag_dataframe},
};
use polars::prelude::*;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: lagpanel INPUT.csv [--steps N] [--source NAME] [--output NAME] \
                     [--time NAME] [--group NAME] [--keep-all] [--parallel] \
                     [--strategy rotate|group]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1].starts_with("--") {
        eprintln!("{USAGE}");
        eprintln!("Example: lagpanel panel.csv --steps 2 --output target_lag2");
        process::exit(1);
    }

    let cfg = match parse_config(&args[2..]) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(args[1].clone().into()))?
        .finish()?;

    tracing::info!(input = %args[1], rows = df.height(), steps = %cfg.steps, "lagging panel");

    let mut out = match lag_dataframe(&df, &cfg) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    tracing::info!(rows = out.height(), dropped = df.height() - out.height(), "done");

    CsvWriter::new(io::stdout().lock()).include_header(true).finish(&mut out)?;

    Ok(())
}

fn parse_config(args: &[String]) -> Result<FrameLagConfig, String> {
    let mut cfg = FrameLagConfig::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i).cloned().ok_or_else(|| format!("missing value for {flag}"))
        };

        match flag {
            "--steps" => {
                let raw = value()?;
                let steps = raw.parse::<i64>().map_err(|_| format!("invalid steps: {raw}"))?;
                cfg.steps = Steps::new(steps);
            }
            "--source" => cfg.source = value()?,
            "--output" => cfg.output = Some(value()?),
            "--time" => cfg.time = value()?,
            "--group" => cfg.group = value()?,
            "--strategy" => {
                cfg.strategy = match value()?.as_str() {
                    "rotate" => ShiftStrategy::Rotate,
                    "group" => ShiftStrategy::GroupOffset,
                    other => return Err(format!("unknown strategy: {other}")),
                };
            }
            "--keep-all" => cfg.keep_all = true,
            "--parallel" => cfg.compute_placement = ComputePlacement::Parallel,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(cfg)
}
