use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use env_logger::Env;
use log::info;
use serde::Serialize;

use genolyze_core::AnalysisConfig;

pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG still wins when set
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init();
}

///
/// Read the `--config` TOML file if one was given, otherwise use defaults.
///
pub fn load_config(matches: &ArgMatches) -> Result<AnalysisConfig> {
    match matches.get_one::<String>("config") {
        Some(p) => AnalysisConfig::try_from(Path::new(p))
            .with_context(|| format!("Failed to load config file: {}", p)),
        None => Ok(AnalysisConfig::default()),
    }
}

///
/// Parse an optional numeric flag.
///
pub fn parse_usize(matches: &ArgMatches, name: &str) -> Result<Option<usize>> {
    matches
        .get_one::<String>(name)
        .map(|v| {
            v.parse::<usize>()
                .with_context(|| format!("--{} must be a non-negative integer", name))
        })
        .transpose()
}

///
/// Pretty print `value` as JSON to `output`, or to stdout when no path is given.
///
pub fn write_json<T: Serialize>(value: &T, output: Option<&String>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;

    match output {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            info!("Output written to {}", p);
        }
        None => {
            io::stdout().write_all(json.as_bytes())?;
            println!(); // trailing newline
        }
    }

    Ok(())
}
