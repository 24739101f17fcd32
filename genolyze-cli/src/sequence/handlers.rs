use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use genolyze_seq::analyze_sequence;

use crate::common::{load_config, parse_usize, write_json};

pub fn run_sequence(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("--input is required")?;
    let output_path = matches.get_one::<String>("output");

    let mut options = load_config(matches)?.sequence;
    if let Some(top) = parse_usize(matches, "top")? {
        options.top_codons = top;
    }

    info!("Analyzing sequence file {}", input);
    let analysis = analyze_sequence(input, &options)
        .with_context(|| format!("Failed to analyze sequence file: {}", input))?;

    write_json(&analysis, output_path)
}
