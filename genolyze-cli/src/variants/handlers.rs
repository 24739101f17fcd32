use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use genolyze_vcf::{VariantDetection, detect_variants};

use crate::common::{load_config, parse_usize, write_json};

pub fn run_variants(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("--input is required")?;
    let output_path = matches.get_one::<String>("output");

    // flags only switch sections on, the config may already have them set
    let mut options = load_config(matches)?.variants;
    if let Some(preview) = parse_usize(matches, "preview")? {
        options.preview_limit = preview;
    }
    options.include_all |= matches.get_flag("all");
    options.include_density |= matches.get_flag("density");

    info!("Detecting variants in {}", input);
    let detection = detect_variants(input, &options)
        .with_context(|| format!("Failed to detect variants in: {}", input))?;

    match &detection {
        VariantDetection::Report(report) => {
            info!("Found {} variants", report.summary.total_variants)
        }
        VariantDetection::Unsupported { message } => warn!("{}", message),
    }

    write_json(&detection, output_path)
}
