use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use genolyze_core::utils::{GenomicFileType, sniff_file};

use crate::common::write_json;

#[derive(Serialize)]
struct SniffOutput<'a> {
    path: &'a str,
    by_extension: String,
    by_content: String,
}

pub fn run_sniff(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("path is required")?;

    let by_extension = GenomicFileType::from_path(Path::new(path));
    let by_content = sniff_file(Path::new(path))
        .with_context(|| format!("Failed to read file: {}", path))?;

    let output = SniffOutput {
        path,
        by_extension: by_extension.to_string(),
        by_content: by_content.to_string(),
    };

    write_json(&output, None)
}
