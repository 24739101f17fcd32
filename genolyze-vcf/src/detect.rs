use std::path::Path;

use serde::{Deserialize, Serialize};

use genolyze_core::config::VariantOptions;
use genolyze_core::errors::{GenolyzeError, Result};
use genolyze_core::utils::{GenomicFileType, dotted_extension, ensure_exists};

use crate::density::{ChromosomeDensity, chromosome_density};
use crate::models::VariantRecord;
use crate::parser::parse_vcf;
use crate::sort::sort_variants;
use crate::summary::{VariantSummary, summarize};

/// Summary and preview of a parsed VCF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantReport {
    pub summary: VariantSummary,
    pub variants_preview: Vec<VariantRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub densities: Option<Vec<ChromosomeDensity>>,
}

impl VariantReport {
    ///
    /// Sort records and summarize them. Counts always cover every record; the
    /// preview holds the first `preview_limit` sorted ones.
    ///
    pub fn build(mut records: Vec<VariantRecord>, has_annotation: bool, options: &VariantOptions) -> Self {
        sort_variants(&mut records);

        let summary = summarize(&records, has_annotation);
        let densities = options.include_density.then(|| chromosome_density(&records));
        let variants_preview = records.iter().take(options.preview_limit).cloned().collect();
        let variants = options.include_all.then_some(records);

        VariantReport {
            summary,
            variants_preview,
            variants,
            densities,
        }
    }
}

/// Outcome of [detect_variants].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantDetection {
    Report(VariantReport),
    Unsupported { message: String },
}

///
/// Fail with [GenolyzeError::UnsupportedFileType] unless the path names a VCF
/// (`.vcf` or `.vcf.gz`).
///
pub fn require_vcf(path: &Path) -> Result<()> {
    match GenomicFileType::from_path(path) {
        GenomicFileType::Vcf => Ok(()),
        _ => Err(GenolyzeError::UnsupportedFileType(dotted_extension(path))),
    }
}

///
/// Parse, classify, sort and summarize the variants of a VCF file.
///
/// Other file types are not an error: they produce
/// [VariantDetection::Unsupported] with a message naming the extension.
///
/// # Errors
///
/// - [GenolyzeError::FileNotFound] if the path does not exist
/// - [GenolyzeError::ParseError] if a data line has a non-integer position
///
pub fn detect_variants<P: AsRef<Path>>(path: P, options: &VariantOptions) -> Result<VariantDetection> {
    let path = path.as_ref();
    ensure_exists(path)?;

    match require_vcf(path) {
        Ok(()) => {}
        Err(GenolyzeError::UnsupportedFileType(ext)) => {
            return Ok(VariantDetection::Unsupported {
                message: format!("Variant detection not implemented for {}", ext),
            });
        }
        Err(e) => return Err(e),
    }

    let parsed = parse_vcf(path)?;
    Ok(VariantDetection::Report(VariantReport::build(
        parsed.records,
        parsed.has_annotation,
        options,
    )))
}
