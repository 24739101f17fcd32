//! Line oriented VCF reading.
//!
//! Header lines only contribute the file-level annotation flag. Data lines
//! with fewer than eight columns are skipped; a non-integer POS aborts the
//! whole file.

use std::io::BufRead;
use std::path::Path;

use log::{debug, info};

use genolyze_core::errors::{GenolyzeError, Result};
use genolyze_core::utils::get_dynamic_reader;

use crate::annotation::header_declares_annotation;
use crate::models::VariantRecord;

/// Mandatory VCF columns: CHROM POS ID REF ALT QUAL FILTER INFO.
pub const MANDATORY_COLUMNS: usize = 8;

/// Borrowed columns of one VCF data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVariant<'a> {
    pub chrom: &'a str,
    pub pos: i64,
    pub id: &'a str,
    pub ref_allele: &'a str,
    pub alt_allele: &'a str,
    pub info: &'a str,
    pub format: Option<&'a str>,
    /// first sample column only
    pub sample: Option<&'a str>,
}

impl<'a> RawVariant<'a> {
    ///
    /// Split a data line into its columns.
    ///
    /// Returns `Ok(None)` for rows with too few columns.
    ///
    /// # Arguments
    ///
    /// - line: the data line without its line terminator
    /// - line_number: 1-based line number used in error messages
    ///
    pub fn from_line(line: &'a str, line_number: usize) -> Result<Option<Self>> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        let [chrom, pos, id, ref_allele, alt_allele, _qual, _filter, info, rest @ ..] =
            fields.as_slice()
        else {
            return Ok(None);
        };

        let pos = pos.parse::<i64>().map_err(|_| GenolyzeError::ParseError {
            line: line_number,
            message: format!("invalid POS '{}' for chromosome {}", pos, chrom),
        })?;

        // FORMAT and SAMPLE are only used as a pair
        let (format, sample) = match rest {
            [format, sample, ..] => (Some(*format), Some(*sample)),
            _ => (None, None),
        };

        Ok(Some(RawVariant {
            chrom: *chrom,
            pos,
            id: *id,
            ref_allele: *ref_allele,
            alt_allele: *alt_allele,
            info: *info,
            format,
            sample,
        }))
    }
}

/// Records of one VCF file in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedVcf {
    pub records: Vec<VariantRecord>,
    /// set once any header line mentions `ANN=` or `CSQ=`
    pub has_annotation: bool,
    pub skipped_lines: usize,
}

///
/// Parse VCF content from any buffered reader.
///
pub fn parse_vcf_reader<R: BufRead>(mut reader: R) -> Result<ParsedVcf> {
    let mut parsed = ParsedVcf::default();
    let mut line_buf = String::new();
    let mut line_number = 0;

    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = line_buf.trim_end_matches('\n').trim_end_matches('\r');
        if line.starts_with('#') {
            if header_declares_annotation(line) {
                parsed.has_annotation = true;
            }
            continue;
        }

        match RawVariant::from_line(line, line_number)? {
            Some(raw) => parsed
                .records
                .push(VariantRecord::classify(&raw, parsed.has_annotation)),
            None => {
                debug!("skipping line {}: fewer than {} columns", line_number, MANDATORY_COLUMNS);
                parsed.skipped_lines += 1;
            }
        }
    }

    Ok(parsed)
}

///
/// Parse a VCF file (plain or gzipped) into classified records in file order.
///
/// # Arguments
///
/// - path: path to the VCF file
///
pub fn parse_vcf<P: AsRef<Path>>(path: P) -> Result<ParsedVcf> {
    let path = path.as_ref();
    let parsed = parse_vcf_reader(get_dynamic_reader(path)?)?;

    info!(
        "parsed {} variants from {} ({} rows skipped, annotated: {})",
        parsed.records.len(),
        path.display(),
        parsed.skipped_lines,
        parsed.has_annotation
    );

    Ok(parsed)
}
