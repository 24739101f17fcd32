use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::read::MultiGzDecoder;
use log::debug;
use serde::Serialize;

use crate::errors::{GenolyzeError, Result};

/// Bytes inspected when sniffing FASTA and GFF content.
pub const SNIFF_WINDOW_SHORT: usize = 4096;
/// Bytes inspected when sniffing VCF content; VCF headers run long.
pub const SNIFF_WINDOW_LONG: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenomicFileType {
    Fasta,
    Vcf,
    Gff,
    Unknown,
}

impl FromStr for GenomicFileType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "fasta" | "fa" => Ok(GenomicFileType::Fasta),
            "vcf" => Ok(GenomicFileType::Vcf),
            "gff" | "gff3" => Ok(GenomicFileType::Gff),
            _ => Ok(GenomicFileType::Unknown),
        }
    }
}

impl fmt::Display for GenomicFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenomicFileType::Fasta => "fasta",
            GenomicFileType::Vcf => "vcf",
            GenomicFileType::Gff => "gff",
            GenomicFileType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

impl GenomicFileType {
    ///
    /// Infer the file type from the path's extension, looking through a trailing `.gz`.
    ///
    pub fn from_path(path: &Path) -> Self {
        get_file_info(path).file_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub file_type: GenomicFileType,
    pub is_gzipped: bool,
}

pub fn get_file_info(path: &Path) -> FileInfo {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));

    // for `reads.vcf.gz` the interesting extension sits on the stem
    let typed_path: PathBuf = if is_gzipped {
        path.with_extension("")
    } else {
        path.to_path_buf()
    };

    let file_type = typed_path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| GenomicFileType::from_str(e).ok())
        .unwrap_or(GenomicFileType::Unknown);

    FileInfo {
        file_type,
        is_gzipped,
    }
}

///
/// The final extension of a path, lowercased and including the leading dot.
/// Paths without an extension yield an empty string.
///
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

///
/// Fail with [GenolyzeError::FileNotFound] when the path does not point at a file.
///
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(GenolyzeError::FileNotFound(path.to_path_buf()))
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    ensure_exists(path)?;

    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

fn prefix(buf: &[u8], window: usize) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(&buf[..buf.len().min(window)])
}

/// True when the content, ignoring leading whitespace, opens with a FASTA header.
pub fn looks_like_fasta(buf: &[u8]) -> bool {
    prefix(buf, SNIFF_WINDOW_SHORT).trim().starts_with('>')
}

/// True when the content carries a VCF column header or file format line.
pub fn looks_like_vcf(buf: &[u8]) -> bool {
    let s = prefix(buf, SNIFF_WINDOW_LONG);
    s.contains("#CHROM") || s.contains("##fileformat=")
}

/// True when the content has a GFF version pragma, a comment first line, or a
/// first line with at least nine tab separated columns.
pub fn looks_like_gff(buf: &[u8]) -> bool {
    let s = prefix(buf, SNIFF_WINDOW_SHORT);
    if s.contains("##gff-version") {
        return true;
    }
    let first_line = s.split('\n').next().unwrap_or_default();
    first_line.starts_with('#') || first_line.split('\t').count() >= 9
}

///
/// Guess the type of a file from the first few kilobytes of its content.
///
/// FASTA is checked first, then VCF, then GFF, since a VCF header also
/// satisfies the looser GFF comment rule.
///
pub fn sniff_content(buf: &[u8]) -> GenomicFileType {
    if looks_like_fasta(buf) {
        GenomicFileType::Fasta
    } else if looks_like_vcf(buf) {
        GenomicFileType::Vcf
    } else if looks_like_gff(buf) {
        GenomicFileType::Gff
    } else {
        GenomicFileType::Unknown
    }
}

///
/// Read the head of a (possibly gzipped) file and sniff its type.
///
pub fn sniff_file(path: &Path) -> Result<GenomicFileType> {
    let reader = get_dynamic_reader(path)?;
    let mut head = Vec::with_capacity(SNIFF_WINDOW_LONG);
    reader
        .take(SNIFF_WINDOW_LONG as u64)
        .read_to_end(&mut head)?;

    let file_type = sniff_content(&head);
    debug!("sniffed {} as {}", path.display(), file_type);

    Ok(file_type)
}
