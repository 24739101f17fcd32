//! # VCF variant detection
//!
//! Parses VCF files into classified variant records and summarizes them:
//!
//! - variant typing from allele lengths (SNP, insertion, deletion, complex)
//! - zygosity from the `GT` field of the first sample
//! - effect/impact extraction from pre-existing SnpEff `ANN` or VEP `CSQ` fields
//! - chromosome-then-position ordering with numeric chromosomes first
//! - per-type and per-zygosity counts with a bounded record preview

pub mod annotation;
pub mod classify;
pub mod density;
pub mod detect;
pub mod models;
pub mod parser;
pub mod sort;
pub mod summary;

pub use annotation::Annotation;
pub use density::{ChromosomeDensity, chromosome_density};
pub use detect::{VariantDetection, VariantReport, detect_variants};
pub use models::{VariantRecord, VariantType, Zygosity};
pub use parser::{ParsedVcf, parse_vcf, parse_vcf_reader};
pub use sort::sort_variants;
pub use summary::{VariantSummary, summarize};
