//! Variant records produced from VCF data lines.

use serde::{Deserialize, Serialize};

/// Structural class of a variant, decided from allele lengths alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantType {
    #[serde(rename = "SNP")]
    Snp,
    Insertion,
    Deletion,
    Complex,
}

/// Zygosity of the first sample at a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zygosity {
    Homozygous,
    Heterozygous,
    Unknown,
}

/// A single classified VCF data line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub chrom: String,
    /// as written in the file; any integer is accepted
    pub pos: i64,
    pub id: String,
    #[serde(rename = "ref")]
    pub ref_allele: String,
    #[serde(rename = "alt")]
    pub alt_allele: String,
    #[serde(rename = "type")]
    pub variant_type: VariantType,
    pub genotype: Zygosity,
    pub effect: Option<String>,
    pub impact: Option<String>,
}
