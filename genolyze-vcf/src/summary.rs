use serde::{Deserialize, Serialize};

use crate::models::{VariantRecord, VariantType, Zygosity};

pub const MISSING_ANNOTATION_NOTE: &str = "No ANN/CSQ fields found. Run annotation module (e.g. SnpEff, VEP) for missense/nonsense classification.";

/// Counts over every record of a file.
///
/// Complex variants and unknown genotypes only show up in `total_variants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSummary {
    pub total_variants: usize,
    pub snp: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub homozygous: usize,
    pub heterozygous: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn summarize(records: &[VariantRecord], has_annotation: bool) -> VariantSummary {
    let mut summary = VariantSummary {
        total_variants: records.len(),
        ..Default::default()
    };

    for record in records {
        match record.variant_type {
            VariantType::Snp => summary.snp += 1,
            VariantType::Insertion => summary.insertions += 1,
            VariantType::Deletion => summary.deletions += 1,
            VariantType::Complex => {}
        }
        match record.genotype {
            Zygosity::Homozygous => summary.homozygous += 1,
            Zygosity::Heterozygous => summary.heterozygous += 1,
            Zygosity::Unknown => {}
        }
    }

    if !has_annotation {
        summary.note = Some(MISSING_ANNOTATION_NOTE.to_string());
    }

    summary
}
