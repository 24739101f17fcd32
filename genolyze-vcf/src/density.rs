use serde::{Deserialize, Serialize};

use crate::models::VariantRecord;

/// Number of variants on one chromosome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromosomeDensity {
    pub chrom: String,
    pub count: usize,
}

///
/// Count variants per chromosome, listing chromosomes in order of first
/// appearance. Feed sorted records to get numeric-first chromosome order.
///
pub fn chromosome_density(records: &[VariantRecord]) -> Vec<ChromosomeDensity> {
    let mut densities: Vec<ChromosomeDensity> = Vec::new();

    for record in records {
        match densities.iter_mut().find(|d| d.chrom == record.chrom) {
            Some(density) => density.count += 1,
            None => densities.push(ChromosomeDensity {
                chrom: record.chrom.clone(),
                count: 1,
            }),
        }
    }

    densities
}
