//! Composition and codon statistics over cleaned nucleotide sequences.

use std::collections::BTreeMap;

use crate::models::{CodonUsage, CompositionResult, NucleotideCounts, SequenceBuffer};

/// Trait for computing statistics over a cleaned nucleotide sequence.
///
/// Implementors only expose their bases; every statistic is derived from them.
pub trait SequenceStatistics {
    /// The cleaned bases (`A`, `C`, `G`, `T` only).
    fn bases(&self) -> &[u8];

    /// Count each nucleotide in a single pass.
    fn nucleotide_counts(&self) -> NucleotideCounts {
        NucleotideCounts::from_bases(self.bases())
    }

    /// Percentage of G and C bases, `100 * (G+C) / length`.
    ///
    /// An empty sequence has a GC content of `0.0`.
    fn gc_content(&self) -> f64 {
        let bases = self.bases();
        if bases.is_empty() {
            return 0.0;
        }
        let counts = self.nucleotide_counts();
        100.0 * counts.gc() as f64 / bases.len() as f64
    }

    /// `(A+T) / (G+C)`, with the denominator floored at 1.
    ///
    /// Returns `None` for an empty sequence. A sequence without any G or C
    /// reports the raw A+T count, which is not statistically meaningful.
    fn at_gc_ratio(&self) -> Option<f64> {
        if self.bases().is_empty() {
            return None;
        }
        let counts = self.nucleotide_counts();
        let denom = counts.gc().max(1);
        Some(counts.at() as f64 / denom as f64)
    }

    /// Count non-overlapping codons in frame 0.
    ///
    /// A trailing partial codon is dropped. Frequencies are relative to the
    /// number of complete codons.
    fn codon_usage(&self) -> CodonUsage {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for codon in self.bases().chunks_exact(3) {
            *counts
                .entry(String::from_utf8_lossy(codon).into_owned())
                .or_default() += 1;
        }

        let total = counts.values().sum::<u64>().max(1) as f64;
        let frequencies = counts
            .iter()
            .map(|(codon, count)| (codon.clone(), *count as f64 / total))
            .collect();

        CodonUsage {
            counts,
            frequencies,
        }
    }
}

impl SequenceStatistics for [u8] {
    fn bases(&self) -> &[u8] {
        self
    }
}

impl SequenceStatistics for SequenceBuffer {
    fn bases(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl SequenceBuffer {
    /// GC percentage, AT/GC ratio and size of the merged sequence.
    pub fn composition(&self) -> CompositionResult {
        CompositionResult {
            gc_percent: self.gc_content(),
            at_gc_ratio: self.at_gc_ratio(),
            total_length: self.len(),
            sequence_count: self.sequence_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b"GGCCAATT", 50.0)]
    #[case(b"GGGG", 100.0)]
    #[case(b"ATAT", 0.0)]
    #[case(b"GAT", 100.0 / 3.0)]
    #[case(b"", 0.0)]
    fn test_gc_content(#[case] seq: &[u8], #[case] expected: f64) {
        assert!((seq.gc_content() - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(b"GGCCAATT", Some(1.0))]
    #[case(b"AATTTGC", Some(2.5))]
    #[case(b"AAT", Some(3.0))]
    #[case(b"", None)]
    fn test_at_gc_ratio(#[case] seq: &[u8], #[case] expected: Option<f64>) {
        assert_eq!(seq.at_gc_ratio(), expected);
    }

    #[rstest]
    fn test_codon_usage_drops_partial_codon() {
        let usage = b"GGCCAATT".as_slice().codon_usage();

        let codons: Vec<&str> = usage.counts.keys().map(String::as_str).collect();
        assert_eq!(codons, vec!["CAA", "GGC"]);
        assert_eq!(usage.total(), 2);
        assert_eq!(usage.frequencies["CAA"], 0.5);
        assert_eq!(usage.frequencies["GGC"], 0.5);
    }

    #[rstest]
    fn test_codon_usage_sorted_and_normalized() {
        let usage = b"TTTAAATTTCCCGG".as_slice().codon_usage();

        assert_eq!(usage.counts["TTT"], 2);
        assert_eq!(usage.total(), 4);
        let keys: Vec<&String> = usage.frequencies.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let sum: f64 = usage.frequencies.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"AC".as_slice())]
    fn test_codon_usage_without_full_codon(#[case] seq: &[u8]) {
        let usage = seq.codon_usage();
        assert_eq!(usage.is_empty(), true);
        assert_eq!(usage.frequencies.is_empty(), true);
    }

    #[rstest]
    fn test_composition_of_merged_records() {
        let buffer = SequenceBuffer::merge(["ggcc", "aatt"]);
        let composition = buffer.composition();

        assert_eq!(
            composition,
            CompositionResult {
                gc_percent: 50.0,
                at_gc_ratio: Some(1.0),
                total_length: 8,
                sequence_count: 2,
            }
        );
    }
}
