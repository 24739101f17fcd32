use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use genolyze_core::errors::{GenolyzeError, Result};

use crate::clean::clean_sequence;
use crate::io::load_sequences;

///
/// The cleaned nucleotides of every record in a FASTA file, joined end to end.
///
/// Record boundaries are discarded on purpose: every statistic in this crate
/// treats the file as one logical sequence, so codons may span two records.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
    bases: Vec<u8>,
    sequence_count: usize,
}

impl SequenceBuffer {
    ///
    /// Clean each raw record and concatenate the results into one buffer.
    ///
    /// `sequence_count` counts the records handed in, including ones that
    /// clean down to nothing.
    ///
    pub fn merge<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut bases = Vec::new();
        let mut sequence_count = 0;
        for record in records {
            bases.extend(clean_sequence(record.as_ref()));
            sequence_count += 1;
        }

        SequenceBuffer {
            bases,
            sequence_count,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }
}

impl TryFrom<&Path> for SequenceBuffer {
    type Error = GenolyzeError;

    ///
    /// Load a FASTA file and merge its records into a [SequenceBuffer]
    ///
    fn try_from(value: &Path) -> Result<SequenceBuffer> {
        let records = load_sequences(value)?;
        Ok(SequenceBuffer::merge(records))
    }
}

impl TryFrom<&str> for SequenceBuffer {
    type Error = GenolyzeError;

    fn try_from(value: &str) -> Result<Self> {
        SequenceBuffer::try_from(Path::new(value))
    }
}

/// Raw per-base counts of a cleaned sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideCounts {
    pub a: u64,
    pub c: u64,
    pub g: u64,
    pub t: u64,
}

impl NucleotideCounts {
    pub fn from_bases(bases: &[u8]) -> Self {
        let mut counts = NucleotideCounts::default();
        for base in bases {
            match base {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn gc(&self) -> u64 {
        self.g + self.c
    }

    pub fn at(&self) -> u64 {
        self.a + self.t
    }

    pub fn total(&self) -> u64 {
        self.a + self.c + self.g + self.t
    }
}

/// GC content summary of a merged sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionResult {
    /// Percentage of G and C bases, 0 to 100
    pub gc_percent: f64,
    /// (A+T)/(G+C); `None` for an empty sequence
    pub at_gc_ratio: Option<f64>,
    pub total_length: usize,
    pub sequence_count: usize,
}

/// Frame 0 codon usage. Both maps iterate in sorted codon order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodonUsage {
    pub counts: BTreeMap<String, u64>,
    pub frequencies: BTreeMap<String, f64>,
}

impl CodonUsage {
    /// Number of complete codons counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    ///
    /// The `n` most frequent codons, most frequent first.
    ///
    /// Ties keep sorted codon order since the sort is stable.
    ///
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut items: Vec<(&str, f64)> = self
            .frequencies
            .iter()
            .map(|(codon, freq)| (codon.as_str(), *freq))
            .collect();
        items.sort_by(|a, b| b.1.total_cmp(&a.1));
        items.truncate(n);
        items
    }
}
