use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use genolyze_core::config::SequenceOptions;
use genolyze_core::errors::Result;

use crate::charts::{ChartDescriptor, atgc_pie, codon_bar_top};
use crate::models::{CodonUsage, CompositionResult, SequenceBuffer};
use crate::statistics::SequenceStatistics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "sequenceCount")]
    pub sequence_count: usize,
    #[serde(rename = "totalLength")]
    pub total_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub gc_percent: f64,
    pub at_gc_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charts {
    pub atgc_pie: ChartDescriptor,
    pub codon_bar_top: ChartDescriptor,
}

/// Everything derived from one FASTA file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceAnalysis {
    pub meta: Meta,
    pub metrics: Metrics,
    pub codon: CodonUsage,
    pub charts: Charts,
    pub summary: String,
}

impl SequenceAnalysis {
    ///
    /// Run every sequence statistic over a merged buffer.
    ///
    pub fn from_buffer(buffer: &SequenceBuffer, options: &SequenceOptions) -> Self {
        let composition = buffer.composition();
        let codon = buffer.codon_usage();

        let charts = Charts {
            atgc_pie: atgc_pie(&buffer.nucleotide_counts()),
            codon_bar_top: codon_bar_top(&codon, options.top_codons),
        };

        SequenceAnalysis {
            summary: summary_line(&composition),
            meta: Meta {
                sequence_count: composition.sequence_count,
                total_length: composition.total_length,
            },
            metrics: Metrics {
                gc_percent: composition.gc_percent,
                at_gc_ratio: composition.at_gc_ratio,
            },
            codon,
            charts,
        }
    }

    pub fn composition(&self) -> CompositionResult {
        CompositionResult {
            gc_percent: self.metrics.gc_percent,
            at_gc_ratio: self.metrics.at_gc_ratio,
            total_length: self.meta.total_length,
            sequence_count: self.meta.sequence_count,
        }
    }
}

///
/// One line summary: `GC%=50.00, AT/GC=1.000, length=8, sequences=1`.
///
/// A missing ratio (empty sequence) is written as `NA`.
///
pub fn summary_line(composition: &CompositionResult) -> String {
    let ratio = match composition.at_gc_ratio {
        Some(r) => format!("{:.3}", r),
        None => "NA".to_string(),
    };
    format!(
        "GC%={:.2}, AT/GC={}, length={}, sequences={}",
        composition.gc_percent, ratio, composition.total_length, composition.sequence_count
    )
}

///
/// Analyze raw (uncleaned) sequences that are already in memory.
///
pub fn analyze_records<I, S>(records: I, options: &SequenceOptions) -> SequenceAnalysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let buffer = SequenceBuffer::merge(records);
    SequenceAnalysis::from_buffer(&buffer, options)
}

///
/// Load a FASTA file and compute composition, codon usage and charts.
///
/// # Arguments
///
/// - path: path to a (optionally gzipped) FASTA file
/// - options: sequence pipeline tunables
///
pub fn analyze_sequence<P: AsRef<Path>>(
    path: P,
    options: &SequenceOptions,
) -> Result<SequenceAnalysis> {
    let path = path.as_ref();
    let buffer = SequenceBuffer::try_from(path)?;
    let analysis = SequenceAnalysis::from_buffer(&buffer, options);

    info!("{}: {}", path.display(), analysis.summary);

    Ok(analysis)
}
