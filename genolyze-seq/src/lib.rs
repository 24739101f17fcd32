//! Sequence composition and codon usage for FASTA input.
//!
//! All records of a FASTA file are cleaned and merged into a single
//! [SequenceBuffer]; record boundaries are intentionally not tracked. From
//! that buffer this crate computes:
//!
//! - GC percentage and the AT/GC ratio
//! - frame 0 codon counts and relative frequencies
//! - declarative chart descriptors for a plotting front end
//!
//! # Example
//!
//! ```no_run
//! use genolyze_core::SequenceOptions;
//! use genolyze_seq::analyze_sequence;
//!
//! let analysis = analyze_sequence("genome.fa", &SequenceOptions::default()).unwrap();
//! println!("{}", analysis.summary);
//! ```

pub mod analysis;
pub mod charts;
pub mod clean;
pub mod features;
pub mod io;
pub mod models;
pub mod statistics;

// re-exports
pub use analysis::{SequenceAnalysis, analyze_records, analyze_sequence};
pub use features::{FeatureSet, Predictor};
pub use models::{CodonUsage, CompositionResult, NucleotideCounts, SequenceBuffer};
pub use statistics::SequenceStatistics;
