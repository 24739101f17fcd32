//! Shared building blocks for the genolyze analysis crates.
//!
//! - [errors]: the error taxonomy every pipeline reports through
//! - [utils]: file type inference, content sniffing and gzip-aware readers
//! - [config]: tunables for the sequence and variant pipelines

pub mod config;
pub mod errors;
pub mod utils;

// re-exports
pub use config::{AnalysisConfig, SequenceOptions, VariantOptions};
pub use errors::{GenolyzeError, Result};
pub use utils::{GenomicFileType, get_dynamic_reader};
