use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{GenolyzeError, Result};

/// Codons shown in the codon frequency bar chart.
pub const DEFAULT_TOP_CODONS: usize = 25;
/// Sorted variant records carried in a detection preview.
pub const DEFAULT_PREVIEW_LIMIT: usize = 50;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SequenceOptions {
    pub top_codons: usize,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        SequenceOptions {
            top_codons: DEFAULT_TOP_CODONS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VariantOptions {
    pub preview_limit: usize,
    /// attach every sorted record, not just the preview
    pub include_all: bool,
    /// attach per-chromosome variant counts
    pub include_density: bool,
}

impl Default for VariantOptions {
    fn default() -> Self {
        VariantOptions {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            include_all: false,
            include_density: false,
        }
    }
}

///
/// Tunables for both pipelines, normally read from a TOML file such as:
///
/// ```toml
/// [sequence]
/// top_codons = 10
///
/// [variants]
/// preview_limit = 100
/// include_density = true
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub sequence: SequenceOptions,
    pub variants: VariantOptions,
}

impl TryFrom<&Path> for AnalysisConfig {
    type Error = GenolyzeError;

    fn try_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GenolyzeError::FileNotFound(path.to_path_buf()));
        }
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
