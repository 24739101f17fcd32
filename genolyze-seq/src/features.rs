//! Feature dictionaries for downstream classifiers.
//!
//! The analysis crates never load or own a model. They flatten a
//! [SequenceAnalysis] into a [FeatureSet] and hand it to whatever implements
//! [Predictor].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::SequenceAnalysis;

pub const CODON_FEATURE_PREFIX: &str = "codon_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeMap<String, f64>);

impl FeatureSet {
    pub fn new() -> Self {
        FeatureSet::default()
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Features in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<&SequenceAnalysis> for FeatureSet {
    ///
    /// Flatten the scalar metrics and codon frequencies of an analysis.
    /// `at_gc_ratio` is left out when it is null.
    ///
    fn from(analysis: &SequenceAnalysis) -> Self {
        let mut features = FeatureSet::new();
        features.insert("gc_percent", analysis.metrics.gc_percent);
        if let Some(ratio) = analysis.metrics.at_gc_ratio {
            features.insert("at_gc_ratio", ratio);
        }
        features.insert("total_length", analysis.meta.total_length as f64);
        features.insert("sequence_count", analysis.meta.sequence_count as f64);

        for (codon, freq) in &analysis.codon.frequencies {
            features.insert(format!("{}{}", CODON_FEATURE_PREFIX, codon), *freq);
        }

        features
    }
}

/// Anything that can score a precomputed [FeatureSet].
pub trait Predictor {
    type Output;
    type Error;

    fn predict(&self, features: &FeatureSet) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use genolyze_core::config::SequenceOptions;

    use crate::analysis::analyze_records;

    struct GcThreshold(f64);

    impl Predictor for GcThreshold {
        type Output = bool;
        type Error = String;

        fn predict(&self, features: &FeatureSet) -> Result<bool, String> {
            features
                .get("gc_percent")
                .map(|gc| gc >= self.0)
                .ok_or_else(|| "gc_percent missing".to_string())
        }
    }

    #[fixture]
    fn analysis() -> SequenceAnalysis {
        analyze_records(["GGCCAATT"], &SequenceOptions::default())
    }

    #[rstest]
    fn test_features_from_analysis(analysis: SequenceAnalysis) {
        let features = FeatureSet::from(&analysis);

        assert_eq!(features.get("gc_percent"), Some(50.0));
        assert_eq!(features.get("at_gc_ratio"), Some(1.0));
        assert_eq!(features.get("total_length"), Some(8.0));
        assert_eq!(features.get("codon_GGC"), Some(0.5));
        assert_eq!(features.get("codon_CAA"), Some(0.5));
        assert_eq!(features.len(), 6);
    }

    #[rstest]
    fn test_empty_analysis_omits_ratio() {
        let analysis = analyze_records(Vec::<&str>::new(), &SequenceOptions::default());
        let features = FeatureSet::from(&analysis);

        assert_eq!(features.get("at_gc_ratio"), None);
        assert_eq!(features.get("gc_percent"), Some(0.0));
    }

    #[rstest]
    fn test_predictor_handoff(analysis: SequenceAnalysis) {
        let features = FeatureSet::from(&analysis);

        assert_eq!(GcThreshold(40.0).predict(&features), Ok(true));
        assert_eq!(GcThreshold(60.0).predict(&features), Ok(false));
        assert!(GcThreshold(60.0).predict(&FeatureSet::new()).is_err());
    }
}
