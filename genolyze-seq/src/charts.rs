//! Declarative chart descriptors.
//!
//! These carry only labels, values and layout hints. They serialize to the
//! Plotly figure shape (`{"data": [...], "layout": {...}}`) so a front end can
//! hand them straight to its plotting library.

use serde::{Deserialize, Serialize};

use crate::models::{CodonUsage, NucleotideCounts};

pub const ATGC_PIE_TITLE: &str = "AT/GC Composition";
pub const ATGC_PIE_HOLE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        hole: f64,
    },
    Bar {
        x: Vec<String>,
        y: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub orientation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    fn titled(title: &str) -> Option<Axis> {
        Some(Axis {
            title: title.to_string(),
        })
    }
}

///
/// Pie chart over the raw A, T, G and C counts, in that order.
///
pub fn atgc_pie(counts: &NucleotideCounts) -> ChartDescriptor {
    ChartDescriptor {
        data: vec![Trace::Pie {
            labels: ["A", "T", "G", "C"].iter().map(|s| s.to_string()).collect(),
            values: vec![counts.a, counts.t, counts.g, counts.c],
            hole: ATGC_PIE_HOLE,
        }],
        layout: Layout {
            title: ATGC_PIE_TITLE.to_string(),
            legend: Some(Legend {
                orientation: "h".to_string(),
            }),
            xaxis: None,
            yaxis: None,
        },
    }
}

///
/// Bar chart of the `top` most frequent codons.
///
/// # Arguments
///
/// - usage: codon usage to chart
/// - top: maximum number of bars; the title always names this value
///
pub fn codon_bar_top(usage: &CodonUsage, top: usize) -> ChartDescriptor {
    let (x, y) = usage
        .top(top)
        .into_iter()
        .map(|(codon, freq)| (codon.to_string(), freq))
        .unzip();

    ChartDescriptor {
        data: vec![Trace::Bar { x, y }],
        layout: Layout {
            title: format!("Top {} Codons by Frequency (frame 0)", top),
            legend: None,
            xaxis: Axis::titled("Codon"),
            yaxis: Axis::titled("Frequency"),
        },
    }
}
