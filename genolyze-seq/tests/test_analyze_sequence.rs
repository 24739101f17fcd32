//! End-to-end: FASTA file on disk -> sequence analysis JSON.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use genolyze_core::GenolyzeError;
use genolyze_core::config::SequenceOptions;
use genolyze_seq::analyze_sequence;
use genolyze_seq::charts::Trace;
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::json;
use tempfile::{TempDir, tempdir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

#[fixture]
fn dir() -> TempDir {
    tempdir().unwrap()
}

#[rstest]
fn test_single_record_example(dir: TempDir) {
    let path = write_file(&dir, "example.fa", ">rec1\nGGCCAATT\n");
    let analysis = analyze_sequence(&path, &SequenceOptions::default()).unwrap();

    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["meta"], json!({"sequenceCount": 1, "totalLength": 8}));
    assert_eq!(value["metrics"], json!({"gc_percent": 50.0, "at_gc_ratio": 1.0}));
    assert_eq!(value["codon"]["counts"], json!({"CAA": 1, "GGC": 1}));
    assert_eq!(value["codon"]["frequencies"], json!({"CAA": 0.5, "GGC": 0.5}));
    assert_eq!(
        value["summary"],
        json!("GC%=50.00, AT/GC=1.000, length=8, sequences=1")
    );
    assert_eq!(value["charts"]["atgc_pie"]["data"][0]["values"], json!([2, 2, 2, 2]));
}

#[rstest]
fn test_records_are_concatenated_before_codon_counting(dir: TempDir) {
    // "GG" + "CAT" + "T" -> GGCATT: codons GGC, ATT only exist across records
    let path = write_file(&dir, "split.fasta", ">a\nGG\n>b\nc-a-t\n>c\nTN\n");
    let analysis = analyze_sequence(&path, &SequenceOptions::default()).unwrap();

    assert_eq!(analysis.meta.sequence_count, 3);
    assert_eq!(analysis.meta.total_length, 6);
    let codons: Vec<&str> = analysis.codon.counts.keys().map(String::as_str).collect();
    assert_eq!(codons, vec!["ATT", "GGC"]);
}

#[rstest]
fn test_properties_hold_on_mixed_input(dir: TempDir) {
    let path = write_file(
        &dir,
        "mixed.fa",
        ">x\nATGCGTACGTTAGCNNNNatgcgt\nACGTRYKM\n>y\nGGGGCCCCAAAATTTTA\n",
    );
    let analysis = analyze_sequence(&path, &SequenceOptions::default()).unwrap();
    let length = analysis.meta.total_length;

    assert!((0.0..=100.0).contains(&analysis.metrics.gc_percent));

    let total_codons: u64 = analysis.codon.counts.values().sum();
    assert_eq!(total_codons, (length / 3) as u64);

    let freq_sum: f64 = analysis.codon.frequencies.values().sum();
    assert!((freq_sum - 1.0).abs() < 1e-9);

    match &analysis.charts.atgc_pie.data[0] {
        Trace::Pie { values, .. } => assert_eq!(values.iter().sum::<u64>(), length as u64),
        other => panic!("expected a pie trace, got {:?}", other),
    }
}

#[rstest]
fn test_top_codons_option(dir: TempDir) {
    let path = write_file(&dir, "top.fa", ">x\nAAACCCGGGTTTAAA\n");
    let options = SequenceOptions { top_codons: 2 };
    let analysis = analyze_sequence(&path, &options).unwrap();

    match &analysis.charts.codon_bar_top.data[0] {
        Trace::Bar { x, .. } => assert_eq!(x, &vec!["AAA", "CCC"]),
        other => panic!("expected a bar trace, got {:?}", other),
    }
    assert_eq!(
        analysis.charts.codon_bar_top.layout.title,
        "Top 2 Codons by Frequency (frame 0)"
    );
}

#[rstest]
fn test_only_ambiguous_bases(dir: TempDir) {
    let path = write_file(&dir, "n.fa", ">x\nNNNN\n");
    let analysis = analyze_sequence(&path, &SequenceOptions::default()).unwrap();

    assert_eq!(analysis.meta.sequence_count, 1);
    assert_eq!(analysis.meta.total_length, 0);
    assert_eq!(analysis.metrics.gc_percent, 0.0);
    assert_eq!(analysis.metrics.at_gc_ratio, None);
    assert_eq!(analysis.codon.counts.is_empty(), true);
}

#[rstest]
fn test_gzipped_fasta(dir: TempDir) {
    let path = dir.path().join("example.fa.gz");
    {
        let file = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        enc.write_all(b">rec1\nGGCCAATT\n").unwrap();
        enc.finish().unwrap();
    }

    let analysis = analyze_sequence(&path, &SequenceOptions::default()).unwrap();
    assert_eq!(analysis.metrics.gc_percent, 50.0);
}

#[rstest]
fn test_not_fasta(dir: TempDir) {
    let path = write_file(&dir, "bad.fa", "this is not a fasta file\n");
    let result = analyze_sequence(&path, &SequenceOptions::default());

    assert!(matches!(result, Err(GenolyzeError::FileFormatError(_))));
}

#[rstest]
fn test_missing_file(dir: TempDir) {
    let result = analyze_sequence(dir.path().join("absent.fa"), &SequenceOptions::default());
    assert!(matches!(result, Err(GenolyzeError::FileNotFound(_))));
}

#[rstest]
fn test_blank_lines_before_first_header(dir: TempDir) {
    let path = write_file(&dir, "padded.fa", "\n>r1\nGGCCAATT\n");
    let analysis = analyze_sequence(&path, &SequenceOptions::default()).unwrap();

    assert_eq!(
        analysis.summary,
        "GC%=50.00, AT/GC=1.000, length=8, sequences=1"
    );
}
