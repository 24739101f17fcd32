use clap::{Command, arg};

pub const SEQUENCE_CMD: &str = "sequence";

pub fn create_sequence_cli() -> Command {
    Command::new(SEQUENCE_CMD)
        .about("Compute GC content and codon usage for a FASTA file.")
        .arg(
            arg!(--input <INPUT>)
                .required(true)
                .help("Path to input FASTA/FASTA.gz file"),
        )
        .arg(
            arg!(--top <TOP>)
                .required(false)
                .help("Number of codons in the frequency bar chart (default: 25)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("Path to a TOML file with analysis options"),
        )
}
