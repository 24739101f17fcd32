use clap::{ArgAction, Command, arg};

pub const VARIANTS_CMD: &str = "variants";

pub fn create_variants_cli() -> Command {
    Command::new(VARIANTS_CMD)
        .about("Classify, sort and summarize the variants of a VCF file.")
        .arg(
            arg!(--input <INPUT>)
                .required(true)
                .help("Path to input VCF/VCF.gz file"),
        )
        .arg(
            arg!(--preview <PREVIEW>)
                .required(false)
                .help("Number of sorted variants in the preview (default: 50)"),
        )
        .arg(
            arg!(--all "Include every sorted variant in the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--density "Include per-chromosome variant counts")
                .action(ArgAction::SetTrue),
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
