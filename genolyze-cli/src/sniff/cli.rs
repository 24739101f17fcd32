use clap::{Arg, Command};

pub const SNIFF_CMD: &str = "sniff";

pub fn create_sniff_cli() -> Command {
    Command::new(SNIFF_CMD)
        .about("Report the genomic file type of a path, by extension and by content.")
        .arg(
            Arg::new("path")
                .required(true)
                .help("File to inspect"),
        )
}
