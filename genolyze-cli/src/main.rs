mod common;
mod sequence;
mod sniff;
mod variants;

use anyhow::Result;
use clap::{ArgAction, Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "genolyze";
    pub const BIN_NAME: &str = "genolyze";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Composition, codon usage and variant summaries for FASTA and VCF files, emitted as JSON.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(sequence::cli::create_sequence_cli())
        .subcommand(variants::cli::create_variants_cli())
        .subcommand(sniff::cli::create_sniff_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    common::init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // SEQUENCE COMPOSITION
        //
        Some((sequence::cli::SEQUENCE_CMD, matches)) => {
            sequence::handlers::run_sequence(matches)?;
        }

        //
        // VARIANT DETECTION
        //
        Some((variants::cli::VARIANTS_CMD, matches)) => {
            variants::handlers::run_variants(matches)?;
        }

        //
        // FILE TYPE SNIFFING
        //
        Some((sniff::cli::SNIFF_CMD, matches)) => {
            sniff::handlers::run_sniff(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["genolyze", "sniff", "x.vcf", "-vv"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
    }
}
