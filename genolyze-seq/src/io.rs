use std::io::BufRead;
use std::path::Path;

use bio::io::fasta;
use log::debug;

use genolyze_core::errors::{GenolyzeError, Result};
use genolyze_core::utils::get_dynamic_reader;

///
/// Consume blank lines and other whitespace ahead of the first record, since
/// the FASTA reader expects `>` as the very first byte.
///
fn skip_leading_whitespace<R: BufRead>(reader: &mut R) -> Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let n = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let done = n < buf.len();
        reader.consume(n);
        if done {
            return Ok(());
        }
    }
}

///
/// Read every record of a FASTA file and return the raw sequence of each one.
///
/// Records with an empty sequence are dropped and blank lines ahead of the
/// first header are ignored. Gzipped files are accepted when the path ends in
/// `.gz`.
///
/// # Arguments
///
/// - path: path to the FASTA file
///
/// # Errors
///
/// - [GenolyzeError::FileNotFound] if the path does not exist
/// - [GenolyzeError::FileFormatError] if the content is not a FASTA record stream
///
pub fn load_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let mut reader = get_dynamic_reader(path)?;
    skip_leading_whitespace(&mut reader)?;
    let reader = fasta::Reader::new(reader);

    let mut sequences = Vec::new();
    for record in reader.records() {
        // the reader reports malformed structure as a plain io::Error
        let record = record.map_err(|e| {
            GenolyzeError::FileFormatError(format!("{} is not valid FASTA: {}", path.display(), e))
        })?;

        if record.seq().is_empty() {
            debug!("skipping empty FASTA record '{}'", record.id());
            continue;
        }
        sequences.push(record.seq().to_vec());
    }

    debug!("loaded {} sequences from {}", sequences.len(), path.display());

    Ok(sequences)
}
