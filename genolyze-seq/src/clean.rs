/// Upper-case a raw sequence and drop every byte that is not `A`, `C`, `G` or `T`.
///
/// Ambiguity codes, gaps and whitespace all disappear.
pub fn clean_sequence(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .map(u8::to_ascii_uppercase)
        .filter(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
        .collect()
}
