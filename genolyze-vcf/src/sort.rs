use crate::models::VariantRecord;

/// Ordering rank of a chromosome name.
///
/// Numeric names order by value and come before every non-numeric name
/// (`X`, `Y`, `MT`, `chr1`, ...), which all share the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChromRank {
    Numeric(i64),
    Other,
}

impl ChromRank {
    pub fn of(chrom: &str) -> Self {
        match chrom.trim().parse::<i64>() {
            Ok(n) => ChromRank::Numeric(n),
            Err(_) => ChromRank::Other,
        }
    }
}

///
/// Sort records by `(chromosome rank, position)`.
///
/// All non-numeric chromosomes share one rank, so among them position decides.
/// The sort is stable: records with identical keys keep their file order.
///
pub fn sort_variants(records: &mut [VariantRecord]) {
    records.sort_by_key(|r| (ChromRank::of(&r.chrom), r.pos));
}
