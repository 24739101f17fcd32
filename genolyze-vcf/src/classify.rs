//! Variant typing, zygosity calls and record assembly.

use crate::annotation::Annotation;
use crate::models::{VariantRecord, VariantType, Zygosity};
use crate::parser::RawVariant;

impl VariantType {
    ///
    /// Classify by comparing allele lengths: equal single bases are a SNP,
    /// equal longer alleles are complex, otherwise the longer side decides.
    ///
    pub fn from_alleles(ref_allele: &str, alt_allele: &str) -> Self {
        let (r, a) = (ref_allele.len(), alt_allele.len());
        if r == 1 && a == 1 {
            VariantType::Snp
        } else if r < a {
            VariantType::Insertion
        } else if r > a {
            VariantType::Deletion
        } else {
            VariantType::Complex
        }
    }
}

impl Zygosity {
    /// Map an unphased biallelic `GT` value to a zygosity.
    pub fn from_genotype(gt: &str) -> Self {
        match gt {
            "0/0" | "1/1" => Zygosity::Homozygous,
            "0/1" | "1/0" => Zygosity::Heterozygous,
            _ => Zygosity::Unknown,
        }
    }

    ///
    /// Look up `GT` in a FORMAT column and read the matching token of a sample
    /// column. Anything missing yields [Zygosity::Unknown].
    ///
    pub fn from_sample(format: Option<&str>, sample: Option<&str>) -> Self {
        let (Some(format), Some(sample)) = (format, sample) else {
            return Zygosity::Unknown;
        };

        format
            .split(':')
            .position(|key| key == "GT")
            .and_then(|idx| sample.split(':').nth(idx))
            .map(Zygosity::from_genotype)
            .unwrap_or(Zygosity::Unknown)
    }
}

impl VariantRecord {
    ///
    /// Build a classified record from the columns of one data line.
    ///
    /// Annotation fields are only read when the file header declared them.
    ///
    pub fn classify(raw: &RawVariant<'_>, has_annotation: bool) -> Self {
        let annotation = if has_annotation {
            Annotation::parse(raw.info)
        } else {
            Annotation::default()
        };

        VariantRecord {
            chrom: raw.chrom.to_string(),
            pos: raw.pos,
            id: raw.id.to_string(),
            ref_allele: raw.ref_allele.to_string(),
            alt_allele: raw.alt_allele.to_string(),
            variant_type: VariantType::from_alleles(raw.ref_allele, raw.alt_allele),
            genotype: Zygosity::from_sample(raw.format, raw.sample),
            effect: annotation.effect,
            impact: annotation.impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("A", "G", VariantType::Snp)]
    #[case("A", "AT", VariantType::Insertion)]
    #[case("AT", "A", VariantType::Deletion)]
    #[case("AT", "GC", VariantType::Complex)]
    #[case("A", "G,T", VariantType::Insertion)]
    fn test_variant_type(#[case] r: &str, #[case] a: &str, #[case] expected: VariantType) {
        assert_eq!(VariantType::from_alleles(r, a), expected);
    }

    #[rstest]
    #[case("0/0", Zygosity::Homozygous)]
    #[case("1/1", Zygosity::Homozygous)]
    #[case("0/1", Zygosity::Heterozygous)]
    #[case("1/0", Zygosity::Heterozygous)]
    #[case("0|1", Zygosity::Unknown)]
    #[case("./.", Zygosity::Unknown)]
    #[case("", Zygosity::Unknown)]
    fn test_from_genotype(#[case] gt: &str, #[case] expected: Zygosity) {
        assert_eq!(Zygosity::from_genotype(gt), expected);
    }

    #[rstest]
    #[case(Some("GT:DP"), Some("0/1:12"), Zygosity::Heterozygous)]
    #[case(Some("DP:GT"), Some("30:1/1"), Zygosity::Homozygous)]
    #[case(Some("DP:AD"), Some("30:10,20"), Zygosity::Unknown)]
    #[case(Some("DP:GT"), Some("30"), Zygosity::Unknown)]
    #[case(Some("GT"), None, Zygosity::Unknown)]
    #[case(None, None, Zygosity::Unknown)]
    fn test_from_sample(
        #[case] format: Option<&str>,
        #[case] sample: Option<&str>,
        #[case] expected: Zygosity,
    ) {
        assert_eq!(Zygosity::from_sample(format, sample), expected);
    }

    #[rstest]
    fn test_classify_ignores_annotation_without_header_marker() {
        let raw = RawVariant {
            chrom: "1",
            pos: 10,
            id: "rs1",
            ref_allele: "A",
            alt_allele: "G",
            info: "ANN=G|missense_variant|MODERATE",
            format: None,
            sample: None,
        };

        let record = VariantRecord::classify(&raw, false);
        assert_eq!(record.effect, None);
        assert_eq!(record.impact, None);

        let record = VariantRecord::classify(&raw, true);
        assert_eq!(record.effect.as_deref(), Some("missense_variant"));
        assert_eq!(record.impact.as_deref(), Some("MODERATE"));
    }
}
