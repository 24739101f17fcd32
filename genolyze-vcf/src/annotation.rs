//! Effect/impact extraction from SnpEff `ANN` and VEP `CSQ` INFO entries.
//!
//! Only the first sub-annotation of the first matching entry is read. Short or
//! missing fields leave the corresponding value empty; nothing here fails.

pub const ANN_KEY: &str = "ANN=";
pub const CSQ_KEY: &str = "CSQ=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationSource {
    /// SnpEff: `Allele|Annotation|Annotation_Impact|...`
    Ann,
    /// VEP: `Consequence|...|IMPACT|...` in the default field order
    Csq,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub effect: Option<String>,
    pub impact: Option<String>,
}

/// True when a header line mentions either annotation key.
pub fn header_declares_annotation(line: &str) -> bool {
    line.contains(ANN_KEY) || line.contains(CSQ_KEY)
}

///
/// Find the annotation payload in an INFO column. The first `ANN=` entry wins
/// over any `CSQ=` entry regardless of their order.
///
pub fn find_annotation(info: &str) -> Option<(AnnotationSource, &str)> {
    let entries = || info.split(';');

    entries()
        .find_map(|entry| entry.strip_prefix(ANN_KEY))
        .map(|value| (AnnotationSource::Ann, value))
        .or_else(|| {
            entries()
                .find_map(|entry| entry.strip_prefix(CSQ_KEY))
                .map(|value| (AnnotationSource::Csq, value))
        })
}

impl Annotation {
    ///
    /// Extract effect and impact from an INFO column.
    ///
    pub fn parse(info: &str) -> Self {
        match find_annotation(info) {
            Some((source, value)) => Annotation::from_payload(source, value),
            None => Annotation::default(),
        }
    }

    ///
    /// Read the first comma separated sub-annotation of an `ANN`/`CSQ` value.
    ///
    /// `ANN` needs at least three pipe fields; `CSQ` gives the effect with two
    /// and the impact with three.
    ///
    pub fn from_payload(source: AnnotationSource, value: &str) -> Self {
        let first = value.split(',').next().unwrap_or_default();
        let fields: Vec<&str> = first.split('|').collect();

        let (effect, impact) = match (source, fields.as_slice()) {
            (AnnotationSource::Ann, [_allele, effect, impact, ..]) => (Some(*effect), Some(*impact)),
            (AnnotationSource::Csq, [effect, _, impact, ..]) => (Some(*effect), Some(*impact)),
            (AnnotationSource::Csq, [effect, _]) => (Some(*effect), None),
            _ => (None, None),
        };

        Annotation {
            effect: effect.map(str::to_string),
            impact: impact.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn annotation(effect: Option<&str>, impact: Option<&str>) -> Annotation {
        Annotation {
            effect: effect.map(str::to_string),
            impact: impact.map(str::to_string),
        }
    }

    #[rstest]
    #[case("ANN=A|missense_variant|MODERATE|GENE1", annotation(Some("missense_variant"), Some("MODERATE")))]
    #[case(
        "DP=10;ANN=T|stop_gained|HIGH|G1,T|intron_variant|MODIFIER|G2",
        annotation(Some("stop_gained"), Some("HIGH"))
    )]
    #[case("ANN=A|missense_variant", annotation(None, None))]
    #[case("CSQ=missense_variant|G1|MODERATE|x", annotation(Some("missense_variant"), Some("MODERATE")))]
    #[case("CSQ=synonymous_variant|G1", annotation(Some("synonymous_variant"), None))]
    #[case("CSQ=synonymous_variant", annotation(None, None))]
    #[case("CSQ=upstream|G|LOW;ANN=A|downstream|MODIFIER", annotation(Some("downstream"), Some("MODIFIER")))]
    #[case("DP=10;AF=0.5", annotation(None, None))]
    #[case(".", annotation(None, None))]
    #[case("XANN=A|b|c", annotation(None, None))]
    fn test_parse(#[case] info: &str, #[case] expected: Annotation) {
        assert_eq!(Annotation::parse(info), expected);
    }

    #[rstest]
    #[case("##INFO=<ID=ANN,Number=.,Type=String,Description=\"ANN=...\">", true)]
    #[case("##VEP=\"v104\" CSQ=Consequence|SYMBOL|IMPACT", true)]
    #[case("##INFO=<ID=DP,Number=1,Type=Integer>", false)]
    #[case("#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO", false)]
    fn test_header_declares_annotation(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(header_declares_annotation(line), expected);
    }

    #[rstest]
    fn test_empty_fields_are_kept_as_empty_strings() {
        assert_eq!(
            Annotation::parse("ANN=A||"),
            annotation(Some(""), Some(""))
        );
    }
}
