#[cfg(feature = "core")]
#[doc(inline)]
pub use genolyze_core as core;

#[cfg(feature = "seq")]
#[doc(inline)]
pub use genolyze_seq as seq;

#[cfg(feature = "vcf")]
#[doc(inline)]
pub use genolyze_vcf as vcf;
