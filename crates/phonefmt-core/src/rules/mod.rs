pub mod builtin;
pub mod national;
pub mod rule;
pub mod source;

pub use national::{format_national, format_national_any, national_to_epp};
pub use rule::CountryRule;
pub use source::{RuleSource, RuleTable};
