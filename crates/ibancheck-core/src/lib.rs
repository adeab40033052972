#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod checksum;
pub mod grouping;
pub mod registry;
pub mod rules;
pub mod text;
pub mod validation;

pub use checksum::{compute_check_digits, is_valid_mod97, mod97_remainder};
pub use grouping::human_readable;
pub use registry::{LayoutViolation, Registry, registry};
pub use rules::{
    CharClass, CheckDigitPolicy, CountryRule, FieldSpec, Layout, RuleEntry, RuleSource,
    SupplementaryCheck,
};
pub use text::normalize;
pub use validation::{
    DisplayElement, ElementCategory, UNKNOWN_COUNTRY_NAME, ValidationResult, ValidationStatus,
    validate, validate_with,
};

/// Returns the current version of the ibancheck-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
