/// The validation engine: one candidate string in, one [`ValidationResult`] out.
///
/// Checks run in a fixed order and the first structural failure decides the
/// result:
///
/// 1. extract the two-letter country code and resolve its rule set;
/// 2. compare the length against the country's expected length;
/// 3. require two ASCII digits at offsets 2–3, and the fixed value where the
///    country prescribes one;
/// 4. build the display elements and test every BBAN field against its
///    character class;
/// 5. run the country's supplementary BBAN checks;
/// 6. verify the MOD 97-10 checksum.
///
/// No step returns an error: every outcome, including unknown countries and
/// malformed input, is a [`ValidationStatus`] with a user-facing message.
/// The engine holds no state, so concurrent calls need no synchronization.
use std::fmt;

use serde::Serialize;

use crate::checksum::is_valid_mod97;
use crate::grouping::human_readable;
use crate::registry::{Registry, registry};
use crate::rules::{CharClass, CheckDigitPolicy, CountryRule, FieldSpec};
use crate::text::{char_len, char_slice, char_tail};

#[cfg(test)]
mod tests;

/// Country name reported when the country code is not registered.
pub const UNKNOWN_COUNTRY_NAME: &str = "Unknown Country";

const MSG_VALID: &str = "Valid IBAN";
const MSG_INCOMPLETE: &str = "IBAN Incomplete";
const MSG_CHECK_DIGITS_INVALID: &str = "Check digits invalid";

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Outcome of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// Every check passed.
    Valid,
    /// The candidate has the right length (or is too long) but fails a
    /// format, structure, or check-digit test.
    Invalid,
    /// The candidate is shorter than its country's IBAN length; the caller
    /// may still be typing.
    Incomplete,
    /// The country code is not in the registry.
    UnknownCountry,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid => f.write_str("invalid"),
            Self::Incomplete => f.write_str("incomplete"),
            Self::UnknownCountry => f.write_str("unknown-country"),
        }
    }
}

/// Presentation group of a [`DisplayElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    /// A form of the whole IBAN or BBAN.
    Iban,
    /// Country information.
    Country,
    /// One decomposed BBAN field.
    Element,
}

/// A labeled value for display. Carries no validation semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayElement {
    /// Row label.
    pub label: String,
    /// Row value.
    pub value: String,
    /// Presentation group.
    pub category: ElementCategory,
}

impl DisplayElement {
    fn new(label: impl Into<String>, value: impl Into<String>, category: ElementCategory) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            category,
        }
    }
}

/// Result of one [`validate`] call.
///
/// `elements` is filled when the candidate is valid, and also when it fails
/// only the MOD 97-10 checksum, so a renderer can show the decomposition
/// next to the error. Every other outcome carries no elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Outcome.
    pub status: ValidationStatus,
    /// The first two characters of the input, whether or not registered.
    pub country_code: String,
    /// Registered display name, or [`UNKNOWN_COUNTRY_NAME`].
    pub country_name: String,
    /// User-facing diagnostic.
    pub message: String,
    /// Decomposed IBAN for display.
    pub elements: Vec<DisplayElement>,
}

impl ValidationResult {
    fn rejected(
        status: ValidationStatus,
        country_code: &str,
        country_name: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            country_code: country_code.to_owned(),
            country_name: country_name.to_owned(),
            message: message.into(),
            elements: Vec::new(),
        }
    }

    /// Returns `true` if every check passed.
    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }

    /// Returns `true` if the input is too short to decide yet.
    pub fn is_incomplete(&self) -> bool {
        self.status == ValidationStatus::Incomplete
    }

    /// Value of the first element labeled `label`.
    pub fn element(&self, label: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    /// Elements in the given category, in order.
    pub fn elements_in(&self, category: ElementCategory) -> impl Iterator<Item = &DisplayElement> {
        self.elements.iter().filter(move |e| e.category == category)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Validates `raw` against the built-in registry.
///
/// `raw` must already be normalized (see [`crate::normalize`]); no case
/// folding or whitespace removal happens here. Any input is accepted,
/// including empty and non-ASCII strings.
///
/// # Examples
///
/// ```
/// use ibancheck_core::{ValidationStatus, validate};
///
/// let result = validate("GB82WEST12345698765432");
/// assert_eq!(result.status, ValidationStatus::Valid);
/// assert_eq!(result.country_name, "United Kingdom");
/// assert_eq!(result.element("Account number"), Some("98765432"));
/// ```
pub fn validate(raw: &str) -> ValidationResult {
    validate_with(registry(), raw)
}

/// Validates `raw` against an explicit registry.
pub fn validate_with(registry: &Registry, raw: &str) -> ValidationResult {
    let result = run(registry, raw);
    tracing::debug!(
        country = %result.country_code,
        status = %result.status,
        message = %result.message,
        "validated IBAN candidate"
    );
    result
}

fn run(registry: &Registry, raw: &str) -> ValidationResult {
    let country_code = char_slice(raw, 0, 2);
    let Some(rule) = registry.lookup(country_code) else {
        return ValidationResult::rejected(
            ValidationStatus::UnknownCountry,
            country_code,
            UNKNOWN_COUNTRY_NAME,
            format!("We are unaware of IBANs beginning {country_code}"),
        );
    };
    let name = rule.name;

    let length = char_len(raw);
    if length < rule.expected_length {
        return ValidationResult::rejected(
            ValidationStatus::Incomplete,
            country_code,
            name,
            MSG_INCOMPLETE,
        );
    }
    if length > rule.expected_length {
        return ValidationResult::rejected(
            ValidationStatus::Invalid,
            country_code,
            name,
            format!("{country_code} IBAN Too Long"),
        );
    }

    let check = char_slice(raw, 2, 2);
    let check_format_ok = char_len(check) == 2 && CharClass::Numeric.matches(check);
    let fixed_ok = rule
        .check_digits
        .fixed_digits()
        .is_none_or(|expected| check == expected);
    if !check_format_ok || !fixed_ok {
        return ValidationResult::rejected(
            ValidationStatus::Invalid,
            country_code,
            name,
            MSG_CHECK_DIGITS_INVALID,
        );
    }

    let bban = char_tail(raw, 4);
    let mut elements = base_elements(rule, country_code, raw, bban);

    let mut structure_ok = true;
    for field in rule.fields {
        let text = char_slice(raw, field.offset, field.length);
        elements.push(DisplayElement::new(
            field_label(field, text, bban),
            text,
            ElementCategory::Element,
        ));
        if !field.class.matches(text) {
            structure_ok = false;
        }
    }
    if !structure_ok {
        return ValidationResult::rejected(
            ValidationStatus::Invalid,
            country_code,
            name,
            format!("BBAN structure invalid for {name}"),
        );
    }

    if !rule.supplementary_checks.iter().all(|check| check.passes(bban)) {
        return ValidationResult::rejected(
            ValidationStatus::Invalid,
            country_code,
            name,
            format!("{name} BBAN check digits invalid"),
        );
    }

    let checksum_ok = match rule.check_digits {
        CheckDigitPolicy::Mod97 => is_valid_mod97(raw),
        CheckDigitPolicy::Fixed(_) | CheckDigitPolicy::Unchecked => true,
    };
    let (status, message) = if checksum_ok {
        (ValidationStatus::Valid, MSG_VALID)
    } else {
        (ValidationStatus::Invalid, MSG_CHECK_DIGITS_INVALID)
    };
    ValidationResult {
        status,
        country_code: country_code.to_owned(),
        country_name: name.to_owned(),
        message: message.to_owned(),
        elements,
    }
}

/// The elements describing the IBAN as a whole and its country.
fn base_elements(
    rule: &CountryRule,
    country_code: &str,
    raw: &str,
    bban: &str,
) -> Vec<DisplayElement> {
    let mut elements = vec![
        DisplayElement::new("Machine-readable IBAN", raw, ElementCategory::Iban),
        DisplayElement::new(
            "Human-readable IBAN",
            human_readable(country_code, raw),
            ElementCategory::Iban,
        ),
        DisplayElement::new("BBAN", bban, ElementCategory::Iban),
        DisplayElement::new("Country Code", country_code, ElementCategory::Country),
        DisplayElement::new("Country", rule.name, ElementCategory::Country),
    ];
    if !rule.official_use {
        elements.push(DisplayElement::new(
            "Note",
            format!("{} makes unofficial use of the IBAN standard", rule.name),
            ElementCategory::Country,
        ));
    }
    elements
}

/// Label for a field's display element. A field without a published name
/// is called "BBAN" when it spans the whole BBAN.
fn field_label(field: &FieldSpec, text: &str, bban: &str) -> String {
    match field.label {
        Some(label) => label.to_owned(),
        None if text == bban => "BBAN".to_owned(),
        None => "Unnamed element".to_owned(),
    }
}
