#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::rules::CharClass::{Alphabetic, Numeric};
use crate::rules::{FieldSpec, Layout, RuleEntry, RuleSource, field};

/// Published example IBANs, at least one per check-digit policy and one per
/// special grouping.
const PUBLISHED_EXAMPLES: &[&str] = &[
    "GB82WEST12345698765432",
    "DE89370400440532013000",
    "FR1420041010050500013M02606",
    "BE68539007547034",
    "NL91ABNA0417164300",
    "CH9300762011623852957",
    "AL47212110090000000235698741",
    "IE29AIBK93115212345678",
    "IT60X0542811101000000123456",
    "NO9386011117947",
    "LT121000011101001000",
    "RU0304452522540817810538091310419",
    "MC5811222000010123456789030",
    "SM86U0322509800000000270100",
    "FO6264600001631634",
    "GL8964710001000206",
    "EG380019000500000000263180002",
    "LY83002048000020100120361",
    "SV62CENR00000000000000700025",
    "BI4210000100010000332045181",
    "CM2110003001000500000605306",
    "DZ580002100001113000000570",
    "SN08SN0100152000048500003035",
    "HN88CABF00000000000250005469",
    "TR330006100519786457841326",
    "BR1800360305000010009795493C1",
    "MU17BOMM0101101030300200000MUR",
    "SC18SSCB11010000000000001497USD",
];

/// One example per fixed check-digit country.
const FIXED_CHECK_EXAMPLES: &[&str] = &[
    "BA391290079401028494",
    "TL380080012345678910157",
    "MR1300020001010000123456753",
    "ME25505000012345678951",
    "MK07250120000058984",
    "PT50000201231234567890154",
    "RS35260005601001611379",
    "SI56263300012039086",
    "TN5910006035183598478831",
];

fn labels(result: &ValidationResult) -> Vec<&str> {
    result.elements.iter().map(|e| e.label.as_str()).collect()
}

// ── valid inputs ─────────────────────────────────────────────────────────────

#[test]
fn published_examples_are_valid() {
    for iban in PUBLISHED_EXAMPLES {
        let result = validate(iban);
        assert_eq!(
            result.status,
            ValidationStatus::Valid,
            "{iban}: {}",
            result.message
        );
        assert_eq!(result.message, "Valid IBAN");
        assert!(!result.elements.is_empty(), "{iban}");
    }
}

#[test]
fn fixed_check_examples_are_valid() {
    for iban in FIXED_CHECK_EXAMPLES {
        let result = validate(iban);
        assert!(result.is_valid(), "{iban}: {}", result.message);
    }
}

#[test]
fn uk_example_decomposes_into_fields() {
    let result = validate("GB82WEST12345698765432");
    assert!(result.is_valid());
    assert_eq!(result.country_code, "GB");
    assert_eq!(result.country_name, "United Kingdom");
    assert_eq!(
        labels(&result),
        vec![
            "Machine-readable IBAN",
            "Human-readable IBAN",
            "BBAN",
            "Country Code",
            "Country",
            "BIC bank code",
            "Bank and branch code (sort code)",
            "Account number",
        ]
    );
    assert_eq!(result.element("Machine-readable IBAN"), Some("GB82WEST12345698765432"));
    assert_eq!(
        result.element("Human-readable IBAN"),
        Some("GB82 WEST 1234 5698 7654 32")
    );
    assert_eq!(result.element("BBAN"), Some("WEST12345698765432"));
    assert_eq!(result.element("BIC bank code"), Some("WEST"));
    assert_eq!(result.element("Bank and branch code (sort code)"), Some("123456"));
    assert_eq!(result.element("Account number"), Some("98765432"));
}

#[test]
fn element_categories_follow_display_order() {
    let result = validate("GB82WEST12345698765432");
    let iban_rows: Vec<&str> = result
        .elements_in(ElementCategory::Iban)
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(iban_rows, vec!["Machine-readable IBAN", "Human-readable IBAN", "BBAN"]);
    assert_eq!(result.elements_in(ElementCategory::Country).count(), 2);
    assert_eq!(result.elements_in(ElementCategory::Element).count(), 3);
}

#[test]
fn german_example_is_valid() {
    let result = validate("DE89370400440532013000");
    assert!(result.is_valid());
    assert_eq!(result.country_name, "Germany");
}

#[test]
fn french_labels_and_letter_in_account() {
    let result = validate("FR1420041010050500013M02606");
    assert!(result.is_valid());
    assert_eq!(result.element("Account number"), Some("0500013M026"));
    assert_eq!(result.element("National check digits (clé RIB)"), Some("06"));
}

// ── unofficial use and unnamed fields ────────────────────────────────────────

#[test]
fn unofficial_country_gets_note() {
    let result = validate("DZ580002100001113000000570");
    assert!(result.is_valid());
    assert_eq!(
        result.element("Note"),
        Some("Algeria makes unofficial use of the IBAN standard")
    );
}

#[test]
fn official_country_has_no_note() {
    let result = validate("DE89370400440532013000");
    assert_eq!(result.element("Note"), None);
}

/// An unnamed field spanning the whole BBAN is labeled "BBAN" and appears
/// in the element category alongside the IBAN-level BBAN row.
#[test]
fn unnamed_whole_bban_field_is_labeled_bban() {
    let result = validate("DZ580002100001113000000570");
    let bban_rows: Vec<&DisplayElement> =
        result.elements.iter().filter(|e| e.label == "BBAN").collect();
    assert_eq!(bban_rows.len(), 2);
    assert_eq!(bban_rows[0].category, ElementCategory::Iban);
    assert_eq!(bban_rows[1].category, ElementCategory::Element);
    assert_eq!(bban_rows[1].value, "0002100001113000000570");
}

#[test]
fn unnamed_partial_field_is_labeled_unnamed_element() {
    let result = validate("MU17BOMM0101101030300200000MUR");
    assert!(result.is_valid());
    assert_eq!(result.element("Unnamed element"), Some("000"));
    assert_eq!(result.element("Currency code"), Some("MUR"));
}

#[test]
fn alias_reports_its_own_name_and_note() {
    let result = validate("CM2110003001000500000605306");
    assert!(result.is_valid());
    assert_eq!(result.country_name, "Cameroon");
    assert_eq!(
        result.element("Note"),
        Some("Cameroon makes unofficial use of the IBAN standard")
    );
    assert_eq!(
        result.element("Human-readable IBAN"),
        Some("CM21 1000 3001 0005 0000 0605 306")
    );
}

#[test]
fn burundi_uses_special_grouping() {
    let result = validate("BI4210000100010000332045181");
    assert_eq!(
        result.element("Human-readable IBAN"),
        Some("BI42 10000 10001 00003320451 81")
    );
}

// ── unknown country ──────────────────────────────────────────────────────────

#[test]
fn unknown_country_code() {
    let result = validate("ZZ820000000000000000");
    assert_eq!(result.status, ValidationStatus::UnknownCountry);
    assert_eq!(result.message, "We are unaware of IBANs beginning ZZ");
    assert_eq!(result.country_code, "ZZ");
    assert_eq!(result.country_name, UNKNOWN_COUNTRY_NAME);
    assert!(result.elements.is_empty());
}

#[test]
fn lowercase_input_is_not_folded() {
    let result = validate("gb82west12345698765432");
    assert_eq!(result.status, ValidationStatus::UnknownCountry);
    assert_eq!(result.message, "We are unaware of IBANs beginning gb");
}

#[test]
fn empty_and_single_character_inputs() {
    let empty = validate("");
    assert_eq!(empty.status, ValidationStatus::UnknownCountry);
    assert_eq!(empty.country_code, "");
    assert_eq!(empty.message, "We are unaware of IBANs beginning ");

    let one = validate("G");
    assert_eq!(one.status, ValidationStatus::UnknownCountry);
    assert_eq!(one.country_code, "G");
}

#[test]
fn non_ascii_country_code() {
    let result = validate("ÄÖ82WEST12345698765432");
    assert_eq!(result.status, ValidationStatus::UnknownCountry);
    assert_eq!(result.country_code, "ÄÖ");
}

// ── length ───────────────────────────────────────────────────────────────────

#[test]
fn one_character_short_is_incomplete() {
    let result = validate("GB82WEST1234569876543");
    assert_eq!(result.status, ValidationStatus::Incomplete);
    assert!(result.is_incomplete());
    assert_eq!(result.message, "IBAN Incomplete");
    assert_eq!(result.country_name, "United Kingdom");
    assert!(result.elements.is_empty());
}

#[test]
fn country_code_alone_is_incomplete() {
    let result = validate("GB");
    assert_eq!(result.status, ValidationStatus::Incomplete);
    assert_eq!(result.country_name, "United Kingdom");
}

#[test]
fn one_character_long_is_too_long() {
    let result = validate("GB82WEST123456987654321");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "GB IBAN Too Long");
    assert!(result.elements.is_empty());
}

/// Length counts characters, so a multi-byte character occupies one slot.
#[test]
fn length_counts_characters() {
    let result = validate("GB82WEST1234569876543Ä");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "BBAN structure invalid for United Kingdom");
}

// ── check digits ─────────────────────────────────────────────────────────────

#[test]
fn non_digit_check_digits() {
    let result = validate("GB8AWEST12345698765432");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "Check digits invalid");
    assert!(result.elements.is_empty());
}

#[test]
fn non_ascii_check_digits() {
    let result = validate("GB8٢WEST12345698765432");
    assert_eq!(result.message, "Check digits invalid");
}

#[test]
fn fixed_check_digit_mismatch() {
    let result = validate("BA401290079401028494");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "Check digits invalid");
    assert!(result.elements.is_empty());
}

#[test]
fn fixed_check_mismatch_for_every_fixed_country() {
    for iban in FIXED_CHECK_EXAMPLES {
        let mut altered: String = iban.chars().take(2).collect();
        altered.push_str("00");
        altered.extend(iban.chars().skip(4));
        let result = validate(&altered);
        assert_eq!(result.message, "Check digits invalid", "{altered}");
    }
}

/// Fixed-policy countries skip the MOD 97-10 test entirely.
#[test]
fn fixed_policy_ignores_mod97() {
    let result = validate("BA391290079401028495");
    assert!(result.is_valid(), "{}", result.message);
}

/// A single-digit fixed value is matched in its zero-padded form.
#[test]
fn fixed_value_below_ten_is_zero_padded() {
    assert!(validate("MK07250120000058984").is_valid());
    assert_eq!(validate("MK70250120000058984").message, "Check digits invalid");
}

// ── structure ────────────────────────────────────────────────────────────────

#[test]
fn field_class_violation() {
    let result = validate("GB82WE5T12345698765432");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "BBAN structure invalid for United Kingdom");
    assert_eq!(result.country_name, "United Kingdom");
    assert!(result.elements.is_empty());
}

#[test]
fn zero_filled_field_violation() {
    let result = validate("MU17BOMM0101101030300200100MUR");
    assert_eq!(result.message, "BBAN structure invalid for Mauritius");
}

#[test]
fn structure_message_uses_alias_name() {
    let result = validate("CM211000300100050000060530X");
    assert_eq!(result.message, "BBAN structure invalid for Cameroon");
}

// ── supplementary checks ─────────────────────────────────────────────────────

#[test]
fn mauritius_bank_code_must_be_letters_then_digits() {
    let result = validate("MU17BOM10101101030300200000MUR");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "Mauritius BBAN check digits invalid");
    assert!(result.elements.is_empty());
}

#[test]
fn seychelles_bank_code_must_be_letters_then_digits() {
    let result = validate("SC18SSC111010000000000001497USD");
    assert_eq!(result.message, "Seychelles BBAN check digits invalid");
}

/// Field structure is checked before the supplementary predicates.
#[test]
fn structure_failure_wins_over_supplementary_failure() {
    let result = validate("MU17BOM101011010303002000001UR");
    assert_eq!(result.message, "BBAN structure invalid for Mauritius");
}

// ── checksum ─────────────────────────────────────────────────────────────────

#[test]
fn checksum_failure_keeps_elements() {
    let result = validate("DE89370400440532013001");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.message, "Check digits invalid");
    assert_eq!(result.country_name, "Germany");
    assert!(!result.elements.is_empty());
    assert_eq!(result.element("BBAN"), Some("370400440532013001"));
}

#[test]
fn transposed_digits_fail_checksum() {
    let result = validate("GB82WEST12345698765423");
    assert_eq!(result.message, "Check digits invalid");
    assert!(!result.elements.is_empty());
}

// ── custom registries ────────────────────────────────────────────────────────

const TEST_FIELDS: &[FieldSpec] = &[
    field(4, 4, "Bank code", Alphabetic),
    field(8, 8, "Account number", Numeric),
];

fn test_registry(check_digits: CheckDigitPolicy) -> Registry {
    Registry::from_entries(&[RuleEntry {
        code: "AA",
        name: "Testland",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 16,
                check_digits,
                fields: TEST_FIELDS,
                supplementary_checks: &[],
            },
        },
    }])
}

#[test]
fn unchecked_policy_accepts_any_check_digits() {
    let registry = test_registry(CheckDigitPolicy::Unchecked);
    let result = validate_with(&registry, "AA00WEST12345678");
    assert!(result.is_valid(), "{}", result.message);
    assert_eq!(result.country_name, "Testland");
    assert_eq!(result.element("Bank code"), Some("WEST"));
}

#[test]
fn unchecked_policy_still_requires_digit_format() {
    let registry = test_registry(CheckDigitPolicy::Unchecked);
    let result = validate_with(&registry, "AAXXWEST12345678");
    assert_eq!(result.message, "Check digits invalid");
}

#[test]
fn custom_registry_does_not_see_builtin_countries() {
    let registry = test_registry(CheckDigitPolicy::Mod97);
    let result = validate_with(&registry, "GB82WEST12345698765432");
    assert_eq!(result.status, ValidationStatus::UnknownCountry);
}

// ── result presentation ──────────────────────────────────────────────────────

#[test]
fn status_display() {
    assert_eq!(ValidationStatus::Valid.to_string(), "valid");
    assert_eq!(ValidationStatus::Invalid.to_string(), "invalid");
    assert_eq!(ValidationStatus::Incomplete.to_string(), "incomplete");
    assert_eq!(ValidationStatus::UnknownCountry.to_string(), "unknown-country");
}

#[test]
fn result_serializes_with_snake_case_tags() {
    let result = validate("ZZ820000000000000000");
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["status"], "unknown_country");
    assert_eq!(json["country_code"], "ZZ");
    assert_eq!(json["elements"], serde_json::json!([]));

    let valid = serde_json::to_value(validate("BE68539007547034")).expect("serialize");
    assert_eq!(valid["status"], "valid");
    assert_eq!(valid["elements"][0]["category"], "iban");
    assert_eq!(valid["elements"][0]["label"], "Machine-readable IBAN");
}

#[test]
fn validation_is_deterministic() {
    for iban in ["GB82WEST12345698765432", "DE89370400440532013001", "ZZ", ""] {
        assert_eq!(validate(iban), validate(iban));
    }
}
