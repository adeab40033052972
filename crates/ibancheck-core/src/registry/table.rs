//! Compiled-in BBAN layouts, one row per country code.
//!
//! Field names follow the published national structures; check-digit
//! policies follow the SWIFT IBAN registry. Rows whose `source` is
//! [`RuleSource::Alias`] reuse another row's layout verbatim and only
//! contribute their own name and official-use flag.
use crate::rules::CharClass::{Alphabetic, Alphanumeric, Numeric, ZeroFilled};
use crate::rules::CheckDigitPolicy::{Fixed, Mod97};
use crate::rules::{Layout, RuleEntry, RuleSource, SupplementaryCheck, field, unnamed};

/// Mauritius and Seychelles: the 6-character bank code is 4 letters followed
/// by 2 digits.
const BANK_CODE_LETTERS_THEN_DIGITS: &[SupplementaryCheck] = &[SupplementaryCheck {
    name: "bank-code-letters-then-digits",
    predicate: bank_code_letters_then_digits,
}];

fn bank_code_letters_then_digits(bban: &str) -> bool {
    let letters: String = bban.chars().take(4).collect();
    let digits: String = bban.chars().skip(4).take(2).collect();
    !letters.is_empty()
        && letters.chars().all(|c| c.is_ascii_uppercase())
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// Every known country code, in publication order.
pub(crate) static ENTRIES: &[RuleEntry] = &[
    RuleEntry {
        code: "AL",
        name: "Albania",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 4, "Branch code", Numeric),
                    field(11, 1, "National check digit", Numeric),
                    field(12, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "AD",
        name: "Andorra",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Branch code", Numeric),
                    field(12, 12, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "AT",
        name: "Austria",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 11, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "AZ",
        name: "Azerbaijan",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 20, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BH",
        name: "Bahrain",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 14, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BY",
        name: "Belarus",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank or branch code", Alphanumeric),
                    field(8, 4, "Balance account number", Numeric),
                    field(12, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BE",
        name: "Belgium",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 16,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 7, "Account number", Numeric),
                    field(14, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BA",
        name: "Bosnia and Herzegovina",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Fixed(39),
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 3, "Branch code", Numeric),
                    field(10, 8, "Account number", Numeric),
                    field(18, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BR",
        name: "Brazil",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 29,
                check_digits: Mod97,
                fields: &[
                    field(4, 8, "National bank code", Numeric),
                    field(12, 5, "Branch code", Numeric),
                    field(17, 10, "Account number", Numeric),
                    field(27, 1, "Account type", Alphabetic),
                    field(28, 1, "Owner account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BG",
        name: "Bulgaria",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 4, "Branch (BAE) number", Numeric),
                    field(12, 2, "Account type", Numeric),
                    field(14, 8, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "CR",
        name: "Costa Rica",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 1, ZeroFilled),
                    field(5, 3, "Bank code", Numeric),
                    field(8, 14, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "HR",
        name: "Croatia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 21,
                check_digits: Mod97,
                fields: &[
                    field(4, 7, "Bank code", Numeric),
                    field(11, 10, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "CY",
        name: "Cyprus",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 5, "Branch code", Numeric),
                    field(12, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "CZ",
        name: "Czech Republic",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Account number prefix", Numeric),
                    unnamed(12, 2, Numeric),
                    field(14, 10, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "DK",
        name: "Denmark",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 18,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 9, "Account number", Numeric),
                    field(17, 1, "National check digit", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "DO",
        name: "Dominican Republic",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "Bank identifier", Alphanumeric),
                    field(8, 20, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "TL",
        name: "Timor-Leste (East Timor)",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Fixed(38),
                fields: &[
                    field(4, 3, "Bank identifier", Numeric),
                    field(7, 14, "Account number", Numeric),
                    field(21, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "EG",
        name: "Egypt",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 29,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Branch code", Numeric),
                    field(12, 17, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SV",
        name: "El Salvador",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 20, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "EE",
        name: "Estonia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Numeric),
                    field(6, 2, "Branch code", Numeric),
                    field(8, 11, "Account number", Numeric),
                    field(19, 1, "National check digit", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "YE",
        name: "Yemen",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 30,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "Bank code", Alphabetic),
                    field(8, 4, "Branch code", Numeric),
                    field(12, 18, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "FK",
        name: "Falkland Islands",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 18,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Alphabetic),
                    field(6, 12, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "FO",
        name: "Faroe Islands",
        official_use: true,
        source: RuleSource::Alias { base: "DK" },
    },
    RuleEntry {
        code: "FI",
        name: "Finland",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 18,
                check_digits: Mod97,
                fields: &[
                    field(4, 6, "Bank and branch code", Numeric),
                    field(10, 7, "Account number", Numeric),
                    field(17, 1, "National check digit", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "FR",
        name: "France",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 27,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 5, "Branch code (code guichet)", Numeric),
                    field(14, 11, "Account number", Alphanumeric),
                    field(25, 2, "National check digits (clé RIB)", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "GE",
        name: "Georgia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Alphabetic),
                    field(6, 16, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "DE",
        name: "Germany",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    field(4, 8, "Bank and branch identifier (Bankleitzahl/BLZ)", Numeric),
                    field(12, 10, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "GI",
        name: "Gibraltar",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 15, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "GR",
        name: "Greece",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 27,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 4, "Branch code", Numeric),
                    field(11, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "GL",
        name: "Greenland",
        official_use: true,
        source: RuleSource::Alias { base: "DK" },
    },
    RuleEntry {
        code: "GT",
        name: "Guatemala",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphanumeric),
                    field(8, 2, "Currency code", Alphanumeric),
                    field(10, 2, "Account type", Alphanumeric),
                    field(12, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "HU",
        name: "Hungary",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 4, "Branch code", Numeric),
                    field(11, 1, "National check digit 1", Numeric),
                    field(12, 15, "Account number", Numeric),
                    field(27, 1, "National check digit 2", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "IS",
        name: "Iceland",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 26,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Numeric),
                    field(6, 2, "Branch code", Numeric),
                    field(8, 2, "Account type", Numeric),
                    field(10, 6, "Account number", Numeric),
                    field(16, 10, "Account holder’s kennitala (national ID number)", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "IQ",
        name: "Iraq",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 3, "Branch code", Numeric),
                    field(11, 12, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "IE",
        name: "Ireland",
        official_use: true,
        source: RuleSource::Alias { base: "GB" },
    },
    RuleEntry {
        code: "IL",
        name: "Israel",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 3, "Branch code", Numeric),
                    field(10, 13, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "IT",
        name: "Italy",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 27,
                check_digits: Mod97,
                fields: &[
                    field(4, 1, "Check character (CIN)", Alphabetic),
                    field(
                        5,
                        5,
                        "National bank code (Associazione Bancaria Italiana/Codice ABI)",
                        Numeric,
                    ),
                    field(
                        10,
                        5,
                        "Branch code (Coordinate bancarie/Codice d’Avviamento Bancario (CAB))",
                        Numeric,
                    ),
                    field(15, 12, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "JO",
        name: "Jordan",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 30,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 4, "Branch code", Numeric),
                    field(12, 18, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "KZ",
        name: "Kazakhstan",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 13, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "XK",
        name: "Kosovo",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 12, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "KW",
        name: "Kuwait",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 30,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 22, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LV",
        name: "Latvia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 21,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 13, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LB",
        name: "Lebanon",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 20, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LY",
        name: "Libya",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 25,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 3, "Branch code", Numeric),
                    field(10, 15, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LI",
        name: "Liechtenstein",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 21,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 12, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LT",
        name: "Lithuania",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 11, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LU",
        name: "Luxembourg",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 13, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "MN",
        name: "Mongolia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 20,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 12, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "MT",
        name: "Malta",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 31,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 5, "Branch code", Numeric),
                    field(13, 18, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "MR",
        name: "Mauritania",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 27,
                check_digits: Fixed(13),
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 5, "Branch code (code guichet)", Numeric),
                    field(14, 11, "Account number", Numeric),
                    field(25, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "MU",
        name: "Mauritius",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 30,
                check_digits: Mod97,
                fields: &[
                    field(4, 6, "National bank code", Alphanumeric),
                    field(10, 2, "Branch identifier", Numeric),
                    field(12, 12, "Account number", Numeric),
                    unnamed(24, 3, ZeroFilled),
                    field(27, 3, "Currency code", Alphabetic),
                ],
                supplementary_checks: BANK_CODE_LETTERS_THEN_DIGITS,
            },
        },
    },
    RuleEntry {
        code: "MC",
        name: "Monaco",
        official_use: true,
        source: RuleSource::Alias { base: "FR" },
    },
    RuleEntry {
        code: "MD",
        name: "Moldova",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Alphanumeric),
                    field(6, 18, "Account code", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "ME",
        name: "Montenegro",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Fixed(25),
                fields: &[
                    field(4, 3, "Bank code", Numeric),
                    field(7, 13, "Account number", Numeric),
                    field(20, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "NL",
        name: "The Netherlands",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 18,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 10, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "MK",
        name: "North Macedonia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 19,
                check_digits: Fixed(7),
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 10, "Account number", Numeric),
                    field(17, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "NO",
        name: "Norway",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 15,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 6, "Account number", Numeric),
                    field(14, 1, "National check digit", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "PK",
        name: "Pakistan",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "PS",
        name: "Palestine",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 29,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 21, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "PL",
        name: "Poland",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 4, "Branch code", Numeric),
                    field(11, 1, "National check digit", Numeric),
                    field(12, 16, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "PT",
        name: "Portugal",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 25,
                check_digits: Fixed(50),
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Branch code", Numeric),
                    field(12, 11, "Account number", Numeric),
                    field(23, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "QA",
        name: "Qatar",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 29,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 21, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "RO",
        name: "Romania",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 16, "Branch code and account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "RU",
        name: "Russia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 33,
                check_digits: Mod97,
                fields: &[
                    field(4, 9, "Bank code", Numeric),
                    field(13, 5, "Branch code", Numeric),
                    field(18, 15, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "LC",
        name: "Saint Lucia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 32,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "Bank code", Alphabetic),
                    field(8, 24, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SM",
        name: "San Marino",
        official_use: true,
        source: RuleSource::Alias { base: "IT" },
    },
    RuleEntry {
        code: "ST",
        name: "São Tomé and Príncipe",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 25,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Branch number", Numeric),
                    field(12, 13, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SA",
        name: "Saudi Arabia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Numeric),
                    field(6, 18, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "RS",
        name: "Serbia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Fixed(35),
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 13, "Account number", Numeric),
                    field(20, 2, "Account check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SC",
        name: "Seychelles",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 31,
                check_digits: Mod97,
                fields: &[
                    field(4, 6, "Bank code", Alphanumeric),
                    field(10, 2, "Branch code", Numeric),
                    field(12, 16, "Account number", Numeric),
                    field(28, 3, "Currency code", Alphabetic),
                ],
                supplementary_checks: BANK_CODE_LETTERS_THEN_DIGITS,
            },
        },
    },
    RuleEntry {
        code: "SK",
        name: "Slovakia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Account number prefix", Numeric),
                    unnamed(12, 2, Numeric),
                    field(14, 10, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SI",
        name: "Slovenia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 19,
                check_digits: Fixed(56),
                fields: &[
                    field(4, 2, "National bank code", Numeric),
                    field(6, 3, "Branch code", Numeric),
                    field(9, 8, "Account number", Numeric),
                    field(17, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SO",
        name: "Somalia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 3, "Branch code", Numeric),
                    field(11, 12, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "ES",
        name: "Spain",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Numeric),
                    field(8, 4, "Branch code", Numeric),
                    field(12, 2, "National check digits", Numeric),
                    field(14, 10, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "OM",
        name: "Oman",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SD",
        name: "Sudan",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 18,
                check_digits: Mod97,
                fields: &[
                    field(4, 2, "National bank code", Numeric),
                    field(6, 12, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SE",
        name: "Sweden",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 16, "Account number", Numeric),
                    field(23, 1, "Check digit", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "CH",
        name: "Switzerland",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 21,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 12, "Code identifying a bank account", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "TN",
        name: "Tunisia",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Fixed(59),
                fields: &[
                    field(4, 2, "National bank code", Numeric),
                    field(6, 3, "Branch code", Numeric),
                    field(9, 13, "Account number", Numeric),
                    field(22, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "TR",
        name: "Türkiye (Turkey)",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 26,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    unnamed(9, 1, ZeroFilled),
                    field(10, 16, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "UA",
        name: "Ukraine",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 29,
                check_digits: Mod97,
                fields: &[
                    field(4, 6, "Bank code", Numeric),
                    field(10, 19, "Account number", Alphanumeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "AE",
        name: "United Arab Emirates",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 23,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 16, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "GB",
        name: "United Kingdom",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "BIC bank code", Alphabetic),
                    field(8, 6, "Bank and branch code (sort code)", Numeric),
                    field(14, 8, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "VA",
        name: "Vatican City",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 22,
                check_digits: Mod97,
                fields: &[
                    field(4, 3, "National bank code", Numeric),
                    field(7, 15, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "VG",
        name: "British Virgin Islands",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 24,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 16, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "DZ",
        name: "Algeria",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 26,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 22, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "AO",
        name: "Angola",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 25,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 21, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BJ",
        name: "Benin",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 2, Alphanumeric),
                    unnamed(6, 22, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "BF",
        name: "Burkina Faso",
        official_use: false,
        source: RuleSource::Alias { base: "BJ" },
    },
    RuleEntry {
        code: "BI",
        name: "Burundi",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 27,
                check_digits: Mod97,
                fields: &[
                    field(4, 5, "National bank code", Numeric),
                    field(9, 5, "Branch code", Numeric),
                    field(14, 11, "Account number", Numeric),
                    field(25, 2, "National check digits", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "CV",
        name: "Cabo Verde",
        official_use: false,
        source: RuleSource::Alias { base: "AO" },
    },
    RuleEntry {
        code: "CM",
        name: "Cameroon",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "CF",
        name: "Central African Republic",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "TD",
        name: "Chad",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "KM",
        name: "Comoros",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "CG",
        name: "Republic of the Congo",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "CI",
        name: "Côte d’Ivoire",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 2, Alphabetic),
                    unnamed(6, 22, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "DJ",
        name: "Djibouti",
        official_use: true,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "GQ",
        name: "Equatorial Guinea",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "GA",
        name: "Gabon",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "GW",
        name: "Guinea-Bissau",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 25,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 2, Alphanumeric),
                    unnamed(6, 19, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "HN",
        name: "Honduras",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 4, Alphabetic),
                    unnamed(8, 20, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "IR",
        name: "Iran",
        official_use: false,
        source: RuleSource::Alias { base: "DZ" },
    },
    RuleEntry {
        code: "MG",
        name: "Madagascar",
        official_use: false,
        source: RuleSource::Alias { base: "BI" },
    },
    RuleEntry {
        code: "ML",
        name: "Mali",
        official_use: false,
        source: RuleSource::Alias { base: "BJ" },
    },
    RuleEntry {
        code: "MA",
        name: "Morocco",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 24, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "MZ",
        name: "Mozambique",
        official_use: false,
        source: RuleSource::Alias { base: "AO" },
    },
    RuleEntry {
        code: "NI",
        name: "Nicaragua",
        official_use: true,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    field(4, 4, "National bank code", Alphabetic),
                    field(8, 20, "Account number", Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "NE",
        name: "Niger",
        official_use: false,
        source: RuleSource::Defined {
            layout: Layout {
                expected_length: 28,
                check_digits: Mod97,
                fields: &[
                    unnamed(4, 2, Alphabetic),
                    unnamed(6, 22, Numeric),
                ],
                supplementary_checks: &[],
            },
        },
    },
    RuleEntry {
        code: "SN",
        name: "Senegal",
        official_use: false,
        source: RuleSource::Alias { base: "NE" },
    },
    RuleEntry {
        code: "TG",
        name: "Togo",
        official_use: false,
        source: RuleSource::Alias { base: "NE" },
    },
];
