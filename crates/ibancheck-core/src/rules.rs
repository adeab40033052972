/// Structural rule types for country-specific IBAN layouts.
///
/// A [`RuleEntry`] is one row of the compiled-in table: either a full
/// [`Layout`] or an alias onto another country's layout. The registry
/// materializes every entry into a [`CountryRule`], which is what the
/// validation engine consumes.
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CharClass
// ---------------------------------------------------------------------------

/// The set of characters permitted inside one BBAN field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Digits `0`–`9`.
    Numeric,
    /// Uppercase letters `A`–`Z`.
    Alphabetic,
    /// Uppercase letters and digits.
    Alphanumeric,
    /// Only the digit `0`.
    ZeroFilled,
}

impl CharClass {
    /// Returns `true` if `text` is non-empty and every character belongs to
    /// this class.
    pub fn matches(self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self {
            Self::Numeric => text.chars().all(|c| c.is_ascii_digit()),
            Self::Alphabetic => text.chars().all(|c| c.is_ascii_uppercase()),
            Self::Alphanumeric => text
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            Self::ZeroFilled => text.chars().all(|c| c == '0'),
        }
    }

    /// Short notation used in layout listings (`n`, `a`, `c`, `0`).
    pub fn symbol(self) -> char {
        match self {
            Self::Numeric => 'n',
            Self::Alphabetic => 'a',
            Self::Alphanumeric => 'c',
            Self::ZeroFilled => '0',
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => f.write_str("numeric"),
            Self::Alphabetic => f.write_str("alphabetic"),
            Self::Alphanumeric => f.write_str("alphanumeric"),
            Self::ZeroFilled => f.write_str("zero-filled"),
        }
    }
}

// ---------------------------------------------------------------------------
// CheckDigitPolicy
// ---------------------------------------------------------------------------

/// How the two IBAN check digits (offsets 2–3) are verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CheckDigitPolicy {
    /// ISO 7064 MOD 97-10 over the rearranged IBAN must leave remainder 1.
    Mod97,
    /// The check digits must literally equal this value, zero-padded to two
    /// digits. Used by countries whose check digits are not mod-97 based.
    Fixed(u8),
    /// No check-digit verification beyond the digit-format test.
    Unchecked,
}

impl CheckDigitPolicy {
    /// The two-digit string a [`CheckDigitPolicy::Fixed`] policy expects.
    pub fn fixed_digits(self) -> Option<String> {
        match self {
            Self::Fixed(n) => Some(format!("{n:02}")),
            Self::Mod97 | Self::Unchecked => None,
        }
    }
}

impl fmt::Display for CheckDigitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mod97 => f.write_str("mod97"),
            Self::Fixed(n) => write!(f, "fixed {n:02}"),
            Self::Unchecked => f.write_str("unchecked"),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldSpec
// ---------------------------------------------------------------------------

/// One labeled sub-range of the BBAN.
///
/// `offset` is measured from the start of the full IBAN, so every field
/// starts at offset 4 or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Zero-based start position within the IBAN.
    pub offset: usize,
    /// Number of characters in the field.
    pub length: usize,
    /// Published name of the field; `None` when the published structure does
    /// not name it.
    pub label: Option<&'static str>,
    /// Characters permitted in the field.
    pub class: CharClass,
}

impl FieldSpec {
    /// Exclusive end position of the field within the IBAN.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Shorthand constructor for a named field.
pub(crate) const fn field(
    offset: usize,
    length: usize,
    label: &'static str,
    class: CharClass,
) -> FieldSpec {
    FieldSpec {
        offset,
        length,
        label: Some(label),
        class,
    }
}

/// Shorthand constructor for a field the published structure leaves unnamed.
pub(crate) const fn unnamed(offset: usize, length: usize, class: CharClass) -> FieldSpec {
    FieldSpec {
        offset,
        length,
        label: None,
        class,
    }
}

// ---------------------------------------------------------------------------
// SupplementaryCheck
// ---------------------------------------------------------------------------

/// A predicate over the raw BBAN for rules a per-field character class
/// cannot express.
#[derive(Clone, Copy)]
pub struct SupplementaryCheck {
    /// Stable identifier, shown in layout listings.
    pub name: &'static str,
    /// Returns `true` when the BBAN passes.
    pub predicate: fn(&str) -> bool,
}

impl SupplementaryCheck {
    /// Runs the predicate against `bban`.
    pub fn passes(&self, bban: &str) -> bool {
        (self.predicate)(bban)
    }
}

impl fmt::Debug for SupplementaryCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplementaryCheck")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SupplementaryCheck {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SupplementaryCheck {}

impl Serialize for SupplementaryCheck {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

/// The structural part of a rule set, shared verbatim between a country and
/// every alias that points at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Total IBAN length, including country code and check digits.
    pub expected_length: usize,
    /// How the check digits are verified.
    pub check_digits: CheckDigitPolicy,
    /// Ordered BBAN fields.
    pub fields: &'static [FieldSpec],
    /// Extra predicates over the raw BBAN, run after the field checks.
    pub supplementary_checks: &'static [SupplementaryCheck],
}

/// Where an entry's structural rules come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    /// The entry defines its own layout.
    Defined {
        /// The entry's structural rules.
        layout: Layout,
    },
    /// The entry reuses another country's layout.
    Alias {
        /// Country code of the entry providing the layout.
        base: &'static str,
    },
}

/// One row of the rule table, before alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// Display name of the country or territory.
    pub name: &'static str,
    /// `false` when the territory uses the IBAN format without being an
    /// official adopter.
    pub official_use: bool,
    /// Layout or alias.
    pub source: RuleSource,
}

// ---------------------------------------------------------------------------
// CountryRule
// ---------------------------------------------------------------------------

/// A fully materialized rule set: aliases resolved, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRule {
    /// ISO 3166-1 alpha-2 code this rule set is registered under.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Whether the territory is an official IBAN adopter.
    pub official_use: bool,
    /// Total IBAN length.
    pub expected_length: usize,
    /// Check-digit policy.
    pub check_digits: CheckDigitPolicy,
    /// Ordered BBAN fields.
    pub fields: &'static [FieldSpec],
    /// Extra BBAN predicates.
    pub supplementary_checks: &'static [SupplementaryCheck],
    /// The country whose layout this rule set reuses, if it is an alias.
    pub alias_of: Option<&'static str>,
}

impl CountryRule {
    pub(crate) fn materialize(
        entry: &RuleEntry,
        layout: Layout,
        alias_of: Option<&'static str>,
    ) -> Self {
        Self {
            code: entry.code,
            name: entry.name,
            official_use: entry.official_use,
            expected_length: layout.expected_length,
            check_digits: layout.check_digits,
            fields: layout.fields,
            supplementary_checks: layout.supplementary_checks,
            alias_of,
        }
    }

    /// Length of the BBAN portion (everything after the check digits).
    pub fn bban_length(&self) -> usize {
        self.expected_length.saturating_sub(4)
    }
}
