/// The Rule Registry: country code to fully materialized [`CountryRule`].
///
/// Aliases are resolved once, when the registry is built. Resolution copies
/// the base entry's [`Layout`] and overrides only the name and official-use
/// flag, so looking up an alias never touches the entry it points at.
///
/// The process-wide instance returned by [`registry`] is built lazily on
/// first use behind a [`LazyLock`], which guarantees no caller observes a
/// partially constructed table.
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use crate::rules::{CheckDigitPolicy, CountryRule, Layout, RuleEntry, RuleSource};

mod table;


static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// Returns the process-wide registry built from the compiled-in table.
pub fn registry() -> &'static Registry {
    &BUILTIN
}

// ---------------------------------------------------------------------------
// LayoutViolation
// ---------------------------------------------------------------------------

/// A structural defect in a rule set.
///
/// A well-formed registry produces none of these: every rule set's fields
/// tile `[4, expected_length)` exactly, and every alias resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutViolation {
    /// Characters between two fields (or before the first) belong to no field.
    Gap {
        /// Country code of the rule set.
        code: &'static str,
        /// First uncovered offset.
        from: usize,
        /// Offset where the next field starts.
        to: usize,
    },
    /// A field starts before the previous one ends.
    Overlap {
        /// Country code of the rule set.
        code: &'static str,
        /// Start offset of the overlapping field.
        offset: usize,
        /// End offset of the preceding field.
        previous_end: usize,
    },
    /// A field has zero length.
    EmptyField {
        /// Country code of the rule set.
        code: &'static str,
        /// Zero-based index of the field.
        index: usize,
    },
    /// The last field does not end at the expected IBAN length.
    LengthMismatch {
        /// Country code of the rule set.
        code: &'static str,
        /// End offset of the last field (4 when there are no fields).
        covered_to: usize,
        /// Declared IBAN length.
        expected_length: usize,
    },
    /// A fixed check-digit value that cannot be written with two digits.
    FixedCheckOutOfRange {
        /// Country code of the rule set.
        code: &'static str,
        /// The configured value.
        value: u8,
    },
    /// An alias whose base is missing or forms a cycle.
    DanglingAlias {
        /// Country code of the alias.
        code: &'static str,
        /// Country code it points at.
        base: &'static str,
    },
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gap { code, from, to } => {
                write!(f, "{code}: offsets {from}..{to} are not covered by any field")
            }
            Self::Overlap {
                code,
                offset,
                previous_end,
            } => write!(
                f,
                "{code}: field at offset {offset} overlaps the previous field ending at {previous_end}"
            ),
            Self::EmptyField { code, index } => {
                write!(f, "{code}: field {index} has zero length")
            }
            Self::LengthMismatch {
                code,
                covered_to,
                expected_length,
            } => write!(
                f,
                "{code}: fields end at offset {covered_to} but the IBAN length is {expected_length}"
            ),
            Self::FixedCheckOutOfRange { code, value } => {
                write!(f, "{code}: fixed check digits {value} do not fit in two digits")
            }
            Self::DanglingAlias { code, base } => {
                write!(f, "{code}: alias of {base} does not resolve to a layout")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable lookup table of materialized rule sets, keyed by country code.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rules: BTreeMap<&'static str, CountryRule>,
    dangling: Vec<(&'static str, &'static str)>,
}

impl Registry {
    /// Builds the registry from the compiled-in table.
    pub fn builtin() -> Self {
        Self::from_entries(table::ENTRIES)
    }

    /// Builds a registry from an arbitrary table.
    ///
    /// Aliases are followed transitively until an entry with its own layout
    /// is reached. Aliases that never reach one (missing base or a cycle)
    /// are left out of the registry and reported by
    /// [`Registry::layout_violations`]. When a code appears twice the later
    /// entry wins.
    pub fn from_entries(entries: &[RuleEntry]) -> Self {
        let by_code: HashMap<&str, &RuleEntry> = entries.iter().map(|e| (e.code, e)).collect();
        if by_code.len() != entries.len() {
            tracing::warn!(
                entries = entries.len(),
                distinct = by_code.len(),
                "rule table contains duplicate country codes"
            );
        }

        let mut registry = Self::default();
        for &entry in by_code.values() {
            match resolve_layout(entry, &by_code) {
                Some((layout, provider)) => {
                    let alias_of = (provider != entry.code).then_some(provider);
                    registry
                        .rules
                        .insert(entry.code, CountryRule::materialize(entry, layout, alias_of));
                }
                None => {
                    let base = match entry.source {
                        RuleSource::Alias { base } => base,
                        RuleSource::Defined { .. } => entry.code,
                    };
                    tracing::warn!(code = entry.code, base, "alias does not resolve, skipping");
                    registry.dangling.push((entry.code, base));
                }
            }
        }
        registry.dangling.sort_unstable();
        registry
    }

    /// Returns the rule set registered for `code`, if any.
    ///
    /// Codes are matched exactly; callers normalize to uppercase first.
    pub fn lookup(&self, code: &str) -> Option<&CountryRule> {
        self.rules.get(code)
    }

    /// Returns `true` if a rule set is registered for `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.rules.contains_key(code)
    }

    /// Iterates over every rule set in country-code order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRule> {
        self.rules.values()
    }

    /// Number of registered country codes.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule sets are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks every rule set against the layout invariants.
    ///
    /// Returns an empty vector for a well-formed registry.
    pub fn layout_violations(&self) -> Vec<LayoutViolation> {
        let mut violations: Vec<LayoutViolation> = self
            .dangling
            .iter()
            .map(|&(code, base)| LayoutViolation::DanglingAlias { code, base })
            .collect();
        for rule in self.rules.values() {
            check_layout(rule, &mut violations);
        }
        violations
    }
}

/// Follows `entry`'s alias chain to the entry that defines a layout.
///
/// Returns the layout together with the code of the entry that provided it.
/// The hop limit bounds the walk so a cycle terminates with `None`.
fn resolve_layout<'a>(
    entry: &'a RuleEntry,
    by_code: &HashMap<&str, &'a RuleEntry>,
) -> Option<(Layout, &'static str)> {
    let mut current = entry;
    for _ in 0..=by_code.len() {
        match current.source {
            RuleSource::Defined { layout } => return Some((layout, current.code)),
            RuleSource::Alias { base } => current = *by_code.get(base)?,
        }
    }
    None
}

fn check_layout(rule: &CountryRule, violations: &mut Vec<LayoutViolation>) {
    let code = rule.code;
    let mut position = 4;
    for (index, field) in rule.fields.iter().enumerate() {
        if field.length == 0 {
            violations.push(LayoutViolation::EmptyField { code, index });
        }
        if field.offset > position {
            violations.push(LayoutViolation::Gap {
                code,
                from: position,
                to: field.offset,
            });
        } else if field.offset < position {
            violations.push(LayoutViolation::Overlap {
                code,
                offset: field.offset,
                previous_end: position,
            });
        }
        position = field.end();
    }
    if position != rule.expected_length {
        violations.push(LayoutViolation::LengthMismatch {
            code,
            covered_to: position,
            expected_length: rule.expected_length,
        });
    }
    if let CheckDigitPolicy::Fixed(value) = rule.check_digits {
        if value > 99 {
            violations.push(LayoutViolation::FixedCheckOutOfRange { code, value });
        }
    }
}
