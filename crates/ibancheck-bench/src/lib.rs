//! IBAN corpus generator and benchmark utilities for ibancheck.
//!
//! This crate provides deterministic generation of structurally valid IBANs
//! for benchmarking and property-based testing of `ibancheck-core`.

use ibancheck_core::{CharClass, CheckDigitPolicy, CountryRule, compute_check_digits, registry};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Upper bound on redraws while searching for a BBAN that passes a
/// country's supplementary checks.
const MAX_ATTEMPTS: usize = 10_000;

/// Generates a valid IBAN for `rule`, or `None` when no BBAN satisfying its
/// supplementary checks turned up within [`MAX_ATTEMPTS`] draws.
///
/// Each field is filled from its character class; the check digits are the
/// fixed value, the mod-97 digits, or two random digits for unchecked rules.
pub fn generate_for(rule: &CountryRule, rng: &mut StdRng) -> Option<String> {
    for _ in 0..MAX_ATTEMPTS {
        let bban = random_bban(rule, rng);
        if !rule.supplementary_checks.iter().all(|c| c.passes(&bban)) {
            continue;
        }
        let check = match rule.check_digits {
            CheckDigitPolicy::Mod97 => compute_check_digits(rule.code, &bban)?,
            CheckDigitPolicy::Fixed(n) => format!("{n:02}"),
            CheckDigitPolicy::Unchecked => {
                format!("{:02}", rng.gen_range(0..100u8))
            }
        };
        return Some(format!("{}{check}{bban}", rule.code));
    }
    None
}

/// Generates `count` valid IBANs drawn from every registered country.
///
/// The same `seed` always yields the same list.
pub fn generate_ibans(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rules: Vec<&CountryRule> = registry().iter().collect();
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let Some(rule) = rules.choose(&mut rng) else {
            break;
        };
        if let Some(iban) = generate_for(rule, &mut rng) {
            out.push(iban);
        }
    }
    out
}

/// Returns one generated IBAN per registered country, in registry order.
pub fn one_per_country(seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    registry()
        .iter()
        .filter_map(|rule| generate_for(rule, &mut rng))
        .collect()
}

/// Fills a BBAN of the rule's length, field by field.
fn random_bban(rule: &CountryRule, rng: &mut StdRng) -> String {
    let mut chars = vec!['0'; rule.bban_length()];
    for field in rule.fields {
        for i in 0..field.length {
            let Some(slot) = (field.offset + i)
                .checked_sub(4)
                .and_then(|idx| chars.get_mut(idx))
            else {
                continue;
            };
            *slot = random_char(field.class, rng);
        }
    }
    chars.into_iter().collect()
}

fn random_char(class: CharClass, rng: &mut StdRng) -> char {
    let alphabet = match class {
        CharClass::Numeric => DIGITS,
        CharClass::Alphabetic => LETTERS,
        CharClass::Alphanumeric => ALPHANUM,
        CharClass::ZeroFilled => return '0',
    };
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}
