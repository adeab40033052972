//! ISO 7064 MOD 97-10 arithmetic for IBAN check digits.
//!
//! The IBAN is rearranged so the country code and check digits move to the
//! end, every letter is expanded to two decimal digits (`A` = 10 … `Z` =
//! 35), and the resulting numeral is reduced modulo 97. A correct IBAN
//! leaves remainder 1.
//!
//! The numeral can be longer than any native integer, so it is reduced in
//! chunks: the running remainder (at most two digits) is prefixed to the
//! next seven digits, giving at most nine digits per step.

/// Digits consumed per reduction step. With a two-digit carried remainder
/// each step works on a nine-digit value.
const CHUNK_DIGITS: usize = 7;

/// Computes the MOD 97-10 remainder of `iban` after rearrangement.
///
/// Returns `None` if `iban` contains a character outside `A`–`Z` and
/// `0`–`9`.
///
/// # Examples
///
/// ```
/// use ibancheck_core::checksum::mod97_remainder;
///
/// assert_eq!(mod97_remainder("GB82WEST12345698765432"), Some(1));
/// assert_eq!(mod97_remainder("gb82west12345698765432"), None);
/// ```
pub fn mod97_remainder(iban: &str) -> Option<u32> {
    let numeral = rotated_numeral(iban)?;
    Some(reduce(&numeral))
}

/// Returns `true` if `iban` satisfies the MOD 97-10 relation.
pub fn is_valid_mod97(iban: &str) -> bool {
    mod97_remainder(iban) == Some(1)
}

/// Computes the two check digits for `country` and `bban`.
///
/// The result is the value that makes `country ‖ digits ‖ bban` pass
/// [`is_valid_mod97`]. Returns `None` if either part contains a character
/// outside `A`–`Z` and `0`–`9`.
///
/// # Examples
///
/// ```
/// use ibancheck_core::checksum::compute_check_digits;
///
/// assert_eq!(compute_check_digits("DE", "370400440532013000").as_deref(), Some("89"));
/// ```
pub fn compute_check_digits(country: &str, bban: &str) -> Option<String> {
    let remainder = mod97_remainder(&format!("{country}00{bban}"))?;
    Some(format!("{:02}", 98 - remainder))
}

/// Moves the first four characters to the end and expands letters to their
/// two-digit values.
fn rotated_numeral(iban: &str) -> Option<String> {
    let head = iban.chars().take(4);
    let tail = iban.chars().skip(4);
    let mut numeral = String::with_capacity(iban.len() * 2);
    for c in tail.chain(head) {
        match c {
            '0'..='9' => numeral.push(c),
            'A'..='Z' => {
                let value = u32::from(c) - u32::from('A') + 10;
                numeral.push_str(&value.to_string());
            }
            _ => return None,
        }
    }
    Some(numeral)
}

/// Reduces a string of ASCII digits modulo 97, chunk by chunk.
fn reduce(numeral: &str) -> u32 {
    let remainder = numeral
        .as_bytes()
        .chunks(CHUNK_DIGITS)
        .fold(0u64, |remainder, chunk| {
            let (value, scale) = chunk.iter().fold((0u64, 1u64), |(value, scale), digit| {
                (value * 10 + u64::from(digit - b'0'), scale * 10)
            });
            (remainder * scale + value) % 97
        });
    // Always below 97.
    u32::try_from(remainder).unwrap_or(0)
}
