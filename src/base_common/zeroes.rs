//! Leading zero bytes map one-to-one onto leading leader characters in both codecs.

use super::Alphabet;

pub fn count_zero_bytes(input: &[u8]) -> usize {
    input.iter().take_while(|&&value| value == 0).count()
}

/// Counts leading leader characters; returns the count and the remaining input.
pub fn strip_leaders<'a>(input: &'a str, alphabet: &Alphabet) -> (usize, &'a str) {
    let leader = alphabet.leader();
    let rest = input.trim_start_matches(leader);
    let zeroes = input[..input.len() - rest.len()].chars().count();
    (zeroes, rest)
}

pub fn push_leaders(output: &mut String, zeroes: usize, alphabet: &Alphabet) {
    output.extend(std::iter::repeat(alphabet.leader()).take(zeroes));
}

/// Builds the final byte buffer: `zeroes` zero bytes followed by `digits` without its own leading zeroes.
pub fn prepend_zero_bytes(zeroes: usize, digits: &[u8]) -> Vec<u8> {
    let digits = &digits[count_zero_bytes(digits)..];
    let mut output = vec![0u8; zeroes + digits.len()];
    output[zeroes..].copy_from_slice(digits);
    output
}
