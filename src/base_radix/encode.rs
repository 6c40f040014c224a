use super::{scratch_len, Alphabet};
use crate::{base_common::zeroes, error::Error};

/// Radix conversion encoder for alphabets of any size.
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
    ratio: f64,
}

impl<'a> Encoder<'a> {
    /// `ratio` bounds the number of digits produced per input byte (`log(256) / log(base)`).
    pub fn new(alphabet: &'a Alphabet, ratio: f64) -> Self {
        Self { alphabet, ratio }
    }

    pub fn encode(&self, input: &[u8]) -> Result<String, Error> {
        let base = self.alphabet.len() as u32;
        let zeroes = zeroes::count_zero_bytes(input);
        let input = &input[zeroes..];

        // Little-endian digits; only the first `length` are in use.
        let mut digits = vec![0u8; scratch_len(input.len(), self.ratio)];
        let mut length = 0;
        for &value in input {
            let mut carry = value as u32;
            for digit in &mut digits[..length] {
                carry += (*digit as u32) << 8;
                *digit = (carry % base) as u8;
                carry /= base;
            }
            while carry > 0 {
                *digits.get_mut(length).ok_or(Error::CarryOverflow)? = (carry % base) as u8;
                length += 1;
                carry /= base;
            }
        }

        let mut output = String::with_capacity(zeroes + length);
        zeroes::push_leaders(&mut output, zeroes, self.alphabet);
        output.extend(digits[..length].iter().rev().map(|&digit| self.alphabet.encode(digit)));
        Ok(output)
    }
}
