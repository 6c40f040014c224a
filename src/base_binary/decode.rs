use super::{Alphabet, PADDING};
use crate::{base_common::zeroes, error::Error};

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
    bits: u32,
}

impl<'a> Decoder<'a> {
    pub fn new(alphabet: &'a Alphabet, bits: u32) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self { alphabet, bits }
    }

    fn digit(&self, character: char, index: usize) -> Result<u32, Error> {
        match self.alphabet.decode(character) {
            Some(digit) => Ok(digit as u32),
            None => Err(Error::InvalidCharacter {
                base: self.alphabet.len(),
                character,
                index,
            }),
        }
    }

    /// Inverse of [`Encoder::encode`](super::Encoder::encode).
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Error> {
        let (zeroes, input) = zeroes::strip_leaders(input, self.alphabet);
        let total_bits = input.chars().count() * self.bits as usize;
        let mut output = Vec::with_capacity((total_bits + 7) / 8);

        // Start with enough implicit zero bits for the digits to end on a byte boundary.
        let mut bits = ((8 - total_bits % 8) % 8) as u32;
        let mut accumulator: u32 = 0;
        for (index, character) in input.chars().enumerate() {
            accumulator = (accumulator << self.bits) | self.digit(character, zeroes + index)?;
            bits += self.bits;
            if bits >= 8 {
                bits -= 8;
                output.push((accumulator >> bits) as u8);
                accumulator &= (1 << bits) - 1;
            }
        }
        Ok(zeroes::prepend_zero_bytes(zeroes, &output))
    }

    /// Inverse of [`Encoder::encode_padded`](super::Encoder::encode_padded).
    ///
    /// Trailing `=` characters are dropped, and so are bits left over after the last full byte.
    pub fn decode_padded(&self, input: &str) -> Result<Vec<u8>, Error> {
        let input = input.trim_end_matches(PADDING);
        let mut output = Vec::with_capacity(input.len() * self.bits as usize / 8);
        let mut accumulator: u32 = 0;
        let mut bits: u32 = 0;
        for (index, character) in input.chars().enumerate() {
            accumulator = (accumulator << self.bits) | self.digit(character, index)?;
            bits += self.bits;
            if bits >= 8 {
                bits -= 8;
                output.push((accumulator >> bits) as u8);
                accumulator &= (1 << bits) - 1;
            }
        }
        Ok(output)
    }
}
