use super::{scratch_len, Alphabet};
use crate::{base_common::zeroes, error::Error};

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
    ratio: f64,
}

impl<'a> Decoder<'a> {
    /// `ratio` bounds the number of bytes produced per input character (`log(base) / log(256)`).
    pub fn new(alphabet: &'a Alphabet, ratio: f64) -> Self {
        Self { alphabet, ratio }
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Error> {
        let base = self.alphabet.len() as u32;
        let (zeroes, input) = zeroes::strip_leaders(input, self.alphabet);

        // Little-endian bytes; only the first `length` are in use.
        let mut bytes = vec![0u8; scratch_len(input.chars().count(), self.ratio)];
        let mut length = 0;
        for (index, character) in input.chars().enumerate() {
            let mut carry = match self.alphabet.decode(character) {
                Some(digit) => digit as u32,
                None => {
                    return Err(Error::InvalidCharacter {
                        base: base as usize,
                        character,
                        index: zeroes + index,
                    })
                }
            };
            for byte in &mut bytes[..length] {
                carry += (*byte as u32) * base;
                *byte = (carry & 0xFF) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                *bytes.get_mut(length).ok_or(Error::CarryOverflow)? = (carry & 0xFF) as u8;
                length += 1;
                carry >>= 8;
            }
        }

        let mut output = vec![0u8; zeroes];
        output.extend(bytes[..length].iter().rev());
        Ok(output)
    }
}
