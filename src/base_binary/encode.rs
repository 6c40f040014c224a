use super::{Alphabet, PADDING};
use crate::base_common::zeroes;

/// Bit-grouping encoder for alphabets of `2^bits` characters.
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
    bits: u32,
    mask: u32,
}

impl<'a> Encoder<'a> {
    /// `mask` selects one digit (`2^bits - 1`); the accumulator itself is never trimmed.
    pub fn new(alphabet: &'a Alphabet, bits: u32, mask: u32) -> Self {
        assert!(alphabet.len() == (1 << bits));
        assert!(mask as usize == alphabet.len() - 1);
        Self { alphabet, bits, mask }
    }

    /// Encodes `input` as a big-endian number, one leader character per leading zero byte.
    ///
    /// Digits are grouped from the least significant bit, so the first emitted digit takes
    /// whatever is left over (`total_bits % bits`). Zero digits are dropped until the first
    /// non-zero one, which yields the same string as the radix conversion.
    pub fn encode(&self, input: &[u8]) -> String {
        let zeroes = zeroes::count_zero_bytes(input);
        let mut output = String::with_capacity(zeroes + (input.len() - zeroes) * 8 / self.bits as usize + 1);
        zeroes::push_leaders(&mut output, zeroes, self.alphabet);
        let input = &input[zeroes..];
        if input.is_empty() {
            return output;
        }

        let mut group = match (input.len() * 8) % self.bits as usize {
            0 => self.bits,
            remainder => remainder as u32,
        };
        let mut accumulator: u32 = 0;
        let mut bits: u32 = 0;
        let mut significant = false;
        for &value in input {
            accumulator = (accumulator << 8) | (value as u32);
            bits += 8;
            while bits >= group {
                bits -= group;
                let digit = ((accumulator >> bits) & self.mask) as u8;
                group = self.bits;
                if significant || digit != 0 {
                    output.push(self.alphabet.encode(digit));
                    significant = true;
                }
            }
        }
        output
    }

    /// Fixed-width grouping from the most significant bit, padded with `=` to a whole number of bytes.
    pub fn encode_padded(&self, input: &[u8]) -> String {
        let mut output = String::with_capacity(input.len() * 8 / self.bits as usize + 8);
        let mut accumulator: u32 = 0;
        let mut bits: u32 = 0;
        let mut count: usize = 0;
        for &value in input {
            accumulator = (accumulator << 8) | (value as u32);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                output.push(self.alphabet.encode(((accumulator >> bits) & self.mask) as u8));
                count += 1;
            }
        }
        if bits > 0 {
            output.push(self.alphabet.encode(((accumulator << (self.bits - bits)) & self.mask) as u8));
            count += 1;
        }
        while (count * self.bits as usize) % 8 != 0 {
            output.push(PADDING);
            count += 1;
        }
        output
    }
}
