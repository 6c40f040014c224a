use crate::error::Error;
use std::fmt;

/// Largest accepted alphabet. Digit values must stay below the 0xFF marker of byte-sized tables.
pub const MAX_LENGTH: usize = 254;

/// An ordered set of distinct characters, indexed both ways.
///
/// Every character must have a code point in `0..=0xFF` so that the reverse map is a
/// plain 256-slot table; an empty slot means the character is not part of the alphabet.
#[derive(Clone)]
pub struct Alphabet {
    encode: [char; MAX_LENGTH],
    decode: [Option<u8>; 256],
    len: usize,
}

impl Alphabet {
    pub fn new(characters: &str) -> Result<Self, Error> {
        let length = characters.chars().count();
        if length > MAX_LENGTH {
            return Err(Error::AlphabetTooLong { length });
        }
        if length < 2 {
            return Err(Error::AlphabetTooShort { length });
        }

        let mut encode = ['\0'; MAX_LENGTH];
        let mut decode: [Option<u8>; 256] = [None; 256];

        for (index, character) in characters.chars().enumerate() {
            let code = character as u32;
            if code > 0xFF {
                return Err(Error::UnsupportedCharacter { character, index });
            }
            if let Some(first) = decode[code as usize] {
                return Err(Error::AmbiguousAlphabet {
                    character,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[code as usize] = Some(index as u8);
        }

        Ok(Self { encode, decode, len: length })
    }

    #[inline(always)]
    pub fn encode(&self, digit: u8) -> char {
        self.encode[digit as usize]
    }

    /// Returns the digit value of `character`, or `None` if it is not in the alphabet.
    #[inline(always)]
    pub fn decode(&self, character: char) -> Option<u8> {
        match self.decode.get(character as usize) {
            Some(&digit) => digit,
            None => None,
        }
    }

    /// The character standing for digit 0.
    pub fn leader(&self) -> char {
        self.encode[0]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn characters(&self) -> &[char] {
        &self.encode[..self.len]
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let characters: String = self.characters().iter().collect();
        f.debug_tuple("Alphabet").field(&characters).finish()
    }
}
