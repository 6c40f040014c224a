use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    AlphabetTooShort { length: usize },
    AlphabetTooLong { length: usize },
    AmbiguousAlphabet { character: char, first: usize, second: usize },
    UnsupportedCharacter { character: char, index: usize },
    InvalidInputType { index: usize },
    InvalidCharacter { base: usize, character: char, index: usize },
    CarryOverflow,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetTooShort { length } => write!(f, "Alphabet too short ({} characters, at least 2 expected)", length),
            Self::AlphabetTooLong { length } => write!(f, "Alphabet too long ({} characters, at most 254 expected)", length),
            Self::AmbiguousAlphabet { character, first, second } => {
                write!(f, "'{}' is ambiguous (indexes {} and {})", character, first, second)
            }
            Self::UnsupportedCharacter { character, index } => {
                write!(f, "Unsupported character {:?} ({:#x}) at index {}", character, *character as u32, index)
            }
            Self::InvalidInputType { index } => write!(f, "Expected byte value at index {}", index),
            Self::InvalidCharacter { base, character, index } => {
                write!(f, "Non-base{} character {:?} at index {}", base, character, index)
            }
            Self::CarryOverflow => write!(f, "Non-zero carry"),
        }
    }
}
