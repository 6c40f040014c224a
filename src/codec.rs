use crate::{base_binary, base_common::Alphabet, base_radix, error::Error};
use serde::Serialize;
use std::convert::TryInto;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Fixed-width groups padded with `=`, as in RFC 4648. Only applies to power-of-two alphabets.
    pub rfc4648: bool,
}

/// Algorithm selected once, when the codec is built.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mode {
    Bitwise { bits: u32, mask: u32 },
    Padded { bits: u32, mask: u32 },
    Generic { encode_ratio: f64, decode_ratio: f64 },
}

impl Mode {
    fn select(base: usize, options: Options) -> Self {
        if base & (base - 1) == 0 {
            let bits = base.trailing_zeros();
            let mask = (1 << bits) - 1;
            if options.rfc4648 {
                Mode::Padded { bits, mask }
            } else {
                Mode::Bitwise { bits, mask }
            }
        } else {
            Mode::Generic {
                encode_ratio: base_radix::ratio(256, base),
                decode_ratio: base_radix::ratio(base, 256),
            }
        }
    }
}

/// Converts bytes to strings over an arbitrary alphabet and back.
///
/// The codec is immutable once built, so one instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct Codec {
    alphabet: Alphabet,
    mode: Mode,
}

impl Codec {
    pub fn new(alphabet: &str) -> Result<Self, Error> {
        Self::with_options(alphabet, Options::default())
    }

    pub fn with_options(alphabet: &str, options: Options) -> Result<Self, Error> {
        let alphabet = Alphabet::new(alphabet)?;
        let mode = Mode::select(alphabet.len(), options);
        if let (Mode::Padded { .. }, Some(index)) = (mode, alphabet.decode(base_binary::PADDING)) {
            return Err(Error::AmbiguousAlphabet {
                character: base_binary::PADDING,
                first: index as usize,
                second: alphabet.len(),
            });
        }
        Ok(Self { alphabet, mode })
    }

    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    pub fn leader(&self) -> char {
        self.alphabet.leader()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes `input`. Empty input gives an empty string.
    ///
    /// Fails only with [`Error::CarryOverflow`], which would mean the generic scratch buffer was undersized.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let input = input.as_ref();
        match self.mode {
            Mode::Bitwise { bits, mask } => Ok(base_binary::Encoder::new(&self.alphabet, bits, mask).encode(input)),
            Mode::Padded { bits, mask } => Ok(base_binary::Encoder::new(&self.alphabet, bits, mask).encode_padded(input)),
            Mode::Generic { encode_ratio, .. } => base_radix::Encoder::new(&self.alphabet, encode_ratio).encode(input),
        }
    }

    /// Encodes a plain array of numbers, each of which must fit in a byte.
    pub fn encode_values<T>(&self, values: &[T]) -> Result<String, Error>
    where
        T: TryInto<u8> + Copy,
    {
        let input = values
            .iter()
            .enumerate()
            .map(|(index, &value)| value.try_into().map_err(|_| Error::InvalidInputType { index }))
            .collect::<Result<Vec<u8>, Error>>()?;
        self.encode(input)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        match self.mode {
            Mode::Bitwise { bits, .. } => base_binary::Decoder::new(&self.alphabet, bits).decode(input),
            Mode::Padded { bits, .. } => base_binary::Decoder::new(&self.alphabet, bits).decode_padded(input),
            Mode::Generic { decode_ratio, .. } => base_radix::Decoder::new(&self.alphabet, decode_ratio).decode(input),
        }
    }

    /// Like [`decode`](Self::decode), but a character outside the alphabet yields `Ok(None)`.
    pub fn decode_unsafe(&self, input: impl AsRef<str>) -> Result<Option<Vec<u8>>, Error> {
        match self.decode(input) {
            Ok(output) => Ok(Some(output)),
            Err(Error::InvalidCharacter { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Codec, Mode, Options};
    use crate::{error::Error, presets};
    use proptest::prelude::*;

    const RFC4648: Options = Options { rfc4648: true };

    #[test]
    fn mode() {
        assert_eq!(Codec::new(presets::BASE16).unwrap().mode(), Mode::Bitwise { bits: 4, mask: 15 });
        assert_eq!(Codec::new(presets::BASE2).unwrap().mode(), Mode::Bitwise { bits: 1, mask: 1 });
        assert_eq!(
            Codec::with_options(presets::BASE32, RFC4648).unwrap().mode(),
            Mode::Padded { bits: 5, mask: 31 }
        );
        assert!(matches!(Codec::new(presets::BASE58).unwrap().mode(), Mode::Generic { .. }));
        assert!(matches!(Codec::with_options(presets::BASE58, RFC4648).unwrap().mode(), Mode::Generic { .. }));
    }

    #[test]
    fn construction() {
        assert_eq!(
            Codec::new("aa").unwrap_err(),
            Error::AmbiguousAlphabet {
                character: 'a',
                first: 0,
                second: 1
            }
        );
        let characters: String = (0u8..=0xFE).map(char::from).collect();
        assert_eq!(Codec::new(&characters).unwrap_err(), Error::AlphabetTooLong { length: 255 });

        // The pad character cannot double as a digit.
        assert_eq!(
            Codec::with_options("0123456789ABCDE=", RFC4648).unwrap_err(),
            Error::AmbiguousAlphabet {
                character: '=',
                first: 15,
                second: 16
            }
        );
        assert!(Codec::new("0123456789ABCDE=").is_ok());
    }

    #[test]
    fn empty() {
        for characters in [presets::BASE2, presets::BASE16, presets::BASE36, presets::BASE58, presets::BASE64] {
            for options in [Options::default(), RFC4648] {
                let codec = Codec::with_options(characters, options).unwrap();
                assert_eq!(codec.encode(b""), Ok(String::new()));
                assert_eq!(codec.decode(""), Ok(vec![]));
            }
        }
    }

    #[test]
    fn base16() {
        let codec = Codec::new(presets::BASE16).unwrap();
        assert_eq!(codec.encode([0x00, 0xff]), Ok("0FF".to_string()));
        assert_eq!(codec.decode("0FF"), Ok(vec![0x00, 0xff]));

        let codec = Codec::with_options(presets::BASE16, RFC4648).unwrap();
        assert_eq!(codec.encode([0x00, 0xff]), Ok("00FF".to_string()));
        assert_eq!(codec.decode("00FF"), Ok(vec![0x00, 0xff]));
    }

    #[test]
    fn base58_leaders() {
        let codec = Codec::new(presets::BASE58).unwrap();
        assert_eq!(codec.encode([0x00, 0x00, 0x01]), Ok("112".to_string()));
        assert_eq!(codec.decode("112"), Ok(vec![0x00, 0x00, 0x01]));
    }

    #[test]
    fn base32_padding() {
        let codec = Codec::with_options(presets::BASE32, RFC4648).unwrap();
        for length in 0..12 {
            let encoded = codec.encode(vec![0xa5u8; length]).unwrap();
            assert_eq!((encoded.len() * 5) % 8, 0);
            assert_eq!(codec.decode(&encoded), Ok(vec![0xa5; length]));
        }
        assert_eq!(codec.encode(b"hi"), Ok("NBUQ====".to_string()));
    }

    #[test]
    fn text() {
        for characters in [presets::BASE2, presets::BASE10, presets::BASE32_LOWER, presets::BASE58, presets::BASE62] {
            let codec = Codec::new(characters).unwrap();
            let encoded = codec.encode("hi".as_bytes()).unwrap();
            let decoded = codec.decode(&encoded).unwrap();
            assert_eq!(String::from_utf8(decoded), Ok("hi".to_string()));
        }
        assert_eq!(Codec::new(presets::BASE32_LOWER).unwrap().encode("hi"), Ok("2dj".to_string()));
    }

    #[test]
    fn decode_unsafe() {
        let codec = Codec::new(presets::BASE58).unwrap();
        assert_eq!(codec.decode_unsafe("2g"), Ok(Some(b"a".to_vec())));
        assert_eq!(codec.decode_unsafe("2g0"), Ok(None));
        assert_eq!(
            codec.decode("2g0"),
            Err(Error::InvalidCharacter {
                base: 58,
                character: '0',
                index: 2
            })
        );
        assert_eq!(codec.decode("2g0").unwrap_err().to_string(), "Non-base58 character '0' at index 2");

        let codec = Codec::with_options(presets::BASE64, RFC4648).unwrap();
        assert_eq!(codec.decode_unsafe("Zm9v"), Ok(Some(b"foo".to_vec())));
        assert_eq!(codec.decode_unsafe("Zm9v!"), Ok(None));
        assert_eq!(codec.decode_unsafe("Z=m9v"), Ok(None));
    }

    #[test]
    fn encode_values() {
        let codec = Codec::new(presets::BASE58).unwrap();
        assert_eq!(codec.encode_values(&[0u32, 0, 1]), Ok("112".to_string()));
        assert_eq!(codec.encode_values(&[97i64]), Ok("2g".to_string()));
        assert_eq!(codec.encode_values(&[1u16, 256]), Err(Error::InvalidInputType { index: 1 }));
        assert_eq!(codec.encode_values(&[-1i32]), Err(Error::InvalidInputType { index: 0 }));
    }

    fn power_of_two_alphabet() -> impl Strategy<Value = String> {
        // 2^1 through 2^7 characters from the Latin-1 range.
        (1u32..=7).prop_map(|bits| (0u8..=0xFF).rev().take(1 << bits).map(char::from).collect())
    }

    fn any_alphabet() -> impl Strategy<Value = String> {
        (2usize..=254).prop_map(|length| {
            (0x21u8..=0xFF)
                .filter(|&code| code != b'=')
                .chain(0u8..0x21)
                .take(length)
                .map(char::from)
                .collect()
        })
    }

    fn leading_zeroes() -> impl Strategy<Value = Vec<u8>> {
        (0usize..4, prop::collection::vec(any::<u8>(), 0..48)).prop_map(|(zeroes, tail)| {
            let mut input = vec![0u8; zeroes];
            input.extend(tail);
            input
        })
    }

    proptest! {
        #[test]
        fn round_trip(characters in any_alphabet(), rfc4648 in any::<bool>(), input in leading_zeroes()) {
            let codec = Codec::with_options(&characters, Options { rfc4648 }).unwrap();
            let encoded = codec.encode(&input).unwrap();
            prop_assert_eq!(codec.decode(&encoded), Ok(input));
        }

        #[test]
        fn bitwise_matches_generic(characters in power_of_two_alphabet(), input in leading_zeroes()) {
            let codec = Codec::new(&characters).unwrap();
            let alphabet = codec.alphabet();
            let base = alphabet.len();
            let generic = crate::base_radix::Encoder::new(alphabet, crate::base_radix::ratio(256, base));
            let encoded = codec.encode(&input).unwrap();
            prop_assert_eq!(&encoded, &generic.encode(&input).unwrap());

            let generic = crate::base_radix::Decoder::new(alphabet, crate::base_radix::ratio(base, 256));
            prop_assert_eq!(codec.decode(&encoded), generic.decode(&encoded));
        }

        #[test]
        fn leaders(characters in any_alphabet(), zeroes in 0usize..6, first in 1u8..=255, tail in prop::collection::vec(any::<u8>(), 0..16)) {
            let codec = Codec::new(&characters).unwrap();
            let mut input = vec![0u8; zeroes];
            input.push(first);
            input.extend(tail);
            let encoded = codec.encode(&input).unwrap();
            let leader = codec.leader();
            prop_assert_eq!(encoded.chars().take_while(|&character| character == leader).count(), zeroes);
        }

        #[test]
        fn invalid_character(input in leading_zeroes()) {
            let codec = Codec::new(presets::BASE58).unwrap();
            let mut encoded = codec.encode(&input).unwrap();
            encoded.push('0');
            prop_assert_eq!(codec.decode_unsafe(&encoded), Ok(None));
            let is_invalid = matches!(codec.decode(&encoded), Err(Error::InvalidCharacter { character: '0', .. }));
            prop_assert!(is_invalid);
        }
    }
}
