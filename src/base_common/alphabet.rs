use super::Direction;
use std::{error, fmt};

/// Well-known alphabets, keyed by their base.
pub const ALPHABETS: [(usize, &str); 10] = [
    (2, "01"),
    (8, "01234567"),
    (11, "0123456789a"),
    (16, "0123456789abcdef"),
    (32, "0123456789ABCDEFGHJKMNPQRSTVWXYZ"),
    (36, "0123456789abcdefghijklmnopqrstuvwxyz"),
    (58, "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
    (62, "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    (64, "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"),
    (67, "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.!~"),
];

pub fn alphabet_string(id: usize) -> Option<&'static str> {
    ALPHABETS.iter().find(|(base, _)| *base == id).map(|(_, characters)| *characters)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidLength { length: usize },
    UnknownAlphabet { id: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' in alphabet at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => {
                write!(f, "Non-ascii character {:#04x} in alphabet at index {}", character, index)
            }
            Self::InvalidLength { length } => write!(f, "Alphabet must have at least 2 characters, got {}", length),
            Self::UnknownAlphabet { id } => write!(f, "Unknown alphabet id {}", id),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

/// Maps digit values `0..base` to printable ASCII characters and back.
///
/// Also carries the two conversion directions used with it: bytes to digits
/// (`256 -> base`) and digits to bytes (`base -> 256`).
#[derive(Debug, Clone)]
pub struct Alphabet {
    encode: Vec<u8>,
    decode: [Option<u8>; 128],
    encode_direction: Direction,
    decode_direction: Direction,
}

impl Alphabet {
    pub fn new(characters: impl AsRef<[u8]>) -> Result<Self, Error> {
        let characters = characters.as_ref();
        let mut decode: [Option<u8>; 128] = [None; 128];

        for (index, &character) in characters.iter().enumerate() {
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            decode[character as usize] = Some(index as u8);
        }

        let base = characters.len();
        if base < 2 {
            return Err(Error::InvalidLength { length: base });
        }

        Ok(Self {
            encode: characters.to_vec(),
            decode,
            encode_direction: Direction::new(256, base),
            decode_direction: Direction::new(base, 256),
        })
    }

    pub fn from_id(id: usize) -> Result<Self, Error> {
        let characters = alphabet_string(id).ok_or(Error::UnknownAlphabet { id })?;
        Self::new(characters)
    }

    pub fn base(&self) -> usize {
        self.encode.len()
    }

    pub fn characters(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.encode).unwrap_or_default()
    }

    pub fn encode(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    /// Maps every character of `input` to its digit value.
    pub fn to_digits(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        input
            .as_ref()
            .iter()
            .enumerate()
            .map(|(index, &character)| self.decode(character, index))
            .collect()
    }

    /// Renders digit values as characters. Every digit must be below `base()`.
    pub fn to_chars(&self, digits: &[u8]) -> String {
        digits.iter().map(|&digit| self.encode(digit) as char).collect()
    }

    pub fn encode_direction(&self) -> &Direction {
        &self.encode_direction
    }

    pub fn decode_direction(&self) -> &Direction {
        &self.decode_direction
    }
}
