use super::Strategy;
use crate::base_common::{alphabet, Alphabet};
use std::borrow::Cow;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
    strategy: Strategy,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet, strategy: Strategy) -> Self {
        Self { alphabet, strategy }
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let digits = self.alphabet.to_digits(input)?;
        Ok(self.strategy.code_digits(self.alphabet.decode_direction(), Cow::Owned(digits)))
    }
}
