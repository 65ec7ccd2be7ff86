use super::{compute_checksum, CHECKSUM_LEN};
use crate::base_common::Alphabet;
use crate::base_n::{self, Strategy};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    ChecksumMismatch {
        checksum: [u8; CHECKSUM_LEN],
        expected_checksum: [u8; CHECKSUM_LEN],
    },
    NoChecksum,
}

impl From<base_n::decode::Error> for Error {
    fn from(error: base_n::decode::Error) -> Self {
        match error {
            base_n::decode::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            base_n::decode::Error::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
            Error::ChecksumMismatch {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Checksum mismatch '{}' ({} expected)",
                HexSlice::new(checksum),
                HexSlice::new(expected_checksum)
            ),
            Error::NoChecksum => write!(f, "Missing checksum"),
        }
    }
}

struct HexSlice<'a> {
    buffer: &'a [u8],
}

impl<'a> HexSlice<'a> {
    fn new(buffer: &'a impl AsRef<[u8]>) -> HexSlice<'a> {
        HexSlice { buffer: buffer.as_ref() }
    }
}

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.buffer {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    decoder: base_n::Decoder<'a>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet, strategy: Strategy) -> Self {
        Self {
            decoder: base_n::Decoder::new(alphabet, strategy),
        }
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = self.decoder.decode(input)?;
        let len = verify_checksum(&output)?;
        output.truncate(len);
        Ok(output)
    }
}

/// Checks the trailing checksum of `buffer` and returns the payload length.
fn verify_checksum(buffer: &[u8]) -> Result<usize, Error> {
    let len = buffer.len().checked_sub(CHECKSUM_LEN).ok_or(Error::NoChecksum)?;
    let (payload, checksum) = buffer.split_at(len);
    let expected_checksum = compute_checksum(payload);
    if checksum != expected_checksum {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(checksum);
        return Err(Error::ChecksumMismatch {
            checksum: actual,
            expected_checksum,
        });
    }
    Ok(len)
}
