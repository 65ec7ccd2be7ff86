use super::{alphabet, strategy};
use crate::{base_n, base_n_check};

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, base_n::decode::Error> {
    base_n::Decoder::new(alphabet(), strategy()).decode(input)
}

pub fn decode_check(input: impl AsRef<[u8]>) -> Result<Vec<u8>, base_n_check::decode::Error> {
    base_n_check::Decoder::new(alphabet(), strategy()).decode(input)
}
