use super::{alphabet, strategy};
use crate::{base_n, base_n_check};

pub fn encode(input: impl AsRef<[u8]>) -> String {
    base_n::Encoder::new(alphabet(), strategy()).encode(input)
}

pub fn encode_check(input: impl AsRef<[u8]>) -> String {
    base_n_check::Encoder::new(alphabet(), strategy()).encode(input)
}
