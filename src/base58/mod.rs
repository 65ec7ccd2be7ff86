//! Base58 over the Bitcoin alphabet with the default strategy.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_check};
pub use encode::{encode, encode_check};

use crate::base_common::Alphabet;
use crate::base_n::Strategy;
use std::sync::OnceLock;

pub const ID: usize = 58;

pub fn alphabet() -> &'static Alphabet {
    static ALPHABET: OnceLock<Alphabet> = OnceLock::new();
    ALPHABET.get_or_init(|| match Alphabet::from_id(ID) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    })
}

fn strategy() -> Strategy {
    Strategy::default()
}
