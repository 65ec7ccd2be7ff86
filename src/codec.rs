use crate::base_common::Alphabet;
use crate::base_n::{self, Strategy};
use crate::base_n_check;

/// An alphabet paired with a repacking strategy.
///
/// Output does not depend on the strategy, so text encoded by one codec decodes
/// with any other codec over the same alphabet.
#[derive(Copy, Clone, Debug)]
pub struct Codec<'a> {
    alphabet: &'a Alphabet,
    strategy: Strategy,
}

impl<'a> Codec<'a> {
    pub const fn new(alphabet: &'a Alphabet, strategy: Strategy) -> Self {
        Self { alphabet, strategy }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        base_n::Encoder::new(self.alphabet, self.strategy).encode(input)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, base_n::decode::Error> {
        base_n::Decoder::new(self.alphabet, self.strategy).decode(input)
    }

    pub fn encode_check(&self, input: impl AsRef<[u8]>) -> String {
        base_n_check::Encoder::new(self.alphabet, self.strategy).encode(input)
    }

    pub fn decode_check(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, base_n_check::decode::Error> {
        base_n_check::Decoder::new(self.alphabet, self.strategy).decode(input)
    }
}
