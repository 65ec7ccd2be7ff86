use super::compute_checksum;
use crate::base_common::Alphabet;
use crate::base_n::{self, Strategy};

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    encoder: base_n::Encoder<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet, strategy: Strategy) -> Self {
        Self {
            encoder: base_n::Encoder::new(alphabet, strategy),
        }
    }

    fn extend_input(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let mut input = input.as_ref().to_vec();
        let checksum = compute_checksum(&input);
        input.extend_from_slice(checksum.as_ref());
        input
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode_vec(self.extend_input(input))
    }
}
