use super::Strategy;
use crate::base_common::Alphabet;
use std::borrow::Cow;

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
    strategy: Strategy,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet, strategy: Strategy) -> Self {
        Self { alphabet, strategy }
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encode_digits(Cow::Borrowed(input.as_ref()))
    }

    /// Same as `encode`, but lets the strategy reuse `input` as scratch space.
    pub fn encode_vec(&self, input: Vec<u8>) -> String {
        self.encode_digits(Cow::Owned(input))
    }

    fn encode_digits(&self, input: Cow<'_, [u8]>) -> String {
        let digits = self.strategy.code_digits(self.alphabet.encode_direction(), input);
        self.alphabet.to_chars(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::Encoder;
    use crate::base_common::Alphabet;
    use crate::base_n::Strategy;

    #[test]
    fn encode() {
        let alphabet = Alphabet::from_id(58).unwrap();
        for strategy in Strategy::ALL {
            let encoder = Encoder::new(&alphabet, strategy);
            assert_eq!(encoder.encode([]), "");
            assert_eq!(encoder.encode([0]), "1");
            assert_eq!(encoder.encode([0, 1]), "12");
            assert_eq!(encoder.encode([0, 0, 1]), "112");
            assert_eq!(
                encoder.encode("the quick brown fox jumps over the lazy dog"),
                "9aMVMYHHtr2a2wF61xEqKskeCwxniaf4m7FeCivEGBzLhSEwB6NEdfeySxW"
            );
            assert_eq!(encoder.encode_vec(b"a".to_vec()), "2g");
        }
    }

    #[test]
    fn encode_binary() {
        let alphabet = Alphabet::from_id(2).unwrap();
        for strategy in Strategy::ALL {
            let encoder = Encoder::new(&alphabet, strategy);
            assert_eq!(encoder.encode([0, 5]), "0101");
            assert_eq!(encoder.encode([0x80, 0x00]), "1000000000000000");
        }
    }

    #[test]
    fn input_is_untouched() {
        let alphabet = Alphabet::from_id(16).unwrap();
        let input = vec![0x12, 0x34];
        assert_eq!(Encoder::new(&alphabet, Strategy::Loop).encode(&input), "1234");
        assert_eq!(input, vec![0x12, 0x34]);
    }
}
