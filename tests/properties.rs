use base_n::{base_n_check, Alphabet, Codec, Strategy, ALPHABETS};
use proptest::prelude::{any, prop, prop_assert, prop_assert_eq, proptest};

fn alphabet_id() -> impl proptest::strategy::Strategy<Value = usize> {
    proptest::sample::select(ALPHABETS.iter().map(|(id, _)| *id).collect::<Vec<_>>())
}

fn repacking() -> impl proptest::strategy::Strategy<Value = Strategy> {
    proptest::sample::select(Strategy::ALL.to_vec())
}

proptest! {
    #[test]
    fn round_trip(input in proptest::collection::vec(any::<u8>(), 0..96), id in alphabet_id(), strategy in repacking()) {
        let alphabet = Alphabet::from_id(id).unwrap();
        let codec = Codec::new(&alphabet, strategy);
        prop_assert_eq!(codec.decode(codec.encode(&input)), Ok(input));
    }

    #[test]
    fn cross_strategy(input in proptest::collection::vec(any::<u8>(), 0..96), id in alphabet_id()) {
        let alphabet = Alphabet::from_id(id).unwrap();
        let by_loop = Codec::new(&alphabet, Strategy::Loop);
        let by_big_int = Codec::new(&alphabet, Strategy::BigInt);
        let encoded = by_loop.encode(&input);
        prop_assert_eq!(&encoded, &by_big_int.encode(&input));
        prop_assert_eq!(by_big_int.decode(&encoded), Ok(input));
    }

    #[test]
    fn leading_zeros(zeros in 0usize..8, rest in proptest::collection::vec(1u8.., 0..16), id in alphabet_id(), strategy in repacking()) {
        let alphabet = Alphabet::from_id(id).unwrap();
        let codec = Codec::new(&alphabet, strategy);
        let mut input = vec![0u8; zeros];
        input.extend_from_slice(&rest);
        let encoded = codec.encode(&input);
        let zero = alphabet.encode(0);
        prop_assert_eq!(encoded.bytes().take_while(|&character| character == zero).count(), zeros);
        prop_assert_eq!(codec.decode(&encoded), Ok(input));
    }

    #[test]
    fn checksum_round_trip(input in proptest::collection::vec(any::<u8>(), 0..64), id in alphabet_id(), strategy in repacking()) {
        let alphabet = Alphabet::from_id(id).unwrap();
        let codec = Codec::new(&alphabet, strategy);
        prop_assert_eq!(codec.decode_check(codec.encode_check(&input)), Ok(input));
    }

    #[test]
    fn checksum_detects_tampering(
        input in proptest::collection::vec(any::<u8>(), 0..64),
        id in alphabet_id(),
        strategy in repacking(),
        position in any::<prop::sample::Index>(),
        shift in 1usize..67,
    ) {
        let alphabet = Alphabet::from_id(id).unwrap();
        let codec = Codec::new(&alphabet, strategy);
        let mut encoded = codec.encode_check(&input).into_bytes();
        let index = position.index(encoded.len());
        let digit = alphabet.decode(encoded[index], index).unwrap() as usize;
        encoded[index] = alphabet.encode(((digit + shift % (alphabet.base() - 1) + 1) % alphabet.base()) as u8);
        let result = codec.decode_check(&encoded);
        prop_assert!(
            matches!(
                result,
                Err(base_n_check::decode::Error::ChecksumMismatch { .. }) | Err(base_n_check::decode::Error::NoChecksum)
            ),
            "{:?}",
            result
        );
    }
}
