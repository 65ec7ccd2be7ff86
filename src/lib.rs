//! Conversion of binary data to and from text in an arbitrary base, with an
//! optional double SHA-256 checksum.
//!
//! ```
//! use base_n::{AlphabetCache, Codec, Strategy};
//!
//! let cache = AlphabetCache::default();
//! let alphabet = cache.get_by_id(58).unwrap();
//! let codec = Codec::new(&alphabet, Strategy::BigInt);
//! assert_eq!(codec.encode([0, 1]), "12");
//! assert_eq!(codec.decode_check(codec.encode_check(b"payload")).unwrap(), b"payload");
//! ```

pub mod base58;
pub mod base_common;
pub mod base_n;
pub mod base_n_check;
pub mod chronometer;
pub mod codec;
pub mod configuration;
pub mod error;
pub mod logger;

pub use self::{
    base_common::{Alphabet, AlphabetCache, Direction, ALPHABETS},
    base_n::Strategy,
    chronometer::Chronometer,
    codec::Codec,
    configuration::Configuration,
    error::Error,
    logger::Logger,
};
