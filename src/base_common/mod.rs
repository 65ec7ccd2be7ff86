pub mod alphabet;
pub mod cache;
pub mod direction;

pub use alphabet::{alphabet_string, Alphabet, ALPHABETS};
pub use cache::AlphabetCache;
pub use direction::Direction;
