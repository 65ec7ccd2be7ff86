use crate::base_common::Direction;
use crate::Error;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use std::{borrow::Cow, fmt, str::FromStr};

/// How digits are repacked from one base into another.
///
/// Both variants produce identical output. `Loop` divides the input digits in
/// place and therefore needs to own them; `BigInt` only reads them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    Loop,
    #[default]
    BigInt,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Loop, Strategy::BigInt];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loop => "Loop",
            Self::BigInt => "BigInt",
        }
    }

    /// Writes the `to_base` digits of `digits[leading_zeros..]` right-aligned into
    /// `output` and returns the index of the first nonzero digit written
    /// (`output.len()` if none were).
    ///
    /// A borrowed `digits` is cloned for `Loop`; an owned one is consumed.
    pub fn repack(&self, direction: &Direction, digits: Cow<'_, [u8]>, output: &mut [u8], leading_zeros: usize) -> usize {
        match self {
            Self::Loop => repack_with_loop(direction, digits.into_owned(), output, leading_zeros),
            Self::BigInt => repack_with_big_int(direction, &digits, output, leading_zeros),
        }
    }

    /// Converts a full digit sequence, keeping exactly as many leading zeros as
    /// the input had.
    pub fn code_digits(&self, direction: &Direction, digits: Cow<'_, [u8]>) -> Vec<u8> {
        if digits.is_empty() {
            return Vec::new();
        }
        let leading_zeros = count_leading_zeros(&digits);
        let size = direction.approximate_size(digits.len() - leading_zeros);
        let mut output = vec![0u8; leading_zeros + size];
        let first_non_zero = self.repack(direction, digits, &mut output, leading_zeros);
        output.drain(..first_non_zero - leading_zeros);
        output
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::new(format!("Unknown strategy {}", value)))
    }
}

pub fn count_leading_zeros(digits: &[u8]) -> usize {
    digits.iter().take_while(|&&digit| digit == 0).count()
}

/// Peels one output digit per long division pass. `digits` ends up as all zeros.
pub fn repack_with_loop(direction: &Direction, mut digits: Vec<u8>, output: &mut [u8], leading_zeros: usize) -> usize {
    let mut start_at = leading_zeros;
    let mut index = output.len();
    let mut first_non_zero = index;
    while start_at < digits.len() && leading_zeros < index {
        let remainder = direction.divmod(&mut digits, start_at);
        if digits[start_at] == 0 {
            start_at += 1;
        }
        index -= 1;
        output[index] = remainder;
        if remainder != 0 {
            first_non_zero = index;
        }
    }
    first_non_zero
}

pub fn repack_with_big_int(direction: &Direction, digits: &[u8], output: &mut [u8], leading_zeros: usize) -> usize {
    let from_base = BigUint::from(direction.from_base());
    let to_base = BigUint::from(direction.to_base());

    let mut accumulator = BigUint::zero();
    for &digit in &digits[leading_zeros..] {
        accumulator = accumulator * &from_base + digit;
    }

    let mut index = output.len();
    let mut first_non_zero = index;
    while !accumulator.is_zero() {
        let (quotient, remainder) = accumulator.div_rem(&to_base);
        // A zero remainder has no limbs.
        let remainder = remainder.to_u32_digits().first().map_or(0, |&limb| limb as u8);
        index -= 1;
        output[index] = remainder;
        if remainder != 0 {
            first_non_zero = index;
        }
        accumulator = quotient;
    }
    first_non_zero
}
