const LOG_SCALE: f64 = 10000.0;

fn scaled_log(base: usize) -> usize {
    ((base as f64).ln() * LOG_SCALE) as usize
}

/// One conversion pass between two bases.
///
/// The fixed-point logarithms only size output buffers; they never affect the
/// converted value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Direction {
    from_base: usize,
    to_base: usize,
    from_log: usize,
    to_log: usize,
}

impl Direction {
    pub fn new(from_base: usize, to_base: usize) -> Self {
        assert!((2..=256).contains(&from_base) && (2..=256).contains(&to_base));
        Self {
            from_base,
            to_base,
            from_log: scaled_log(from_base),
            to_log: scaled_log(to_base),
        }
    }

    pub fn from_base(&self) -> usize {
        self.from_base
    }

    pub fn to_base(&self) -> usize {
        self.to_base
    }

    pub fn from_log(&self) -> usize {
        self.from_log
    }

    pub fn to_log(&self) -> usize {
        self.to_log
    }

    /// Upper bound on the number of `to_base` digits needed for `len` significant
    /// `from_base` digits. `from_log + 1` is strictly above the true scaled logarithm
    /// and `to_log` is at or below it, so the estimate never comes out short.
    pub fn approximate_size(&self, len: usize) -> usize {
        1 + len * (self.from_log + 1) / self.to_log
    }

    /// Divides `digits[start_at..]`, read as a `from_base` number, by `to_base` in
    /// place and returns the remainder.
    pub fn divmod(&self, digits: &mut [u8], start_at: usize) -> u8 {
        let mut remainder = 0;
        for digit in &mut digits[start_at..] {
            let value = self.from_base * remainder + *digit as usize;
            *digit = (value / self.to_base) as u8;
            remainder = value % self.to_base;
        }
        remainder as u8
    }
}
