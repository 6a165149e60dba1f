/// The closed interval `[x_min, x_max]` a function is integrated over.
///
/// A domain can hold any pair of values, including non-finite ones; validity
/// is reported by [`Domain::is_valid`] rather than enforced at construction.
/// Infinite bounds are the documented way to say "not yet entered".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Lower bound.
    pub x_min: f64,

    /// Upper bound.
    pub x_max: f64,
}

impl Domain {
    /// The sentinel domain used before any bounds are entered.
    pub const UNBOUNDED: Self = Self {
        x_min: f64::NEG_INFINITY,
        x_max: f64::INFINITY,
    };

    /// Creates a domain from its bounds.
    #[must_use]
    pub fn new(x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max }
    }

    /// Returns true if both bounds are finite and `x_min < x_max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max
    }

    /// Returns `x_max - x_min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Returns the width of each of `count` equal subintervals.
    ///
    /// The result is non-finite when `count` is zero.
    #[must_use]
    pub fn step(&self, count: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        self.width() / count
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<[f64; 2]> for Domain {
    fn from([x_min, x_max]: [f64; 2]) -> Self {
        Self::new(x_min, x_max)
    }
}
