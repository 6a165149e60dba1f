use crate::{Domain, Grid, Integrand};

/// A single evaluated point `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// The evaluation point.
    pub x: f64,

    /// The function value at `x`.
    pub fx: f64,
}

impl Sample {
    /// Creates a sample from a point and its function value.
    #[must_use]
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }

    /// Returns true if both `x` and `f(x)` are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.fx.is_finite()
    }
}

/// The smallest and largest finite function values seen while sampling.
///
/// Starts as the empty range `(+inf, -inf)`, so a sampling pass that
/// produces no finite value leaves it empty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrema {
    /// Smallest finite value, or `+inf` when empty.
    pub min: f64,

    /// Largest finite value, or `-inf` when empty.
    pub max: f64,
}

impl Extrema {
    /// The empty range.
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Widens the range to include `value`, ignoring non-finite values.
    pub fn include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Returns true if no finite value has been included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns `max - min`, or zero for an empty range.
    #[must_use]
    pub fn span(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<f64> for Extrema {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mut extrema, value| {
            extrema.include(value);
            extrema
        })
    }
}

/// The result of evaluating an integrand across a grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sampled {
    /// Samples in ascending `x` order, including any non-finite values.
    pub samples: Vec<Sample>,

    /// Range of the finite function values among `samples`.
    pub extrema: Extrema,
}

impl Sampled {
    /// Returns true if every sample is finite.
    #[must_use]
    pub fn all_finite(&self) -> bool {
        self.samples.iter().all(Sample::is_finite)
    }

    /// Returns the first non-finite sample, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<&Sample> {
        self.samples.iter().find(|s| !s.is_finite())
    }
}

/// Evaluates `integrand` at `intervals + 1` evenly spaced points of `domain`.
///
/// Non-finite evaluations are kept in the output so the sequence always has
/// exactly `intervals + 1` entries; they are skipped when computing extrema.
pub fn sample<F: Integrand + ?Sized>(integrand: &F, domain: Domain, intervals: usize) -> Sampled {
    let grid = Grid::new(domain, intervals);
    let mut samples = Vec::with_capacity(grid.len());
    let mut extrema = Extrema::EMPTY;

    for x in grid {
        let fx = integrand.value(x);
        extrema.include(fx);
        samples.push(Sample::new(x, fx));
    }

    Sampled { samples, extrema }
}
