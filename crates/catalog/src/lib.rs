//! The fixed menu of functions a user can pick from.
//!
//! Each [`Catalog`] entry carries its evaluation rule and, when a closed form
//! is known, its antiderivative. Entries are ordered the way a segmented
//! control presents them, so [`Catalog::from_index`] maps a selection index
//! straight to a function.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use riemann_core::Integrand;

/// A selectable function with an optional closed-form antiderivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Catalog {
    /// `f(x) = x`
    Linear,
    /// `f(x) = x²`
    #[default]
    Square,
    /// `f(x) = x³`
    Cube,
    /// `f(x) = sin x`
    Sine,
    /// `f(x) = cos x`
    Cosine,
    /// `f(x) = eˣ`
    Exponential,
    /// `f(x) = 1/x`, with a pole at zero.
    Reciprocal,
    /// `f(x) = √x`, `NaN` for negative `x`.
    SquareRoot,
    /// `f(x) = e^(-x²)`, which has no elementary antiderivative.
    Gaussian,
}

/// Error returned when a name matches no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown function: {0:?}")]
pub struct UnknownFunction(pub String);

impl Catalog {
    /// Every entry, in presentation order.
    pub const ALL: [Self; 9] = [
        Self::Linear,
        Self::Square,
        Self::Cube,
        Self::Sine,
        Self::Cosine,
        Self::Exponential,
        Self::Reciprocal,
        Self::SquareRoot,
        Self::Gaussian,
    ];

    /// Returns the entry at a selection index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns this entry's selection index.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the title shown on the selection control.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Linear => "x",
            Self::Square => "x squared",
            Self::Cube => "x cubed",
            Self::Sine => "sin x",
            Self::Cosine => "cos x",
            Self::Exponential => "e^x",
            Self::Reciprocal => "1/x",
            Self::SquareRoot => "sqrt x",
            Self::Gaussian => "e^(-x^2)",
        }
    }

    /// Returns the snake_case identifier used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Sine => "sine",
            Self::Cosine => "cosine",
            Self::Exponential => "exponential",
            Self::Reciprocal => "reciprocal",
            Self::SquareRoot => "square_root",
            Self::Gaussian => "gaussian",
        }
    }

    /// Returns true if a closed-form antiderivative is available.
    #[must_use]
    pub fn has_antiderivative(self) -> bool {
        !matches!(self, Self::Gaussian)
    }
}

impl Integrand for Catalog {
    fn value(&self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Square => x * x,
            Self::Cube => x * x * x,
            Self::Sine => x.sin(),
            Self::Cosine => x.cos(),
            Self::Exponential => x.exp(),
            Self::Reciprocal => x.recip(),
            Self::SquareRoot => x.sqrt(),
            Self::Gaussian => (-x * x).exp(),
        }
    }

    fn antiderivative(&self, x: f64) -> Option<f64> {
        let integrated = match self {
            Self::Linear => x * x / 2.0,
            Self::Square => x.powi(3) / 3.0,
            Self::Cube => x.powi(4) / 4.0,
            Self::Sine => -x.cos(),
            Self::Cosine => x.sin(),
            Self::Exponential => x.exp(),
            Self::Reciprocal => x.abs().ln(),
            Self::SquareRoot => 2.0 / 3.0 * x.powf(1.5),
            Self::Gaussian => return None,
        };
        Some(integrated)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Catalog {
    type Err = UnknownFunction;

    /// Parses either a title (`"x squared"`) or a name (`"square"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|entry| entry.title().eq_ignore_ascii_case(s) || entry.name() == s)
            .ok_or_else(|| UnknownFunction(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Catalog::Linear, 2.0, 2.0)]
    #[case(Catalog::Square, -3.0, 9.0)]
    #[case(Catalog::Cube, -2.0, -8.0)]
    #[case(Catalog::Sine, std::f64::consts::FRAC_PI_2, 1.0)]
    #[case(Catalog::Cosine, 0.0, 1.0)]
    #[case(Catalog::Exponential, 1.0, std::f64::consts::E)]
    #[case(Catalog::Reciprocal, 4.0, 0.25)]
    #[case(Catalog::SquareRoot, 9.0, 3.0)]
    #[case(Catalog::Gaussian, 0.0, 1.0)]
    fn evaluates(#[case] entry: Catalog, #[case] x: f64, #[case] expected: f64) {
        assert_relative_eq!(entry.value(x), expected, epsilon = 1e-12);
    }

    /// The antiderivative's slope should match the function on `[a, b]`.
    #[rstest]
    #[case(Catalog::Linear, -1.0, 2.0)]
    #[case(Catalog::Square, -2.0, 2.0)]
    #[case(Catalog::Cube, 0.5, 1.5)]
    #[case(Catalog::Sine, 0.0, 3.0)]
    #[case(Catalog::Cosine, -1.0, 1.0)]
    #[case(Catalog::Exponential, -1.0, 1.0)]
    #[case(Catalog::Reciprocal, 0.5, 4.0)]
    #[case(Catalog::Reciprocal, -4.0, -0.5)]
    #[case(Catalog::SquareRoot, 0.25, 4.0)]
    fn antiderivative_differentiates_back(#[case] entry: Catalog, #[case] a: f64, #[case] b: f64) {
        let h = 1e-6;
        for x in [a, 0.5 * (a + b), b] {
            let upper = entry.antiderivative(x + h).unwrap();
            let lower = entry.antiderivative(x - h).unwrap();
            let slope = (upper - lower) / (2.0 * h);
            assert_relative_eq!(slope, entry.value(x), epsilon = 1e-5, max_relative = 1e-5);
        }
    }

    #[test]
    fn gaussian_has_no_antiderivative() {
        assert!(!Catalog::Gaussian.has_antiderivative());
        assert_eq!(Catalog::Gaussian.antiderivative(1.0), None);
    }

    #[test]
    fn out_of_domain_values_are_not_finite() {
        assert!(Catalog::Reciprocal.value(0.0).is_infinite());
        assert!(Catalog::SquareRoot.value(-1.0).is_nan());
    }

    #[test]
    fn indices_round_trip() {
        for (index, entry) in Catalog::ALL.into_iter().enumerate() {
            assert_eq!(entry.index(), index);
            assert_eq!(Catalog::from_index(index), Some(entry));
        }
        assert_eq!(Catalog::from_index(Catalog::ALL.len()), None);
    }

    #[test]
    fn parses_titles_and_names() {
        assert_eq!("x squared".parse::<Catalog>(), Ok(Catalog::Square));
        assert_eq!(" Sin X ".parse::<Catalog>(), Ok(Catalog::Sine));
        assert_eq!("square_root".parse::<Catalog>(), Ok(Catalog::SquareRoot));
        assert_eq!(
            "tan x".parse::<Catalog>(),
            Err(UnknownFunction("tan x".to_owned()))
        );
    }

    #[test]
    fn display_uses_title() {
        assert_eq!(Catalog::Cube.to_string(), "x cubed");
    }

    #[test]
    fn serializes_as_snake_case_name() {
        for entry in Catalog::ALL {
            let json = serde_json::to_string(&entry).unwrap();
            assert_eq!(json, format!("\"{}\"", entry.name()));
        }
    }
}
