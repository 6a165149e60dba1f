/// A real-valued function of one variable that can be integrated.
///
/// Implementations must be pure: the same `x` always produces the same
/// value. Evaluating outside the function's natural domain is allowed and
/// should return a non-finite value (`NaN` or an infinity) rather than panic.
pub trait Integrand {
    /// Returns `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Returns `F(x)` for a closed-form antiderivative `F`, if one is known.
    ///
    /// The default implementation reports that no antiderivative exists.
    fn antiderivative(&self, _x: f64) -> Option<f64> {
        None
    }
}

impl<T: Integrand + ?Sized> Integrand for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn antiderivative(&self, x: f64) -> Option<f64> {
        (**self).antiderivative(x)
    }
}

/// An [`Integrand`] assembled from a function and an optional antiderivative.
///
/// Replacing a model's `FunctionPair` replaces both rules at once, so a pair
/// built without an antiderivative clears any previously available one.
#[derive(Debug, Clone, Copy)]
pub struct FunctionPair {
    function: fn(f64) -> f64,
    antiderivative: Option<fn(f64) -> f64>,
}

impl FunctionPair {
    /// Creates a pair with no known antiderivative.
    #[must_use]
    pub fn new(function: fn(f64) -> f64) -> Self {
        Self {
            function,
            antiderivative: None,
        }
    }

    /// Attaches a closed-form antiderivative.
    #[must_use]
    pub fn with_antiderivative(self, antiderivative: fn(f64) -> f64) -> Self {
        Self {
            antiderivative: Some(antiderivative),
            ..self
        }
    }

    /// Returns true if an antiderivative is attached.
    #[must_use]
    pub fn has_antiderivative(&self) -> bool {
        self.antiderivative.is_some()
    }
}

impl Integrand for FunctionPair {
    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    fn antiderivative(&self, x: f64) -> Option<f64> {
        self.antiderivative.map(|integrated| integrated(x))
    }
}
