use std::ops::RangeInclusive;

use riemann_catalog::Catalog;
use riemann_core::{Domain, Grid, Integrand, Sample, Sampled, sample};

use crate::{Fault, Rectangle};

/// The interval counts a stepper control should offer.
///
/// The model itself accepts any count and flags values below one.
pub const INTERVAL_COUNT_RANGE: RangeInclusive<i64> = 1..=100;

/// Approximates the integral of a function over a domain with a left Riemann sum.
///
/// The model is a plain value: setters overwrite fields, and every derived
/// quantity is recomputed from the current fields each time it is read.
/// Callers that share a model across threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RiemannModel<F = Catalog> {
    domain: Domain,
    interval_count: i64,
    function: F,
}

impl<F: Default> Default for RiemannModel<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> RiemannModel<F> {
    /// Creates a model with unbounded (not yet entered) bounds and one interval.
    pub fn new(function: F) -> Self {
        Self {
            domain: Domain::UNBOUNDED,
            interval_count: 1,
            function,
        }
    }

    /// Sets both bounds.
    ///
    /// Non-finite or inverted bounds are accepted and reported by
    /// [`is_in_error`](Self::is_in_error).
    pub fn set_domain(&mut self, x_min: f64, x_max: f64) {
        self.domain = Domain::new(x_min, x_max);
    }

    /// Sets the lower bound, leaving the upper bound unchanged.
    pub fn set_x_min(&mut self, x_min: f64) {
        self.domain.x_min = x_min;
    }

    /// Sets the upper bound, leaving the lower bound unchanged.
    pub fn set_x_max(&mut self, x_max: f64) {
        self.domain.x_max = x_max;
    }

    /// Sets the number of subintervals used by the rectangle sum.
    ///
    /// Counts below one are accepted and reported by
    /// [`is_in_error`](Self::is_in_error).
    pub fn set_interval_count(&mut self, interval_count: i64) {
        self.interval_count = interval_count;
    }

    /// Replaces the active function, including its antiderivative.
    pub fn set_function(&mut self, function: F) {
        self.function = function;
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.domain.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.domain.x_max
    }

    #[must_use]
    pub fn interval_count(&self) -> i64 {
        self.interval_count
    }

    #[must_use]
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Returns the interval count as a usable partition size, if it is at least one.
    fn intervals(&self) -> Option<usize> {
        usize::try_from(self.interval_count)
            .ok()
            .filter(|&count| count >= 1)
    }

    /// Returns `(x_max - x_min) / interval_count`.
    ///
    /// Returns `NaN` when the interval count is below one.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.intervals()
            .map_or(f64::NAN, |count| self.domain.step(count))
    }
}

impl<F: Integrand> RiemannModel<F> {
    /// Evaluates the function at `intervals + 1` evenly spaced points.
    ///
    /// The sampling density is independent of the model's own interval count,
    /// so a caller can draw a smooth curve while summing coarse rectangles.
    /// The result always holds exactly `intervals + 1` samples in ascending
    /// `x` order, including any non-finite values; use
    /// [`is_in_error`](Self::is_in_error) to decide whether they are usable.
    #[must_use]
    pub fn evaluate_samples(&self, intervals: usize) -> Sampled {
        log::trace!(
            "sampling {intervals} intervals over [{}, {}]",
            self.domain.x_min,
            self.domain.x_max
        );
        sample(&self.function, self.domain, intervals)
    }

    /// Evaluates the function at the model's own partition points.
    ///
    /// An interval count below one yields the single sample at `x_min`.
    #[must_use]
    pub fn samples(&self) -> Sampled {
        self.evaluate_samples(self.intervals().unwrap_or(0))
    }

    /// Returns the left Riemann sum over the model's interval count.
    ///
    /// Only the left edge of each subinterval contributes; the sample at
    /// `x_max` is excluded. Returns `NaN` when the interval count is below one.
    #[must_use]
    pub fn rectangle_sum(&self) -> f64 {
        let Some(count) = self.intervals() else {
            return f64::NAN;
        };

        let grid = Grid::new(self.domain, count);
        let step = grid.step();
        grid.take(count).map(|x| self.function.value(x) * step).sum()
    }

    /// Returns `F(x_max) - F(x_min)`, or `None` if no antiderivative is known.
    #[must_use]
    pub fn exact_integral(&self) -> Option<f64> {
        let upper = self.function.antiderivative(self.domain.x_max)?;
        let lower = self.function.antiderivative(self.domain.x_min)?;
        Some(upper - lower)
    }

    /// Returns the rectangles of the left Riemann sum, or none in the error state.
    #[must_use]
    pub fn rectangles(&self) -> Vec<Rectangle> {
        if self.is_in_error() {
            return Vec::new();
        }
        let Some(count) = self.intervals() else {
            return Vec::new();
        };

        let grid = Grid::new(self.domain, count);
        let width = grid.step();
        grid.take(count)
            .enumerate()
            .map(|(index, x)| Rectangle {
                index,
                x,
                width,
                height: self.function.value(x),
            })
            .collect()
    }

    /// Returns true if the current configuration cannot produce valid results.
    ///
    /// This is the case when the domain is not finite and ordered, the
    /// interval count is below one, or any partition point (including
    /// `x_max`) or the function value there is not finite. A finite domain
    /// too wide for its width to be represented falls in the last case.
    #[must_use]
    pub fn is_in_error(&self) -> bool {
        self.first_fault().is_some()
    }

    /// Returns the first fault found, checking domain, interval count, then samples.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] that puts the model in its error state.
    pub fn check(&self) -> Result<(), Fault> {
        let result = self.first_fault().map_or(Ok(()), Err);
        if let Err(fault) = &result {
            log::debug!("riemann model in error state: {fault}");
        }
        result
    }

    /// Returns every fault that currently applies.
    ///
    /// Samples are only inspected once the domain and interval count are
    /// valid, so a non-finite sample is reported at most once.
    #[must_use]
    pub fn faults(&self) -> Vec<Fault> {
        let mut faults = Vec::new();
        if let Some(fault) = self.domain_fault() {
            faults.push(fault);
        }
        if let Some(fault) = self.interval_count_fault() {
            faults.push(fault);
        }
        if faults.is_empty() {
            faults.extend(self.sample_fault());
        }
        faults
    }

    fn first_fault(&self) -> Option<Fault> {
        self.domain_fault()
            .or_else(|| self.interval_count_fault())
            .or_else(|| self.sample_fault())
    }

    fn domain_fault(&self) -> Option<Fault> {
        (!self.domain.is_valid()).then_some(Fault::InvalidDomain {
            x_min: self.domain.x_min,
            x_max: self.domain.x_max,
        })
    }

    fn interval_count_fault(&self) -> Option<Fault> {
        self.intervals()
            .is_none()
            .then_some(Fault::InvalidIntervalCount(self.interval_count))
    }

    /// Finds the first partition sample that is not finite in `x` or `f(x)`.
    ///
    /// Assumes the domain and interval count are valid.
    fn sample_fault(&self) -> Option<Fault> {
        let count = self.intervals()?;
        Grid::new(self.domain, count)
            .map(|x| Sample::new(x, self.function.value(x)))
            .find(|sample| !sample.is_finite())
            .map(|sample| Fault::NonFiniteSample { x: sample.x })
    }
}
