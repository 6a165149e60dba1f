//! Core traits and types for left Riemann sum approximation.
//!
//! This crate defines the shared abstractions the catalog and model crates
//! build on:
//!
//! - [`Integrand`] — a pure function with an optional closed-form antiderivative
//! - [`FunctionPair`] — an [`Integrand`] built from plain function pointers
//! - [`Domain`] — the `[x_min, x_max]` bounds, including the unbounded sentinel
//! - [`Grid`] — a lazy sequence of evenly spaced points across a domain
//! - [`Sample`], [`Extrema`], [`Sampled`] — evaluated points and their range
//! - [`sample`] — evaluates an integrand over a grid

mod domain;
mod grid;
mod integrand;
mod sample;

pub use domain::Domain;
pub use grid::Grid;
pub use integrand::{FunctionPair, Integrand};
pub use sample::{Extrema, Sample, Sampled, sample};
