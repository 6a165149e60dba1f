//! Left Riemann sum approximation of a function's definite integral.
//!
//! [`RiemannModel`] holds the domain bounds, the interval count, and the
//! active [`Integrand`]. Everything else is derived on read:
//!
//! - [`RiemannModel::step_size`] — width of each subinterval
//! - [`RiemannModel::evaluate_samples`] — evenly spaced samples with extrema
//! - [`RiemannModel::rectangle_sum`] — the left Riemann sum
//! - [`RiemannModel::exact_integral`] — `F(x_max) - F(x_min)` when `F` is known
//! - [`RiemannModel::is_in_error`] — whether the configuration is usable
//!
//! No operation fails. Invalid bounds, interval counts, and non-finite
//! function values surface through the error flag, and [`RiemannModel::check`]
//! reports which [`Fault`] caused it.
//!
//! # Example
//!
//! ```
//! use riemann_catalog::Catalog;
//! use riemann_model::RiemannModel;
//!
//! let mut model = RiemannModel::new(Catalog::Linear);
//! model.set_domain(0.0, 2.0);
//! model.set_interval_count(4);
//!
//! assert!(!model.is_in_error());
//! assert_eq!(model.step_size(), 0.5);
//! assert_eq!(model.rectangle_sum(), 1.5);
//! assert_eq!(model.exact_integral(), Some(2.0));
//! ```
//!
//! [`Integrand`]: riemann_core::Integrand

mod config;
mod fault;
mod model;
mod rectangle;

pub use config::{ConfigError, ModelConfig};
pub use fault::Fault;
pub use model::{INTERVAL_COUNT_RANGE, RiemannModel};
pub use rectangle::Rectangle;

pub use riemann_catalog::Catalog;
pub use riemann_core::{Domain, Extrema, FunctionPair, Integrand, Sample, Sampled};
