use thiserror::Error;

/// A reason the model is in its error state.
///
/// The model never returns these from its calculations; they only explain
/// why [`RiemannModel::is_in_error`] is true.
///
/// [`RiemannModel::is_in_error`]: crate::RiemannModel::is_in_error
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Fault {
    #[error("invalid domain [{x_min}, {x_max}]: bounds must be finite with x_min < x_max")]
    InvalidDomain { x_min: f64, x_max: f64 },

    #[error("interval count must be at least 1, got {0}")]
    InvalidIntervalCount(i64),

    #[error("function is not finite at x = {x}")]
    NonFiniteSample { x: f64 },
}
