/// One rectangle of a left Riemann sum.
///
/// The rectangle spans `[x, x + width]` and its height is the function value
/// at the left edge `x`. Heights can be negative.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rectangle {
    /// Zero-based position in the partition.
    pub index: usize,

    /// Left edge.
    pub x: f64,

    /// Width, equal to the model's step size.
    pub width: f64,

    /// Function value at the left edge.
    pub height: f64,
}

impl Rectangle {
    /// Returns the signed area `height * width`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.height * self.width
    }

    /// Returns the accessibility label, numbered from one.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Rectangle {}", self.index + 1)
    }
}
