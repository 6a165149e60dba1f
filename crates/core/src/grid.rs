use crate::Domain;

/// A lazy sequence of `intervals + 1` evenly spaced points across a domain.
///
/// Point `i` is `x_min + i * step`, so both endpoints are included (the last
/// one up to floating-point rounding). The first point is always exactly
/// `x_min`, even when the step is not finite because `intervals` is zero.
#[derive(Debug, Clone)]
pub struct Grid {
    x_min: f64,
    step: f64,
    next: usize,
    len: usize,
}

impl Grid {
    /// Creates a grid that partitions `domain` into `intervals` subintervals.
    #[must_use]
    pub fn new(domain: Domain, intervals: usize) -> Self {
        Self {
            x_min: domain.x_min,
            step: domain.step(intervals),
            next: 0,
            len: intervals.saturating_add(1),
        }
    }

    /// Returns the spacing between consecutive points.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the point at `index` without advancing the iterator.
    #[must_use]
    pub fn point(&self, index: usize) -> f64 {
        if index == 0 {
            return self.x_min;
        }

        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * self.step;
        self.x_min + offset
    }
}

impl Iterator for Grid {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.len {
            return None;
        }
        let x = self.point(self.next);
        self.next += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Grid {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn includes_both_endpoints() {
        let points: Vec<f64> = Grid::new(Domain::new(0.0, 2.0), 4).collect();

        assert_eq!(points, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn reports_exact_length() {
        let grid = Grid::new(Domain::new(-1.0, 1.0), 7);

        assert_eq!(grid.len(), 8);
    }

    #[test]
    fn last_point_lands_on_x_max() {
        let domain = Domain::new(-1.0, 2.3);
        let last = Grid::new(domain, 30).last().unwrap();

        assert_relative_eq!(last, 2.3, epsilon = 1e-12);
    }

    #[test]
    fn zero_intervals_yield_only_x_min() {
        let points: Vec<f64> = Grid::new(Domain::new(3.0, 4.0), 0).collect();

        assert_eq!(points, vec![3.0]);
    }

    #[test]
    fn point_does_not_advance() {
        let mut grid = Grid::new(Domain::new(0.0, 1.0), 2);

        assert_relative_eq!(grid.point(2), 1.0);
        assert_eq!(grid.next(), Some(0.0));
        assert_eq!(grid.len(), 2);
    }
}
