// SPDX-License-Identifier: BSD-3-Clause

use serde::{Deserialize, Serialize};

/// An n-dimensional coordinate in the game space, n ∈ {2, 3}.
///
/// A thin wrapper around `Vec<f64>`, in the spirit of `oxmpl`'s
/// `RealVectorState`, but used here for plain positions rather than a full
/// `State` type — actor-specific kinematic state lives separately in
/// [`crate::game::ActorState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point(pub Vec<f64>);

impl Point {
    pub fn new(values: Vec<f64>) -> Self {
        Point(values)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Euclidean distance to another point of the same dimension.
    pub fn distance(&self, other: &Point) -> f64 {
        debug_assert_eq!(self.dim(), other.dim(), "point dimension mismatch");
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f64;
    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![3.0, 4.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
    }
}
