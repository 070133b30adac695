// SPDX-License-Identifier: BSD-3-Clause

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{error::RegionError, game::point::Point};

/// An axis-aligned box in n-D space: `lower <= p < upper`, componentwise.
///
/// Serves as both the game-space region (spec.md §3) and the target region
/// passed to `Analysis` queries. Grounded on `rufus.game.BoxRegion` from
/// `original_source/` and on `oxmpl::base::space::RealVectorStateSpace`'s
/// bounds/`sample_uniform` pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub lower: Point,
    pub upper: Point,
}

impl Region {
    /// Creates a new `Region`.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::DimensionMismatch` if `lower` and `upper` have
    /// different arity, or `RegionError::InvalidBound` if any lower bound is
    /// not strictly less than its corresponding upper bound.
    pub fn new(lower: Point, upper: Point) -> Result<Self, RegionError> {
        if lower.dim() != upper.dim() {
            return Err(RegionError::DimensionMismatch {
                lower: lower.dim(),
                upper: upper.dim(),
            });
        }
        for i in 0..lower.dim() {
            if lower[i] >= upper[i] {
                return Err(RegionError::InvalidBound {
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }
        Ok(Region { lower, upper })
    }

    pub fn dimension(&self) -> usize {
        self.lower.dim()
    }

    /// `true` iff `lower <= p < upper`, componentwise.
    pub fn contains(&self, p: &Point) -> bool {
        debug_assert_eq!(p.dim(), self.dimension(), "point/region dimension mismatch");
        (0..self.dimension()).all(|i| self.lower[i] <= p[i] && p[i] < self.upper[i])
    }

    /// Draws a point uniformly at random from the box.
    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        Point::new(
            (0..self.dimension())
                .map(|i| rng.random_range(self.lower[i]..self.upper[i]))
                .collect(),
        )
    }
}
