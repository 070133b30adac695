// SPDX-License-Identifier: BSD-3-Clause

use serde::{Deserialize, Serialize};

use crate::tree::Tree;

/// The frozen result of a [`crate::planner::Planner::solve`] run: both
/// trees, ready for read-only [`crate::analysis`] queries.
///
/// Grounded on `rufus.solver.Solver.solve`'s `(g_p, g_e)` return pair
/// (`original_source/`). Serializable (spec.md §6) via `serde`, which the
/// teacher does not depend on — sourced from the rest of the example pack
/// (e.g. `clearlycloudy-sample_planning`, `horus_manager`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    evader: Tree,
    pursuer: Tree,
}

impl Solution {
    pub fn new(evader: Tree, pursuer: Tree) -> Self {
        Solution { evader, pursuer }
    }

    pub fn evader_tree(&self) -> &Tree {
        &self.evader
    }

    pub fn pursuer_tree(&self) -> &Tree {
        &self.pursuer
    }
}
