// SPDX-License-Identifier: BSD-3-Clause

//! Read-only reachability queries over a frozen [`Solution`] — component E
//! of spec.md §2.
//!
//! Grounded directly on `rufus.analysis.GameSolution` (`original_source/`):
//! `_reachable_nodes`'s ancestor-pruning filter, `_collect_path`, and
//! `_collect_trajectory` map onto this module's private helpers almost
//! line for line, adapted to the arena-tree handle API instead of
//! `treelib` node identifiers.

use crate::{
    game::{point::Point, region::Region, vertex::Vertex},
    solution::Solution,
    tree::{NodeHandle, Tree},
};

/// Queries over one [`Solution`]'s evader tree.
pub struct Analysis<'a> {
    solution: &'a Solution,
}

impl<'a> Analysis<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Analysis { solution }
    }

    fn evader_tree(&self) -> &Tree {
        self.solution.evader_tree()
    }

    fn vertex_touches(target: &Region, v: &Vertex) -> bool {
        if target.contains(&v.loc) {
            return true;
        }
        v.trajectory.iter().any(|p| target.contains(p))
    }

    /// Nodes whose trajectory passes through `target`, with any node that
    /// has an ancestor already in the set removed (an ancestor reaching the
    /// target makes every descendant's arrival redundant — invariant 7 in
    /// spec.md §8).
    fn reachable_nodes(&self, target: &Region) -> Vec<NodeHandle> {
        let tree = self.evader_tree();

        let matching: Vec<NodeHandle> = tree
            .node_handles()
            .into_iter()
            .filter(|&h| Self::vertex_touches(target, tree.get(h).unwrap()))
            .collect();

        matching
            .iter()
            .copied()
            .filter(|&h| !matching.iter().any(|&other| other != h && tree.is_ancestor(other, h)))
            .collect()
    }

    fn collect_path(&self, handle: NodeHandle) -> Vec<Vertex> {
        let tree = self.evader_tree();
        let mut path: Vec<Vertex> = tree.ancestors(handle).iter().map(|&h| tree.get(h).unwrap().clone()).collect();
        path.reverse();
        path
    }

    fn collect_trajectory(path: &[Vertex]) -> Vec<Point> {
        let mut out: Vec<Point> = path.iter().filter(|v| !v.trajectory.is_empty()).flat_map(|v| v.trajectory.clone()).collect();
        if let Some(last) = path.last() {
            out.push(last.loc.clone());
        }
        out
    }

    /// `true` iff any evader trajectory passes through `target`.
    pub fn can_reach(&self, target: &Region) -> bool {
        !self.reachable_nodes(target).is_empty()
    }

    /// Every (root-to-node path, flattened trajectory) pair reaching
    /// `target`, with ancestor-dominated nodes excluded (spec.md §4.5).
    pub fn all_trajectories_to_target(&self, target: &Region) -> Vec<(Vec<Vertex>, Vec<Point>)> {
        self.reachable_nodes(target)
            .into_iter()
            .map(|h| {
                let path = self.collect_path(h);
                let trajectory = Self::collect_trajectory(&path);
                (path, trajectory)
            })
            .collect()
    }

    /// The trajectory reaching `target` with the fewest sampled points
    /// (a proxy for elapsed game time), or `None` if unreachable.
    pub fn min_trajectory_to_target(&self, target: &Region) -> Option<(Vec<Vertex>, Vec<Point>)> {
        self.all_trajectories_to_target(target)
            .into_iter()
            .min_by_key(|(_, traj)| traj.len())
    }

    /// The root-to-leaf evader trajectory with the most sampled points.
    pub fn max_time_trajectory(&self) -> Option<(Vec<Vertex>, Vec<Point>)> {
        self.evader_tree()
            .leaves()
            .into_iter()
            .map(|h| {
                let path = self.collect_path(h);
                let trajectory = Self::collect_trajectory(&path);
                (path, trajectory)
            })
            .max_by_key(|(_, traj)| traj.len())
    }
}
