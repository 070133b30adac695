// SPDX-License-Identifier: BSD-3-Clause

//! Arena-based trajectory tree — component C of spec.md §2.
//!
//! Grounded on `rufus.tree` (`original_source/`) and on `oxmpl`'s RRT*/
//! RRT-Connect planners, which hold nodes in a flat `Vec<Node<S>>` indexed
//! by `usize` rather than using pointers, to sidestep Rust's aliasing rules
//! during reparenting. Removal uses tombstones (`None` slots) so that
//! previously issued handles never dangle or get silently reused.

use serde::{Deserialize, Serialize};

use crate::game::{point::Point, vertex::Vertex};

/// Opaque index into a [`Tree`]'s arena. Stable until the referenced node is
/// removed by [`Tree::remove_subtree`].
pub type NodeHandle = usize;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Node {
    vertex: Vertex,
    parent: Option<NodeHandle>,
    children: Vec<NodeHandle>,
}

/// A rooted, acyclic tree of [`Vertex`] values.
///
/// See spec.md §4.3 for the full operation contract and §3 for the
/// lifecycle/invariants (exactly one root, acyclic, handles stable until
/// removed).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
    alive: usize,
}

impl Tree {
    /// The handle of the root node. Always `0`; the root is never removed.
    pub const ROOT: NodeHandle = 0;

    /// Creates a tree containing only `root`.
    pub fn new(root: Vertex) -> Self {
        Tree {
            nodes: vec![Some(Node {
                vertex: root,
                parent: None,
                children: Vec::new(),
            })],
            alive: 1,
        }
    }

    /// Number of live (non-removed) nodes.
    pub fn len(&self) -> usize {
        self.alive
    }

    pub fn is_empty(&self) -> bool {
        self.alive == 0
    }

    /// The vertex stored at `handle`, or `None` if it was removed.
    pub fn get(&self, handle: NodeHandle) -> Option<&Vertex> {
        self.nodes.get(handle).and_then(|n| n.as_ref()).map(|n| &n.vertex)
    }

    /// Replaces the vertex stored at `handle` in place, without touching the
    /// tree's parent/child structure. Used by rewire to update a reparented
    /// vertex's trajectory and state.
    pub fn set_vertex(&mut self, handle: NodeHandle, vertex: Vertex) {
        if let Some(Some(n)) = self.nodes.get_mut(handle) {
            n.vertex = vertex;
        }
    }

    pub fn parent_of(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.nodes.get(handle).and_then(|n| n.as_ref()).and_then(|n| n.parent)
    }

    /// All live node handles, in insertion order. Unspecified order is fine
    /// per spec.md §4.3 except where a specific operation says otherwise.
    pub fn node_handles(&self) -> Vec<NodeHandle> {
        self.handles().collect()
    }

    fn handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(h, n)| n.as_ref().map(|_| h))
    }

    /// Allocates a new node holding `vertex` as a child of `parent`. Panics
    /// if `parent` has been removed.
    pub fn insert(&mut self, parent: NodeHandle, vertex: Vertex) -> NodeHandle {
        assert!(
            self.nodes[parent].is_some(),
            "cannot insert under a removed node"
        );
        let handle = self.nodes.len();
        self.nodes.push(Some(Node {
            vertex,
            parent: Some(parent),
            children: Vec::new(),
        }));
        self.nodes[parent].as_mut().unwrap().children.push(handle);
        self.alive += 1;
        handle
    }

    /// The vertex in the tree minimizing `cost(v.loc, z, &v.state)`. Ties
    /// broken by insertion order (lowest handle wins).
    pub fn nearest_neighbor(
        &self,
        z: &Point,
        cost: impl Fn(&Point, &Point, &crate::game::vertex::ActorState) -> f64,
    ) -> NodeHandle {
        self.handles()
            .min_by(|&a, &b| {
                let va = self.get(a).unwrap();
                let vb = self.get(b).unwrap();
                cost(&va.loc, z, &va.state)
                    .partial_cmp(&cost(&vb.loc, z, &vb.state))
                    .unwrap()
            })
            .expect("tree is never empty")
    }

    /// Every vertex v with `cost(v.loc, z, v.state) < r`.
    pub fn within_radius(
        &self,
        z: &Point,
        r: f64,
        cost: impl Fn(&Point, &Point, &crate::game::vertex::ActorState) -> f64,
    ) -> Vec<NodeHandle> {
        self.handles()
            .filter(|&h| {
                let v = self.get(h).unwrap();
                cost(&v.loc, z, &v.state) < r
            })
            .collect()
    }

    /// The Karaman–Frazzoli shrinking-ball radius `γ·(ln N / N)^(1/d)`,
    /// where `N` is the current live node count and `d` is `z`'s dimension.
    pub fn shrinking_ball_radius(&self, gamma: f64, z: &Point) -> f64 {
        let n = self.alive as f64;
        if n <= 1.0 {
            return 0.0;
        }
        gamma * (n.ln() / n).powf(1.0 / z.dim() as f64)
    }

    /// `within_radius` at the shrinking-ball radius.
    pub fn near(
        &self,
        z: &Point,
        cost: impl Fn(&Point, &Point, &crate::game::vertex::ActorState) -> f64,
        gamma: f64,
    ) -> Vec<NodeHandle> {
        let r = self.shrinking_ball_radius(gamma, z);
        self.within_radius(z, r, cost)
    }

    /// Sum of `trajectory.len()` along the path from the root to `handle`
    /// (root contributes zero). Multiplying by `dt` gives elapsed game time.
    pub fn time_to_root(&self, handle: NodeHandle) -> u64 {
        let mut total = 0u64;
        let mut cur = handle;
        while let Some(parent) = self.parent_of(cur) {
            total += self.get(cur).unwrap().trajectory.len() as u64;
            cur = parent;
        }
        total
    }

    /// Moves the subtree rooted at `handle` to be a child of `new_parent`.
    /// Descendants are preserved.
    pub fn reparent(&mut self, handle: NodeHandle, new_parent: NodeHandle) {
        if let Some(old_parent) = self.parent_of(handle) {
            let siblings = &mut self.nodes[old_parent].as_mut().unwrap().children;
            siblings.retain(|&c| c != handle);
        }
        self.nodes[handle].as_mut().unwrap().parent = Some(new_parent);
        self.nodes[new_parent].as_mut().unwrap().children.push(handle);
    }

    /// Removes `handle` and every descendant from the tree.
    pub fn remove_subtree(&mut self, handle: NodeHandle) {
        if let Some(parent) = self.parent_of(handle) {
            let siblings = &mut self.nodes[parent].as_mut().unwrap().children;
            siblings.retain(|&c| c != handle);
        }

        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            if let Some(node) = self.nodes[h].take() {
                stack.extend(node.children);
                self.alive -= 1;
            }
        }
    }

    /// Handles with no live children.
    pub fn leaves(&self) -> Vec<NodeHandle> {
        self.handles()
            .filter(|&h| self.nodes[h].as_ref().unwrap().children.is_empty())
            .collect()
    }

    /// Handles from `handle` up to (and including) the root, nearest first.
    pub fn ancestors(&self, handle: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut cur = Some(handle);
        while let Some(h) = cur {
            out.push(h);
            cur = self.parent_of(h);
        }
        out
    }

    /// `true` iff `a` is a strict ancestor of `b`.
    pub fn is_ancestor(&self, a: NodeHandle, b: NodeHandle) -> bool {
        let mut cur = self.parent_of(b);
        while let Some(h) = cur {
            if h == a {
                return true;
            }
            cur = self.parent_of(h);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::vertex::ActorState;

    fn p(x: f64) -> Point {
        Point::new(vec![x])
    }

    fn traj(n: usize) -> Vec<Point> {
        (0..n).map(|_| p(0.0)).collect()
    }

    // Mirrors rufus.test.tree_test.TreeTest's chain fixture: 10 -> 20 ->
    // {25, 30}, 10 -> 5.
    fn fixture() -> (Tree, [NodeHandle; 5]) {
        let mut t = Tree::new(Vertex::root(p(10.0), ActorState::Stateless));
        let n1 = t.insert(Tree::ROOT, Vertex::new(p(20.0), ActorState::Stateless, traj(10)));
        let n2 = t.insert(n1, Vertex::new(p(25.0), ActorState::Stateless, traj(5)));
        let n3 = t.insert(n1, Vertex::new(p(30.0), ActorState::Stateless, traj(10)));
        let n4 = t.insert(Tree::ROOT, Vertex::new(p(5.0), ActorState::Stateless, traj(5)));
        (t, [Tree::ROOT, n1, n2, n3, n4])
    }

    fn dist(a: &Point, b: &Point, _s: &ActorState) -> f64 {
        a.distance(b)
    }

    #[test]
    fn test_time_to_root() {
        let (t, [n0, n1, n2, _n3, n4]) = fixture();
        assert_eq!(t.time_to_root(n0), 0);
        assert_eq!(t.time_to_root(n1), 10);
        assert_eq!(t.time_to_root(n4), 5);
        assert_eq!(t.time_to_root(n2), 15);
    }

    #[test]
    fn test_nearest_neighbor() {
        let (t, [n0, n1, n2, n3, n4]) = fixture();
        assert_eq!(t.nearest_neighbor(&p(9.0), dist), n0);
        assert_eq!(t.nearest_neighbor(&p(21.0), dist), n1);
        assert_eq!(t.nearest_neighbor(&p(23.0), dist), n2);
        assert_eq!(t.nearest_neighbor(&p(31.0), dist), n3);
        assert_eq!(t.nearest_neighbor(&p(2.0), dist), n4);
    }

    #[test]
    fn test_within_radius() {
        let (t, [_n0, n1, n2, n3, _n4]) = fixture();
        let mut found = t.within_radius(&p(25.0), 10.0, dist);
        found.sort();
        let mut expected = vec![n1, n2, n3];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_remove_subtree() {
        let (mut t, [n0, n1, _n2, _n3, n4]) = fixture();
        t.remove_subtree(n1);
        assert_eq!(t.len(), 2);
        assert!(t.get(n0).is_some());
        assert!(t.get(n4).is_some());
        assert!(t.get(n1).is_none());
    }

    // spec.md §8's ball-radius law is stated against a stale fixture in
    // original_source (tree_test.py calls `logball(gamma, n)` — two
    // arguments against a three-argument `logball(gamma, n, dim)` — so its
    // literal "0.38" cannot be reproduced from the current formula). This
    // asserts the formula in spec.md §4.3 directly: radius(N=1) = 0 and the
    // d=1 value for N=10.
    #[test]
    fn test_shrinking_ball_radius() {
        let t = Tree::new(Vertex::root(p(0.0), ActorState::Stateless));
        assert_eq!(t.shrinking_ball_radius(1.0, &p(0.0)), 0.0);

        let mut t10 = Tree::new(Vertex::root(p(0.0), ActorState::Stateless));
        for i in 1..10 {
            t10.insert(Tree::ROOT, Vertex::new(p(i as f64), ActorState::Stateless, traj(1)));
        }
        let expected = (10f64.ln() / 10.0).powf(1.0);
        assert!((t10.shrinking_ball_radius(1.0, &p(0.0)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_near() {
        let (t, [_n0, n1, n2, n3, _n4]) = fixture();
        // 5 live nodes, d=1: radius = gamma * (ln(5)/5) ~= gamma * 0.322.
        // gamma=30 gives a radius of ~9.66: wide enough to catch n1/n3 (each
        // distance 5 from z) without reaching n0/n4 (distance 15/20).
        let mut found = t.near(&p(25.0), dist, 30.0);
        found.sort();
        let mut expected = vec![n1, n2, n3];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_is_ancestor_and_leaves() {
        let (t, [n0, n1, n2, n3, n4]) = fixture();
        assert!(t.is_ancestor(n0, n2));
        assert!(t.is_ancestor(n1, n2));
        assert!(!t.is_ancestor(n2, n1));
        let mut leaves = t.leaves();
        leaves.sort();
        let mut expected = vec![n2, n3, n4];
        expected.sort();
        assert_eq!(leaves, expected);
    }
}
