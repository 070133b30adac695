// SPDX-License-Identifier: BSD-3-Clause

//! The dual-tree, capture-aware planner — component D of spec.md §2.
//!
//! Grounded on `rufus.solver.Solver` (`original_source/`) for the overall
//! `extend`/`solve` shape, and on `oxmpl::geometric::planners::rrt_star`
//! for the choose-parent/rewire idiom in Rust (arena handles, `find
//! neighbours then pick cheapest` loop).

pub mod capture;

use log::{debug, info, trace};
use rand::Rng;

use crate::{
    error::PlannerError,
    game::{
        actor::{Actor, SteerOutcome},
        point::Point,
        region::Region,
        vertex::Vertex,
    },
    planner::capture::CapturePredicate,
    solution::Solution,
    tree::{NodeHandle, Tree},
};

/// Owns both trees and the parameters needed to grow and couple them.
///
/// Generic over the evader's actor type, the pursuer's actor type, and the
/// capture predicate, mirroring how `oxmpl`'s planners are generic over
/// `StateSpace`/`Goal` implementations rather than boxing them.
#[derive(Debug)]
pub struct Planner<Ae: Actor, Ap: Actor, C: CapturePredicate> {
    region: Region,
    evader_actor: Ae,
    pursuer_actor: Ap,
    capture: C,
    gamma: f64,
    dt: f64,
}

impl<Ae: Actor, Ap: Actor, C: CapturePredicate> Planner<Ae, Ap, C> {
    /// Per spec.md §6: `dt > 0`, shared by both actors — `time_to_root`'s
    /// raw sample counts are only comparable across the two trees when both
    /// actors sample at the same period, so that is checked here rather
    /// than trusted.
    pub fn new(
        dt: f64,
        region: Region,
        evader_actor: Ae,
        pursuer_actor: Ap,
        capture: C,
        gamma: f64,
    ) -> Result<Self, PlannerError> {
        if dt <= 0.0 {
            return Err(PlannerError::InvalidTimeStep { dt });
        }
        if gamma <= 0.0 {
            return Err(PlannerError::InvalidGamma { gamma });
        }
        if evader_actor.dt() != dt {
            return Err(PlannerError::MismatchedActorTimeStep {
                planner_dt: dt,
                actor_dt: evader_actor.dt(),
            });
        }
        if pursuer_actor.dt() != dt {
            return Err(PlannerError::MismatchedActorTimeStep {
                planner_dt: dt,
                actor_dt: pursuer_actor.dt(),
            });
        }
        Ok(Planner {
            region,
            evader_actor,
            pursuer_actor,
            capture,
            gamma,
            dt,
        })
    }

    /// The sampling period shared by both actors.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// One RRT*-style choose-parent-then-rewire extension of `tree` toward
    /// `z`, per spec.md §4.4. Returns the new vertex's handle and its
    /// cumulative time-to-root, or `None` if `z` is unreachable from every
    /// candidate parent.
    fn extend<A: Actor>(
        tree: &mut Tree,
        z: &Point,
        actor: &A,
        gamma: f64,
        rng: &mut dyn rand::RngCore,
    ) -> Option<(NodeHandle, u64)> {
        let cost = |a: &Point, b: &Point, s: &crate::game::vertex::ActorState| actor.time(a, b, s);

        let v_nn = tree.nearest_neighbor(z, cost);
        let nn_vertex = tree.get(v_nn).unwrap().clone();
        let (state_nn, traj_nn) = match actor.steer(&nn_vertex.loc, z, &nn_vertex.state, rng) {
            SteerOutcome::Reached { state, trajectory } => (state, trajectory),
            SteerOutcome::Unsteerable => return None,
        };

        let near = tree.near(z, cost, gamma);

        let mut v_min = v_nn;
        let mut best_state = state_nn;
        let mut best_traj = traj_nn;
        let mut cost_min = tree.time_to_root(v_nn) + best_traj.len() as u64;

        for &v in &near {
            if v == v_nn {
                continue;
            }
            let candidate = tree.get(v).unwrap().clone();
            if let SteerOutcome::Reached { state, trajectory } =
                actor.steer(&candidate.loc, z, &candidate.state, rng)
            {
                let candidate_cost = tree.time_to_root(v) + trajectory.len() as u64;
                if candidate_cost < cost_min {
                    v_min = v;
                    cost_min = candidate_cost;
                    best_state = state;
                    best_traj = trajectory;
                }
            }
        }

        let v_new = tree.insert(v_min, Vertex::new(z.clone(), best_state, best_traj));
        let t_new = tree.time_to_root(v_new);
        let new_vertex = tree.get(v_new).unwrap().clone();

        for &v in &near {
            if v == v_min {
                continue;
            }
            let Some(existing) = tree.get(v) else {
                continue;
            };
            let existing_loc = existing.loc.clone();
            if let SteerOutcome::Reached { state, trajectory } =
                actor.steer(&new_vertex.loc, &existing_loc, &new_vertex.state, rng)
            {
                if tree.time_to_root(v) > t_new + trajectory.len() as u64 {
                    tree.reparent(v, v_new);
                    tree.set_vertex(v, Vertex::new(existing_loc, state, trajectory));
                }
            }
        }

        Some((v_new, t_new))
    }

    /// Grows both trees for `n_iter` iterations, pruning capture-dominated
    /// evader subtrees as they're discovered. See spec.md §4.4 for the
    /// iteration contract.
    pub fn solve(
        &self,
        pursuer_init: Vertex,
        evader_init: Vertex,
        n_iter: u64,
        rng: &mut impl Rng,
        mut progress: Option<&mut dyn FnMut(u64, u64)>,
    ) -> Solution {
        let mut g_e = Tree::new(evader_init);
        let mut g_p = Tree::new(pursuer_init);

        info!("starting pursuit-evasion solve for {n_iter} iterations, dt={}", self.dt);

        for i in 0..n_iter {
            let z_e = self.region.sample(rng);
            if let Some((v_e_new, t_e)) = Self::extend(&mut g_e, &z_e, &self.evader_actor, self.gamma, rng) {
                let evader_vertex = g_e.get(v_e_new).unwrap().clone();
                let pursuer_cost =
                    |a: &Point, b: &Point, s: &crate::game::vertex::ActorState| self.pursuer_actor.time(a, b, s);
                let ball = g_p.near(&evader_vertex.loc, pursuer_cost, self.gamma);

                for v_p in ball {
                    let pursuer_vertex = g_p.get(v_p).unwrap();
                    if self.capture.capture(pursuer_vertex, &evader_vertex)
                        && g_p.time_to_root(v_p) <= t_e
                    {
                        trace!("pruning evader subtree at iteration {i}: dominated by pursuer node");
                        g_e.remove_subtree(v_e_new);
                        break;
                    }
                }
            }

            let z_p = self.region.sample(rng);
            if let Some((v_p_new, t_p)) = Self::extend(&mut g_p, &z_p, &self.pursuer_actor, self.gamma, rng) {
                let pursuer_vertex = g_p.get(v_p_new).unwrap().clone();
                let pursuer_cost =
                    |a: &Point, b: &Point, s: &crate::game::vertex::ActorState| self.pursuer_actor.time(a, b, s);
                let ball = g_e.near(&pursuer_vertex.loc, pursuer_cost, self.gamma);

                for v_e in ball {
                    let Some(evader_vertex) = g_e.get(v_e) else {
                        continue;
                    };
                    if self.capture.capture(&pursuer_vertex, evader_vertex) && t_p <= g_e.time_to_root(v_e) {
                        trace!("pruning evader subtree at iteration {i}: new pursuer node dominates it");
                        g_e.remove_subtree(v_e);
                    }
                }
            }

            if let Some(cb) = progress.as_deref_mut() {
                cb(i + 1, n_iter);
            }
        }

        debug!(
            "solve finished: evader tree has {} nodes ({:.3}s deepest), pursuer tree has {} nodes ({:.3}s deepest)",
            g_e.len(),
            g_e.leaves().iter().map(|&h| g_e.time_to_root(h)).max().unwrap_or(0) as f64 * self.dt,
            g_p.len(),
            g_p.leaves().iter().map(|&h| g_p.time_to_root(h)).max().unwrap_or(0) as f64 * self.dt,
        );

        Solution::new(g_e, g_p)
    }
}
