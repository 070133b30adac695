// SPDX-License-Identifier: BSD-3-Clause

use rand::RngCore;

use crate::game::{point::Point, vertex::ActorState};

/// The result of a [`Actor::steer`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SteerOutcome {
    /// A kinematically feasible trajectory was found.
    Reached {
        state: ActorState,
        trajectory: Vec<Point>,
    },
    /// The actor cannot reach `end` from `start` under its kinematics (see
    /// the Dubins-airplane clearance rule in spec.md §4.1).
    Unsteerable,
}

/// Polymorphic kinematic model, as described in spec.md §4.1.
///
/// Mirrors `oxmpl::base::space::StateSpace` in spirit (a small trait with
/// closed variants that planners are generic over), but separates movement
/// (`steer`/`time`) from the positional containment concerns that
/// `StateSpace` bundles in `oxmpl` — those live on [`crate::game::Region`]
/// instead, per spec.md's component split (A: Region, B: Actor).
///
/// `rng` is accepted as `&mut dyn RngCore` rather than a generic parameter
/// so that `Actor` stays object-safe; `rand::Rng`'s extension methods are
/// blanket-implemented for any `RngCore`, so callers still get the usual
/// `gen_range`-style ergonomics.
pub trait Actor {
    /// Kinematically feasible trajectory from `start` to `end`, sampled at
    /// this actor's time step.
    ///
    /// # Postconditions (on `Reached`)
    ///
    /// `trajectory[0]` is `start`; `trajectory.last()` is within one
    /// step-length of `end`.
    fn steer(
        &self,
        start: &Point,
        end: &Point,
        state: &ActorState,
        rng: &mut dyn RngCore,
    ) -> SteerOutcome;

    /// A non-negative cost estimate used for nearest-neighbor and ball-radius
    /// tests. Need not equal the length of `steer(...)`'s trajectory — for
    /// curvature-constrained actors it is a Euclidean lower-bound heuristic
    /// (spec.md §9).
    fn time(&self, start: &Point, end: &Point, state: &ActorState) -> f64;

    /// The sampling period used by `steer`.
    fn dt(&self) -> f64;
}
