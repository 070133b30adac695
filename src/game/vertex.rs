// SPDX-License-Identifier: BSD-3-Clause

use serde::{Deserialize, Serialize};

use crate::game::point::Point;

/// Non-positional kinematic state carried at a vertex.
///
/// `Stateless` is used by the [`crate::game::actors::linear::LinearActor`];
/// `Heading` carries the 2D Dubins-car heading or the 3D Dubins-airplane
/// azimuth. Per spec.md §4.1, the airplane's elevation (flight-path) angle
/// is an invariant of zero at every committed vertex, so it is never stored
/// here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActorState {
    Stateless,
    Heading(f64),
}

impl ActorState {
    pub fn heading(&self) -> Option<f64> {
        match self {
            ActorState::Stateless => None,
            ActorState::Heading(h) => Some(*h),
        }
    }
}

/// The atomic node payload of a trajectory [`crate::tree::Tree`].
///
/// See spec.md §3 for the full set of invariants: `trajectory[0]` equals
/// the parent's `loc` within tolerance, `trajectory[-1]` equals `loc`, and
/// root vertices carry an empty trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub loc: Point,
    pub state: ActorState,
    pub trajectory: Vec<Point>,
}

impl Vertex {
    pub fn root(loc: Point, state: ActorState) -> Self {
        Vertex {
            loc,
            state,
            trajectory: Vec::new(),
        }
    }

    pub fn new(loc: Point, state: ActorState, trajectory: Vec<Point>) -> Self {
        Vertex {
            loc,
            state,
            trajectory,
        }
    }
}
