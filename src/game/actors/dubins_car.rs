// SPDX-License-Identifier: BSD-3-Clause

use rand::{Rng, RngCore};
use std::f64::consts::PI;

use super::dubins_path::DubinsPath;
use crate::{
    error::ActorError,
    game::{
        actor::{Actor, SteerOutcome},
        point::Point,
        vertex::ActorState,
    },
};

/// A planar Dubins vehicle: unit speed, bounded turning radius, terminal
/// heading drawn at random on each `steer` call.
///
/// Grounded on `rufus.actors.DubinsCar` (`original_source/`), which calls
/// out to the external `dubins` package for the shortest-path computation
/// itself; this crate's equivalent is [`super::dubins_path`].
#[derive(Debug)]
pub struct DubinsCar {
    dt: f64,
    turn_radius: f64,
}

impl DubinsCar {
    pub fn new(dt: f64, turn_radius: f64) -> Result<Self, ActorError> {
        if dt <= 0.0 {
            return Err(ActorError::InvalidTimeStep { dt });
        }
        if turn_radius <= 0.0 {
            return Err(ActorError::InvalidTurnRadius { radius: turn_radius });
        }
        Ok(DubinsCar { dt, turn_radius })
    }
}

impl Actor for DubinsCar {
    // NOTE: the random terminal heading means repeated calls for the same
    // (start, end) produce different trajectories — matches
    // `rufus.actors.DubinsCar.steer`, which samples `theta ~ U(-pi, pi]`
    // rather than accepting a caller-supplied terminal heading.
    fn steer(
        &self,
        start: &Point,
        end: &Point,
        state: &ActorState,
        rng: &mut dyn RngCore,
    ) -> SteerOutcome {
        let start_heading = state.heading().expect("DubinsCar requires Heading state");
        let end_heading = rng.random_range(-PI..=PI);

        let q0 = (start[0], start[1], start_heading);
        let q1 = (end[0], end[1], end_heading);

        let Some(path) = DubinsPath::shortest(q0, q1, self.turn_radius) else {
            return SteerOutcome::Reached {
                state: ActorState::Heading(start_heading),
                trajectory: vec![start.clone()],
            };
        };

        let samples = path.sample_many(self.dt);
        let trajectory: Vec<Point> = samples.iter().map(|(x, y, _)| Point::new(vec![*x, *y])).collect();
        let final_heading = samples.last().map(|(_, _, th)| *th).unwrap_or(start_heading);

        SteerOutcome::Reached {
            state: ActorState::Heading(final_heading),
            trajectory,
        }
    }

    // Euclidean distance heuristic (spec.md §9): cheap, ignores curvature,
    // admissible lower bound on the true Dubins path length.
    fn time(&self, start: &Point, end: &Point, _state: &ActorState) -> f64 {
        start.distance(end)
    }

    fn dt(&self) -> f64 {
        self.dt
    }
}
