// SPDX-License-Identifier: BSD-3-Clause

use rand::RngCore;

use crate::{
    error::ActorError,
    game::{
        actor::{Actor, SteerOutcome},
        point::Point,
        vertex::ActorState,
    },
};

/// An infinitely maneuverable actor moving at a fixed speed.
///
/// Grounded on `rufus.actors.LinearActor` / `rufus.game.LinearActor`
/// (`original_source/`): produces points `start + s*(k*dt)*û` for
/// `k = 0, 1, ..., floor(||end - start|| / (s*dt))`, where `û` is the unit
/// vector from `start` to `end`. State is empty — this actor is stateless.
#[derive(Debug)]
pub struct LinearActor {
    dt: f64,
    speed: f64,
}

impl LinearActor {
    pub fn new(dt: f64, speed: f64) -> Result<Self, ActorError> {
        if dt <= 0.0 {
            return Err(ActorError::InvalidTimeStep { dt });
        }
        if speed <= 0.0 {
            return Err(ActorError::InvalidSpeed { speed });
        }
        Ok(LinearActor { dt, speed })
    }

    fn sample_count(&self, dist: f64) -> usize {
        (dist / (self.speed * self.dt)).floor() as usize + 1
    }
}

impl Actor for LinearActor {
    fn steer(
        &self,
        start: &Point,
        end: &Point,
        _state: &ActorState,
        _rng: &mut dyn RngCore,
    ) -> SteerOutcome {
        let dist = start.distance(end);
        if dist == 0.0 {
            return SteerOutcome::Reached {
                state: ActorState::Stateless,
                trajectory: vec![start.clone()],
            };
        }

        let unit: Vec<f64> = (0..start.dim()).map(|i| (end[i] - start[i]) / dist).collect();
        let n = self.sample_count(dist);

        let trajectory = (0..n)
            .map(|k| {
                let d = self.speed * (k as f64 * self.dt);
                Point::new((0..start.dim()).map(|i| start[i] + d * unit[i]).collect())
            })
            .collect();

        SteerOutcome::Reached {
            state: ActorState::Stateless,
            trajectory,
        }
    }

    // NOTE: this is the number of samples `steer` would produce, not raw
    // Euclidean distance. `original_source`'s `Actor` base class defaults
    // `time` to `len(steer(...).trajectory)`, and the linear-actor scenario
    // in spec.md §8 (`time((0,0),(100,100)) == 142`) matches that, not the
    // Euclidean distance (≈141.42). Computing it directly avoids the cost
    // of running `steer` (and the RNG it would otherwise require) just to
    // measure a cost heuristic.
    fn time(&self, start: &Point, end: &Point, _state: &ActorState) -> f64 {
        let dist = start.distance(end);
        if dist == 0.0 {
            1.0
        } else {
            self.sample_count(dist) as f64
        }
    }

    fn dt(&self) -> f64 {
        self.dt
    }
}
