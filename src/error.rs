// SPDX-License-Identifier: BSD-3-Clause

use std::{error, fmt};

/// Errors returned while constructing a [`crate::game::Region`].
#[derive(Debug, PartialEq)]
pub enum RegionError {
    /// The length of `lower` does not match the length of `upper`.
    DimensionMismatch { lower: usize, upper: usize },
    /// A lower bound is greater than or equal to its corresponding upper bound.
    InvalidBound { lower: f64, upper: f64 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { lower, upper } => write!(
                f,
                "lower bound has {lower} dimensions but upper bound has {upper}."
            ),
            Self::InvalidBound { lower, upper } => {
                write!(f, "lower bound {lower} is not less than upper bound {upper}.")
            }
        }
    }
}
impl error::Error for RegionError {}

/// Errors returned while constructing an [`crate::game::Actor`] implementation.
#[derive(Debug, PartialEq)]
pub enum ActorError {
    /// The time step `dt` was not strictly positive.
    InvalidTimeStep { dt: f64 },
    /// A speed parameter was not strictly positive.
    InvalidSpeed { speed: f64 },
    /// A turning radius was not strictly positive.
    InvalidTurnRadius { radius: f64 },
    /// A bank-angle or flight-path-angle bound was not strictly positive.
    InvalidAngleBound { angle: f64 },
}

impl fmt::Display for ActorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeStep { dt } => write!(f, "time step {dt} must be strictly positive."),
            Self::InvalidSpeed { speed } => write!(f, "speed {speed} must be strictly positive."),
            Self::InvalidTurnRadius { radius } => {
                write!(f, "turning radius {radius} must be strictly positive.")
            }
            Self::InvalidAngleBound { angle } => {
                write!(f, "angle bound {angle} must be strictly positive.")
            }
        }
    }
}
impl error::Error for ActorError {}

/// Errors returned while constructing a [`crate::planner::Planner`].
#[derive(Debug, PartialEq)]
pub enum PlannerError {
    /// The time step `dt` was not strictly positive.
    InvalidTimeStep { dt: f64 },
    /// The scaling constant `gamma` was not strictly positive.
    InvalidGamma { gamma: f64 },
    /// An actor's own sampling period disagrees with the planner's `dt`.
    MismatchedActorTimeStep { planner_dt: f64, actor_dt: f64 },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeStep { dt } => write!(f, "time step {dt} must be strictly positive."),
            Self::InvalidGamma { gamma } => write!(f, "gamma {gamma} must be strictly positive."),
            Self::MismatchedActorTimeStep { planner_dt, actor_dt } => write!(
                f,
                "actor time step {actor_dt} does not match planner time step {planner_dt}."
            ),
        }
    }
}
impl error::Error for PlannerError {}
