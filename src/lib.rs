// SPDX-License-Identifier: BSD-3-Clause

//! Sampling-based approximation of two-player pursuit-evasion differential
//! games via capture-aware, dual-tree RRT*.
//!
//! The crate is organized around the components of the underlying
//! algorithm: a game [`Region`] and pluggable [`Actor`] kinematics, a
//! trajectory [`tree::Tree`], the dual-tree [`planner::Planner`] that grows
//! and prunes it, and read-only [`analysis::Analysis`] over the resulting
//! [`solution::Solution`].

pub mod analysis;
pub mod error;
pub mod game;
pub mod planner;
pub mod solution;
pub mod tree;

pub use game::{Actor, Point, Region, SteerOutcome, Vertex};
pub use planner::{capture::CapturePredicate, Planner};
pub use solution::Solution;
