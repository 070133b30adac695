// SPDX-License-Identifier: BSD-3-Clause

//! Concrete [`super::Actor`] implementations, per spec.md §4.1.

mod dubins_path;

pub mod dubins_airplane;
pub mod dubins_car;
pub mod linear;

pub use dubins_airplane::DubinsAirplane;
pub use dubins_car::DubinsCar;
pub use linear::LinearActor;
