// SPDX-License-Identifier: BSD-3-Clause

use crate::game::vertex::Vertex;

/// A pure predicate over `(pursuer_vertex, evader_vertex)` deciding whether
/// the pursuer has captured the evader.
///
/// Mirrors `oxmpl::base::validity::StateValidityChecker` in spirit: a
/// single-method trait standing in for a caller-supplied boolean test, with
/// a blanket impl so ordinary closures work directly. Direction matters —
/// the pursuer vertex is always the first argument (spec.md §4.4).
pub trait CapturePredicate {
    fn capture(&self, pursuer: &Vertex, evader: &Vertex) -> bool;
}

impl<F> CapturePredicate for F
where
    F: Fn(&Vertex, &Vertex) -> bool,
{
    fn capture(&self, pursuer: &Vertex, evader: &Vertex) -> bool {
        self(pursuer, evader)
    }
}

/// The canonical "usable part" capture condition from spec.md §4.4:
/// distance below `capture_radius`, and the evader lying within the
/// pursuer's forward half-plane (bearing to evader within `angular_tolerance`
/// of the pursuer's heading). Forbids unphysical rear-impact captures.
///
/// Grounded on `examples/homicidal_chauffeur.py`'s `check_capture`
/// (`original_source/`).
#[derive(Debug)]
pub struct UsablePartCapture {
    pub capture_radius: f64,
    pub angular_tolerance: f64,
}

impl UsablePartCapture {
    /// `angular_tolerance` defaults to π — the whole forward half-plane.
    pub fn new(capture_radius: f64) -> Self {
        UsablePartCapture {
            capture_radius,
            angular_tolerance: std::f64::consts::PI,
        }
    }

    pub fn with_angular_tolerance(capture_radius: f64, angular_tolerance: f64) -> Self {
        UsablePartCapture {
            capture_radius,
            angular_tolerance,
        }
    }
}

impl CapturePredicate for UsablePartCapture {
    fn capture(&self, pursuer: &Vertex, evader: &Vertex) -> bool {
        if pursuer.loc.distance(&evader.loc) >= self.capture_radius {
            return false;
        }

        let Some(heading) = pursuer.state.heading() else {
            // Stateless pursuers have no notion of "pointing at" — distance
            // alone decides.
            return true;
        };

        let dy = evader.loc[1] - pursuer.loc[1];
        let dx = evader.loc[0] - pursuer.loc[0];
        let bearing = dy.atan2(dx);
        let diff = (bearing - heading + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI)
            - std::f64::consts::PI;
        diff.abs() < self.angular_tolerance
    }
}
