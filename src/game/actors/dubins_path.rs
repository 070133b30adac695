// SPDX-License-Identifier: BSD-3-Clause

//! Closed-form Dubins shortest-path primitive.
//!
//! spec.md §1 treats third-party Dubins-path geometry as an *opaque
//! steering primitive*; `original_source/`'s `rufus.actors` calls out to
//! the external `dubins` package (a binding over Andrew Walker's public
//! domain `dubins-curves` C library) for exactly this. No pack example
//! vendors or depends on a Dubins-path crate, so this module reimplements
//! the same standard CSC/CCC formulas that library uses, kept private to
//! `game::actors` and used by both [`super::dubins_car`] and
//! [`super::dubins_airplane`].

use std::f64::consts::PI;

fn mod2pi(theta: f64) -> f64 {
    theta.rem_euclid(2.0 * PI)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    L,
    S,
    R,
}

struct Candidate {
    params: [f64; 3],
    types: [Segment; 3],
}

fn lsl(d: f64, alpha: f64, beta: f64) -> Option<Candidate> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let p_sq = 2.0 + d * d - 2.0 * (alpha - beta).cos() + 2.0 * d * (sa - sb);
    if p_sq < 0.0 {
        return None;
    }
    let tmp = (cb - ca).atan2(d + sa - sb);
    let t = mod2pi(-alpha + tmp);
    let p = p_sq.sqrt();
    let q = mod2pi(beta - tmp);
    Some(Candidate {
        params: [t, p, q],
        types: [Segment::L, Segment::S, Segment::L],
    })
}

fn rsr(d: f64, alpha: f64, beta: f64) -> Option<Candidate> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let p_sq = 2.0 + d * d - 2.0 * (alpha - beta).cos() - 2.0 * d * (sa - sb);
    if p_sq < 0.0 {
        return None;
    }
    let tmp = (ca - cb).atan2(d - sa + sb);
    let t = mod2pi(alpha - tmp);
    let p = p_sq.sqrt();
    let q = mod2pi(-beta + tmp);
    Some(Candidate {
        params: [t, p, q],
        types: [Segment::R, Segment::S, Segment::R],
    })
}

fn lsr(d: f64, alpha: f64, beta: f64) -> Option<Candidate> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let p_sq = -2.0 + d * d + 2.0 * (alpha - beta).cos() + 2.0 * d * (sa + sb);
    if p_sq < 0.0 {
        return None;
    }
    let p = p_sq.sqrt();
    let tmp = (-ca - cb).atan2(d + sa + sb) - (-2.0_f64).atan2(p);
    let t = mod2pi(-alpha + tmp);
    let q = mod2pi(-mod2pi(beta) + tmp);
    Some(Candidate {
        params: [t, p, q],
        types: [Segment::L, Segment::S, Segment::R],
    })
}

fn rsl(d: f64, alpha: f64, beta: f64) -> Option<Candidate> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let p_sq = d * d - 2.0 + 2.0 * (alpha - beta).cos() - 2.0 * d * (sa + sb);
    if p_sq < 0.0 {
        return None;
    }
    let p = p_sq.sqrt();
    let tmp = (ca + cb).atan2(d - sa - sb) - 2.0_f64.atan2(p);
    let t = mod2pi(alpha - tmp);
    let q = mod2pi(beta - tmp);
    Some(Candidate {
        params: [t, p, q],
        types: [Segment::R, Segment::S, Segment::L],
    })
}

fn rlr(d: f64, alpha: f64, beta: f64) -> Option<Candidate> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let tmp = (6.0 - d * d + 2.0 * (alpha - beta).cos() + 2.0 * d * (sa - sb)) / 8.0;
    if tmp.abs() > 1.0 {
        return None;
    }
    let p = mod2pi(2.0 * PI - tmp.acos());
    let t = mod2pi(alpha - (ca - cb).atan2(d - sa + sb) + p / 2.0);
    let q = mod2pi(alpha - beta - t + p);
    Some(Candidate {
        params: [t, p, q],
        types: [Segment::R, Segment::L, Segment::R],
    })
}

fn lrl(d: f64, alpha: f64, beta: f64) -> Option<Candidate> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let tmp = (6.0 - d * d + 2.0 * (alpha - beta).cos() + 2.0 * d * (sb - sa)) / 8.0;
    if tmp.abs() > 1.0 {
        return None;
    }
    let p = mod2pi(2.0 * PI - tmp.acos());
    let t = mod2pi(-alpha - (ca - cb).atan2(d + sa - sb) + p / 2.0);
    let q = mod2pi(mod2pi(beta) - alpha - t + p);
    Some(Candidate {
        params: [t, p, q],
        types: [Segment::L, Segment::R, Segment::L],
    })
}

/// A computed shortest Dubins path between two planar configurations.
pub struct DubinsPath {
    qi: (f64, f64, f64),
    rho: f64,
    types: [Segment; 3],
    params: [f64; 3],
}

impl DubinsPath {
    /// Computes the shortest path from `start` to `end` (each `(x, y,
    /// theta)`) for a vehicle with minimum turning radius `rho`.
    ///
    /// Returns `None` when `start` and `end` coincide (degenerate,
    /// zero-length path).
    pub fn shortest(start: (f64, f64, f64), end: (f64, f64, f64), rho: f64) -> Option<Self> {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let d = (dx * dx + dy * dy).sqrt() / rho;
        if d < 1e-12 {
            return None;
        }

        let theta = mod2pi(dy.atan2(dx));
        let alpha = mod2pi(start.2 - theta);
        let beta = mod2pi(end.2 - theta);

        let candidates = [
            lsl(d, alpha, beta),
            rsr(d, alpha, beta),
            lsr(d, alpha, beta),
            rsl(d, alpha, beta),
            rlr(d, alpha, beta),
            lrl(d, alpha, beta),
        ];

        let best = candidates.into_iter().flatten().min_by(|a, b| {
            let la: f64 = a.params.iter().sum();
            let lb: f64 = b.params.iter().sum();
            la.partial_cmp(&lb).unwrap()
        })?;

        Some(DubinsPath {
            qi: start,
            rho,
            types: best.types,
            params: best.params,
        })
    }

    /// Total arc length of the path, in the same units as `start`/`end`.
    pub fn length(&self) -> f64 {
        self.params.iter().sum::<f64>() * self.rho
    }

    fn segment(t: f64, q: (f64, f64, f64), seg_type: Segment) -> (f64, f64, f64) {
        let (x, y, th) = q;
        match seg_type {
            Segment::L => (
                x + (th + t).sin() - th.sin(),
                y - (th + t).cos() + th.cos(),
                th + t,
            ),
            Segment::R => (
                x - (th - t).sin() + th.sin(),
                y + (th - t).cos() - th.cos(),
                th - t,
            ),
            Segment::S => (x + t * th.cos(), y + t * th.sin(), th),
        }
    }

    /// The configuration reached after traveling arc length `s` along the
    /// path (`s` clamped to `[0, length()]`).
    pub fn sample(&self, s: f64) -> (f64, f64, f64) {
        let total_norm: f64 = self.params.iter().sum();
        let tprime = (s / self.rho).clamp(0.0, total_norm);
        let q0 = (0.0, 0.0, self.qi.2);
        let q1 = Self::segment(self.params[0], q0, self.types[0]);
        let q2 = Self::segment(self.params[1], q1, self.types[1]);

        let q = if tprime < self.params[0] {
            Self::segment(tprime, q0, self.types[0])
        } else if tprime < self.params[0] + self.params[1] {
            Self::segment(tprime - self.params[0], q1, self.types[1])
        } else {
            Self::segment(tprime - self.params[0] - self.params[1], q2, self.types[2])
        };

        (
            q.0 * self.rho + self.qi.0,
            q.1 * self.rho + self.qi.1,
            mod2pi(q.2),
        )
    }

    /// Samples the path at a fixed step size, starting at `s=0`. The last
    /// sample is within one `step` of the path's end.
    pub fn sample_many(&self, step: f64) -> Vec<(f64, f64, f64)> {
        let total = self.length();
        let n = (total / step).floor() as usize;
        (0..=n).map(|k| self.sample(k as f64 * step)).collect()
    }
}
