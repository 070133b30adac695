// SPDX-License-Identifier: BSD-3-Clause

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use oxpeg::{
    game::{
        actors::{dubins_car::DubinsCar, linear::LinearActor},
        region::Region,
        vertex::ActorState,
    },
    planner::capture::UsablePartCapture,
    Planner, Point, Vertex,
};

// Mirrors examples/homicidal_chauffeur.py (original_source/): a slower,
// omnidirectional evader against a faster, turn-constrained Dubins-car
// pursuer over a square game space.
fn build_planner() -> Planner<LinearActor, DubinsCar, UsablePartCapture> {
    let region = Region::new(Point::new(vec![0.0, 0.0]), Point::new(vec![100.0, 100.0])).unwrap();
    let evader = LinearActor::new(0.1, 3.0).unwrap();
    let pursuer = DubinsCar::new(0.1, 10.0).unwrap();
    let capture = UsablePartCapture::new(5.0);
    Planner::new(0.1, region, evader, pursuer, capture, 100.0).unwrap()
}

fn assert_tree_consistency(tree: &oxpeg::tree::Tree) {
    for h in tree.node_handles() {
        if let Some(parent) = tree.parent_of(h) {
            let v = tree.get(h).unwrap();
            assert_eq!(
                tree.time_to_root(h),
                tree.time_to_root(parent) + v.trajectory.len() as u64,
                "time_to_root invariant broken at handle {h}"
            );
        }
    }
}

#[test]
fn test_solve_grows_both_trees_and_stays_consistent() {
    let planner = build_planner();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let p_init = Vertex::root(Point::new(vec![0.0, 0.0]), ActorState::Heading(std::f64::consts::FRAC_PI_4));
    let e_init = Vertex::root(Point::new(vec![50.0, 50.0]), ActorState::Stateless);

    let solution = planner.solve(p_init, e_init, 60, &mut rng, None);

    assert!(solution.evader_tree().len() >= 1);
    assert!(solution.pursuer_tree().len() >= 1);
    assert_tree_consistency(solution.evader_tree());
    assert_tree_consistency(solution.pursuer_tree());
}

#[test]
fn test_solve_invokes_progress_callback() {
    let planner = build_planner();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let p_init = Vertex::root(Point::new(vec![0.0, 0.0]), ActorState::Heading(0.0));
    let e_init = Vertex::root(Point::new(vec![50.0, 50.0]), ActorState::Stateless);

    let mut calls = Vec::new();
    let mut cb = |i: u64, n: u64| calls.push((i, n));
    planner.solve(p_init, e_init, 10, &mut rng, Some(&mut cb));

    assert_eq!(calls.len(), 10);
    assert_eq!(calls.last(), Some(&(10, 10)));
}

#[test]
fn test_rejects_invalid_gamma() {
    let region = Region::new(Point::new(vec![0.0, 0.0]), Point::new(vec![100.0, 100.0])).unwrap();
    let evader = LinearActor::new(0.1, 3.0).unwrap();
    let pursuer = DubinsCar::new(0.1, 10.0).unwrap();
    let capture = UsablePartCapture::new(5.0);
    assert!(Planner::new(0.1, region, evader, pursuer, capture, 0.0).is_err());
}

#[test]
fn test_rejects_invalid_dt() {
    let region = Region::new(Point::new(vec![0.0, 0.0]), Point::new(vec![100.0, 100.0])).unwrap();
    let evader = LinearActor::new(0.1, 3.0).unwrap();
    let pursuer = DubinsCar::new(0.1, 10.0).unwrap();
    let capture = UsablePartCapture::new(5.0);
    assert!(Planner::new(0.0, region, evader, pursuer, capture, 100.0).is_err());
}
