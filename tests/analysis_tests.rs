// SPDX-License-Identifier: BSD-3-Clause

use oxpeg::{
    analysis::Analysis,
    game::{region::Region, vertex::ActorState},
    solution::Solution,
    tree::Tree,
    Point, Vertex,
};

// Mirrors rufus.test.analysis_test.TestGameSolution's fixture
// (original_source/): a 10-node evader tree with three target regions
// exercising pass-through, endpoint, and non-leaf-endpoint reachability.
fn fixture() -> Solution {
    fn p(x: f64, y: f64) -> Point {
        Point::new(vec![x, y])
    }

    let mut g = Tree::new(Vertex::root(p(0.0, 0.0), ActorState::Stateless));

    let n1 = g.insert(
        Tree::ROOT,
        Vertex::new(p(15.0, 15.0), ActorState::Stateless, vec![p(0.0, 0.0), p(5.0, 5.0), p(10.0, 10.0)]),
    );
    let n2 = g.insert(
        n1,
        Vertex::new(
            p(30.0, 45.0),
            ActorState::Stateless,
            vec![p(15.0, 15.0), p(20.0, 25.0), p(25.0, 35.0)],
        ),
    );
    let n3 = g.insert(
        n2,
        Vertex::new(
            p(66.0, 60.0),
            ActorState::Stateless,
            vec![p(30.0, 45.0), p(42.0, 50.0), p(54.0, 55.0)],
        ),
    );
    g.insert(
        n3,
        Vertex::new(
            p(60.0, 90.0),
            ActorState::Stateless,
            vec![p(66.0, 60.0), p(64.0, 70.0), p(62.0, 80.0)],
        ),
    );
    g.insert(
        n3,
        Vertex::new(p(90.0, 60.0), ActorState::Stateless, vec![p(66.0, 60.0), p(78.0, 60.0)]),
    );
    g.insert(
        n2,
        Vertex::new(p(20.0, 75.0), ActorState::Stateless, vec![p(30.0, 45.0), p(25.0, 65.0)]),
    );
    let n7 = g.insert(
        n1,
        Vertex::new(
            p(55.0, 19.0),
            ActorState::Stateless,
            vec![p(15.0, 15.0), p(25.0, 16.0), p(35.0, 17.0), p(45.0, 18.0)],
        ),
    );
    let n8 = g.insert(
        n7,
        Vertex::new(
            p(55.0, 54.0),
            ActorState::Stateless,
            vec![
                p(55.0, 19.0),
                p(55.0, 24.0),
                p(55.0, 29.0),
                p(55.0, 34.0),
                p(55.0, 39.0),
                p(55.0, 44.0),
                p(55.0, 49.0),
            ],
        ),
    );
    g.insert(
        n7,
        Vertex::new(p(75.0, 39.0), ActorState::Stateless, vec![p(55.0, 19.0), p(65.0, 29.0)]),
    );
    let _ = n8;

    // pursuer tree is irrelevant to these queries; reuse the evader tree.
    Solution::new(g.clone(), g)
}

fn target1() -> Region {
    Region::new(Point::new(vec![50.0, 50.0]), Point::new(vec![60.0, 60.0])).unwrap()
}

fn target2() -> Region {
    Region::new(Point::new(vec![20.0, 80.0]), Point::new(vec![50.0, 100.0])).unwrap()
}

fn target3() -> Region {
    Region::new(Point::new(vec![30.0, 10.0]), Point::new(vec![60.0, 30.0])).unwrap()
}

#[test]
fn test_can_reach() {
    let soln = fixture();
    let analysis = Analysis::new(&soln);
    assert!(analysis.can_reach(&target1()));
    assert!(!analysis.can_reach(&target2()));
    assert!(analysis.can_reach(&target3()));
}

#[test]
fn test_all_trajectories_to_target() {
    let soln = fixture();
    let analysis = Analysis::new(&soln);

    let mut results = analysis.all_trajectories_to_target(&target1());
    assert_eq!(results.len(), 2);
    results.sort_by(|a, b| a.0.last().unwrap().loc[1].partial_cmp(&b.0.last().unwrap().loc[1]).unwrap());

    let (path, trajectory) = &results[0];
    assert_eq!(path.len(), 4);
    assert_eq!(path[3].loc, Point::new(vec![55.0, 54.0]));
    assert_eq!(trajectory.len(), 15);
    assert_eq!(trajectory.last().unwrap(), &Point::new(vec![55.0, 54.0]));

    let (path, trajectory) = &results[1];
    assert_eq!(path.len(), 4);
    assert_eq!(path[3].loc, Point::new(vec![66.0, 60.0]));
    assert_eq!(trajectory.len(), 10);
    assert_eq!(trajectory.last().unwrap(), &Point::new(vec![66.0, 60.0]));

    assert!(analysis.all_trajectories_to_target(&target2()).is_empty());

    let results3 = analysis.all_trajectories_to_target(&target3());
    assert_eq!(results3.len(), 1);
    let (path, trajectory) = &results3[0];
    assert_eq!(path.len(), 3);
    assert_eq!(path[2].loc, Point::new(vec![55.0, 19.0]));
    assert_eq!(trajectory.len(), 8);
}

#[test]
fn test_min_trajectory_to_target() {
    let soln = fixture();
    let analysis = Analysis::new(&soln);

    let (path, _) = analysis.min_trajectory_to_target(&target1()).unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path[3].loc, Point::new(vec![66.0, 60.0]));

    assert!(analysis.min_trajectory_to_target(&target2()).is_none());

    let (path, _) = analysis.min_trajectory_to_target(&target3()).unwrap();
    assert_eq!(path.len(), 3);
}

#[test]
fn test_max_time_trajectory() {
    let soln = fixture();
    let analysis = Analysis::new(&soln);

    let (path, trajectory) = analysis.max_time_trajectory().unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path[3].loc, Point::new(vec![55.0, 54.0]));
    assert_eq!(trajectory.len(), 15);
}
