//! Graph search integration tests on mazes.

use classic_search::graph::{astar, astar_observed, bfs, bfs_observed, dfs, LogObserver, RecordingObserver};
use classic_search::problems::{euclidean_distance, manhattan_distance, Maze, MazeLocation};

const WINDING: &str = "\
S.X..
..X.X
.X...
.X.X.
...XG";

fn loc(row: usize, column: usize) -> MazeLocation {
    MazeLocation::new(row, column)
}

/// Consecutive path entries are maze neighbours.
fn assert_walkable(maze: &Maze, path: &[MazeLocation]) {
    assert_eq!(path.first(), Some(&maze.start()));
    assert_eq!(path.last(), Some(&maze.goal()));
    for pair in path.windows(2) {
        assert!(
            maze.successors(&pair[0]).contains(&pair[1]),
            "{} -> {} is not a move",
            pair[0],
            pair[1]
        );
    }
}

// =============================================================================
// Fixed maze
// =============================================================================

#[test]
fn test_bfs_finds_shortest_route() {
    let maze: Maze = WINDING.parse().unwrap();
    let solution = bfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l)).unwrap();

    let expected = vec![
        loc(0, 0),
        loc(1, 0),
        loc(2, 0),
        loc(3, 0),
        loc(4, 0),
        loc(4, 1),
        loc(4, 2),
        loc(3, 2),
        loc(2, 2),
        loc(2, 3),
        loc(2, 4),
        loc(3, 4),
        loc(4, 4),
    ];
    assert_eq!(solution.path(), expected);
    assert_eq!(solution.depth(), 12);
    assert_eq!(solution.cost(), 12.0);
}

#[test]
fn test_dfs_finds_a_route() {
    let maze: Maze = WINDING.parse().unwrap();
    let solution = dfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l)).unwrap();

    let path = solution.path();
    assert_walkable(&maze, &path);
    assert!(path.len() >= 13);
}

#[test]
fn test_astar_matches_bfs() {
    let maze: Maze = WINDING.parse().unwrap();
    let goal = maze.goal();

    let solution = astar(
        maze.start(),
        |l| maze.goal_test(l),
        |l| maze.successors(l),
        manhattan_distance(goal),
    )
    .unwrap();
    assert_eq!(solution.cost(), 12.0);
    assert_walkable(&maze, &solution.path());

    let solution = astar(
        maze.start(),
        |l| maze.goal_test(l),
        |l| maze.successors(l),
        euclidean_distance(goal),
    )
    .unwrap();
    assert_eq!(solution.cost(), 12.0);
}

#[test]
fn test_marked_route_renders() {
    let mut maze: Maze = WINDING.parse().unwrap();
    let path = bfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l))
        .unwrap()
        .path();

    maze.mark(&path);
    let rendered = maze.to_string();
    assert_eq!(rendered.matches('*').count(), 11);
    assert_eq!(rendered.lines().next(), Some("S X  "));

    maze.clear(&path);
    assert_eq!(maze.to_string().matches('*').count(), 0);
}

#[test]
fn test_walled_off_goal() {
    let maze: Maze = "S.X\n..X\nXXG".parse().unwrap();

    assert!(dfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l)).is_none());
    assert!(bfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l)).is_none());
    assert!(astar(
        maze.start(),
        |l| maze.goal_test(l),
        |l| maze.successors(l),
        manhattan_distance(maze.goal())
    )
    .is_none());
}

#[test]
fn test_start_is_goal() {
    let maze: Maze = "S.\n.G".parse().unwrap();
    let solution = bfs(maze.goal(), |l| maze.goal_test(l), |l| maze.successors(l)).unwrap();
    assert_eq!(solution.path(), vec![maze.goal()]);
    assert_eq!(solution.stats().nodes_expanded, 1);
}

// =============================================================================
// Random mazes
// =============================================================================

#[test]
fn test_random_mazes_agree() {
    for seed in 0..25 {
        let maze = Maze::random(12, 12, 0.25, seed, loc(0, 0), loc(11, 11)).unwrap();
        let goal = maze.goal();

        let by_bfs = bfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l));
        let by_dfs = dfs(maze.start(), |l| maze.goal_test(l), |l| maze.successors(l));
        let by_astar = astar(
            maze.start(),
            |l| maze.goal_test(l),
            |l| maze.successors(l),
            manhattan_distance(goal),
        );

        assert_eq!(by_bfs.is_some(), by_dfs.is_some(), "seed {}", seed);
        assert_eq!(by_bfs.is_some(), by_astar.is_some(), "seed {}", seed);

        if let (Some(b), Some(d), Some(a)) = (by_bfs, by_dfs, by_astar) {
            assert_eq!(a.cost(), b.cost(), "seed {}", seed);
            assert!(d.depth() >= b.depth(), "seed {}", seed);
            assert_walkable(&maze, &b.path());
            assert_walkable(&maze, &d.path());
            assert_walkable(&maze, &a.path());
        }
    }
}

#[test_log::test]
fn test_observers_see_the_search() {
    let maze = Maze::random(20, 20, 0.2, 11, loc(0, 0), loc(19, 19)).unwrap();

    let mut recording = RecordingObserver::default();
    let found = bfs_observed(
        maze.start(),
        |l| maze.goal_test(l),
        |l| maze.successors(l),
        &mut recording,
    );
    assert_eq!(recording.finished.as_ref().map(|(_, f)| *f), Some(found.is_some()));
    if let Some(solution) = &found {
        assert_eq!(recording.depths.len() as u32, solution.stats().nodes_expanded);
        assert!(recording.depths.windows(2).all(|w| w[0] <= w[1]));
    }

    let mut logger = LogObserver::new("maze").with_interval(10);
    let _ = astar_observed(
        maze.start(),
        |l| maze.goal_test(l),
        |l| maze.successors(l),
        manhattan_distance(maze.goal()),
        &mut logger,
    );
    assert!(logger.expanded() > 0);
}
