use assert_approx_eq::assert_approx_eq;
use graphwalk::{
    graph::{samples, EdgeWeights, Graph, GraphFile, NodeId},
    maze::Maze,
    search::{
        search_graph, search_maze, validate_traversal, MazeHeuristicName, ParentPolicy,
        SearchEngineName, SearchOptions, SearchSettings, SearchStatus,
    },
};
use petgraph::{algo::dijkstra, graph::DiGraph};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use strum::IntoEnumIterator;

fn names(nodes: &[NodeId]) -> Vec<&str> {
    nodes.iter().map(|node| node.as_str()).collect()
}

/// Cheapest cost from `start` to every reachable node, computed with
/// petgraph.
fn dijkstra_costs(graph: &Graph, weights: &EdgeWeights, start: NodeId) -> HashMap<NodeId, f64> {
    let mut baseline = DiGraph::<NodeId, f64>::new();
    let indices: HashMap<NodeId, _> = graph
        .nodes()
        .iter()
        .map(|&node| (node, baseline.add_node(node)))
        .collect();
    for (from, to) in graph.edges() {
        baseline.add_edge(indices[&from], indices[&to], weights.get(&from, &to));
    }
    dijkstra(&baseline, indices[&start], None, |edge| *edge.weight())
        .into_iter()
        .map(|(index, cost)| (baseline[index], cost))
        .collect()
}

fn unit_weights(graph: &Graph) -> EdgeWeights {
    let mut weights = EdgeWeights::new();
    for (from, to) in graph.edges() {
        weights.insert(from, to, 1.).unwrap();
    }
    weights
}

#[test]
fn bfs_on_diamond() {
    let graph = Graph::from_adjacency([("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec!["D"])]);
    let result = search_graph(
        SearchEngineName::Bfs,
        &graph,
        "A".into(),
        Some("D".into()),
        &SearchOptions::default(),
        &SearchSettings::default(),
    )
    .unwrap();
    assert_eq!(names(&result.trace), vec!["A", "B", "C", "D"]);
    assert_eq!(names(&result.path), vec!["A", "B", "D"]);
}

#[test]
fn astar_avoids_expensive_branch() {
    let graph = Graph::from_adjacency([("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec!["D"])]);
    let mut options = SearchOptions::default();
    options.weights.insert_keyed("A->B", 1.).unwrap();
    options.weights.insert_keyed("A->C", 4.).unwrap();
    options.weights.insert_keyed("B->D", 1.).unwrap();
    let result = search_graph(
        SearchEngineName::Astar,
        &graph,
        "A".into(),
        Some("D".into()),
        &options,
        &SearchSettings::default(),
    )
    .unwrap();
    assert_eq!(names(&result.path), vec!["A", "B", "D"]);
    assert_eq!(result.cost, 2.);
}

#[test]
fn astar_matches_dijkstra_on_weighted_samples() {
    for sample in samples::samples() {
        let Some(goal) = sample.file.goal() else {
            continue;
        };
        let graph = sample.file.graph();
        let options = SearchOptions::from_graph_file(&sample.file).unwrap();
        let baseline = dijkstra_costs(&graph, &options.weights, sample.file.start());
        let result = search_graph(
            SearchEngineName::Astar,
            &graph,
            sample.file.start(),
            Some(goal),
            &options,
            &SearchSettings::default(),
        )
        .unwrap();
        match baseline.get(&goal) {
            Some(&cost) => assert_approx_eq!(result.cost, cost),
            None => assert_eq!(result.status, SearchStatus::Unreachable, "{}", sample.name),
        }
    }
}

#[test]
fn bfs_paths_have_fewest_edges() {
    for sample in samples::samples() {
        let graph = sample.file.graph();
        let start = sample.file.start();
        let fewest_edges = dijkstra_costs(&graph, &unit_weights(&graph), start);
        for &goal in graph.nodes() {
            let result = search_graph(
                SearchEngineName::Bfs,
                &graph,
                start,
                Some(goal),
                &SearchOptions::default(),
                &SearchSettings::default(),
            )
            .unwrap();
            match fewest_edges.get(&goal) {
                Some(&edges) => assert_eq!(result.path_length() as f64, edges),
                None => assert!(result.path.is_empty()),
            }
        }
    }
}

#[test]
fn dfs_parent_policies_both_give_valid_paths() {
    // C is pushed by A and again by B before it is expanded
    let text = r#"
        start = "A"
        goal = "D"

        [graph]
        A = ["B", "C"]
        B = ["C"]
        C = ["D"]
    "#;
    let file = GraphFile::from_toml_str(text).unwrap();
    let graph = file.graph();
    let mut paths = vec![];
    for parent_policy in [ParentPolicy::LastPush, ParentPolicy::FirstPush] {
        let settings = SearchSettings {
            parent_policy,
            ..Default::default()
        };
        let result = search_graph(
            SearchEngineName::Dfs,
            &graph,
            file.start(),
            file.goal(),
            &SearchOptions::default(),
            &settings,
        )
        .unwrap();
        assert_eq!(result.status, SearchStatus::GoalReached);
        for pair in result.path.windows(2) {
            assert!(graph.neighbours(&pair[0]).contains(&pair[1]));
        }
        paths.push(result.path);
    }
    assert_eq!(names(&paths[0]), vec!["A", "B", "C", "D"]);
    assert_eq!(names(&paths[1]), vec!["A", "C", "D"]);
}

#[test]
fn small_mazes_solved_by_every_engine() {
    for seed in 0..10 {
        let maze = Maze::generate(5, &mut StdRng::seed_from_u64(seed)).unwrap();
        let mut path_lengths = HashMap::new();
        for engine in SearchEngineName::iter() {
            let result = search_maze(
                engine,
                &maze,
                MazeHeuristicName::Manhattan,
                &SearchSettings::default(),
            )
            .unwrap();
            assert_eq!(result.status, SearchStatus::GoalReached);
            assert!(!result.path.is_empty());
            assert_eq!(result.path.first().copied(), maze.start());
            assert_eq!(result.path.last().copied(), maze.end());
            path_lengths.insert(engine, result.path_length());
        }
        assert!(path_lengths[&SearchEngineName::Bfs] <= path_lengths[&SearchEngineName::Dfs]);
        assert_eq!(
            path_lengths[&SearchEngineName::Bfs],
            path_lengths[&SearchEngineName::Astar]
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut maze = Maze::generate(21, &mut StdRng::seed_from_u64(5)).unwrap();
    for engine in SearchEngineName::iter() {
        let settings = SearchSettings::default();
        let first = search_maze(engine, &maze, MazeHeuristicName::Manhattan, &settings).unwrap();
        maze.record_result(&first).unwrap();
        maze.reset_search_state();
        let second = search_maze(engine, &maze, MazeHeuristicName::Manhattan, &settings).unwrap();
        maze.record_result(&second).unwrap();
        maze.reset_search_state();
        assert_eq!(first.trace, second.trace);
        assert_eq!(first.path, second.path);
        assert_eq!(validate_traversal(&second.trace, &first.trace), Ok(()));
    }
}

#[test]
fn recorded_maze_shows_path() {
    let mut maze = Maze::generate(9, &mut StdRng::seed_from_u64(1)).unwrap();
    let result = search_maze(
        SearchEngineName::Astar,
        &maze,
        MazeHeuristicName::Manhattan,
        &SearchSettings::default(),
    )
    .unwrap();
    maze.record_result(&result).unwrap();
    let rendered = maze.to_string();
    // start and end are drawn over their path marks
    assert_eq!(
        rendered.matches('*').count(),
        result.path.len() - 2
    );
    assert!(maze.record_result(&result).is_err());
}

#[test]
fn result_serialises_to_json() {
    let sample = samples::sample("diamond").unwrap();
    let options = SearchOptions::from_graph_file(&sample.file).unwrap();
    let result = search_graph(
        SearchEngineName::Astar,
        &sample.file.graph(),
        sample.file.start(),
        sample.file.goal(),
        &options,
        &SearchSettings::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "goal-reached");
    assert_eq!(json["path"], serde_json::json!(["A", "B", "D"]));
    assert_eq!(json["cost"], 2.0);
    assert_eq!(json["parents"]["D"], "B");
    assert_eq!(json["scores"]["B"]["g"], 1.0);
}

#[test]
fn unreached_goal_cost_is_null_in_json() {
    let graph = Graph::from_adjacency([("A", vec!["B"]), ("C", vec![])]);
    let result = search_graph(
        SearchEngineName::Dfs,
        &graph,
        "A".into(),
        Some("C".into()),
        &SearchOptions::default(),
        &SearchSettings::default(),
    )
    .unwrap();
    assert_eq!(result.status, SearchStatus::Unreachable);
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["cost"].is_null());
    assert_eq!(json["path"], serde_json::json!([]));
}
