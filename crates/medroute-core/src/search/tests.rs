use super::*;
use crate::graph::{HeuristicSet, WeightedGraph};

fn names(result: &SearchResult) -> Vec<&str> {
    result.path.iter().map(Location::as_str).collect()
}

/// A-B(1), B-C(2), A-C(5)
fn triangle() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    graph.connect("A", "B", 1).connect("B", "C", 2).connect("A", "C", 5);
    graph
}

/// Cheapest cost over every simple path, by exhaustive enumeration
fn brute_force_cost(graph: &WeightedGraph, start: &str, goal: &str) -> Option<Distance> {
    fn walk(
        graph: &WeightedGraph,
        current: &str,
        goal: &str,
        cost: Distance,
        visited: &mut Vec<String>,
        best: &mut Option<Distance>,
    ) {
        if current == goal {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (neighbor, distance) in graph.neighbors(current) {
            if visited.iter().any(|v| v == neighbor.as_str()) {
                continue;
            }
            visited.push(neighbor.to_string());
            walk(graph, neighbor.as_str(), goal, cost + distance, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start.to_string()];
    walk(graph, start, goal, Distance::ZERO, &mut visited, &mut best);
    best
}

/// Exact remaining distances to `goal`: admissible and consistent
fn exact_heuristic(graph: &WeightedGraph, goal: &str) -> HeuristicTable {
    graph
        .locations()
        .iter()
        .filter_map(|loc| {
            brute_force_cost(graph, loc.as_str(), goal).map(|d| (loc.clone(), d.value()))
        })
        .collect()
}

// ============================================================================
// Properties shared by all strategies
// ============================================================================

#[test]
fn test_start_equals_goal() {
    let graph = triangle();
    let mut engine = SearchEngine::new(&graph);
    let table = HeuristicTable::new();

    for strategy in Strategy::ALL {
        let result = engine
            .search(strategy, "B", "B", Some(&table))
            .expect("start is its own goal");
        assert_eq!(names(&result), vec!["B"], "{}", strategy);
        assert_eq!(result.cost, Distance::ZERO);
        assert_eq!(result.nodes_explored, 1);
        assert_eq!(result.strategy, strategy);
    }
}

#[test]
fn test_isolated_start_explores_one_node() {
    let mut graph = triangle();
    graph.add_location("Island");
    let mut engine = SearchEngine::new(&graph);

    for strategy in Strategy::ALL {
        assert!(engine.search(strategy, "Island", "A", None).is_none());
        assert_eq!(engine.nodes_explored(), 1, "{}", strategy);
    }
}

#[test]
fn test_unknown_start_or_goal_is_no_result() {
    let graph = triangle();
    let mut engine = SearchEngine::new(&graph);

    for strategy in Strategy::ALL {
        assert!(engine.search(strategy, "Nowhere", "A", None).is_none());
        assert_eq!(engine.nodes_explored(), 1);
        // BFS pops each state once; the others also pop a leftover C entry
        assert!(engine.search(strategy, "A", "Nowhere", None).is_none());
        let expected = if strategy == Strategy::Bfs { 3 } else { 4 };
        assert_eq!(engine.nodes_explored(), expected, "{}", strategy);
    }
}

#[test]
fn test_disconnected_components() {
    let mut graph = WeightedGraph::new();
    graph.connect("A", "B", 1).connect("C", "D", 1);
    let mut engine = SearchEngine::new(&graph);

    for strategy in Strategy::ALL {
        assert!(engine.search(strategy, "A", "D", None).is_none(), "{}", strategy);
    }
}

#[test]
fn test_repeated_search_is_identical() {
    let graph = WeightedGraph::hospital();
    let heuristics = HeuristicSet::hospital();
    let mut engine = SearchEngine::new(&graph);

    for strategy in Strategy::ALL {
        let table = heuristics.for_goal("Radiology");
        let first = engine.search(strategy, "Cardiology", "Radiology", Some(table));
        let second = engine.search(strategy, "Cardiology", "Radiology", Some(table));
        assert!(first.is_some());
        assert_eq!(first, second, "{}", strategy);
    }
}

// ============================================================================
// Triangle scenario: A-B(1), B-C(2), A-C(5)
// ============================================================================

#[test]
fn test_triangle_ucs_prefers_cheaper_detour() {
    let graph = triangle();
    let result = SearchEngine::new(&graph).ucs("A", "C").unwrap();

    assert_eq!(names(&result), vec!["A", "B", "C"]);
    assert_eq!(result.cost, Distance::new(3));
    assert_eq!(result.nodes_explored, 3);
}

#[test]
fn test_triangle_astar_matches_ucs() {
    let graph = triangle();
    let table: HeuristicTable = [("A", 3), ("B", 2), ("C", 0)].into_iter().collect();
    let result = SearchEngine::new(&graph).a_star("A", "C", &table).unwrap();

    assert_eq!(names(&result), vec!["A", "B", "C"]);
    assert_eq!(result.cost, Distance::new(3));
}

#[test]
fn test_triangle_bfs_takes_direct_edge() {
    let graph = triangle();
    let result = SearchEngine::new(&graph).bfs("A", "C").unwrap();

    // Both of A's neighbors are generated before C is popped
    assert_eq!(names(&result), vec!["A", "C"]);
    assert_eq!(result.cost, Distance::new(5));
    assert_eq!(result.nodes_explored, 3);
}

#[test]
fn test_triangle_dfs_follows_first_neighbor() {
    let graph = triangle();
    let result = SearchEngine::new(&graph).dfs("A", "C").unwrap();

    assert_eq!(names(&result), vec!["A", "B", "C"]);
    assert_eq!(result.cost, Distance::new(3));
    assert_eq!(result.nodes_explored, 3);
}

// ============================================================================
// Breadth-first
// ============================================================================

#[test]
fn test_bfs_minimizes_edges_not_cost() {
    let mut graph = WeightedGraph::new();
    graph
        .connect("A", "B", 1)
        .connect("B", "C", 1)
        .connect("C", "D", 1)
        .connect("A", "D", 10);
    let mut engine = SearchEngine::new(&graph);

    let bfs = engine.bfs("A", "D").unwrap();
    assert_eq!(names(&bfs), vec!["A", "D"]);
    assert_eq!(bfs.cost, Distance::new(10));

    let ucs = engine.ucs("A", "D").unwrap();
    assert_eq!(names(&ucs), vec!["A", "B", "C", "D"]);
    assert_eq!(ucs.cost, Distance::new(3));
}

#[test]
fn test_bfs_never_enqueues_a_state_twice() {
    let mut graph = WeightedGraph::new();
    graph
        .connect("A", "B", 1)
        .connect("A", "C", 1)
        .connect("B", "C", 1)
        .connect("C", "D", 1);
    let mut engine = SearchEngine::new(&graph);

    assert!(engine.bfs("A", "Z").is_none());
    assert_eq!(engine.nodes_explored(), 4);
}

#[test]
fn test_bfs_edge_count_is_minimal_on_hospital() {
    let graph = WeightedGraph::hospital();
    let mut engine = SearchEngine::new(&graph);

    // Two hops through Consultations beats any route via Emergency
    let result = engine.bfs("Cardiology", "Laboratory").unwrap();
    assert_eq!(result.path.len(), 3);
    assert_eq!(names(&result), vec!["Cardiology", "Consultations", "Laboratory"]);
}

// ============================================================================
// Depth-first
// ============================================================================

#[test]
fn test_dfs_keeps_duplicate_pushes() {
    let mut graph = WeightedGraph::new();
    graph
        .connect("A", "B", 1)
        .connect("A", "C", 1)
        .connect("B", "C", 1)
        .connect("C", "D", 1);
    let mut engine = SearchEngine::new(&graph);

    let found = engine.dfs("A", "D").unwrap();
    assert_eq!(names(&found), vec!["A", "B", "C", "D"]);
    assert_eq!(found.cost, Distance::new(3));
    assert_eq!(found.nodes_explored, 4);

    // C is pushed from A and again from B; the second copy of C is popped
    // after C was explored and is counted but not expanded.
    assert!(engine.dfs("A", "Z").is_none());
    assert_eq!(engine.nodes_explored(), 5);
}

#[test]
fn test_dfs_explores_in_provider_order() {
    let mut graph = WeightedGraph::new();
    graph
        .add_edge("S", "X", 1)
        .add_edge("S", "Y", 1)
        .add_edge("X", "G", 1)
        .add_edge("Y", "G", 1);

    let result = SearchEngine::new(&graph).dfs("S", "G").unwrap();
    assert_eq!(names(&result), vec!["S", "X", "G"]);
}

// ============================================================================
// Uniform-cost and A*
// ============================================================================

#[test]
fn test_ucs_drops_stale_entry() {
    // C is queued at 5 via A, then at 3 via B. The 5 entry surfaces after
    // C was explored and must be skipped.
    let mut graph = triangle();
    graph.connect("C", "D", 3);
    let mut engine = SearchEngine::new(&graph);

    let result = engine.ucs("A", "D").unwrap();
    assert_eq!(names(&result), vec!["A", "B", "C", "D"]);
    assert_eq!(result.cost, Distance::new(6));
    assert_eq!(result.nodes_explored, 5);
}

#[test]
fn test_ucs_is_optimal_on_hospital() {
    let graph = WeightedGraph::hospital();
    let mut engine = SearchEngine::new(&graph);

    for from in graph.locations() {
        for to in graph.locations() {
            let result = engine.ucs(from.as_str(), to.as_str()).unwrap();
            assert_eq!(
                Some(result.cost),
                brute_force_cost(&graph, from.as_str(), to.as_str()),
                "{} -> {}",
                from,
                to
            );
            assert_eq!(result.path.first(), Some(from));
            assert_eq!(result.path.last(), Some(to));
        }
    }
}

#[test]
fn test_ucs_pharmacy_to_laboratory() {
    let graph = WeightedGraph::hospital();
    let result = SearchEngine::new(&graph).ucs("Pharmacy", "Laboratory").unwrap();

    assert_eq!(names(&result), vec!["Pharmacy", "Surgery", "ICU", "Laboratory"]);
    assert_eq!(result.cost, Distance::new(8));
}

#[test]
fn test_astar_with_exact_heuristic_is_optimal_on_hospital() {
    let graph = WeightedGraph::hospital();
    let mut engine = SearchEngine::new(&graph);

    for goal in graph.locations() {
        let table = exact_heuristic(&graph, goal.as_str());
        for from in graph.locations() {
            let result = engine.a_star(from.as_str(), goal.as_str(), &table).unwrap();
            assert_eq!(
                Some(result.cost),
                brute_force_cost(&graph, from.as_str(), goal.as_str()),
                "{} -> {}",
                from,
                goal
            );
        }
    }
}

#[test]
fn test_astar_explores_no_more_than_ucs() {
    // S-A-G is the answer; S-B-C-D is a dead end UCS wanders into.
    let mut graph = WeightedGraph::new();
    graph
        .connect("S", "A", 1)
        .connect("A", "G", 1)
        .connect("S", "B", 1)
        .connect("B", "C", 1)
        .connect("C", "D", 1);
    let table = exact_heuristic(&graph, "G");
    let mut engine = SearchEngine::new(&graph);

    let ucs = engine.ucs("S", "G").unwrap();
    let astar = engine.a_star("S", "G", &table).unwrap();

    assert_eq!(ucs.cost, astar.cost);
    assert_eq!(ucs.nodes_explored, 4);
    assert_eq!(astar.nodes_explored, 3);
    assert!(astar.nodes_explored <= ucs.nodes_explored);
}

#[test]
fn test_astar_reports_path_cost_not_priority() {
    let graph = triangle();
    // Admissible but loose: every estimate adds priority without changing g
    let table: HeuristicTable = [("A", 2), ("B", 1)].into_iter().collect();
    let result = SearchEngine::new(&graph).a_star("A", "C", &table).unwrap();

    assert_eq!(result.cost, Distance::new(3));
}

#[test]
fn test_astar_drops_stale_entry() {
    // C is queued at g=5 via A, then at g=3 via B. With only B estimated,
    // the g=5 entry (f=5) surfaces before D (f=9) and must be skipped.
    let mut graph = triangle();
    graph.connect("C", "D", 6);
    let table: HeuristicTable = [("B", 1)].into_iter().collect();

    let result = SearchEngine::new(&graph).a_star("A", "D", &table).unwrap();

    assert_eq!(names(&result), vec!["A", "B", "C", "D"]);
    assert_eq!(result.cost, Distance::new(9));
    // A, B, C (g=3), stale C (g=5), D
    assert_eq!(result.nodes_explored, 5);
}

#[test]
fn test_astar_with_builtin_tables_on_hospital() {
    // The built-in tables overestimate in places; these are the pairs
    // where A* settles for a longer route than uniform-cost.
    let suboptimal: &[(&str, &str, u32)] = &[
        ("Emergency", "Surgery", 8),
        ("Emergency", "ICU", 9),
        ("Emergency", "Laboratory", 11),
        ("Emergency", "Radiology", 12),
        ("Laboratory", "Pediatrics", 11),
        ("Radiology", "Cardiology", 13),
        ("Cardiology", "Surgery", 11),
        ("Consultations", "Surgery", 9),
    ];
    let graph = WeightedGraph::hospital();
    let heuristics = HeuristicSet::hospital();
    let mut engine = SearchEngine::new(&graph);

    for from in graph.locations() {
        for to in graph.locations() {
            let table = heuristics.for_goal(to.as_str());
            let astar = engine.a_star(from.as_str(), to.as_str(), table).unwrap();
            let ucs = engine.ucs(from.as_str(), to.as_str()).unwrap();
            let expected = suboptimal
                .iter()
                .find(|(f, t, _)| from == *f && to == *t)
                .map_or(ucs.cost, |(_, _, cost)| Distance::new(*cost));
            assert_eq!(astar.cost, expected, "{} -> {}", from, to);
        }
    }

    let back = engine
        .a_star("Cardiology", "Pharmacy", heuristics.for_goal("Pharmacy"))
        .unwrap();
    assert_eq!(names(&back), vec!["Cardiology", "Consultations", "Pharmacy"]);
    assert_eq!(back.cost, Distance::new(6));
}

#[test]
fn test_astar_without_table_behaves_like_ucs() {
    let graph = WeightedGraph::hospital();
    let mut engine = SearchEngine::new(&graph);

    let ucs = engine.ucs("Emergency", "Radiology").unwrap();
    let astar = engine
        .search(Strategy::AStar, "Emergency", "Radiology", None)
        .unwrap();

    assert_eq!(ucs.path, astar.path);
    assert_eq!(ucs.cost, astar.cost);
    assert_eq!(ucs.nodes_explored, astar.nodes_explored);
}

// ============================================================================
// Strategy parsing
// ============================================================================

#[test]
fn test_strategy_parsing() {
    assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
    assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::Dfs);
    assert_eq!("ucs".parse::<Strategy>().unwrap(), Strategy::Ucs);
    assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
    assert_eq!("a*".parse::<Strategy>().unwrap(), Strategy::AStar);

    let err = "greedy".parse::<Strategy>().unwrap_err();
    assert!(matches!(err, RouteError::UnknownStrategy(_)));
}

#[test]
fn test_strategy_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Strategy::AStar).unwrap(), "\"astar\"");
    assert_eq!(Strategy::default(), Strategy::Ucs);
    assert!(Strategy::AStar.is_cost_optimal());
    assert!(!Strategy::Bfs.is_cost_optimal());
}
