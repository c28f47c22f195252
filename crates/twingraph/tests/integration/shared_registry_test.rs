//! Integration test for one citation registry shared between threads.

use std::collections::HashSet;
use std::thread;
use twingraph::{CitationRegistry, GraphNode, GraphStore, QueryEngine, QuerySpec};

fn small_graph() -> GraphStore {
    GraphStore::new(
        (0..10)
            .map(|i| GraphNode::new(format!("n{i}"), format!("Node {i}"), "g"))
            .collect(),
        vec![],
    )
    .unwrap()
}

#[test]
fn test_concurrent_queries_never_share_ids() {
    let store = small_graph();
    let registry = CitationRegistry::new();

    let per_thread: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = QueryEngine::new(&store, &registry);
                scope.spawn(move || {
                    let mut seen = Vec::new();
                    for _ in 0..25 {
                        let result = engine.evaluate(&QuerySpec::all());
                        seen.extend(result.citations.iter().filter_map(|c| c.sequence()));
                    }
                    seen
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Within one thread ids only ever grow
    for ids in &per_thread {
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    let all: Vec<u64> = per_thread.into_iter().flatten().collect();
    let unique: HashSet<u64> = all.iter().copied().collect();
    assert_eq!(all.len(), 8 * 25 * 10);
    assert_eq!(unique.len(), all.len());
    assert_eq!(registry.issued(), all.len() as u64);
    assert_eq!(unique.iter().max(), Some(&(all.len() as u64)));
}

#[test]
fn test_fresh_registry_per_test_restarts_numbering() {
    let store = small_graph();

    let first = CitationRegistry::new();
    QueryEngine::new(&store, &first).evaluate(&QuerySpec::all());

    let second = CitationRegistry::new();
    let result = QueryEngine::new(&store, &second).evaluate(&QuerySpec::all().by_ids(["n3"]));
    assert_eq!(result.citation_ids(), vec!["cite-1"]);
    assert_eq!(first.issued(), 10);
}

#[test]
fn test_bounded_registry_under_load() {
    let store = small_graph();
    let registry = CitationRegistry::with_retention(15);
    let engine = QueryEngine::new(&store, &registry);

    for _ in 0..5 {
        engine.evaluate(&QuerySpec::all());
    }

    assert_eq!(registry.len(), 15);
    assert_eq!(registry.issued(), 50);
    let retained: Vec<_> = registry.all().iter().filter_map(|c| c.sequence()).collect();
    assert_eq!(retained, (36..=50).collect::<Vec<u64>>());
}
