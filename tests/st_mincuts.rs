//! Minimum-cut enumeration tests: scenarios plus randomized comparison
//! against a brute-force subset oracle.

use cutflow::{all_st_mincuts, maxflow, DirectedGraph, VertexId};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeSet;

fn v(index: usize) -> VertexId {
    VertexId::new(index)
}

fn random_graph(rng: &mut StdRng, max_vertices: usize) -> (DirectedGraph, Vec<f64>) {
    let vertex_count = rng.gen_range(2..=max_vertices);
    let edge_count = rng.gen_range(0..=2 * vertex_count);
    let mut graph = DirectedGraph::with_capacity(vertex_count, edge_count);
    graph.add_vertices(vertex_count);
    let mut capacity = Vec::new();
    for _ in 0..edge_count {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from != to {
            graph.add_edge(v(from), v(to)).unwrap();
            capacity.push(f64::from(rng.gen_range(1..=4)));
        }
    }
    (graph, capacity)
}

/// Brute force: scan every source-side subset, find the minimum crossing
/// capacity, and collect the distinct crossing edge sets achieving it.
fn oracle_mincuts(
    graph: &DirectedGraph,
    capacity: &[f64],
    source: usize,
    target: usize,
) -> (f64, BTreeSet<Vec<usize>>) {
    let vertex_count = graph.vertex_count();
    assert!(vertex_count <= 16);

    let mut best = f64::INFINITY;
    let mut cuts: BTreeSet<Vec<usize>> = BTreeSet::new();

    for subset in 0u64..(1 << vertex_count) {
        if subset & (1 << source) == 0 || subset & (1 << target) != 0 {
            continue;
        }
        let mut total = 0.0;
        let mut edges = Vec::new();
        for edge in graph.edge_ids() {
            let (from, to) = graph.edge_endpoints(edge).unwrap();
            if subset & (1 << from.index()) != 0 && subset & (1 << to.index()) == 0 {
                total += capacity[edge.index()];
                edges.push(edge.index());
            }
        }
        if total < best {
            best = total;
            cuts.clear();
        }
        if total == best {
            cuts.insert(edges);
        }
    }

    (best, cuts)
}

#[test]
fn unit_diamond_scenario() {
    // Both length-2 paths carry one unit; any pairing of one edge per path
    // is a minimum cut, so there are four of them.
    let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    let result = all_st_mincuts(&graph, v(0), v(3), None).unwrap();

    assert_eq!(result.value, 2.0);

    let mut cuts: Vec<Vec<usize>> = result
        .cuts
        .iter()
        .map(|c| {
            let mut c: Vec<usize> = c.iter().map(|edge| edge.index()).collect();
            c.sort_unstable();
            c
        })
        .collect();
    cuts.sort();
    assert_eq!(
        cuts,
        vec![vec![0, 1], vec![0, 3], vec![1, 2], vec![2, 3]]
    );

    let mut partitions: Vec<Vec<usize>> = result
        .partitions
        .iter()
        .map(|p| {
            let mut p: Vec<usize> = p.iter().map(|vertex| vertex.index()).collect();
            p.sort_unstable();
            p
        })
        .collect();
    partitions.sort();
    assert_eq!(
        partitions,
        vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 2]]
    );
}

#[test]
fn weighted_bottleneck_scenario() {
    // A wide funnel into a single narrow edge: one minimum cut.
    let graph =
        DirectedGraph::from_edges(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]).unwrap();
    let capacity = [3.0, 3.0, 3.0, 3.0, 2.0];
    let result = all_st_mincuts(&graph, v(0), v(4), Some(&capacity)).unwrap();
    assert_eq!(result.value, 2.0);
    assert_eq!(result.cuts.len(), 1);
    assert_eq!(result.cuts[0].len(), 1);
    assert_eq!(result.cuts[0][0].index(), 4);
}

#[test]
fn matches_brute_force_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x111cc75);
    let mut nonzero_cases = 0;
    for _ in 0..300 {
        let (graph, capacity) = random_graph(&mut rng, 7);
        let source = rng.gen_range(0..graph.vertex_count());
        let target = loop {
            let candidate = rng.gen_range(0..graph.vertex_count());
            if candidate != source {
                break candidate;
            }
        };

        let result = all_st_mincuts(&graph, v(source), v(target), Some(&capacity)).unwrap();
        let (best, expected) = oracle_mincuts(&graph, &capacity, source, target);

        assert_eq!(result.value, best, "s={source} t={target}");
        if best == 0.0 {
            // Source already separated from target: nothing to enumerate.
            assert!(result.cuts.is_empty());
            continue;
        }
        nonzero_cases += 1;

        let enumerated: BTreeSet<Vec<usize>> = result
            .cuts
            .iter()
            .map(|cut| {
                let mut cut: Vec<usize> = cut.iter().map(|edge| edge.index()).collect();
                cut.sort_unstable();
                cut
            })
            .collect();
        assert_eq!(enumerated.len(), result.cuts.len(), "duplicate cut listed");
        assert_eq!(enumerated, expected, "s={source} t={target}");
    }
    assert!(nonzero_cases > 50, "the generator starved the interesting case");
}

#[test]
fn cuts_saturate_the_flow() {
    // Round trip: every enumerated cut consists of saturated edges of the
    // maximum flow the enumeration started from.
    let mut rng = StdRng::seed_from_u64(0x5a7_f10);
    for _ in 0..100 {
        let (graph, capacity) = random_graph(&mut rng, 7);
        let source = 0;
        let target = graph.vertex_count() - 1;

        let flow = maxflow(&graph, v(source), v(target), Some(&capacity)).unwrap();
        let result = all_st_mincuts(&graph, v(source), v(target), Some(&capacity)).unwrap();
        assert_eq!(result.value, flow.value);

        for (cut, partition) in result.cuts.iter().zip(&result.partitions) {
            let members: BTreeSet<usize> = partition.iter().map(|p| p.index()).collect();
            assert!(members.contains(&source));
            assert!(!members.contains(&target));

            let total: f64 = cut.iter().map(|edge| capacity[edge.index()]).sum();
            assert_eq!(total, result.value);

            for edge in cut {
                // A minimum cut's crossing edges all run at capacity.
                assert_eq!(flow.flow[edge.index()], capacity[edge.index()]);
            }
        }
    }
}
