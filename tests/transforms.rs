//! Structural properties of the Even-Tarjan reduction and the residual
//! constructions, on fixed scenarios and random graphs.

use cutflow::{
    even_tarjan_reduction, maxflow, residual_graph, reverse_residual_graph, DirectedGraph,
    EdgeId, VertexId,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn v(index: usize) -> VertexId {
    VertexId::new(index)
}

fn random_graph(rng: &mut StdRng, max_vertices: usize) -> DirectedGraph {
    let vertex_count = rng.gen_range(1..=max_vertices);
    let edge_count = rng.gen_range(0..=3 * vertex_count);
    let mut graph = DirectedGraph::with_capacity(vertex_count, edge_count);
    graph.add_vertices(vertex_count);
    for _ in 0..edge_count {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        graph.add_edge(v(from), v(to)).unwrap();
    }
    graph
}

#[test]
fn even_tarjan_triangle_scenario() {
    let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let reduction = even_tarjan_reduction(&graph).unwrap();

    assert_eq!(reduction.graph.vertex_count(), 6);
    assert_eq!(reduction.graph.edge_count(), 9);

    let endpoints: Vec<(usize, usize)> = reduction
        .graph
        .edge_ids()
        .map(|edge| {
            let (from, to) = reduction.graph.edge_endpoints(edge).unwrap();
            (from.index(), to.index())
        })
        .collect();
    assert_eq!(
        endpoints,
        vec![
            (0, 3),
            (1, 4),
            (2, 5),
            (3, 1),
            (4, 0),
            (4, 2),
            (5, 1),
            (5, 0),
            (3, 2),
        ]
    );
    assert_eq!(
        reduction.capacity,
        vec![1.0, 1.0, 1.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0]
    );
}

#[test]
fn even_tarjan_counts_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0xe7a1);
    for _ in 0..100 {
        let graph = random_graph(&mut rng, 40);
        let n = graph.vertex_count();
        let m = graph.edge_count();
        let reduction = even_tarjan_reduction(&graph).unwrap();

        assert_eq!(reduction.graph.vertex_count(), 2 * n);
        assert_eq!(reduction.graph.edge_count(), 2 * m + n);
        assert_eq!(reduction.capacity.len(), 2 * m + n);

        // Inner edges: v -> v + n with capacity 1.
        for index in 0..n {
            assert_eq!(
                reduction.graph.edge_endpoints(EdgeId::new(index)),
                Some((v(index), v(index + n)))
            );
            assert_eq!(reduction.capacity[index], 1.0);
        }
        // Outer edges carry the infinity sentinel, which is n.
        #[allow(clippy::cast_precision_loss)]
        let sentinel = n as f64;
        for index in n..(2 * m + n) {
            assert_eq!(reduction.capacity[index], sentinel);
        }
    }
}

#[test]
fn residual_contains_exactly_the_unsaturated_edges() {
    let mut rng = StdRng::seed_from_u64(0x4e51);
    for _ in 0..100 {
        let graph = random_graph(&mut rng, 30);
        let m = graph.edge_count();
        let units: Vec<u32> = (0..m).map(|_| rng.gen_range(1..=5)).collect();
        let capacity: Vec<f64> = units.iter().map(|&c| f64::from(c)).collect();
        let flow: Vec<f64> = units
            .iter()
            .map(|&c| f64::from(rng.gen_range(0..=c)))
            .collect();

        let residual = residual_graph(&graph, &capacity, &flow).unwrap();
        assert_eq!(residual.graph.vertex_count(), graph.vertex_count());

        let expected: Vec<(usize, usize, f64)> = graph
            .edge_ids()
            .filter(|&edge| capacity[edge.index()] - flow[edge.index()] > 0.0)
            .map(|edge| {
                let (from, to) = graph.edge_endpoints(edge).unwrap();
                (
                    from.index(),
                    to.index(),
                    capacity[edge.index()] - flow[edge.index()],
                )
            })
            .collect();

        assert_eq!(residual.graph.edge_count(), expected.len());
        for (index, &(from, to, leftover)) in expected.iter().enumerate() {
            assert_eq!(
                residual.graph.edge_endpoints(EdgeId::new(index)),
                Some((v(from), v(to)))
            );
            assert_eq!(residual.capacity[index], leftover);
        }
    }
}

#[test]
fn reverse_residual_orientation_rules() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..100 {
        let graph = random_graph(&mut rng, 30);
        let m = graph.edge_count();
        let units: Vec<u32> = (0..m).map(|_| rng.gen_range(1..=5)).collect();
        let capacity: Vec<f64> = units.iter().map(|&c| f64::from(c)).collect();
        let flow: Vec<f64> = units
            .iter()
            .map(|&c| f64::from(rng.gen_range(0..=c)))
            .collect();

        let residual = reverse_residual_graph(&graph, Some(&capacity), &flow).unwrap();

        let mut expected = Vec::new();
        for edge in graph.edge_ids() {
            let (from, to) = graph.edge_endpoints(edge).unwrap();
            if flow[edge.index()] > 0.0 {
                expected.push((from.index(), to.index()));
            }
            if flow[edge.index()] < capacity[edge.index()] {
                expected.push((to.index(), from.index()));
            }
        }

        let actual: Vec<(usize, usize)> = residual
            .edge_ids()
            .map(|edge| {
                let (from, to) = residual.edge_endpoints(edge).unwrap();
                (from.index(), to.index())
            })
            .collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn reverse_residual_partial_flow_scenario() {
    // A single edge carrying half its capacity contributes both
    // orientations, and no self-loop.
    let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
    let residual = reverse_residual_graph(&graph, Some(&[2.0]), &[1.0]).unwrap();
    assert_eq!(residual.edge_count(), 2);
    assert_eq!(
        residual.edge_endpoints(EdgeId::new(0)),
        Some((v(0), v(1)))
    );
    assert_eq!(
        residual.edge_endpoints(EdgeId::new(1)),
        Some((v(1), v(0)))
    );
}

#[test]
fn reduction_bounds_vertex_disjoint_paths() {
    // In the reduced diamond, the maxflow from 0'' to 3' counts the
    // internally vertex-disjoint 0 -> 3 paths of the original.
    let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    let reduction = even_tarjan_reduction(&graph).unwrap();
    let n = graph.vertex_count();

    let result = maxflow(
        &reduction.graph,
        v(n), // 0''
        v(3), // 3'
        Some(&reduction.capacity),
    )
    .unwrap();
    assert_eq!(result.value, 2.0);
}
