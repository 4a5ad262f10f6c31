use crate::common::TestHarness;
use malsim_core::network::{MAX_EDGES_PER_NODE, NODE_INSET, NODE_SIZE};
use malsim_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_build_creates_requested_nodes() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = NetworkGraph::build(20, Surface::default(), &mut rng);

    assert_eq!(graph.node_count(), 20);
    for (idx, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id as usize, idx, "ids must be contiguous indices");
        assert!(!node.infected);
    }
    assert_eq!(graph.infected_count(), 0);
    assert_eq!(graph.integrity(), 100);
}

#[test]
fn test_edges_have_no_self_loops_and_bounded_degree() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = NetworkGraph::build(20, Surface::default(), &mut rng);
        for edge in graph.edges() {
            assert_ne!(edge.from, edge.to, "self edge with seed {}", seed);
        }
        for node in graph.nodes() {
            let degree = graph.out_degree(node.id);
            assert!(
                (1..=MAX_EDGES_PER_NODE).contains(&degree),
                "node {} has out-degree {} with seed {}",
                node.id,
                degree,
                seed
            );
        }
    }
}

#[test]
fn test_nodes_fit_inside_surface() {
    let surface = Surface {
        width: 300.0,
        height: 200.0,
    };
    let mut rng = StdRng::seed_from_u64(3);
    let graph = NetworkGraph::build(40, surface, &mut rng);
    for node in graph.nodes() {
        assert!(node.x >= NODE_INSET && node.y >= NODE_INSET);
        assert!(node.x + NODE_SIZE <= surface.width);
        assert!(node.y + NODE_SIZE <= surface.height);
    }
}

#[test]
fn test_single_node_network_has_no_edges() {
    let mut rng = StdRng::seed_from_u64(1);
    let graph = NetworkGraph::build(1, Surface::default(), &mut rng);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_mark_infected_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut graph = NetworkGraph::build(5, Surface::default(), &mut rng);

    assert!(graph.mark_infected(3));
    assert!(!graph.mark_infected(3));
    assert_eq!(graph.infected_count(), 1);
    assert!(graph.is_infected(3));
    assert!(!graph.uninfected_node_ids().contains(&3));
    assert_eq!(graph.uninfected_node_ids().len(), 4);
}

#[test]
fn test_fully_infected_after_every_node() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut graph = NetworkGraph::build(4, Surface::default(), &mut rng);
    for id in 0..4 {
        assert!(!graph.is_fully_infected());
        graph.mark_infected(id);
    }
    assert!(graph.is_fully_infected());
    assert!(graph.uninfected_node_ids().is_empty());
    assert_eq!(graph.integrity(), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_node_panics() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut graph = NetworkGraph::build(20, Surface::default(), &mut rng);
    graph.mark_infected(20);
}

#[test]
fn test_canonical_key_orders_pair() {
    assert_eq!(canonical_key(5, 2), (2, 5));
    assert_eq!(canonical_key(2, 5), (2, 5));
    let edge = Edge { from: 9, to: 1 };
    assert_eq!(edge.key(), (1, 9));
}

#[test]
fn test_start_replays_network_onto_renderer() {
    let mut h = TestHarness::new();
    h.start(MalwareKind::Worm);

    let graph = h.engine().graph().expect("network built").clone();
    let render = h.engine().render();
    assert_eq!(render.clears, 1);
    assert_eq!(render.placed.len(), 20);
    for (id, x, y) in &render.placed {
        let node = graph.node(*id);
        assert_eq!((node.x, node.y), (*x, *y));
    }
    let drawn: Vec<(NodeId, NodeId)> = graph.edges().iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(render.edges, drawn);
    assert!(render.infected.is_empty());
}
