use crate::common::TestHarness;
use malsim_core::network::MAX_EDGES_PER_NODE;
use malsim_core::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn prop_build_shape(seed in any::<u64>(), count in 2usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = NetworkGraph::build(count, Surface::default(), &mut rng);
        prop_assert_eq!(graph.node_count(), count);
        for edge in graph.edges() {
            prop_assert_ne!(edge.from, edge.to);
            prop_assert!((edge.to as usize) < count);
        }
        for node in graph.nodes() {
            let degree = graph.out_degree(node.id);
            prop_assert!((1..=MAX_EDGES_PER_NODE).contains(&degree));
        }
    }

    #[test]
    fn prop_reported_integrity_matches_formula(seed in any::<u64>(), count in 1usize..40) {
        let config = SimulationConfig {
            node_count: count,
            log_capacity: 1_000,
            ..SimulationConfig::default()
        }
        .with_seed(seed);
        let mut h = TestHarness::with_config(config);
        h.start(MalwareKind::Worm);
        h.run_until_idle();

        let expected: Vec<u32> = (1..=count)
            .map(|k| ((1.0 - k as f64 / count as f64) * 100.0).round() as u32)
            .collect();
        prop_assert_eq!(h.reported_integrity(), expected);
        prop_assert_eq!(h.phase(), Phase::Complete);
    }
}
