use crate::common::TestHarness;
use malsim_core::*;

fn run(seed: u64) -> (Vec<(f32, f32)>, Vec<String>) {
    let mut h = TestHarness::new_with_seed(seed);
    h.start(MalwareKind::Worm);
    h.run_until_idle();
    let positions = h
        .engine()
        .graph()
        .unwrap()
        .nodes()
        .iter()
        .map(|n| (n.x, n.y))
        .collect();
    (positions, h.log_lines())
}

#[test]
fn test_determinism_across_runs() {
    let (pos1, log1) = run(12345);
    let (pos2, log2) = run(12345);
    assert_eq!(pos1, pos2, "Placement mismatch");
    assert_eq!(log1, log2, "Log mismatch");
}

#[test]
fn test_determinism_with_different_seeds() {
    let (pos1, _) = run(100);
    let (pos2, _) = run(200);
    assert_ne!(pos1, pos2, "Different seeds should produce different layouts");
}
