use crate::common::TestHarness;
use malsim_core::*;
use std::collections::HashMap;

#[test]
fn test_worm_end_to_end() {
    let mut h = TestHarness::new();
    h.start(MalwareKind::Worm);
    assert_eq!(h.phase(), Phase::Seeding);
    assert!(h.last_log().contains("Initializing WORM simulation..."));

    // Patient zero lands after 800ms.
    h.run_for(799);
    assert_eq!(h.infected(), 0);
    h.run_for(1);
    assert_eq!(h.infected(), 1);
    assert!(h.engine().graph().unwrap().is_infected(PATIENT_ZERO));
    assert_eq!(h.count_lines("Node 1 compromised! System integrity: 95%"), 1);
    assert!(h.last_log().contains("Patient zero identified"));
    assert_eq!(h.phase(), Phase::Spreading);

    // First scan after the worm's 800ms spread delay.
    h.run_for(799);
    assert_eq!(h.count_lines("Scanning node"), 0);
    h.run_for(1);
    assert_eq!(h.count_lines("Scanning node"), 1);
    assert!(h.last_log().contains("Vulnerability detected."));

    // Infection 500ms after the scan.
    h.run_for(499);
    assert_eq!(h.infected(), 1);
    h.run_for(1);
    assert_eq!(h.infected(), 2);
    assert!(h.last_log().contains("System integrity: 90%"));

    // Each further node costs 800 + 500ms.
    h.run_for(800 + 500);
    assert_eq!(h.infected(), 3);
}

#[test]
fn test_full_infection_timing_per_profile() {
    for malware in MalwareKind::ALL {
        let mut h = TestHarness::new();
        h.start(*malware);
        let per_node = malware.profile().spread_delay_ms + SCAN_DELAY_MS;
        let total = PATIENT_ZERO_DELAY_MS + 19 * per_node;

        h.run_for(total - 1);
        assert_eq!(h.infected(), 19, "{} finished early", malware);
        h.run_for(1);
        assert_eq!(h.infected(), 20, "{} did not finish on time", malware);
        assert_eq!(h.phase(), Phase::Complete);
        assert!(!h.engine().is_running());
    }
}

#[test]
fn test_complete_run_log() {
    let mut h = TestHarness::new();
    h.start(MalwareKind::Worm);
    h.run_until_idle();

    assert_eq!(h.phase(), Phase::Complete);
    assert_eq!(h.engine().integrity(), 0);
    assert!(h
        .last_log()
        .contains("CRITICAL: All nodes compromised! Network fully infected."));
    assert_eq!(h.count_lines("compromised! System integrity"), 20);
    assert_eq!(h.count_lines("Scanning node"), 19);
    // init + 20 infections + patient zero + 19 scans + critical
    assert_eq!(h.engine().log().len(), 42);

    let mut infected = h.engine().render().infected.clone();
    infected.sort_unstable();
    infected.dedup();
    assert_eq!(infected.len(), 20, "every node reported exactly once");
    assert_eq!(h.engine().render().infected.len(), 20);
}

#[test]
fn test_integrity_sequence_for_twenty_nodes() {
    let mut h = TestHarness::new();
    h.start(MalwareKind::Virus);
    h.run_until_idle();

    let expected: Vec<u32> = (1..=20)
        .map(|k| ((1.0 - k as f64 / 20.0) * 100.0).round() as u32)
        .collect();
    assert_eq!(h.reported_integrity(), expected);
}

#[test]
fn test_integrity_rounding() {
    assert_eq!(integrity_percent(1, 20), 95);
    assert_eq!(integrity_percent(1, 8), 88);
    assert_eq!(integrity_percent(1, 3), 67);
    assert_eq!(integrity_percent(2, 3), 33);
    assert_eq!(integrity_percent(0, 7), 100);
    assert_eq!(integrity_percent(7, 7), 0);
}

#[test]
fn test_infected_count_never_decreases() {
    let mut h = TestHarness::new_with_seed(5);
    h.start(MalwareKind::Trojan);
    let mut last = 0;
    while h.engine_mut().step() {
        let now = h.infected();
        assert!(now >= last);
        assert!(now <= last + 1, "one infection per event");
        last = now;
    }
    assert_eq!(last, 20);
}

#[test]
fn test_tick_with_nothing_left_only_logs() {
    let mut h = TestHarness::new();
    h.start(MalwareKind::Worm);
    h.run_until_idle();
    let lines = h.engine().log().len();

    h.engine_mut().tick();

    assert_eq!(h.engine().log().len(), lines + 1);
    assert!(h
        .last_log()
        .contains("Network fully compromised. Simulation complete."));
    assert_eq!(h.engine().next_event_at(), None);
    assert_eq!(h.infected(), 20);
}

#[test]
fn test_single_node_network_completes_at_patient_zero() {
    let config = SimulationConfig {
        node_count: 1,
        ..SimulationConfig::default()
    }
    .with_seed(1);
    let mut h = TestHarness::with_config(config);
    h.start(MalwareKind::Worm);
    h.run_for(PATIENT_ZERO_DELAY_MS);

    assert_eq!(h.phase(), Phase::Complete);
    assert_eq!(h.reported_integrity(), vec![0]);
    assert_eq!(h.count_lines("CRITICAL"), 1);
    assert_eq!(h.engine().next_event_at(), None);
}

#[test]
fn test_first_scan_target_is_uniform() {
    let runs = 400;
    let mut hits: HashMap<u32, usize> = HashMap::new();
    for seed in 0..runs {
        let mut h = TestHarness::new_with_seed(seed);
        h.start(MalwareKind::Worm);
        // Patient zero at 800ms, first scan 800ms later.
        h.run_for(1600);
        let line = h
            .log_lines()
            .into_iter()
            .find(|l| l.contains("Scanning node"))
            .expect("first scan logged");
        let label: u32 = line
            .split("Scanning node ")
            .nth(1)
            .and_then(|tail| tail.split("...").next())
            .and_then(|n| n.parse().ok())
            .expect("node label in scan line");
        *hits.entry(label).or_default() += 1;
    }

    assert!(!hits.contains_key(&1), "patient zero scanned again");
    for label in 2..=20 {
        let count = hits.get(&label).copied().unwrap_or(0);
        // 400 draws over 19 nodes: about 21 each.
        assert!(count > 0, "node {} never picked", label);
        assert!(count < 60, "node {} picked {} times", label, count);
    }
    assert_eq!(hits.values().sum::<usize>(), runs as usize);
}
