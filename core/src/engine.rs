use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::malware::MalwareKind;
use crate::network::NetworkGraph;
use crate::status_log::{format_timestamp, Severity, StatusLog};
use crate::traits::{LogSink, NodeId, RenderAdapter};
use log::{debug, info, warn};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Patient zero is always the first node.
pub const PATIENT_ZERO: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No network has been built.
    Idle,
    /// Network built, patient zero not yet infected.
    Seeding,
    Spreading,
    Paused,
    /// Every node infected; only `reset` or `start` leave this state.
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventType {
    PatientZero,
    Scan,
    Infect { node_id: NodeId },
}

impl EventType {
    /// Scan and infect belong to a spread cycle and die with it.
    fn is_spread_cycle(&self) -> bool {
        matches!(self, EventType::Scan | EventType::Infect { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub time: u64,
    pub seq: u64,
    pub epoch: u64,
    pub cycle: u64,
    pub event_type: EventType,
}

impl Event {
    fn is_live(&self, epoch: u64, cycle: u64) -> bool {
        self.epoch == epoch && (!self.event_type.is_spread_cycle() || self.cycle == cycle)
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}
impl Eq for Event {}
impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Event {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.time, self.seq).cmp(&(other.time, other.seq))
    }
}

struct Run {
    malware: MalwareKind,
    graph: NetworkGraph,
    running: bool,
}

/// Drives one infection run on a virtual millisecond clock.
///
/// Every scheduled event is tagged with the network `epoch` it was created in;
/// scans and infections additionally carry the spread `cycle`. Rebuilding the
/// network bumps the epoch, pausing or resuming bumps the cycle, and an event
/// whose tags no longer match is dropped when it fires.
pub struct InfectionEngine<R: RenderAdapter, L: LogSink = StatusLog> {
    config: SimulationConfig,
    rng: StdRng,
    render: R,
    log: L,
    now_ms: u64,
    events: BinaryHeap<Reverse<Event>>,
    next_seq: u64,
    epoch: u64,
    cycle: u64,
    run: Option<Run>,
}

impl<R: RenderAdapter, L: LogSink> InfectionEngine<R, L> {
    /// The log is resized to `config.log_capacity`.
    pub fn new(config: SimulationConfig, render: R, mut log: L) -> Result<Self, ConfigError> {
        config.validate()?;
        log.set_capacity(config.log_capacity);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            render,
            log,
            now_ms: 0,
            events: BinaryHeap::new(),
            next_seq: 0,
            epoch: 0,
            cycle: 0,
            run: None,
        })
    }

    /// Builds a fresh network for `malware` and schedules patient zero.
    pub fn start(&mut self, malware: MalwareKind) {
        info!(
            "starting {} simulation with {} nodes",
            malware, self.config.node_count
        );
        self.rebuild(malware, true);
        self.emit(
            format!("Initializing {} simulation...", malware.key().to_uppercase()),
            Severity::Success,
        );
    }

    /// Stops spreading and cancels any pending scan or infection.
    pub fn pause(&mut self) {
        if self.phase() != Phase::Spreading {
            debug!("pause ignored in phase {:?}", self.phase());
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.running = false;
        }
        self.next_cycle();
        self.emit("Simulation paused. Analysis mode active.", Severity::Success);
    }

    /// Restarts spreading with an immediate scan.
    pub fn resume(&mut self) {
        if self.phase() != Phase::Paused {
            debug!("resume ignored in phase {:?}", self.phase());
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.running = true;
        }
        self.next_cycle();
        self.emit(
            "Simulation resumed. Monitoring network activity...",
            Severity::Success,
        );
        self.tick();
    }

    /// Pauses while spreading, resumes while paused.
    ///
    /// During seeding only the autostart intent flips: nothing is scheduled
    /// yet, and patient zero lands in `Spreading` or `Paused` accordingly.
    pub fn toggle(&mut self) {
        match self.phase() {
            Phase::Spreading => self.pause(),
            Phase::Paused => self.resume(),
            Phase::Seeding => {
                let Some(run) = self.run.as_mut() else { return };
                run.running = !run.running;
                if run.running {
                    self.emit(
                        "Simulation resumed. Monitoring network activity...",
                        Severity::Success,
                    );
                } else {
                    self.emit("Simulation paused. Analysis mode active.", Severity::Success);
                }
            }
            phase @ (Phase::Idle | Phase::Complete) => {
                warn!("toggle ignored in phase {:?}", phase);
            }
        }
    }

    /// Clears the log down to one line and rebuilds the network paused.
    ///
    /// Without a selected malware there is nothing to rebuild and the engine
    /// stays idle.
    pub fn reset(&mut self) {
        self.log.clear_log();
        self.emit(
            "System reset complete. Ready for new simulation.",
            Severity::Info,
        );
        match self.run.as_ref().map(|run| run.malware) {
            Some(malware) => {
                info!("resetting {} simulation", malware);
                self.rebuild(malware, false);
            }
            None => {
                self.epoch += 1;
                self.purge_stale();
            }
        }
    }

    /// Discards the current run; the engine returns to `Idle`.
    pub fn teardown(&mut self) {
        self.run = None;
        self.epoch += 1;
        self.purge_stale();
        self.render.clear_network();
    }

    /// One spread cycle: pick a clean node, log the scan and schedule its
    /// infection.
    pub fn tick(&mut self) {
        let Some(run) = self.run.as_ref() else {
            warn!("tick without an active run");
            return;
        };
        let candidates = run.graph.uninfected_node_ids();
        let running = run.running;

        let Some(&target) = candidates.choose(&mut self.rng) else {
            self.emit(
                "Network fully compromised. Simulation complete.",
                Severity::Error,
            );
            return;
        };
        if !running {
            return;
        }

        self.emit(
            format!("Scanning node {}... Vulnerability detected.", target + 1),
            Severity::Warning,
        );
        self.schedule(
            self.config.scan_delay_ms,
            EventType::Infect { node_id: target },
        );
    }

    /// Moves the clock forward by `delta_ms`, firing everything due on the way.
    pub fn advance(&mut self, delta_ms: u64) {
        let target = self.now_ms.saturating_add(delta_ms);
        while let Some(Reverse(event)) = self.events.peek() {
            if event.time > target {
                break;
            }
            self.step();
        }
        self.now_ms = target;
    }

    /// Fires the earliest pending event. Returns `false` when the queue is empty.
    pub fn step(&mut self) -> bool {
        let Some(Reverse(event)) = self.events.pop() else {
            return false;
        };
        self.now_ms = self.now_ms.max(event.time);

        if !event.is_live(self.epoch, self.cycle) {
            debug!(
                "dropping stale {:?} (epoch {} cycle {})",
                event.event_type, event.epoch, event.cycle
            );
            return true;
        }

        debug!("firing {:?} at {}ms", event.event_type, event.time);
        match event.event_type {
            EventType::PatientZero => {
                self.infect(PATIENT_ZERO);
                self.emit(
                    "Patient zero identified. Infection initiated.",
                    Severity::Warning,
                );
            }
            EventType::Scan => self.tick(),
            EventType::Infect { node_id } => self.infect(node_id),
        }
        true
    }

    pub fn phase(&self) -> Phase {
        match &self.run {
            None => Phase::Idle,
            Some(run) if run.graph.infected_count() == 0 => Phase::Seeding,
            Some(run) if run.graph.is_fully_infected() => Phase::Complete,
            Some(run) if run.running => Phase::Spreading,
            Some(_) => Phase::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.running)
    }

    pub fn current_malware(&self) -> Option<MalwareKind> {
        self.run.as_ref().map(|run| run.malware)
    }

    pub fn graph(&self) -> Option<&NetworkGraph> {
        self.run.as_ref().map(|run| &run.graph)
    }

    pub fn infected_count(&self) -> usize {
        self.graph().map_or(0, NetworkGraph::infected_count)
    }

    pub fn node_count(&self) -> usize {
        self.graph().map_or(0, NetworkGraph::node_count)
    }

    pub fn integrity(&self) -> u32 {
        self.graph().map_or(100, NetworkGraph::integrity)
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn next_event_at(&self) -> Option<u64> {
        self.events.peek().map(|Reverse(e)| e.time)
    }

    /// Live scans and infections waiting in the queue.
    pub fn pending_spread_events(&self) -> usize {
        self.events
            .iter()
            .filter(|Reverse(e)| {
                e.event_type.is_spread_cycle() && e.is_live(self.epoch, self.cycle)
            })
            .count()
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    fn rebuild(&mut self, malware: MalwareKind, running: bool) {
        self.epoch += 1;
        self.cycle += 1;
        self.purge_stale();

        let graph = NetworkGraph::build(self.config.node_count, self.config.surface, &mut self.rng);
        graph.render_into(&mut self.render);
        debug!(
            "built network epoch {}: {} nodes, {} edges",
            self.epoch,
            graph.node_count(),
            graph.edges().len()
        );

        self.run = Some(Run {
            malware,
            graph,
            running,
        });
        self.schedule(self.config.patient_zero_delay_ms, EventType::PatientZero);
    }

    fn infect(&mut self, node_id: NodeId) {
        let Some(run) = self.run.as_mut() else { return };
        if !run.graph.mark_infected(node_id) {
            return;
        }
        let integrity = run.graph.integrity();
        let complete = run.graph.is_fully_infected();
        if complete {
            run.running = false;
        }
        let keep_spreading = run.running;
        let spread_delay = run.malware.profile().spread_delay_ms;

        self.render.set_node_infected(node_id);
        self.emit(
            format!(
                "Node {} compromised! System integrity: {}%",
                node_id + 1,
                integrity
            ),
            Severity::Error,
        );

        if complete {
            info!("network fully infected at {}ms", self.now_ms);
            self.emit(
                "⚠️ CRITICAL: All nodes compromised! Network fully infected.",
                Severity::Error,
            );
        } else if keep_spreading {
            self.schedule(spread_delay, EventType::Scan);
        }
    }

    fn schedule(&mut self, delay: u64, event_type: EventType) {
        let event = Event {
            time: self.now_ms.saturating_add(delay),
            seq: self.next_seq,
            epoch: self.epoch,
            cycle: self.cycle,
            event_type,
        };
        self.next_seq += 1;
        self.events.push(Reverse(event));
    }

    fn next_cycle(&mut self) {
        self.cycle += 1;
        self.purge_stale();
    }

    fn purge_stale(&mut self) {
        let (epoch, cycle) = (self.epoch, self.cycle);
        self.events.retain(|Reverse(e)| e.is_live(epoch, cycle));
    }

    fn emit(&mut self, message: impl Into<String>, severity: Severity) {
        let text = format!("{} {}", format_timestamp(self.now_ms), message.into());
        self.log.append_log_line(text, severity);
    }
}
