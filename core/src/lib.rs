pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod malware;
pub mod network;
pub mod status_log;
pub mod traits;

pub use config::{SimulationConfig, Surface};
pub use controller::{SimulationController, View, PAUSE_LABEL, PLAY_LABEL};
pub use engine::{Event, EventType, InfectionEngine, Phase, PATIENT_ZERO};
pub use error::{ConfigError, ParseMalwareError};
pub use malware::{get_catalogue, MalwareKind, MalwareProfile};
pub use network::{canonical_key, integrity_percent, Edge, NetworkGraph, Node};
pub use status_log::{LogEntry, Severity, StatusLog};
pub use traits::{LogSink, NodeId, NullRenderer, RenderAdapter};

/// Pacing constants (in Milliseconds)
pub const PATIENT_ZERO_DELAY_MS: u64 = 800;
pub const SCAN_DELAY_MS: u64 = 500;

pub const DEFAULT_NODE_COUNT: usize = 20;
pub const LOG_CAPACITY: usize = 50;
