use crate::engine::InfectionEngine;
use crate::error::ParseMalwareError;
use crate::malware::MalwareKind;
use crate::status_log::StatusLog;
use crate::traits::{LogSink, RenderAdapter};
use log::info;
use serde::{Deserialize, Serialize};

pub const PLAY_LABEL: &str = "▶ Play";
pub const PAUSE_LABEL: &str = "⏸ Pause";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Dashboard,
    Simulation,
}

/// Translates UI commands into engine calls and view switches.
pub struct SimulationController<R: RenderAdapter, L: LogSink = StatusLog> {
    engine: InfectionEngine<R, L>,
    view: View,
}

impl<R: RenderAdapter, L: LogSink> SimulationController<R, L> {
    pub fn new(engine: InfectionEngine<R, L>) -> Self {
        Self {
            engine,
            view: View::Dashboard,
        }
    }

    pub fn on_start_simulation(&mut self, malware: MalwareKind) {
        self.view = View::Simulation;
        self.engine.start(malware);
    }

    pub fn on_start_simulation_named(&mut self, name: &str) -> Result<(), ParseMalwareError> {
        let malware: MalwareKind = name.parse()?;
        self.on_start_simulation(malware);
        Ok(())
    }

    pub fn on_play_pause_toggle(&mut self) {
        self.engine.toggle();
    }

    pub fn on_reset(&mut self) {
        self.engine.reset();
    }

    pub fn on_back(&mut self) {
        info!("leaving simulation view");
        self.view = View::Dashboard;
        self.engine.reset();
        self.engine.teardown();
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.engine.advance(delta_ms);
    }

    pub fn play_label(&self) -> &'static str {
        if self.engine.is_running() {
            PAUSE_LABEL
        } else {
            PLAY_LABEL
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn engine(&self) -> &InfectionEngine<R, L> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut InfectionEngine<R, L> {
        &mut self.engine
    }
}
