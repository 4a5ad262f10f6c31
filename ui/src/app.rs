use crate::briefing::render_briefing;
use crate::dashboard::render_dashboard;
use crate::log_panel::render_status_log;
use crate::scene::CanvasScene;
use crate::theme::*;
use eframe::egui;
use log::warn;
use malsim_core::{InfectionEngine, SimulationConfig, SimulationController, StatusLog, View};
use serde::{Deserialize, Serialize};

pub type Controller = SimulationController<CanvasScene, StatusLog>;

/// User preferences kept between sessions. Simulation state is not.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Preferences {
    pub config: SimulationConfig,
    pub sim_speed: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            sim_speed: 1.0,
        }
    }
}

pub struct MalsimApp {
    pub controller: Controller,
    pub prefs: Preferences,
    pub last_frame_time: f64,
    /// Sub-millisecond remainder carried between frames.
    pub carry_ms: f64,
}

pub fn build_controller(config: &SimulationConfig) -> Controller {
    let log = StatusLog::new(config.log_capacity.max(1));
    let engine = match InfectionEngine::new(config.clone(), CanvasScene::default(), log) {
        Ok(engine) => engine,
        Err(err) => {
            warn!("falling back to default config: {}", err);
            let config = SimulationConfig::default();
            let log = StatusLog::new(config.log_capacity);
            InfectionEngine::new(config, CanvasScene::default(), log)
                .unwrap_or_else(|err| panic!("default config rejected: {}", err))
        }
    };
    SimulationController::new(engine)
}

impl MalsimApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_preferences(prefs)
    }

    pub fn with_preferences(prefs: Preferences) -> Self {
        Self {
            controller: build_controller(&prefs.config),
            prefs,
            last_frame_time: 0.0,
            carry_ms: 0.0,
        }
    }

    /// Applies changed preferences. Only allowed from the dashboard, where no
    /// run is active.
    pub fn apply_config(&mut self) {
        if self.controller.view() == View::Dashboard {
            self.controller = build_controller(&self.prefs.config);
        }
    }

    fn advance_clock(&mut self, dt: f64) {
        let virtual_ms = dt * 1000.0 * self.prefs.sim_speed as f64 + self.carry_ms;
        let whole = virtual_ms.floor();
        self.carry_ms = virtual_ms - whole;
        if whole > 0.0 {
            self.controller.advance(whole as u64);
        }
    }
}

impl eframe::App for MalsimApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_real_time = ctx.input(|i| i.time);
        let dt = (current_real_time - self.last_frame_time).max(0.0);
        self.last_frame_time = current_real_time;

        if self.controller.view() == View::Simulation {
            self.advance_clock(dt);
            if self.controller.engine().next_event_at().is_some() {
                ctx.request_repaint();
            }
        }

        match self.controller.view() {
            View::Dashboard => {
                egui::CentralPanel::default()
                    .frame(egui::Frame::none().fill(COLOR_BG).inner_margin(24.0))
                    .show(ctx, |ui| {
                        if render_dashboard(ui, &mut self.controller, &mut self.prefs) {
                            self.apply_config();
                        }
                    });
            }
            View::Simulation => {
                egui::TopBottomPanel::bottom("status_log")
                    .resizable(true)
                    .default_height(180.0)
                    .frame(egui::Frame::none().fill(COLOR_PANEL).inner_margin(12.0))
                    .show(ctx, |ui| {
                        render_status_log(ui, self.controller.engine().log());
                    });
                egui::SidePanel::left("briefing")
                    .default_width(280.0)
                    .show(ctx, |ui| {
                        render_briefing(ui, &mut self.controller, &mut self.prefs.sim_speed);
                    });
                egui::CentralPanel::default()
                    .frame(egui::Frame::none().fill(COLOR_BG))
                    .show(ctx, |ui| {
                        self.render_canvas(ui);
                    });
            }
        }
    }
}
