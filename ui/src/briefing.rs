use crate::app::Controller;
use crate::theme::*;
use eframe::egui;
use malsim_core::Phase;

pub fn render_briefing(ui: &mut egui::Ui, controller: &mut Controller, sim_speed: &mut f32) {
    ui.add_space(15.0);

    let engine = controller.engine();
    if let Some(malware) = engine.current_malware() {
        let profile = malware.profile();
        ui.heading(egui::RichText::new(profile.title).color(rgb(profile.color_rgb)));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("DESCRIPTION").small().strong().color(COLOR_TEXT_DIM));
        ui.label(profile.description);
        ui.add_space(8.0);
        ui.label(egui::RichText::new("BEHAVIOR").small().strong().color(COLOR_TEXT_DIM));
        ui.label(profile.behavior);
    } else {
        ui.heading("No simulation");
    }

    ui.add_space(15.0);
    ui.separator();

    let integrity = engine.integrity();
    let integrity_color = match integrity {
        0 => COLOR_CRITICAL,
        1..=50 => COLOR_WARN,
        _ => COLOR_SUCCESS,
    };
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}%", integrity)).size(22.0).strong().color(integrity_color));
        ui.label(egui::RichText::new("INTEGRITY").small().color(COLOR_TEXT_DIM));
    });
    ui.label(format!("Infected: {} / {}", engine.infected_count(), engine.node_count()));
    let phase_text = match engine.phase() {
        Phase::Idle => "IDLE",
        Phase::Seeding => "SEEDING",
        Phase::Spreading => "SPREADING",
        Phase::Paused => "PAUSED",
        Phase::Complete => "COMPROMISED",
    };
    ui.label(egui::RichText::new(phase_text).small().color(COLOR_TEXT_DIM));
    ui.label(egui::RichText::new(format!("{:.1}s", engine.now_ms() as f32 / 1000.0)).small().color(COLOR_TEXT_DIM));

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(15.0);
        if ui.button("← Back to Dashboard").clicked() {
            controller.on_back();
        }
        ui.add_space(10.0);
        if ui.button(egui::RichText::new("↺ Reset").color(COLOR_CRITICAL)).clicked() {
            controller.on_reset();
        }
        ui.add_space(10.0);
        let label = controller.play_label();
        if ui.add_sized([ui.available_width(), 35.0], egui::Button::new(label).fill(COLOR_ACCENT.gamma_multiply(0.2))).clicked() {
            controller.on_play_pause_toggle();
        }
        ui.add_space(10.0);
        ui.add(egui::Slider::new(sim_speed, 0.1..=10.0).suffix("x").logarithmic(true));
        ui.label("Time Speed:");
    });
}
