use crate::app::{Controller, Preferences};
use crate::theme::*;
use eframe::egui;
use malsim_core::get_catalogue;

/// Malware picker. Returns `true` when preferences changed.
pub fn render_dashboard(ui: &mut egui::Ui, controller: &mut Controller, prefs: &mut Preferences) -> bool {
    ui.heading(egui::RichText::new("THREAT SIMULATION LAB").color(COLOR_ACCENT));
    ui.label(egui::RichText::new("Select a malware archetype to deploy on a sandboxed network.").color(COLOR_TEXT_DIM));
    ui.add_space(20.0);

    for (kind, title, color_rgb) in get_catalogue() {
        let color = rgb(color_rgb);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width().min(520.0), 56.0), egui::Sense::click());

        let bg_color = if response.hovered() { COLOR_PANEL } else { COLOR_BG };
        ui.painter().rect_filled(rect, 4.0, bg_color);
        ui.painter().rect_stroke(rect, 4.0, egui::Stroke::new(1.0, color.gamma_multiply(0.7)));
        ui.painter().text(rect.left_center() + egui::vec2(16.0, 0.0), egui::Align2::LEFT_CENTER, title, egui::FontId::proportional(15.0), color);
        ui.painter().text(
            rect.right_center() - egui::vec2(16.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            format!("{} ms / hop", kind.profile().spread_delay_ms),
            egui::FontId::monospace(11.0),
            COLOR_TEXT_DIM,
        );

        let response = response.on_hover_text(kind.profile().description);
        if response.clicked() {
            controller.on_start_simulation(kind);
        }
        ui.add_space(8.0);
    }

    ui.add_space(20.0);
    ui.separator();
    ui.label(egui::RichText::new("NETWORK").small().color(COLOR_TEXT_DIM));
    let mut changed = false;
    ui.label("Nodes:");
    changed |= ui.add(egui::Slider::new(&mut prefs.config.node_count, 2..=60)).changed();
    ui.label("Time Speed:");
    ui.add(egui::Slider::new(&mut prefs.sim_speed, 0.1..=10.0).suffix("x").logarithmic(true));
    changed
}
