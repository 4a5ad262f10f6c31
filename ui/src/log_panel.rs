use crate::theme::*;
use eframe::egui;
use malsim_core::{Severity, StatusLog};

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => COLOR_TEXT_DIM,
        Severity::Success => COLOR_SUCCESS,
        Severity::Warning => COLOR_WARN,
        Severity::Error => COLOR_CRITICAL,
    }
}

pub fn render_status_log(ui: &mut egui::Ui, log: &StatusLog) {
    ui.label(egui::RichText::new("STATUS LOG").small().color(COLOR_TEXT_DIM));
    ui.add_space(4.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in log.iter() {
                ui.label(
                    egui::RichText::new(&entry.text)
                        .monospace()
                        .color(severity_color(entry.severity)),
                );
            }
        });
}
