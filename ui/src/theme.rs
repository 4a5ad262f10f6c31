use eframe::egui;

pub const COLOR_BG: egui::Color32 = egui::Color32::from_rgb(10, 15, 30);
pub const COLOR_PANEL: egui::Color32 = egui::Color32::from_rgb(20, 28, 48);
pub const COLOR_ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 224, 255);
pub const COLOR_TEXT: egui::Color32 = egui::Color32::from_rgb(229, 233, 240);
pub const COLOR_TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(144, 155, 175);
pub const COLOR_WARN: egui::Color32 = egui::Color32::from_rgb(235, 203, 139);
pub const COLOR_CRITICAL: egui::Color32 = egui::Color32::from_rgb(191, 97, 106);
pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(163, 190, 140);

pub fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}
