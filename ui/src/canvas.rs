use crate::app::MalsimApp;
use crate::theme::*;
use eframe::egui;
use malsim_core::network::NODE_SIZE;

impl MalsimApp {
    pub fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let canvas_rect = ui.max_rect();
        let engine = self.controller.engine();
        let scene = engine.render();
        let surface = engine.config().surface;
        let accent = engine
            .current_malware()
            .map(|m| rgb(m.profile().color_rgb))
            .unwrap_or(COLOR_CRITICAL);

        // Fit the whole surface into the panel, keeping its aspect ratio.
        let zoom = (canvas_rect.width() / surface.width)
            .min(canvas_rect.height() / surface.height)
            .max(0.05);
        let offset = canvas_rect.center().to_vec2()
            - egui::vec2(surface.width, surface.height) * zoom / 2.0;
        let to_screen = |p: egui::Pos2| egui::pos2(p.x * zoom, p.y * zoom) + offset;

        let surface_rect = egui::Rect::from_min_max(
            to_screen(egui::pos2(0.0, 0.0)),
            to_screen(egui::pos2(surface.width, surface.height)),
        );
        let painter = ui.painter();
        painter.rect_stroke(
            surface_rect,
            4.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(40)),
        );

        let half = egui::vec2(NODE_SIZE, NODE_SIZE) / 2.0;
        for (from, to) in &scene.edges {
            if let (Some(a), Some(b)) = (scene.nodes.get(from), scene.nodes.get(to)) {
                let color = if a.infected && b.infected {
                    accent.gamma_multiply(0.6)
                } else {
                    COLOR_ACCENT.gamma_multiply(0.25)
                };
                painter.line_segment(
                    [to_screen(a.pos + half), to_screen(b.pos + half)],
                    egui::Stroke::new(1.0 * zoom.max(0.5), color),
                );
            }
        }

        for (id, node) in &scene.nodes {
            let rect = egui::Rect::from_min_size(to_screen(node.pos), egui::vec2(NODE_SIZE, NODE_SIZE) * zoom);
            let (fill, border) = if node.infected {
                (accent.gamma_multiply(0.35), accent)
            } else {
                (COLOR_PANEL, COLOR_ACCENT.gamma_multiply(0.5))
            };
            painter.rect_filled(rect, 27.5 * zoom, fill);
            painter.rect_stroke(rect, 27.5 * zoom, egui::Stroke::new(2.0 * zoom, border));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{}", id + 1),
                egui::FontId::monospace(14.0 * zoom),
                if node.infected { COLOR_TEXT } else { COLOR_TEXT_DIM },
            );
        }

        if scene.is_empty() {
            painter.text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                "NO NETWORK",
                egui::FontId::proportional(12.0),
                COLOR_TEXT_DIM,
            );
        }
    }
}
