//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::counter::Counter;
use crate::theme;
use eframe::egui;

/// Custom-painted control button (the `--` / `++` controls)
pub fn control_button(ui: &mut egui::Ui, icon: &str) -> egui::Response {
    let (w, h) = theme::CONTROL_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_DEFAULT, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.rect_stroke(
            draw_rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
            egui::StrokeKind::Inside,
        );
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(theme::FONT_BUTTON),
            theme::TEXT_PRIMARY,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}

/// The big counter readout
pub fn count_display(ui: &mut egui::Ui, counter: &Counter) {
    ui.label(
        egui::RichText::new(counter.to_string())
            .size(theme::FONT_COUNT)
            .color(theme::TEXT_PRIMARY),
    );
}
