//! Marker tile painting shared by the strip and the catalogue grids.

use bevy_egui::egui;

use crate::catalogue::Marker;
use crate::constants::{CARD_GAP, GRID_TILE_HEIGHT, GRID_TILE_WIDTH};
use crate::theme::{self, hex_to_egui, tile_text_color};

const TILE_CORNER_RADIUS: f32 = 6.0;

/// Fill `rect` with the marker color and draw its code and name on top.
pub fn paint_marker_tile(painter: &egui::Painter, rect: egui::Rect, marker: &Marker) {
    let text_color = tile_text_color(marker.hex);

    painter.rect_filled(rect, TILE_CORNER_RADIUS, hex_to_egui(marker.hex));
    painter.rect_stroke(
        rect,
        TILE_CORNER_RADIUS,
        egui::Stroke::new(1.0, theme::ui::TILE_OUTLINE),
        egui::StrokeKind::Inside,
    );

    painter.text(
        rect.center() - egui::vec2(0.0, 9.0),
        egui::Align2::CENTER_CENTER,
        &marker.code,
        egui::FontId::proportional(16.0),
        text_color,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 10.0),
        egui::Align2::CENTER_CENTER,
        &marker.name,
        egui::FontId::proportional(11.0),
        text_color,
    );
}

/// Wrapped grid of marker tiles. The tile whose code matches
/// `highlighted` gets a pointer-colored outline.
pub fn catalogue_grid(ui: &mut egui::Ui, markers: &[Marker], highlighted: Option<&str>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(CARD_GAP, CARD_GAP);

        for marker in markers {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(GRID_TILE_WIDTH, GRID_TILE_HEIGHT),
                egui::Sense::hover(),
            );

            if ui.is_rect_visible(rect) {
                paint_marker_tile(ui.painter(), rect, marker);
                if highlighted == Some(marker.code.as_str()) {
                    ui.painter().rect_stroke(
                        rect,
                        TILE_CORNER_RADIUS,
                        egui::Stroke::new(3.0, theme::ui::POINTER),
                        egui::StrokeKind::Outside,
                    );
                }
            }

            response.on_hover_text(format!("{} {} ({})", marker.code, marker.name, marker.hex));
        }
    });
}
