//! The slot-machine strip viewport.

use bevy_egui::egui;

use crate::catalogue::MarkerSet;
use crate::constants::{CARD_GAP, STRIP_HEIGHT};
use crate::picker::strip::visible_tiles;
use crate::picker::{PickerSettings, PickerState};
use crate::theme;

use super::tiles::paint_marker_tile;

/// Vertical padding between the strip edge and its tiles
const STRIP_PADDING: f32 = 8.0;

/// Paint the strip at the current translation and return the measured
/// viewport width.
///
/// Only tiles intersecting the viewport are painted, so the tiled strip
/// never has to exist as a whole. While the picker is resetting the
/// translation is zero, which is what rebuilds the strip between picks.
pub fn strip_view(
    ui: &mut egui::Ui,
    catalogue: &MarkerSet,
    state: &PickerState,
    settings: &PickerSettings,
) -> f32 {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, STRIP_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, theme::ui::STRIP_BACKGROUND);

    let geometry = settings.geometry(width);
    let translation = state.translation(&settings.timings, &geometry);
    let len = catalogue.len();
    let tile_size = egui::vec2(
        (geometry.card_width - CARD_GAP).max(1.0),
        STRIP_HEIGHT - 2.0 * STRIP_PADDING,
    );

    for tile in visible_tiles(translation, &geometry, len) {
        let Some(marker) = catalogue.get(tile % len) else {
            continue;
        };
        let left = rect.left() + tile as f32 * geometry.card_width - translation;
        let tile_rect = egui::Rect::from_min_size(
            egui::pos2(left + CARD_GAP / 2.0, rect.top() + STRIP_PADDING),
            tile_size,
        );
        paint_marker_tile(&painter, tile_rect, marker);
    }

    let center_x = rect.center().x;
    painter.line_segment(
        [
            egui::pos2(center_x, rect.top()),
            egui::pos2(center_x, rect.bottom()),
        ],
        egui::Stroke::new(3.0, theme::ui::POINTER),
    );
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, theme::ui::STRIP_BORDER),
        egui::StrokeKind::Inside,
    );

    width
}
