use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalogue::MarkerSet;
use crate::config::AppConfig;
use crate::picker::{PickerSettings, PickerState, StripViewport};
use crate::theme::{self, hex_to_egui};

use super::strip_view::strip_view;
use super::tiles::catalogue_grid;

/// Central panel: strip, revealed marker, and the catalogue grids
pub fn main_panel_ui(
    mut contexts: EguiContexts,
    catalogue: Res<MarkerSet>,
    state: Res<PickerState>,
    settings: Res<PickerSettings>,
    config: Res<AppConfig>,
    mut viewport: ResMut<StripViewport>,
) -> Result {
    let mut measured_width = None;

    egui::CentralPanel::default().show(contexts.ctx_mut()?, |ui| {
        measured_width = Some(strip_view(ui, &catalogue, &state, &settings));

        ui.add_space(12.0);
        selection_summary(ui, &state);

        if config.data.show_catalogue {
            ui.add_space(12.0);
            ui.separator();
            catalogue_section(ui, &catalogue, &state);
        }
    });

    // The landing is computed from this width once the strip has been reset
    if let Some(width) = measured_width {
        viewport.set_if_neq(StripViewport { width });
    }

    Ok(())
}

fn selection_summary(ui: &mut egui::Ui, state: &PickerState) {
    if let Some(selection) = state.revealed() {
        let marker = &selection.marker;
        let color = hex_to_egui(marker.hex);

        ui.heading("Randomly selected marker:");
        ui.label(
            egui::RichText::new(format!("{}: {}!", marker.code, marker.name))
                .size(22.0)
                .strong()
                .color(color),
        );
        ui.label(egui::RichText::new("Happy coloring!!!").strong().color(color));
        ui.label(
            egui::RichText::new(format!("{}  ·  pick #{}", marker.hex, selection.pick_number))
                .color(theme::ui::HINT_TEXT)
                .size(11.0),
        );
    } else if state.is_busy() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Spinning...");
        });
    } else {
        ui.label(
            egui::RichText::new("Press \"Random pick!\" or Space to choose a marker")
                .color(theme::ui::HINT_TEXT),
        );
    }
}

fn catalogue_section(ui: &mut egui::Ui, catalogue: &MarkerSet, state: &PickerState) {
    ui.heading(&catalogue.name);
    ui.label(
        egui::RichText::new(format!("Count: {}", catalogue.len())).color(theme::ui::LABEL_TEXT),
    );
    ui.add_space(8.0);

    let highlighted = state.revealed().map(|s| s.marker.code.as_str());
    let (first, second) = catalogue.halves();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            catalogue_grid(ui, first, highlighted);
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);
            catalogue_grid(ui, second, highlighted);
        });
}
