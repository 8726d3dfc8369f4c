use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalogue::MarkerSet;
use crate::config::{AppConfig, SaveConfigRequest};
use crate::constants::{MAX_SPIN_DURATION_SECS, MIN_SPIN_DURATION_SECS};
use crate::picker::{PickRequest, PickerState};
use crate::theme;

/// Main toolbar with the pick button and display settings
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    catalogue: Res<MarkerSet>,
    state: Res<PickerState>,
    mut config: ResMut<AppConfig>,
    mut pick_events: MessageWriter<PickRequest>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    let busy = state.is_busy();
    let mut show_catalogue = config.data.show_catalogue;
    let mut spin_secs = config.data.spin_duration_secs;
    let mut save_now = false;

    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                ui.heading("Marker Picker");
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // Disabled while a pick is in flight
                let label = if busy { "Spinning..." } else { "Random pick!" };
                let button = egui::Button::new(egui::RichText::new(label).size(14.0).strong())
                    .min_size(egui::vec2(120.0, 28.0));
                if ui
                    .add_enabled(!busy, button)
                    .on_hover_text("Shortcut: Space")
                    .clicked()
                {
                    pick_events.write(PickRequest);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.checkbox(&mut show_catalogue, "Show catalogue");

                ui.add_space(8.0);
                ui.label("Spin:");
                let response = ui.add_enabled(
                    !busy,
                    egui::Slider::new(&mut spin_secs, MIN_SPIN_DURATION_SECS..=MAX_SPIN_DURATION_SECS)
                        .fixed_decimals(1)
                        .suffix(" s"),
                );
                // Save once the drag ends, not on every intermediate value
                if response.drag_stopped() || (response.changed() && !response.dragged()) {
                    save_now = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  ·  Count: {}",
                            catalogue.name,
                            catalogue.len()
                        ))
                        .color(theme::ui::LABEL_TEXT),
                    );
                });
            });
        });

    if show_catalogue != config.data.show_catalogue {
        config.data.show_catalogue = show_catalogue;
        config.dirty = true;
        save_now = true;
    }
    if spin_secs != config.data.spin_duration_secs {
        config.data.spin_duration_secs = spin_secs;
        config.dirty = true;
    }
    if save_now && config.dirty {
        save_events.write(SaveConfigRequest);
    }

    Ok(())
}

/// Space triggers a pick unless a text field has keyboard focus
pub fn handle_pick_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut pick_events: MessageWriter<PickRequest>,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::Space) {
        pick_events.write(PickRequest);
    }
}
