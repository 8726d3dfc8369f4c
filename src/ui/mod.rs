mod dialogs;
mod main_panel;
mod strip_view;
mod tiles;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;
use crate::picker::conditions::picker_is_idle;

/// Resource that tracks whether any modal dialog is currently open.
/// Keyboard shortcuts check this so they don't fire behind a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block shortcuts
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = config_reset.show;
}

/// Run condition: returns true when no modal dialog is open.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            // Top panel must render before the central panel so it fits around it
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    main_panel::main_panel_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                toolbar::handle_pick_shortcut
                    .run_if(picker_is_idle)
                    .run_if(no_dialog_open),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
