//! Run conditions for picker systems.

use bevy::prelude::*;

use super::PickerState;

/// Run condition: returns true while a pick is resetting or spinning.
///
/// Usage: `.run_if(picker_is_busy)`
pub fn picker_is_busy(state: Res<PickerState>) -> bool {
    state.is_busy()
}

/// Run condition: returns true when a new pick may start.
///
/// Usage: `.run_if(picker_is_idle)`
pub fn picker_is_idle(state: Res<PickerState>) -> bool {
    !state.is_busy()
}
