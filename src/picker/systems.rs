//! Bevy systems driving the pick state machine.

use bevy::prelude::*;

use crate::catalogue::MarkerSet;
use crate::constants::{SPIN_LENGTHS_MAX, SPIN_LENGTHS_MIN};

use super::{
    compute_landing, decode_index, pick, PickError, PickRequest, PickerRng, PickerSettings,
    PickerState, StripViewport,
};

/// Start a pick for each request, as long as none is already running.
pub fn handle_pick_requests(
    mut requests: MessageReader<PickRequest>,
    catalogue: Option<Res<MarkerSet>>,
    mut state: ResMut<PickerState>,
    mut rng: ResMut<PickerRng>,
) {
    for _ in requests.read() {
        if state.is_busy() {
            debug!("Ignoring pick request while {}", state.phase_name());
            continue;
        }

        let Some(catalogue) = catalogue.as_deref() else {
            warn!("Pick requested before the catalogue was loaded");
            continue;
        };

        let marker = match pick(catalogue.markers(), rng.0.as_mut()) {
            Ok(marker) => marker,
            Err(e) => {
                warn!("Pick failed: {}", e);
                continue;
            }
        };
        let Some(index) = catalogue.index_of(&marker.code) else {
            warn!("Picked marker {} is missing from the catalogue", marker.code);
            continue;
        };

        match state.begin(index, marker.clone()) {
            Ok(next) => {
                info!(
                    "Pick #{}: {} {} (index {})",
                    next.selection().map_or(0, |s| s.pick_number),
                    marker.code,
                    marker.name,
                    index
                );
                *state = next;
            }
            Err(PickError::Busy) => debug!("Pick already in progress"),
            Err(e) => warn!("Pick failed: {}", e),
        }
    }
}

/// Feed the frame delta into the state machine.
///
/// The landing is computed on the transition out of `Resetting`, using the
/// viewport width the UI measured after the strip was reset.
pub fn advance_picker(
    time: Res<Time>,
    settings: Res<PickerSettings>,
    viewport: Res<StripViewport>,
    catalogue: Res<MarkerSet>,
    mut rng: ResMut<PickerRng>,
    mut state: ResMut<PickerState>,
) {
    let geometry = settings.geometry(viewport.width);
    let len = catalogue.len();

    let result = state.advance(time.delta(), &settings.timings, |selection| {
        let spin_lengths = rng.0.next_in_range(SPIN_LENGTHS_MIN, SPIN_LENGTHS_MAX);
        let landing = compute_landing(len, selection.index, &geometry, spin_lengths)?;
        debug_assert_eq!(
            decode_index(landing.centered, len, geometry.card_width, geometry.viewport_width),
            Some(selection.index)
        );
        debug!(
            "Landing for pick #{}: offset {} centered {} ({} lengths{})",
            selection.pick_number,
            landing.offset,
            landing.centered,
            spin_lengths,
            if landing.fell_back { ", fell back to first repetition" } else { "" }
        );
        Ok(landing)
    });

    match result {
        Ok(next) => {
            let previous = state.phase_name();
            if state.set_if_neq(next) && previous != state.phase_name() {
                debug!("Picker {} -> {}", previous, state.phase_name());
                if let Some(selection) = state.revealed() {
                    info!(
                        "Revealed {}: {}",
                        selection.marker.code, selection.marker.name
                    );
                }
            }
        }
        Err(e) => {
            error!("Could not compute strip landing: {}", e);
            *state = PickerState::Idle;
        }
    }
}
