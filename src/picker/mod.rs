//! Random pick and the slot-machine strip that reveals it.
//!
//! A [`PickRequest`] chooses a marker uniformly at random and starts the
//! [`PickerState`] machine. Frame deltas advance it through the settle and
//! spin phases; the UI reads the state to draw the strip.

pub mod conditions;
mod error;
pub mod selector;
pub mod state;
pub mod strip;
mod systems;

#[cfg(test)]
mod tests;

pub use error::PickError;
pub use selector::{pick, EntropyRandom, RandomSource};
pub use state::{PickerState, SpinTimings};
pub use strip::{compute_landing, decode_index, StripGeometry};

use bevy::prelude::*;
use std::time::Duration;

use crate::config::{AppConfig, AppConfigData, ConfigLoaded};
use crate::constants::{DEFAULT_STRIP_VIEWPORT_WIDTH, RESET_SETTLE_DELAY};

/// Request a new random pick. Ignored while a pick is in progress.
#[derive(Message)]
pub struct PickRequest;

/// Randomness used for picks and spin lengths.
#[derive(Resource)]
pub struct PickerRng(pub Box<dyn RandomSource>);

impl Default for PickerRng {
    fn default() -> Self {
        Self(Box::new(EntropyRandom::new()))
    }
}

/// Strip viewport width as measured by the UI on the last frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct StripViewport {
    pub width: f32,
}

impl Default for StripViewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_STRIP_VIEWPORT_WIDTH,
        }
    }
}

/// Strip layout and timings, derived from the app config.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PickerSettings {
    pub card_width: f32,
    pub repetitions: usize,
    pub target_repetition: usize,
    pub timings: SpinTimings,
}

impl PickerSettings {
    /// Geometry for a viewport of the given width.
    pub fn geometry(&self, viewport_width: f32) -> StripGeometry {
        StripGeometry {
            card_width: self.card_width,
            viewport_width,
            repetitions: self.repetitions,
            target_repetition: self.target_repetition,
        }
    }
}

impl From<&AppConfigData> for PickerSettings {
    fn from(data: &AppConfigData) -> Self {
        Self {
            card_width: data.card_width,
            repetitions: data.repetitions,
            target_repetition: data.target_repetition,
            timings: SpinTimings {
                settle: RESET_SETTLE_DELAY,
                spin: Duration::from_secs_f32(data.spin_duration_secs),
            },
        }
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::from(&AppConfigData::default())
    }
}

/// Replace the entropy source with a seeded one when the config asks for
/// reproducible picks.
fn seed_picker_rng(config: Res<AppConfig>, mut rng: ResMut<PickerRng>) {
    if let Some(seed) = config.data.rng_seed {
        info!("Using fixed pick seed {}", seed);
        rng.0 = Box::new(EntropyRandom::seeded(seed));
    }
}

/// Keeps [`PickerSettings`] in step with the config resource.
fn sync_picker_settings(config: Res<AppConfig>, mut settings: ResMut<PickerSettings>) {
    let next = PickerSettings::from(&config.data);
    if settings.set_if_neq(next) {
        debug!("Picker settings updated: {:?}", next);
    }
}

pub struct PickerPlugin;

impl Plugin for PickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickerState>()
            .init_resource::<PickerRng>()
            .init_resource::<PickerSettings>()
            .init_resource::<StripViewport>()
            .add_message::<PickRequest>()
            .add_systems(Startup, seed_picker_rng.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    sync_picker_settings.run_if(resource_changed::<AppConfig>),
                    systems::handle_pick_requests.run_if(on_message::<PickRequest>),
                    systems::advance_picker.run_if(conditions::picker_is_busy),
                )
                    .chain(),
            );
    }
}
