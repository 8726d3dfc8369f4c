//! Pick lifecycle: `Idle -> Resetting -> Spinning -> Done`.
//!
//! The state is a single value that is replaced wholesale on every
//! transition. Timers are a logical clock: callers feed frame deltas into
//! [`PickerState::advance`], which keeps the sequence testable without real
//! time.

use bevy::prelude::*;
use std::time::Duration;

use crate::catalogue::Marker;

use super::strip::{centering_offset, ease_out_cubic, StripGeometry, StripLanding};
use super::PickError;

/// The marker chosen by one pick.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// 1-based counter, increases with every pick in a session
    pub pick_number: u64,
    pub index: usize,
    pub marker: Marker,
}

/// Phase durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTimings {
    /// Wait after resetting the strip so the viewport is laid out before
    /// the landing is computed
    pub settle: Duration,
    /// Length of the spin animation
    pub spin: Duration,
}

#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    Idle,
    /// Strip is back at offset 0, waiting for layout to settle.
    Resetting {
        selection: Selection,
        waited: Duration,
    },
    /// Strip is moving towards the landing.
    Spinning {
        selection: Selection,
        landing: StripLanding,
        elapsed: Duration,
    },
    /// Strip has stopped and the selection is revealed.
    Done {
        selection: Selection,
        landing: StripLanding,
    },
}

impl PickerState {
    /// True while a pick is in flight. New picks are refused.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Resetting { .. } | Self::Spinning { .. })
    }

    pub fn phase_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Resetting { .. } => "resetting",
            Self::Spinning { .. } => "spinning",
            Self::Done { .. } => "done",
        }
    }

    /// The current selection, revealed or not.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Idle => None,
            Self::Resetting { selection, .. }
            | Self::Spinning { selection, .. }
            | Self::Done { selection, .. } => Some(selection),
        }
    }

    /// The selection once the strip has stopped.
    pub fn revealed(&self) -> Option<&Selection> {
        match self {
            Self::Done { selection, .. } => Some(selection),
            _ => None,
        }
    }

    pub fn landing(&self) -> Option<&StripLanding> {
        match self {
            Self::Spinning { landing, .. } | Self::Done { landing, .. } => Some(landing),
            _ => None,
        }
    }

    /// Start a new pick. Fails with [`PickError::Busy`] while one is running.
    pub fn begin(&self, index: usize, marker: Marker) -> Result<PickerState, PickError> {
        if self.is_busy() {
            return Err(PickError::Busy);
        }

        let pick_number = self.selection().map_or(0, |s| s.pick_number) + 1;
        Ok(Self::Resetting {
            selection: Selection {
                pick_number,
                index,
                marker,
            },
            waited: Duration::ZERO,
        })
    }

    /// Move the logical clock forward by `dt`.
    ///
    /// `land` is called exactly once, when the settle delay has passed, to
    /// compute where the strip stops. Time left over from one phase carries
    /// into the next.
    pub fn advance<F>(
        &self,
        dt: Duration,
        timings: &SpinTimings,
        land: F,
    ) -> Result<PickerState, PickError>
    where
        F: FnOnce(&Selection) -> Result<StripLanding, PickError>,
    {
        match self {
            Self::Idle | Self::Done { .. } => Ok(self.clone()),
            Self::Resetting { selection, waited } => {
                let waited = *waited + dt;
                if waited < timings.settle {
                    return Ok(Self::Resetting {
                        selection: selection.clone(),
                        waited,
                    });
                }

                let landing = land(selection)?;
                Ok(Self::spin_or_finish(
                    selection.clone(),
                    landing,
                    waited - timings.settle,
                    timings,
                ))
            }
            Self::Spinning {
                selection,
                landing,
                elapsed,
            } => Ok(Self::spin_or_finish(
                selection.clone(),
                *landing,
                *elapsed + dt,
                timings,
            )),
        }
    }

    fn spin_or_finish(
        selection: Selection,
        landing: StripLanding,
        elapsed: Duration,
        timings: &SpinTimings,
    ) -> PickerState {
        if elapsed >= timings.spin {
            Self::Done { selection, landing }
        } else {
            Self::Spinning {
                selection,
                landing,
                elapsed,
            }
        }
    }

    /// Spin progress in `[0, 1]`; 0 before spinning, 1 once done.
    pub fn progress(&self, timings: &SpinTimings) -> f32 {
        match self {
            Self::Idle | Self::Resetting { .. } => 0.0,
            Self::Spinning { elapsed, .. } => {
                if timings.spin.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f32() / timings.spin.as_secs_f32()).clamp(0.0, 1.0)
                }
            }
            Self::Done { .. } => 1.0,
        }
    }

    /// Horizontal translation of the strip for the current frame.
    ///
    /// Centering uses `geometry`'s viewport width rather than the one the
    /// landing was computed with, so the strip follows window resizes.
    pub fn translation(&self, timings: &SpinTimings, geometry: &StripGeometry) -> f32 {
        match self.landing() {
            Some(landing) => {
                let centered = centering_offset(
                    landing.offset,
                    geometry.card_width,
                    geometry.viewport_width,
                );
                centered * ease_out_cubic(self.progress(timings))
            }
            None => 0.0,
        }
    }
}
