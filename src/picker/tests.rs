//! Unit tests for the picker module.

use std::time::Duration;

use super::selector::{pick, pick_index, EntropyRandom, RandomSource};
use super::state::{PickerState, SpinTimings};
use super::strip::{
    centering_offset, compute_landing, decode_index, ease_out_cubic, visible_tiles,
    StripGeometry, StripLanding,
};
use super::systems::handle_pick_requests;
use super::{PickError, PickRequest, PickerRng, PickerSettings};
use crate::catalogue::{load_embedded, HexColor, Marker, MarkerSet};
use crate::config::AppConfigData;

/// Returns queued values in order, repeating the last one.
struct FixedRandom {
    indices: Vec<usize>,
    spins: Vec<f32>,
}

impl FixedRandom {
    fn new(indices: Vec<usize>, spins: Vec<f32>) -> Self {
        Self { indices, spins }
    }
}

impl RandomSource for FixedRandom {
    fn next_index(&mut self, _len: usize) -> usize {
        if self.indices.len() > 1 {
            self.indices.remove(0)
        } else {
            self.indices[0]
        }
    }

    fn next_in_range(&mut self, _low: f32, _high: f32) -> f32 {
        if self.spins.len() > 1 {
            self.spins.remove(0)
        } else {
            self.spins[0]
        }
    }
}

fn markers(count: usize) -> Vec<Marker> {
    (0..count)
        .map(|i| Marker {
            code: format!("M{}", i),
            name: format!("Marker {}", i),
            hex: HexColor::new(i as u8, 0, 0),
        })
        .collect()
}

fn geometry(repetitions: usize, target_repetition: usize) -> StripGeometry {
    StripGeometry {
        card_width: 120.0,
        viewport_width: 600.0,
        repetitions,
        target_repetition,
    }
}

fn timings() -> SpinTimings {
    SpinTimings {
        settle: Duration::from_millis(50),
        spin: Duration::from_secs(4),
    }
}

fn landing_at(offset: f32) -> StripLanding {
    StripLanding {
        offset,
        centered: centering_offset(offset, 120.0, 600.0),
        fell_back: false,
    }
}

// Random selector

#[test]
fn test_pick_empty_catalogue_fails() {
    let mut rng = EntropyRandom::seeded(1);
    assert_eq!(pick(&[], &mut rng), Err(PickError::EmptyCatalogue));
    assert_eq!(pick_index(0, &mut rng), Err(PickError::EmptyCatalogue));
}

#[test]
fn test_pick_forced_index() {
    let list = markers(10);
    let mut rng = FixedRandom::new(vec![7], vec![3.0]);
    assert_eq!(pick(&list, &mut rng).unwrap().code, "M7");
}

#[test]
fn test_pick_request_starts_reset_with_picked_marker() {
    use bevy::ecs::message::Messages;
    use bevy::prelude::{App, Update};

    let mut app = App::new();
    app.add_message::<PickRequest>()
        .insert_resource(MarkerSet::new("Test", markers(10)).unwrap())
        .insert_resource(PickerRng(Box::new(FixedRandom::new(vec![7, 2], vec![3.0]))))
        .init_resource::<PickerState>()
        .add_systems(Update, handle_pick_requests);

    app.world_mut()
        .resource_mut::<Messages<PickRequest>>()
        .write(PickRequest);
    app.update();

    let state = app.world().resource::<PickerState>();
    assert_eq!(state.phase_name(), "resetting");
    let selection = state.selection().unwrap();
    assert_eq!(selection.index, 7);
    assert_eq!(selection.marker.code, "M7");
    assert_eq!(selection.pick_number, 1);

    // A second request while resetting is ignored.
    app.world_mut()
        .resource_mut::<Messages<PickRequest>>()
        .write(PickRequest);
    app.update();
    let selection = app.world().resource::<PickerState>().selection().unwrap();
    assert_eq!(selection.index, 7);
    assert_eq!(selection.pick_number, 1);
}

#[test]
fn test_pick_rejects_out_of_range_source() {
    let mut rng = FixedRandom::new(vec![10], vec![3.0]);
    assert_eq!(
        pick_index(10, &mut rng),
        Err(PickError::IndexOutOfRange { index: 10, len: 10 })
    );
}

#[test]
fn test_pick_returns_catalogue_member() {
    let set = load_embedded().unwrap();
    let mut rng = EntropyRandom::seeded(7);
    for _ in 0..500 {
        let marker = pick(set.markers(), &mut rng).unwrap();
        assert_eq!(set.find(&marker.code), Some(marker));
    }
}

#[test]
fn test_pick_single_marker() {
    let list = markers(1);
    let mut rng = EntropyRandom::seeded(3);
    for _ in 0..20 {
        assert_eq!(pick(&list, &mut rng).unwrap().code, "M0");
    }
}

#[test]
fn test_pick_is_uniform() {
    const N: usize = 10;
    const TRIALS: usize = 100_000;

    let mut rng = EntropyRandom::seeded(42);
    let mut counts = [0usize; N];
    for _ in 0..TRIALS {
        counts[pick_index(N, &mut rng).unwrap()] += 1;
    }

    for (index, count) in counts.iter().enumerate() {
        let frequency = *count as f64 / TRIALS as f64;
        assert!(
            (frequency - 0.1).abs() < 0.01,
            "index {} picked with frequency {}",
            index,
            frequency
        );
    }
}

#[test]
fn test_seeded_sources_repeat() {
    let mut a = EntropyRandom::seeded(99);
    let mut b = EntropyRandom::seeded(99);
    for _ in 0..20 {
        assert_eq!(a.next_index(101), b.next_index(101));
    }
}

#[test]
fn test_next_in_range_bounds() {
    let mut rng = EntropyRandom::seeded(5);
    for _ in 0..1000 {
        let value = rng.next_in_range(3.0, 5.0);
        assert!((3.0..5.0).contains(&value));
    }
    assert_eq!(rng.next_in_range(2.0, 2.0), 2.0);
}

// Strip arithmetic

#[test]
fn test_landing_worked_example() {
    // N=100, W=120, V=600, i=37, T=2: target position is (2*100+37)*120.
    let geometry = geometry(9, 2);
    let target_position = (2 * 100 + 37) as f32 * 120.0;
    assert_eq!(target_position, 28440.0);

    for spin in [3.0, 3.25, 3.5, 3.99, 4.0, 4.5, 4.999] {
        let landing = compute_landing(100, 37, &geometry, spin).unwrap();
        assert!(landing.offset >= 0.0);
        assert!(landing.offset < geometry.extent(100));
        assert_eq!(decode_index(landing.centered, 100, 120.0, 600.0), Some(37));
        assert!(!landing.fell_back);
    }

    let landing = compute_landing(100, 37, &geometry, 3.5).unwrap();
    assert_eq!(landing.offset, target_position + 3.0 * 100.0 * 120.0);
    assert_eq!(landing.centered, landing.offset + 60.0 - 300.0);
}

#[test]
fn test_landing_falls_back_when_past_the_end() {
    // 5 repetitions: 3 lengths of spin plus repetition 2 overruns the strip.
    let geometry = geometry(5, 2);
    let landing = compute_landing(100, 37, &geometry, 3.2).unwrap();
    assert!(landing.fell_back);
    assert_eq!(landing.offset, 37.0 * 120.0);
    assert_eq!(decode_index(landing.centered, 100, 120.0, 600.0), Some(37));
}

#[test]
fn test_landing_wraps_spin_distance() {
    // 3 repetitions: a 4-length spin wraps to 1 length, landing in the last
    // repetition without overrunning.
    let geometry = geometry(3, 1);
    let landing = compute_landing(10, 4, &geometry, 4.0).unwrap();
    assert!(!landing.fell_back);
    assert_eq!(landing.offset, (2 * 10 + 4) as f32 * 120.0);
}

#[test]
fn test_landing_bounds_and_decode_hold_everywhere() {
    let mut rng = EntropyRandom::seeded(11);
    for len in [1usize, 2, 3, 7, 50, 100, 101] {
        for repetitions in 3..=10 {
            for target in 1..repetitions - 1 {
                let geometry = geometry(repetitions, target);
                for index in 0..len {
                    let spin = rng.next_in_range(3.0, 5.0);
                    let landing = compute_landing(len, index, &geometry, spin).unwrap();
                    assert!(landing.offset >= 0.0);
                    assert!(landing.offset < geometry.extent(len));
                    assert_eq!(decode_index(landing.centered, len, 120.0, 600.0), Some(index));
                }
            }
        }
    }
}

#[test]
fn test_single_marker_catalogue() {
    let geometry = geometry(3, 1);
    for spin in [3.0, 4.0, 4.9] {
        let landing = compute_landing(1, 0, &geometry, spin).unwrap();
        assert!(landing.offset < geometry.extent(1));
        assert_eq!(decode_index(landing.centered, 1, 120.0, 600.0), Some(0));
    }
}

#[test]
fn test_landing_input_validation() {
    let good = geometry(9, 2);
    assert_eq!(compute_landing(0, 0, &good, 3.0), Err(PickError::EmptyCatalogue));
    assert_eq!(
        compute_landing(10, 10, &good, 3.0),
        Err(PickError::IndexOutOfRange { index: 10, len: 10 })
    );
    assert_eq!(
        compute_landing(10, 0, &geometry(2, 1), 3.0),
        Err(PickError::TooFewRepetitions(2))
    );
    assert_eq!(
        compute_landing(10, 0, &geometry(5, 0), 3.0),
        Err(PickError::EdgeRepetition {
            target: 0,
            repetitions: 5
        })
    );
    assert_eq!(
        compute_landing(10, 0, &geometry(5, 4), 3.0),
        Err(PickError::EdgeRepetition {
            target: 4,
            repetitions: 5
        })
    );

    let mut zero_width = good;
    zero_width.card_width = 0.0;
    assert_eq!(
        compute_landing(10, 0, &zero_width, 3.0),
        Err(PickError::InvalidCardWidth(0.0))
    );

    assert!(matches!(
        compute_landing(10, 0, &good, f32::NAN),
        Err(PickError::InvalidSpinLength(_))
    ));
    assert_eq!(
        compute_landing(10, 0, &good, -1.0),
        Err(PickError::InvalidSpinLength(-1.0))
    );
}

#[test]
fn test_huge_repetitions_are_rejected() {
    let huge = geometry(usize::MAX, 2);
    assert_eq!(
        huge.validate(),
        Err(PickError::TooManyRepetitions {
            found: usize::MAX,
            max: 1000
        })
    );
    assert!(matches!(
        compute_landing(101, 5, &huge, 3.0),
        Err(PickError::TooManyRepetitions { .. })
    ));
    assert_eq!(huge.tile_count(101), None);
    assert_eq!(visible_tiles(0.0, &huge, 101), 0..0);

    let largest = geometry(1000, 2);
    assert!(largest.validate().is_ok());
    assert_eq!(largest.tile_count(101), Some(101_000));
}

#[test]
fn test_large_spin_wraps_without_overflow() {
    let geometry = geometry(9, 2);
    for spin in [1.0e30, f32::MAX, 1.0e10] {
        let landing = compute_landing(101, 5, &geometry, spin).unwrap();
        assert!(landing.offset < geometry.extent(101));
        assert_eq!(decode_index(landing.centered, 101, 120.0, 600.0), Some(5));
    }

    // Whole strips wrap away: 12 lengths on a 9-repetition strip is 3.
    assert_eq!(
        compute_landing(101, 5, &geometry, 12.0),
        compute_landing(101, 5, &geometry, 3.0)
    );
}

#[test]
fn test_decode_rejects_unusable_input() {
    assert_eq!(decode_index(0.0, 0, 120.0, 600.0), None);
    assert_eq!(decode_index(0.0, 5, 0.0, 600.0), None);
    assert_eq!(decode_index(0.0, 5, -120.0, 600.0), None);
    assert_eq!(decode_index(f32::NAN, 5, 120.0, 600.0), None);
}

#[test]
fn test_centering_offset() {
    assert_eq!(centering_offset(0.0, 120.0, 600.0), -240.0);
    assert_eq!(centering_offset(1200.0, 120.0, 600.0), 960.0);
}

#[test]
fn test_decode_negative_translation() {
    // Tile 0 centered in a wide viewport gives a negative translation.
    let centered = centering_offset(0.0, 120.0, 600.0);
    assert_eq!(decode_index(centered, 5, 120.0, 600.0), Some(0));
    let sixth = centering_offset(6.0 * 120.0, 120.0, 600.0);
    assert_eq!(decode_index(sixth, 5, 120.0, 600.0), Some(1));
}

#[test]
fn test_ease_out_cubic() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    // Monotonic
    let mut last = 0.0;
    for step in 1..=100 {
        let value = ease_out_cubic(step as f32 / 100.0);
        assert!(value >= last);
        last = value;
    }
}

#[test]
fn test_visible_tiles() {
    let geometry = geometry(3, 1);
    // 600px viewport over 120px tiles at rest shows tiles 0..5.
    assert_eq!(visible_tiles(0.0, &geometry, 10), 0..5);
    // Half a tile in, a sixth tile is partly visible.
    assert_eq!(visible_tiles(60.0, &geometry, 10), 0..6);
    // Negative translation clamps at the first tile.
    assert_eq!(visible_tiles(-240.0, &geometry, 10), 0..3);
    // Near the end clamps at the tile count.
    assert_eq!(visible_tiles(3500.0, &geometry, 10), 29..30);
    assert_eq!(visible_tiles(0.0, &geometry, 0), 0..0);
}

// State machine

#[test]
fn test_idle_state() {
    let state = PickerState::default();
    assert_eq!(state, PickerState::Idle);
    assert!(!state.is_busy());
    assert!(state.selection().is_none());
    assert!(state.revealed().is_none());
    assert_eq!(state.translation(&timings(), &geometry(9, 2)), 0.0);
}

#[test]
fn test_full_pick_sequence() {
    let list = markers(100);
    let geometry = geometry(9, 2);
    let timings = timings();

    let state = PickerState::Idle.begin(37, list[37].clone()).unwrap();
    assert!(state.is_busy());
    assert_eq!(state.phase_name(), "resetting");
    assert_eq!(state.selection().unwrap().pick_number, 1);
    assert!(state.revealed().is_none());
    assert_eq!(state.translation(&timings, &geometry), 0.0);

    // Not settled yet; landing must not be computed.
    let state = state
        .advance(Duration::from_millis(20), &timings, |_| {
            panic!("landing computed before settle")
        })
        .unwrap();
    assert_eq!(state.phase_name(), "resetting");

    let state = state
        .advance(Duration::from_millis(40), &timings, |selection| {
            compute_landing(100, selection.index, &geometry, 3.7)
        })
        .unwrap();
    assert_eq!(state.phase_name(), "spinning");
    assert!(state.is_busy());
    let landing = *state.landing().unwrap();

    // Halfway through the spin the strip is past half the distance.
    let state = state
        .advance(Duration::from_millis(1990), &timings, |_| unreachable!())
        .unwrap();
    let halfway = state.translation(&timings, &geometry);
    assert!(halfway > landing.centered / 2.0 && halfway < landing.centered);

    let state = state
        .advance(Duration::from_secs(2), &timings, |_| unreachable!())
        .unwrap();
    assert_eq!(state.phase_name(), "done");
    assert!(!state.is_busy());
    assert_eq!(state.translation(&timings, &geometry), landing.centered);

    let revealed = state.revealed().unwrap();
    assert_eq!(revealed.marker.code, "M37");
    assert_eq!(decode_index(landing.centered, 100, 120.0, 600.0), Some(revealed.index));
}

#[test]
fn test_translation_follows_viewport_resize() {
    let list = markers(100);
    let narrow = geometry(9, 2);
    let mut wide = narrow;
    wide.viewport_width = 900.0;
    let timings = timings();

    // Landing is computed at 600px, then the window grows mid-spin.
    let state = PickerState::Idle
        .begin(37, list[37].clone())
        .unwrap()
        .advance(Duration::from_millis(50), &timings, |selection| {
            compute_landing(100, selection.index, &narrow, 3.0)
        })
        .unwrap()
        .advance(Duration::from_secs(5), &timings, |_| unreachable!())
        .unwrap();
    assert_eq!(state.phase_name(), "done");

    let translation = state.translation(&timings, &wide);
    assert_eq!(decode_index(translation, 100, 120.0, 900.0), Some(37));
    assert_eq!(
        translation,
        state.translation(&timings, &narrow) - 150.0
    );
}

#[test]
fn test_begin_while_busy_is_rejected() {
    let list = markers(3);
    let resetting = PickerState::Idle.begin(0, list[0].clone()).unwrap();
    assert_eq!(resetting.begin(1, list[1].clone()), Err(PickError::Busy));

    let spinning = resetting
        .advance(Duration::from_millis(50), &timings(), |_| Ok(landing_at(100.0)))
        .unwrap();
    assert_eq!(spinning.phase_name(), "spinning");
    assert_eq!(spinning.begin(1, list[1].clone()), Err(PickError::Busy));
}

#[test]
fn test_new_pick_after_done_resets_strip() {
    let list = markers(3);
    let geometry = geometry(3, 1);
    let timings = timings();
    let done = PickerState::Idle
        .begin(0, list[0].clone())
        .unwrap()
        .advance(Duration::from_secs(10), &timings, |_| Ok(landing_at(500.0)))
        .unwrap();
    assert_eq!(done.phase_name(), "done");
    assert_eq!(
        done.translation(&timings, &geometry),
        centering_offset(500.0, 120.0, 600.0)
    );

    let next = done.begin(2, list[2].clone()).unwrap();
    assert_eq!(next.phase_name(), "resetting");
    assert_eq!(next.translation(&timings, &geometry), 0.0);
    assert_eq!(next.selection().unwrap().pick_number, 2);
    assert_eq!(next.selection().unwrap().marker.code, "M2");
}

#[test]
fn test_large_delta_carries_through_phases() {
    let list = markers(3);
    let state = PickerState::Idle
        .begin(1, list[1].clone())
        .unwrap()
        .advance(Duration::from_secs(5), &timings(), |_| Ok(landing_at(42.0)))
        .unwrap();
    assert_eq!(state.phase_name(), "done");
}

#[test]
fn test_landing_error_propagates() {
    let list = markers(3);
    let state = PickerState::Idle.begin(1, list[1].clone()).unwrap();
    let result = state.advance(Duration::from_millis(60), &timings(), |_| {
        Err(PickError::EmptyCatalogue)
    });
    assert_eq!(result, Err(PickError::EmptyCatalogue));
}

#[test]
fn test_idle_and_done_ignore_time() {
    let state = PickerState::Idle
        .advance(Duration::from_secs(1), &timings(), |_| unreachable!())
        .unwrap();
    assert_eq!(state, PickerState::Idle);
}

#[test]
fn test_zero_length_spin_finishes_immediately() {
    let list = markers(2);
    let timings = SpinTimings {
        settle: Duration::ZERO,
        spin: Duration::ZERO,
    };
    let state = PickerState::Idle
        .begin(0, list[0].clone())
        .unwrap()
        .advance(Duration::ZERO, &timings, |_| Ok(landing_at(10.0)))
        .unwrap();
    assert_eq!(state.phase_name(), "done");
    assert_eq!(state.progress(&timings), 1.0);
}

// Settings

#[test]
fn test_settings_from_config() {
    let data = AppConfigData {
        spin_duration_secs: 2.5,
        ..AppConfigData::default()
    };
    let settings = PickerSettings::from(&data);
    assert_eq!(settings.timings.spin, Duration::from_millis(2500));
    assert_eq!(settings.timings.settle, crate::constants::RESET_SETTLE_DELAY);

    let geometry = settings.geometry(800.0);
    assert_eq!(geometry.viewport_width, 800.0);
    assert_eq!(geometry.repetitions, data.repetitions);
    assert!(geometry.validate().is_ok());
}
