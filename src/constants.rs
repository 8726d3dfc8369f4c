//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

use std::time::Duration;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

// ============================================================================
// Strip
// ============================================================================

/// Width of one strip tile including the gap to its neighbour
pub const DEFAULT_CARD_WIDTH: f32 = 120.0;

/// Horizontal gap between tiles, part of the card width
pub const CARD_GAP: f32 = 8.0;

/// Height of the strip viewport
pub const STRIP_HEIGHT: f32 = 96.0;

/// Viewport width assumed until the strip has been laid out once
pub const DEFAULT_STRIP_VIEWPORT_WIDTH: f32 = 600.0;

/// How many times the catalogue is repeated in the strip.
/// Large enough that the furthest spin plus the target repetition still fits.
pub const DEFAULT_REPETITIONS: usize = 9;

/// Smallest strip that has an interior repetition
pub const MIN_REPETITIONS: usize = 3;

/// Upper bound on repetitions so the tile count stays well inside `usize`
pub const MAX_REPETITIONS: usize = 1000;

/// Repetition the chosen tile is taken from
pub const DEFAULT_TARGET_REPETITION: usize = 2;

/// Spin length is drawn uniformly from this range, in catalogue lengths
pub const SPIN_LENGTHS_MIN: f32 = 3.0;
pub const SPIN_LENGTHS_MAX: f32 = 5.0;

/// Delay between resetting the strip and computing the landing
pub const RESET_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Default spin animation length in seconds
pub const DEFAULT_SPIN_DURATION_SECS: f32 = 4.0;

/// Allowed spin animation length in seconds
pub const MIN_SPIN_DURATION_SECS: f32 = 1.0;
pub const MAX_SPIN_DURATION_SECS: f32 = 10.0;

// ============================================================================
// Catalogue grid
// ============================================================================

/// Size of one tile in the catalogue grids
pub const GRID_TILE_WIDTH: f32 = 112.0;
pub const GRID_TILE_HEIGHT: f32 = 56.0;
