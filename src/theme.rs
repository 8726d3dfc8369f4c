//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the picker UI.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

use crate::catalogue::HexColor;

// ============================================================================
// Window
// ============================================================================

/// Window clear color behind the egui panels
pub const WINDOW_BACKGROUND: Color = Color::srgb(0.11, 0.11, 0.12);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark background behind the strip tiles
    pub const STRIP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(30, 30, 34);

    /// Border around the strip viewport
    pub const STRIP_BORDER: egui::Color32 = egui::Color32::from_rgb(80, 80, 88);

    /// Center pointer over the strip
    pub const POINTER: egui::Color32 = egui::Color32::from_rgb(255, 200, 60);

    /// Text on light marker tiles
    pub const TILE_TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);

    /// Text on dark marker tiles
    pub const TILE_TEXT_LIGHT: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);

    /// Outline around marker tiles so near-white markers stay visible
    pub const TILE_OUTLINE: egui::Color32 = egui::Color32::from_black_alpha(90);

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a marker color to egui Color32 (fully opaque)
pub fn hex_to_egui(color: HexColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Readable text color for a tile filled with `color`
pub fn tile_text_color(color: HexColor) -> egui::Color32 {
    if color.is_light() {
        ui::TILE_TEXT_DARK
    } else {
        ui::TILE_TEXT_LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_egui() {
        let color = HexColor::parse("#1A2B3C").unwrap();
        assert_eq!(hex_to_egui(color), egui::Color32::from_rgb(0x1A, 0x2B, 0x3C));
    }

    #[test]
    fn test_tile_text_color_contrasts() {
        assert_eq!(tile_text_color(HexColor::new(255, 255, 255)), ui::TILE_TEXT_DARK);
        assert_eq!(tile_text_color(HexColor::new(0, 0, 0)), ui::TILE_TEXT_LIGHT);
        assert_eq!(tile_text_color(HexColor::new(255, 225, 53)), ui::TILE_TEXT_DARK);
        assert_eq!(tile_text_color(HexColor::new(20, 33, 61)), ui::TILE_TEXT_LIGHT);
    }
}
