// Celulares POA - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Bar colour for the brand frequency chart (sky blue).
pub const BRAND_BAR: Color32 = Color32::from_rgb(135, 206, 235);

/// Bar colour for the station frequency chart (light coral).
pub const STATION_BAR: Color32 = Color32::from_rgb(240, 128, 128);

/// Error banner text colour (Red 400).
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113);

/// Success/status accent (Green 500).
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(34, 197, 94);

/// Layout constants.
pub const BAR_HEIGHT: f32 = 22.0;
pub const BAR_LABEL_WIDTH: f32 = 180.0;
pub const BAR_COUNT_WIDTH: f32 = 56.0;
pub const TABLE_FONT_SIZE: f32 = 11.5;
