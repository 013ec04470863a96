//! Shared color constants for the UI.

use egui::Color32;
use gigboard_business::Rgba8;

/// Red color for error messages.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Border color for the table frame (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Fill of skeleton placeholder blocks.
pub const SKELETON_COLOR: Color32 = Color32::from_rgb(225, 225, 225);

/// Pill background when the status format has no usable color.
pub const PILL_BG_COLOR: Color32 = Color32::from_rgb(238, 238, 238);

/// Pill text color when the status format has no usable color.
pub const PILL_TEXT_COLOR: Color32 = Color32::from_rgb(33, 37, 41);

#[inline]
pub fn to_color32(color: Rgba8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
