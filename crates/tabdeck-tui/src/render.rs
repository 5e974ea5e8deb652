//! Read-only projection of the tab strip into screen coordinates
//!
//! Everything here works in the units of the target surface: virtual units
//! are multiplied by `ratio`, the surface width divided by 1920.

use crate::entry::Entry;
use crate::style::{STRIP_ORIGIN, VIRTUAL_WIDTH};
use crate::tabs::TabNavigator;

/// Edge of the hexagon plate behind an icon at scale 1
pub const PLATE_SIZE: f32 = 440.0;
/// Edge of the icon glyph at scale 1
pub const GLYPH_SIZE: f32 = 256.0;
/// Distance from the icon center down to the label baseline
pub const LABEL_OFFSET: f32 = 250.0;
/// Distance from the icon center down to the sub-label baseline
pub const SUB_LABEL_OFFSET: f32 = 330.0;

/// Placement of one tab for the current frame
#[derive(Debug, Clone, Copy)]
pub struct TabFrame<'a> {
    pub index: usize,
    pub entry: &'a Entry,
    pub focused: bool,
    /// Left edge of the tab's slot
    pub x: f32,
    /// Slot width including the margin
    pub slot_width: f32,
    /// Horizontal center of the icon
    pub center_x: f32,
    pub plate_size: f32,
    pub glyph_size: f32,
    pub label_alpha: f32,
    pub icon_alpha: f32,
}

/// Scale factor from the virtual screen to a surface `width` units wide
pub fn ratio_for_width(width: f32) -> f32 {
    width / VIRTUAL_WIDTH
}

/// Lay the tabs out left to right from the scrolled strip origin
pub fn layout_tabs(navigator: &TabNavigator, ratio: f32) -> Vec<TabFrame<'_>> {
    let active = navigator.active_index();
    let mut x = STRIP_ORIGIN * ratio - navigator.scroll() * ratio;

    navigator
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let visuals = entry.visuals();
            let slot_width = (visuals.width + visuals.margin) * ratio;
            let frame = TabFrame {
                index,
                entry,
                focused: index == active,
                x,
                slot_width,
                center_x: x + visuals.width / 2.0 * ratio,
                plate_size: PLATE_SIZE * visuals.scale * ratio,
                glyph_size: GLYPH_SIZE * visuals.scale * ratio,
                label_alpha: visuals.label_alpha,
                icon_alpha: visuals.icon_alpha,
            };
            x += slot_width;
            frame
        })
        .collect()
}
