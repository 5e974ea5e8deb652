//! Steady-state styling of the tab strip
//!
//! All geometry is expressed in virtual units of a 1920-wide screen.

use std::cmp::Ordering;

use crate::entry::Property;

/// Width of the focused tab
pub const FOCUSED_WIDTH: f32 = 500.0;
/// Icon scale of the focused tab
pub const FOCUSED_SCALE: f32 = 0.75;
/// Width of every other tab
pub const UNFOCUSED_WIDTH: f32 = 128.0;
/// Icon scale of every other tab
pub const UNFOCUSED_SCALE: f32 = 0.25;
/// Scroll distance between two neighbouring tabs
pub const TAB_PITCH: f32 = 128.0;
/// Margin pushing the focused tab off-stage when a child scene opens
pub const LEAVING_MARGIN: f32 = 1360.0;
/// Extra scroll applied while a child scene covers the strip
pub const PUSHED_SCROLL_OFFSET: f32 = 680.0;
/// Left edge of the strip before scrolling
pub const STRIP_ORIGIN: f32 = 710.0;
/// Width of the virtual screen
pub const VIRTUAL_WIDTH: f32 = 1920.0;

/// Where an entry should rest given which index is focused
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTarget {
    pub label_alpha: f32,
    pub icon_alpha: f32,
    pub scale: f32,
    pub width: f32,
    pub margin: f32,
}

impl VisualTarget {
    const FOCUSED: Self = Self {
        label_alpha: 1.0,
        icon_alpha: 1.0,
        scale: FOCUSED_SCALE,
        width: FOCUSED_WIDTH,
        margin: 0.0,
    };

    const UNFOCUSED: Self = Self {
        label_alpha: 0.0,
        icon_alpha: 1.0,
        scale: UNFOCUSED_SCALE,
        width: UNFOCUSED_WIDTH,
        margin: 0.0,
    };

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::LabelAlpha => self.label_alpha,
            Property::IconAlpha => self.icon_alpha,
            Property::Scale => self.scale,
            Property::Width => self.width,
            Property::Margin => self.margin,
        }
    }
}

/// Steady-state target of the entry at `index` when `active` is focused
///
/// Entries before and after the focus share the same target.
pub fn style_for(index: usize, active: usize) -> VisualTarget {
    match index.cmp(&active) {
        Ordering::Equal => VisualTarget::FOCUSED,
        Ordering::Less | Ordering::Greater => VisualTarget::UNFOCUSED,
    }
}

/// Scroll offset of the strip when it is the visible scene
pub fn root_scroll(active: usize) -> f32 {
    active as f32 * TAB_PITCH
}

/// Scroll offset of the strip while a child scene is on top of it
pub fn pushed_scroll(active: usize) -> f32 {
    root_scroll(active) + PUSHED_SCROLL_OFFSET
}
