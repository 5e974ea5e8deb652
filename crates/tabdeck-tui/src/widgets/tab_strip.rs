use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::render::{layout_tabs, ratio_for_width, TabFrame, LABEL_OFFSET, SUB_LABEL_OFFSET};
use crate::tabs::TabNavigator;
use crate::theme::Theme;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;
/// Below this opacity a layer is not drawn at all
const MIN_VISIBLE_ALPHA: f32 = 0.05;

/// Horizontal tab strip drawn with the navigator's current visual values
pub struct TabStripWidget<'a> {
    navigator: &'a TabNavigator,
    theme: &'a Theme,
}

impl<'a> TabStripWidget<'a> {
    pub fn new(navigator: &'a TabNavigator, theme: &'a Theme) -> Self {
        Self { navigator, theme }
    }
}

impl Widget for TabStripWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg0));
        if area.width == 0 || area.height == 0 {
            return;
        }

        let ratio = ratio_for_width(area.width as f32);
        let ratio_y = ratio / CELL_ASPECT;
        let center_y = area.y as f32 + area.height as f32 * 0.4;

        for tab in layout_tabs(self.navigator, ratio) {
            let center_x = area.x as f32 + tab.center_x;
            self.draw_icon(buf, area, &tab, center_x, center_y);

            if tab.label_alpha < MIN_VISIBLE_ALPHA {
                continue;
            }
            let color = self.theme.fade(self.theme.tab_color(tab.index), tab.label_alpha);
            let mut style = Style::default().fg(color).bg(self.theme.bg0);
            if tab.focused {
                style = style.add_modifier(Modifier::BOLD);
            }
            let label_y = (center_y + LABEL_OFFSET * ratio_y).round() as i32;
            draw_centered(buf, area, center_x, label_y, &tab.entry.label, style);

            let sub_style = Style::default()
                .fg(self.theme.fade(self.theme.grey1, tab.label_alpha))
                .bg(self.theme.bg0);
            let sub_y = (center_y + SUB_LABEL_OFFSET * ratio_y).round() as i32;
            draw_centered(buf, area, center_x, sub_y, &tab.entry.sub_label, sub_style);
        }
    }
}

impl TabStripWidget<'_> {
    /// Plate plus a one-letter glyph standing in for the icon
    fn draw_icon(&self, buf: &mut Buffer, area: Rect, tab: &TabFrame, center_x: f32, center_y: f32) {
        if tab.icon_alpha < MIN_VISIBLE_ALPHA {
            return;
        }

        let plate = self.theme.fade(self.theme.tab_color(tab.index), tab.icon_alpha);
        let width = tab.plate_size.max(1.0);
        let height = (tab.plate_size / CELL_ASPECT).max(1.0);
        fill(
            buf,
            area,
            (center_x - width / 2.0).round() as i32,
            (center_y - height / 2.0).round() as i32,
            width.round() as i32,
            height.round() as i32,
            plate,
        );

        let glyph = tab
            .entry
            .icon
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default();
        let style = Style::default()
            .fg(self.theme.fade(self.theme.fg0, tab.icon_alpha))
            .bg(plate)
            .add_modifier(Modifier::BOLD);
        draw_centered(buf, area, center_x, center_y.round() as i32, &glyph, style);
    }
}

fn contains(area: Rect, x: i32, y: i32) -> bool {
    x >= area.x as i32
        && y >= area.y as i32
        && x < area.x as i32 + area.width as i32
        && y < area.y as i32 + area.height as i32
}

fn fill(buf: &mut Buffer, area: Rect, x: i32, y: i32, width: i32, height: i32, color: Color) {
    for row in y..y + height.max(1) {
        for col in x..x + width.max(1) {
            if !contains(area, col, row) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
                cell.set_char(' ');
                cell.set_bg(color);
            }
        }
    }
}

/// Write `text` centered on `center_x`, clipping whatever falls outside `area`
fn draw_centered(buf: &mut Buffer, area: Rect, center_x: f32, y: i32, text: &str, style: Style) {
    let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    let mut x = (center_x - width as f32 / 2.0).round() as i32;

    for c in text.chars() {
        let w = c.width().unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        // Wide characters are only drawn when they fit entirely
        if contains(area, x, y) && contains(area, x + w - 1, y) {
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                cell.set_char(c);
                cell.set_style(style);
            }
        }
        x += w;
    }
}
