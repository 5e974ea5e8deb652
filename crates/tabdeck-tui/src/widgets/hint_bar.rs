use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct HintBarWidget;

impl HintBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let hints: &[(&str, &str)] = if app.at_root() {
            &[("←/→", "NAVIGATE"), ("↵", "OPEN"), ("r", "RESCAN"), ("q", "QUIT")]
        } else {
            &[("↵", "OK"), ("esc", "BACK"), ("q", "QUIT")]
        };

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.grey1)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}  ", label),
                Style::default().fg(theme.fg1).bg(theme.bg2),
            ));
        }

        let status = match &app.status_message {
            Some(msg) => format!("{} ", msg),
            None if app.scans_in_flight > 0 => "Scanning... ".to_string(),
            None => String::new(),
        };

        let used: usize = spans.iter().map(|span| span.content.width()).sum();
        let padding = (area.width as usize).saturating_sub(used + status.width());
        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(theme.bg2),
        ));
        spans.push(Span::styled(
            status,
            Style::default().fg(theme.accent).bg(theme.bg2),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
