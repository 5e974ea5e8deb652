use std::path::Path;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::scene::Scene;

/// Maximum number of collection items listed in the panel
const MAX_ITEMS: usize = 200;

/// Panel drawn over the strip for the scene on top of the stack
pub struct ScenePanelWidget;

impl ScenePanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, scene: &Scene) {
        let theme = &app.theme;

        let panel_width = 60u16.min(area.width.saturating_sub(4));
        let panel_height = 16u16.min(area.height.saturating_sub(2));
        let panel_area = centered_rect(panel_width, panel_height, area);

        frame.render_widget(Clear, panel_area);

        let block = Block::default()
            .title(format!(" {} ", scene.title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let lines = match scene {
            Scene::MainMenu => vec![
                dim_line(app, "Load cores and games manually."),
                Line::from(""),
                dim_line(app, "Nothing to load yet."),
            ],
            Scene::Settings => settings_lines(app),
            Scene::Collection { path } => collection_lines(app, path),
            Scene::Explorer { dir } => vec![
                Line::from(Span::styled(
                    "<Scan this directory>",
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                dim_line(app, &dir.display().to_string()),
            ],
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, panel_area);
    }
}

fn dim_line<'a>(app: &App, text: &str) -> Line<'a> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(app.theme.grey1),
    ))
}

fn settings_lines(app: &App) -> Vec<Line<'static>> {
    let config = &app.config;
    let rows = [
        ("Theme", config.ui.theme.name.clone()),
        ("Frame rate", format!("{} fps", config.ui.animation_fps)),
        ("Transition", format!("{} ms", config.tabs.animation_duration_ms)),
        ("Easing", format!("{:?}", config.tabs.easing)),
        (
            "Repeat",
            format!(
                "{} ms, then every {} ms",
                config.tabs.initial_repeat_delay_ms, config.tabs.repeat_interval_ms
            ),
        ),
        ("Collections", config.collections_dir().display().to_string()),
    ];

    rows.into_iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", key),
                    Style::default().fg(app.theme.grey1),
                ),
                Span::styled(value, Style::default().fg(app.theme.fg0)),
            ])
        })
        .collect()
}

fn collection_lines(app: &App, path: &Path) -> Vec<Line<'static>> {
    match app.library.items(path) {
        Ok([]) => vec![dim_line(app, "This collection is empty.")],
        Ok(items) => items
            .iter()
            .take(MAX_ITEMS)
            .map(|item| {
                Line::from(Span::styled(
                    item.name.clone(),
                    Style::default().fg(app.theme.fg0),
                ))
            })
            .collect(),
        Err(e) => vec![Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(app.theme.error),
        ))],
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
