use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use tabdeck_core::{AppConfig, CollectionLibrary, ScanEvent};
use tabdeck_tui::{
    animation::{timing::frame_duration, FrameClock},
    event::{AppEvent, EventHandler},
    widgets::{HintBarWidget, ScenePanelWidget, TabStripWidget},
    App,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let library = CollectionLibrary::open(config.collections_dir())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Tabdeck"))?;

    // Key releases make real holds possible; without them every press is a tap
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    debug!("Key release reporting: {}", reports_release);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (scan_tx, mut scan_rx) = mpsc::unbounded_channel::<ScanEvent>();
    let mut app = App::new(config, library, scan_tx, reports_release);
    info!("Started with {} tabs", app.navigator.len());

    let result = run_loop(&mut terminal, &mut app, &mut scan_rx);

    // Restore terminal
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    scan_rx: &mut mpsc::UnboundedReceiver<ScanEvent>,
) -> Result<()> {
    let frame_time = frame_duration(app.config.ui.animation_fps);
    let events = EventHandler::new(frame_time);
    let mut clock = FrameClock::new();

    loop {
        // Process any completed scans (non-blocking)
        while let Ok(event) = scan_rx.try_recv() {
            app.handle_scan_event(event);
        }

        // Collect input until the frame is due
        let deadline = Instant::now() + frame_time;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match events.next_within(deadline - now)? {
                Some(AppEvent::Key(key)) => app.on_key(key),
                Some(AppEvent::Tick) => break,
                Some(AppEvent::Resize(..)) | None => {}
            }
        }

        let dt = clock.tick(Instant::now());
        app.update(dt);

        terminal.draw(|frame| draw(frame, app))?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    frame.render_widget(TabStripWidget::new(&app.navigator, &app.theme), layout[0]);
    if let Some(scene) = app.current_scene() {
        ScenePanelWidget::render(frame, layout[0], app, scene);
    }
    HintBarWidget::render(frame, layout[1], app);
}
