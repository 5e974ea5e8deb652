use std::sync::Arc;

use crossterm::event::{KeyEvent, KeyEventKind};
use tabdeck_core::scanner::{self, ScanEvent};
use tabdeck_core::{AppConfig, CollectionLibrary, CollectionProvider};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::{collection_entries, root_entries};
use crate::input::{handle_key_event, Action, Button, ButtonTracker};
use crate::keymap::Keymap;
use crate::scene::{Scene, SceneHistory, SceneStack};
use crate::tabs::TabNavigator;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub navigator: TabNavigator,
    pub scenes: SceneHistory,
    pub library: CollectionLibrary,
    pub theme: Theme,
    pub keymap: Keymap,
    tracker: ButtonTracker,
    scan_tx: mpsc::UnboundedSender<ScanEvent>,
    /// Scans started and not reported back yet
    pub scans_in_flight: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the root strip from `library`
    ///
    /// `reports_release` tells whether the terminal sends key release events.
    pub fn new(
        config: Arc<AppConfig>,
        library: CollectionLibrary,
        scan_tx: mpsc::UnboundedSender<ScanEvent>,
        reports_release: bool,
    ) -> Self {
        let entries = root_entries(&library, &config.scan_dir());
        let navigator = TabNavigator::new(entries, &config.tabs);
        let theme = load_theme(&config.ui.theme);
        let keymap = Keymap::from_config(&config.keymap);

        Self {
            navigator,
            scenes: SceneHistory::new(),
            library,
            theme,
            keymap,
            tracker: ButtonTracker::new(reports_release),
            scan_tx,
            scans_in_flight: 0,
            status_message: None,
            should_quit: false,
            config,
        }
    }

    pub fn at_root(&self) -> bool {
        self.scenes.is_root()
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.scenes.top()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Feed one terminal key event
    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(action) = handle_key_event(key, &self.keymap) else {
            return;
        };

        match action.button() {
            Some(button) => self.tracker.on_key(button, key.kind),
            None if key.kind == KeyEventKind::Release => {}
            None => match action {
                Action::Quit => self.should_quit = true,
                Action::Rescan => self.reload_collections(),
                _ => {}
            },
        }
    }

    /// Advance one frame by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let input = self.tracker.snapshot();
        let depth = self.scenes.depth();

        if self.scenes.is_root() {
            self.navigator.update(dt, &input, &mut self.scenes);
        } else {
            self.navigator.tick(dt);
            if input.released(Button::Back) {
                self.close_scene();
            } else if input.released(Button::Confirm) {
                self.confirm_scene();
            }
        }

        if self.scenes.depth() != depth {
            self.tracker.reset();
            self.clear_status();
        }
    }

    /// Pop the scene on top and animate the strip back if it is visible again
    pub fn close_scene(&mut self) {
        let Some(scene) = self.scenes.pop() else {
            return;
        };
        debug!("Closed {:?}", scene);
        if self.scenes.is_root() {
            self.navigator.segue_back();
        }
    }

    fn confirm_scene(&mut self) {
        if let Some(Scene::Explorer { dir }) = self.scenes.top() {
            let dir = dir.clone();
            self.start_scan(dir);
            self.close_scene();
        }
    }

    /// Scan `dir` in the background; the strip refreshes when it reports back
    pub fn start_scan(&mut self, dir: std::path::PathBuf) {
        info!("Scanning {}", dir.display());
        self.set_status(format!("Scanning {}...", dir.display()));
        self.scans_in_flight += 1;
        scanner::spawn_scan(
            dir,
            self.config.collections_dir(),
            self.config.library.extensions.clone(),
            self.scan_tx.clone(),
        );
    }

    /// Apply the outcome of a background scan
    pub fn handle_scan_event(&mut self, event: ScanEvent) {
        self.scans_in_flight = self.scans_in_flight.saturating_sub(1);
        match event {
            ScanEvent::Finished(report) => {
                self.reload_collections();
                self.set_status(format!(
                    "Scan finished: {} files, {} new",
                    report.files_seen, report.added
                ));
            }
            ScanEvent::Failed { root, error } => {
                warn!("Scan of {} failed: {}", root.display(), error);
                self.set_status(format!("Scan failed: {}", error));
            }
        }
    }

    /// Re-read the library from disk and splice its collections into the strip
    pub fn reload_collections(&mut self) {
        if let Err(e) = self.library.load() {
            warn!("Failed to load collections: {}", e);
            self.set_status(format!("Failed to load collections: {}", e));
            return;
        }
        let discovered = collection_entries(&self.library);
        self.navigator.refresh(discovered, self.scenes.depth());
    }
}
