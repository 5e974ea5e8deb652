//! Activation commands and the scene stack they push onto
//!
//! The tab strip is always the bottom scene. Confirming a tab runs its
//! [`Command`], which pushes one [`Scene`] on top; popping back to the strip
//! is reported to the controller as a return from a child scene.

use std::path::PathBuf;

use tracing::debug;

/// Scene built on top of the tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    MainMenu,
    Settings,
    /// Item list of one collection
    Collection { path: PathBuf },
    /// Directory browser offering to scan `dir`
    Explorer { dir: PathBuf },
}

impl Scene {
    pub fn title(&self) -> String {
        match self {
            Scene::MainMenu => "Main Menu".to_string(),
            Scene::Settings => "Settings".to_string(),
            Scene::Collection { path } => tabdeck_core::collection::short_name(
                &tabdeck_core::collection::file_stem(path),
            ),
            Scene::Explorer { dir } => format!("Scan {}", dir.display()),
        }
    }
}

/// Action bound to a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenMainMenu,
    OpenSettings,
    OpenCollection { path: PathBuf },
    BrowseForScan { start_dir: PathBuf },
}

impl Command {
    /// The scene this command opens
    pub fn scene(&self) -> Scene {
        match self {
            Command::OpenMainMenu => Scene::MainMenu,
            Command::OpenSettings => Scene::Settings,
            Command::OpenCollection { path } => Scene::Collection { path: path.clone() },
            Command::BrowseForScan { start_dir } => Scene::Explorer {
                dir: start_dir.clone(),
            },
        }
    }

    pub fn execute(&self, stack: &mut dyn SceneStack) {
        let scene = self.scene();
        debug!("Executing {:?}: pushing {:?}", self, scene);
        stack.push(scene);
    }
}

/// Scenes stacked above the tab strip
pub trait SceneStack {
    fn push(&mut self, scene: Scene);

    /// Number of scenes above the tab strip
    fn depth(&self) -> usize;

    /// Whether the tab strip is the visible scene
    fn is_root(&self) -> bool {
        self.depth() == 0
    }
}

/// Vec-backed [`SceneStack`]
#[derive(Debug, Clone, Default)]
pub struct SceneHistory {
    scenes: Vec<Scene>,
}

impl SceneHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&mut self) -> Option<Scene> {
        self.scenes.pop()
    }

    pub fn top(&self) -> Option<&Scene> {
        self.scenes.last()
    }
}

impl SceneStack for SceneHistory {
    fn push(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    fn depth(&self) -> usize {
        self.scenes.len()
    }
}
