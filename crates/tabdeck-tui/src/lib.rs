pub mod animation;
pub mod app;
pub mod catalog;
pub mod entry;
pub mod event;
pub mod input;
pub mod keymap;
pub mod refresh;
pub mod render;
pub mod repeat;
pub mod scene;
pub mod style;
pub mod tabs;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use entry::{Entry, EntryId, Property};
pub use repeat::{Direction, InputRepeater, NavEvent};
pub use scene::{Command, Scene, SceneHistory, SceneStack};
pub use tabs::{Phase, TabNavigator};
pub use theme::Theme;
