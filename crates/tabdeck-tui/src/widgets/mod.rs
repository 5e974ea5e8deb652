mod hint_bar;
mod scene_panel;
mod tab_strip;

pub use hint_bar::HintBarWidget;
pub use scene_panel::ScenePanelWidget;
pub use tab_strip::TabStripWidget;
