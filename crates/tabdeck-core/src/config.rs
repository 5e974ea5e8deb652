use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frames per second of the update/render loop
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_fps: default_animation_fps(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Easing curve used by tab transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value when the tween completes
    None,
    Linear,
    /// Sine ease-out, the curve the tab strip was designed around
    #[default]
    OutSine,
    OutQuad,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Timing of the tab strip transitions and of directional auto-repeat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Duration of every step/activate/return transition
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// How long a direction must be held before it starts repeating
    #[serde(default = "default_initial_repeat_delay")]
    pub initial_repeat_delay_ms: u64,
    /// Time between repeated steps while a direction stays held
    #[serde(default = "default_repeat_interval")]
    pub repeat_interval_ms: u64,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            initial_repeat_delay_ms: default_initial_repeat_delay(),
            repeat_interval_ms: default_repeat_interval(),
        }
    }
}

impl TabsConfig {
    /// Transition duration in seconds
    pub fn transition_secs(&self) -> f32 {
        self.animation_duration_ms as f32 / 1000.0
    }

    pub fn initial_repeat_delay_secs(&self) -> f32 {
        self.initial_repeat_delay_ms as f32 / 1000.0
    }

    pub fn repeat_interval_secs(&self) -> f32 {
        self.repeat_interval_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Where collection files live (defaults to `<data_dir>/collections`)
    #[serde(default)]
    pub collections_dir: Option<PathBuf>,
    /// Directory the "Add games" browser starts in (defaults to home)
    #[serde(default)]
    pub scan_dir: Option<PathBuf>,
    /// File extensions picked up by the scanner
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            collections_dir: None,
            scan_dir: None,
            extensions: default_extensions(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen background, also the color faded-out tabs blend into
    pub bg0: Option<String>,
    /// Panel background
    pub bg1: Option<String>,
    /// Hint bar background
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Accent color
    pub accent: Option<String>,
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<C-c>" (Ctrl+c), "<CR>" (Enter), "<Esc>", "<Left>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Move focus to the previous tab
    #[serde(default = "default_key_left")]
    pub left: String,
    /// Move focus to the next tab
    #[serde(default = "default_key_right")]
    pub right: String,
    /// Open the focused tab
    #[serde(default = "default_key_confirm")]
    pub confirm: String,
    /// Leave a pushed scene
    #[serde(default = "default_key_back")]
    pub back: String,
    /// Reload collections from disk
    #[serde(default = "default_key_rescan")]
    pub rescan: String,
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            left: default_key_left(),
            right: default_key_right(),
            confirm: default_key_confirm(),
            back: default_key_back(),
            rescan: default_key_rescan(),
            quit: default_key_quit(),
        }
    }
}

fn default_key_left() -> String { "h".to_string() }
fn default_key_right() -> String { "l".to_string() }
fn default_key_confirm() -> String { "<CR>".to_string() }
fn default_key_back() -> String { "<BS>".to_string() }
fn default_key_rescan() -> String { "r".to_string() }
fn default_key_quit() -> String { "q".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tabdeck")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_animation_fps() -> u32 {
    60
}

fn default_animation_duration() -> u64 {
    150
}

fn default_initial_repeat_delay() -> u64 {
    300
}

fn default_repeat_interval() -> u64 {
    100
}

fn default_extensions() -> Vec<String> {
    ["nes", "sfc", "smc", "gb", "gbc", "gba", "md", "gen", "sms", "gg", "pce", "n64", "z64", "zip"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Write configuration as TOML to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tabdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tabdeck")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Directory holding the collection files
    pub fn collections_dir(&self) -> PathBuf {
        match &self.library.collections_dir {
            Some(dir) => expand_tilde(dir),
            None => self.data_dir().join("collections"),
        }
    }

    /// Directory the scan browser opens in
    pub fn scan_dir(&self) -> PathBuf {
        match &self.library.scan_dir {
            Some(dir) => expand_tilde(dir),
            None => dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("tabdeck.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tabs_config() {
        let config = TabsConfig::default();
        assert_eq!(config.animation_duration_ms, 150);
        assert_eq!(config.easing, EasingType::OutSine);
        assert!((config.transition_secs() - 0.15).abs() < 1e-6);
        assert!(config.initial_repeat_delay_ms > config.repeat_interval_ms);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [tabs]
            easing = "cubic"
            repeat_interval_ms = 80
            "#,
        )
        .unwrap();

        assert_eq!(config.tabs.easing, EasingType::Cubic);
        assert_eq!(config.tabs.repeat_interval_ms, 80);
        assert_eq!(config.tabs.animation_duration_ms, 150);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.keymap.confirm, "<CR>");
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"dracula\"\n[ui.theme.colors]\naccent = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_save_then_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/config.toml");

        let mut config = AppConfig::default();
        config.tabs.easing = EasingType::Cubic;
        config.tabs.repeat_interval_ms = 90;
        config.ui.theme.name = "nord".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::from_toml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.tabs.easing, EasingType::Cubic);
        assert_eq!(loaded.tabs.repeat_interval_ms, 90);
        assert_eq!(loaded.ui.theme.name, "nord");
        assert_eq!(loaded.keymap.confirm, config.keymap.confirm);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[tabs\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_collections_dir_defaults_under_data_dir() {
        let mut config = AppConfig::default();
        config.general.data_dir = PathBuf::from("/tmp/tabdeck-data");
        assert_eq!(
            config.collections_dir(),
            PathBuf::from("/tmp/tabdeck-data/collections")
        );

        config.library.collections_dir = Some(PathBuf::from("/srv/lists"));
        assert_eq!(config.collections_dir(), PathBuf::from("/srv/lists"));
    }
}
