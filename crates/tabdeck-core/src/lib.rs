pub mod collection;
pub mod config;
pub mod error;
pub mod scanner;

pub use collection::{CollectionLibrary, CollectionProvider};
pub use config::{AppConfig, EasingType, TabsConfig};
pub use error::{Error, Result};
pub use scanner::{ScanEvent, ScanReport};
