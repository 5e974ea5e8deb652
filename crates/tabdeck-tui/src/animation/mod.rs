//! Tween animation system for the tab strip
//!
//! # Layers
//!
//! - `easing` - Pure easing curves mapping [0, 1] onto [0, 1]
//! - `timing` - Progress, interpolation and frame clock helpers
//! - `scheduler` - Per-slot tween registry advanced once per frame
//!
//! # Usage
//!
//! ```ignore
//! use tabdeck_tui::animation::{AnimationScheduler, EasingType, EasingTypeExt};
//!
//! let mut scheduler = AnimationScheduler::new();
//! scheduler.schedule(&mut store, slot, 500.0, 0.15, EasingType::OutSine.function());
//!
//! // In the frame loop
//! scheduler.tick(&mut store, dt);
//! ```

pub mod easing;
pub mod scheduler;
pub mod timing;

pub use easing::{EasingFn, EasingType, EasingTypeExt};
pub use scheduler::{AnimationScheduler, SlotStore, Tween};
pub use timing::FrameClock;
