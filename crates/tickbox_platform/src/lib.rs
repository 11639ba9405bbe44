//! Tickbox Platform Layer
//!
//! Platform-facing services used by the controls:
//!
//! - [`InputEvent`] / [`TouchEvent`] - touch and mouse input in window coordinates
//! - [`HapticEngine`] / [`HapticFeedback`] - impact feedback generators
//! - [`NativeBridge`] - namespace/name calls into Swift or Kotlin, used by
//!   [`NativeHaptics`] to reach the device's vibration motor
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tickbox_platform::{HapticEngine, ImpactStyle, NativeBridge, NativeHaptics, NativeValue};
//!
//! let bridge = Arc::new(NativeBridge::new());
//! bridge.register("haptics", "impact", |_args| Ok(NativeValue::Void));
//!
//! let engine = NativeHaptics::new(bridge);
//! let mut generator = engine.generator(ImpactStyle::Light);
//! generator.prepare();
//! generator.impact_occurred();
//! ```

mod error;
mod haptics;
mod input;
mod native_bridge;

pub use error::{NativeBridgeError, NativeResult, PlatformError, Result};
pub use haptics::{
    HapticEngine, HapticFeedback, ImpactStyle, NativeHaptics, NoopHaptics, HAPTICS_NAMESPACE,
};
pub use input::{InputEvent, MouseButton, MouseEvent, TouchEvent, MOUSE_TOUCH_ID};
pub use native_bridge::{NativeBridge, NativeHandler, NativeValue, PlatformAdapter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::haptics::{HapticEngine, HapticFeedback, ImpactStyle};
    pub use crate::input::{InputEvent, MouseButton, MouseEvent, TouchEvent};
}
