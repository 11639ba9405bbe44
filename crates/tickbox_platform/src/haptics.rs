//! Haptic feedback
//!
//! A [`HapticEngine`] hands out short-lived [`HapticFeedback`] generators.
//! Controls acquire a generator when a touch begins, call
//! [`HapticFeedback::prepare`] so the motor is spun up before the finger
//! lifts, fire [`HapticFeedback::impact_occurred`] once on release and then
//! drop the generator.

use std::fmt;
use std::sync::Arc;

use crate::native_bridge::{NativeBridge, NativeValue};

/// Strength of an impact pulse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    #[default]
    Light,
    Medium,
    Heavy,
}

impl ImpactStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
        }
    }
}

impl fmt::Display for ImpactStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single impact feedback generator
pub trait HapticFeedback {
    /// Pre-warm the motor so the next impact fires with minimal latency
    fn prepare(&mut self);

    /// Fire the impact pulse
    fn impact_occurred(&mut self);
}

/// Source of impact feedback generators
pub trait HapticEngine {
    fn generator(&self, style: ImpactStyle) -> Box<dyn HapticFeedback>;
}

// ─────────────────────────────────────────────────────────────────────────────
// No-op engine
// ─────────────────────────────────────────────────────────────────────────────

/// Engine for hosts without a vibration motor
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticEngine for NoopHaptics {
    fn generator(&self, _style: ImpactStyle) -> Box<dyn HapticFeedback> {
        Box::new(NoopHaptics)
    }
}

impl HapticFeedback for NoopHaptics {
    fn prepare(&mut self) {}

    fn impact_occurred(&mut self) {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Native engine
// ─────────────────────────────────────────────────────────────────────────────

/// Namespace the platform registers its haptic handlers under
pub const HAPTICS_NAMESPACE: &str = "haptics";

/// Engine that forwards to the platform over the [`NativeBridge`]
///
/// Calls `haptics.prepare(style)` and `haptics.impact(style)`. Failures are
/// logged and dropped: a missing motor never interrupts a tap.
#[derive(Clone)]
pub struct NativeHaptics {
    bridge: Arc<NativeBridge>,
}

impl NativeHaptics {
    pub fn new(bridge: Arc<NativeBridge>) -> Self {
        Self { bridge }
    }

    /// Engine bound to the process-wide bridge
    pub fn global() -> Self {
        Self::new(NativeBridge::global())
    }
}

impl HapticEngine for NativeHaptics {
    fn generator(&self, style: ImpactStyle) -> Box<dyn HapticFeedback> {
        Box::new(NativeImpactGenerator {
            bridge: self.bridge.clone(),
            style,
        })
    }
}

struct NativeImpactGenerator {
    bridge: Arc<NativeBridge>,
    style: ImpactStyle,
}

impl NativeImpactGenerator {
    fn send(&self, name: &str) {
        let args = [NativeValue::from(self.style.as_str())];
        if let Err(err) = self.bridge.call(HAPTICS_NAMESPACE, name, &args) {
            tracing::warn!(style = %self.style, "haptics.{} failed: {}", name, err);
        }
    }
}

impl HapticFeedback for NativeImpactGenerator {
    fn prepare(&mut self) {
        self.send("prepare");
    }

    fn impact_occurred(&mut self) {
        self.send("impact");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NativeBridgeError;
    use std::sync::Mutex;

    #[test]
    fn test_native_haptics_forwards_style() {
        let bridge = Arc::new(NativeBridge::new());
        let calls = Arc::new(Mutex::new(Vec::new()));

        for name in ["prepare", "impact"] {
            let calls = calls.clone();
            bridge.register(HAPTICS_NAMESPACE, name, move |args| {
                let style = args.first().and_then(|v| v.as_str()).unwrap_or_default();
                calls.lock().unwrap().push(format!("{}:{}", name, style));
                Ok(NativeValue::Void)
            });
        }

        let engine = NativeHaptics::new(bridge);
        let mut generator = engine.generator(ImpactStyle::Light);
        generator.prepare();
        generator.impact_occurred();

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["prepare:light".to_string(), "impact:light".to_string()]
        );
    }

    #[test]
    fn test_native_haptics_swallows_missing_handler() {
        let engine = NativeHaptics::new(Arc::new(NativeBridge::new()));
        let mut generator = engine.generator(ImpactStyle::Heavy);
        // No handler registered: must not panic
        generator.prepare();
        generator.impact_occurred();
    }

    #[test]
    fn test_native_haptics_swallows_platform_error() {
        let bridge = Arc::new(NativeBridge::new());
        bridge.register(HAPTICS_NAMESPACE, "impact", |_| {
            Err(NativeBridgeError::Platform("motor busy".into()))
        });
        let mut generator = NativeHaptics::new(bridge).generator(ImpactStyle::Light);
        generator.impact_occurred();
    }

    #[test]
    fn test_impact_style_names() {
        assert_eq!(ImpactStyle::default(), ImpactStyle::Light);
        assert_eq!(ImpactStyle::Medium.to_string(), "medium");
    }
}
