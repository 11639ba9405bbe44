//! Native Bridge for Rust ↔ Platform calls
//!
//! Routes `namespace.name` calls either to Rust-registered handlers or to a
//! platform adapter (JNI on Android, C FFI into Swift on iOS). Rust handlers
//! are checked first, which is how desktop fallbacks and tests stand in for
//! a device.
//!
//! ```text
//! NativeHaptics::impact_occurred()
//!              │
//!              ▼
//! NativeBridge::call("haptics", "impact", [String("light")])
//!              │
//!       ┌──────┴───────────────┐
//!       ▼                      ▼
//! Rust handler          PlatformAdapter (JNI / Swift FFI)
//! ```
//!
//! # Swift side
//!
//! ```swift
//! TickboxNativeBridge.shared.register(namespace: "haptics", name: "impact") { args in
//!     UIImpactFeedbackGenerator(style: .light).impactOccurred()
//!     return nil
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::{NativeBridgeError, NativeResult, PlatformError};

/// Handler function type for native calls
pub type NativeHandler = Arc<dyn Fn(&[NativeValue]) -> NativeResult<NativeValue> + Send + Sync>;

/// Process-wide bridge used by platform glue
static GLOBAL_BRIDGE: OnceLock<Arc<NativeBridge>> = OnceLock::new();

/// Value type for cross-FFI transport
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// No value (void return)
    Void,
    Bool(bool),
    String(String),
}

impl NativeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_string())
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Bool(value)
    }
}

/// Trait for platform-specific native call adapters
pub trait PlatformAdapter: Send + Sync {
    /// Call a native function by namespace and name
    fn call(&self, namespace: &str, name: &str, args: &[NativeValue])
        -> NativeResult<NativeValue>;
}

/// Registry of native handlers plus an optional platform adapter
#[derive(Default)]
pub struct NativeBridge {
    /// Rust-registered handlers: namespace -> (name -> handler)
    handlers: RwLock<HashMap<String, HashMap<String, NativeHandler>>>,
    /// Platform adapter (JNI for Android, C FFI for iOS)
    platform_adapter: RwLock<Option<Arc<dyn PlatformAdapter>>>,
}

impl NativeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `bridge` as the process-wide instance
    pub fn install_global(bridge: Arc<NativeBridge>) -> crate::Result<()> {
        GLOBAL_BRIDGE
            .set(bridge)
            .map_err(|_| PlatformError::BridgeAlreadyInstalled)
    }

    /// The process-wide bridge, created empty on first use
    pub fn global() -> Arc<NativeBridge> {
        GLOBAL_BRIDGE
            .get_or_init(|| Arc::new(NativeBridge::new()))
            .clone()
    }

    /// Set the platform adapter
    pub fn set_platform_adapter(&self, adapter: Arc<dyn PlatformAdapter>) {
        *self
            .platform_adapter
            .write()
            .unwrap_or_else(|e| e.into_inner()) = Some(adapter);
    }

    /// Register a Rust-side handler
    pub fn register<F>(&self, namespace: &str, name: &str, handler: F)
    where
        F: Fn(&[NativeValue]) -> NativeResult<NativeValue> + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        handlers
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string(), Arc::new(handler));
    }

    /// Unregister a Rust-side handler
    pub fn unregister(&self, namespace: &str, name: &str) -> bool {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        handlers
            .get_mut(namespace)
            .map(|ns| ns.remove(name).is_some())
            .unwrap_or(false)
    }

    /// Call a native function
    ///
    /// Resolution order:
    /// 1. Rust-registered handlers
    /// 2. Platform adapter
    pub fn call(&self, namespace: &str, name: &str, args: &[NativeValue]) -> NativeResult<NativeValue> {
        let handler = {
            let handlers = self.handlers.read().unwrap_or_else(|e| e.into_inner());
            handlers
                .get(namespace)
                .and_then(|ns| ns.get(name))
                .cloned()
        };
        if let Some(handler) = handler {
            return handler(args);
        }

        let adapter = self
            .platform_adapter
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(adapter) = adapter {
            return adapter.call(namespace, name, args);
        }

        Err(NativeBridgeError::NotRegistered {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    /// Check if a call could be routed (Rust handler or any adapter)
    pub fn has_handler(&self, namespace: &str, name: &str) -> bool {
        let registered = self
            .handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(namespace)
            .is_some_and(|ns| ns.contains_key(name));

        registered
            || self
                .platform_adapter
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .is_some()
    }
}
