//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The process-wide native bridge was installed twice
    #[error("Native bridge already installed")]
    BridgeAlreadyInstalled,
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Errors returned by native bridge calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NativeBridgeError {
    /// Function not registered with the bridge or its adapter
    #[error("Native function '{namespace}.{name}' not registered")]
    NotRegistered { namespace: String, name: String },

    /// Error raised by the platform side (JNI, Swift FFI, ...)
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type for native bridge operations
pub type NativeResult<T> = std::result::Result<T, NativeBridgeError>;
