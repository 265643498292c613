//! Error types for the Night Shift controller.

/// Errors that can occur when using the Night Shift controller.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Night Shift is not available on this machine or OS version.
    #[error("Night Shift is not supported on this Mac")]
    Unsupported,

    /// The framework reported a failure while reading the blue light status.
    #[error("Failed to read Night Shift status")]
    StatusUnavailable,

    /// Failed to load the CoreBrightness framework.
    #[error("Failed to load framework: {0}")]
    FrameworkLoad(#[from] libloading::Error),

    /// The framework loaded but did not register the expected class.
    #[error("Objective-C class {0} not found")]
    ClassNotFound(&'static str),

    /// Instantiating the blue light client returned nil.
    #[error("Blue light client initialization failed")]
    ClientInitFailed,

    /// Attempted to create a second client instance.
    #[error("Client already initialized - only one instance allowed")]
    AlreadyInitialized,
}
