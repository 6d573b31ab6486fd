//! Backend error types

use thiserror::Error;

/// Errors surfaced by a backend implementation
#[derive(Debug, Error)]
pub enum BackendError {
    /// The device failed to create a command buffer
    #[error("command buffer creation failed: {0}")]
    CommandBufferCreation(String),
    /// The device failed to create a framebuffer
    #[error("framebuffer creation failed: {0}")]
    FramebufferCreation(String),
    /// A read-back region falls outside the attachment's extent
    #[error("copy region exceeds attachment bounds")]
    CopyOutOfBounds,
    /// A framebuffer operation referenced an unbound color attachment
    #[error("no color attachment bound at index {0}")]
    InvalidAttachment(usize),
}
