//! Validation error types

use crossgfx::BackendError;
use thiserror::Error;

use crate::compare::MismatchReport;

/// Errors surfaced by a validation call
///
/// Collaborator failures (`Submission`, `FramebufferCreation`, `ReadBack`)
/// indicate a broken device abstraction and are fatal to the call; there is
/// no retry. `Mismatch` carries the full set of divergent pixels.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The synchronization command buffer could not be created
    #[error("GPU flush submission failed: {0}")]
    Submission(#[source] BackendError),
    /// The ephemeral read-back framebuffer could not be created
    #[error("read-back framebuffer creation failed: {0}")]
    FramebufferCreation(#[source] BackendError),
    /// The device-to-host pixel copy failed
    #[error("color attachment read-back failed: {0}")]
    ReadBack(#[source] BackendError),
    /// The framebuffer under test has no color attachment at the given index
    #[error("framebuffer has no color attachment at index {0}")]
    MissingAttachment(usize),
    /// The read-back data differs from the expected data
    #[error("{0}")]
    Mismatch(MismatchReport),
}
