//! GPU synchronization
//!
//! Read-back must not race with in-flight rendering. Submitting an empty
//! command buffer and blocking on its completion guarantees that everything
//! submitted before it has finished executing.

use crossgfx::{CommandQueue, Device};

use crate::ValidationError;

/// Blocks until all previously submitted GPU work has completed
///
/// # Arguments
/// * `device` - Device to create the empty command buffer on
/// * `queue` - Queue the preceding work was submitted on
pub fn flush_gpu(device: &dyn Device, queue: &dyn CommandQueue) -> Result<(), ValidationError> {
    let buffer = device.create_command_buffer().map_err(ValidationError::Submission)?;
    queue.submit(buffer.as_ref());
    buffer.wait_until_completed();
    tracing::trace!("GPU flush completed");
    Ok(())
}
