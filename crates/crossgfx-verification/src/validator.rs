//! Texture validation entry points
//!
//! Each entry point runs the same pipeline: flush outstanding GPU work, read
//! the region under test back into host memory, normalize its vertical
//! orientation for the device and usage at hand, and compare it against the
//! expected data. They differ only in how the region and usage are derived.

use std::sync::Arc;

use crossgfx::{CommandQueue, Device, Framebuffer, Texture, TextureRange};

use crate::ValidationError;
use crate::compare::compare_pixels;
use crate::normalize::{UsageKind, flip_vertical, needs_flip};
use crate::readback::read_color_region;
use crate::sync::flush_gpu;

/// Validates a region of a texture against expected pixel data
///
/// # Arguments
/// * `device` - Device the texture was created with
/// * `queue` - Queue any outstanding work was submitted on
/// * `texture` - Texture to validate
/// * `usage` - Whether the texture was the target of a render pass
/// * `range` - Region to validate; must resolve to a single 2D slice
/// * `expected` - Expected pixel values, `range.len()` entries
/// * `message` - Diagnostic context attached to any mismatch report
pub fn validate_texture_range(
    device: &dyn Device,
    queue: &dyn CommandQueue,
    texture: &Arc<dyn Texture>,
    usage: UsageKind,
    range: &TextureRange,
    expected: &[u32],
    message: &str,
) -> Result<(), ValidationError> {
    assert_eq!(
        expected.len(),
        range.len(),
        "expected data must match the range extent"
    );

    flush_gpu(device, queue)?;
    let mut actual = read_color_region(device, queue, texture, range)?;

    if needs_flip(&device.capabilities(), usage) {
        tracing::debug!(width = range.width, height = range.height, "undoing backend read-back flip");
        actual = flip_vertical(actual, range.width, range.height);
    }

    compare_pixels(expected, &actual, message).map_err(ValidationError::Mismatch)
}

/// Validates a region of a framebuffer's first color attachment
///
/// The attachment is always treated as a render target.
pub fn validate_framebuffer_texture_range(
    device: &dyn Device,
    queue: &dyn CommandQueue,
    framebuffer: &dyn Framebuffer,
    range: &TextureRange,
    expected: &[u32],
    message: &str,
) -> Result<(), ValidationError> {
    let texture = framebuffer
        .color_attachment(0)
        .ok_or(ValidationError::MissingAttachment(0))?;
    validate_texture_range(device, queue, &texture, UsageKind::RenderTarget, range, expected, message)
}

/// Validates the full extent of a framebuffer's first color attachment
pub fn validate_framebuffer_texture(
    device: &dyn Device,
    queue: &dyn CommandQueue,
    framebuffer: &dyn Framebuffer,
    expected: &[u32],
    message: &str,
) -> Result<(), ValidationError> {
    let texture = framebuffer
        .color_attachment(0)
        .ok_or(ValidationError::MissingAttachment(0))?;
    let range = texture.full_range();
    validate_texture_range(device, queue, &texture, UsageKind::RenderTarget, &range, expected, message)
}

/// Validates a region of a directly uploaded texture
///
/// The texture is always treated as non-render-target, so expected data is
/// authored in top-down upload order.
pub fn validate_uploaded_texture_range(
    device: &dyn Device,
    queue: &dyn CommandQueue,
    texture: &Arc<dyn Texture>,
    range: &TextureRange,
    expected: &[u32],
    message: &str,
) -> Result<(), ValidationError> {
    validate_texture_range(device, queue, texture, UsageKind::Uploaded, range, expected, message)
}

/// Validates the full extent of a directly uploaded texture
pub fn validate_uploaded_texture(
    device: &dyn Device,
    queue: &dyn CommandQueue,
    texture: &Arc<dyn Texture>,
    expected: &[u32],
    message: &str,
) -> Result<(), ValidationError> {
    let range = texture.full_range();
    validate_texture_range(device, queue, texture, UsageKind::Uploaded, &range, expected, message)
}
