//! Device-to-host pixel read-back
//!
//! Arbitrary textures are read through an ephemeral framebuffer whose sole
//! color attachment is the texture under test, so render targets and
//! uploaded-only textures go through the identical copy path. The
//! framebuffer lives only for the duration of one read and is dropped on
//! every exit path.

use std::sync::Arc;

use crossgfx::{CommandQueue, Device, FramebufferDesc, Texture, TextureRange};

use crate::ValidationError;

/// Reads a region of a texture's packed 32-bit pixels into a fresh buffer
///
/// Rows are returned in the backend's native read-back orientation; callers
/// are responsible for normalizing orientation afterwards.
///
/// # Arguments
/// * `device` - Device the texture was created with
/// * `queue` - Queue used to schedule the copy
/// * `texture` - Texture to read from
/// * `range` - Region to read; must resolve to a single 2D slice
///
/// # Panics
/// Panics if the range spans multiple layers, mip levels, or depth slices.
/// Malformed ranges here are test-authoring bugs, not runtime conditions.
pub fn read_color_region(
    device: &dyn Device,
    queue: &dyn CommandQueue,
    texture: &Arc<dyn Texture>,
    range: &TextureRange,
) -> Result<Vec<u32>, ValidationError> {
    assert_eq!(range.num_layers, 1, "read-back requires a single layer");
    assert_eq!(range.num_mip_levels, 1, "read-back requires a single mip level");
    assert_eq!(range.depth, 1, "read-back requires a single depth slice");

    let mut pixels = vec![0u32; range.len()];

    let desc = FramebufferDesc {
        color_attachments: vec![Arc::clone(texture)],
    };
    let framebuffer = device
        .create_framebuffer(&desc)
        .map_err(ValidationError::FramebufferCreation)?;
    framebuffer
        .copy_bytes_color_attachment(queue, 0, bytemuck::cast_slice_mut(&mut pixels), range)
        .map_err(ValidationError::ReadBack)?;

    tracing::trace!(width = range.width, height = range.height, "region read back");
    Ok(pixels)
}
