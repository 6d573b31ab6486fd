//! Read-back orientation normalization
//!
//! Metal- and Vulkan-style backends return color attachment read-backs with
//! rows in bottom-up order. For render targets this is the canonical
//! orientation that expected data is authored against, so it is left alone.
//! For textures populated only by direct upload, expected data is authored
//! in top-down upload order, so the backend's flip has to be undone before
//! comparison. Which backends flip is a device capability, not knowledge
//! owned by this module.

use crossgfx::DeviceCapabilities;

/// How the texture under test received its contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    /// The texture was the target of a render pass
    RenderTarget,
    /// The texture was only ever written by direct upload
    Uploaded,
}

/// Decides whether read-back data must be vertically flipped before comparison
pub fn needs_flip(capabilities: &DeviceCapabilities, usage: UsageKind) -> bool {
    usage == UsageKind::Uploaded && capabilities.flips_color_readback_on_upload
}

/// Reverses the row order of a row-major pixel buffer
///
/// Output row `h` is input row `height - 1 - h`; element order within a row
/// is unchanged. A fresh buffer is produced rather than flipping in place.
/// Empty extents pass through untouched.
///
/// # Panics
/// Panics if `pixels.len()` does not equal `width * height`.
pub fn flip_vertical(pixels: Vec<u32>, width: u32, height: u32) -> Vec<u32> {
    assert_eq!(
        pixels.len(),
        width as usize * height as usize,
        "pixel buffer must match the stated extent"
    );
    if width == 0 || height == 0 {
        return pixels;
    }

    let width = width as usize;
    let mut flipped = Vec::with_capacity(pixels.len());
    for row in (0..height as usize).rev() {
        flipped.extend_from_slice(&pixels[row * width..(row + 1) * width]);
    }
    flipped
}
