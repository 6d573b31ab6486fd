//! Texture range descriptors
//!
//! A `TextureRange` names a rectangular sub-image of a texture together with
//! the layer, mip level, and depth extent it spans. Read-back and validation
//! paths only accept ranges resolving to a single 2D slice.

/// Describes a rectangular region of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRange {
    /// Horizontal offset of the region in pixels
    pub x: u32,
    /// Vertical offset of the region in pixels
    pub y: u32,
    /// Region width in pixels
    pub width: u32,
    /// Region height in pixels
    pub height: u32,
    /// Depth extent of the region
    pub depth: u32,
    /// Number of array layers spanned by the region
    pub num_layers: u32,
    /// Number of mip levels spanned by the region
    pub num_mip_levels: u32,
    /// First mip level of the region
    pub mip_level: u32,
    /// First array layer of the region
    pub layer: u32,
}

impl TextureRange {
    /// Creates a single-slice 2D range at the given offset and extent
    pub fn new_2d(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            depth: 1,
            num_layers: 1,
            num_mip_levels: 1,
            mip_level: 0,
            layer: 0,
        }
    }

    /// Number of pixels covered by the 2D extent of this range
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the 2D extent covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when the range resolves to exactly one 2D slice
    pub fn is_single_2d_slice(&self) -> bool {
        self.num_layers == 1 && self.num_mip_levels == 1 && self.depth == 1
    }
}

impl Default for TextureRange {
    fn default() -> Self {
        Self::new_2d(0, 0, 0, 0)
    }
}
