//! Device, queue, framebuffer, and texture interfaces
//!
//! These traits are the seam between backend implementations and
//! backend-independent consumers such as the texture validator. Texture
//! handles are shared (`Arc<dyn Texture>`) because a texture may be bound as
//! a framebuffer attachment while the caller retains its own handle.

use std::any::Any;
use std::sync::Arc;

use crate::{BackendError, BackendType, DeviceCapabilities, TextureRange};

/// A texture resident on a device
pub trait Texture: Send + Sync {
    /// Width and height of the base mip level in pixels
    fn dimensions(&self) -> (u32, u32);

    /// The range covering the texture's full single-slice 2D extent
    fn full_range(&self) -> TextureRange {
        let (width, height) = self.dimensions();
        TextureRange::new_2d(0, 0, width, height)
    }

    /// Escape hatch for backend code to recover its concrete texture type
    fn as_any(&self) -> &dyn Any;
}

/// A unit of recorded GPU work
pub trait CommandBuffer {
    /// Blocks the calling thread until this buffer, and everything submitted
    /// before it, has finished executing on the device.
    fn wait_until_completed(&self);
}

/// A submission channel for command buffers
pub trait CommandQueue {
    /// Schedules a command buffer for execution
    fn submit(&self, buffer: &dyn CommandBuffer);
}

/// Describes the attachments of a framebuffer to be created
#[derive(Clone, Default)]
pub struct FramebufferDesc {
    /// Color attachments, by attachment index
    pub color_attachments: Vec<Arc<dyn Texture>>,
}

/// A set of attachments that can be rendered to and read back from
pub trait Framebuffer {
    /// Returns the texture bound as the color attachment at `index`
    fn color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>>;

    /// Copies packed 32-bit pixels from a color attachment into host memory
    ///
    /// The destination must hold exactly `range.len()` packed u32 pixels;
    /// rows are written in the backend's native read-back orientation (see
    /// [`DeviceCapabilities::flips_color_readback_on_upload`]).
    ///
    /// # Arguments
    /// * `queue` - Queue used to schedule the device-to-host copy
    /// * `index` - Color attachment index to read from
    /// * `dst` - Destination byte buffer, `4 * range.len()` bytes
    /// * `range` - Single 2D slice of the attachment to copy
    fn copy_bytes_color_attachment(
        &self,
        queue: &dyn CommandQueue,
        index: usize,
        dst: &mut [u8],
        range: &TextureRange,
    ) -> Result<(), BackendError>;
}

/// A rendering device bound to one backend
pub trait Device {
    /// The backend identity this device was constructed with
    fn backend_type(&self) -> BackendType;

    /// Behavioral capabilities resolved at device construction
    fn capabilities(&self) -> DeviceCapabilities;

    /// Creates an empty command buffer ready for submission
    fn create_command_buffer(&self) -> Result<Box<dyn CommandBuffer>, BackendError>;

    /// Creates a framebuffer over the given attachments
    fn create_framebuffer(&self, desc: &FramebufferDesc) -> Result<Box<dyn Framebuffer>, BackendError>;
}
