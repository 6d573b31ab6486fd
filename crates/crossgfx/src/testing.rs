//! In-memory fake backend for tests
//!
//! Implements the device interfaces over plain host memory so that
//! backend-independent code can be exercised without GPU drivers. The fake
//! reproduces the one backend convention that matters to consumers: devices
//! whose capabilities report `flips_color_readback_on_upload` return color
//! attachment read-backs with rows in bottom-up order.

use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{
    BackendError, BackendType, CommandBuffer, CommandQueue, Device, DeviceCapabilities, Framebuffer,
    FramebufferDesc, Texture, TextureRange,
};

/// A 2D texture of packed 32-bit pixels stored in host memory
pub struct FakeTexture {
    width: u32,
    height: u32,
    pixels: Mutex<Vec<u32>>,
}

impl FakeTexture {
    /// Creates a zero-initialized texture of the given extent
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            width,
            height,
            pixels: Mutex::new(vec![0; width as usize * height as usize]),
        })
    }

    /// Writes pixel data into a region of the texture
    ///
    /// Rows in `data` are interpreted top-down, matching upload order on
    /// every backend. `data` must hold exactly `range.len()` pixels and the
    /// range must be a single 2D slice inside the texture's extent.
    pub fn upload(&self, data: &[u32], range: &TextureRange) {
        assert!(range.is_single_2d_slice(), "upload requires a single 2D slice");
        assert_eq!(data.len(), range.len(), "upload data must match the range extent");
        assert!(range.x + range.width <= self.width && range.y + range.height <= self.height);

        let mut pixels = self.pixels.lock().unwrap();
        for row in 0..range.height {
            let src = (row * range.width) as usize;
            let dst = ((range.y + row) * self.width + range.x) as usize;
            pixels[dst..dst + range.width as usize]
                .copy_from_slice(&data[src..src + range.width as usize]);
        }
    }

    fn read_region(&self, dst: &mut [u32], range: &TextureRange, flip: bool) -> Result<(), BackendError> {
        if range.x + range.width > self.width || range.y + range.height > self.height {
            return Err(BackendError::CopyOutOfBounds);
        }

        let pixels = self.pixels.lock().unwrap();
        for row in 0..range.height {
            let src_row = if flip { range.y + range.height - 1 - row } else { range.y + row };
            let src = (src_row * self.width + range.x) as usize;
            let out = (row * range.width) as usize;
            dst[out..out + range.width as usize].copy_from_slice(&pixels[src..src + range.width as usize]);
        }
        Ok(())
    }
}

impl Texture for FakeTexture {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Command buffer that completes immediately
pub struct FakeCommandBuffer;

impl CommandBuffer for FakeCommandBuffer {
    fn wait_until_completed(&self) {}
}

/// Queue that counts submissions
#[derive(Default)]
pub struct FakeQueue {
    submissions: AtomicUsize,
}

impl FakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of command buffers submitted so far
    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::Relaxed)
    }
}

impl CommandQueue for FakeQueue {
    fn submit(&self, _buffer: &dyn CommandBuffer) {
        self.submissions.fetch_add(1, Ordering::Relaxed);
    }
}

struct FakeFramebuffer {
    color_attachments: Vec<Arc<dyn Texture>>,
    flips_readback: bool,
}

impl Framebuffer for FakeFramebuffer {
    fn color_attachment(&self, index: usize) -> Option<Arc<dyn Texture>> {
        self.color_attachments.get(index).cloned()
    }

    fn copy_bytes_color_attachment(
        &self,
        _queue: &dyn CommandQueue,
        index: usize,
        dst: &mut [u8],
        range: &TextureRange,
    ) -> Result<(), BackendError> {
        let attachment = self
            .color_attachments
            .get(index)
            .ok_or(BackendError::InvalidAttachment(index))?;
        let texture = attachment
            .as_any()
            .downcast_ref::<FakeTexture>()
            .ok_or(BackendError::InvalidAttachment(index))?;

        assert_eq!(dst.len(), range.len() * 4, "destination must hold the full region");
        texture.read_region(bytemuck::cast_slice_mut(dst), range, self.flips_readback)
    }
}

/// Device over host memory with injectable failures
pub struct FakeDevice {
    backend: BackendType,
    capabilities: DeviceCapabilities,
    fail_command_buffers: AtomicBool,
    fail_framebuffers: AtomicBool,
}

impl FakeDevice {
    /// Creates a device presenting as the given backend
    pub fn new(backend: BackendType) -> Self {
        Self {
            backend,
            capabilities: DeviceCapabilities::for_backend(backend),
            fail_command_buffers: AtomicBool::new(false),
            fail_framebuffers: AtomicBool::new(false),
        }
    }

    /// Makes all subsequent command buffer creations fail
    pub fn fail_command_buffers(&self) {
        self.fail_command_buffers.store(true, Ordering::Relaxed);
    }

    /// Makes all subsequent framebuffer creations fail
    pub fn fail_framebuffers(&self) {
        self.fail_framebuffers.store(true, Ordering::Relaxed);
    }
}

impl Device for FakeDevice {
    fn backend_type(&self) -> BackendType {
        self.backend
    }

    fn capabilities(&self) -> DeviceCapabilities {
        self.capabilities
    }

    fn create_command_buffer(&self) -> Result<Box<dyn CommandBuffer>, BackendError> {
        if self.fail_command_buffers.load(Ordering::Relaxed) {
            return Err(BackendError::CommandBufferCreation("injected failure".into()));
        }
        Ok(Box::new(FakeCommandBuffer))
    }

    fn create_framebuffer(&self, desc: &FramebufferDesc) -> Result<Box<dyn Framebuffer>, BackendError> {
        if self.fail_framebuffers.load(Ordering::Relaxed) {
            return Err(BackendError::FramebufferCreation("injected failure".into()));
        }
        Ok(Box::new(FakeFramebuffer {
            color_attachments: desc.color_attachments.clone(),
            flips_readback: self.capabilities.flips_color_readback_on_upload,
        }))
    }
}
