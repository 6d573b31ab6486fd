//! Backend identity and capability resolution
//!
//! Backends differ in a few observable conventions, most notably the vertical
//! orientation of color attachment read-backs. Rather than letting consumers
//! match on `BackendType` directly, each convention is resolved once at device
//! construction time into a `DeviceCapabilities` flag.

/// Identifies which rendering backend a device is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendType {
    /// Metal-style backend
    Metal,
    /// Vulkan-style backend
    Vulkan,
    /// Legacy OpenGL-style backend
    OpenGl,
}

/// Per-device behavioral capabilities resolved from the backend identity
///
/// Consumers should branch on these flags instead of on `BackendType`, so new
/// backends only need their capabilities declared in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// Whether `copy_bytes_color_attachment` returns the image vertically
    /// flipped relative to upload order.
    ///
    /// Metal and Vulkan devices read color attachments back bottom-up. This
    /// is the desired orientation for render targets but must be undone when
    /// comparing directly uploaded data against its upload order.
    pub flips_color_readback_on_upload: bool,
}

impl DeviceCapabilities {
    /// Resolves the capabilities for a backend
    ///
    /// # Arguments
    /// * `backend` - The backend identity the device was constructed with
    pub fn for_backend(backend: BackendType) -> Self {
        Self {
            flips_color_readback_on_upload: matches!(backend, BackendType::Metal | BackendType::Vulkan),
        }
    }
}
