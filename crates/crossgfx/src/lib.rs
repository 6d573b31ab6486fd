//! Cross-backend graphics abstraction contracts
//!
//! This crate defines the device, queue, framebuffer, and texture interfaces
//! shared by the rendering backends, along with the range and capability
//! types that describe textures independently of any particular backend.
//! The `testing` module provides an in-memory backend for exercising code
//! written against these interfaces without real GPU drivers.

mod backend;
mod device;
mod error;
mod range;

pub mod testing;

pub use backend::{BackendType, DeviceCapabilities};
pub use device::{CommandBuffer, CommandQueue, Device, Framebuffer, FramebufferDesc, Texture};
pub use error::BackendError;
pub use range::TextureRange;
