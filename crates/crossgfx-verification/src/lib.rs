//! Verification utilities for crossgfx backends
//!
//! This crate provides the texture validator used to confirm that pixel data
//! produced by a rendering backend matches caller-supplied reference data.
//! A validation call flushes outstanding GPU work, reads the region under
//! test back into host memory, normalizes its vertical orientation for the
//! backend and usage at hand, and compares it pixel by pixel against the
//! expected data, reporting every mismatch.

pub mod compare;
mod error;
pub mod normalize;
pub mod readback;
pub mod sync;
mod validator;

pub use error::ValidationError;
pub use normalize::UsageKind;
pub use validator::{
    validate_framebuffer_texture, validate_framebuffer_texture_range, validate_texture_range,
    validate_uploaded_texture, validate_uploaded_texture_range,
};
