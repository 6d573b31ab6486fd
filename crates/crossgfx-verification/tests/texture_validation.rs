//! End-to-end texture validation scenarios against the in-memory fake backend

use std::sync::Arc;

use crossgfx::testing::{FakeDevice, FakeQueue, FakeTexture};
use crossgfx::{BackendType, Device, FramebufferDesc, Texture, TextureRange};
use crossgfx_verification::{
    UsageKind, ValidationError, validate_framebuffer_texture, validate_framebuffer_texture_range,
    validate_texture_range, validate_uploaded_texture, validate_uploaded_texture_range,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// 4x4 texture with row `r` filled with the value `r`, uploaded top-down
fn banded_4x4() -> (Arc<dyn Texture>, Vec<u32>) {
    let texture = FakeTexture::new(4, 4);
    let top_down: Vec<u32> = (0..4u32).flat_map(|row| [row; 4]).collect();
    texture.upload(&top_down, &texture.full_range());
    (texture as Arc<dyn Texture>, top_down)
}

#[test]
fn uploaded_texture_on_flipping_backend_matches_upload_order() {
    init_tracing();
    let device = FakeDevice::new(BackendType::Metal);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    // The backend reads back bottom-up; the validator undoes the flip, so the
    // top-down expectation must pass.
    validate_uploaded_texture(&device, &queue, &texture, &top_down, "uploaded 4x4 on Metal").unwrap();
    assert_eq!(queue.submission_count(), 1);
}

#[test]
fn uploaded_texture_on_flipping_backend_rejects_raw_readback_order() {
    let device = FakeDevice::new(BackendType::Vulkan);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let raw_order: Vec<u32> = top_down.chunks(4).rev().flatten().copied().collect();
    let error = validate_uploaded_texture(&device, &queue, &texture, &raw_order, "raw order").unwrap_err();
    let ValidationError::Mismatch(report) = error else {
        panic!("expected a mismatch report");
    };

    // Every row value differs from its vertical mirror, so all four rows of
    // the 4x4 image diverge: rows 0 and 3 swap, rows 1 and 2 swap.
    assert_eq!(report.mismatches.len(), 16);
    let indices: Vec<usize> = report.mismatches.iter().map(|m| m.index).collect();
    assert_eq!(indices, (0..16).collect::<Vec<_>>());
    assert_eq!(report.mismatches[0].expected, 3);
    assert_eq!(report.mismatches[0].actual, 0);
    assert_eq!(report.mismatches[15].expected, 0);
    assert_eq!(report.mismatches[15].actual, 3);
}

#[test]
fn uploaded_round_trip_on_non_flipping_backend() {
    let device = FakeDevice::new(BackendType::OpenGl);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    validate_uploaded_texture(&device, &queue, &texture, &top_down, "uploaded 4x4 on OpenGL").unwrap();
}

#[test]
fn render_target_usage_is_exempt_from_flipping() {
    let device = FakeDevice::new(BackendType::Metal);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    // Render-target expectations are authored against the backend's native
    // read-back orientation, bottom-up on Metal.
    let readback_order: Vec<u32> = top_down.chunks(4).rev().flatten().copied().collect();
    validate_texture_range(
        &device,
        &queue,
        &texture,
        UsageKind::RenderTarget,
        &texture.full_range(),
        &readback_order,
        "render target on Metal",
    )
    .unwrap();

    // The same backend flips the identical texture when validated as uploaded.
    validate_uploaded_texture(&device, &queue, &texture, &top_down, "same texture as upload").unwrap();
}

#[test]
fn sub_region_of_uploaded_texture_is_normalized_within_the_region() {
    let device = FakeDevice::new(BackendType::Vulkan);
    let queue = FakeQueue::new();
    let texture = FakeTexture::new(4, 4);
    let top_down: Vec<u32> = (0..16).collect();
    texture.upload(&top_down, &texture.full_range());

    // Rows 1..3, columns 1..3, authored top-down: values 5,6 / 9,10.
    let range = TextureRange::new_2d(1, 1, 2, 2);
    let expected = [5u32, 6, 9, 10];
    let texture: Arc<dyn Texture> = texture;
    validate_uploaded_texture_range(&device, &queue, &texture, &range, &expected, "2x2 sub-region").unwrap();
}

#[test]
fn exactly_k_divergent_pixels_are_reported() {
    let device = FakeDevice::new(BackendType::OpenGl);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let mut expected = top_down;
    expected[2] = 0xff;
    expected[7] = 0xff;
    expected[11] = 0xff;
    let error = validate_uploaded_texture(&device, &queue, &texture, &expected, "three bad pixels").unwrap_err();
    let ValidationError::Mismatch(report) = error else {
        panic!("expected a mismatch report");
    };
    assert_eq!(report.mismatches.len(), 3);
    let indices: Vec<usize> = report.mismatches.iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![2, 7, 11]);
}

#[test]
fn framebuffer_attachment_validates_as_render_target() {
    init_tracing();
    let device = FakeDevice::new(BackendType::Metal);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let framebuffer = device
        .create_framebuffer(&FramebufferDesc {
            color_attachments: vec![Arc::clone(&texture)],
        })
        .unwrap();

    let readback_order: Vec<u32> = top_down.chunks(4).rev().flatten().copied().collect();
    validate_framebuffer_texture(&device, &queue, framebuffer.as_ref(), &readback_order, "full attachment")
        .unwrap();

    let range = TextureRange::new_2d(0, 0, 4, 1);
    validate_framebuffer_texture_range(
        &device,
        &queue,
        framebuffer.as_ref(),
        &range,
        &readback_order[..4],
        "first attachment row",
    )
    .unwrap();
}

#[test]
fn framebuffer_without_attachment_is_an_error() {
    let device = FakeDevice::new(BackendType::Vulkan);
    let queue = FakeQueue::new();
    let framebuffer = device.create_framebuffer(&FramebufferDesc::default()).unwrap();

    let result = validate_framebuffer_texture(&device, &queue, framebuffer.as_ref(), &[], "no attachment");
    assert!(matches!(result, Err(ValidationError::MissingAttachment(0))));
}

#[test]
fn empty_extent_validates_trivially() {
    let device = FakeDevice::new(BackendType::Metal);
    let queue = FakeQueue::new();
    let texture: Arc<dyn Texture> = FakeTexture::new(0, 0);

    validate_uploaded_texture(&device, &queue, &texture, &[], "empty texture").unwrap();
}

#[test]
fn submission_failure_aborts_before_read_back() {
    let device = FakeDevice::new(BackendType::Metal);
    device.fail_command_buffers();
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let result = validate_uploaded_texture(&device, &queue, &texture, &top_down, "broken device");
    assert!(matches!(result, Err(ValidationError::Submission(_))));
    assert_eq!(queue.submission_count(), 0);
}

#[test]
fn framebuffer_failure_aborts_validation() {
    let device = FakeDevice::new(BackendType::Metal);
    device.fail_framebuffers();
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let result = validate_uploaded_texture(&device, &queue, &texture, &top_down, "broken framebuffers");
    assert!(matches!(result, Err(ValidationError::FramebufferCreation(_))));
}

#[test]
#[should_panic(expected = "single layer")]
fn multi_layer_region_is_rejected_before_read_back() {
    let device = FakeDevice::new(BackendType::OpenGl);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let range = TextureRange {
        num_layers: 2,
        ..TextureRange::new_2d(0, 0, 4, 4)
    };
    let _ = validate_uploaded_texture_range(&device, &queue, &texture, &range, &top_down, "multi-layer");
}

#[test]
#[should_panic(expected = "expected data must match the range extent")]
fn undersized_expected_data_is_rejected() {
    let device = FakeDevice::new(BackendType::OpenGl);
    let queue = FakeQueue::new();
    let (texture, top_down) = banded_4x4();

    let _ = validate_uploaded_texture(&device, &queue, &texture, &top_down[..8], "short expectation");
}
