use pixel_window::{FrameBuffer, HostError, Pixel};

// ============================================================================
// Allocation Properties
// ============================================================================

#[test]
fn test_stride_and_length_for_common_sizes() {
    let sizes = [
        (1, 1),
        (16, 16),
        (17, 3),
        (511, 512),
        (512, 512),
        (640, 480),
        (1920, 1080),
    ];

    for (width, height) in sizes {
        let fb = FrameBuffer::new(width, height).unwrap();
        assert!(fb.stride() >= width, "{width}x{height}: stride below width");
        assert_eq!(fb.stride() % 16, 0, "{width}x{height}: stride unaligned");
        assert_eq!(
            fb.bytes().len(),
            fb.stride() as usize * height as usize * 4,
            "{width}x{height}: storage length"
        );
    }
}

#[test]
fn test_odd_width_gets_padded() {
    let fb = FrameBuffer::new(511, 512).unwrap();
    assert_eq!(fb.stride(), 512);
}

#[test]
fn test_exact_width_is_not_padded() {
    let fb = FrameBuffer::new(512, 512).unwrap();
    assert_eq!(fb.stride(), 512);
}

#[test]
fn test_zero_width_rejected_before_allocation() {
    match FrameBuffer::new(0, 512) {
        Err(HostError::InvalidDimensions { width, height }) => {
            assert_eq!((width, height), (0, 512));
        }
        other => panic!("expected InvalidDimensions, got {other:?}", other = other.err()),
    }
}

#[test]
fn test_zero_height_rejected_before_allocation() {
    assert!(matches!(
        FrameBuffer::new(512, 0),
        Err(HostError::InvalidDimensions { .. })
    ));
}

// ============================================================================
// Write Fidelity Across Row Boundaries
// ============================================================================

/// Cheap deterministic per-pixel pattern, distinct at every (x, y).
fn pattern(x: u32, y: u32) -> Pixel {
    let v = x.wrapping_mul(31).wrapping_add(y.wrapping_mul(97));
    Pixel::new(v as u8, (v >> 8) as u8, (v >> 16) as u8, 255)
}

#[test]
fn test_pattern_written_through_view_reads_back_exactly() {
    // 33 wide: 15 padding pixels per row, so any stride mistake shifts
    // rows against each other.
    let mut fb = FrameBuffer::new(33, 7).unwrap();

    let mut view = fb.view_mut();
    for y in 0..view.height() {
        for x in 0..view.width() {
            // SAFETY: x < width, y < height.
            unsafe { *view.pixel_unchecked(x, y) = pattern(x, y) };
        }
    }

    for y in 0..fb.height() {
        for (x, pixel) in fb.row(y).iter().enumerate() {
            assert_eq!(*pixel, pattern(x as u32, y), "mismatch at ({x}, {y})");
        }
    }
}

#[test]
fn test_row_padding_stays_untouched() {
    let mut fb = FrameBuffer::new(33, 7).unwrap();

    let mut view = fb.view_mut();
    for y in 0..view.height() {
        view.row_mut(y).unwrap().fill(Pixel::new(255, 255, 255, 255));
    }

    let stride = fb.stride() as usize;
    for y in 0..fb.height() as usize {
        let row_start = y * stride * 4;
        let pad = &fb.bytes()[row_start + 33 * 4..row_start + stride * 4];
        assert!(pad.iter().all(|&b| b == 0), "padding written at row {y}");
    }
}

#[test]
fn test_row_mut_rejects_out_of_range_rows() {
    let mut fb = FrameBuffer::new(8, 4).unwrap();
    let mut view = fb.view_mut();
    assert!(view.row_mut(3).is_some());
    assert!(view.row_mut(4).is_none());
}

// ============================================================================
// Resize Invariants
// ============================================================================

#[test]
fn test_resize_tracks_width_changes() {
    let mut fb = FrameBuffer::new(16, 8).unwrap();
    fb.resize(31, 8).unwrap();
    assert_eq!(fb.width(), 31);
    assert_eq!(fb.stride(), 32);
    assert_eq!(fb.bytes().len(), 32 * 8 * 4);
}

#[test]
fn test_resize_discards_previous_contents() {
    let mut fb = FrameBuffer::new(8, 8).unwrap();
    fb.view_mut().row_mut(0).unwrap().fill(Pixel::new(9, 9, 9, 9));
    fb.resize(8, 16).unwrap();
    assert!(fb.bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_resize_rejects_zero_dimensions() {
    let mut fb = FrameBuffer::new(8, 8).unwrap();
    assert!(fb.resize(0, 8).is_err());
    assert!(fb.resize(8, 0).is_err());
    // Failed resize leaves the buffer usable.
    assert_eq!(fb.width(), 8);
    assert_eq!(fb.bytes().len(), 16 * 8 * 4);
}
