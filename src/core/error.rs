use thiserror::Error;

/// Errors the host can produce.
///
/// `InvalidDimensions`, `Allocation` and `ScaleMismatch` are startup
/// failures: the application has no function without its framebuffer, so
/// there is no degraded mode. `Conversion` and `Present` are per-frame
/// failures: the frame is skipped, the previous contents stay on screen,
/// and the next repaint provides the retry.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("framebuffer dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cannot allocate {bytes} bytes of pixel storage")]
    Allocation { bytes: usize },

    #[error("cannot convert framebuffer to a presentable image: {0}")]
    Conversion(String),

    #[error("presentation failed: {0}")]
    Present(String),

    #[error("logical size {logical_width}x{logical_height} at scale {scale} has no integral buffer extent")]
    ScaleMismatch {
        logical_width: u32,
        logical_height: u32,
        scale: u32,
    },
}
