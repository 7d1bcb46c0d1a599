use crate::core::error::HostError;
use crate::core::framebuffer::FrameBuffer;

/// Shows a finished framebuffer on screen.
///
/// Failure is non-fatal: the caller logs it and skips the frame, leaving
/// the previous contents visible.
pub trait PresentTarget {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), HostError>;

    /// The window surface changed size. The framebuffer is unaffected.
    fn resize(&mut self, width: u32, height: u32);
}
