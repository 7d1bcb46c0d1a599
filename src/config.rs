use crate::core::error::HostError;

/// Startup configuration. Fixed at build time; there is no runtime
/// configuration surface.
#[derive(Debug, Clone, Copy)]
pub struct StartupConfig {
    /// Window content size in logical units.
    pub logical_width: u32,
    pub logical_height: u32,
    /// Integer window-logical-to-buffer-pixel scale. Fractional scaling is
    /// not supported: buffer = logical * scale must hold exactly.
    pub scale_factor: u32,
    pub window_title: &'static str,
}

pub const STARTUP: StartupConfig = StartupConfig {
    logical_width: 511,
    logical_height: 512,
    scale_factor: 1,
    window_title: "Pixel Window",
};

impl StartupConfig {
    /// Buffer extent in pixels: logical size times scale factor.
    ///
    /// A zero scale or an overflowing product violates the integral-scale
    /// precondition and is rejected before any window exists.
    pub fn buffer_extent(&self) -> Result<(u32, u32), HostError> {
        let mismatch = || HostError::ScaleMismatch {
            logical_width: self.logical_width,
            logical_height: self.logical_height,
            scale: self.scale_factor,
        };
        if self.scale_factor == 0 {
            return Err(mismatch());
        }
        let width = self
            .logical_width
            .checked_mul(self.scale_factor)
            .ok_or_else(mismatch)?;
        let height = self
            .logical_height
            .checked_mul(self.scale_factor)
            .ok_or_else(mismatch)?;
        Ok((width, height))
    }
}
