/// Where the window coordinate system puts its origin.
///
/// Buffer coordinates are always top-left origin with y increasing
/// downward; a bottom-left window origin gets its y axis flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOrigin {
    TopLeft,
    BottomLeft,
}

/// What a pointer did.
///
/// Down/Up refer to the primary button; Drag is a move with the primary
/// button held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Up,
    Move,
    Drag,
}

/// A pointer event in window-logical units, produced by the display host
/// and consumed immediately.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }
}

/// Translates window-logical pointer positions into buffer-pixel
/// coordinates.
///
/// Positions are normalized by the current window size rather than scaled
/// by a fixed factor, so the mapping stays valid when the window is
/// resized independently of the buffer. The cost is exact pixel alignment
/// under non-integer effective scale; that tradeoff is accepted.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    buffer_width: u32,
    buffer_height: u32,
    origin: WindowOrigin,
}

impl CoordinateMapper {
    pub fn new(buffer_width: u32, buffer_height: u32, origin: WindowOrigin) -> Self {
        Self {
            buffer_width,
            buffer_height,
            origin,
        }
    }

    /// Map a window-logical position into buffer-pixel coordinates.
    ///
    /// Positions outside `[0, window_width] x [0, window_height]` (a drag
    /// that left the window, for example) pass through unclamped; ignoring
    /// or clamping them is the consumer's call.
    pub fn map(&self, window_width: f32, window_height: f32, x: f32, y: f32) -> (f32, f32) {
        let bx = x / window_width * self.buffer_width as f32;
        let by = match self.origin {
            WindowOrigin::TopLeft => y / window_height * self.buffer_height as f32,
            WindowOrigin::BottomLeft => (1.0 - y / window_height) * self.buffer_height as f32,
        };
        (bx, by)
    }
}
