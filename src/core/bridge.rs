use std::sync::atomic::{AtomicU64, Ordering};

use super::framebuffer::FrameBuffer;
use super::mapper::{CoordinateMapper, PointerEvent, PointerKind};
use super::repaint::RepaintHandle;
use crate::traits::Engine;

/// Stable identity of the view issuing pointer calls.
///
/// Process-unique and `Copy`; the engine may retain it across calls for
/// as long as it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The sole channel between host and engine.
///
/// Owns the engine instance, maps pointer positions into buffer space and
/// drives the synchronous paint call. Everything here runs on the
/// presentation thread; the only cross-thread traffic is the repaint
/// handle handed to the engine at init.
pub struct EngineBridge {
    engine: Box<dyn Engine>,
    identity: SurfaceId,
    mapper: CoordinateMapper,
}

impl EngineBridge {
    /// Run engine initialization and wire up the bridge.
    ///
    /// `init` receives the repaint handle and returns the engine instance.
    /// It runs exactly once, here — before the host subscribes to any
    /// window event, so no input or paint call can precede it.
    pub fn init<F>(
        identity: SurfaceId,
        mapper: CoordinateMapper,
        repaint: RepaintHandle,
        init: F,
    ) -> Self
    where
        F: FnOnce(RepaintHandle) -> Box<dyn Engine>,
    {
        Self {
            engine: init(repaint),
            identity,
            mapper,
        }
    }

    pub fn identity(&self) -> SurfaceId {
        self.identity
    }

    /// Have the engine paint one frame. Synchronous: the buffer holds the
    /// finished frame when this returns.
    pub fn paint(&mut self, frame: &mut FrameBuffer) {
        self.engine.paint(frame.view_mut());
    }

    /// Forward a pointer event, mapped into buffer coordinates against the
    /// window's current logical size.
    pub fn pointer(&mut self, event: PointerEvent, window_width: f32, window_height: f32) {
        let (x, y) = self
            .mapper
            .map(window_width, window_height, event.x, event.y);
        match event.kind {
            PointerKind::Down => self.engine.pointer_down(self.identity, x, y),
            PointerKind::Up => self.engine.pointer_up(self.identity, x, y),
            PointerKind::Move | PointerKind::Drag => {
                self.engine.pointer_moved(self.identity, x, y)
            }
        }
    }
}
