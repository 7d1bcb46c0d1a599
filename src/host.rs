use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{StartupConfig, STARTUP};
use crate::core::bridge::{EngineBridge, SurfaceId};
use crate::core::error::HostError;
use crate::core::framebuffer::FrameBuffer;
use crate::core::mapper::{CoordinateMapper, PointerEvent, PointerKind, WindowOrigin};
use crate::core::presenter::SurfacePresenter;
use crate::core::repaint::{RepaintHandle, RepaintScheduler};
use crate::traits::{Engine, PresentTarget};

/// Events posted onto the event loop from other threads.
#[derive(Debug)]
pub enum HostEvent {
    Repaint,
}

/// The single window and presentation loop of the process.
///
/// Owns the framebuffer, the engine bridge and the repaint scheduler.
/// All window events, engine input calls and paint/present calls happen
/// on this thread; the engine's repaint handle is the only thing that
/// crosses threads, and it lands here as `HostEvent::Repaint`.
pub struct DisplayHost {
    config: StartupConfig,
    window: Option<Arc<Window>>,
    presenter: Option<SurfacePresenter>,
    scheduler: Option<RepaintScheduler>,
    bridge: EngineBridge,
    frame: FrameBuffer,
    cursor: Option<(f32, f32)>,
    primary_down: bool,
}

impl DisplayHost {
    /// Allocate the framebuffer and run engine initialization.
    ///
    /// This happens before the event loop starts, so no input or paint
    /// call can reach an uninitialized engine. Failure here aborts
    /// startup; there is no degraded mode.
    pub fn new<F>(proxy: EventLoopProxy<HostEvent>, init: F) -> Result<Self, HostError>
    where
        F: FnOnce(RepaintHandle) -> Box<dyn Engine>,
    {
        let config = STARTUP;
        let (buffer_width, buffer_height) = config.buffer_extent()?;
        let frame = FrameBuffer::new(buffer_width, buffer_height)?;

        let scheduler = RepaintScheduler::new(move || {
            // The loop may already be gone during shutdown; the request
            // has nowhere to land then and is dropped.
            let _ = proxy.send_event(HostEvent::Repaint);
        });
        let bridge = EngineBridge::init(
            SurfaceId::next(),
            CoordinateMapper::new(buffer_width, buffer_height, WindowOrigin::TopLeft),
            scheduler.handle(),
            init,
        );

        Ok(Self {
            config,
            window: None,
            presenter: None,
            scheduler: Some(scheduler),
            bridge,
            frame,
            cursor: None,
            primary_down: false,
        })
    }

    fn dispatch_pointer(&mut self, kind: PointerKind, x: f32, y: f32) {
        let size = match &self.window {
            Some(window) => window.inner_size().to_logical::<f32>(window.scale_factor()),
            None => return,
        };
        self.bridge
            .pointer(PointerEvent::new(kind, x, y), size.width, size.height);
    }

    fn redraw(&mut self) {
        let Some(scheduler) = &self.scheduler else {
            return;
        };
        scheduler.take();
        self.bridge.paint(&mut self.frame);
        if let Some(presenter) = &mut self.presenter {
            if let Err(e) = presenter.present(&self.frame) {
                log::warn!("frame skipped: {e}");
            }
        }
    }

    fn teardown(&mut self) {
        // The scheduler goes first: outstanding repaint handles must die
        // before anything they could schedule work against.
        self.scheduler.take();
        self.presenter.take();
        self.window.take();
    }
}

impl ApplicationHandler<HostEvent> for DisplayHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window_title)
            .with_inner_size(LogicalSize::new(
                self.config.logical_width,
                self.config.logical_height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let presenter = pollster::block_on(SurfacePresenter::new(
            window.clone(),
            self.frame.width(),
            self.frame.height(),
        ));
        let presenter = match presenter {
            Ok(p) => p,
            Err(e) => {
                log::error!("failed to initialize presentation: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.presenter = Some(presenter);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.teardown();
                event_loop.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = match &self.window {
                    Some(window) => window.scale_factor(),
                    None => return,
                };
                let position = position.to_logical::<f32>(scale);
                self.cursor = Some((position.x, position.y));
                let kind = if self.primary_down {
                    PointerKind::Drag
                } else {
                    PointerKind::Move
                };
                self.dispatch_pointer(kind, position.x, position.y);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let Some((x, y)) = self.cursor else {
                    return;
                };
                let kind = match state {
                    ElementState::Pressed => {
                        self.primary_down = true;
                        PointerKind::Down
                    }
                    ElementState::Released => {
                        self.primary_down = false;
                        PointerKind::Up
                    }
                };
                self.dispatch_pointer(kind, x, y);
            }
            WindowEvent::Resized(size) => {
                // The buffer keeps its resolution; only the surface follows
                // the window.
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: HostEvent) {
        match event {
            HostEvent::Repaint => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
    }
}
