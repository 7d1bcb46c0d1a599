pub mod config;
pub mod core;
pub mod engine;
pub mod host;
pub mod traits;

pub use crate::config::{StartupConfig, STARTUP};
pub use crate::core::{
    CoordinateMapper, EngineBridge, FrameBuffer, FrameView, HostError, Pixel, PointerEvent,
    PointerKind, RepaintHandle, RepaintScheduler, SurfaceId, SurfacePresenter, WindowOrigin,
};
pub use crate::host::{DisplayHost, HostEvent};
pub use crate::traits::{Engine, PresentTarget};
