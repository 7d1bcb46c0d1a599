use anyhow::Result;
use winit::event_loop::EventLoop;

use pixel_window::engine::OrbitsEngine;
use pixel_window::host::{DisplayHost, HostEvent};

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::<HostEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();
    let mut host = DisplayHost::new(proxy, OrbitsEngine::init)?;

    event_loop.run_app(&mut host)?;
    Ok(())
}
