use std::time::Instant;

use super::noise::{color_noise, noise};
use crate::core::bridge::SurfaceId;
use crate::core::framebuffer::{FrameView, Pixel};
use crate::core::repaint::RepaintHandle;
use crate::traits::Engine;

const WHITE: Pixel = Pixel::new(255, 255, 255, 255);
const RED: Pixel = Pixel::new(255, 0, 0, 255);

/// Radians per second for the triangle spin.
const SPIN_RATE: f32 = 0.9;
/// Orbit radius of a ring around its anchor, in pixels.
const ORBIT_RADIUS: f32 = 10.0;

/// A clicked anchor point in buffer coordinates.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: f32,
    y: f32,
}

/// The reference engine: a spinning triangle plus a ring orbiting every
/// clicked point, each ring's radius, phase, speed and color hashed from
/// its index.
///
/// Requests a repaint at the end of every paint, so the animation runs
/// continuously once the first frame is drawn.
pub struct OrbitsEngine {
    repaint: RepaintHandle,
    last: Instant,
    t: f32,
    anchors: Vec<Anchor>,
}

impl OrbitsEngine {
    pub fn init(repaint: RepaintHandle) -> Box<dyn Engine> {
        Box::new(Self {
            repaint,
            last: Instant::now(),
            t: 0.0,
            anchors: Vec::new(),
        })
    }
}

impl Engine for OrbitsEngine {
    fn paint(&mut self, mut frame: FrameView<'_>) {
        let now = Instant::now();
        self.t += now.duration_since(self.last).as_secs_f32() * SPIN_RATE;
        self.last = now;

        clear(&mut frame, WHITE);
        spinning_triangle(&mut frame, 50.0, 50.0, 40.0, self.t, RED);

        for (i, anchor) in self.anchors.iter().enumerate() {
            let i = i as i32;
            let radius = (noise(i, 0) % 100 + 20) as f32 / 5.0;
            let phase = (noise(i, 1) % 628) as f32 / 100.0;
            let speed = (noise(i, 2) % 200) as f32 / 100.0;
            let cx = anchor.x + ORBIT_RADIUS * (speed * self.t + phase).sin();
            let cy = anchor.y + ORBIT_RADIUS * (speed * self.t + phase).cos();
            circle(&mut frame, cx, cy, radius, color_noise(i, 5));
        }

        self.repaint.request();
    }

    fn pointer_down(&mut self, _origin: SurfaceId, x: f32, y: f32) {
        log::debug!("pointer down at ({x}, {y})");
        self.anchors.push(Anchor { x, y });
    }

    fn pointer_up(&mut self, _origin: SurfaceId, _x: f32, _y: f32) {}

    fn pointer_moved(&mut self, _origin: SurfaceId, _x: f32, _y: f32) {}
}

/// Nearest pixel boundary for `coord`, clamped into `[0, limit]`.
fn to_pixel(coord: f32, limit: u32) -> u32 {
    let grid = (coord - 0.5).ceil() as i64;
    grid.clamp(0, limit as i64) as u32
}

fn clear(frame: &mut FrameView<'_>, color: Pixel) {
    for y in 0..frame.height() {
        // SAFETY: y < height.
        unsafe { frame.row_unchecked(y) }.fill(color);
    }
}

/// Filled circle with a half-pixel antialiased rim.
///
/// Coordinates may lie anywhere; every pixel index is clamped into the
/// frame rectangle before writing.
fn circle(frame: &mut FrameView<'_>, cx: f32, cy: f32, radius: f32, color: Pixel) {
    let w = frame.width();
    let h = frame.height();
    let outer = radius + 0.5;
    let inner = radius - 0.5;
    let outer2 = outer * outer;
    let inner2 = inner * inner;

    let i1 = to_pixel(cy - outer, h);
    let i2 = to_pixel(cy - inner, h);
    let i3 = to_pixel(cy + inner, h);
    let i4 = to_pixel(cy + outer, h);

    for i in i1..i2 {
        rim_row(frame, i, cx, cy, outer2, inner, color);
    }
    for i in i2..i3 {
        let y2 = sqr(i as f32 + 0.5 - cy);
        let outer_half = (outer2 - y2).max(0.0).sqrt();
        let inner_half = (inner2 - y2).max(0.0).sqrt();
        let j1 = to_pixel(cx - outer_half, w);
        let j2 = to_pixel(cx - inner_half, w);
        let j3 = to_pixel(cx + inner_half, w);
        let j4 = to_pixel(cx + outer_half, w);
        rim_range(frame, i, j1, j2, y2, cx, inner, color);
        for j in j2..j3 {
            // SAFETY: j < j3 <= w and i < i3 <= h.
            unsafe { *frame.pixel_unchecked(j, i) = color };
        }
        rim_range(frame, i, j3, j4, y2, cx, inner, color);
    }
    for i in i3..i4 {
        rim_row(frame, i, cx, cy, outer2, inner, color);
    }
}

/// One full antialiased row of a circle's top or bottom cap.
fn rim_row(frame: &mut FrameView<'_>, i: u32, cx: f32, cy: f32, outer2: f32, inner: f32, color: Pixel) {
    let y2 = sqr(i as f32 + 0.5 - cy);
    let half = (outer2 - y2).max(0.0).sqrt();
    let j1 = to_pixel(cx - half, frame.width());
    let j2 = to_pixel(cx + half, frame.width());
    rim_range(frame, i, j1, j2, y2, cx, inner, color);
}

/// Blend `color` into `[j1, j2)` of row `i`, faded by distance past the
/// inner radius.
fn rim_range(frame: &mut FrameView<'_>, i: u32, j1: u32, j2: u32, y2: f32, cx: f32, inner: f32, color: Pixel) {
    for j in j1..j2 {
        let x2 = sqr(j as f32 + 0.5 - cx);
        let t = ((x2 + y2).sqrt() - inner).clamp(0.0, 1.0);
        // SAFETY: j and i were clamped by to_pixel against the frame extent.
        let pixel = unsafe { frame.pixel_unchecked(j, i) };
        *pixel = Pixel::lerp(color, *pixel, t);
    }
}

/// Flat triangle spinning around (cx, cy), filled by edge functions over
/// the clamped bounding box.
fn spinning_triangle(frame: &mut FrameView<'_>, cx: f32, cy: f32, radius: f32, t: f32, color: Pixel) {
    let vertex = |k: f32| {
        let angle = t + k * std::f32::consts::TAU / 3.0;
        (cx + radius * angle.cos(), cy + radius * angle.sin())
    };
    let (ax, ay) = vertex(0.0);
    let (bx, by) = vertex(1.0);
    let (vcx, vcy) = vertex(2.0);

    let edge = |px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32| {
        (x1 - x0) * (py - y0) - (y1 - y0) * (px - x0)
    };
    let area = edge(vcx, vcy, ax, ay, bx, by);
    if area == 0.0 {
        return;
    }

    let min_x = to_pixel(ax.min(bx).min(vcx), frame.width());
    let max_x = to_pixel(ax.max(bx).max(vcx), frame.width());
    let min_y = to_pixel(ay.min(by).min(vcy), frame.height());
    let max_y = to_pixel(ay.max(by).max(vcy), frame.height());

    for i in min_y..max_y {
        let py = i as f32 + 0.5;
        for j in min_x..max_x {
            let px = j as f32 + 0.5;
            let e0 = edge(px, py, ax, ay, bx, by) * area.signum();
            let e1 = edge(px, py, bx, by, vcx, vcy) * area.signum();
            let e2 = edge(px, py, vcx, vcy, ax, ay) * area.signum();
            if e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0 {
                // SAFETY: j and i are clamped by to_pixel.
                unsafe { *frame.pixel_unchecked(j, i) = color };
            }
        }
    }
}

fn sqr(value: f32) -> f32 {
    value * value
}
