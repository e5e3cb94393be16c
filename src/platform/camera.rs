//! Synthetic camera
//!
//! Renders what a webcam pointed at a lit face would see: a dark, slightly
//! noisy room with a bright face-sized blob. The blob follows a [`Subject`]
//! whose position the player steers from the keyboard.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Frame, FrameSource};
use crate::error::CaptureError;

/// Face luma; comfortably above the locator threshold
const FACE_LUMA: u8 = 230;
/// Background ramps from this luma at the top...
const ROOM_TOP_LUMA: u32 = 25;
/// ...by this much toward the bottom
const ROOM_RAMP_LUMA: u32 = 45;
const NOISE_LUMA: u8 = 12;

/// Horizontal position of the virtual player in screen (mirrored) coordinates.
/// Clones share the same position.
#[derive(Debug, Clone)]
pub struct Subject {
    center_x: Rc<Cell<i32>>,
    max_x: i32,
}

impl Subject {
    /// Subject standing at `center_x` on a screen `width` pixels wide
    pub fn new(center_x: i32, width: i32) -> Self {
        let max_x = (width - 1).max(0);
        Self {
            center_x: Rc::new(Cell::new(center_x.clamp(0, max_x))),
            max_x,
        }
    }

    pub fn center_x(&self) -> i32 {
        self.center_x.get()
    }

    /// Lean left (negative) or right (positive), staying on screen
    pub fn nudge(&self, dx: i32) {
        let x = (self.center_x.get() + dx).clamp(0, self.max_x);
        self.center_x.set(x);
    }
}

pub struct SyntheticCamera {
    width: u32,
    height: u32,
    subject: Subject,
    face_size: u32,
    frame_interval: Duration,
    last_capture: Option<Instant>,
    sequence: u32,
    noise: Pcg32,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32, target_fps: u32, subject: Subject, seed: u64) -> Self {
        let frame_interval = Duration::from_secs(1) / target_fps.max(1);
        Self {
            width,
            height,
            subject,
            face_size: (height / 4).max(1),
            frame_interval,
            last_capture: None,
            sequence: 0,
            noise: Pcg32::seed_from_u64(seed),
        }
    }

    /// Deliver frames as fast as they are requested
    pub fn unpaced(mut self) -> Self {
        self.frame_interval = Duration::ZERO;
        self
    }

    /// Block until the next frame slot
    fn pace(&mut self) {
        if let Some(last) = self.last_capture {
            let next = last + self.frame_interval;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            }
        }
        self.last_capture = Some(Instant::now());
    }

    fn render(&mut self) -> Frame {
        let (w, h) = (self.width, self.height);
        let mut data = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            let base = ROOM_TOP_LUMA + y * ROOM_RAMP_LUMA / h.max(1);
            for _ in 0..w {
                let noise = self.noise.random_range(0..=NOISE_LUMA);
                data.push(base as u8 + noise);
            }
        }

        // The camera sees the subject flipped; the game mirrors it back
        let radius = (self.face_size / 2) as i32;
        let cx = w as i32 - 1 - self.subject.center_x();
        let cy = h as i32 / 3;
        let r2 = radius * radius;
        for y in (cy - radius).max(0)..(cy + radius).min(h as i32) {
            for x in (cx - radius).max(0)..(cx + radius).min(w as i32) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r2 {
                    data[(y as u32 * w + x as u32) as usize] = FACE_LUMA;
                }
            }
        }

        self.sequence = self.sequence.wrapping_add(1);
        Frame {
            data,
            width: w,
            height: h,
            sequence: self.sequence,
        }
    }
}

impl FrameSource for SyntheticCamera {
    fn read_frame(&mut self) -> Result<Frame, CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::CaptureFailed("zero-sized sensor".into()));
        }
        self.pace();
        Ok(self.render())
    }
}
