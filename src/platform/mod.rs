//! Platform abstraction layer
//!
//! Collaborators the game loop consumes:
//! - Frame capture (`FrameSource`)
//! - Face detection (`FaceLocator`)
//! - Time (`Clock`)

pub mod camera;
pub mod clock;
pub mod locator;

pub use camera::{Subject, SyntheticCamera};
pub use clock::{ManualClock, SystemClock};
pub use locator::BrightRegionLocator;

use std::time::Duration;

use crate::error::CaptureError;
use crate::sim::FaceBox;

/// A captured grayscale camera frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Luma, row-major, `width * height` bytes
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub sequence: u32,
}

impl Frame {
    /// Uniformly filled frame
    pub fn filled(width: u32, height: u32, luma: u8, sequence: u32) -> Self {
        Self {
            data: vec![luma; (width * height) as usize],
            width,
            height,
            sequence,
        }
    }

    /// Luma at (x, y); out-of-bounds reads are black
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Flip left-right in place so the feed reads like a mirror
    pub fn mirror(&mut self) {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(w) {
            row.reverse();
        }
    }
}

/// Source of camera frames. Reads block until the next frame is ready.
pub trait FrameSource {
    fn read_frame(&mut self) -> Result<Frame, CaptureError>;
}

/// Face detector. Implementations may keep state across frames.
pub trait FaceLocator {
    /// Faces in frame coordinates, best candidate first
    fn detect(&mut self, frame: &Frame) -> Vec<FaceBox>;
}

/// Monotonic time source
pub trait Clock {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_reverses_rows() {
        let mut frame = Frame {
            data: vec![1, 2, 3, 4, 5, 6],
            width: 3,
            height: 2,
            sequence: 0,
        };
        frame.mirror();
        assert_eq!(frame.data, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_luma_out_of_bounds() {
        let frame = Frame::filled(4, 4, 200, 0);
        assert_eq!(frame.luma(3, 3), 200);
        assert_eq!(frame.luma(4, 0), 0);
    }
}
