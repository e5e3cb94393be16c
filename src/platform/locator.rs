//! Bright-region face locator
//!
//! Stand-in detector for a lit subject against a dark background: the face
//! is the bounding box of all pixels at or above a luma threshold, reported
//! only when enough of them are present to rule out sensor noise.

use super::{FaceLocator, Frame};
use crate::sim::FaceBox;

pub const DEFAULT_THRESHOLD: u8 = 200;
pub const DEFAULT_MIN_PIXELS: usize = 64;

#[derive(Debug, Clone)]
pub struct BrightRegionLocator {
    threshold: u8,
    min_pixels: usize,
}

impl Default for BrightRegionLocator {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_MIN_PIXELS)
    }
}

impl BrightRegionLocator {
    pub fn new(threshold: u8, min_pixels: usize) -> Self {
        Self {
            threshold,
            min_pixels,
        }
    }
}

impl FaceLocator for BrightRegionLocator {
    fn detect(&mut self, frame: &Frame) -> Vec<FaceBox> {
        let w = frame.width as usize;
        if w == 0 {
            return Vec::new();
        }

        let mut count = 0usize;
        let (mut min_x, mut min_y) = (usize::MAX, usize::MAX);
        let (mut max_x, mut max_y) = (0usize, 0usize);

        for (y, row) in frame.data.chunks_exact(w).enumerate() {
            for (x, &luma) in row.iter().enumerate() {
                if luma >= self.threshold {
                    count += 1;
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                    min_y = min_y.min(y);
                    max_y = max_y.max(y);
                }
            }
        }

        if count < self.min_pixels.max(1) {
            return Vec::new();
        }

        vec![FaceBox::new(
            min_x as i32,
            min_y as i32,
            (max_x - min_x + 1) as i32,
            (max_y - min_y + 1) as i32,
        )]
    }
}
