//! Catcher controller
//!
//! The catcher follows the horizontal center of the tracked face.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Axis-aligned face bounding box in frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl FaceBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Horizontal center (integer division, like pixel coordinates)
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }
}

/// New catcher x for this tick. Without a face the catcher stays put.
pub fn track(current_x: i32, face: Option<FaceBox>, tuning: &Tuning) -> i32 {
    match face {
        Some(face) => {
            let x = face.center_x() - tuning.catcher_width / 2;
            x.clamp(0, tuning.catcher_max_x())
        }
        None => current_x,
    }
}
