//! Rendering module
//!
//! The game draws through the [`Renderer`] trait: the camera frame as the
//! background, then filled shapes, text and full-frame blends. The shipped
//! backend rasterizes into a software [`Canvas`] and presents it in the
//! terminal.

pub mod canvas;
pub mod scene;
pub mod terminal;

pub use canvas::{Canvas, Label};
pub use terminal::TerminalRenderer;

use crate::error::GameError;
use crate::platform::Frame;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn gray(luma: u8) -> Self {
        Rgb(luma, luma, luma)
    }

    /// `self * alpha + under * (1 - alpha)`
    pub fn over(self, under: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| (top as f32 * a + bottom as f32 * (1.0 - a)).round() as u8;
        Rgb(
            mix(self.0, under.0),
            mix(self.1, under.1),
            mix(self.2, under.2),
        )
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgb;

    pub const CATCHER: Rgb = Rgb(0, 255, 0);
    pub const CATCH_OBJECT: Rgb = Rgb(0, 255, 0);
    pub const AVOID_OBJECT: Rgb = Rgb(255, 0, 0);
    pub const PARTICLE: Rgb = Rgb(255, 255, 0);
    pub const TEXT: Rgb = Rgb(255, 255, 255);
    pub const GAME_OVER: Rgb = Rgb(255, 0, 0);
    pub const OVERLAY: Rgb = Rgb(0, 0, 0);
}

/// Drawing surface plus the keyboard attached to it
pub trait Renderer {
    /// Start a new frame with the camera image as background
    fn begin(&mut self, frame: &Frame);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb);
    /// Text with its baseline starting at (x, y)
    fn text(&mut self, x: i32, y: i32, text: &str, scale: f32, color: Rgb);
    /// Blend `color` over everything drawn so far
    fn blend(&mut self, color: Rgb, alpha: f32);
    /// Show the finished frame
    fn present(&mut self) -> Result<(), GameError>;
    /// Next pending key, without waiting
    fn poll_key(&mut self) -> Result<Option<char>, GameError>;
    /// Wait for the next key
    fn wait_key(&mut self) -> Result<char, GameError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_blends() {
        let out = colors::OVERLAY.over(Rgb(100, 200, 50), 0.7);
        assert_eq!(out, Rgb(30, 60, 15));
        assert_eq!(Rgb(9, 9, 9).over(Rgb(1, 2, 3), 1.0), Rgb(9, 9, 9));
        assert_eq!(Rgb(9, 9, 9).over(Rgb(1, 2, 3), 0.0), Rgb(1, 2, 3));
    }
}
