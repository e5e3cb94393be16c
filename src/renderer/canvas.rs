//! Software canvas
//!
//! An RGB pixel buffer at the game's logical resolution. Shapes are
//! rasterized immediately; text is kept as labels for the presenter, which
//! can draw glyphs at its own resolution.

use super::Rgb;
use crate::platform::Frame;

/// Text placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub scale: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    labels: Vec<Label>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width * height) as usize],
            labels: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Pixel at (x, y); out-of-bounds reads are black
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        if x >= self.width || y >= self.height {
            return Rgb::default();
        }
        self.pixels[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = c;
        }
    }

    /// Nearest-neighbour sample for a `cols` x `rows` grid laid over the canvas
    pub fn sample(&self, col: u32, row: u32, cols: u32, rows: u32) -> Rgb {
        let x = col * self.width / cols.max(1);
        let y = row * self.height / rows.max(1);
        self.get(x, y)
    }

    /// Replace the contents with a grayscale frame, scaled to fit, and drop labels
    pub fn load_frame(&mut self, frame: &Frame) {
        self.labels.clear();
        if frame.width == 0 || frame.height == 0 {
            self.pixels.fill(Rgb::default());
            return;
        }
        for y in 0..self.height {
            let fy = y * frame.height / self.height;
            for x in 0..self.width {
                let fx = x * frame.width / self.width;
                self.pixels[(y * self.width + x) as usize] = Rgb::gray(frame.luma(fx, fy));
            }
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, c: Rgb) {
        let r = radius.max(0);
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    self.set(cx + dx, cy + dy, c);
                }
            }
        }
    }

    pub fn blend(&mut self, c: Rgb, alpha: f32) {
        for px in self.pixels.iter_mut() {
            *px = c.over(*px, alpha);
        }
    }

    pub fn text(&mut self, x: i32, y: i32, text: &str, scale: f32, color: Rgb) {
        self.labels.push(Label {
            x,
            y,
            text: text.to_string(),
            scale,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_frame_scales() {
        let mut canvas = Canvas::new(4, 4);
        let mut frame = Frame::filled(2, 2, 10, 0);
        frame.data[1] = 200; // top-right
        canvas.load_frame(&frame);
        assert_eq!(canvas.get(0, 0), Rgb::gray(10));
        assert_eq!(canvas.get(3, 0), Rgb::gray(200));
        assert_eq!(canvas.get(3, 3), Rgb::gray(10));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_rect(6, 6, 10, 10, Rgb(1, 2, 3));
        assert_eq!(canvas.get(7, 7), Rgb(1, 2, 3));
        assert_eq!(canvas.get(5, 5), Rgb::default());
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_circle(10, 10, 3, Rgb(9, 9, 9));
        assert_eq!(canvas.get(10, 13), Rgb(9, 9, 9));
        assert_eq!(canvas.get(13, 13), Rgb::default());
    }

    #[test]
    fn test_load_frame_clears_labels() {
        let mut canvas = Canvas::new(4, 4);
        canvas.text(0, 0, "hi", 1.0, Rgb(1, 1, 1));
        assert_eq!(canvas.labels().len(), 1);
        canvas.load_frame(&Frame::filled(4, 4, 0, 1));
        assert!(canvas.labels().is_empty());
    }

    #[test]
    fn test_sample_grid() {
        let mut canvas = Canvas::new(100, 100);
        canvas.fill_rect(50, 0, 50, 100, Rgb(5, 5, 5));
        assert_eq!(canvas.sample(0, 0, 10, 10), Rgb::default());
        assert_eq!(canvas.sample(9, 9, 10, 10), Rgb(5, 5, 5));
    }
}
