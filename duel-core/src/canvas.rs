//! Drawing surfaces.

use crate::entity::Color;
use crate::{HEIGHT, WIDTH};
use line_drawing::Bresenham;

/// A 2D drawing surface with the three primitives the game needs.
///
/// Coordinates are in pixels with the origin at the top-left corner. Shapes may extend past the
/// edges of the surface; implementations clip them.
pub trait Canvas {
    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Paint a solid rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Outline a rectangle. The stroke is centered on the rectangle's edges.
    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
        color: Color,
    );
}

/// A [`Canvas`] over an RGBA8 pixel buffer of `WIDTH * HEIGHT` pixels.
///
/// This is the layout of the frame handed out by `Pixels::frame_mut`.
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    screen: &'a mut [u8],
}

impl<'a> FrameBuffer<'a> {
    pub fn new(screen: &'a mut [u8]) -> Self {
        debug_assert_eq!(screen.len(), WIDTH * HEIGHT * 4);

        Self { screen }
    }

    /// Color a single pixel, ignoring anything off screen.
    fn plot(&mut self, x: isize, y: isize, rgba: &[u8; 4]) {
        if x < 0 || y < 0 || x >= WIDTH as isize || y >= HEIGHT as isize {
            return;
        }
        let i = (x as usize + y as usize * WIDTH) * 4;

        self.screen[i..i + 4].copy_from_slice(rgba);
    }

    /// Draw a line using Bresenham's algorithm.
    fn line(&mut self, p1: (isize, isize), p2: (isize, isize), rgba: &[u8; 4]) {
        for (x, y) in Bresenham::new(p1, p2) {
            self.plot(x, y, rgba);
        }
    }

    /// Draw a one pixel outline through two opposite corners.
    fn outline(&mut self, p1: (isize, isize), p2: (isize, isize), rgba: &[u8; 4]) {
        let p3 = (p1.0, p2.1);
        let p4 = (p2.0, p1.1);

        self.line(p1, p3, rgba);
        self.line(p3, p2, rgba);
        self.line(p2, p4, rgba);
        self.line(p4, p1, rgba);
    }
}

impl Canvas for FrameBuffer<'_> {
    fn clear(&mut self) {
        for (i, byte) in self.screen.iter_mut().enumerate() {
            *byte = if i % 4 == 3 { 255 } else { 0 };
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let (left, right) = span(x, width, WIDTH);
        let (top, bottom) = span(y, height, HEIGHT);
        let rgba = color.rgba();

        for row in top..bottom {
            let i = row * WIDTH * 4;
            for px in self.screen[i + left * 4..i + right * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
        color: Color,
    ) {
        let rgba = color.rgba();
        let left = floor(x);
        let top = floor(y);
        let right = floor(x + width) - 1;
        let bottom = floor(y + height) - 1;

        // Concentric outlines, spread evenly over both sides of the edge
        let lines = floor(line_width + 0.5).max(1);
        for offset in -(lines / 2)..lines - lines / 2 {
            self.outline(
                (left - offset, top - offset),
                (right + offset, bottom + offset),
                &rgba,
            );
        }
    }
}

/// Round toward negative infinity. `f32::floor` is not available without `std`.
fn floor(value: f32) -> isize {
    let truncated = value as isize;
    if (truncated as f32) > value {
        truncated - 1
    } else {
        truncated
    }
}

/// Clip a run of pixels starting at `start` to `0..limit`.
fn span(start: f32, len: f32, limit: usize) -> (usize, usize) {
    let limit = limit as isize;
    let lo = floor(start).clamp(0, limit);
    let hi = floor(start + len).clamp(0, limit);

    (lo as usize, hi.max(lo) as usize)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// A draw call captured by [`Recorder`].
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Draw {
        Clear,
        Fill(f32, f32, f32, f32, Color),
        Stroke(f32, f32, f32, f32, f32, Color),
    }

    /// A canvas that remembers what was drawn, in order.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) calls: Vec<Draw>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self) {
            self.calls.push(Draw::Clear);
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.calls.push(Draw::Fill(x, y, width, height, color));
        }

        fn stroke_rect(
            &mut self,
            x: f32,
            y: f32,
            width: f32,
            height: f32,
            line_width: f32,
            color: Color,
        ) {
            self.calls
                .push(Draw::Stroke(x, y, width, height, line_width, color));
        }
    }

    fn pixel(screen: &[u8], x: usize, y: usize) -> [u8; 4] {
        let i = (x + y * WIDTH) * 4;
        [screen[i], screen[i + 1], screen[i + 2], screen[i + 3]]
    }

    #[test]
    fn floor_negative() {
        assert_eq!(floor(2.5), 2);
        assert_eq!(floor(-2.5), -3);
        assert_eq!(floor(-50.0), -50);
        assert_eq!(floor(0.0), 0);
    }

    #[test]
    fn clear_is_opaque_black() {
        let mut screen = vec![0x7f; WIDTH * HEIGHT * 4];
        FrameBuffer::new(&mut screen).clear();

        assert!(screen.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn fill_covers_rect() {
        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        let mut canvas = FrameBuffer::new(&mut screen);
        canvas.clear();
        canvas.fill_rect(10.0, 20.0, 4.0, 3.0, Color::Red);

        let red = Color::Red.rgba();
        let black = Color::Black.rgba();
        assert_eq!(pixel(&screen, 10, 20), red);
        assert_eq!(pixel(&screen, 13, 22), red);
        assert_eq!(pixel(&screen, 14, 22), black, "Right edge is exclusive");
        assert_eq!(pixel(&screen, 13, 23), black, "Bottom edge is exclusive");
        assert_eq!(pixel(&screen, 9, 20), black);
    }

    #[test]
    fn fill_clips_to_screen() {
        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        let mut canvas = FrameBuffer::new(&mut screen);
        canvas.clear();

        // Dropping player, partially above the screen
        canvas.fill_rect(100.0, -30.0, 40.0, 40.0, Color::Blue);
        // Bullets that flew away
        canvas.fill_rect(-500.0, 10.0, 10.0, 5.0, Color::Red);
        canvas.fill_rect(5000.0, 10.0, 10.0, 5.0, Color::Red);
        // Straddling the right edge
        canvas.fill_rect(795.0, 390.0, 10.0, 20.0, Color::Yellow);

        assert_eq!(pixel(&screen, 100, 0), Color::Blue.rgba());
        assert_eq!(pixel(&screen, 139, 9), Color::Blue.rgba());
        assert_eq!(pixel(&screen, 139, 10), Color::Black.rgba());
        assert_eq!(pixel(&screen, 799, 399), Color::Yellow.rgba());
        assert!(
            !screen.chunks_exact(4).any(|px| px == Color::Red.rgba()),
            "Off screen bullets should not be drawn"
        );
    }

    #[test]
    fn stroke_is_centered() {
        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        let mut canvas = FrameBuffer::new(&mut screen);
        canvas.clear();
        canvas.stroke_rect(95.0, 295.0, 50.0, 50.0, 3.0, Color::Cyan);

        let cyan = Color::Cyan.rgba();
        let black = Color::Black.rgba();

        // Three pixels wide across the top edge
        assert_eq!(pixel(&screen, 120, 294), cyan);
        assert_eq!(pixel(&screen, 120, 295), cyan);
        assert_eq!(pixel(&screen, 120, 296), cyan);
        assert_eq!(pixel(&screen, 120, 293), black);
        assert_eq!(pixel(&screen, 120, 297), black);

        // Interior stays untouched
        assert_eq!(pixel(&screen, 120, 320), black);

        // Right edge, last column of the rect is 144
        assert_eq!(pixel(&screen, 145, 320), cyan);
        assert_eq!(pixel(&screen, 146, 320), black);
    }

    #[test]
    fn stroke_clips_to_screen() {
        let mut screen = vec![0; WIDTH * HEIGHT * 4];
        let mut canvas = FrameBuffer::new(&mut screen);
        canvas.clear();
        canvas.stroke_rect(-5.0, -5.0, 50.0, 50.0, 3.0, Color::Yellow);

        assert_eq!(pixel(&screen, 20, 44), Color::Yellow.rgba());
        assert_eq!(pixel(&screen, 44, 20), Color::Yellow.rgba());
    }
}
