use duel_core::{Notifications, HEIGHT, WIDTH};
use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};
use std::convert::Infallible;

// Space between the label border and its text
const PADDING: u32 = 5;

/// Draw target over the RGBA frame of the `pixels` surface.
struct Overlay<'a> {
    frame: &'a mut [u8],
}

impl OriginDimensions for Overlay<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Overlay<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let i = (y * WIDTH + x) * 4;
            self.frame[i..i + 4].copy_from_slice(&[color.r(), color.g(), color.b(), 0xff]);
        }

        Ok(())
    }
}

/// Draw every live notification as a boxed label at its anchor.
pub(crate) fn draw_notifications(frame: &mut [u8], notifications: &Notifications) {
    let mut overlay = Overlay { frame };
    let font = &FONT_6X10;
    let text_style = MonoTextStyle::new(font, Rgb888::WHITE);
    let box_style = PrimitiveStyleBuilder::new()
        .fill_color(Rgb888::BLACK)
        .stroke_color(Rgb888::WHITE)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    for notification in notifications.iter() {
        let text = label_text(&notification.message);
        let anchor = Point::new(notification.x as i32, notification.y as i32);
        let size = Size::new(
            text.len() as u32 * font.character_size.width + PADDING * 2,
            font.character_size.height + PADDING * 2,
        );

        Rectangle::new(anchor, size)
            .into_styled(box_style)
            .draw(&mut overlay)
            .unwrap_or_else(|never| match never {});
        Text::with_baseline(
            &text,
            anchor + Point::new(PADDING as i32, PADDING as i32),
            text_style,
            Baseline::Top,
        )
        .draw(&mut overlay)
        .map(|_| ())
        .unwrap_or_else(|never| match never {});
    }
}

/// The bitmap font is ASCII only; badges and other symbols stay in the log.
fn label_text(message: &str) -> String {
    let text: String = message.chars().filter(char::is_ascii).collect();

    text.trim().to_string()
}
