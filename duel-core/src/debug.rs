use crate::canvas::Canvas;
use crate::entity::{Bullet, Color, Player};
use crate::{HEIGHT, WIDTH};

/// Draw bounding boxes for both players.
pub(crate) fn draw_players<C: Canvas>(canvas: &mut C, players: &[Player; 2]) {
    for player in players {
        canvas.stroke_rect(
            player.x,
            player.y,
            player.width,
            player.height,
            1.0,
            Color::Green,
        );
    }
}

/// Draw bounding boxes for bullets that are still inside the arena.
pub(crate) fn draw_bullets<C: Canvas>(canvas: &mut C, bullets: &[Bullet]) {
    let on_screen = |bullet: &&Bullet| {
        bullet.x + bullet.width > 0.0 && bullet.x < WIDTH as f32 && bullet.y < HEIGHT as f32
    };

    for bullet in bullets.iter().filter(on_screen) {
        canvas.stroke_rect(
            bullet.x,
            bullet.y,
            bullet.width,
            bullet.height,
            1.0,
            Color::White,
        );
    }
}
