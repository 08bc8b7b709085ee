use crate::canvas::Canvas;
use crate::entity::{Bullet, Color, Player};
use crate::{SHIELD_LINE_WIDTH, SHIELD_PADDING};

/// Paint a full frame.
///
/// Layers are painted back to front: bullets, then players, then shields, so a shield always
/// frames its player and is never hidden under a bullet.
pub fn render<C: Canvas>(canvas: &mut C, players: &[Player; 2], bullets: &[Bullet]) {
    canvas.clear();
    draw_bullets(canvas, bullets);
    draw_players(canvas, players);
    draw_shields(canvas, players);
}

pub fn draw_bullets<C: Canvas>(canvas: &mut C, bullets: &[Bullet]) {
    for bullet in bullets {
        canvas.fill_rect(
            bullet.x,
            bullet.y,
            bullet.width,
            bullet.height,
            bullet.color,
        );
    }
}

pub fn draw_players<C: Canvas>(canvas: &mut C, players: &[Player; 2]) {
    for player in players {
        canvas.fill_rect(
            player.x,
            player.y,
            player.width,
            player.height,
            player.color,
        );
    }
}

/// Outline every raised shield. Player one's shield is cyan, player two's is yellow.
pub fn draw_shields<C: Canvas>(canvas: &mut C, players: &[Player; 2]) {
    let colors = [Color::Cyan, Color::Yellow];

    for (player, color) in players.iter().zip(colors) {
        if player.shield_visible() {
            canvas.stroke_rect(
                player.x - SHIELD_PADDING,
                player.y - SHIELD_PADDING,
                player.width + SHIELD_PADDING * 2.0,
                player.height + SHIELD_PADDING * 2.0,
                SHIELD_LINE_WIDTH,
                color,
            );
        }
    }
}
