use crate::controls::PlayerId;
use crate::entity::{Bullet, Player};
use crate::{BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH};
use alloc::vec::Vec;

/// Spawn a bullet from the center of `player` and append it to `bullets`.
///
/// Player one always fires right and player two always fires left, wherever they stand. Returns a
/// copy of the new bullet.
pub fn fire(bullets: &mut Vec<Bullet>, player: &Player, role: PlayerId) -> Bullet {
    let speed = match role {
        PlayerId::One => BULLET_SPEED,
        PlayerId::Two => -BULLET_SPEED,
    };
    let (x, y) = player.center();
    let bullet = Bullet::new(x, y, BULLET_WIDTH, BULLET_HEIGHT, speed, player.color);

    bullets.push(bullet);

    bullet
}

/// Move every bullet one tick along its flight path.
///
/// Bullets are never culled; they keep flying after leaving the arena.
pub fn advance(bullets: &mut [Bullet]) {
    for bullet in bullets.iter_mut() {
        bullet.x += bullet.speed;
    }
}
