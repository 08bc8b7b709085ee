use crate::controls::Direction;
use crate::entity::Player;
use crate::{HEIGHT, SPEED, WIDTH};

/// Step a player one tick in every held direction.
///
/// Each axis is handled on its own, so diagonals move faster than a single direction. A step that
/// would leave the arena is silently dropped.
pub fn move_player(player: &mut Player, direction: Direction) {
    let max_x = WIDTH as f32 - player.width;
    let max_y = HEIGHT as f32 - player.height;

    if direction.left && player.x - SPEED >= 0.0 {
        player.x -= SPEED;
    }
    if direction.right && player.x + SPEED <= max_x {
        player.x += SPEED;
    }
    if direction.up && player.y - SPEED >= 0.0 {
        player.y -= SPEED;
    }
    if direction.down && player.y + SPEED <= max_y {
        player.y += SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Color;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, 40.0, 40.0, Color::Blue)
    }

    const UP: Direction = Direction {
        up: true,
        left: false,
        down: false,
        right: false,
    };

    #[test]
    fn forward_one_tick() {
        let mut player = player_at(100.0, 50.0);
        move_player(&mut player, UP);

        assert_eq!(player.y, 45.0);
        assert_eq!(player.x, 100.0, "Horizontal position should not change");
    }

    #[test]
    fn forward_at_top_edge() {
        let mut player = player_at(100.0, 0.0);
        move_player(&mut player, UP);

        assert_eq!(player.y, 0.0, "Should be clamped at the top edge");
    }

    #[test]
    fn diagonal_moves_both_axes() {
        let mut player = player_at(100.0, 100.0);
        let direction = Direction {
            up: false,
            left: false,
            down: true,
            right: true,
        };
        move_player(&mut player, direction);

        assert_eq!((player.x, player.y), (105.0, 105.0));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut player = player_at(100.0, 100.0);
        let direction = Direction {
            up: true,
            left: true,
            down: true,
            right: true,
        };
        move_player(&mut player, direction);

        assert_eq!((player.x, player.y), (100.0, 100.0));
    }

    #[test]
    fn never_leaves_the_arena() {
        let max_x = WIDTH as f32 - 40.0;
        let max_y = HEIGHT as f32 - 40.0;
        let pushes = [
            Direction {
                up: true,
                left: true,
                ..Direction::default()
            },
            Direction {
                down: true,
                right: true,
                ..Direction::default()
            },
            Direction {
                up: true,
                right: true,
                ..Direction::default()
            },
            Direction {
                down: true,
                left: true,
                ..Direction::default()
            },
        ];

        for (x, y) in [(100.0, 300.0), (600.0, 300.0), (2.0, 3.0), (757.0, 358.0)] {
            for direction in pushes {
                let mut player = player_at(x, y);
                for _ in 0..500 {
                    move_player(&mut player, direction);

                    assert!(player.x >= 0.0 && player.x <= max_x, "x out of bounds");
                    assert!(player.y >= 0.0 && player.y <= max_y, "y out of bounds");
                }
            }
        }
    }
}
