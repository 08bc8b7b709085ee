//! Plain data records for everything that lives in the arena.

/// Health and shield both start full.
pub const MAX_HEALTH: u8 = 100;
pub const MAX_SHIELD: u8 = 100;

/// The handful of colors the duel is painted with.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Color {
    Black,
    White,
    Blue,
    Red,
    Green,
    Cyan,
    Yellow,
}

impl Color {
    /// RGBA bytes, ready to copy into a pixel buffer.
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Color::Black => [0x00, 0x00, 0x00, 0xff],
            Color::White => [0xff, 0xff, 0xff, 0xff],
            Color::Blue => [0x00, 0x00, 0xff, 0xff],
            Color::Red => [0xff, 0x00, 0x00, 0xff],
            Color::Green => [0x00, 0xff, 0x00, 0xff],
            Color::Cyan => [0x00, 0xff, 0xff, 0xff],
            Color::Yellow => [0xff, 0xff, 0x00, 0xff],
        }
    }
}

/// One of the two duelists.
///
/// `health` and `shield` are stored but nothing in the game damages or drains them.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub health: u8,
    pub shield: u8,
    /// Set while the player's shield key is held.
    pub shield_active: bool,
}

/// A projectile flying horizontally across the arena.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Signed; positive flies right.
    pub speed: f32,
    pub color: Color,
}

impl Player {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            health: MAX_HEALTH,
            shield: MAX_SHIELD,
            shield_active: false,
        }
    }

    /// Center of the bounding box.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The shield outline is only drawn while it is held and has charge left.
    pub fn shield_visible(&self) -> bool {
        self.shield_active && self.shield > 0
    }
}

impl Bullet {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
            color,
        }
    }
}
