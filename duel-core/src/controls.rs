/// Identifies one of the two duelists.
///
/// Player one stands on the left and fires right, player two stands on the right and fires left.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Index into the game's player pair.
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Every key the duel recognizes.
///
/// Hosts map their own key codes onto this set and drop everything else.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    // Player one
    W,
    A,
    S,
    D,
    Q,
    Space,

    // Player two
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    M,
    Enter,
}

// Number of keys with a held state
const HELD_KEYS: usize = 10;

impl Key {
    /// Slot in the held table. Fire keys are edge-triggered and have none.
    const fn slot(self) -> Option<usize> {
        match self {
            Key::W => Some(0),
            Key::A => Some(1),
            Key::S => Some(2),
            Key::D => Some(3),
            Key::ArrowUp => Some(4),
            Key::ArrowLeft => Some(5),
            Key::ArrowDown => Some(6),
            Key::ArrowRight => Some(7),
            Key::Q => Some(8),
            Key::M => Some(9),
            Key::Space | Key::Enter => None,
        }
    }

    /// The player this key fires for, if it is a fire key.
    pub const fn fires(self) -> Option<PlayerId> {
        match self {
            Key::Space => Some(PlayerId::One),
            Key::Enter => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The player this key raises a shield for, if it is a shield key.
    pub const fn shields(self) -> Option<PlayerId> {
        match self {
            Key::Q => Some(PlayerId::One),
            Key::M => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The shield-hold key of a player.
    pub const fn shield_key(id: PlayerId) -> Key {
        match id {
            PlayerId::One => Key::Q,
            PlayerId::Two => Key::M,
        }
    }

    /// Movement keys of a player in `(up, left, down, right)` order.
    pub const fn movement_keys(id: PlayerId) -> [Key; 4] {
        match id {
            PlayerId::One => [Key::W, Key::A, Key::S, Key::D],
            PlayerId::Two => [Key::ArrowUp, Key::ArrowLeft, Key::ArrowDown, Key::ArrowRight],
        }
    }
}

/// Held movement flags for one player. Opposing flags may both be set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Direction {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

/// Live snapshot of which keys are held down.
#[derive(Debug, Default)]
pub struct Controls {
    held: [bool; HELD_KEYS],
}

impl Controls {
    /// Record a key as held or released. Fire keys have no held state and are ignored.
    pub fn set_held(&mut self, key: Key, value: bool) {
        if let Some(slot) = key.slot() {
            self.held[slot] = value;
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        matches!(key.slot(), Some(slot) if self.held[slot])
    }

    /// Hold or release a player's shield key.
    pub fn set_shield(&mut self, id: PlayerId, value: bool) {
        self.set_held(Key::shield_key(id), value);
    }

    pub fn shield(&self, id: PlayerId) -> bool {
        self.is_held(Key::shield_key(id))
    }

    /// Held movement flags for one player.
    pub fn direction(&self, id: PlayerId) -> Direction {
        let [up, left, down, right] = Key::movement_keys(id);

        Direction {
            up: self.is_held(up),
            left: self.is_held(left),
            down: self.is_held(down),
            right: self.is_held(right),
        }
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held = [false; HELD_KEYS];
    }
}
