use duel_core::Key;
use winit::keyboard::KeyCode;

/// Physical keys bound to game keys. Anything not listed is ignored.
pub(crate) const BINDINGS: [(KeyCode, Key); 13] = [
    // Player one
    (KeyCode::KeyW, Key::W),
    (KeyCode::KeyA, Key::A),
    (KeyCode::KeyS, Key::S),
    (KeyCode::KeyD, Key::D),
    (KeyCode::KeyQ, Key::Q),
    (KeyCode::Space, Key::Space),
    // Player two
    (KeyCode::ArrowUp, Key::ArrowUp),
    (KeyCode::ArrowLeft, Key::ArrowLeft),
    (KeyCode::ArrowDown, Key::ArrowDown),
    (KeyCode::ArrowRight, Key::ArrowRight),
    (KeyCode::KeyM, Key::M),
    (KeyCode::Enter, Key::Enter),
    (KeyCode::NumpadEnter, Key::Enter),
];

/// Keys that act again on every OS key repeat while held.
///
/// Holding a fire key keeps shooting at the keyboard repeat rate. Movement and shields are
/// level-triggered through the held-key table, so a repeat would change nothing for them.
pub(crate) fn auto_repeats(key: Key) -> bool {
    key.fires().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(code: KeyCode) -> Vec<Key> {
        BINDINGS
            .iter()
            .filter(|(bound, _)| *bound == code)
            .map(|&(_, key)| key)
            .collect()
    }

    #[test]
    fn every_game_key_is_bound() {
        let keys = [
            Key::W,
            Key::A,
            Key::S,
            Key::D,
            Key::Q,
            Key::Space,
            Key::ArrowUp,
            Key::ArrowLeft,
            Key::ArrowDown,
            Key::ArrowRight,
            Key::M,
            Key::Enter,
        ];
        for key in keys {
            assert!(
                BINDINGS.iter().any(|&(_, bound)| bound == key),
                "{key:?} has no binding"
            );
        }
    }

    #[test]
    fn bound_keys() {
        assert_eq!(bound(KeyCode::KeyW), [Key::W]);
        assert_eq!(bound(KeyCode::ArrowLeft), [Key::ArrowLeft]);
        assert_eq!(bound(KeyCode::Space), [Key::Space]);
        assert_eq!(bound(KeyCode::NumpadEnter), [Key::Enter]);
        assert_eq!(bound(KeyCode::KeyM), [Key::M]);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(bound(KeyCode::KeyZ).is_empty());
        assert!(bound(KeyCode::Escape).is_empty());
        assert!(bound(KeyCode::KeyR).is_empty(), "Restart is handled by the host");
    }

    #[test]
    fn only_fire_keys_repeat() {
        assert!(auto_repeats(Key::Space));
        assert!(auto_repeats(Key::Enter));
        assert!(!auto_repeats(Key::Q));
        assert!(!auto_repeats(Key::M));
        assert!(!auto_repeats(Key::W));
        assert!(!auto_repeats(Key::ArrowRight));
    }
}
