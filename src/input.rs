#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Key::Left => 1,
            Key::Right => 1 << 1,
            Key::Up => 1 << 2,
            Key::Down => 1 << 3,
        }
    }
}

/// Key state accumulated between two frames.
///
/// `is_down` stays true while a key is held; `is_pressed` is true only on
/// the frame the key went down. Call [`InputState::end_frame`] after the
/// frame consumed the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    down: u8,
    pressed: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.down & key.bit() == 0 {
            self.pressed |= key.bit();
        }
        self.down |= key.bit();
    }

    pub fn key_up(&mut self, key: Key) {
        self.down &= !key.bit();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down & key.bit() != 0
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed & key.bit() != 0
    }

    pub fn end_frame(&mut self) {
        self.pressed = 0;
    }

    pub fn release_all(&mut self) {
        self.down = 0;
        self.pressed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_an_edge() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.is_pressed(Key::Left) && input.is_down(Key::Left));
        input.end_frame();
        // auto-repeat while held
        input.key_down(Key::Left);
        assert!(!input.is_pressed(Key::Left));
        assert!(input.is_down(Key::Left));
        input.key_up(Key::Left);
        assert!(!input.is_down(Key::Left));
    }

    #[test]
    fn tap_within_one_frame_still_counts() {
        let mut input = InputState::new();
        input.key_down(Key::Right);
        input.key_up(Key::Right);
        assert!(input.is_pressed(Key::Right));
        assert!(!input.is_down(Key::Right));
    }

    #[test]
    fn dom_names() {
        assert_eq!(Key::from_dom("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_dom("a"), None);
    }
}
