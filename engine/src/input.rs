/// a physical key as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Space,
    Other,
}

impl Key {
    /// maps DOM style key identifiers (`"ArrowUp"`, `"ArrowDown"`, `" "`).
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            " " => Key::Space,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    None,
    Up,
    Down,
    Shoot,
}

/// holds the single latest input value. the last key-down wins and any
/// key-up clears it, whichever key was released.
#[derive(Debug)]
pub struct InputTracker {
    current: Input,
    attached: bool,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            current: Input::None,
            attached: true,
        }
    }
}

impl InputTracker {
    pub fn key_down(&mut self, key: Key) {
        if !self.attached {
            return;
        }
        match key {
            Key::ArrowUp => self.current = Input::Up,
            Key::ArrowDown => self.current = Input::Down,
            Key::Space => self.current = Input::Shoot,
            Key::Other => {}
        }
    }

    pub fn key_up(&mut self, _key: Key) {
        self.current = Input::None;
    }

    pub fn current(&self) -> Input {
        self.current
    }

    /// stops listening for key-downs. key-ups still clear the input.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
