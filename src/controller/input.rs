/// Platform-agnostic input handling
use tracing::trace;
use winit::keyboard::KeyCode;

/// The closed set of keys either control scheme reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    A,
    D,
    Q,
    E,
}

impl Key {
    pub const ALL: [Key; 10] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::S,
        Key::A,
        Key::D,
        Key::Q,
        Key::E,
    ];

    /// Maps a physical key to a recognized key, `None` for everything else.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::KeyQ => Some(Key::Q),
            KeyCode::KeyE => Some(Key::E),
            _ => None,
        }
    }
}

/// Discrete events delivered by the window between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Events collected since the last frame. Drained exactly once per frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        trace!(?event, "queued input");
        self.pending.push(event);
    }

    /// Queues a key press if the key is one we recognize.
    pub fn push_key_code(&mut self, code: KeyCode) -> bool {
        match Key::from_key_code(code) {
            Some(key) => {
                self.push(InputEvent::KeyDown(key));
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}
