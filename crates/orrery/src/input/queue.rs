/// Input the simulation understands. Coordinates are world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f32, y: f32 },
    /// The cursor moved.
    PointerMove { x: f32, y: f32 },
    /// A key was pressed. `key_code` is the Unicode scalar of the key.
    KeyDown { key_code: u32 },
    /// A command from UI buttons. `kind` picks the command (`CUSTOM_*`).
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Key-press event for a character.
    pub fn key(c: char) -> Self {
        InputEvent::KeyDown { key_code: c as u32 }
    }
}

/// Events collected between frames.
/// The host pushes as they arrive; the runner drains once per frame,
/// before any motion, so every event lands whole at a phase boundary.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
