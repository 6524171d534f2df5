//! Queued window input
//!
//! The platform layer pushes events as they arrive; the game drains the
//! queue once per frame.

use glam::Vec2;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    Press { button: MouseButton, pos: Vec2 },
    Release { button: MouseButton, pos: Vec2 },
    Move { pos: Vec2 },
    WheelUp { pos: Vec2 },
    WheelDown { pos: Vec2 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyPress { key: String },
    KeyRelease { key: String },
    Char(char),
    Mouse(MouseEvent),
}

/// FIFO of pending input plus the last known pointer position
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    pointer: Vec2,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        if let InputEvent::Mouse(mouse) = &event {
            self.pointer = match *mouse {
                MouseEvent::Press { pos, .. }
                | MouseEvent::Release { pos, .. }
                | MouseEvent::Move { pos }
                | MouseEvent::WheelUp { pos }
                | MouseEvent::WheelDown { pos } => pos,
            };
        }
        self.events.push_back(event);
    }

    pub fn push_mouse(&mut self, event: MouseEvent) {
        self.push(InputEvent::Mouse(event));
    }

    /// Take every pending event in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
