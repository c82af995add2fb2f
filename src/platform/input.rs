//! Input events delivered by the windowing layer
//!
//! Events are drained once per frame, in order, and reduced to a `TickInput`
//! before the simulation runs.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Left,
    Right,
    /// Any other key, by platform keycode
    Other(u32),
}

/// A single platform event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    /// Pointer position in playfield units
    PointerMotion { x: f32, y: f32 },
    /// Anything the platform layer could not classify
    Unknown,
}

/// Source of per-frame input events
pub trait InputSource {
    /// Append every pending event to `out` without blocking
    fn poll_events(&mut self, out: &mut Vec<PlatformEvent>);
}

impl TickInput {
    /// Reduce a frame's events to simulation input.
    ///
    /// Quit and Escape request termination; the last pointer motion wins.
    /// Everything else is ignored.
    pub fn from_events(events: &[PlatformEvent]) -> Self {
        let mut input = TickInput::default();
        for event in events {
            match *event {
                PlatformEvent::Quit | PlatformEvent::KeyDown(Key::Escape) => input.quit = true,
                PlatformEvent::PointerMotion { x, .. } => input.pointer_x = Some(x),
                PlatformEvent::KeyDown(_) | PlatformEvent::Unknown => {
                    log::trace!("ignoring {:?}", event);
                }
            }
        }
        input
    }
}

/// Replays pre-recorded event batches, one batch per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<PlatformEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events for the next unscripted frame
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = PlatformEvent>) -> &mut Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self, out: &mut Vec<PlatformEvent>) {
        if let Some(frame) = self.frames.pop_front() {
            out.extend(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_events_are_idle_input() {
        assert_eq!(TickInput::from_events(&[]), TickInput::default());
    }

    #[test]
    fn test_last_pointer_motion_wins() {
        let input = TickInput::from_events(&[
            PlatformEvent::PointerMotion { x: 10.0, y: 5.0 },
            PlatformEvent::KeyDown(Key::Space),
            PlatformEvent::PointerMotion { x: 42.0, y: 7.0 },
        ]);
        assert_eq!(input.pointer_x, Some(42.0));
        assert!(!input.quit);
    }

    #[test]
    fn test_quit_and_escape_terminate() {
        assert!(TickInput::from_events(&[PlatformEvent::Quit]).quit);
        assert!(TickInput::from_events(&[PlatformEvent::KeyDown(Key::Escape)]).quit);
        assert!(!TickInput::from_events(&[PlatformEvent::KeyDown(Key::Other(65))]).quit);
    }

    #[test]
    fn test_unknown_events_are_ignored() {
        let input =
            TickInput::from_events(&[PlatformEvent::Unknown, PlatformEvent::KeyDown(Key::Left)]);
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut script = ScriptedInput::new();
        script
            .push_frame([PlatformEvent::PointerMotion { x: 1.0, y: 0.0 }])
            .push_frame(Vec::new())
            .push_frame([PlatformEvent::Quit]);
        assert_eq!(script.remaining_frames(), 3);

        let mut events = Vec::new();
        script.poll_events(&mut events);
        assert_eq!(events, vec![PlatformEvent::PointerMotion { x: 1.0, y: 0.0 }]);

        events.clear();
        script.poll_events(&mut events);
        assert!(events.is_empty());

        events.clear();
        script.poll_events(&mut events);
        assert_eq!(events, vec![PlatformEvent::Quit]);

        // Exhausted scripts stay quiet
        events.clear();
        script.poll_events(&mut events);
        assert!(events.is_empty());
    }
}
