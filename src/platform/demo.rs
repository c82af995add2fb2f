//! Autopilot input for headless runs
//!
//! Tracks the ball with the paddle and asks to quit after a fixed number of
//! frames, producing the same events a player's pointer would.

use super::input::{InputSource, Key, PlatformEvent};
use crate::sim::{EntityKind, GameState};

/// Follows the lowest ball, slightly offset so the rallies vary
#[derive(Debug, Clone)]
pub struct DemoInput {
    frames_left: u64,
    frames_seen: u64,
    target: Option<(f32, f32)>,
}

impl DemoInput {
    /// Quit after `max_frames` polls. Zero runs until something else quits.
    pub fn new(max_frames: u64) -> Self {
        Self {
            frames_left: max_frames,
            frames_seen: 0,
            target: None,
        }
    }

    /// Pick the pointer target for the next poll from the current state
    pub fn track(&mut self, state: &GameState) {
        let lowest_ball = state
            .store
            .each_live()
            .filter(|e| e.kind == EntityKind::Ball)
            .min_by(|a, b| a.position.y.total_cmp(&b.position.y));

        self.target = lowest_ball.map(|ball| {
            // Oscillating offset keeps the paddle from returning the ball on the same line
            let wobble = (self.frames_seen as f32 * 0.05).sin() * 30.0;
            (ball.position.x + wobble, ball.position.y)
        });
    }
}

impl InputSource for DemoInput {
    fn poll_events(&mut self, out: &mut Vec<PlatformEvent>) {
        self.frames_seen += 1;

        if let Some((x, y)) = self.target.take() {
            out.push(PlatformEvent::PointerMotion { x, y });
        }

        if self.frames_left > 0 {
            self.frames_left -= 1;
            if self.frames_left == 0 {
                log::info!("Demo frame limit reached after {} frames", self.frames_seen);
                out.push(PlatformEvent::KeyDown(Key::Escape));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TickInput;

    #[test]
    fn test_demo_follows_ball() {
        let state = GameState::new();
        let ball_x = state
            .store
            .each_live()
            .find(|e| e.kind == EntityKind::Ball)
            .map(|e| e.position.x)
            .unwrap();

        let mut demo = DemoInput::new(0);
        demo.track(&state);
        let mut events = Vec::new();
        demo.poll_events(&mut events);

        let input = TickInput::from_events(&events);
        let x = input.pointer_x.expect("pointer event");
        assert!((x - ball_x).abs() <= 30.0);
        assert!(!input.quit);
    }

    #[test]
    fn test_demo_quits_after_frame_limit() {
        let mut demo = DemoInput::new(3);
        let mut quits = 0;
        for _ in 0..5 {
            let mut events = Vec::new();
            demo.poll_events(&mut events);
            if TickInput::from_events(&events).quit {
                quits += 1;
            }
        }
        assert_eq!(quits, 1);
    }

    #[test]
    fn test_untracked_poll_sends_no_motion() {
        let mut demo = DemoInput::new(0);
        let mut events = Vec::new();
        demo.poll_events(&mut events);
        assert!(events.is_empty());
    }
}
