//! Platform abstraction layer
//!
//! Handles the edges the simulation does not own:
//! - Input events (pointer motion, quit/escape)
//! - Scripted and autopilot input sources for headless runs
//! - Frame timing statistics

pub mod demo;
pub mod input;
pub mod time;

pub use demo::DemoInput;
pub use input::{InputSource, Key, PlatformEvent, ScriptedInput};
pub use time::FrameStats;
