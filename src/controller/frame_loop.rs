use std::time::{Duration, Instant};

use glam::Mat4;
use tracing::info;

use super::input::{InputEvent, Key};
use crate::view::QuadSink;

/// A demo driven by the frame loop.
pub trait Scene {
    /// Applies one key press to the scene's state.
    fn handle_key(&mut self, key: Key);

    /// Per-frame update after input has been applied.
    fn advance(&mut self) {}

    fn view_matrix(&self) -> Mat4;

    /// Emits this frame's geometry.
    fn draw(&self, sink: &mut dyn QuadSink);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// One iteration per frame: input, update, clear, draw.
///
/// Presenting the result and waiting for the next frame belong to the caller.
pub struct FrameLoop<S: Scene> {
    scene: S,
    frame: u64,
}

impl<S: Scene> FrameLoop<S> {
    pub fn new(scene: S) -> Self {
        Self { scene, frame: 0 }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Runs one frame. A quit event ends the loop before anything is drawn.
    pub fn step<I>(&mut self, events: I, sink: &mut dyn QuadSink) -> LoopControl
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Quit => {
                    info!(frames = self.frame, "quit requested");
                    return LoopControl::Exit;
                }
                InputEvent::KeyDown(key) => self.scene.handle_key(key),
            }
        }

        self.scene.advance();
        sink.clear();
        self.scene.draw(sink);
        self.frame += 1;
        LoopControl::Continue
    }
}

/// Caps the frame rate: each frame starts no earlier than one interval
/// after the previous one.
pub struct FramePacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame may start, given that the current one finished at `now`.
    pub fn next_deadline(&mut self, now: Instant) -> Instant {
        let deadline = match self.last {
            Some(last) => (last + self.interval).max(now),
            None => now + self.interval,
        };
        self.last = Some(deadline);
        deadline
    }
}
