//! Fixed-cadence frame driver.
//!
//! Calls [`Scene::draw`] once per tick and sleeps whatever is left of the
//! frame budget. The driver is single-threaded; a [`StopHandle`] can be
//! cloned into another thread (or a signal handler) to end a run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::Scene;
use crate::error::SandboxError;
use crate::render::Canvas;
use crate::Result;

/// Frame rate of the interactive application
pub const DEFAULT_FPS: u32 = 60;

/// Cloneable flag asking a running driver to stop after the current frame
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Re-arms the handle for another run
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Drives a scene at a fixed frame rate
#[derive(Debug)]
pub struct FrameDriver {
    fps: u32,
    frame_budget: Duration,
    stop: StopHandle,
}

impl FrameDriver {
    pub fn new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(SandboxError::InvalidParameter("frame rate must be positive".to_owned()));
        }
        Ok(Self {
            fps,
            frame_budget: Duration::from_secs_f64(1.0 / fps as f64),
            stop: StopHandle::default(),
        })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// One frame without pacing
    pub fn tick(&self, scene: &mut Scene, canvas: &mut dyn Canvas) {
        scene.draw(canvas);
    }

    /// Runs `frames` paced frames, or fewer if stopped. Returns the number of
    /// frames drawn.
    pub fn run_for<C, F>(&self, scene: &mut Scene, canvas: &mut C, frames: u64, mut on_frame: F) -> u64
    where
        C: Canvas,
        F: FnMut(&mut Scene, &mut C),
    {
        let mut drawn = 0;
        while drawn < frames && !self.stop.is_stopped() {
            self.paced_frame(scene, canvas, &mut on_frame);
            drawn += 1;
        }
        debug!(drawn, "driver finished");
        drawn
    }

    /// Runs paced frames until the stop handle fires. Returns the number of
    /// frames drawn.
    pub fn run_until_stopped<C, F>(&self, scene: &mut Scene, canvas: &mut C, mut on_frame: F) -> u64
    where
        C: Canvas,
        F: FnMut(&mut Scene, &mut C),
    {
        let mut drawn = 0;
        while !self.stop.is_stopped() {
            self.paced_frame(scene, canvas, &mut on_frame);
            drawn += 1;
        }
        debug!(drawn, "driver stopped");
        drawn
    }

    fn paced_frame<C, F>(&self, scene: &mut Scene, canvas: &mut C, on_frame: &mut F)
    where
        C: Canvas,
        F: FnMut(&mut Scene, &mut C),
    {
        let frame_start = Instant::now();
        scene.draw(canvas);
        on_frame(scene, canvas);
        let elapsed = frame_start.elapsed();
        if elapsed < self.frame_budget {
            sleep(self.frame_budget - elapsed);
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            frame_budget: Duration::from_secs_f64(1.0 / DEFAULT_FPS as f64),
            stop: StopHandle::default(),
        }
    }
}
