//! Frame scheduling for the animation loop.
//!
//! The host presents frames at whatever cadence it likes and calls
//! [`Ticker::frame`] once per presented frame. A ticker only reports a tick
//! while it is running; [`Ticker::stop`] cancels the pending tick. Each tick is
//! a unit step: there is no delta-time scaling.

use std::time::Instant;

/// Start/stop scheduler for the per-frame callback chain.
pub trait Ticker {
    /// Begin requesting ticks on every presented frame.
    fn start(&mut self);
    /// Cancel the pending next-frame tick.
    fn stop(&mut self);
    /// Whether a tick is pending for the next frame.
    fn is_running(&self) -> bool;
    /// Record a presented frame. Returns true if the loop should tick now.
    fn frame(&mut self) -> bool;
}

/// Ticker backed by the host's frame presentation, counting frames and ticks.
#[derive(Debug)]
pub struct FrameTicker {
    running: bool,
    /// Time when the ticker was created.
    start_time: Instant,
    /// Time of the last presented frame.
    last_frame: Instant,
    /// Presented frames since creation.
    frame_count: u64,
    /// Frames that produced a tick.
    tick_count: u64,
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTicker {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            running: false,
            start_time: now,
            last_frame: now,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        (self.last_frame - self.start_time).as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Ticker for FrameTicker {
    fn start(&mut self) {
        if !self.running {
            log::debug!("Animation loop started");
        }
        self.running = true;
    }

    fn stop(&mut self) {
        if self.running {
            log::debug!("Animation loop stopped after {} ticks", self.tick_count);
        }
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn frame(&mut self) -> bool {
        self.last_frame = Instant::now();
        self.frame_count += 1;
        if self.running {
            self.tick_count += 1;
        }
        self.running
    }
}

/// Manually advanced ticker for tests and deterministic replay.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    running: bool,
    frames: u64,
    ticks: u64,
    starts: u32,
    stops: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that produced a tick.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of `start` calls that actually started the loop.
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// Number of `stop` calls that cancelled a running loop.
    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self) {
        if !self.running {
            self.starts += 1;
        }
        self.running = true;
    }

    fn stop(&mut self) {
        if self.running {
            self.stops += 1;
        }
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn frame(&mut self) -> bool {
        self.frames += 1;
        if self.running {
            self.ticks += 1;
        }
        self.running
    }
}
