use crate::domain::{Universe, UniverseError};

/// Session orchestrates the simulation for the host.
/// Owns the one universe plus play/pause state and update pacing.
pub struct Session {
    pub universe: Universe,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_tick_time_ms: f32,   // Evolution performance metric
    pub last_render_time_ms: f32, // Render performance metric
}

impl Session {
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 60.0;
    pub const DEFAULT_SPEED: f32 = 10.0;

    /// Clamp to the supported range; non-finite input falls back to the default.
    fn sanitize_speed(updates_per_second: f32) -> f32 {
        if updates_per_second.is_finite() {
            updates_per_second.clamp(Self::MIN_SPEED, Self::MAX_SPEED)
        } else {
            Self::DEFAULT_SPEED
        }
    }

    /// Wrap a universe in a paused session
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: Self::DEFAULT_SPEED,
            last_tick_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Set simulation speed (builder pattern)
    pub fn with_speed(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = Self::sanitize_speed(updates_per_second);
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        tracing::info!(running = self.is_running, "play state changed");
        self
    }

    /// Advance exactly one generation, regardless of play state
    pub fn step(mut self) -> Self {
        self.timed_tick();
        self
    }

    /// Randomize the grid and pause
    pub fn randomize(mut self) -> Self {
        self.universe.random();
        self.is_running = false;
        self
    }

    /// Restore the seed layout and pause
    pub fn reset(mut self) -> Self {
        self.universe.reset();
        self.is_running = false;
        self
    }

    /// Kill every cell; keeps running if it was running
    pub fn purge(mut self) -> Self {
        self.universe.purge();
        self
    }

    /// Switch to the next stepping algorithm
    pub fn cycle_algorithm(mut self) -> Self {
        let next = self.universe.algorithm().next();
        self.universe.set_algorithm(next);
        tracing::info!(algorithm = next.name(), "stepping changed");
        self
    }

    /// Flip one cell
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), UniverseError> {
        self.universe.toggle_cell(row, col)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = Self::sanitize_speed(self.updates_per_second + delta);
        self
    }

    /// Update simulation by one frame.
    /// Ticks at most once per frame, when the update interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.timed_tick();
            self.update_timer = 0.0;
        }

        self
    }

    fn timed_tick(&mut self) {
        let start = std::time::Instant::now();
        self.universe.tick();
        self.last_tick_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}
