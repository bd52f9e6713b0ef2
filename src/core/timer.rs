/// Self-contained animation timers - advanced by the host's frame delta,
/// never by polling a wall clock

/// Elapsed-time counter that can be restarted
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, delta: f32) {
        self.elapsed += delta.max(0.0);
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Seconds since the last restart
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Create countdown that is already running
    pub fn started(duration: f32) -> Self {
        let mut countdown = Self::new(duration);
        countdown.start();
        countdown
    }

    /// Start countdown
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Stop without firing
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta.max(0.0);

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Get progress [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}

/// Repeating animation cycle with an optional start delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    pub period: f32,
    pub delay: f32,
}

impl Cycle {
    pub const fn new(period: f32) -> Self {
        Self { period, delay: 0.0 }
    }

    pub const fn delayed(period: f32, delay: f32) -> Self {
        Self { period, delay }
    }

    /// Phase in [0, 1) at `elapsed` seconds, None while still delayed
    pub fn phase(&self, elapsed: f32) -> Option<f32> {
        let t = elapsed - self.delay;
        if t < 0.0 || self.period <= 0.0 {
            return None;
        }
        Some((t % self.period) / self.period)
    }

    /// Oscillates `low -> high -> low` once per period, easing in and out
    pub fn oscillate(&self, elapsed: f32, low: f32, high: f32) -> f32 {
        let phase = self.phase(elapsed).unwrap_or(0.0);
        let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        low + (high - low) * wave
    }
}

/// Ease-out curve over [0, 1]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Ease-in-out curve over [0, 1]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
