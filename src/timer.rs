use std::time::Duration;

/// Repeating interval timer driven by the host's frame clock.
///
/// Holding an `IntervalTimer` is what "a timer is active" means: dropping it
/// cancels every future tick.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advances the timer by `dt` and returns how many intervals completed.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Optional timer handle plus the interval new timers are created with.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    handle: Option<IntervalTimer>,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Creates a timer unless one is already running. Returns true if started.
    pub fn start(&mut self) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(IntervalTimer::new(self.interval));
        true
    }

    /// Drops the running timer, if any. Returns true if one was cancelled.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn tick(&mut self, dt: Duration) -> u32 {
        match self.handle.as_mut() {
            Some(timer) => timer.tick(dt),
            None => 0,
        }
    }
}
