/// Whole-second match clock. Driven by an external once-per-second tick;
/// ticks while stopped are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchClock {
    elapsed_seconds: u64,
    running: bool,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. No-op if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Advance by one second if running. Returns the elapsed total.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.elapsed_seconds += 1;
        }
        self.elapsed_seconds
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
