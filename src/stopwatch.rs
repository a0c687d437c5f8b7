use crate::format;
use std::time::Duration;

/// Cadence of the repeating tick. The display resolves hundredths of a
/// second, so 10ms is the finest step it can render.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// How far the counter advances per tick. Drift against wall-clock time is
/// accepted; the counter counts ticks, not measured deltas.
const TICK_MS: u64 = 10;

/// A recorded split. Immutable once captured. The id is the 1-based ordinal
/// of the lap, so it doubles as the display number when the list is rendered
/// newest-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lap {
    pub id: u64,
    pub time: String,
}

/// The entire stopwatch state behind one set of transition methods.
///
/// The owner of the repeating timer calls [`Stopwatch::toggle`] and starts or
/// stops the timer to match the returned flag, keeping scheduling a direct,
/// traceable call rather than a side effect of a flag change.
#[derive(Debug, Default)]
pub struct Stopwatch {
    elapsed_ms: u64,
    running: bool,
    laps: Vec<Lap>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flips between stopped and running, returning the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }

        self.running
    }

    /// Advances the counter by one tick. Ignored while stopped, so a stale
    /// timer callback cannot move the clock.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_ms += TICK_MS;
        }
    }

    /// Records a split of the current elapsed time and returns it. Requests
    /// while stopped are dropped.
    ///
    /// Laps are only appended and only cleared wholesale by [`Stopwatch::reset`],
    /// so the list length is a strictly monotonic id source.
    pub fn lap(&mut self) -> Option<Lap> {
        if !self.running {
            return None;
        }

        let lap = Lap {
            id: self.laps.len() as u64 + 1,
            time: format::clock(self.elapsed_ms),
        };
        self.laps.push(lap.clone());

        Some(lap)
    }

    /// Returns every piece of state to its initial value, forcibly stopping
    /// the clock. Allowed in any state.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
        self.laps.clear();
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Laps in recording order, oldest first.
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    pub fn display(&self) -> String {
        format::clock(self.elapsed_ms)
    }
}
