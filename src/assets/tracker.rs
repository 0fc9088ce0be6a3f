use log::info;

/// Counts finished model loads for the loading bar.
///
/// Successes and failures both count as finished: a failed model still
/// gets a stand-in, so the page is as ready as it will get.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadingTracker {
    expected: usize,
    loaded: usize,
    failed: usize,
    announced: bool,
}

impl LoadingTracker {
    /// Tracker expecting `expected` loads.
    #[must_use]
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            ..Self::default()
        }
    }

    /// Record one finished load.
    pub fn record(&mut self, success: bool) {
        if success {
            self.loaded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Treat everything as finished (no loader capability at all).
    pub fn complete_all_immediately(&mut self) {
        let outstanding = self.expected.saturating_sub(self.finished());
        self.loaded += outstanding;
    }

    /// Finished loads, successful or not.
    #[must_use]
    pub fn finished(&self) -> usize {
        self.loaded + self.failed
    }

    /// Failed loads.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Whether every expected load has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished() >= self.expected
    }

    /// Loading bar fill in `[0, 100]`. Nothing to load reads as 100.
    #[must_use]
    pub fn percent(&self) -> f32 {
        if self.expected == 0 {
            return 100.0;
        }
        (self.finished() as f32 / self.expected as f32 * 100.0).min(100.0)
    }

    /// `true` exactly once, the first time this is called after the
    /// tracker completes.
    pub fn take_completion(&mut self) -> bool {
        if self.announced || !self.is_complete() {
            return false;
        }
        self.announced = true;
        info!(
            "all models finished loading ({} of {} failed)",
            self.failed, self.expected
        );
        true
    }
}
