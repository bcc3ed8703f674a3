/// Counters accumulated over a single conversion run.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    loaded: usize,
    kept: usize,
    emitted_points: usize,
    emitted_series: usize,
}

/// Copy of the counters taken at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub loaded: usize,
    pub kept: usize,
    pub emitted_points: usize,
    pub emitted_series: usize,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_loaded(&mut self, count: usize) {
        self.loaded += count;
    }

    pub fn record_kept(&mut self, count: usize) {
        self.kept += count;
    }

    pub fn record_series(&mut self, points: usize) {
        self.emitted_series += 1;
        self.emitted_points += points;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            loaded: self.loaded,
            kept: self.kept,
            emitted_points: self.emitted_points,
            emitted_series: self.emitted_series,
        }
    }
}
