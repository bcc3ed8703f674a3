use log::{debug, info};

/// Stage-scoped logger; every message is tagged with the owning stage.
pub struct LogManager {
    stage: &'static str,
}

impl LogManager {
    pub fn for_stage(stage: &'static str) -> Self {
        Self { stage }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.stage, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.stage, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::for_stage("pipeline")
    }
}
