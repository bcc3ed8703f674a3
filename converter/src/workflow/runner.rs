use crate::workflow::config::{TrackConfig, TrailConfig};
use anyhow::Context;
use std::path::PathBuf;
use trailcore::ingest::{load_plain, load_vectors};
use trailcore::kml::{write_document, LineDocument, TrackDocument};
use trailcore::processing::{AffineProjection, Decimator, SphericalProjection};
use trailcore::telemetry::{LogManager, MetricsSnapshot, PipelineMetrics};
use trailcore::{ProjectedSeries, Projection, Series};

#[derive(Debug)]
pub struct WorkflowResult {
    pub output: PathBuf,
    pub metrics: MetricsSnapshot,
}

/// Load, decimate, offset-project and emit a single planar trail.
#[derive(Clone)]
pub struct TrailRunner {
    config: TrailConfig,
}

impl TrailRunner {
    pub fn new(config: TrailConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let logger = LogManager::for_stage("trail");
        let mut metrics = PipelineMetrics::new();

        let samples = load_plain(&self.config.input, self.config.decimation.stride)
            .with_context(|| format!("loading trail {}", self.config.input.display()))?;
        metrics.record_loaded(samples.len());

        let kept = Decimator::new(self.config.decimation).prune(&samples);
        metrics.record_kept(kept.len());

        let points = AffineProjection::new(self.config.affine).project_all(&kept);
        let document = LineDocument::new(&self.config.style, &points).to_string();
        write_document(&self.config.output, &document)
            .with_context(|| format!("writing {}", self.config.output.display()))?;
        metrics.record_series(points.len());

        logger.record(&format!(
            "wrote {} points to {}",
            points.len(),
            self.config.output.display()
        ));
        Ok(WorkflowResult {
            output: self.config.output.clone(),
            metrics: metrics.snapshot(),
        })
    }
}

/// Load every vector table, project it spherically and emit one track each.
#[derive(Clone)]
pub struct TrackRunner {
    config: TrackConfig,
}

impl TrackRunner {
    pub fn new(config: TrackConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let logger = LogManager::for_stage("tracks");
        let mut metrics = PipelineMetrics::new();
        let projection = SphericalProjection::new(self.config.scale);

        let mut projected = Vec::with_capacity(self.config.inputs.len());
        for (input, name) in self.config.entries() {
            let samples = load_vectors(input)
                .with_context(|| format!("loading series {:?} from {}", name, input.display()))?;
            metrics.record_loaded(samples.len());
            metrics.record_kept(samples.len());

            let series = Series::new(name.as_str(), samples);
            logger.detail(&format!("projecting {} ({} samples)", series.name, series.len()));
            projected.push(ProjectedSeries::from_series(&series, &projection));
        }

        let document = TrackDocument::new(&self.config.scale, &projected).to_string();
        write_document(&self.config.output, &document)
            .with_context(|| format!("writing {}", self.config.output.display()))?;
        for series in &projected {
            metrics.record_series(series.len());
        }

        logger.record(&format!(
            "wrote {} tracks to {}",
            projected.len(),
            self.config.output.display()
        ));
        Ok(WorkflowResult {
            output: self.config.output.clone(),
            metrics: metrics.snapshot(),
        })
    }
}
