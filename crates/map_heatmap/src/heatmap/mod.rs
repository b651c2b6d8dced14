//! Heatmap assembly: samples + grid + IDW into a feature collection.
//!
//! [`HeatmapAssembler`] runs the whole pipeline for a [`HeatmapConfig`]. The standard
//! 50x50 / 500-sample surface is memoized process-wide in [`cache`]; everything else
//! recomputes on every call.
use tracing::{debug, enabled, Level};

use crate::error::{Error, Result};
use crate::grid::GridSpec;
use crate::interpolation::IdwInterpolator;
use crate::random::SeededRandom;
use crate::sampling::ClusterSampler;

pub mod cache;
pub mod config;
pub mod events;
pub mod geojson;

pub use cache::{default_heatmap, default_heatmap_computations, INTERPOLATED_HEATMAP};
pub use config::{HeatmapConfig, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
pub use events::{EventSink, FnSink, HeatmapEvent, HeatmapEventKind, VecSink};
pub use geojson::{Feature, FeatureCollection, PointGeometry, WeightProperties};

/// Runs the sampling → grid → interpolation pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct HeatmapAssembler {
    config: HeatmapConfig,
}

impl HeatmapAssembler {
    pub fn try_new(config: HeatmapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    /// Runs the pipeline, returning one feature per grid cell in row-major order.
    pub fn run(&self) -> Result<FeatureCollection> {
        self.run_with_events(&mut ())
    }

    pub fn run_with_events(&self, sink: &mut dyn EventSink) -> Result<FeatureCollection> {
        let config = &self.config;
        if sink.wants(HeatmapEventKind::RunStarted) {
            sink.send(HeatmapEvent::RunStarted {
                config: config.clone(),
            });
        }
        if enabled!(Level::DEBUG) && config.is_default_pipeline() {
            debug!("Recomputing the standard heatmap; default_heatmap() returns a cached copy.");
        }

        let sample_config = &config.samples;
        let clustered: usize = sample_config
            .clusters
            .iter()
            .map(|c| c.sample_count(sample_config.count))
            .sum();
        // The sampler logs the truncation itself; surface it to the sink as well.
        if clustered > sample_config.count && sink.wants(HeatmapEventKind::Warning) {
            sink.send(HeatmapEvent::Warning {
                context: "samples".into(),
                message: format!(
                    "cluster shares request {clustered} samples out of {}; output truncated",
                    sample_config.count
                ),
            });
        }

        let sampler = ClusterSampler::try_new(sample_config.bounds, sample_config.clusters.clone())?;
        let mut rng = SeededRandom::new(sample_config.seed);
        let samples = sampler.generate(sample_config.count, &mut rng);
        if sink.wants(HeatmapEventKind::SamplesGenerated) {
            sink.send(HeatmapEvent::SamplesGenerated {
                count: samples.len(),
                clustered: clustered.min(samples.len()),
            });
        }

        let grid: GridSpec = config.grid_spec();
        if sink.wants(HeatmapEventKind::GridGenerated) {
            sink.send(HeatmapEvent::GridGenerated {
                rows: grid.rows,
                cols: grid.cols,
            });
        }

        let idw = IdwInterpolator::try_new(&samples, config.interpolation)?;
        let emit_cells = sink.wants(HeatmapEventKind::CellInterpolated);
        let mut features = Vec::with_capacity(grid.cell_count());
        for cell in grid.cells() {
            let raw = idw.value_at(cell.lng, cell.lat);
            if !raw.is_finite() {
                return Err(Error::NonFinite {
                    context: format!("interpolation at cell ({}, {})", cell.row, cell.col),
                });
            }
            let weight = raw.clamp(0.0, 1.0);
            if emit_cells {
                sink.send(HeatmapEvent::CellInterpolated {
                    row: cell.row,
                    col: cell.col,
                    lng: cell.lng,
                    lat: cell.lat,
                    weight,
                });
            }
            features.push(Feature::new(cell.lng, cell.lat, weight));
        }

        let collection = FeatureCollection::new(features);
        debug!(
            "Assembled heatmap: {}x{} cells from {} samples.",
            grid.rows,
            grid.cols,
            samples.len()
        );
        if sink.wants(HeatmapEventKind::RunFinished) {
            sink.send(HeatmapEvent::RunFinished {
                feature_count: collection.len(),
                weight_range: collection.weight_range(),
            });
        }
        Ok(collection)
    }
}

/// Heatmap over the Korean region with the built-in clusters; always recomputes.
pub fn generate_interpolated_heatmap(
    grid_rows: usize,
    grid_cols: usize,
    sample_count: usize,
) -> Result<FeatureCollection> {
    generate_interpolated_heatmap_with(&HeatmapConfig::new(grid_rows, grid_cols, sample_count))
}

/// Heatmap for an explicit configuration; always recomputes.
pub fn generate_interpolated_heatmap_with(config: &HeatmapConfig) -> Result<FeatureCollection> {
    HeatmapAssembler::try_new(config.clone())?.run()
}
