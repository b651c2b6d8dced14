//! Configuration for a heatmap run.
use crate::error::Result;
use crate::grid::GridSpec;
use crate::interpolation::InterpolationOptions;
use crate::region::RegionBounds;
use crate::sampling::{DensityCluster, SampleConfig};

/// Default grid rows.
pub const DEFAULT_GRID_ROWS: usize = 50;
/// Default grid columns.
pub const DEFAULT_GRID_COLS: usize = 50;

/// Configuration for generating a heatmap.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapConfig {
    /// Grid rows (latitude subdivisions).
    pub rows: usize,
    /// Grid columns (longitude subdivisions).
    pub cols: usize,
    /// Sample generation settings; its bounds are also the grid bounds.
    pub samples: SampleConfig,
    /// IDW parameters applied to every cell.
    pub interpolation: InterpolationOptions,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            samples: SampleConfig::default(),
            interpolation: InterpolationOptions::default(),
        }
    }
}

impl HeatmapConfig {
    /// Creates a configuration with the given grid and sample count, defaults elsewhere.
    pub fn new(rows: usize, cols: usize, sample_count: usize) -> Self {
        Self {
            rows,
            cols,
            samples: SampleConfig::new(sample_count),
            ..Default::default()
        }
    }

    /// Sets the grid dimensions.
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the sample count.
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.samples.count = count;
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.samples.seed = seed;
        self
    }

    /// Sets the region for both sampling and the grid.
    pub fn with_bounds(mut self, bounds: RegionBounds) -> Self {
        self.samples.bounds = bounds;
        self
    }

    /// Replaces the cluster table.
    pub fn with_clusters(mut self, clusters: Vec<DensityCluster>) -> Self {
        self.samples.clusters = clusters;
        self
    }

    /// Sets the interpolation options.
    pub fn with_interpolation(mut self, interpolation: InterpolationOptions) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn bounds(&self) -> &RegionBounds {
        &self.samples.bounds
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            rows: self.rows,
            cols: self.cols,
            bounds: self.samples.bounds,
        }
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// A zero sample count is rejected here because IDW needs at least one sample.
    pub fn validate(&self) -> Result<()> {
        self.grid_spec().validate()?;
        self.samples.validate()?;
        if self.samples.count == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "sample count must be > 0".into(),
            ));
        }
        self.interpolation.validate()
    }

    /// True when this is the standard 50x50 / 500-sample configuration.
    pub(crate) fn is_default_pipeline(&self) -> bool {
        self.rows == DEFAULT_GRID_ROWS
            && self.cols == DEFAULT_GRID_COLS
            && self.interpolation == InterpolationOptions::default()
            && self.samples.count == crate::sampling::DEFAULT_SAMPLE_COUNT
            && self.samples.seed == crate::random::DEFAULT_SEED
            && self.samples.bounds == RegionBounds::KOREA
            && self.samples.clusters == crate::sampling::korea_city_clusters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_describe_standard_surface() {
        let config = HeatmapConfig::default();
        assert_eq!((config.rows, config.cols), (50, 50));
        assert_eq!(config.samples.count, 500);
        assert_eq!(config.interpolation.power, 2.0);
        assert!(config.interpolation.max_distance.is_none());
        assert!(config.validate().is_ok());
        assert!(config.is_default_pipeline());
    }

    #[test]
    fn builders_override_fields() {
        let config = HeatmapConfig::new(10, 20, 100)
            .with_seed(9)
            .with_interpolation(InterpolationOptions::default().with_power(3.0));
        assert_eq!(config.grid_spec().cell_count(), 200);
        assert_eq!(config.samples.seed, 9);
        assert!(!config.is_default_pipeline());
        assert!(!HeatmapConfig::default().with_grid(50, 49).is_default_pipeline());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(matches!(
            HeatmapConfig::new(0, 10, 10).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(HeatmapConfig::new(10, 0, 10).validate().is_err());
        assert!(HeatmapConfig::new(10, 10, 0).validate().is_err());
        assert!(HeatmapConfig::default()
            .with_interpolation(InterpolationOptions::default().with_power(0.0))
            .validate()
            .is_err());
    }
}
