//! Synthetic sample generation.
//!
//! Samples are weighted points placed around configured [`DensityCluster`]s with a
//! uniform background remainder. All draws come from a single [`crate::random::SeededRandom`],
//! so the output is a pure function of the [`SampleConfig`].
use glam::DVec2;

pub mod cluster;
pub mod clustered;

pub use cluster::{korea_city_clusters, DensityCluster};
pub use clustered::{
    generate_sample_points, generate_sample_points_with, ClusterSampler, SampleConfig,
    DEFAULT_SAMPLE_COUNT,
};

/// Decimal places kept for sample longitude/latitude.
pub const POSITION_DECIMALS: i32 = 4;
/// Decimal places kept for sample values.
pub const VALUE_DECIMALS: i32 = 2;

/// A weighted sample location. `value` lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint {
    pub lng: f64,
    pub lat: f64,
    pub value: f64,
}

impl SamplePoint {
    pub fn new(lng: f64, lat: f64, value: f64) -> Self {
        Self { lng, lat, value }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Planar distance in degrees to `(lng, lat)`.
    #[inline]
    pub fn distance_to(&self, lng: f64, lat: f64) -> f64 {
        crate::interpolation::calculate_distance(lng, lat, self.lng, self.lat)
    }

    /// Round position and value to the fixed precision used for reproducible output.
    pub(crate) fn rounded(position: DVec2, value: f64) -> Self {
        Self {
            lng: round_to(position.x, POSITION_DECIMALS),
            lat: round_to(position.y, POSITION_DECIMALS),
            value: round_to(value, VALUE_DECIMALS),
        }
    }
}

/// Round `value` to `decimals` places (half away from zero).
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
