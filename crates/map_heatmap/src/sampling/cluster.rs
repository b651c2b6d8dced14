//! Density clusters: the static policy input to sample generation.
use glam::DVec2;

use crate::error::{Error, Result};

/// A simulated population center that attracts a share of the samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityCluster {
    /// Display name.
    pub name: String,
    /// Center as `(lng, lat)`.
    pub center: DVec2,
    /// Peak value at the center, in `[0, 1]`.
    pub weight: f64,
    /// Spatial radius in degrees; values decay to 0 at this distance.
    pub radius: f64,
    /// Fraction of the requested sample count placed around this cluster, in `[0, 1]`.
    pub count_share: f64,
}

impl DensityCluster {
    pub fn new(
        name: impl Into<String>,
        center: DVec2,
        weight: f64,
        radius: f64,
        count_share: f64,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            weight,
            radius,
            count_share,
        }
    }

    /// Number of samples this cluster receives out of `total`.
    pub fn sample_count(&self, total: usize) -> usize {
        (total as f64 * self.count_share).floor() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if !self.center.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "cluster '{}' center must be finite",
                self.name
            )));
        }
        if !(0.0..=1.0).contains(&self.weight) {
            return Err(Error::InvalidConfig(format!(
                "cluster '{}' weight must be in [0, 1], got {}",
                self.name, self.weight
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "cluster '{}' radius must be > 0, got {}",
                self.name, self.radius
            )));
        }
        if !(0.0..=1.0).contains(&self.count_share) {
            return Err(Error::InvalidConfig(format!(
                "cluster '{}' count_share must be in [0, 1], got {}",
                self.name, self.count_share
            )));
        }
        Ok(())
    }
}

/// Major South Korean cities, densest first. Shares sum to 0.94; the rest is uniform.
pub fn korea_city_clusters() -> Vec<DensityCluster> {
    vec![
        DensityCluster::new("Seoul", DVec2::new(126.978, 37.5665), 1.0, 0.15, 0.15),
        DensityCluster::new("Seoul-Gangnam", DVec2::new(127.027, 37.498), 0.95, 0.1, 0.1),
        DensityCluster::new("Seoul-Gangbuk", DVec2::new(126.93, 37.52), 0.85, 0.08, 0.05),
        DensityCluster::new("Busan", DVec2::new(129.0756, 35.1796), 0.8, 0.12, 0.1),
        DensityCluster::new("Busan-Haeundae", DVec2::new(129.12, 35.15), 0.7, 0.08, 0.05),
        DensityCluster::new("Incheon", DVec2::new(126.7052, 37.4563), 0.75, 0.1, 0.1),
        DensityCluster::new("Daegu", DVec2::new(128.6014, 35.8714), 0.7, 0.1, 0.08),
        DensityCluster::new("Daejeon", DVec2::new(127.3845, 36.3504), 0.65, 0.08, 0.07),
        DensityCluster::new("Gwangju", DVec2::new(126.8526, 35.1595), 0.6, 0.08, 0.06),
        DensityCluster::new("Ulsan", DVec2::new(129.3114, 35.5384), 0.55, 0.08, 0.04),
        DensityCluster::new("Suwon", DVec2::new(127.0286, 37.2636), 0.5, 0.06, 0.04),
        DensityCluster::new("Changwon", DVec2::new(128.6811, 35.2281), 0.45, 0.06, 0.03),
        DensityCluster::new("Jeonju", DVec2::new(127.148, 35.8242), 0.4, 0.06, 0.03),
        DensityCluster::new("Cheongju", DVec2::new(127.489, 36.6424), 0.35, 0.05, 0.02),
        DensityCluster::new("Jeju", DVec2::new(126.5312, 33.4996), 0.5, 0.1, 0.02),
    ]
}
