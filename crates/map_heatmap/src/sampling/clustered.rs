//! Cluster-weighted sample generation with a uniform background remainder.
use tracing::{debug, warn};

use crate::error::Result;
use crate::random::{SeededRandom, DEFAULT_SEED};
use crate::region::RegionBounds;
use crate::sampling::{korea_city_clusters, DensityCluster, SamplePoint};

/// Sample count used when none is given.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Children are spread with a standard deviation of this fraction of the cluster radius.
const CLUSTER_SIGMA_FACTOR: f64 = 0.4;
/// Multiplicative jitter applied to cluster values: `JITTER_BASE + u * JITTER_SPAN`.
const JITTER_BASE: f64 = 0.7;
const JITTER_SPAN: f64 = 0.3;
/// Background samples get a low but nonzero value in `[0.1, 0.4)`.
const BACKGROUND_BASE: f64 = 0.1;
const BACKGROUND_SPAN: f64 = 0.3;

/// Configuration for a full sample set.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleConfig {
    /// Total number of samples to produce.
    pub count: usize,
    /// Seed for the generator owned by this run.
    pub seed: u32,
    /// Region samples are clamped into.
    pub bounds: RegionBounds,
    /// Clusters processed in order.
    pub clusters: Vec<DensityCluster>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
            bounds: RegionBounds::KOREA,
            clusters: korea_city_clusters(),
        }
    }
}

impl SampleConfig {
    /// Default configuration with the given sample count.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the sample count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the region bounds.
    pub fn with_bounds(mut self, bounds: RegionBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the cluster table.
    pub fn with_clusters(mut self, clusters: Vec<DensityCluster>) -> Self {
        self.clusters = clusters;
        self
    }

    /// Validates bounds and every cluster.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        for cluster in &self.clusters {
            cluster.validate()?;
        }
        Ok(())
    }
}

/// Generates samples for a fixed region and cluster table from a caller-owned generator.
#[derive(Debug, Clone)]
pub struct ClusterSampler {
    bounds: RegionBounds,
    clusters: Vec<DensityCluster>,
}

impl ClusterSampler {
    pub fn try_new(bounds: RegionBounds, clusters: Vec<DensityCluster>) -> Result<Self> {
        bounds.validate()?;
        for cluster in &clusters {
            cluster.validate()?;
        }
        Ok(Self { bounds, clusters })
    }

    pub fn new(bounds: RegionBounds, clusters: Vec<DensityCluster>) -> Self {
        debug_assert!(bounds.validate().is_ok(), "region bounds must be valid");
        debug_assert!(
            clusters.iter().all(|c| c.validate().is_ok()),
            "all clusters must be valid"
        );
        Self { bounds, clusters }
    }

    pub fn bounds(&self) -> &RegionBounds {
        &self.bounds
    }

    pub fn clusters(&self) -> &[DensityCluster] {
        &self.clusters
    }

    /// Produce exactly `count` samples: clusters in order, then the uniform remainder.
    ///
    /// Draw order is fixed (two gaussians and one jitter per cluster sample, three uniforms
    /// per background sample), which makes the output reproducible for a given seed.
    pub fn generate(&self, count: usize, rng: &mut SeededRandom) -> Vec<SamplePoint> {
        let mut out = Vec::with_capacity(count);

        for cluster in &self.clusters {
            let cluster_count = cluster.sample_count(count);
            for _ in 0..cluster_count {
                out.push(self.cluster_sample(cluster, rng));
            }
        }

        let clustered = out.len();
        if clustered > count {
            warn!(
                "Cluster shares produced {} samples for a requested count of {}; truncating.",
                clustered, count
            );
            out.truncate(count);
        }

        let remaining = count.saturating_sub(clustered);
        for _ in 0..remaining {
            out.push(self.background_sample(rng));
        }

        debug!(
            "Generated {} samples ({} clustered, {} background).",
            out.len(),
            clustered.min(count),
            remaining
        );
        out
    }

    fn cluster_sample(&self, cluster: &DensityCluster, rng: &mut SeededRandom) -> SamplePoint {
        let sigma = cluster.radius * CLUSTER_SIGMA_FACTOR;
        let lng = rng.gaussian(cluster.center.x, sigma);
        let lat = rng.gaussian(cluster.center.y, sigma);
        let position = glam::DVec2::new(lng, lat);

        let distance = position.distance(cluster.center);
        let distance_factor = (1.0 - distance / cluster.radius).max(0.0);
        let jitter = JITTER_BASE + rng.next_f64() * JITTER_SPAN;
        let value = cluster.weight * distance_factor * jitter;

        self.place(position, value.clamp(0.0, 1.0))
    }

    fn background_sample(&self, rng: &mut SeededRandom) -> SamplePoint {
        let u = rng.next_f64();
        let v = rng.next_f64();
        let position = self.bounds.lerp(u, v);
        let value = BACKGROUND_BASE + rng.next_f64() * BACKGROUND_SPAN;
        self.place(position, value)
    }

    /// Clamp, round, then clamp again: rounding can step past bounds that are not on the
    /// four-decimal lattice.
    fn place(&self, position: glam::DVec2, value: f64) -> SamplePoint {
        let rounded = SamplePoint::rounded(self.bounds.clamp(position), value);
        let inside = self.bounds.clamp(rounded.position());
        SamplePoint {
            lng: inside.x,
            lat: inside.y,
            ..rounded
        }
    }
}

/// Samples over the Korean region with the built-in city clusters and default seed.
pub fn generate_sample_points(count: usize) -> Vec<SamplePoint> {
    let sampler = ClusterSampler::new(RegionBounds::KOREA, korea_city_clusters());
    let mut rng = SeededRandom::new(DEFAULT_SEED);
    sampler.generate(count, &mut rng)
}

/// Samples for an explicit configuration, using a fresh generator seeded from it.
pub fn generate_sample_points_with(config: &SampleConfig) -> Result<Vec<SamplePoint>> {
    let sampler = ClusterSampler::try_new(config.bounds, config.clusters.clone())?;
    let mut rng = SeededRandom::new(config.seed);
    Ok(sampler.generate(config.count, &mut rng))
}
