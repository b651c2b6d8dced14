#![forbid(unsafe_code)]
//! map_heatmap: synthetic density heatmaps from seeded cluster sampling and IDW interpolation.
//!
//! Modules:
//! - random: seeded LCG with Box–Muller gaussians
//! - sampling: cluster-weighted sample points with a uniform background remainder
//! - grid: row-major lattice of cell centers over a region
//! - interpolation: inverse distance weighting
//! - heatmap: pipeline assembly, GeoJSON-shaped output, events, and the memoized default
//!
//! For a quick start, see [`heatmap::default_heatmap`] and
//! [`heatmap::generate_interpolated_heatmap`].
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod interpolation;
pub mod random;
pub mod region;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use map_heatmap::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{generate_grid, generate_grid_in, GridCell, GridSpec};
    pub use crate::heatmap::{
        default_heatmap, default_heatmap_computations, generate_interpolated_heatmap,
        generate_interpolated_heatmap_with, EventSink, Feature, FeatureCollection, FnSink,
        HeatmapAssembler, HeatmapConfig, HeatmapEvent, HeatmapEventKind, PointGeometry, VecSink,
        WeightProperties, INTERPOLATED_HEATMAP,
    };
    pub use crate::interpolation::{
        calculate_distance, interpolate_idw, nearest_sample, IdwInterpolator,
        InterpolationOptions,
    };
    pub use crate::random::{SeededRandom, DEFAULT_SEED};
    pub use crate::region::RegionBounds;
    pub use crate::sampling::{
        generate_sample_points, generate_sample_points_with, korea_city_clusters,
        ClusterSampler, DensityCluster, SampleConfig, SamplePoint,
    };
}
