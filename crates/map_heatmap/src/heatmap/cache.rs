//! Process-wide memoized default heatmap.
//!
//! [`INTERPOLATED_HEATMAP`] holds the standard 50x50 / 500-sample surface. It is computed on
//! first access under [`once_cell::sync::Lazy`], so concurrent first readers block until a
//! single computation finishes and never observe a partial result.
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use tracing::info;

use crate::heatmap::config::HeatmapConfig;
use crate::heatmap::geojson::FeatureCollection;
use crate::heatmap::HeatmapAssembler;

static DEFAULT_COMPUTATIONS: AtomicUsize = AtomicUsize::new(0);

/// The standard heatmap, computed at most once per process.
pub static INTERPOLATED_HEATMAP: Lazy<FeatureCollection> = Lazy::new(|| {
    DEFAULT_COMPUTATIONS.fetch_add(1, Ordering::SeqCst);
    let config = HeatmapConfig::default();
    let result = HeatmapAssembler::try_new(config).and_then(|assembler| assembler.run());
    match result {
        Ok(collection) => {
            info!(
                "Computed default heatmap ({} features).",
                collection.len()
            );
            collection
        }
        // The built-in configuration is valid; reaching this is a bug in the crate.
        Err(e) => panic!("default heatmap configuration failed: {e}"),
    }
});

/// Shared reference to the memoized default heatmap.
pub fn default_heatmap() -> &'static FeatureCollection {
    &INTERPOLATED_HEATMAP
}

/// How many times the default heatmap has been computed in this process (0 or 1).
pub fn default_heatmap_computations() -> usize {
    DEFAULT_COMPUTATIONS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_reads_share_one_value() {
        let a = default_heatmap();
        let b = default_heatmap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, &*INTERPOLATED_HEATMAP));
        assert_eq!(a.len(), 2500);
        assert_eq!(default_heatmap_computations(), 1);
    }
}
