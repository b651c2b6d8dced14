use map_heatmap::prelude::*;
use map_heatmap_examples::{init_tracing, write_geojson};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The standard 50x50 surface from 500 samples, computed once per process.
    let heatmap = default_heatmap();
    if let Some((lo, hi)) = heatmap.weight_range() {
        info!("Weight range: {lo:.3} .. {hi:.3}.");
    }

    // A second read is free; the counter stays at 1.
    let again = default_heatmap();
    info!(
        "Cached reads share one value: {} (computations: {}).",
        std::ptr::eq(heatmap, again),
        default_heatmap_computations()
    );

    write_geojson(heatmap, "interpolated-heatmap.geojson")?;

    Ok(())
}
