use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use map_heatmap::heatmap::FeatureCollection;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();
}

/// Write a feature collection as pretty-printed GeoJSON.
pub fn write_geojson(collection: &FeatureCollection, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, collection)?;
    info!("Wrote {} features to {}.", collection.len(), path.display());
    Ok(())
}
