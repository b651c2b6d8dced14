use map_heatmap::prelude::*;
use map_heatmap_examples::{init_tracing, render_samples_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SampleConfig::new(2000);
    let samples = generate_sample_points_with(&config)?;

    for cluster in &config.clusters {
        info!(
            "{:<16} share {:>4.2} -> {} samples",
            cluster.name,
            cluster.count_share,
            cluster.sample_count(config.count)
        );
    }

    let rc = RenderConfig::new((1100, 800), config.bounds).with_background([8, 8, 12]);
    render_samples_to_png(&samples, &rc, 2, "samples-clusters.png")?;

    Ok(())
}
