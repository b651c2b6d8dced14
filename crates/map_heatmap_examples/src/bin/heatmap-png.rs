use map_heatmap::prelude::*;
use map_heatmap_examples::{init_tracing, render_heatmap_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Finer grid and denser samples than the cached default.
    let config = HeatmapConfig::new(100, 100, 1000);
    let assembler = HeatmapAssembler::try_new(config.clone())?;

    // Skip per-cell events; keep the run summary.
    let mut sink = VecSink::without_cells();
    let heatmap = assembler.run_with_events(&mut sink)?;
    for event in sink.as_slice() {
        info!("{event:?}");
    }

    let samples = generate_sample_points_with(&config.samples)?;
    let rc = RenderConfig::new((1100, 800), *config.bounds());
    render_heatmap_to_png(
        &heatmap,
        &config.grid_spec(),
        Some(samples.as_slice()),
        &rc,
        "heatmap-100x100.png",
    )?;

    Ok(())
}
