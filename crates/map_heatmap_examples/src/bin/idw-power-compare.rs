use map_heatmap::prelude::*;
use map_heatmap_examples::{init_tracing, render_heatmap_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same samples, different IDW exponents and cutoffs.
    let variants = [
        ("idw-power-1.png", InterpolationOptions::default().with_power(1.0)),
        ("idw-power-2.png", InterpolationOptions::default()),
        ("idw-power-4.png", InterpolationOptions::default().with_power(4.0)),
        (
            "idw-power-2-max-0.3.png",
            InterpolationOptions::default().with_max_distance(0.3),
        ),
    ];

    for (out, options) in variants {
        let config = HeatmapConfig::new(80, 80, 500).with_interpolation(options);
        let heatmap = generate_interpolated_heatmap_with(&config)?;
        let rc = RenderConfig::new((825, 600), *config.bounds());
        render_heatmap_to_png(&heatmap, &config.grid_spec(), None, &rc, out)?;
    }

    Ok(())
}
