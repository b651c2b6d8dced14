#![forbid(unsafe_code)]

mod output;
mod rendering;

pub use output::{init_tracing, write_geojson};
pub use rendering::{
    draw_samples, heat_ramp, render_heatmap, render_heatmap_to_png, render_samples_to_png,
    RenderConfig,
};
