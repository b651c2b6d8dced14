use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};
use map_heatmap::grid::GridSpec;
use map_heatmap::heatmap::FeatureCollection;
use map_heatmap::region::RegionBounds;
use map_heatmap::sampling::SamplePoint;
use tracing::info;

/// Image size, mapped region, and background colour for rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub bounds: RegionBounds,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), bounds: RegionBounds) -> Self {
        Self {
            image_size,
            bounds,
            background: [16, 16, 24],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Pixel center to `(lng, lat)`; image row 0 is the northern edge.
    fn pixel_to_world(&self, x: u32, y: u32) -> DVec2 {
        let (w, h) = self.image_size;
        let u = (x as f64 + 0.5) / w as f64;
        let v = (y as f64 + 0.5) / h as f64;
        DVec2::new(
            self.bounds.min_lng + u * self.bounds.width(),
            self.bounds.max_lat - v * self.bounds.height(),
        )
    }

    fn world_to_pixel(&self, p: DVec2) -> (i64, i64) {
        let (w, h) = self.image_size;
        let u = (p.x - self.bounds.min_lng) / self.bounds.width();
        let v = (self.bounds.max_lat - p.y) / self.bounds.height();
        ((u * w as f64).floor() as i64, (v * h as f64).floor() as i64)
    }
}

const RAMP: [(f64, [u8; 3]); 5] = [
    (0.0, [16, 16, 24]),
    (0.2, [33, 102, 172]),
    (0.4, [103, 169, 207]),
    (0.7, [253, 219, 119]),
    (1.0, [178, 24, 43]),
];

/// Colour for a weight in `[0, 1]`, interpolating between fixed stops.
pub fn heat_ramp(weight: f64) -> [u8; 3] {
    let t = weight.clamp(0.0, 1.0);
    for pair in RAMP.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return std::array::from_fn(|i| {
                (c0[i] as f64 + (c1[i] as f64 - c0[i] as f64) * f).round() as u8
            });
        }
    }
    RAMP[RAMP.len() - 1].1
}

/// Paint each pixel with the weight of the grid cell it falls into.
pub fn render_heatmap(collection: &FeatureCollection, grid: &GridSpec, rc: &RenderConfig) -> RgbImage {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));
    if collection.len() != grid.cell_count() {
        return img;
    }

    let cell_w = grid.cell_width();
    let cell_h = grid.cell_height();
    for y in 0..h {
        for x in 0..w {
            let p = rc.pixel_to_world(x, y);
            let col = ((p.x - grid.bounds.min_lng) / cell_w).floor();
            let row = ((p.y - grid.bounds.min_lat) / cell_h).floor();
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            if row >= grid.rows || col >= grid.cols {
                continue;
            }
            let weight = collection.features[row * grid.cols + col].weight();
            img.put_pixel(x, y, Rgb(heat_ramp(weight)));
        }
    }
    img
}

/// Draw filled dots for samples, coloured by value.
pub fn draw_samples(img: &mut RgbImage, samples: &[SamplePoint], rc: &RenderConfig, radius: i64) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for s in samples {
        let (cx, cy) = rc.world_to_pixel(s.position());
        let color = Rgb(heat_ramp(s.value));
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x >= 0 && y >= 0 && x < w && y < h {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

pub fn render_heatmap_to_png(
    collection: &FeatureCollection,
    grid: &GridSpec,
    samples: Option<&[SamplePoint]>,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = render_heatmap(collection, grid, rc);
    if let Some(samples) = samples {
        draw_samples(&mut img, samples, rc, 1);
    }
    img.save(path.as_ref())?;
    info!("Wrote {}.", path.as_ref().display());
    Ok(())
}

pub fn render_samples_to_png(
    samples: &[SamplePoint],
    rc: &RenderConfig,
    radius: i64,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));
    draw_samples(&mut img, samples, rc, radius);
    img.save(path.as_ref())?;
    info!("Wrote {} samples to {}.", samples.len(), path.as_ref().display());
    Ok(())
}
