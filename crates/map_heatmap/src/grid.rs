//! Regular lattice of cell centers over a [`RegionBounds`].
//!
//! Cells are enumerated row-major (outer loop over rows from the southern edge, inner loop
//! over columns from the western edge). The heatmap output order depends on this.
use glam::DVec2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::region::RegionBounds;

/// Center of one lattice cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub lng: f64,
    pub lat: f64,
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }
}

/// Dimensions of a lattice over a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub bounds: RegionBounds,
}

impl GridSpec {
    pub fn try_new(rows: usize, cols: usize, bounds: RegionBounds) -> Result<Self> {
        let spec = Self { rows, cols, bounds };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(Error::InvalidConfig("rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(Error::InvalidConfig("cols must be > 0".into()));
        }
        self.bounds.validate()
    }

    pub fn cell_width(&self) -> f64 {
        self.bounds.width() / self.cols as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.bounds.height() / self.rows as f64
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Center of the cell at `(row, col)`.
    pub fn cell_center(&self, row: usize, col: usize) -> DVec2 {
        let w = self.cell_width();
        let h = self.cell_height();
        DVec2::new(
            self.bounds.min_lng + w * col as f64 + w / 2.0,
            self.bounds.min_lat + h * row as f64 + h / 2.0,
        )
    }

    /// Iterate cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| {
                let c = self.cell_center(row, col);
                GridCell {
                    lng: c.x,
                    lat: c.y,
                    row,
                    col,
                }
            })
        })
    }
}

/// Grid over the default (Korean) region.
pub fn generate_grid(rows: usize, cols: usize) -> Result<Vec<GridCell>> {
    generate_grid_in(&RegionBounds::KOREA, rows, cols)
}

/// Grid over explicit bounds.
pub fn generate_grid_in(bounds: &RegionBounds, rows: usize, cols: usize) -> Result<Vec<GridCell>> {
    let spec = GridSpec::try_new(rows, cols, *bounds)?;
    let cells: Vec<GridCell> = spec.cells().collect();
    debug!("Generated {}x{} grid ({} cells).", rows, cols, cells.len());
    Ok(cells)
}
