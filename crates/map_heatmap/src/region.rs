//! Rectangular geographic region used by sampling and grid generation.
//!
//! [`RegionBounds`] is plain configuration data: it is passed explicitly to the
//! generators rather than read from an ambient constant, so alternative regions can be
//! swapped in for tests and custom heatmaps.
use glam::DVec2;

use crate::error::{Error, Result};

/// Axis-aligned longitude/latitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionBounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl RegionBounds {
    /// South Korean mainland plus Jeju, as a rough rectangle.
    pub const KOREA: RegionBounds = RegionBounds {
        min_lng: 124.5,
        max_lng: 132.0,
        min_lat: 33.0,
        max_lat: 38.5,
    };

    /// Create validated bounds.
    pub fn new(min_lng: f64, max_lng: f64, min_lat: f64, max_lat: f64) -> Result<Self> {
        let bounds = Self {
            min_lng,
            max_lng,
            min_lat,
            max_lat,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks `min < max` on both axes and that all edges are finite.
    pub fn validate(&self) -> Result<()> {
        let edges = [self.min_lng, self.max_lng, self.min_lat, self.max_lat];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig(
                "region bounds must be finite".into(),
            ));
        }
        if self.min_lng >= self.max_lng {
            return Err(Error::InvalidConfig(format!(
                "min_lng ({}) must be < max_lng ({})",
                self.min_lng, self.max_lng
            )));
        }
        if self.min_lat >= self.max_lat {
            return Err(Error::InvalidConfig(format!(
                "min_lat ({}) must be < max_lat ({})",
                self.min_lat, self.max_lat
            )));
        }
        Ok(())
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn min(&self) -> DVec2 {
        DVec2::new(self.min_lng, self.min_lat)
    }

    pub fn max(&self) -> DVec2 {
        DVec2::new(self.max_lng, self.max_lat)
    }

    /// Inclusive containment test.
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        (self.min_lng..=self.max_lng).contains(&lng) && (self.min_lat..=self.max_lat).contains(&lat)
    }

    /// Clamp a position into the rectangle (edges inclusive).
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        p.clamp(self.min(), self.max())
    }

    /// Map unit coordinates `(u, v)` in `[0, 1)` onto the rectangle.
    pub fn lerp(&self, u: f64, v: f64) -> DVec2 {
        DVec2::new(
            self.min_lng + u * self.width(),
            self.min_lat + v * self.height(),
        )
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self::KOREA
    }
}
