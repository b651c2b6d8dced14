//! Inverse Distance Weighting over planar longitude/latitude coordinates.
//!
//! Distances are Euclidean in degrees, not great-circle. Three numerically special paths are
//! explicit branches with defined results:
//! - a single sample returns its value;
//! - a sample coincident with the target returns its value (first match wins);
//! - if `max_distance` excludes every sample, the nearest sample's value is returned.
use crate::error::{Error, Result};
use crate::sampling::SamplePoint;

/// Default IDW exponent.
pub const DEFAULT_POWER: f64 = 2.0;

/// Per-call interpolation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolationOptions {
    /// Distance exponent; larger values favour near samples. Must be finite and > 0.
    pub power: f64,
    /// Samples farther than this are ignored entirely.
    pub max_distance: Option<f64>,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self {
            power: DEFAULT_POWER,
            max_distance: None,
        }
    }
}

impl InterpolationOptions {
    /// Sets the distance exponent.
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Sets the cutoff distance in degrees.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.power.is_finite() && self.power > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "power must be finite and > 0, got {}",
                self.power
            )));
        }
        if let Some(d) = self.max_distance {
            if d.is_nan() || d < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "max_distance must be >= 0, got {d}"
                )));
            }
        }
        Ok(())
    }
}

/// Planar Euclidean distance between two `(lng, lat)` points, in degrees.
#[inline]
pub fn calculate_distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let d_lng = lng2 - lng1;
    let d_lat = lat2 - lat1;
    (d_lng * d_lng + d_lat * d_lat).sqrt()
}

/// Closest sample to `(lng, lat)`; the first one wins on ties.
pub fn nearest_sample(lng: f64, lat: f64, samples: &[SamplePoint]) -> Option<&SamplePoint> {
    samples
        .iter()
        .map(|s| (s, s.distance_to(lng, lat)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(s, _)| s)
}

/// IDW estimate at `(lng, lat)`.
///
/// Fails with [`Error::EmptySamples`] for an empty slice, [`Error::InvalidConfig`] for
/// invalid options, and [`Error::NonFinite`] if a sample carries a non-finite value.
pub fn interpolate_idw(
    lng: f64,
    lat: f64,
    samples: &[SamplePoint],
    options: &InterpolationOptions,
) -> Result<f64> {
    let value = IdwInterpolator::try_new(samples, *options)?.value_at(lng, lat);
    if !value.is_finite() {
        return Err(Error::NonFinite {
            context: format!("IDW estimate at ({lng}, {lat})"),
        });
    }
    Ok(value)
}

/// IDW bound to a validated sample set, for evaluating many targets.
#[derive(Debug, Clone, Copy)]
pub struct IdwInterpolator<'a> {
    samples: &'a [SamplePoint],
    options: InterpolationOptions,
}

impl<'a> IdwInterpolator<'a> {
    pub fn try_new(samples: &'a [SamplePoint], options: InterpolationOptions) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptySamples);
        }
        options.validate()?;
        Ok(Self { samples, options })
    }

    pub fn samples(&self) -> &'a [SamplePoint] {
        self.samples
    }

    pub fn options(&self) -> &InterpolationOptions {
        &self.options
    }

    /// Interpolated value at `(lng, lat)`.
    ///
    /// Weights are taken relative to the nearest included sample, `(d_min / d)^power`, so they
    /// lie in `(0, 1]` and their sum cannot overflow however close the samples are. The estimate
    /// is accumulated as an offset from the nearest sample's value, which reproduces a constant
    /// field exactly.
    pub fn value_at(&self, lng: f64, lat: f64) -> f64 {
        if let [only] = self.samples {
            return only.value;
        }

        let mut nearest: Option<(&SamplePoint, f64)> = None;
        for sample in self.samples {
            let distance = sample.distance_to(lng, lat);
            if distance == 0.0 {
                return sample.value;
            }
            if self.options.max_distance.is_some_and(|max| distance > max) {
                continue;
            }
            if nearest.map_or(true, |(_, d)| distance < d) {
                nearest = Some((sample, distance));
            }
        }

        let Some((base, d_min)) = nearest else {
            return nearest_sample(lng, lat, self.samples)
                .map(|s| s.value)
                .unwrap_or_default();
        };

        let mut weight_sum = 0.0;
        let mut offset_sum = 0.0;
        for sample in self.samples {
            let distance = sample.distance_to(lng, lat);
            if self.options.max_distance.is_some_and(|max| distance > max) {
                continue;
            }
            let weight = (d_min / distance).powf(self.options.power);
            weight_sum += weight;
            offset_sum += weight * (sample.value - base.value);
        }

        base.value + offset_sum / weight_sum
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;

    fn rand01(rng: &mut StdRng) -> f64 {
        rng.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    fn random_samples(rng: &mut StdRng, n: usize) -> Vec<SamplePoint> {
        (0..n)
            .map(|_| {
                SamplePoint::new(
                    124.5 + rand01(rng) * 7.5,
                    33.0 + rand01(rng) * 5.5,
                    rand01(rng),
                )
            })
            .collect()
    }

    #[test]
    fn equidistant_samples_average() {
        let samples = [
            SamplePoint::new(126.0, 37.0, 1.0),
            SamplePoint::new(128.0, 37.0, 0.0),
        ];
        let v = interpolate_idw(127.0, 37.0, &samples, &InterpolationOptions::default()).unwrap();
        assert_eq!(v, 0.5);
    }

    #[test]
    fn single_sample_returns_its_value() {
        let samples = [SamplePoint::new(126.0, 37.0, 0.42)];
        for (lng, lat) in [(0.0, 0.0), (126.0, 37.0), (-180.0, 90.0)] {
            let v = interpolate_idw(lng, lat, &samples, &InterpolationOptions::default()).unwrap();
            assert_eq!(v, 0.42);
        }
        // Even when the cutoff would exclude it.
        let opts = InterpolationOptions::default().with_max_distance(0.001);
        assert_eq!(interpolate_idw(0.0, 0.0, &samples, &opts).unwrap(), 0.42);
    }

    #[test]
    fn exact_match_short_circuits() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut samples = random_samples(&mut rng, 50);
        samples.push(SamplePoint::new(127.5, 36.25, 0.77));
        samples.push(SamplePoint::new(127.5, 36.25, 0.11));
        let v = interpolate_idw(127.5, 36.25, &samples, &InterpolationOptions::default()).unwrap();
        assert_eq!(v, 0.77);
    }

    #[test]
    fn constant_field_is_reproduced() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples: Vec<SamplePoint> = random_samples(&mut rng, 40)
            .into_iter()
            .map(|s| SamplePoint::new(s.lng, s.lat, 0.5))
            .collect();
        for _ in 0..100 {
            let lng = 124.5 + rand01(&mut rng) * 7.5;
            let lat = 33.0 + rand01(&mut rng) * 5.5;
            let v = interpolate_idw(lng, lat, &samples, &InterpolationOptions::default()).unwrap();
            assert_eq!(v, 0.5);
        }

        for value in [0.1, 0.3, 0.7, 0.9] {
            let field: Vec<SamplePoint> = samples
                .iter()
                .map(|s| SamplePoint::new(s.lng, s.lat, value))
                .collect();
            for _ in 0..100 {
                let lng = 124.5 + rand01(&mut rng) * 7.5;
                let lat = 33.0 + rand01(&mut rng) * 5.5;
                let v = interpolate_idw(lng, lat, &field, &InterpolationOptions::default()).unwrap();
                assert_eq!(v, value);
            }
        }
    }

    #[test]
    fn constant_field_over_default_samples_is_exact() {
        let positions = crate::sampling::generate_sample_points(500);
        let grid = crate::grid::generate_grid(20, 20).unwrap();
        for value in [0.3, 0.7] {
            let field: Vec<SamplePoint> = positions
                .iter()
                .map(|s| SamplePoint::new(s.lng, s.lat, value))
                .collect();
            let idw = IdwInterpolator::try_new(&field, InterpolationOptions::default()).unwrap();
            for cell in &grid {
                assert_eq!(idw.value_at(cell.lng, cell.lat), value, "{cell:?}");
            }
        }
    }

    #[test]
    fn near_coincident_samples_stay_finite() {
        // Each weight 1/d^2 alone would be close to f64::MAX; their plain sum overflows.
        let d = 1e-154;
        let samples = [
            SamplePoint::new(d, 0.0, 0.2),
            SamplePoint::new(0.0, d, 0.4),
            SamplePoint::new(-d, 0.0, 0.9),
            SamplePoint::new(5.0, 5.0, 0.0),
        ];
        let v = interpolate_idw(0.0, 0.0, &samples, &InterpolationOptions::default()).unwrap();
        assert!((v - 0.5).abs() < 1e-12, "{v}");

        // 1/d^2 is infinite here.
        let d = 1e-160;
        let samples = [SamplePoint::new(d, 0.0, 0.2), SamplePoint::new(0.0, d, 0.6)];
        let v = interpolate_idw(0.0, 0.0, &samples, &InterpolationOptions::default()).unwrap();
        assert!((v - 0.4).abs() < 1e-12, "{v}");
    }

    #[test]
    fn non_finite_sample_value_is_an_error() {
        let samples = [
            SamplePoint::new(0.0, 0.0, f64::NAN),
            SamplePoint::new(1.0, 0.0, 0.5),
        ];
        assert!(matches!(
            interpolate_idw(0.5, 0.0, &samples, &InterpolationOptions::default()),
            Err(Error::NonFinite { .. })
        ));
    }

    #[test]
    fn result_stays_within_sample_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = random_samples(&mut rng, 100);
        let lo = samples.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
        let hi = samples.iter().map(|s| s.value).fold(f64::NEG_INFINITY, f64::max);
        for power in [0.5, 1.0, 2.0, 3.5] {
            let opts = InterpolationOptions::default().with_power(power);
            for _ in 0..50 {
                let lng = 124.5 + rand01(&mut rng) * 7.5;
                let lat = 33.0 + rand01(&mut rng) * 5.5;
                let v = interpolate_idw(lng, lat, &samples, &opts).unwrap();
                assert!(v >= lo - 1e-12 && v <= hi + 1e-12, "{v} outside [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn nearer_sample_dominates_with_higher_power() {
        let samples = [
            SamplePoint::new(0.0, 0.0, 1.0),
            SamplePoint::new(4.0, 0.0, 0.0),
        ];
        let low = interpolate_idw(1.0, 0.0, &samples, &InterpolationOptions::default().with_power(1.0))
            .unwrap();
        let high = interpolate_idw(1.0, 0.0, &samples, &InterpolationOptions::default().with_power(4.0))
            .unwrap();
        // power 1: weights 1 and 1/3 -> 0.75
        assert!((low - 0.75).abs() < 1e-12);
        assert!(high > low);
    }

    #[test]
    fn max_distance_excludes_far_samples() {
        let samples = [
            SamplePoint::new(0.0, 0.0, 1.0),
            SamplePoint::new(0.0, 1.0, 0.5),
            SamplePoint::new(10.0, 0.0, 0.0),
        ];
        let opts = InterpolationOptions::default().with_max_distance(2.0);
        let v = interpolate_idw(0.0, 0.5, &samples, &opts).unwrap();
        // The far sample would pull the value down if it contributed.
        assert!((v - 0.75).abs() < 1e-12);
    }

    #[test]
    fn all_excluded_falls_back_to_nearest() {
        let samples = [
            SamplePoint::new(5.0, 0.0, 0.2),
            SamplePoint::new(0.0, 3.0, 0.9),
            SamplePoint::new(-3.0, 0.0, 0.4),
        ];
        let opts = InterpolationOptions::default().with_max_distance(1.0);
        // (-3, 0) and (0, 3) tie at distance 3; the first in input order wins.
        assert_eq!(interpolate_idw(0.0, 0.0, &samples, &opts).unwrap(), 0.9);
        assert_eq!(interpolate_idw(4.5, 0.0, &samples, &opts).unwrap(), 0.2);
    }

    #[test]
    fn nearest_sample_picks_first_minimum() {
        let samples = [
            SamplePoint::new(1.0, 0.0, 0.1),
            SamplePoint::new(-1.0, 0.0, 0.2),
        ];
        assert_eq!(nearest_sample(0.0, 0.0, &samples).unwrap().value, 0.1);
        assert!(nearest_sample(0.0, 0.0, &[]).is_none());
    }

    #[test]
    fn contract_violations_fail_fast() {
        let opts = InterpolationOptions::default();
        assert!(matches!(
            interpolate_idw(0.0, 0.0, &[], &opts),
            Err(Error::EmptySamples)
        ));

        let samples = [
            SamplePoint::new(0.0, 0.0, 1.0),
            SamplePoint::new(1.0, 1.0, 0.0),
        ];
        for power in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let opts = InterpolationOptions::default().with_power(power);
            assert!(matches!(
                interpolate_idw(0.5, 0.5, &samples, &opts),
                Err(Error::InvalidConfig(_))
            ));
        }
        let opts = InterpolationOptions::default().with_max_distance(-1.0);
        assert!(interpolate_idw(0.5, 0.5, &samples, &opts).is_err());
        let opts = InterpolationOptions::default().with_max_distance(f64::NAN);
        assert!(interpolate_idw(0.5, 0.5, &samples, &opts).is_err());
    }

    #[test]
    fn distance_is_euclidean_in_degrees() {
        assert_eq!(calculate_distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(calculate_distance(127.0, 37.0, 127.0, 37.0), 0.0);
        let d = calculate_distance(126.978, 37.5665, 129.0756, 35.1796);
        assert!((d - 3.1776).abs() < 1e-3, "{d}");
    }
}
