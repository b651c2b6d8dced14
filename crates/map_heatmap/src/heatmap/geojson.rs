//! GeoJSON-shaped output: a feature collection of weighted points.
//!
//! With the `serde` feature these types serialize to standard GeoJSON, e.g.
//! `{"type":"Feature","geometry":{"type":"Point","coordinates":[lng,lat]},"properties":{"weight":w}}`.

/// Point geometry with `[longitude, latitude]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename = "Point"))]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            coordinates: [lng, lat],
        }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Feature properties: the interpolated density in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightProperties {
    pub weight: f64,
}

/// One grid cell of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename = "Feature"))]
pub struct Feature {
    pub geometry: PointGeometry,
    pub properties: WeightProperties,
}

impl Feature {
    pub fn new(lng: f64, lat: f64, weight: f64) -> Self {
        Self {
            geometry: PointGeometry::new(lng, lat),
            properties: WeightProperties { weight },
        }
    }

    pub fn weight(&self) -> f64 {
        self.properties.weight
    }
}

/// Ordered features, one per grid cell in row-major order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename = "FeatureCollection"))]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// `(min, max)` weight over all features, or `None` when empty.
    pub fn weight_range(&self) -> Option<(f64, f64)> {
        self.features.iter().map(Feature::weight).fold(None, |acc, w| match acc {
            None => Some((w, w)),
            Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
        })
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_range_over_features() {
        let fc = FeatureCollection::new(vec![
            Feature::new(0.0, 0.0, 0.3),
            Feature::new(1.0, 0.0, 0.9),
            Feature::new(2.0, 0.0, 0.1),
        ]);
        assert_eq!(fc.weight_range(), Some((0.1, 0.9)));
        assert_eq!(FeatureCollection::default().weight_range(), None);
        assert_eq!(fc.len(), 3);
        assert_eq!((&fc).into_iter().count(), 3);
    }

    #[test]
    fn coordinates_are_lng_lat() {
        let f = Feature::new(127.5, 36.0, 0.4);
        assert_eq!(f.geometry.coordinates, [127.5, 36.0]);
        assert_eq!(f.geometry.lng(), 127.5);
        assert_eq!(f.geometry.lat(), 36.0);
        assert_eq!(f.weight(), 0.4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_geojson() {
        let fc = FeatureCollection::new(vec![Feature::new(127.5, 36.0, 0.25)]);
        let json = serde_json::to_value(&fc).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [127.5, 36.0] },
                    "properties": { "weight": 0.25 }
                }]
            })
        );

        let back: FeatureCollection = serde_json::from_value(json).expect("deserializes");
        assert_eq!(back, fc);
    }
}
