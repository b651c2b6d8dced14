//! Event types and sinks for observing heatmap runs.
//!
//! This module defines [`HeatmapEvent`] and a set of sinks to emit, collect, or forward
//! events while executing a [`crate::heatmap::HeatmapAssembler`] run.
use crate::heatmap::config::HeatmapConfig;

/// Describes events emitted while assembling a heatmap.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum HeatmapEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// The configuration used.
        config: HeatmapConfig,
    },

    /// Emitted after the sample set was generated.
    SamplesGenerated {
        /// Number of samples produced.
        count: usize,
        /// Samples placed around clusters (the rest are uniform background).
        clustered: usize,
    },

    /// Emitted after the grid was laid out.
    GridGenerated {
        rows: usize,
        cols: usize,
    },

    /// Emitted for every interpolated cell, in output order.
    CellInterpolated {
        row: usize,
        col: usize,
        lng: f64,
        lat: f64,
        weight: f64,
    },

    /// Emitted when the feature collection is complete.
    RunFinished {
        /// Number of features produced.
        feature_count: usize,
        /// `(min, max)` weight, if any features were produced.
        weight_range: Option<(f64, f64)>,
    },

    /// Non-fatal warning generated during the run.
    Warning {
        /// Context string (e.g. cluster name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Coarse classification of [`HeatmapEvent`]s, used to filter per-cell noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatmapEventKind {
    RunStarted,
    SamplesGenerated,
    GridGenerated,
    CellInterpolated,
    RunFinished,
    Warning,
}

impl HeatmapEvent {
    pub fn kind(&self) -> HeatmapEventKind {
        match self {
            HeatmapEvent::RunStarted { .. } => HeatmapEventKind::RunStarted,
            HeatmapEvent::SamplesGenerated { .. } => HeatmapEventKind::SamplesGenerated,
            HeatmapEvent::GridGenerated { .. } => HeatmapEventKind::GridGenerated,
            HeatmapEvent::CellInterpolated { .. } => HeatmapEventKind::CellInterpolated,
            HeatmapEvent::RunFinished { .. } => HeatmapEventKind::RunFinished,
            HeatmapEvent::Warning { .. } => HeatmapEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`HeatmapEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: HeatmapEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: HeatmapEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: HeatmapEvent) {}

    #[inline]
    fn wants(&self, _kind: HeatmapEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(HeatmapEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(HeatmapEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(HeatmapEvent),
{
    #[inline]
    fn send(&mut self, event: HeatmapEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally skipping per-cell events.
#[derive(Default)]
pub struct VecSink {
    events: Vec<HeatmapEvent>,
    skip_cells: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect everything except [`HeatmapEvent::CellInterpolated`].
    pub fn without_cells() -> Self {
        Self {
            events: Vec::new(),
            skip_cells: true,
        }
    }

    pub fn into_inner(self) -> Vec<HeatmapEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[HeatmapEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: HeatmapEvent) {
        self.events.push(event);
    }

    fn wants(&self, kind: HeatmapEventKind) -> bool {
        !(self.skip_cells && kind == HeatmapEventKind::CellInterpolated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> HeatmapEvent {
        HeatmapEvent::Warning {
            context: context.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(warning("b"));
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn vec_sink_can_skip_cell_events() {
        assert!(VecSink::new().wants(HeatmapEventKind::CellInterpolated));
        let sink = VecSink::without_cells();
        assert!(!sink.wants(HeatmapEventKind::CellInterpolated));
        assert!(sink.wants(HeatmapEventKind::RunFinished));
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!().wants(HeatmapEventKind::Warning));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("ctx"));
        assert_eq!(count, 1);
    }

    #[test]
    fn kind_matches_variant() {
        let e = HeatmapEvent::GridGenerated { rows: 1, cols: 2 };
        assert_eq!(e.kind(), HeatmapEventKind::GridGenerated);
        assert_eq!(warning("x").kind(), HeatmapEventKind::Warning);
    }
}
