/// Color gradient: an ordered list of color stops plus an optional name.
///
/// Storage order is whatever the caller produced; `sort()` restores position
/// order (stable, ties keep insertion order). Every editing action in the
/// UI ends with a sort, so readers can usually assume sorted stops.
///
/// - `hash`: compact textual codec used for sharing and bookmarking
/// - `interpolate`: `color_at`, subdivision and per-axis normalization
/// - `random`: procedural generator

pub mod hash;
pub mod interpolate;
pub mod random;

use crate::color::ColorStop;
use crate::error::{GradientError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
    name: Option<String>,
}

impl Gradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gradient from `(position, 0xRRGGBB)` pairs.
    pub fn from_stops(stops: &[(f64, u32)]) -> Self {
        let stops = stops.iter()
            .map(|&(pos, color)| ColorStop::new(pos, color))
            .collect();
        Self { stops, name: None }
    }

    /// Create from a flat f64 array: [pos, color, pos, color, ...]
    ///
    /// Colors are packed 24-bit values carried as f64 (exact up to 2^53).
    /// A trailing odd element is ignored.
    pub fn from_flat(data: &[f64]) -> Self {
        let stops = data.chunks_exact(2)
            .map(|c| ColorStop::new(c[0], flat_color(c[1])))
            .collect();
        Self { stops, name: None }
    }

    /// Flatten to [pos, color, pos, color, ...] for the JS side.
    pub fn to_flat(&self) -> Vec<f64> {
        self.stops.iter()
            .flat_map(|s| [s.position(), s.color() as f64])
            .collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the display name; an empty string clears it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn stops_mut(&mut self) -> &mut [ColorStop] {
        &mut self.stops
    }

    pub fn get(&self, index: usize) -> Result<&ColorStop> {
        let len = self.stops.len();
        self.stops.get(index).ok_or(GradientError::StopIndex { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut ColorStop> {
        let len = self.stops.len();
        self.stops.get_mut(index).ok_or(GradientError::StopIndex { index, len })
    }

    pub fn push(&mut self, stop: ColorStop) {
        self.stops.push(stop);
    }

    pub fn remove(&mut self, index: usize) -> Result<ColorStop> {
        if index >= self.stops.len() {
            return Err(GradientError::StopIndex { index, len: self.stops.len() });
        }
        Ok(self.stops.remove(index))
    }

    /// Stable sort by position.
    pub fn sort(&mut self) {
        // positions are clamped on write, never NaN
        self.stops.sort_by(|a, b| a.position().total_cmp(&b.position()));
    }

    /// Sorted copy of the stops; the gradient itself is left untouched.
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.position().total_cmp(&b.position()));
        stops
    }

    /// Reassign positions to index / (count - 1). No-op for 0 or 1 stops.
    pub fn distribute_evenly(&mut self) {
        let n = self.stops.len();
        if n <= 1 {
            return;
        }
        let last = (n - 1) as f64;
        for (i, stop) in self.stops.iter_mut().enumerate() {
            stop.set_position(i as f64 / last);
        }
    }

    /// True when every position equals index / (count - 1) exactly.
    pub fn is_distributed_evenly(&self) -> bool {
        let n = self.stops.len();
        if n <= 1 {
            return true;
        }
        let last = (n - 1) as f64;
        self.stops.iter()
            .enumerate()
            .all(|(i, s)| s.position() == i as f64 / last)
    }

    /// Flip the gradient: every position p becomes 1 - p.
    pub fn reverse(&mut self) {
        for stop in &mut self.stops {
            stop.set_position(1.0 - stop.position());
        }
        self.sort();
    }

    /// Make the gradient symmetric: squeeze it into [0, 0.5] and append
    /// mirrored copies of every stop but the last one.
    pub fn mirror(&mut self) {
        self.sort();
        for stop in &mut self.stops {
            stop.set_position(stop.position() * 0.5);
        }
        let mirrored: Vec<ColorStop> = self.stops.iter()
            .take(self.stops.len().saturating_sub(1))
            .map(|s| ColorStop::new(1.0 - s.position(), s.color()))
            .collect();
        self.stops.extend(mirrored);
        self.sort();
    }
}

fn flat_color(v: f64) -> u32 {
    if v.is_finite() { (v as i64 & 0xFF_FFFF) as u32 } else { 0 }
}
