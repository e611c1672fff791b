/// Interpolation, subdivision and normalization across colorspace views.
///
/// `color_at` is the single synthesis primitive: it blends the two stops
/// bracketing a position in the chosen view. Subdivision and preview colors
/// outside the gradient's extent both go through it.

use crate::color::{ColorSpace, ColorStop};
use crate::error::{GradientError, Result};
use crate::math::utils;

use super::Gradient;

impl Gradient {
    /// Synthesize a stop at `pos` by blending its bracketing stops in `space`.
    ///
    /// `right` is the first stop with position >= pos, `left` the last one
    /// with position < pos. With only one of them the color is copied; an
    /// empty gradient yields black. When `shortest_hue` is set and the view
    /// starts with a hue, the hue travels the shorter way around the circle.
    pub fn color_at(&self, pos: f64, space: ColorSpace, shortest_hue: bool) -> ColorStop {
        let sorted = self.sorted_stops();
        let right = sorted.iter().find(|s| s.position() >= pos);
        let left = sorted.iter().rev().find(|s| s.position() < pos);

        match (left, right) {
            (Some(l), Some(r)) => {
                let (lp, rp) = (l.position(), r.position());
                let mut lv = l.view(space);
                let rv = r.view(space);
                let wrap_hue = shortest_hue && space.has_hue();
                if wrap_hue {
                    lv[0] = nearest_turn(lv[0], rv[0]);
                }
                let mut values = [0.0; 3];
                for i in 0..3 {
                    values[i] = (lv[i] * (rp - pos) + rv[i] * (pos - lp)) / (rp - lp);
                }
                if wrap_hue {
                    values[0] = utils::wrap_degrees(values[0]);
                }
                ColorStop::from_view(pos, space, values)
            }
            (Some(l), None) => ColorStop::new(pos, l.color()),
            (None, Some(r)) => ColorStop::new(pos, r.color()),
            (None, None) => ColorStop::new(pos, 0),
        }
    }

    /// Add a stop at `pos` colored by `color_at`, then re-sort.
    pub fn insert_interpolated(&mut self, pos: f64, space: ColorSpace, shortest_hue: bool) {
        let stop = self.color_at(pos, space, shortest_hue);
        self.push(stop);
        self.sort();
    }

    /// Insert `n` evenly spaced stops between every adjacent pair, colored
    /// by interpolating in `space`. Existing stops are untouched.
    pub fn subdivide(&mut self, n: usize, space: ColorSpace, shortest_hue: bool) {
        if n == 0 || self.len() < 2 {
            return;
        }
        let sorted = self.sorted_stops();
        let mut inserted = Vec::with_capacity(n * (sorted.len() - 1));
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].position(), pair[1].position());
            for k in 1..=n {
                let pos = utils::lerp(a, b, k as f64 / (n + 1) as f64);
                inserted.push(self.color_at(pos, space, shortest_hue));
            }
        }
        log::debug!("subdivide: inserting {} stops in {}", inserted.len(), space);
        for stop in inserted {
            self.push(stop);
        }
        self.sort();
    }

    /// Set one view component of every stop to the mean of that component
    /// across all stops; the other two components are kept.
    ///
    /// This takes the arithmetic mean. Earlier versions folded values
    /// pairwise (`(a + b) / 2` repeatedly), which weights later stops more.
    pub fn normalize(&mut self, space: ColorSpace, axis: usize) -> Result<()> {
        if axis >= 3 {
            return Err(GradientError::InvalidAxis(axis));
        }
        if self.is_empty() {
            return Ok(());
        }
        let mean = self.stops().iter()
            .map(|s| s.view(space)[axis])
            .sum::<f64>() / self.len() as f64;
        for stop in self.stops_mut() {
            stop.set_component(space, axis, mean)?;
        }
        Ok(())
    }
}

/// Shift hue `from` by ±360° when that brings it closer to `to`.
fn nearest_turn(from: f64, to: f64) -> f64 {
    if from - to > 180.0 {
        from - 360.0
    } else if to - from > 180.0 {
        from + 360.0
    } else {
        from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_rgb_midpoint() {
        let g = Gradient::from_stops(&[(0.0, 0x000000), (1.0, 0xFF6420)]);
        let s = g.color_at(0.5, ColorSpace::Rgb, false);
        assert_eq!(s.rgb(), [128, 50, 16]);
        assert_eq!(s.position(), 0.5);
    }

    #[test]
    fn test_weighting_by_distance() {
        let g = Gradient::from_stops(&[(0.2, 0x000000), (0.6, 0x0000C8)]);
        let s = g.color_at(0.3, ColorSpace::Rgb, false);
        assert_eq!(s.rgb(), [0, 0, 50]);
    }

    #[test]
    fn test_unsorted_gradient_is_not_mutated() {
        let g = Gradient::from_stops(&[(1.0, 0xFFFFFF), (0.0, 0x000000)]);
        let s = g.color_at(0.5, ColorSpace::Rgb, false);
        assert_eq!(s.rgb(), [128, 128, 128]);
        assert_eq!(g.stops()[0].color(), 0xFFFFFF);
    }

    #[test]
    fn test_boundaries_copy_exact_color() {
        let g = Gradient::from_stops(&[(0.2, 0x123456), (0.8, 0xABCDEF)]);
        assert_eq!(g.color_at(0.1, ColorSpace::HlcUv, true).color(), 0x123456);
        assert_eq!(g.color_at(0.9, ColorSpace::Luv, false).color(), 0xABCDEF);
        assert_eq!(g.color_at(-5.0, ColorSpace::Rgb, false).color(), 0x123456);
        assert_eq!(g.color_at(255.0, ColorSpace::Rgb, false).color(), 0xABCDEF);
        // exactly on a stop: that stop is `right`
        assert_eq!(g.color_at(0.2, ColorSpace::Rgb, false).color(), 0x123456);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(Gradient::new().color_at(0.5, ColorSpace::Hsv, true).color(), 0);
        let g = Gradient::from_stops(&[(0.5, 0x00FF00)]);
        assert_eq!(g.color_at(0.0, ColorSpace::Rgb, false).color(), 0x00FF00);
        assert_eq!(g.color_at(1.0, ColorSpace::Rgb, false).color(), 0x00FF00);
    }

    #[test]
    fn test_shortest_hue_path() {
        let mut g = Gradient::new();
        g.push(ColorStop::from_view(0.0, ColorSpace::Hsv, [350.0, 1.0, 1.0]));
        g.push(ColorStop::from_view(1.0, ColorSpace::Hsv, [10.0, 1.0, 1.0]));

        let short = g.color_at(0.5, ColorSpace::Hsv, true);
        assert!(hue_distance(short.hsv()[0], 0.0) < 0.5, "hue {}", short.hsv()[0]);
        assert_eq!(short.rgb(), [255, 0, 0]);

        let long = g.color_at(0.5, ColorSpace::Hsv, false);
        assert!(hue_distance(long.hsv()[0], 180.0) < 0.5, "hue {}", long.hsv()[0]);
    }

    #[test]
    fn test_shortest_hue_ignored_without_hue_axis() {
        let g = Gradient::from_stops(&[(0.0, 0xFF0000), (1.0, 0x0000FF)]);
        let a = g.color_at(0.5, ColorSpace::Rgb, true);
        let b = g.color_at(0.5, ColorSpace::Rgb, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_nearest_turn() {
        assert_eq!(nearest_turn(350.0, 10.0), -10.0);
        assert_eq!(nearest_turn(10.0, 350.0), 370.0);
        assert_eq!(nearest_turn(100.0, 200.0), 100.0);
    }

    #[test]
    fn test_insert_interpolated() {
        let mut g = Gradient::from_stops(&[(0.0, 0x000000), (1.0, 0xFFFFFF)]);
        g.insert_interpolated(0.25, ColorSpace::Rgb, false);
        assert_eq!(g.len(), 3);
        assert_eq!(g.stops()[1].position(), 0.25);
        assert_eq!(g.stops()[1].rgb(), [64, 64, 64]);
    }

    #[test]
    fn test_subdivide_count() {
        for k in 1..5usize {
            for n in 0..4usize {
                let stops: Vec<(f64, u32)> = (0..k).map(|i| (i as f64 / 4.0, 0x102030 * i as u32)).collect();
                let mut g = Gradient::from_stops(&stops);
                g.subdivide(n, ColorSpace::Hsl, true);
                assert_eq!(g.len(), k + n * (k - 1));
            }
        }
    }

    #[test]
    fn test_subdivide_positions_and_existing_stops() {
        let mut g = Gradient::from_stops(&[(0.0, 0xFF0000), (1.0, 0x0000FF)]);
        g.subdivide(3, ColorSpace::Rgb, false);
        let p: Vec<f64> = g.stops().iter().map(|s| s.position()).collect();
        assert_eq!(p, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(g.stops()[0].color(), 0xFF0000);
        assert_eq!(g.stops()[4].color(), 0x0000FF);
        assert_eq!(g.stops()[2].rgb(), [128, 0, 128]);
    }

    #[test]
    fn test_normalize_value_axis() {
        let mut g = Gradient::new();
        g.push(ColorStop::from_view(0.0, ColorSpace::Hsv, [0.0, 1.0, 0.2]));
        g.push(ColorStop::from_view(0.5, ColorSpace::Hsv, [120.0, 1.0, 0.6]));
        g.push(ColorStop::from_view(1.0, ColorSpace::Hsv, [240.0, 1.0, 1.0]));
        g.normalize(ColorSpace::Hsv, 2).unwrap();
        let hues = [0.0, 120.0, 240.0];
        for (stop, hue) in g.stops().iter().zip(hues) {
            let hsv = stop.hsv();
            assert!((hsv[2] - 0.6).abs() < 0.01, "value {}", hsv[2]);
            assert!(hue_distance(hsv[0], hue) < 1.0);
            assert!((hsv[1] - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_normalize_lightness_in_luv() {
        let mut g = Gradient::from_stops(&[(0.0, 0x202020), (0.5, 0x808080), (1.0, 0xE0E0E0)]);
        g.normalize(ColorSpace::Luv, 0).unwrap();
        let l: Vec<f64> = g.stops().iter().map(|s| s.luv()[0]).collect();
        assert!((l[0] - l[1]).abs() < 0.5 && (l[1] - l[2]).abs() < 0.5, "{l:?}");
    }

    #[test]
    fn test_normalize_rejects_bad_axis() {
        let mut g = Gradient::from_stops(&[(0.0, 0x202020)]);
        assert_eq!(g.normalize(ColorSpace::Rgb, 3), Err(GradientError::InvalidAxis(3)));
        assert!(Gradient::new().normalize(ColorSpace::Rgb, 0).is_ok());
    }
}
