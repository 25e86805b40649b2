// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie arc layout.
//!
//! Arc angles here are *clock angles*: radians measured clockwise from 12 o'clock, which is
//! how pie layouts are usually described. [`to_scene_angle`] converts to the `kurbo`
//! convention (clockwise from 3 o'clock in a y-down scene).

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Point, Vec2};

use crate::model::SeriesItem;

/// Converts a clock angle to a `kurbo` scene angle.
pub fn to_scene_angle(clock_angle: f64) -> f64 {
    clock_angle - FRAC_PI_2
}

/// The point at `radius` from `center` in the direction of `clock_angle`.
pub fn point_at(center: Point, radius: f64, clock_angle: f64) -> Point {
    center + Vec2::from_angle(to_scene_angle(clock_angle)) * radius
}

/// One slice of a pie ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieArc {
    /// Index of the item in its ring.
    pub index: usize,
    /// Start clock angle.
    pub start_angle: f64,
    /// End clock angle.
    pub end_angle: f64,
    /// Inner radius.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
}

impl PieArc {
    /// Angular extent.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Clock angle through the middle of the slice.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }

    /// Returns `true` if the slice is on the right half of the pie.
    pub fn is_right_side(&self) -> bool {
        self.mid_angle() < PI
    }

    /// Mid-radius point of the slice.
    pub fn centroid(&self, center: Point) -> Point {
        point_at(
            center,
            0.5 * (self.inner_radius + self.outer_radius),
            self.mid_angle(),
        )
    }

    /// Returns `true` if `pos` lies inside the slice.
    pub fn contains(&self, center: Point, pos: Point) -> bool {
        let d = pos - center;
        let r = d.hypot();
        if r < self.inner_radius || r > self.outer_radius {
            return false;
        }
        // atan2 is measured from 3 o'clock; shift to clock angles in [0, TAU).
        let mut clock = d.atan2() + FRAC_PI_2;
        if clock < 0.0 {
            clock += TAU;
        }
        clock >= self.start_angle && clock < self.end_angle
    }
}

/// Lays out `items` as slices of one ring, clockwise from 12 o'clock, in item order.
///
/// Non-positive values get no slice. If nothing is positive the ring is empty.
///
/// With `explode` on a solid pie (`inner_radius == 0`), each slice's outer radius is scaled by
/// `value / max_value`.
pub fn pie_arcs(
    items: &[SeriesItem],
    inner_radius: f64,
    outer_radius: f64,
    explode: bool,
) -> Vec<PieArc> {
    let positive = |v: f64| if v > 0.0 { v } else { 0.0 };
    let total: f64 = items.iter().map(|i| positive(i.value)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let max_value = items.iter().map(|i| positive(i.value)).fold(0.0, f64::max);
    let explode = explode && inner_radius == 0.0;

    let mut out = Vec::with_capacity(items.len());
    let mut angle = 0.0;
    for (index, item) in items.iter().enumerate() {
        let value = positive(item.value);
        if value == 0.0 {
            continue;
        }
        let end = angle + TAU * value / total;
        let outer = if explode {
            outer_radius * value / max_value
        } else {
            outer_radius
        };
        out.push(PieArc {
            index,
            start_angle: angle,
            end_angle: end,
            inner_radius,
            outer_radius: outer,
        });
        angle = end;
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn items(values: &[f64]) -> Vec<SeriesItem> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesItem::new(alloc::format!("i{i}"), *v))
            .collect()
    }

    #[test]
    fn slices_cover_a_full_turn_in_order() {
        let arcs = pie_arcs(&items(&[1.0, 2.0, 1.0]), 10.0, 20.0, false);
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[0].start_angle, 0.0);
        assert!((arcs[0].sweep() - TAU / 4.0).abs() < 1e-12);
        assert!((arcs[1].sweep() - TAU / 2.0).abs() < 1e-12);
        assert!((arcs[2].end_angle - TAU).abs() < 1e-12);
        for w in arcs.windows(2) {
            assert_eq!(w[0].end_angle, w[1].start_angle);
        }
    }

    #[test]
    fn zero_and_negative_values_are_skipped() {
        let arcs = pie_arcs(&items(&[0.0, -3.0, 5.0]), 0.0, 20.0, false);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].index, 2);
        assert!((arcs[0].sweep() - TAU).abs() < 1e-12);
    }

    #[test]
    fn empty_or_zero_total_gives_no_arcs() {
        assert!(pie_arcs(&[], 0.0, 10.0, false).is_empty());
        assert!(pie_arcs(&items(&[0.0, 0.0]), 0.0, 10.0, false).is_empty());
    }

    #[test]
    fn explode_scales_solid_pies_only() {
        let solid = pie_arcs(&items(&[1.0, 4.0]), 0.0, 40.0, true);
        assert_eq!(solid[0].outer_radius, 10.0);
        assert_eq!(solid[1].outer_radius, 40.0);

        let donut = pie_arcs(&items(&[1.0, 4.0]), 5.0, 40.0, true);
        assert!(donut.iter().all(|a| a.outer_radius == 40.0));
    }

    #[test]
    fn clock_angles_start_at_twelve_o_clock() {
        let c = Point::new(100.0, 100.0);
        let top = point_at(c, 10.0, 0.0);
        let right = point_at(c, 10.0, FRAC_PI_2);
        assert!((top.x - 100.0).abs() < 1e-9 && (top.y - 90.0).abs() < 1e-9);
        assert!((right.x - 110.0).abs() < 1e-9 && (right.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn contains_checks_radius_and_angle() {
        let c = Point::ZERO;
        // First quarter: 12 to 3 o'clock.
        let arc = PieArc {
            index: 0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            inner_radius: 5.0,
            outer_radius: 10.0,
        };
        assert!(arc.contains(c, Point::new(5.0, -5.0)));
        assert!(!arc.contains(c, Point::new(1.0, -1.0)));
        assert!(!arc.contains(c, Point::new(-5.0, -5.0)));
        assert!(!arc.contains(c, Point::new(5.0, 5.0)));
        assert!(arc.is_right_side());
    }
}
