// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path marks for laid-out pie slices.

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;
use ringlet_core::{Mark, MarkId};

use crate::pie::{PieArc, to_scene_angle};
use crate::style::StrokeStyle;
use crate::z_order;

/// Flattening tolerance for slice outlines.
pub const SLICE_TOLERANCE: f64 = 0.1;

/// One painted slice of a ring.
#[derive(Clone, Debug)]
pub struct SliceMark {
    /// Stable mark id.
    pub id: MarkId,
    /// Pie center in scene coordinates.
    pub center: Point,
    /// The slice, in clock angles.
    pub arc: PieArc,
    /// Fill paint, already faded if the slice is inactive.
    pub fill: Brush,
    /// Outline between slices.
    pub stroke: Option<StrokeStyle>,
}

impl SliceMark {
    /// Creates an unstroked slice mark.
    pub fn new(id: MarkId, center: Point, arc: PieArc, fill: impl Into<Brush>) -> Self {
        Self {
            id,
            center,
            arc,
            fill: fill.into(),
            stroke: None,
        }
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// The slice outline. A slice sweeping the full turn closes into a disc or an annulus.
    pub fn outline(&self) -> BezPath {
        Circle::new(self.center, self.arc.outer_radius)
            .segment(
                self.arc.inner_radius,
                to_scene_angle(self.arc.start_angle),
                self.arc.sweep(),
            )
            .path_elements(SLICE_TOLERANCE)
            .collect()
    }

    /// Builds the path mark.
    pub fn mark(&self) -> Mark {
        let builder = Mark::builder(self.id)
            .path()
            .z_index(z_order::SERIES_FILL)
            .path_const(self.outline())
            .fill_brush_const(self.fill.clone());
        match &self.stroke {
            Some(stroke) => builder
                .stroke_brush_const(stroke.brush.clone())
                .stroke_width_const(stroke.stroke_width),
            None => builder.stroke_width_const(0.0),
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    use kurbo::Vec2;
    use peniko::color::palette::css;
    use ringlet_core::MarkPayload;

    use super::*;

    fn arc(start: f64, end: f64, inner: f64, outer: f64) -> PieArc {
        PieArc {
            index: 0,
            start_angle: start,
            end_angle: end,
            inner_radius: inner,
            outer_radius: outer,
        }
    }

    #[test]
    fn first_quarter_lies_between_twelve_and_three() {
        let slice = SliceMark::new(
            MarkId::from_raw(1),
            Point::ZERO,
            arc(0.0, FRAC_PI_2, 0.0, 10.0),
            css::TOMATO,
        );
        let b = slice.outline().bounding_box();
        assert!(b.x0 > -1e-6, "{b:?}");
        assert!(b.y1 < 1e-6, "{b:?}");
        assert!((b.x1 - 10.0).abs() < 1e-3, "{b:?}");
        assert!((b.y0 + 10.0).abs() < 1e-3, "{b:?}");
    }

    #[test]
    fn outline_contains_the_centroid() {
        let center = Point::new(50.0, 40.0);
        let slice_arc = arc(PI, 1.5 * PI, 10.0, 30.0);
        let outline = SliceMark::new(MarkId::from_raw(1), center, slice_arc, css::TOMATO).outline();
        assert!(outline.contains(slice_arc.centroid(center)));
        assert!(!outline.contains(center + Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn full_turn_donut_keeps_its_hole() {
        let outline =
            SliceMark::new(MarkId::from_raw(1), Point::ZERO, arc(0.0, TAU, 20.0, 40.0), css::TOMATO)
                .outline();
        assert!(!outline.contains(Point::ZERO));
        assert!(outline.contains(Point::new(0.0, 30.0)));
        assert!(outline.contains(Point::new(-30.0, 0.0)));
    }

    #[test]
    fn stroke_is_optional() {
        let slice_arc = arc(0.0, PI, 0.0, 10.0);
        let plain = SliceMark::new(MarkId::from_raw(3), Point::ZERO, slice_arc, css::TOMATO).mark();
        let MarkPayload::Path(p) = &plain.payload else {
            panic!("expected a path payload");
        };
        assert_eq!(p.stroke_width, 0.0);
        assert_eq!(plain.z_index, z_order::SERIES_FILL);

        let outlined = SliceMark::new(MarkId::from_raw(3), Point::ZERO, slice_arc, css::TOMATO)
            .with_stroke(StrokeStyle::solid(css::WHITE, 1.5))
            .mark();
        let MarkPayload::Path(p) = &outlined.payload else {
            panic!("expected a path payload");
        };
        assert_eq!(p.stroke, css::WHITE.into());
        assert_eq!(p.stroke_width, 1.5);
        assert_eq!(p.fill, css::TOMATO.into());
    }
}
