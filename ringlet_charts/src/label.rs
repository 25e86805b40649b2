// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice labels for the outermost ring.
//!
//! A label sits at 1.5x the ring's outer radius, pushed out horizontally to the side of the pie
//! its slice falls on, and is tied back to the slice by a two-segment leader line.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::PI;

use kurbo::{BezPath, Point};
use peniko::{Brush, Color};
use ringlet_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::model::SeriesItem;
use crate::pie::{PieArc, point_at};
use crate::style::StrokeStyle;
use crate::z_order;

/// Slices narrower than this (radians) get no label.
pub const MIN_LABEL_SWEEP: f64 = PI / 30.0;

const LABEL_RADIUS_FACTOR: f64 = 1.5;

/// Formats the label text for a slice.
pub type LabelFormatter = fn(&SeriesItem) -> String;

/// Default label text: the item's display label.
pub fn default_label(item: &SeriesItem) -> String {
    String::from(item.display_label())
}

/// Keeps the first `max_chars` characters of `text`, marking a cut with `...`.
pub fn trim_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return String::from(text);
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// A placed slice label.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceLabel {
    /// Text to draw.
    pub text: String,
    /// Text anchor position.
    pub pos: Point,
    /// `Start` on the right half of the pie, `End` on the left.
    pub anchor: TextAnchor,
    /// Polyline from the slice edge to the label.
    pub leader: BezPath,
}

impl SliceLabel {
    /// Places a label for `arc`, or returns `None` if the slice is too thin to label.
    pub fn place(center: Point, arc: &PieArc, text: String) -> Option<Self> {
        if arc.sweep() < MIN_LABEL_SWEEP {
            return None;
        }
        let mid = arc.mid_angle();
        let label_radius = arc.outer_radius * LABEL_RADIUS_FACTOR;
        let edge = point_at(center, arc.outer_radius, mid);
        let elbow = point_at(center, label_radius, mid);
        let (dx, anchor) = if arc.is_right_side() {
            (label_radius, TextAnchor::Start)
        } else {
            (-label_radius, TextAnchor::End)
        };
        let pos = Point::new(center.x + dx, elbow.y);

        let mut leader = BezPath::new();
        leader.move_to(edge);
        leader.line_to(elbow);
        leader.line_to(pos);

        Some(Self {
            text,
            pos,
            anchor,
            leader,
        })
    }

    /// Generates the leader line and text marks.
    pub fn marks(
        &self,
        text_id: MarkId,
        line_id: MarkId,
        text_fill: Brush,
        line: &StrokeStyle,
        font_size: f64,
    ) -> Vec<Mark> {
        let leader = Mark::builder(line_id)
            .path()
            .z_index(z_order::LABEL_LINES)
            .path_const(self.leader.clone())
            .fill_const(Color::TRANSPARENT)
            .stroke_brush_const(line.brush.clone())
            .stroke_width_const(line.stroke_width)
            .build();
        let text = Mark::builder(text_id)
            .text()
            .z_index(z_order::SERIES_LABELS)
            .x_const(self.pos.x)
            .y_const(self.pos.y)
            .text_const(self.text.clone())
            .font_size_const(font_size)
            .fill_brush_const(text_fill)
            .text_anchor(self.anchor)
            .text_baseline(TextBaseline::Middle)
            .build();
        alloc::vec![leader, text]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_2;

    use super::*;

    fn arc(start: f64, end: f64) -> PieArc {
        PieArc {
            index: 0,
            start_angle: start,
            end_angle: end,
            inner_radius: 0.0,
            outer_radius: 100.0,
        }
    }

    #[test]
    fn trim_label_cuts_long_text() {
        assert_eq!(trim_label("Germany", 10), "Germany");
        assert_eq!(trim_label("United Kingdom", 10), "United Kin...");
        assert_eq!(trim_label("Ünïcödé!", 3), "Ünï...");
    }

    #[test]
    fn right_side_labels_start_at_the_label_radius() {
        let label = SliceLabel::place(Point::ZERO, &arc(0.0, FRAC_PI_2), "A".into())
            .expect("wide slice is labelled");
        assert_eq!(label.anchor, TextAnchor::Start);
        assert!((label.pos.x - 150.0).abs() < 1e-9);
        // The mid angle is 45 degrees, so the label sits above the center.
        assert!(label.pos.y < 0.0);
        assert_eq!(label.leader.elements().len(), 3);
    }

    #[test]
    fn left_side_labels_end_at_the_label_radius() {
        let label = SliceLabel::place(Point::ZERO, &arc(PI, 1.5 * PI), "B".into())
            .expect("wide slice is labelled");
        assert_eq!(label.anchor, TextAnchor::End);
        assert!((label.pos.x + 150.0).abs() < 1e-9);
    }

    #[test]
    fn thin_slices_are_not_labelled() {
        assert!(SliceLabel::place(Point::ZERO, &arc(0.0, 0.05), "x".into()).is_none());
    }

    #[test]
    fn marks_are_a_leader_and_a_text() {
        let label = SliceLabel::place(Point::ZERO, &arc(0.0, PI), "A".into())
            .expect("wide slice is labelled");
        let marks = label.marks(
            MarkId::from_raw(1),
            MarkId::from_raw(2),
            Brush::default(),
            &StrokeStyle::default(),
            11.0,
        );
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].z_index, z_order::LABEL_LINES);
        assert_eq!(marks[1].z_index, z_order::SERIES_LABELS);

        let ringlet_core::MarkPayload::Text(text) = &marks[1].payload else {
            panic!("expected a text payload");
        };
        assert_eq!(text.text, "A");
        assert_eq!(text.pos, label.pos);
        assert_eq!(text.anchor, TextAnchor::Start);
        assert_eq!(text.baseline, TextBaseline::Middle);
        assert_eq!(text.font_size, 11.0);
    }
}
