// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A legend is an optional title above a column-major grid of color swatches with text labels.
//! Legend rows are also hit targets: [`LegendSwatches::label_at`] maps a pointer position back
//! to a label, which hosts feed into legend activation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use ringlet_core::{Mark, MarkId, MarkPayload, TextAnchor, TextBaseline};

use crate::color::OrdinalColorScale;
use crate::layout::Size;
use crate::measure::TextMeasurer;
use crate::z_order;

fn union_rect(a: Rect, b: Rect) -> Rect {
    Rect::new(
        a.x0.min(b.x0),
        a.y0.min(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}

fn text_bounds(
    x: f64,
    y: f64,
    size: (f64, f64),
    anchor: TextAnchor,
    baseline: TextBaseline,
) -> Rect {
    let (w, h) = size;
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + w),
        TextAnchor::Middle => (x - w * 0.5, x + w * 0.5),
        TextAnchor::End => (x - w, x),
    };
    let (y0, y1) = match baseline {
        TextBaseline::Middle => (y - h * 0.5, y + h * 0.5),
        TextBaseline::Alphabetic | TextBaseline::Ideographic => (y - h, y),
        TextBaseline::Hanging => (y, y + h),
    };
    Rect::new(x0, y0, x1, y1)
}

/// A simple legend row item.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }

    /// One item per domain label, colored by `colors`.
    ///
    /// With `visible`, only labels it contains are kept, in domain order.
    pub fn from_domain(
        domain: &[String],
        colors: &OrdinalColorScale,
        visible: Option<&[String]>,
    ) -> Vec<Self> {
        domain
            .iter()
            .filter(|label| visible.is_none_or(|v| v.contains(label)))
            .map(|label| Self::solid(label.clone(), colors.color(label)))
            .collect()
    }
}

/// A positioned legend.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Legend origin (top-left).
    pub x: f64,
    /// Legend origin (top-left).
    pub y: f64,
    /// Optional title drawn above the rows.
    pub title: Option<String>,
    /// Title font size.
    pub title_font_size: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    ///
    /// Items are laid out top-to-bottom, then left-to-right into columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn title_height(&self) -> f64 {
        match self.title {
            Some(_) => self.title_font_size + self.row_gap,
            None => 0.0,
        }
    }

    fn rows_per_col(&self) -> usize {
        self.items.len().div_ceil(self.columns.max(1)).max(1)
    }

    fn column_width(&self, measurer: &dyn TextMeasurer) -> f64 {
        let label_w = self
            .items
            .iter()
            .map(|item| measurer.measure(&item.label, self.font_size).0)
            .fold(0.0, f64::max);
        self.swatch_size + self.label_dx + label_w
    }

    /// Top-left corner of row `i`.
    fn row_origin(&self, i: usize, column_width: f64) -> Point {
        let rows = self.rows_per_col();
        let col = i / rows;
        let row = i % rows;
        Point::new(
            self.x + col as f64 * (column_width + self.column_gap),
            self.y + self.title_height() + row as f64 * (self.row_height() + self.row_gap),
        )
    }

    /// Generate legend marks (title, then swatch rect + label text per item).
    ///
    /// Columns are spaced by the widest measured label.
    pub fn marks(&self, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let mut out = Vec::new();
        let row_height = self.row_height();
        let column_width = self.column_width(measurer);

        if let Some(title) = &self.title {
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 2000))
                    .text()
                    .z_index(z_order::LEGEND_TITLE)
                    .x_const(self.x)
                    .y_const(self.y)
                    .text_const(title.clone())
                    .font_size_const(self.title_font_size)
                    .fill_brush_const(self.text_fill.clone())
                    .text_anchor(TextAnchor::Start)
                    .text_baseline(TextBaseline::Hanging)
                    .build(),
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            let origin = self.row_origin(i, column_width);
            let swatch_y = origin.y + (row_height - self.swatch_size) * 0.5;
            let label_y = origin.y + row_height * 0.5;

            // Swatch.
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + i as u64))
                    .rect()
                    .z_index(z_order::LEGEND_SWATCHES)
                    .x_const(origin.x)
                    .y_const(swatch_y)
                    .w_const(self.swatch_size)
                    .h_const(self.swatch_size)
                    .fill_brush_const(item.fill.clone())
                    .build(),
            );

            // Label.
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 1000 + i as u64))
                    .text()
                    .z_index(z_order::LEGEND_LABELS)
                    .x_const(origin.x + self.swatch_size + self.label_dx)
                    .y_const(label_y)
                    .text_const(item.label.clone())
                    .font_size_const(self.font_size)
                    .fill_brush_const(self.text_fill.clone())
                    .text_anchor(TextAnchor::Start)
                    .text_baseline(TextBaseline::Middle)
                    .build(),
            );
        }
        out
    }

    /// Estimates legend bounds using the provided text measurer.
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        let mut bounds: Option<Rect> = None;

        for mark in self.marks(measurer) {
            let b = match &mark.payload {
                MarkPayload::Text(t) => text_bounds(
                    t.pos.x,
                    t.pos.y,
                    measurer.measure(&t.text, t.font_size),
                    t.anchor,
                    t.baseline,
                ),
                payload => {
                    let Some(b) = payload.bounds() else {
                        continue;
                    };
                    b
                }
            };
            bounds = Some(match bounds {
                None => b,
                Some(r) => union_rect(r, b),
            });
        }

        bounds.unwrap_or_else(|| Rect::new(self.x, self.y, self.x, self.y))
    }

    /// Returns the label of the row under `pos`, if any.
    ///
    /// A row spans its swatch and its measured label.
    pub fn label_at(&self, pos: Point, measurer: &dyn TextMeasurer) -> Option<&str> {
        let column_width = self.column_width(measurer);
        let row_height = self.row_height();
        self.items.iter().enumerate().find_map(|(i, item)| {
            let origin = self.row_origin(i, column_width);
            let (label_w, _) = measurer.measure(&item.label, self.font_size);
            let row = Rect::new(
                origin.x,
                origin.y,
                origin.x + self.swatch_size + self.label_dx + label_w,
                origin.y + row_height,
            );
            row.contains(pos).then_some(item.label.as_str())
        })
    }
}

/// An unpositioned legend specification.
///
/// Use this with a measure/arrange layout pass:
/// - Measure: call [`LegendSwatchesSpec::measure`] to get a desired size.
/// - Arrange: call [`LegendSwatchesSpec::at`] once you know the origin.
#[derive(Clone, Debug)]
pub struct LegendSwatchesSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Optional title drawn above the rows.
    pub title: Option<String>,
    /// Title font size.
    pub title_font_size: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatchesSpec {
    /// Creates a new legend specification with defaults.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            title: None,
            title_font_size: 12.0,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
            items,
        }
    }

    /// Set the legend title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the label text paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Measures the desired legend size (width/height).
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let b = self.at(0.0, 0.0).bounds(measurer);
        Size {
            width: b.width(),
            height: b.height(),
        }
    }

    /// Creates a positioned legend at the given origin.
    pub fn at(&self, x: f64, y: f64) -> LegendSwatches {
        LegendSwatches {
            id_base: self.id_base,
            x,
            y,
            title: self.title.clone(),
            title_font_size: self.title_font_size,
            swatch_size: self.swatch_size,
            row_gap: self.row_gap,
            label_dx: self.label_dx,
            columns: self.columns,
            column_gap: self.column_gap,
            font_size: self.font_size,
            text_fill: self.text_fill.clone(),
            items: self.items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::color::ColorScheme;
    use crate::measure::HeuristicTextMeasurer;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem::solid("A", css::BLACK),
            LegendItem::solid("BBBB", css::BLACK),
            LegendItem::solid("CC", css::BLACK),
            LegendItem::solid("DDDDDD", css::BLACK),
        ]
    }

    #[test]
    fn measure_accounts_for_columns() {
        let measurer = HeuristicTextMeasurer::default();
        let one_col = LegendSwatchesSpec::new(1, items()).with_columns(1);
        let two_col = LegendSwatchesSpec::new(1, items()).with_columns(2);

        let s1 = one_col.measure(&measurer);
        let s2 = two_col.measure(&measurer);

        assert!(s2.width > s1.width);
        assert!(s2.height < s1.height);
    }

    #[test]
    fn title_adds_height() {
        let measurer = HeuristicTextMeasurer::default();
        let plain = LegendSwatchesSpec::new(1, items()).measure(&measurer);
        let titled = LegendSwatchesSpec::new(1, items())
            .with_title("Legend")
            .measure(&measurer);
        assert!(titled.height > plain.height);
    }

    #[test]
    fn bounds_match_measure_at_origin() {
        let measurer = HeuristicTextMeasurer::default();
        let spec = LegendSwatchesSpec::new(1, items())
            .with_columns(2)
            .with_title("Legend");

        let desired = spec.measure(&measurer);
        let b = spec.at(10.0, 20.0).bounds(&measurer);

        assert_eq!(b.x0, 10.0);
        assert_eq!(b.y0, 20.0);
        assert!((b.width() - desired.width).abs() < 1e-6);
        assert!((b.height() - desired.height).abs() < 1e-6);
    }

    #[test]
    fn label_at_finds_rows() {
        let measurer = HeuristicTextMeasurer::default();
        let legend = LegendSwatchesSpec::new(1, items()).at(0.0, 0.0);
        // Rows are 10 tall with a 6 gap: row 2 spans y in [32, 42].
        assert_eq!(legend.label_at(Point::new(2.0, 37.0), &measurer), Some("CC"));
        assert_eq!(legend.label_at(Point::new(2.0, 29.0), &measurer), None);
        assert_eq!(legend.label_at(Point::new(500.0, 5.0), &measurer), None);
    }

    #[test]
    fn from_domain_applies_visibility_filter() {
        let domain: Vec<String> = ["x", "y", "z"].iter().map(|s| String::from(*s)).collect();
        let colors = OrdinalColorScale::new(ColorScheme::Css, domain.clone());
        let visible = vec![String::from("z"), String::from("x")];

        let all = LegendItem::from_domain(&domain, &colors, None);
        let some = LegendItem::from_domain(&domain, &colors, Some(&visible));

        assert_eq!(all.len(), 3);
        let labels: Vec<_> = some.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["x", "z"]);
        assert_eq!(some[1].fill, Brush::Solid(css::MEDIUM_SEA_GREEN));
    }
}
