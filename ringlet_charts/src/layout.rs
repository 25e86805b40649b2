// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for charts.
//!
//! - **Measure**: the legend reports its desired size.
//! - **Arrange**: margins and the legend are carved out of the view; what remains is the plot
//!   rectangle, and radial charts center themselves in it.

use kurbo::{Point, Rect};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-side margins around the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// The same margin on every side.
    pub const fn uniform(m: f64) -> Self {
        Self {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }

    /// Margins in CSS order: `[top, right, bottom, left]`.
    pub const fn from_array([top, right, bottom, left]: [f64; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Legend orientation relative to the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LegendOrient {
    /// Place the legend to the left of the plot.
    Left,
    /// Place the legend to the right of the plot.
    #[default]
    Right,
    /// Place the legend above the plot.
    Top,
    /// Place the legend below the plot.
    Bottom,
}

/// Legend placement options (orientation + offset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendPlacement {
    /// Legend orientation.
    pub orient: LegendOrient,
    /// Gap between the plot and the legend.
    pub offset: f64,
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self {
            orient: LegendOrient::Right,
            offset: 18.0,
        }
    }
}

impl LegendPlacement {
    /// Placement with the default offset.
    pub fn new(orient: LegendOrient) -> Self {
        Self {
            orient,
            ..Self::default()
        }
    }
}

/// Layout inputs: the view, its margins, and an optional measured legend.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// Outer chart bounds.
    pub view_size: Size,
    /// Space kept clear around the plot (and legend).
    pub margins: Margins,
    /// An optional legend, given by its desired size and placement.
    pub legend: Option<(Size, LegendPlacement)>,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// The plot rectangle.
    pub plot: Rect,
    /// Legend placement rectangle (if any).
    pub legend: Option<Rect>,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            view: Rect::ZERO,
            plot: Rect::ZERO,
            legend: None,
        }
    }
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    ///
    /// Negative inputs are clamped to zero, and the plot never has negative extent.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let view_w = spec.view_size.width.max(0.0);
        let view_h = spec.view_size.height.max(0.0);
        let m = spec.margins;

        let mut margin_left = m.left.max(0.0);
        let mut margin_right = m.right.max(0.0);
        let mut margin_top = m.top.max(0.0);
        let mut margin_bottom = m.bottom.max(0.0);

        if let Some((legend_size, placement)) = spec.legend {
            let offset = placement.offset.max(0.0);
            match placement.orient {
                LegendOrient::Left => margin_left += legend_size.width.max(0.0) + offset,
                LegendOrient::Right => margin_right += legend_size.width.max(0.0) + offset,
                LegendOrient::Top => margin_top += legend_size.height.max(0.0) + offset,
                LegendOrient::Bottom => margin_bottom += legend_size.height.max(0.0) + offset,
            }
        }

        let plot_w = (view_w - margin_left - margin_right).max(0.0);
        let plot_h = (view_h - margin_top - margin_bottom).max(0.0);
        let plot = Rect::new(
            margin_left,
            margin_top,
            margin_left + plot_w,
            margin_top + plot_h,
        );

        let legend = spec
            .legend
            .map(|(legend_size, placement)| legend_rect(plot, legend_size, placement));

        Self {
            view: Rect::new(0.0, 0.0, view_w, view_h),
            plot,
            legend,
        }
    }

    /// The center of the plot rectangle, where radial charts are anchored.
    pub fn center(&self) -> Point {
        self.plot.center()
    }
}

fn legend_rect(plot: Rect, size: Size, placement: LegendPlacement) -> Rect {
    let w = size.width.max(0.0);
    let h = size.height.max(0.0);
    let offset = placement.offset.max(0.0);

    match placement.orient {
        LegendOrient::Right => Rect::new(
            plot.x1 + offset,
            plot.y0,
            plot.x1 + offset + w,
            plot.y0 + h,
        ),
        LegendOrient::Left => {
            let x1 = plot.x0 - offset;
            Rect::new(x1 - w, plot.y0, x1, plot.y0 + h)
        }
        LegendOrient::Top => {
            let y1 = plot.y0 - offset;
            Rect::new(plot.x0, y1 - h, plot.x0 + w, y1)
        }
        LegendOrient::Bottom => {
            let y0 = plot.y1 + offset;
            Rect::new(plot.x0, y0, plot.x0 + w, y0 + h)
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn margins_shrink_the_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size::new(400.0, 300.0),
            margins: Margins::from_array([30.0, 80.0, 30.0, 80.0]),
            legend: None,
        });
        assert_eq!(layout.plot, Rect::new(80.0, 30.0, 320.0, 270.0));
        assert_eq!(layout.center(), Point::new(200.0, 150.0));
        assert_eq!(layout.legend, None);
    }

    #[test]
    fn right_legend_takes_width_from_the_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size::new(400.0, 300.0),
            margins: Margins::uniform(20.0),
            legend: Some((Size::new(60.0, 40.0), LegendPlacement::new(LegendOrient::Right))),
        });
        // 400 - 20 - 20 - 60 - 18
        assert!((layout.plot.width() - 282.0).abs() < 1e-9);
        let legend = layout.legend.expect("legend rect");
        assert!((legend.x0 - (layout.plot.x1 + 18.0)).abs() < 1e-9);
        assert!((legend.y0 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bottom_legend_sits_below_the_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size::new(200.0, 200.0),
            margins: Margins::uniform(10.0),
            legend: Some((Size::new(50.0, 30.0), LegendPlacement::new(LegendOrient::Bottom))),
        });
        let legend = layout.legend.expect("legend rect");
        assert!((legend.y0 - (layout.plot.y1 + 18.0)).abs() < 1e-9);
        assert!((layout.plot.height() - (200.0 - 20.0 - 30.0 - 18.0)).abs() < 1e-9);
    }

    #[test]
    fn oversized_margins_collapse_the_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size::new(50.0, 50.0),
            margins: Margins::uniform(40.0),
            legend: None,
        });
        assert_eq!(layout.plot.width(), 0.0);
        assert_eq!(layout.plot.height(), 0.0);
    }
}
