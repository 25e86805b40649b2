// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic map presenter.
//!
//! Regions arrive pre-projected, with outlines centered on the origin. The presenter centers
//! them in the plot, colors them, and supports legend and region selection. Projection is the
//! host's job.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Shape};
use peniko::Color;
use peniko::color::palette::css;
use ringlet_core::{Mark, MarkId};

use crate::color::{ColorScheme, OrdinalColorScale};
use crate::domain::domain_of;
use crate::layout::{ChartLayout, LegendOrient, Margins, Size};
use crate::legend::{LegendItem, LegendSwatches, LegendSwatchesSpec};
use crate::measure::TextMeasurer;
use crate::model::GeoRegion;
use crate::presenter::{ChartPresenter, HitTarget, arrange_view};
use crate::style::StrokeStyle;
use crate::z_order;

const LEGEND_NS: u64 = 1;
const REGION_NS: u64 = 8;

/// Options for [`GeoMapChart`].
#[derive(Clone, Debug)]
pub struct GeoMapOptions {
    /// Show the legend.
    pub legend: bool,
    /// Legend title; empty for none.
    pub legend_title: String,
    /// Legend position relative to the plot.
    pub legend_position: LegendOrient,
    /// Margins around the plot.
    pub margins: Margins,
    /// Palette for the ordinal color scale.
    pub scheme: ColorScheme,
    /// Per-label color overrides.
    pub custom_colors: Vec<(String, Color)>,
    /// Color regions by label; otherwise every region gets `region_fill`.
    pub fill_by_label: bool,
    /// Uniform region fill.
    pub region_fill: Color,
    /// Region border.
    pub stroke: StrokeStyle,
}

impl Default for GeoMapOptions {
    fn default() -> Self {
        Self {
            legend: false,
            legend_title: String::from("Legend"),
            legend_position: LegendOrient::Right,
            margins: Margins::uniform(20.0),
            scheme: ColorScheme::default(),
            custom_colors: Vec::new(),
            fill_by_label: true,
            region_fill: Color::from_rgba8(0x44, 0x44, 0x44, 0xff),
            stroke: StrokeStyle::solid(css::WHITE, 0.5),
        }
    }
}

impl GeoMapOptions {
    /// Enables or disables the legend.
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Sets the legend title.
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    /// Sets the legend position.
    pub fn with_legend_position(mut self, position: LegendOrient) -> Self {
        self.legend_position = position;
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the color scheme.
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets per-label color overrides.
    pub fn with_custom_colors(mut self, custom: Vec<(String, Color)>) -> Self {
        self.custom_colors = custom;
        self
    }

    /// Fills every region with `fill` instead of coloring by label.
    pub fn with_uniform_fill(mut self, fill: Color) -> Self {
        self.fill_by_label = false;
        self.region_fill = fill;
        self
    }

    /// Sets the region border.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

/// A map of pre-projected regions.
#[derive(Clone, Debug)]
pub struct GeoMapChart {
    regions: Vec<GeoRegion>,
    options: GeoMapOptions,
    domain: Vec<String>,
    colors: OrdinalColorScale,
    layout: ChartLayout,
    legend: Option<LegendSwatches>,
}

impl GeoMapChart {
    /// Creates a map over `regions`. Call [`ChartPresenter::update`] before rendering.
    pub fn new(mut regions: Vec<GeoRegion>, options: GeoMapOptions) -> Self {
        for region in &mut regions {
            region.item.sanitize();
        }
        Self {
            regions,
            options,
            domain: Vec::new(),
            colors: OrdinalColorScale::default(),
            layout: ChartLayout::default(),
            legend: None,
        }
    }

    /// The regions, in input order.
    pub fn regions(&self) -> &[GeoRegion] {
        &self.regions
    }

    /// Maps region outlines into the scene.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.layout.center().to_vec2())
    }

    fn region_fill(&self, region: &GeoRegion) -> Color {
        if self.options.fill_by_label {
            self.colors.color(region.item.display_label())
        } else {
            self.options.region_fill
        }
    }
}

impl ChartPresenter for GeoMapChart {
    fn update(&mut self, view: Size, measurer: &dyn TextMeasurer) {
        let opts = &self.options;
        self.domain = domain_of(self.regions.iter().map(|r| &r.item));
        self.colors = OrdinalColorScale::new(opts.scheme, self.domain.clone())
            .with_custom_colors(opts.custom_colors.clone());

        let legend = opts.legend.then(|| {
            let items = LegendItem::from_domain(&self.domain, &self.colors, None);
            let mut spec = LegendSwatchesSpec::new(MarkId::child(LEGEND_NS, 0).0, items);
            if !opts.legend_title.is_empty() {
                spec = spec.with_title(opts.legend_title.clone());
            }
            (spec, opts.legend_position)
        });
        let (layout, legend) = arrange_view(view, opts.margins, legend, measurer);
        self.layout = layout;
        self.legend = legend;
        log::debug!(
            "geo map: {} regions, plot {:?}",
            self.regions.len(),
            self.layout.plot
        );
    }

    fn domain(&self) -> &[String] {
        &self.domain
    }

    fn colors(&self) -> &OrdinalColorScale {
        &self.colors
    }

    fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    fn legend(&self) -> Option<&LegendSwatches> {
        self.legend.as_ref()
    }

    fn marks(&self, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let transform = self.transform();
        let mut out: Vec<Mark> = self
            .regions
            .iter()
            .enumerate()
            .map(|(i, region)| {
                Mark::builder(MarkId::child(REGION_NS, i as u64))
                    .path()
                    .z_index(z_order::REGION_FILL)
                    .path_const(transform * region.outline.clone())
                    .fill_const(self.region_fill(region))
                    .stroke_brush_const(self.options.stroke.brush.clone())
                    .stroke_width_const(self.options.stroke.stroke_width)
                    .build()
            })
            .collect();
        if let Some(legend) = &self.legend {
            out.extend(legend.marks(measurer));
        }
        out
    }

    fn hit_test(&self, pos: Point, measurer: &dyn TextMeasurer) -> Option<HitTarget> {
        if let Some(label) = self
            .legend
            .as_ref()
            .and_then(|legend| legend.label_at(pos, measurer))
        {
            return Some(HitTarget::LegendLabel(String::from(label)));
        }
        let local = self.transform().inverse() * pos;
        // Later regions paint on top.
        self.regions
            .iter()
            .rev()
            .find(|region| region.outline.contains(local))
            .map(|region| HitTarget::Item {
                group: region.item.series.clone(),
                item: region.item.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{BezPath, Rect};
    use ringlet_core::MarkPayload;

    use super::*;
    use crate::event::{ChartEvent, SelectTarget};
    use crate::measure::HeuristicTextMeasurer;
    use crate::model::SeriesItem;

    fn square(x0: f64, y0: f64, size: f64) -> BezPath {
        Rect::new(x0, y0, x0 + size, y0 + size).to_path(0.1)
    }

    fn map(options: GeoMapOptions) -> GeoMapChart {
        let regions = vec![
            GeoRegion::new(SeriesItem::new("west", 3.0), square(-20.0, -10.0, 20.0)),
            GeoRegion::new(
                SeriesItem::new("e", 5.0).with_label("east"),
                square(0.0, -10.0, 20.0),
            ),
        ];
        let mut map = GeoMapChart::new(regions, options);
        map.update(Size::new(200.0, 100.0), &HeuristicTextMeasurer::default());
        map
    }

    #[test]
    fn regions_are_centered_in_the_plot() {
        let map = map(GeoMapOptions::default());
        assert_eq!(map.layout().center(), Point::new(100.0, 50.0));
        let marks = map.marks(&HeuristicTextMeasurer::default());
        assert_eq!(marks.len(), 2);
        let b = marks[0].payload.bounds().expect("region bounds");
        assert!((b.x0 - 80.0 + 0.25).abs() < 1e-9, "{b:?}");
        assert!((b.y0 - 40.0 + 0.25).abs() < 1e-9, "{b:?}");
    }

    #[test]
    fn domain_uses_display_labels() {
        let map = map(GeoMapOptions::default());
        assert_eq!(map.domain(), &[String::from("west"), String::from("east")]);
    }

    #[test]
    fn uniform_fill_ignores_labels() {
        let fill = Color::from_rgba8(0x44, 0x44, 0x44, 0xff);
        let map = map(GeoMapOptions::default().with_uniform_fill(fill));
        for mark in map.marks(&HeuristicTextMeasurer::default()) {
            let MarkPayload::Path(p) = mark.payload else {
                panic!("expected region paths only");
            };
            assert_eq!(p.fill, fill.into());
        }
    }

    #[test]
    fn hit_test_finds_regions_and_selects_them() {
        let map = map(GeoMapOptions::default());
        let measurer = HeuristicTextMeasurer::default();
        let Some(HitTarget::Item { item, .. }) = map.hit_test(Point::new(110.0, 50.0), &measurer)
        else {
            panic!("expected the east region");
        };
        assert_eq!(item.name, "e");
        assert_eq!(
            map.select(&item),
            Ok(Some(ChartEvent::Select(SelectTarget::Item(item.clone()))))
        );
        assert_eq!(map.hit_test(Point::new(5.0, 5.0), &measurer), None);
    }

    #[test]
    fn legend_rows_are_hit_targets() {
        let map = map(GeoMapOptions::default().with_legend(true));
        let legend = map.legend().expect("legend is shown");
        let measurer = HeuristicTextMeasurer::default();
        let bounds = legend.bounds(&measurer);
        // The first row sits right under the title.
        let row = Point::new(bounds.x0 + 2.0, bounds.y0 + 12.0 + 6.0 + 5.0);
        assert_eq!(
            map.hit_test(row, &measurer),
            Some(HitTarget::LegendLabel(String::from("west")))
        );
        assert_eq!(
            map.legend_select("west"),
            ChartEvent::Select(SelectTarget::Label(String::from("west")))
        );
    }
}
