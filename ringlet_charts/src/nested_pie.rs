// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested pie (multi-ring donut) chart presenter.
//!
//! Each [`NestedPieSeries`] becomes one ring. Ring radii come from the radius normalizer, slice
//! angles from the pie arc layout, and colors from an ordinal scale over the labels of every
//! ring. Slices that share a display label share a color, and a legend gesture on that label
//! (de)activates all of them at once.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use peniko::{Brush, Color};
use ringlet_core::{Mark, MarkId};

use crate::color::{ColorScheme, OrdinalColorScale};
use crate::domain::nested_domain;
use crate::event::ChartEvent;
use crate::label::{LabelFormatter, SliceLabel, default_label, trim_label};
use crate::layout::{ChartLayout, LegendOrient, Margins, Size};
use crate::legend::{LegendItem, LegendSwatches, LegendSwatchesSpec};
use crate::measure::TextMeasurer;
use crate::model::{ItemError, NestedPieSeries, SeriesItem};
use crate::pie::{PieArc, pie_arcs};
use crate::presenter::{ChartPresenter, HitTarget, arrange_view};
use crate::radius::{RadialRing, available_radius, normalize_rings};
use crate::slice_mark::SliceMark;
use crate::selection::{ActiveEntries, SelectionTracker};
use crate::style::StrokeStyle;

const LEGEND_NS: u64 = 1;
const LABEL_TEXT_NS: u64 = 2;
const LABEL_LINE_NS: u64 = 3;
// Ring `i` (outermost first) uses namespace `SLICE_NS + i`.
const SLICE_NS: u64 = 16;

/// Margins used with labels on and no explicit margins.
pub const LABEL_MARGINS: Margins = Margins::from_array([30.0, 80.0, 30.0, 80.0]);
/// Margins used with labels off and no explicit margins.
pub const PLAIN_MARGINS: Margins = Margins::uniform(20.0);

/// Options for [`NestedPieChart`].
#[derive(Clone, Debug)]
pub struct NestedPieOptions {
    /// Draw slice labels on the outermost ring.
    pub labels: bool,
    /// Show the legend.
    pub legend: bool,
    /// Legend title; empty for none.
    pub legend_title: String,
    /// Legend position relative to the plot.
    pub legend_position: LegendOrient,
    /// Scale slice radii by value on solid (zero inner radius) rings.
    pub explode_slices: bool,
    /// Shorten labels longer than `max_label_length`.
    pub trim_labels: bool,
    /// Maximum label length in characters when trimming.
    pub max_label_length: usize,
    /// Label text for an item.
    pub label_formatter: LabelFormatter,
    /// Label font size.
    pub label_font_size: f64,
    /// Label text and leader line paint.
    pub label_fill: Brush,
    /// If set, only these labels appear in the legend.
    pub visibility_legends: Option<Vec<String>>,
    /// Explicit margins; when unset they depend on `labels`.
    pub margins: Option<Margins>,
    /// Palette for the ordinal color scale.
    pub scheme: ColorScheme,
    /// Per-label color overrides.
    pub custom_colors: Vec<(String, Color)>,
    /// Alpha multiplier for slices outside a non-empty active set.
    pub inactive_alpha: f32,
    /// Slice outline.
    pub stroke: StrokeStyle,
}

impl Default for NestedPieOptions {
    fn default() -> Self {
        Self {
            labels: false,
            legend: false,
            legend_title: String::from("Legend"),
            legend_position: LegendOrient::Right,
            explode_slices: false,
            trim_labels: true,
            max_label_length: 10,
            label_formatter: default_label,
            label_font_size: 11.0,
            label_fill: css::DIM_GRAY.into(),
            visibility_legends: None,
            margins: None,
            scheme: ColorScheme::default(),
            custom_colors: Vec::new(),
            inactive_alpha: 0.3,
            stroke: StrokeStyle::default(),
        }
    }
}

impl NestedPieOptions {
    /// Enables or disables slice labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

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

    /// Enables or disables exploded slices.
    pub fn with_explode_slices(mut self, explode: bool) -> Self {
        self.explode_slices = explode;
        self
    }

    /// Enables or disables label trimming.
    pub fn with_trim_labels(mut self, trim: bool) -> Self {
        self.trim_labels = trim;
        self
    }

    /// Sets the maximum label length used when trimming.
    pub fn with_max_label_length(mut self, max: usize) -> Self {
        self.max_label_length = max;
        self
    }

    /// Sets the label formatter.
    pub fn with_label_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.label_formatter = formatter;
        self
    }

    /// Restricts the legend to `labels`.
    pub fn with_visibility_legends(mut self, labels: Vec<String>) -> Self {
        self.visibility_legends = Some(labels);
        self
    }

    /// Sets explicit margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
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

    /// Sets the alpha multiplier for inactive slices.
    pub fn with_inactive_alpha(mut self, alpha: f32) -> Self {
        self.inactive_alpha = alpha;
        self
    }

    /// Sets the slice outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    fn resolved_margins(&self) -> Margins {
        match self.margins {
            Some(m) => m,
            None if self.labels => LABEL_MARGINS,
            None => PLAIN_MARGINS,
        }
    }
}

/// A nested pie chart.
#[derive(Clone, Debug)]
pub struct NestedPieChart {
    results: Vec<NestedPieSeries>,
    options: NestedPieOptions,
    selection: SelectionTracker,
    rings: Vec<RadialRing>,
    domain: Vec<String>,
    colors: OrdinalColorScale,
    layout: ChartLayout,
    legend: Option<LegendSwatches>,
    radius: f64,
}

impl NestedPieChart {
    /// Creates a chart over `results`. Call [`ChartPresenter::update`] before rendering.
    pub fn new(results: Vec<NestedPieSeries>, options: NestedPieOptions) -> Self {
        let mut chart = Self {
            results: Vec::new(),
            options,
            selection: SelectionTracker::new(),
            rings: Vec::new(),
            domain: Vec::new(),
            colors: OrdinalColorScale::default(),
            layout: ChartLayout::default(),
            legend: None,
            radius: 0.0,
        };
        chart.set_results(results);
        chart
    }

    /// Replaces the chart data. The active set is kept.
    ///
    /// Items are sanitized on the way in; call [`ChartPresenter::update`] afterwards.
    pub fn set_results(&mut self, mut results: Vec<NestedPieSeries>) {
        for group in &mut results {
            group.sanitize();
        }
        self.results = results;
    }

    /// Replaces the options; call [`ChartPresenter::update`] afterwards.
    pub fn set_options(&mut self, options: NestedPieOptions) {
        self.options = options;
    }

    /// The chart data, in input order.
    pub fn results(&self) -> &[NestedPieSeries] {
        &self.results
    }

    /// The chart options.
    pub fn options(&self) -> &NestedPieOptions {
        &self.options
    }

    /// Normalized rings, outermost first.
    pub fn rings(&self) -> &[RadialRing] {
        &self.rings
    }

    /// The available radius from the last update.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The center all rings share.
    pub fn center(&self) -> Point {
        self.layout.center()
    }

    /// Slice geometry for one ring.
    pub fn ring_arcs(&self, ring: &RadialRing) -> Vec<PieArc> {
        pie_arcs(
            &ring.series,
            ring.inner_radius,
            ring.outer_radius,
            self.options.explode_slices,
        )
    }

    /// The current active set.
    pub fn active_entries(&self) -> &ActiveEntries {
        self.selection.entries()
    }

    /// Replaces the active set with host-provided entries.
    pub fn set_active(&mut self, entries: impl IntoIterator<Item = SeriesItem>) {
        self.selection.set_entries(entries);
    }

    /// Empties the active set. Returns `true` if anything was active.
    pub fn clear_active(&mut self) -> bool {
        self.selection.clear()
    }

    /// Pointer entered a slice of `ring`.
    ///
    /// With `ring` set, it overrides the payload's group. A payload with neither matches its
    /// name in every ring.
    pub fn activate(
        &mut self,
        item: &SeriesItem,
        ring: Option<&str>,
    ) -> Result<Option<ChartEvent>, ItemError> {
        item.validate()?;
        let records = self.results.iter().flat_map(|g| g.series.iter());
        Ok(self.selection.activate(records, item, ring, false))
    }

    /// Pointer left a slice of `ring`.
    pub fn deactivate(
        &mut self,
        item: &SeriesItem,
        ring: Option<&str>,
    ) -> Result<Option<ChartEvent>, ItemError> {
        item.validate()?;
        Ok(self.selection.deactivate(item, ring, false))
    }

    /// Pointer entered the legend row for `label`.
    pub fn legend_activate(&mut self, label: &str) -> Result<Option<ChartEvent>, ItemError> {
        let item = SeriesItem::new(label, 0.0);
        item.validate()?;
        let records = self.results.iter().flat_map(|g| g.series.iter());
        Ok(self.selection.activate(records, &item, None, true))
    }

    /// Pointer left the legend row for `label`.
    pub fn legend_deactivate(&mut self, label: &str) -> Result<Option<ChartEvent>, ItemError> {
        let item = SeriesItem::new(label, 0.0);
        item.validate()?;
        Ok(self.selection.deactivate(&item, None, true))
    }

    /// Double click on a slice, passed through to the host.
    pub fn double_click(&self, item: &SeriesItem) -> Result<Option<ChartEvent>, ItemError> {
        item.validate()?;
        Ok(Some(ChartEvent::DoubleClick(item.clone())))
    }

    fn label_text(&self, item: &SeriesItem) -> String {
        let text = (self.options.label_formatter)(item);
        if self.options.trim_labels {
            trim_label(&text, self.options.max_label_length)
        } else {
            text
        }
    }

    fn slice_fill(&self, item: &SeriesItem) -> Color {
        let color = self.colors.color(item.display_label());
        let active = self.selection.entries();
        if active.is_empty() || active.contains(item) {
            color
        } else {
            color.multiply_alpha(self.options.inactive_alpha)
        }
    }
}

impl ChartPresenter for NestedPieChart {
    fn update(&mut self, view: Size, measurer: &dyn TextMeasurer) {
        let opts = &self.options;
        self.domain = nested_domain(&self.results);
        self.colors = OrdinalColorScale::new(opts.scheme, self.domain.clone())
            .with_custom_colors(opts.custom_colors.clone());

        let legend = opts.legend.then(|| {
            let items = LegendItem::from_domain(
                &self.domain,
                &self.colors,
                opts.visibility_legends.as_deref(),
            );
            let mut spec = LegendSwatchesSpec::new(MarkId::child(LEGEND_NS, 0).0, items);
            if !opts.legend_title.is_empty() {
                spec = spec.with_title(opts.legend_title.clone());
            }
            (spec, opts.legend_position)
        });
        let (layout, legend) = arrange_view(view, opts.resolved_margins(), legend, measurer);

        self.radius = available_radius(layout.plot.width(), layout.plot.height(), opts.labels);
        self.rings = normalize_rings(&self.results, self.radius, opts.labels);
        self.layout = layout;
        self.legend = legend;
        log::debug!(
            "nested pie: {} rings, radius {:.1}, center {:?}",
            self.rings.len(),
            self.radius,
            self.layout.center()
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
        let center = self.center();
        let leader = StrokeStyle::solid(self.options.label_fill.clone(), 1.0);
        let mut out = Vec::new();

        for (ring_index, ring) in self.rings.iter().enumerate() {
            for arc in self.ring_arcs(ring) {
                let item = &ring.series[arc.index];
                let id = MarkId::child(SLICE_NS + ring_index as u64, arc.index as u64);
                out.push(
                    SliceMark::new(id, center, arc, self.slice_fill(item))
                        .with_stroke(self.options.stroke.clone())
                        .mark(),
                );

                if !ring.show_labels {
                    continue;
                }
                let Some(label) = SliceLabel::place(center, &arc, self.label_text(item)) else {
                    continue;
                };
                out.extend(label.marks(
                    MarkId::child(LABEL_TEXT_NS, arc.index as u64),
                    MarkId::child(LABEL_LINE_NS, arc.index as u64),
                    self.options.label_fill.clone(),
                    &leader,
                    self.options.label_font_size,
                ));
            }
        }

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

        let center = self.center();
        // Inner rings paint over outer ones.
        self.rings.iter().rev().find_map(|ring| {
            self.ring_arcs(ring)
                .into_iter()
                .find(|arc| arc.contains(center, pos))
                .map(|arc| HitTarget::Item {
                    group: Some(ring.name.clone()),
                    item: ring.series[arc.index].clone(),
                })
        })
    }
}
