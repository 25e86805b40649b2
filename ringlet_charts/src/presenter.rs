// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering contract shared by chart presenters.
//!
//! A presenter owns its inputs and derived state. The host drives it:
//! - call [`ChartPresenter::update`] whenever data or view size changes,
//! - call [`ChartPresenter::marks`] to get the current mark set (feed it to
//!   `ringlet_core::Scene::tick` for incremental repaint),
//! - map pointer input through [`ChartPresenter::hit_test`] and forward gestures to the
//!   presenter's interaction methods, which return [`ChartEvent`]s.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use ringlet_core::Mark;

use crate::color::OrdinalColorScale;
use crate::event::{ChartEvent, SelectTarget};
use crate::layout::{ChartLayout, ChartLayoutSpec, LegendOrient, LegendPlacement, Margins, Size};
use crate::legend::{LegendSwatches, LegendSwatchesSpec};
use crate::measure::TextMeasurer;
use crate::model::{ItemError, SeriesItem};

/// What lies under a pointer position.
#[derive(Clone, Debug, PartialEq)]
pub enum HitTarget {
    /// A data mark: a pie slice or a map region.
    Item {
        /// The group the item was drawn in (the ring name for nested pies).
        group: Option<String>,
        /// The chart's record for the mark.
        item: SeriesItem,
    },
    /// A legend row.
    LegendLabel(String),
}

/// Common presenter operations.
pub trait ChartPresenter {
    /// Rebuilds derived state (layout, domain, colors, geometry) for `view`.
    fn update(&mut self, view: Size, measurer: &dyn TextMeasurer);

    /// Distinct display labels, in first-seen order.
    fn domain(&self) -> &[String];

    /// The color scale built over [`ChartPresenter::domain`].
    fn colors(&self) -> &OrdinalColorScale;

    /// The last computed layout.
    fn layout(&self) -> &ChartLayout;

    /// The arranged legend, if the legend is shown.
    fn legend(&self) -> Option<&LegendSwatches>;

    /// Generates the full mark set for the current state.
    fn marks(&self, measurer: &dyn TextMeasurer) -> Vec<Mark>;

    /// Maps a scene position to the item or legend row under it.
    fn hit_test(&self, pos: Point, measurer: &dyn TextMeasurer) -> Option<HitTarget>;

    /// A click on a data mark.
    fn select(&self, item: &SeriesItem) -> Result<Option<ChartEvent>, ItemError> {
        item.validate()?;
        Ok(Some(ChartEvent::Select(SelectTarget::Item(item.clone()))))
    }

    /// A click on a legend row.
    fn legend_select(&self, label: &str) -> ChartEvent {
        ChartEvent::Select(SelectTarget::Label(String::from(label)))
    }
}

/// Runs the measure/arrange pass for a view with an optional legend.
pub(crate) fn arrange_view(
    view: Size,
    margins: Margins,
    legend: Option<(LegendSwatchesSpec, LegendOrient)>,
    measurer: &dyn TextMeasurer,
) -> (ChartLayout, Option<LegendSwatches>) {
    let measured = legend.map(|(spec, orient)| {
        let size = spec.measure(measurer);
        (spec, size, LegendPlacement::new(orient))
    });
    let layout = ChartLayout::arrange(&ChartLayoutSpec {
        view_size: view,
        margins,
        legend: measured
            .as_ref()
            .map(|(_, size, placement)| (*size, *placement)),
    });
    let legend = match (measured, layout.legend) {
        (Some((spec, _, _)), Some(rect)) => Some(spec.at(rect.x0, rect.y0)),
        _ => None,
    };
    (layout, legend)
}
