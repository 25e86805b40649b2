// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use peniko::Brush;
use ringlet_core::{MarkDiff, MarkPayload, Scene};

use crate::{
    ChartEvent, ChartPresenter, HeuristicTextMeasurer, HitTarget, NestedPieChart,
    NestedPieOptions, NestedPieSeries, SeriesItem, Size,
};

fn two_rings() -> Vec<NestedPieSeries> {
    vec![
        NestedPieSeries::new(
            "inner",
            0.0,
            0.5,
            vec![SeriesItem::new("A", 1.0), SeriesItem::new("C", 3.0)],
        ),
        NestedPieSeries::new(
            "outer",
            0.6,
            1.0,
            vec![SeriesItem::new("A", 1.0), SeriesItem::new("B", 1.0)],
        ),
    ]
}

fn updated(
    results: Vec<NestedPieSeries>,
    options: NestedPieOptions,
    view: Size,
) -> NestedPieChart {
    let mut chart = NestedPieChart::new(results, options);
    chart.update(view, &HeuristicTextMeasurer::default());
    chart
}

fn path_fill_alphas(chart: &NestedPieChart) -> Vec<f32> {
    chart
        .marks(&HeuristicTextMeasurer::default())
        .into_iter()
        .filter_map(|m| match m.payload {
            MarkPayload::Path(p) => match p.fill {
                Brush::Solid(c) => Some(c.components[3]),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[test]
fn default_margins_depend_on_labels() {
    let view = Size::new(400.0, 300.0);

    let labelled = updated(two_rings(), NestedPieOptions::default().with_labels(true), view);
    assert_eq!(labelled.layout().plot, Rect::new(80.0, 30.0, 320.0, 270.0));
    assert_eq!(labelled.center(), Point::new(200.0, 150.0));
    assert_eq!(labelled.radius(), 80.0);

    let plain = updated(two_rings(), NestedPieOptions::default(), view);
    assert_eq!(plain.layout().plot, Rect::new(20.0, 20.0, 380.0, 280.0));
    assert_eq!(plain.center(), Point::new(200.0, 150.0));
    assert_eq!(plain.radius(), 130.0);
}

#[test]
fn rings_are_normalized_and_sorted_on_update() {
    let results = vec![
        NestedPieSeries::new("a", 0.2, 0.5, vec![SeriesItem::new("x", 1.0)]),
        NestedPieSeries::new("b", 0.1, 0.9, vec![SeriesItem::new("y", 1.0)]),
    ];
    // 240 - 2 * 20 leaves a 200 plot, so R = 100.
    let chart = updated(results, NestedPieOptions::default(), Size::new(240.0, 240.0));
    let radii: Vec<_> = chart
        .rings()
        .iter()
        .map(|r| (r.inner_radius, r.outer_radius))
        .collect();
    assert_eq!(radii, vec![(10.0, 90.0), (20.0, 50.0)]);
    assert_eq!(chart.rings()[0].name, "b");
}

#[test]
fn tiny_views_use_ratios_verbatim() {
    let results = vec![NestedPieSeries::new("a", 0.5, 40.0, vec![SeriesItem::new("x", 1.0)])];
    let chart = updated(results, NestedPieOptions::default(), Size::new(30.0, 30.0));
    assert_eq!(chart.radius(), 0.0);
    assert_eq!(chart.rings()[0].inner_radius, 0.5);
    assert_eq!(chart.rings()[0].outer_radius, 40.0);
}

#[test]
fn slices_cover_every_ring() {
    let chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    for ring in chart.rings() {
        let arcs = chart.ring_arcs(ring);
        let sweep: f64 = arcs.iter().map(|a| a.sweep()).sum();
        assert!((sweep - core::f64::consts::TAU).abs() < 1e-9, "{}", ring.name);
    }
    // Two slices per ring, no labels, no legend.
    assert_eq!(chart.marks(&HeuristicTextMeasurer::default()).len(), 4);
}

#[test]
fn legend_activation_spans_rings_and_reverts() {
    let mut chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));

    let event = chart.legend_activate("A").expect("valid label");
    let Some(ChartEvent::Activate { value, entries }) = event else {
        panic!("expected an activate event, got {event:?}");
    };
    assert_eq!(value.name, "A");
    let groups: Vec<_> = entries
        .iter()
        .map(|i| i.series.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(groups, vec!["inner", "outer"]);

    assert_eq!(chart.legend_activate("A"), Ok(None));

    let event = chart.legend_deactivate("A").expect("valid label");
    assert!(matches!(event, Some(ChartEvent::Deactivate { .. })));
    assert!(chart.active_entries().is_empty());
}

#[test]
fn activating_a_slice_twice_keeps_one_entry() {
    let mut chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    let a = SeriesItem::new("A", 1.0);
    assert!(chart.activate(&a, Some("outer")).expect("valid").is_some());
    assert!(chart.activate(&a, Some("outer")).expect("valid").is_none());
    assert_eq!(chart.active_entries().len(), 1);
    assert_eq!(
        chart.active_entries().as_slice()[0].series.as_deref(),
        Some("outer")
    );
}

#[test]
fn bare_payload_activates_by_name() {
    let mut chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    let b = SeriesItem::new("B", 1.0);
    assert!(chart.activate(&b, None).expect("valid").is_some());
    assert_eq!(chart.activate(&b, None), Ok(None));
    assert_eq!(chart.active_entries().len(), 1);
    assert_eq!(chart.active_entries().as_slice()[0].name, "B");

    // A appears in both rings, so a bare A lights up both slices.
    let a = SeriesItem::new("A", 1.0);
    chart.activate(&a, None).expect("valid");
    assert_eq!(chart.active_entries().len(), 3);
    chart.deactivate(&a, None).expect("valid");
    assert_eq!(chart.active_entries().len(), 1);
}

#[test]
fn legend_round_trip_over_an_active_slice_clears_it() {
    let mut chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    chart
        .activate(&SeriesItem::new("A", 1.0), Some("outer"))
        .expect("valid");
    chart.legend_activate("A").expect("valid label");
    chart.legend_deactivate("A").expect("valid label");
    assert!(chart.active_entries().is_empty());
}

#[test]
fn inactive_slices_fade() {
    let mut chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    assert!(path_fill_alphas(&chart).iter().all(|a| *a == 1.0));

    chart.activate(&SeriesItem::new("B", 1.0), Some("outer")).expect("valid");
    let alphas = path_fill_alphas(&chart);
    // Marks run outermost ring first: A, B, then inner A, C.
    assert_eq!(alphas.len(), 4);
    assert!((alphas[0] - 0.3).abs() < 1e-6);
    assert_eq!(alphas[1], 1.0);
    assert!((alphas[2] - 0.3).abs() < 1e-6);
    assert!((alphas[3] - 0.3).abs() < 1e-6);

    assert!(chart.clear_active());
    assert!(path_fill_alphas(&chart).iter().all(|a| *a == 1.0));
}

#[test]
fn selection_changes_only_update_marks() {
    let measurer = HeuristicTextMeasurer::default();
    let mut chart = updated(
        two_rings(),
        NestedPieOptions::default().with_labels(true).with_legend(true),
        Size::new(400.0, 300.0),
    );
    let mut scene = Scene::new();
    let entered = scene.tick(chart.marks(&measurer));
    assert!(entered.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));

    chart.legend_activate("A").expect("valid label");
    let diffs = scene.tick(chart.marks(&measurer));
    // B and C fade; nothing enters or exits.
    assert_eq!(diffs.len(), 2);
    assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Update { .. })));
}

#[test]
fn hit_test_maps_points_to_ring_items() {
    let measurer = HeuristicTextMeasurer::default();
    let mut chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    let c = chart.center();

    // Outer ring spans 60..100; A covers the right half.
    let right = c + Vec2::new(80.0, 0.0);
    let Some(HitTarget::Item { group, item }) = chart.hit_test(right, &measurer) else {
        panic!("expected an outer slice");
    };
    assert_eq!(group.as_deref(), Some("outer"));
    assert_eq!(item.name, "A");

    // Inner ring spans 0..50; C covers everything past 3 o'clock.
    let left = c - Vec2::new(25.0, 0.0);
    let Some(HitTarget::Item { item: c_item, .. }) = chart.hit_test(left, &measurer) else {
        panic!("expected an inner slice");
    };
    assert_eq!(c_item.name, "C");

    // The gap between rings hits nothing.
    assert_eq!(chart.hit_test(c + Vec2::new(55.0, 0.0), &measurer), None);

    chart.activate(&item, group.as_deref()).expect("valid");
    assert!(chart.active_entries().contains(&item));
}

#[test]
fn double_click_and_select_pass_items_through() {
    let chart = updated(two_rings(), NestedPieOptions::default(), Size::new(240.0, 240.0));
    let item = SeriesItem::new("C", 3.0).with_series("inner");
    assert_eq!(
        chart.double_click(&item),
        Ok(Some(ChartEvent::DoubleClick(item.clone())))
    );
    assert!(chart.select(&SeriesItem::new("C", f64::NAN)).is_err());
}

#[test]
fn legend_domain_spans_all_rings_in_order() {
    let chart = updated(
        two_rings(),
        NestedPieOptions::default().with_legend(true),
        Size::new(400.0, 300.0),
    );
    let labels: Vec<&str> = chart.domain().iter().map(String::as_str).collect();
    assert_eq!(labels, vec!["A", "C", "B"]);
    let legend = chart.legend().expect("legend is shown");
    assert_eq!(legend.items.len(), 3);
    assert!(legend.x > chart.layout().plot.x1);
}

#[cfg(feature = "serde")]
#[test]
fn results_load_from_camel_case_json() {
    let json = r#"[
        {
            "name": "2023",
            "innerRadiusRatio": 0.5,
            "outerRadiusRatio": 1.0,
            "series": [
                { "name": "de", "label": "Germany", "value": 40 },
                { "name": "fr", "value": 25 }
            ]
        },
        { "name": "2024", "outerRadiusRatio": 0.4, "series": [] }
    ]"#;
    let results: Vec<NestedPieSeries> = serde_json::from_str(json).expect("valid json");
    assert_eq!(results[0].inner_radius_ratio, Some(0.5));
    assert_eq!(results[1].inner_radius_ratio, None);

    let chart = updated(results, NestedPieOptions::default(), Size::new(240.0, 240.0));
    assert_eq!(chart.domain(), &[String::from("Germany"), String::from("fr")]);
    assert_eq!(
        chart.results()[0].series[1].series.as_deref(),
        Some("2023")
    );
    assert_eq!(chart.rings()[1].inner_radius, 0.0);
}
