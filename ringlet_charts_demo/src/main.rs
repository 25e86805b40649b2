// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders Ringlet chart demos to SVG.

mod svg;

use std::error::Error;
use std::path::{Path, PathBuf};

use kurbo::{BezPath, Point, Vec2};
use ringlet_charts::{
    ChartPresenter, GeoMapChart, GeoMapOptions, GeoRegion, HeuristicTextMeasurer, HitTarget,
    LegendOrient, NestedPieChart, NestedPieOptions, NestedPieSeries, SeriesItem, Size,
};
use ringlet_core::Scene;

const NESTED_PIE_JSON: &str = include_str!("../data/nested_pie.json");

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    nested_pie_demo(&out_dir)?;
    geo_map_demo(&out_dir)?;
    Ok(())
}

fn write_svg(dir: &Path, name: &str, svg: &str) -> Result<(), Box<dyn Error>> {
    let path = dir.join(name);
    std::fs::write(&path, svg)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn nested_pie_demo(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let measurer = HeuristicTextMeasurer::default();
    let results: Vec<NestedPieSeries> = serde_json::from_str(NESTED_PIE_JSON)?;

    let options = NestedPieOptions::default()
        .with_labels(true)
        .with_legend(true)
        .with_legend_title("Country");
    let mut chart = NestedPieChart::new(results, options);
    chart.update(Size::new(720.0, 460.0), &measurer);

    let mut scene = Scene::new();
    let mut svg = svg::SvgScene::new(chart.layout().view);
    svg.apply_diffs(&scene.tick(chart.marks(&measurer)));
    write_svg(out_dir, "nested_pie.svg", &svg.to_svg_string())?;

    // Point at the first legend row, the way a host would forward pointer input.
    let legend = chart.legend().ok_or("legend is enabled")?;
    let row = legend.bounds(&measurer).origin() + Vec2::new(2.0, legend.title_font_size + 10.0);
    if let Some(HitTarget::LegendLabel(label)) = chart.hit_test(row, &measurer)
        && let Some(event) = chart.legend_activate(&label)?
    {
        log::info!("{event:?}");
    }

    let diffs = scene.tick(chart.marks(&measurer));
    log::info!("legend activation repainted {} marks", diffs.len());
    svg.apply_diffs(&diffs);
    write_svg(out_dir, "nested_pie_active.svg", &svg.to_svg_string())?;

    // Pointer moves onto the outer ring at 3 o'clock.
    let ring = chart.rings().first().ok_or("chart has rings")?;
    let pos = chart.center() + Vec2::new(0.5 * (ring.inner_radius + ring.outer_radius), 0.0);
    if let Some(HitTarget::Item { group, item }) = chart.hit_test(pos, &measurer) {
        chart.clear_active();
        chart.activate(&item, group.as_deref())?;
        if let Some(event) = chart.double_click(&item)? {
            log::info!("{event:?}");
        }
    }
    svg.apply_diffs(&scene.tick(chart.marks(&measurer)));
    write_svg(out_dir, "nested_pie_slice.svg", &svg.to_svg_string())?;
    log::info!("{} diffs applied in total", svg.applied());
    Ok(())
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(Point::from(*p));
        } else {
            path.line_to(Point::from(*p));
        }
    }
    path.close_path();
    path
}

fn regions() -> Vec<GeoRegion> {
    vec![
        GeoRegion::new(
            SeriesItem::new("north", 12.0).with_label("North"),
            polygon(&[
                (-150.0, -120.0),
                (40.0, -130.0),
                (60.0, -40.0),
                (-130.0, -30.0),
            ]),
        ),
        GeoRegion::new(
            SeriesItem::new("east", 7.0).with_label("East"),
            polygon(&[
                (60.0, -40.0),
                (40.0, -130.0),
                (160.0, -90.0),
                (170.0, 60.0),
                (70.0, 40.0),
            ]),
        ),
        GeoRegion::new(
            SeriesItem::new("south", 9.0).with_label("South"),
            polygon(&[
                (-130.0, -30.0),
                (60.0, -40.0),
                (70.0, 40.0),
                (170.0, 60.0),
                (-60.0, 120.0),
            ]),
        ),
        GeoRegion::new(
            SeriesItem::new("west", 4.0).with_label("West"),
            polygon(&[
                (-150.0, -120.0),
                (-130.0, -30.0),
                (-60.0, 120.0),
                (-170.0, 80.0),
            ]),
        ),
    ]
}

fn geo_map_demo(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let measurer = HeuristicTextMeasurer::default();
    let mut map = GeoMapChart::new(
        regions(),
        GeoMapOptions::default()
            .with_legend(true)
            .with_legend_position(LegendOrient::Bottom),
    );
    map.update(Size::new(480.0, 400.0), &measurer);

    let mut scene = Scene::new();
    let mut svg = svg::SvgScene::new(map.layout().view);
    svg.apply_diffs(&scene.tick(map.marks(&measurer)));
    write_svg(out_dir, "geo_map.svg", &svg.to_svg_string())?;

    if let Some(HitTarget::Item { item, .. }) = map.hit_test(map.layout().center(), &measurer)
        && let Some(event) = map.select(&item)?
    {
        log::info!("{event:?}");
    }
    Ok(())
}
