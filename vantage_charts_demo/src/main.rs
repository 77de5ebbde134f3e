// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D chart demos for `vantage_charts`.
mod html;
mod svg;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::Color;
use peniko::color::palette::css;
use vantage_charts::{
    ChartArea3, ChartType, DataPoint3, Pass, ScaleLinear, Series, default_series_fills,
};
use vantage_scene::{LightStyle, Scene3};

fn main() {
    let sections = vec![
        clustered_columns_demo(),
        stacked_columns_demo(),
        perspective_demo(),
        right_angle_axes_demo(),
    ];

    let html = html::render_report("Vantage 3D charts demo", &sections);
    std::fs::write("vantage_charts_demo.html", html).expect("write vantage_charts_demo.html");
    println!("wrote vantage_charts_demo.html");
}

fn plot_rect() -> Rect {
    Rect::new(40.0, 20.0, 360.0, 200.0)
}

fn demo_area(scene: Scene3, series: Vec<Series>, clustered: bool) -> ChartArea3 {
    let plot = plot_rect();
    let x = ScaleLinear::new((0.0, 6.0), (plot.x0, plot.x1));
    let y = ScaleLinear::new((0.0, 10.0), (plot.y1, plot.y0));
    let fills = default_series_fills(series.len());

    let mut area = ChartArea3::new(scene, plot, x.into(), y.into()).with_clustered(clustered);
    for (s, fill) in series.into_iter().zip(fills) {
        area.push_series(s.with_fill(fill));
    }
    area
}

/// Projects and paints one pass: hidden walls first, then every bar face in
/// draw order, optionally the solved center of projection as a marker.
fn render_pass(area: &mut ChartArea3, pass: &Pass, mark_cop: bool) -> String {
    let plot = plot_rect();
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(plot.inflate(30.0, 30.0));

    // The scene box spans the plot rectangle and the allocated depth. The
    // walls opposite the visible ones sit behind all content.
    let walls = DataPoint3 {
        x_position: plot.x0,
        x_center: plot.center().x,
        width: plot.width(),
        y_position: plot.y0,
        height: plot.height(),
        z_position: 0.0,
        depth: pass.total_depth(),
        series: 0,
        point: 0,
        indexed_series: false,
    };
    for surface in pass.visible_surfaces().iter() {
        let corners = walls.face(surface.opposite());
        scene.push_outlined_polygon(
            project(pass, corners),
            css::GAINSBORO,
            css::DARK_GRAY.with_alpha(0.4),
            1.0,
        );
    }

    let fills: Vec<Color> = area.series().iter().map(|s| solid(&s.fill)).collect();
    for point in area.draw_points(pass) {
        let base = fills.get(point.series).copied().unwrap_or(css::GRAY);
        for (_, corners) in point.visible_faces(pass.visible_surfaces()) {
            let brightness = pass
                .projection()
                .surface_brightness(corners[0], corners[1], corners[2]);
            scene.push_outlined_polygon(
                project(pass, corners),
                shade(base, brightness),
                css::BLACK.with_alpha(0.3),
                0.5,
            );
        }
    }

    if mark_cop {
        let cop = pass.center_of_projection();
        if cop.x.is_finite() && cop.y.is_finite() {
            scene.push_marker(Point::new(cop.x, cop.y), 3.0, css::CRIMSON);
        }
    }

    scene.to_svg_string()
}

fn project(pass: &Pass, corners: [vantage_scene::Point3; 4]) -> Vec<Point> {
    corners
        .into_iter()
        .map(|c| pass.projection().transform_point(c).to_point())
        .collect()
}

fn solid(brush: &Brush) -> Color {
    match brush {
        Brush::Solid(color) => *color,
        _ => css::GRAY,
    }
}

fn shade(color: Color, brightness: f64) -> Color {
    let rgba = color.to_rgba8();
    let scale = |v: u8| -> u8 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "brightness is clamped so the product stays in 0..=255"
        )]
        let out = (f64::from(v) * brightness.clamp(0.0, 1.0)).round() as u8;
        out
    };
    Color::from_rgba8(scale(rgba.r), scale(rgba.g), scale(rgba.b), rgba.a)
}

fn clustered_columns_demo() -> html::HtmlSection {
    let scene = Scene3::new(30.0, 30.0, 100.0)
        .expect("scene parameters")
        .with_light(LightStyle::Simplistic);
    let series = vec![
        Series::new("alpha", ChartType::Column).with_values(vec![
            (1.0, 4.0),
            (2.0, 6.0),
            (3.0, 3.0),
            (4.0, 7.0),
            (5.0, 5.0),
        ]),
        Series::new("beta", ChartType::Column).with_values(vec![
            (1.0, 2.0),
            (2.0, 5.0),
            (3.0, 6.0),
            (4.0, 3.0),
            (5.0, 4.0),
        ]),
        Series::new("gamma", ChartType::Column).with_values(vec![
            (1.0, 5.0),
            (2.0, 2.0),
            (3.0, 4.0),
            (4.0, 6.0),
            (5.0, 2.0),
        ]),
    ];

    let mut area = demo_area(scene, series, true);
    let pass = area.begin_pass();
    let svg = render_pass(&mut area, &pass, false);

    html::HtmlSection {
        title: "Clustered columns",
        description: "Three column series share one depth slot; bars split the x band side by side and the draw order sweeps across the rotation.",
        svg,
    }
}

fn stacked_columns_demo() -> html::HtmlSection {
    let scene = Scene3::new(30.0, -30.0, 100.0)
        .expect("scene parameters")
        .with_light(LightStyle::Realistic);
    let series = vec![
        Series::new("south", ChartType::StackedColumn)
            .with_stack_group("region")
            .with_values(vec![(1.0, 2.0), (2.0, 3.0), (3.0, 2.5), (4.0, 1.5)]),
        Series::new("north", ChartType::StackedColumn)
            .with_stack_group("region")
            .with_values(vec![(1.0, 1.5), (2.0, 2.0), (3.0, 3.0), (4.0, 2.5)]),
        Series::new("target", ChartType::Column)
            .with_values(vec![(1.0, 4.5), (2.0, 6.0), (3.0, 6.5), (4.0, 5.0)]),
    ];

    let mut area = demo_area(scene, series, false);
    let pass = area.begin_pass();
    let svg = render_pass(&mut area, &pass, false);

    html::HtmlSection {
        title: "Stacked columns",
        description: "Two series in one stack group pile up in a shared depth slot; the plain column series gets its own slot. Negative rotation mirrors the sweep, realistic lighting shades the faces.",
        svg,
    }
}

fn perspective_demo() -> html::HtmlSection {
    let scene = Scene3::new(20.0, 40.0, 100.0)
        .expect("scene parameters")
        .with_perspective(60.0)
        .expect("perspective in range")
        .with_light(LightStyle::Simplistic);
    let series = vec![
        Series::new("alpha", ChartType::Column).with_values(vec![
            (1.0, 3.0),
            (2.0, 5.0),
            (3.0, 4.0),
            (4.0, 7.0),
            (5.0, 6.0),
        ]),
        Series::new("beta", ChartType::Column).with_values(vec![
            (1.0, 6.0),
            (2.0, 4.0),
            (3.0, 5.0),
            (4.0, 2.0),
            (5.0, 3.0),
        ]),
    ];

    let mut area = demo_area(scene, series, true);
    let pass = area.begin_pass();
    let svg = render_pass(&mut area, &pass, true);

    html::HtmlSection {
        title: "Perspective",
        description: "Under perspective projection the draw order pivots around the solved center of projection (red marker): columns on either side of it sort from the edges inward.",
        svg,
    }
}

fn right_angle_axes_demo() -> html::HtmlSection {
    let scene = Scene3::new(25.0, 25.0, 100.0)
        .expect("scene parameters")
        .with_right_angle_axes(true)
        .with_light(LightStyle::Simplistic);
    let series = vec![
        Series::new("alpha", ChartType::Column).with_values(vec![
            (1.0, 5.0),
            (2.0, 3.0),
            (3.0, 6.0),
            (4.0, 4.0),
        ]),
        Series::new("beta", ChartType::Column).with_values(vec![
            (1.0, 2.0),
            (2.0, 6.0),
            (3.0, 3.0),
            (4.0, 5.0),
        ]),
    ];

    let mut area = demo_area(scene, series, false);
    let pass = area.begin_pass();
    let svg = render_pass(&mut area, &pass, false);

    html::HtmlSection {
        title: "Right-angle axes",
        description: "Oblique projection: vertical edges stay vertical and the front wall stays fixed while depth recedes as a shear.",
        svg,
    }
}
