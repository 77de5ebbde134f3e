// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `vantage_charts_demo`.

use kurbo::{Point, Rect};
use peniko::Color;

/// One filled polygon in drawing coordinates, painted in insertion order.
#[derive(Debug)]
struct Polygon {
    points: Vec<Point>,
    fill: Color,
    stroke: Option<(Color, f64)>,
}

#[derive(Debug)]
struct Marker {
    center: Point,
    radius: f64,
    fill: Color,
}

/// Collects projected polygons and dumps them as a standalone SVG string.
///
/// Insertion order is paint order, which is exactly what the draw-order
/// comparator hands us.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    polygons: Vec<Polygon>,
    markers: Vec<Marker>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn push_polygon(&mut self, points: Vec<Point>, fill: Color) {
        self.polygons.push(Polygon {
            points,
            fill,
            stroke: None,
        });
    }

    pub(crate) fn push_outlined_polygon(
        &mut self,
        points: Vec<Point>,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    ) {
        self.polygons.push(Polygon {
            points,
            fill,
            stroke: Some((stroke, stroke_width)),
        });
    }

    pub(crate) fn push_marker(&mut self, center: Point, radius: f64, fill: Color) {
        self.markers.push(Marker {
            center,
            radius,
            fill,
        });
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.content_bounds()) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Rect::new(0.0, 0.0, 100.0, 100.0),
        };
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for polygon in &self.polygons {
            out.push_str("<polygon points=\"");
            for (i, p) in polygon.points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{},{}", p.x, p.y));
            }
            out.push('"');
            write_paint_attr(&mut out, "fill", polygon.fill);
            if let Some((stroke, width)) = polygon.stroke {
                write_paint_attr(&mut out, "stroke", stroke);
                out.push_str(&format!(r#" stroke-width="{width}""#));
            }
            out.push_str("/>\n");
        }

        for marker in &self.markers {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                marker.center.x, marker.center.y, marker.radius
            ));
            write_paint_attr(&mut out, "fill", marker.fill);
            out.push_str("/>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        let mut extend = |b: Rect| {
            rect = Some(match rect {
                None => b,
                Some(r) => r.union(b),
            });
        };

        for polygon in &self.polygons {
            for p in &polygon.points {
                if p.x.is_finite() && p.y.is_finite() {
                    extend(Rect::new(p.x, p.y, p.x, p.y));
                }
            }
        }
        for marker in &self.markers {
            let (c, r) = (marker.center, marker.radius);
            extend(Rect::new(c.x - r, c.y - r, c.x + r, c.y + r));
        }

        rect.map(|r| {
            // Add a small padding margin.
            let pad = 10.0;
            Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
        })
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" {name}-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}
