// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-pipeline tests driving [`ChartArea3`] end to end: clustering, depth
//! allocation, projection, and ordering together, as a painter would use them.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;
use vantage_scene::{Scene3, Surface};

use crate::chart_area::ChartArea3;
use crate::points::DataPoint3;
use crate::scale::{ScaleContinuous, ScaleLinear};
use crate::series::{ChartType, Series};

fn scales() -> (ScaleContinuous, ScaleContinuous) {
    // 40 px per x unit, y down: y=0 at the 200 px baseline.
    let x = ScaleLinear::new((0.0, 10.0), (0.0, 400.0));
    let y = ScaleLinear::new((0.0, 10.0), (200.0, 0.0));
    (x.into(), y.into())
}

fn area(scene: Scene3, series: Vec<Series>, clustered: bool) -> ChartArea3 {
    let (x, y) = scales();
    let mut area = ChartArea3::new(scene, Rect::new(0.0, 0.0, 400.0, 200.0), x, y)
        .with_clustered(clustered);
    for s in series {
        area.push_series(s);
    }
    area
}

fn tilted() -> Scene3 {
    Scene3::new(30.0, 30.0, 100.0).unwrap()
}

/// Two stacked series in group "A" plus one plain column series.
fn mixed_series() -> Vec<Series> {
    vec![
        Series::new("s1", ChartType::StackedColumn)
            .with_stack_group("A")
            .with_values(vec![(1.0, 2.0), (2.0, 1.0), (3.0, 4.0)]),
        Series::new("s2", ChartType::Column).with_values(vec![
            (1.0, 4.0),
            (2.0, 3.0),
            (3.0, 2.0),
        ]),
        Series::new("s3", ChartType::StackedColumn)
            .with_stack_group("A")
            .with_values(vec![(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]),
    ]
}

fn find(points: &[DataPoint3], series: usize, point: usize) -> DataPoint3 {
    points
        .iter()
        .copied()
        .find(|p| p.series == series && p.point == point)
        .unwrap()
}

#[test]
fn stack_group_shares_one_depth_slot() {
    let mut area = area(tilted(), mixed_series(), false);
    assert_eq!(area.number_of_clusters(), 2);

    let s1 = area.series_z_position_and_depth(0);
    let s2 = area.series_z_position_and_depth(1);
    let s3 = area.series_z_position_and_depth(2);
    assert_eq!(s1, s3);
    assert_ne!(s1, s2);

    // Smallest x interval is 1 unit = 40 px, depth 100%: slots are 40 px
    // thick with a 32 px gap, half a gap padding each wall.
    assert_eq!(s1, (40.0, 16.0));
    assert_eq!(s2, (40.0, 88.0));
}

#[test]
fn slots_stay_inside_the_scene_depth() {
    let mut area = area(tilted(), mixed_series(), false);
    let total = area.begin_pass().total_depth();
    assert_eq!(total, 144.0);

    for series in 0..3 {
        let (depth, z) = area.series_z_position_and_depth(series);
        assert!(z >= 0.0);
        assert!(z + depth <= total);
    }
}

#[test]
fn out_of_range_series_gets_a_zero_slot() {
    let mut area = area(tilted(), mixed_series(), false);
    assert_eq!(area.series_z_position_and_depth(7), (0.0, 0.0));
}

#[test]
fn wall_visibility_flows_through_the_facade() {
    let mut area = area(tilted(), mixed_series(), false);
    let pass = area.begin_pass();
    let visible = pass.visible_surfaces();
    assert_eq!(visible.len(), 3);
    assert!(visible.contains(Surface::Front));
    assert!(visible.contains(Surface::Right));
    assert!(visible.contains(Surface::Bottom));
}

#[test]
fn parallel_pass_has_no_center_of_projection() {
    let mut area = area(tilted(), mixed_series(), false);
    let cop = area.begin_pass().center_of_projection();
    assert!(cop.x.is_nan());
    assert!(cop.y.is_nan());
    assert!(cop.z.is_nan());
}

#[test]
fn perspective_pass_solves_a_finite_center() {
    // Head-on perspective flips both axes inside the plot rectangle.
    let scene = Scene3::new(0.0, 0.0, 100.0)
        .unwrap()
        .with_perspective(50.0)
        .unwrap();
    let mut area = area(scene, mixed_series(), false);
    let pass = area.begin_pass();
    let cop = pass.center_of_projection();
    assert!(cop.x.is_finite());
    assert!(cop.y.is_finite());
    // The z axis is never solved for ordering.
    assert!(cop.z.is_nan());
}

#[test]
fn stacked_points_pile_up_cumulatively() {
    let mut area = area(tilted(), mixed_series(), false);
    let pass = area.begin_pass();
    let points = area.draw_points(&pass);
    assert_eq!(points.len(), 9);

    // s1 spans y=0..2, s3 continues y=2..5 on top of it at x=1.
    let below = find(&points, 0, 0);
    let above = find(&points, 2, 0);
    assert_eq!(below.y_position, 160.0);
    assert_eq!(below.height, 40.0);
    assert_eq!(above.y_position, 100.0);
    assert_eq!(above.height, 60.0);
    assert_eq!(above.y_position + above.height, below.y_position);

    // Both share the stack cluster's depth slot.
    assert_eq!(below.z_position, above.z_position);
    assert_eq!(below.depth, above.depth);
}

#[test]
fn plain_columns_rise_from_the_baseline() {
    let mut area = area(tilted(), mixed_series(), false);
    let pass = area.begin_pass();
    let points = area.draw_points(&pass);

    // s2 at x=1 has y=4: from the 200 px baseline up 80 px.
    let column = find(&points, 1, 0);
    assert_eq!(column.y_position, 120.0);
    assert_eq!(column.height, 80.0);
    assert_eq!(column.y_position + column.height, 200.0);
}

#[test]
fn clustered_columns_split_the_band() {
    let series = vec![
        Series::new("s1", ChartType::Column).with_values(vec![(1.0, 2.0), (2.0, 3.0)]),
        Series::new("s2", ChartType::Column).with_values(vec![(1.0, 4.0), (2.0, 1.0)]),
    ];
    let mut area = area(tilted(), series, true);
    assert_eq!(area.number_of_clusters(), 1);

    let pass = area.begin_pass();
    let points = area.draw_points(&pass);
    let left = find(&points, 0, 0);
    let right = find(&points, 1, 0);

    // One 32 px band at x=1 (40 px), split in two.
    assert_eq!(left.width, 16.0);
    assert_eq!(right.width, 16.0);
    assert_eq!(left.x_position, 24.0);
    assert_eq!(right.x_position, 40.0);
    assert_eq!(left.z_position, right.z_position);
}

#[test]
fn draw_order_is_deterministic() {
    let mut area = area(tilted(), mixed_series(), false);
    let pass = area.begin_pass();
    let first = area.draw_points(&pass);
    let second = area.draw_points(&pass);
    assert_eq!(first, second);
}

#[test]
fn hit_test_order_reverses_draw_order() {
    // Clustered columns give every point a distinct x position, so the
    // ordering keys are all distinct and the reversal is exact.
    let series = vec![
        Series::new("s1", ChartType::Column)
            .with_values(vec![(1.0, 2.0), (2.0, 3.0), (3.0, 1.0)]),
        Series::new("s2", ChartType::Column)
            .with_values(vec![(1.0, 4.0), (2.0, 1.0), (3.0, 5.0)]),
    ];
    let mut area = area(tilted(), series, true);
    let pass = area.begin_pass();

    let drawn = area.draw_points(&pass);
    let mut hit = area.hit_test_points(&pass);
    hit.reverse();
    assert_eq!(drawn, hit);

    // Two unclustered column series with identical values produce point
    // pairs whose sort keys match exactly; the hit-test list must still be
    // the element-for-element reverse of the paint list.
    let series = vec![
        Series::new("a", ChartType::Column).with_values(vec![(1.0, 2.0), (2.0, 3.0)]),
        Series::new("b", ChartType::Column).with_values(vec![(1.0, 2.0), (2.0, 3.0)]),
    ];
    let mut area = self::area(tilted(), series, false);
    let pass = area.begin_pass();

    let drawn = area.draw_points(&pass);
    let mut hit = area.hit_test_points(&pass);
    hit.reverse();
    assert_eq!(drawn, hit);
}

#[test]
fn series_change_invalidates_the_cluster_cache() {
    let mut area = area(tilted(), mixed_series(), false);
    assert_eq!(area.number_of_clusters(), 2);

    area.push_series(
        Series::new("s4", ChartType::Column).with_values(vec![(1.0, 1.0)]),
    );
    assert_eq!(area.number_of_clusters(), 3);
}
