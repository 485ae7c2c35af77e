//! Radar geometry against the documented layout rules.

use radar_core::{Dimension, Level, RiskVector};
use radar_engine::geometry::{axis_angle, polar_to_cartesian, Point, RadarLayout};

const EPS: f64 = 1e-9;
const LABELS: [&str; 5] = ["Code", "Lang", "Deploy", "Data", "Blast"];

fn layout() -> RadarLayout {
    RadarLayout::for_chart(320.0, 48.0, Dimension::COUNT).unwrap()
}

#[test]
fn all_zero_vector_sits_on_the_inner_ring() {
    let layout = layout();
    let geometry = layout.build_for_vector(&LABELS, &RiskVector::zero()).unwrap();
    let expected = layout.max_radius() / 5.0;
    for p in &geometry.data {
        assert!((p.distance_to(layout.center()) - expected).abs() < EPS);
    }
}

#[test]
fn all_four_vector_sits_on_the_outer_ring() {
    let layout = layout();
    let vector = RiskVector::from_values([4, 4, 4, 4, 4]).unwrap();
    let geometry = layout.build_for_vector(&LABELS, &vector).unwrap();
    for p in &geometry.data {
        assert!((p.distance_to(layout.center()) - layout.max_radius()).abs() < EPS);
    }
}

#[test]
fn axes_are_evenly_spaced_and_first_points_up() {
    let layout = layout();
    let axes = layout.axes();
    assert_eq!(axes.len(), 5);
    for (i, axis) in axes.iter().enumerate() {
        assert!((axis.angle_deg - 72.0 * i as f64).abs() < EPS);
    }
    let up = axes[0].to;
    assert!((up.x - layout.center().x).abs() < EPS);
    assert!(up.y < layout.center().y);
}

#[test]
fn second_axis_is_clockwise_from_the_first() {
    let layout = layout();
    let axes = layout.axes();
    // In a y-down frame, clockwise from up means moving right.
    assert!(axes[1].to.x > layout.center().x);
}

#[test]
fn five_grid_rings_with_outer_ring_last() {
    let layout = layout();
    let rings = layout.grid_rings();
    assert_eq!(rings.len(), 5);
    for (i, ring) in rings.iter().enumerate() {
        assert_eq!(ring.points.len(), 5);
        let expected = layout.max_radius() * (i as f64 + 1.0) / 5.0;
        assert!((ring.radius - expected).abs() < EPS);
        assert_eq!(ring.is_outer(), i == 4);
    }
}

#[test]
fn labels_sit_beyond_the_outer_ring() {
    let layout = layout();
    let anchors = layout.label_anchors(&LABELS).unwrap();
    assert_eq!(anchors[0].text, "Code");
    for a in &anchors {
        let d = a.position.distance_to(layout.center());
        assert!((d - (layout.max_radius() + 26.0)).abs() < EPS);
    }
}

#[test]
fn level_maps_to_matching_ring() {
    let layout = layout();
    let rings = layout.grid_rings();
    let vector = RiskVector::zero().with_level(Dimension::Data, Level::new(2).unwrap());
    let geometry = layout.build_for_vector(&LABELS, &vector).unwrap();
    let data_point = geometry.data[Dimension::Data.index()];
    let ring_point = rings[2].points[Dimension::Data.index()];
    assert!(data_point.distance_to(ring_point) < EPS);
}

#[test]
fn non_five_axis_counts_are_supported() {
    let layout = RadarLayout::new(Point::new(0.0, 0.0), 10.0, 3).unwrap();
    assert!((axis_angle(1, 3) - 120.0).abs() < EPS);
    let p = layout.point(1, 10.0);
    let q = polar_to_cartesian(Point::new(0.0, 0.0), 10.0, 120.0);
    assert_eq!(p, q);
}

#[test]
fn geometry_is_deterministic() {
    let layout = layout();
    let vector = RiskVector::from_values([3, 1, 4, 0, 2]).unwrap();
    let a = layout.build_for_vector(&LABELS, &vector).unwrap();
    let b = layout.build_for_vector(&LABELS, &vector).unwrap();
    assert_eq!(a, b);
}
