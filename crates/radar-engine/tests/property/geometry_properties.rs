use proptest::prelude::*;
use radar_core::{Level, RiskVector};
use radar_engine::geometry::{level_radius, RadarLayout};

const LABELS: [&str; 5] = ["a", "b", "c", "d", "e"];

proptest! {
    #[test]
    fn data_points_lie_at_their_level_radius(
        values in prop::array::uniform5(0u8..=4),
        size in 120.0f64..2000.0,
    ) {
        let layout = RadarLayout::for_chart(size, 48.0, 5).unwrap();
        let vector = RiskVector::from_values(values).unwrap();
        let geometry = layout.build_for_vector(&LABELS, &vector).unwrap();
        for (point, level) in geometry.data.iter().zip(vector.levels()) {
            let expected = level_radius(layout.max_radius(), *level);
            prop_assert!((point.distance_to(layout.center()) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn every_axis_count_spaces_angles_evenly(n in 1usize..24) {
        let layout = RadarLayout::for_chart(400.0, 48.0, n).unwrap();
        let axes = layout.axes();
        prop_assert_eq!(axes.len(), n);
        let step = 360.0 / n as f64;
        for (i, axis) in axes.iter().enumerate() {
            prop_assert!((axis.angle_deg - step * i as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn level_radius_grows_with_level(radius in 1.0f64..1000.0, v in 0u8..4) {
        let lo = Level::new(v).unwrap();
        prop_assert!(level_radius(radius, lo.raised()) > level_radius(radius, lo));
    }
}
