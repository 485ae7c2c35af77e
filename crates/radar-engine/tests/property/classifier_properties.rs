use proptest::prelude::*;
use radar_core::{Dimension, Level, RiskVector};
use radar_engine::classifier::{classify, tier_for_max};

fn arb_vector() -> impl Strategy<Value = RiskVector> {
    prop::array::uniform5(0u8..=4).prop_map(|values| RiskVector::from_values(values).unwrap())
}

fn arb_dimension() -> impl Strategy<Value = Dimension> {
    prop::sample::select(Dimension::ALL.to_vec())
}

proptest! {
    #[test]
    fn raising_one_dimension_never_lowers_the_tier(
        vector in arb_vector(),
        dimension in arb_dimension(),
    ) {
        let raised = vector.with_level(dimension, vector.get(dimension).raised());
        prop_assert!(classify(&raised) >= classify(&vector));
    }

    #[test]
    fn tier_depends_only_on_the_maximum(
        vector in arb_vector(),
        dimension in arb_dimension(),
    ) {
        // Move the maximum onto `dimension`, zero everything else.
        let max = vector.max_level();
        let reshaped = RiskVector::zero().with_level(dimension, max);
        prop_assert_eq!(classify(&vector), classify(&reshaped));
        prop_assert_eq!(classify(&vector), tier_for_max(max.value()));
    }

    #[test]
    fn tier_is_order_independent(values in prop::array::uniform5(0u8..=4)) {
        let mut reversed = values;
        reversed.reverse();
        let a = RiskVector::from_values(values).unwrap();
        let b = RiskVector::from_values(reversed).unwrap();
        prop_assert_eq!(classify(&a), classify(&b));
    }

    #[test]
    fn tier_stays_in_range(vector in arb_vector()) {
        prop_assert!(classify(&vector).index() < 4);
    }
}

#[test]
fn exhaustive_monotonicity_over_all_vectors() {
    // 5^5 = 3125 vectors; small enough to check every one.
    for n in 0..3125u32 {
        let mut values = [0u8; 5];
        let mut rest = n;
        for slot in values.iter_mut() {
            *slot = (rest % 5) as u8;
            rest /= 5;
        }
        let vector = RiskVector::from_values(values).unwrap();
        for dimension in Dimension::ALL {
            let level = vector.get(dimension);
            if level == Level::MAX {
                continue;
            }
            let raised = vector.with_level(dimension, level.raised());
            assert!(classify(&raised) >= classify(&vector));
        }
    }
}
