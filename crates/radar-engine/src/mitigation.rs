//! Cumulative mitigation activation.
//!
//! Groups are numbered by tier (1..=4). A group is active when its tier
//! number is at or below the assessed tier: tier 3 requires groups 1, 2
//! and 3.

use std::collections::BTreeMap;

use serde::Serialize;

use radar_core::{MeasureKind, MitigationGroup, MitigationMeasure, TierIndex};

/// A group together with whether the current tier requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStatus<'a> {
    pub group: &'a MitigationGroup,
    pub active: bool,
}

pub fn is_group_active(group_tier: u8, tier: TierIndex) -> bool {
    tier.unlocks(group_tier)
}

/// Tag every group as active or inactive, preserving order.
pub fn partition(groups: &[MitigationGroup], tier: TierIndex) -> Vec<GroupStatus<'_>> {
    groups
        .iter()
        .map(|group| GroupStatus {
            group,
            active: is_group_active(group.tier, tier),
        })
        .collect()
}

/// All measures required at `tier`, lowest tier first.
pub fn active_measures(groups: &[MitigationGroup], tier: TierIndex) -> Vec<&MitigationMeasure> {
    groups
        .iter()
        .filter(|g| is_group_active(g.tier, tier))
        .flat_map(|g| g.measures.iter())
        .collect()
}

/// Number of required measures per kind. Every kind is present, possibly 0.
pub fn kind_breakdown(groups: &[MitigationGroup], tier: TierIndex) -> BTreeMap<MeasureKind, usize> {
    let mut counts: BTreeMap<MeasureKind, usize> =
        MeasureKind::ALL.into_iter().map(|k| (k, 0)).collect();
    for measure in active_measures(groups, tier) {
        *counts.entry(measure.kind).or_default() += 1;
    }
    counts
}

/// The highest active group: its title names what the current tier adds.
pub fn current_group(groups: &[MitigationGroup], tier: TierIndex) -> Option<&MitigationGroup> {
    groups.iter().find(|g| g.tier == tier.number())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(tier: u8, kinds: &[MeasureKind]) -> MitigationGroup {
        MitigationGroup {
            tier,
            title: format!("Group {tier}"),
            icon: String::new(),
            measures: kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| MitigationMeasure {
                    name: format!("m{tier}.{i}"),
                    description: String::new(),
                    kind: *kind,
                })
                .collect(),
        }
    }

    fn groups() -> Vec<MitigationGroup> {
        use MeasureKind::*;
        vec![
            group(1, &[Deterministic, Deterministic]),
            group(2, &[Probabilistic, Organizational]),
            group(3, &[Organizational]),
            group(4, &[Deterministic]),
        ]
    }

    #[test]
    fn unlock_is_cumulative() {
        let g = groups();
        let active: Vec<bool> = partition(&g, TierIndex::MODERATE)
            .iter()
            .map(|s| s.active)
            .collect();
        assert_eq!(active, vec![true, true, false, false]);
        assert_eq!(active_measures(&g, TierIndex::CRITICAL).len(), 6);
        assert_eq!(active_measures(&g, TierIndex::MINIMAL).len(), 2);
    }

    #[test]
    fn breakdown_counts_every_kind() {
        let counts = kind_breakdown(&groups(), TierIndex::MINIMAL);
        assert_eq!(counts[&MeasureKind::Deterministic], 2);
        assert_eq!(counts[&MeasureKind::Probabilistic], 0);
        assert_eq!(counts[&MeasureKind::Organizational], 0);
    }

    #[test]
    fn current_group_matches_tier_number() {
        let g = groups();
        assert_eq!(current_group(&g, TierIndex::HIGH).unwrap().tier, 3);
    }
}
