use crate::squad::Group;
use crate::utils::FloatUtils;
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

pub const MAX_BALANCE_ITERATIONS: usize = 10;

/// Weak/strong pairs closer than this are left alone in the paired phase.
pub const MIN_PAIR_GAP: f64 = 0.1;

// A swap must beat the current objective by more than float noise.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    pub initial_objective: f64,
    pub final_objective: f64,
    pub accepted_swaps: usize,
    pub iterations: usize,
    pub budget_exhausted: bool,
}

impl BalanceReport {
    fn untouched(objective: f64) -> Self {
        BalanceReport {
            initial_objective: objective,
            final_objective: objective,
            accepted_swaps: 0,
            iterations: 0,
            budget_exhausted: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    pub groups: Vec<Group>,
    pub report: BalanceReport,
}

/// Hill climbing over same-position swaps between groups.
///
/// Only strictly improving swaps are kept, so the objective never grows and a
/// converged result is a fixed point of another pass.
pub struct GroupBalancer;

impl GroupBalancer {
    pub fn balance(groups: &[Group]) -> BalanceOutcome {
        let mut groups = groups.to_vec();
        let initial_objective = Self::objective(&groups);

        if groups.len() < 2 {
            return BalanceOutcome {
                groups,
                report: BalanceReport::untouched(initial_objective),
            };
        }

        let mut current = initial_objective;
        let mut accepted_swaps = 0;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < MAX_BALANCE_ITERATIONS {
            iterations += 1;

            let improved = Self::improve_weak_strong_pairs(&mut groups, current)
                .or_else(|| Self::improve_any_pair(&mut groups, current));

            match improved {
                Some(objective) => {
                    debug!(
                        "Balancing iteration {}: objective {:.4} -> {:.4}",
                        iterations, current, objective
                    );
                    current = objective;
                    accepted_swaps += 1;
                }
                None => {
                    converged = true;
                    break;
                }
            }
        }

        if !converged {
            warn!(
                "Balancing stopped after {} iterations at objective {:.4}",
                iterations, current
            );
        }

        BalanceOutcome {
            groups,
            report: BalanceReport {
                initial_objective,
                final_objective: current,
                accepted_swaps,
                iterations,
                budget_exhausted: !converged,
            },
        }
    }

    /// Standard deviation of group average ratings.
    pub fn objective(groups: &[Group]) -> f64 {
        let averages: Vec<f64> = groups.iter().map(Group::average_rating).collect();

        FloatUtils::standard_deviation(&averages)
    }

    /// Weakest half against strongest half: i-th from the bottom with i-th from the top.
    fn improve_weak_strong_pairs(groups: &mut [Group], current: f64) -> Option<f64> {
        let ranked: Vec<usize> = (0..groups.len())
            .sorted_by(|&a, &b| {
                groups[a]
                    .average_rating()
                    .total_cmp(&groups[b].average_rating())
            })
            .collect();

        let count = ranked.len();

        for offset in 0..count / 2 {
            let weak = ranked[offset];
            let strong = ranked[count - 1 - offset];

            let gap = groups[strong].average_rating() - groups[weak].average_rating();
            if gap + IMPROVEMENT_EPSILON < MIN_PAIR_GAP {
                continue;
            }

            if let Some(objective) = Self::try_swaps(groups, weak, strong, current) {
                return Some(objective);
            }
        }

        None
    }

    fn improve_any_pair(groups: &mut [Group], current: f64) -> Option<f64> {
        (0..groups.len())
            .tuple_combinations()
            .find_map(|(first, second)| Self::try_swaps(groups, first, second, current))
    }

    /// Tries every same-position swap between two groups and keeps the first
    /// one that lowers the objective; rejected swaps are reverted.
    fn try_swaps(groups: &mut [Group], first: usize, second: usize, current: f64) -> Option<f64> {
        for a in 0..groups[first].len() {
            for b in 0..groups[second].len() {
                if groups[first].members()[a].group != groups[second].members()[b].group {
                    continue;
                }

                Self::swap_members(groups, (first, a), (second, b));

                let objective = Self::objective(groups);
                if objective < current - IMPROVEMENT_EPSILON {
                    debug!(
                        "Swapped {} and {} between groups {} and {}",
                        groups[second].members()[b].individual,
                        groups[first].members()[a].individual,
                        first + 1,
                        second + 1
                    );
                    return Some(objective);
                }

                Self::swap_members(groups, (first, a), (second, b));
            }
        }

        None
    }

    fn swap_members(groups: &mut [Group], first: (usize, usize), second: (usize, usize)) {
        let (low, high) = if first.0 < second.0 {
            (first, second)
        } else {
            (second, first)
        };

        let (head, tail) = groups.split_at_mut(high.0);
        std::mem::swap(
            &mut head[low.0].members_mut()[low.1],
            &mut tail[0].members_mut()[high.1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squad::fixtures::{group_of, member};
    use crate::squad::{GroupSize, SquadPlan};
    use crate::FieldPositionGroup::*;

    fn averages(groups: &[Group]) -> Vec<f64> {
        groups.iter().map(Group::average_rating).collect()
    }

    #[test]
    fn single_group_is_untouched() {
        let groups = vec![group_of(
            5,
            vec![member(1, Defender, 3.0), member(2, Forward, 1.0)],
        )];

        let outcome = GroupBalancer::balance(&groups);

        assert_eq!(outcome.groups, groups);
        assert_eq!(outcome.report.iterations, 0);
        assert_eq!(outcome.report.accepted_swaps, 0);
    }

    #[test]
    fn strong_weak_swap_is_taken() {
        let groups = vec![
            group_of(5, vec![member(1, Defender, 5.0), member(2, Midfielder, 3.0)]),
            group_of(5, vec![member(3, Defender, 3.4), member(4, Midfielder, 0.6)]),
        ];
        let before = averages(&groups);
        assert!((before[0] - 4.0).abs() < 1e-9);
        assert!((before[1] - 2.0).abs() < 1e-9);

        let outcome = GroupBalancer::balance(&groups);
        let result = averages(&outcome.groups);

        assert!((result[0] - 3.2).abs() < 1e-9);
        assert!((result[1] - 2.8).abs() < 1e-9);
        assert!(outcome.groups[0].contains(3));
        assert!(outcome.groups[1].contains(1));
        assert_eq!(outcome.report.accepted_swaps, 1);
        assert!(!outcome.report.budget_exhausted);
    }

    #[test]
    fn only_same_position_swaps() {
        let groups = vec![
            group_of(5, vec![member(1, Defender, 5.0), member(2, Defender, 5.0)]),
            group_of(5, vec![member(3, Forward, 1.0), member(4, Forward, 1.0)]),
        ];

        let outcome = GroupBalancer::balance(&groups);

        assert_eq!(outcome.groups, groups);
        assert_eq!(outcome.report.accepted_swaps, 0);
        assert_eq!(outcome.report.iterations, 1);
    }

    #[test]
    fn objective_never_increases_and_sizes_hold() {
        let trio = |id: u32, ratings: [f64; 3]| {
            group_of(
                3,
                vec![
                    member(id, Defender, ratings[0]),
                    member(id + 1, Midfielder, ratings[1]),
                    member(id + 2, Forward, ratings[2]),
                ],
            )
        };
        let groups = vec![
            trio(1, [4.5, 4.0, 3.5]),
            trio(4, [1.0, 2.0, 0.5]),
            trio(7, [2.5, 1.5, 3.0]),
            trio(10, [0.2, 4.8, 2.2]),
        ];
        let before = GroupBalancer::objective(&groups);

        let outcome = GroupBalancer::balance(&groups);

        assert!(outcome.report.final_objective <= before);
        let recomputed = GroupBalancer::objective(&outcome.groups);
        assert!((recomputed - outcome.report.final_objective).abs() < 1e-9);
        for (balanced, original) in outcome.groups.iter().zip(&groups) {
            assert_eq!(balanced.len(), original.len());
            assert_eq!(balanced.count_of(Defender), original.count_of(Defender));
            assert_eq!(balanced.count_of(Midfielder), original.count_of(Midfielder));
            assert_eq!(balanced.count_of(Forward), original.count_of(Forward));
        }
    }

    #[test]
    fn converged_result_is_a_fixed_point() {
        let groups = vec![
            group_of(2, vec![member(1, Defender, 5.0), member(2, Forward, 4.0)]),
            group_of(2, vec![member(3, Defender, 1.0), member(4, Forward, 2.0)]),
            group_of(2, vec![member(5, Defender, 3.0), member(6, Forward, 0.5)]),
        ];

        let first = GroupBalancer::balance(&groups);
        assert!(!first.report.budget_exhausted);

        let second = GroupBalancer::balance(&first.groups);
        assert_eq!(second.groups, first.groups);
        assert_eq!(second.report.accepted_swaps, 0);
    }

    #[test]
    fn input_is_not_mutated() {
        let groups = vec![
            group_of(2, vec![member(1, Defender, 5.0)]),
            group_of(2, vec![member(2, Defender, 1.0), member(3, Defender, 1.0)]),
        ];
        let snapshot = groups.clone();

        let _ = GroupBalancer::balance(&groups);

        assert_eq!(groups, snapshot);
    }

    #[test]
    fn falls_back_to_any_pair_when_extremes_share_no_position() {
        let groups = vec![
            group_of(2, vec![member(1, Defender, 1.0), member(2, Defender, 1.0)]),
            group_of(2, vec![member(3, Defender, 3.0), member(4, Forward, 2.0)]),
            group_of(2, vec![member(5, Forward, 4.0), member(6, Forward, 4.0)]),
        ];

        let outcome = GroupBalancer::balance(&groups);
        let result = averages(&outcome.groups);

        // The weakest and strongest groups have nothing to trade, so the first
        // swap can only come from trying every pair.
        assert!(outcome.groups[0].contains(3));
        assert_eq!(outcome.report.accepted_swaps, 2);
        assert!((result[0] - 2.0).abs() < 1e-9);
        assert!((result[1] - 2.5).abs() < 1e-9);
        assert!((result[2] - 3.0).abs() < 1e-9);
        assert!(outcome.report.final_objective < outcome.report.initial_objective);
        assert!(!outcome.report.budget_exhausted);
    }

    #[test]
    fn close_pairs_are_skipped_by_the_paired_phase() {
        let mut groups = vec![
            group_of(2, vec![member(1, Defender, 1.0), member(2, Midfielder, 2.06)]),
            group_of(2, vec![member(3, Defender, 1.04), member(4, Midfielder, 2.08)]),
        ];
        let snapshot = groups.clone();
        let current = GroupBalancer::objective(&groups);

        let paired = GroupBalancer::improve_weak_strong_pairs(&mut groups, current);

        assert!(paired.is_none());
        assert_eq!(groups, snapshot);

        // The same swap does lower the objective, so only the gap kept it out.
        let any = GroupBalancer::improve_any_pair(&mut groups, current);
        assert!(any.is_some_and(|objective| objective < current));
        assert!(groups[0].contains(3));
    }

    #[test]
    fn iteration_cap_stops_early_and_keeps_progress() {
        let squad = |first_id: u32, rating: f64| {
            group_of(
                6,
                (first_id..first_id + 6)
                    .map(|id| member(id, Defender, rating))
                    .collect(),
            )
        };
        // Evening out four strong and four weak groups takes twelve swaps.
        let groups: Vec<Group> = (0..8)
            .map(|idx| squad(idx * 6 + 1, if idx < 4 { 5.0 } else { 0.1 }))
            .collect();

        let outcome = GroupBalancer::balance(&groups);
        let report = &outcome.report;

        assert_eq!(report.iterations, MAX_BALANCE_ITERATIONS);
        assert_eq!(report.accepted_swaps, MAX_BALANCE_ITERATIONS);
        assert!(report.budget_exhausted);
        assert!(report.final_objective < report.initial_objective);

        let plan = SquadPlan {
            group_size: GroupSize::new(6).unwrap(),
            groups: outcome.groups.clone(),
            excluded: Vec::new(),
            allocation_rounds: 0,
            allocation_budget_exhausted: false,
            balance: report.clone(),
        };
        assert!(plan.stopped_early());

        // A capped result is not converged, so another pass keeps improving.
        let again = GroupBalancer::balance(&outcome.groups);
        assert!(again.report.accepted_swaps > 0);
        assert!(again.report.final_objective < report.final_objective);
    }
}
