use crate::squad::{
    BalanceReport, CategorizedIndividual, ExclusionReason, Group, GroupAllocator,
    GroupBalancer, GroupSize, GroupSummary, QuotaPlanner,
};
use crate::{Individual, PositionClassifier};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcludedIndividual {
    pub individual: Individual,
    pub reason: ExclusionReason,
}

/// Outcome of one planning run for a single group size.
#[derive(Debug, Clone, Serialize)]
pub struct SquadPlan {
    pub group_size: GroupSize,
    pub groups: Vec<Group>,
    pub excluded: Vec<ExcludedIndividual>,
    pub allocation_rounds: usize,
    pub allocation_budget_exhausted: bool,
    pub balance: BalanceReport,
}

impl SquadPlan {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn average_ratings(&self) -> Vec<f64> {
        self.groups.iter().map(Group::average_rating).collect()
    }

    pub fn summaries(&self) -> Vec<GroupSummary> {
        self.groups.iter().map(Group::summary).collect()
    }

    pub fn placed_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// True when either iteration budget ran out before the run settled.
    pub fn stopped_early(&self) -> bool {
        self.allocation_budget_exhausted || self.balance.budget_exhausted
    }
}

pub struct SquadPlanner;

impl SquadPlanner {
    /// Splits `roster` into balanced groups of `size`. The roster is only read.
    pub fn plan(roster: &[Individual], size: GroupSize) -> SquadPlan {
        let quota_plan = QuotaPlanner::plan(size);

        let mut excluded = Vec::new();
        let mut eligible = Vec::with_capacity(roster.len());

        for individual in roster {
            let group = PositionClassifier::classify(&individual.position);

            match quota_plan.exclusion_reason(individual, group) {
                Some(reason) => excluded.push(ExcludedIndividual {
                    individual: individual.clone(),
                    reason,
                }),
                None => eligible.push(CategorizedIndividual::from_individual(individual)),
            }
        }

        let allocation = GroupAllocator::allocate(&eligible, &quota_plan.quota, size);
        let balanced = GroupBalancer::balance(&allocation.groups);

        if balanced.groups.is_empty() {
            warn!(
                "Not enough players for {}: {} eligible of {}",
                size,
                eligible.len(),
                roster.len()
            );
        } else {
            info!(
                "{}: {} groups, {} excluded, spread {:.3} -> {:.3} after {} swaps",
                size,
                balanced.groups.len(),
                excluded.len(),
                balanced.report.initial_objective,
                balanced.report.final_objective,
                balanced.report.accepted_swaps
            );
        }

        SquadPlan {
            group_size: size,
            groups: balanced.groups,
            excluded,
            allocation_rounds: allocation.rounds,
            allocation_budget_exhausted: allocation.budget_exhausted,
            balance: balanced.report,
        }
    }

    /// Plans every supported group size; each run works on its own roster copy.
    pub fn overview(roster: &[Individual]) -> Vec<SquadPlan> {
        GroupSize::all()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|size| {
                let roster = roster.to_vec();
                Self::plan(&roster, size)
            })
            .collect()
    }
}
