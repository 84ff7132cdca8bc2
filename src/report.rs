use squad_core::{ExclusionReason, SquadPlan};
use std::fmt::{self, Write};

pub struct PlanReport;

impl PlanReport {
    pub fn text(plans: &[SquadPlan]) -> String {
        let mut out = String::new();

        for plan in plans {
            // Writing into a String cannot fail.
            let _ = Self::write_plan(&mut out, plan);
        }

        out
    }

    pub fn json(plans: &[SquadPlan]) -> serde_json::Result<String> {
        match plans {
            [plan] => serde_json::to_string_pretty(plan),
            _ => serde_json::to_string_pretty(plans),
        }
    }

    fn write_plan(out: &mut String, plan: &SquadPlan) -> fmt::Result {
        writeln!(out, "== {} ==", plan.group_size)?;

        if plan.is_empty() {
            writeln!(out, "not enough players to form a group")?;
        }

        for (idx, group) in plan.groups.iter().enumerate() {
            let summary = group.summary();

            writeln!(
                out,
                "Group {} ({}/{}) avg {:.2} | GK {} DEF {} MID {} FWD {}",
                idx + 1,
                summary.size,
                group.capacity(),
                summary.average_rating,
                summary.goalkeepers,
                summary.defenders,
                summary.midfielders,
                summary.forwards
            )?;

            for member in group.members() {
                writeln!(
                    out,
                    "  {:<4} {:<28} {:.2}",
                    member.group.get_short_name(),
                    member.individual.full_name,
                    member.rating
                )?;
            }
        }

        if !plan.excluded.is_empty() {
            writeln!(out, "Excluded:")?;
            for excluded in &plan.excluded {
                let reason = match excluded.reason {
                    ExclusionReason::NonPlayingStaff => "staff",
                    ExclusionReason::GoalkeeperNotRequired => "no goalkeepers",
                };
                writeln!(out, "  {} [{}]", excluded.individual, reason)?;
            }
        }

        writeln!(
            out,
            "spread {:.3} -> {:.3}, {} swaps in {} iterations",
            plan.balance.initial_objective,
            plan.balance.final_objective,
            plan.balance.accepted_swaps,
            plan.balance.iterations
        )?;

        if plan.stopped_early() {
            writeln!(out, "warning: stopped at an iteration limit")?;
        }

        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squad_core::{GroupSize, Individual, SquadPlanner};

    fn roster() -> Vec<Individual> {
        let positions = ["CB", "CB", "CM", "ST", "ST", "GK"];

        positions
            .iter()
            .enumerate()
            .map(|(idx, position)| {
                Individual::builder()
                    .id(idx as u32 + 1)
                    .full_name(format!("Player {}", idx + 1))
                    .position(*position)
                    .recommendation(idx as f64 * 0.5)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn text_lists_groups_and_exclusions() {
        let plan = SquadPlanner::plan(&roster(), GroupSize::default());
        let text = PlanReport::text(&[plan]);

        assert!(text.starts_with("== 5-a-side =="));
        assert!(text.contains("Group 1 (5/5)"));
        assert!(text.contains("Player 6 (GK) [no goalkeepers]"));
    }

    #[test]
    fn text_reports_empty_plans() {
        let plan = SquadPlanner::plan(&roster()[..3], GroupSize::default());

        assert!(PlanReport::text(&[plan]).contains("not enough players"));
    }

    #[test]
    fn json_of_single_plan_is_an_object() {
        let plan = SquadPlanner::plan(&roster(), GroupSize::default());
        let json = PlanReport::json(&[plan]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.is_object());
        assert_eq!(value["groups"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn text_flags_plans_stopped_at_a_limit() {
        let mut plan = SquadPlanner::plan(&roster(), GroupSize::default());
        assert!(!PlanReport::text(std::slice::from_ref(&plan)).contains("warning"));

        plan.balance.budget_exhausted = true;
        let text = PlanReport::text(&[plan.clone(), plan]);

        assert_eq!(text.matches("warning: stopped at an iteration limit").count(), 2);
        assert_eq!(text.matches("== 5-a-side ==").count(), 2);
        assert!(text.ends_with("\n\n"));
    }
}
