use crate::squad::queue::CategoryQueues;
use crate::squad::{CategorizedIndividual, Group, GroupQuota, GroupSize};
use crate::FieldPositionGroup;
use log::{debug, warn};

/// Hard cap on distribution rounds; a normal run needs at most one round per slot.
pub const MAX_ALLOCATION_ROUNDS: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct Allocation {
    pub groups: Vec<Group>,
    pub rounds: usize,
    pub budget_exhausted: bool,
}

pub struct GroupAllocator;

impl GroupAllocator {
    pub fn allocate(
        individuals: &[CategorizedIndividual],
        quota: &GroupQuota,
        size: GroupSize,
    ) -> Allocation {
        let mut queues = CategoryQueues::new(individuals);
        let capacity = size.capacity();

        let group_count = queues.outfield_remaining() / capacity;
        if group_count == 0 {
            debug!(
                "Not enough outfield players for a single {} group: {}",
                size,
                queues.outfield_remaining()
            );
            return Allocation::default();
        }

        let mut groups: Vec<Group> = (0..group_count)
            .map(|_| Group::with_capacity(capacity))
            .collect();

        if quota.goalkeepers > 0 {
            Self::seat_goalkeepers(&mut groups, &mut queues);
        }

        let (rounds, budget_exhausted) = Self::distribute(&mut groups, &mut queues, quota);

        if budget_exhausted {
            warn!(
                "Allocation stopped after {} rounds with {} outfield players still queued",
                rounds,
                queues.outfield_remaining()
            );
        }

        Self::drain_leftovers(&mut groups, &mut queues, capacity);

        debug!(
            "Allocated {} individuals into {} groups in {} rounds",
            groups.iter().map(Group::len).sum::<usize>(),
            groups.len(),
            rounds
        );

        Allocation {
            groups,
            rounds,
            budget_exhausted,
        }
    }

    /// One goalkeeper per group in queue order, then extras to the group with
    /// the fewest goalkeepers and, among those, the lowest average rating.
    fn seat_goalkeepers(groups: &mut [Group], queues: &mut CategoryQueues) {
        for group in groups.iter_mut() {
            let Some(goalkeeper) = queues.pop(FieldPositionGroup::Goalkeeper) else {
                return;
            };
            if let Err(goalkeeper) = group.try_add(goalkeeper) {
                warn!("No room for goalkeeper {}", goalkeeper.individual);
            }
        }

        while queues.has(FieldPositionGroup::Goalkeeper) {
            let target = groups
                .iter()
                .enumerate()
                .filter(|(_, group)| !group.is_full())
                .min_by(|(_, a), (_, b)| {
                    a.count_of(FieldPositionGroup::Goalkeeper)
                        .cmp(&b.count_of(FieldPositionGroup::Goalkeeper))
                        .then_with(|| a.average_rating().total_cmp(&b.average_rating()))
                })
                .map(|(idx, _)| idx);

            // Full groups leave the rest to the drain step.
            let Some(idx) = target else {
                return;
            };

            if let Some(goalkeeper) = queues.pop(FieldPositionGroup::Goalkeeper) {
                debug!(
                    "Extra goalkeeper {} joins group {} (avg {:.2})",
                    goalkeeper.individual,
                    idx + 1,
                    groups[idx].average_rating()
                );
                if let Err(goalkeeper) = groups[idx].try_add(goalkeeper) {
                    warn!("No room for goalkeeper {}", goalkeeper.individual);
                }
            }
        }
    }

    /// Rounds follow the quota pattern. Every time a position group comes up its
    /// visiting order flips, so the best of each queue do not pile up in the
    /// first group. Returns the rounds played and whether the budget ran out.
    fn distribute(
        groups: &mut [Group],
        queues: &mut CategoryQueues,
        quota: &GroupQuota,
    ) -> (usize, bool) {
        let pattern = quota.distribution_pattern();
        if pattern.is_empty() {
            return (0, false);
        }

        let mut round = 0;
        let mut visits = [0usize; 4];

        loop {
            if round >= MAX_ALLOCATION_ROUNDS {
                return (round, true);
            }

            let wanted = pattern[round % pattern.len()];
            let slot = Self::visit_slot(wanted);
            let forward = visits[slot] % 2 == 0;
            visits[slot] += 1;

            let order: Vec<usize> = if forward {
                (0..groups.len()).collect()
            } else {
                (0..groups.len()).rev().collect()
            };

            let mut added = 0;

            for idx in order {
                let group = &mut groups[idx];
                if group.is_full() {
                    continue;
                }

                let category = if queues.has(wanted) {
                    Some(wanted)
                } else {
                    Self::most_needed(group, quota, queues)
                };

                let Some(member) = category.and_then(|category| queues.pop(category)) else {
                    continue;
                };

                match group.try_add(member) {
                    Ok(()) => added += 1,
                    Err(member) => warn!("Group {} rejected {}", idx + 1, member.individual),
                }
            }

            round += 1;

            if added == 0 {
                return (round, false);
            }
        }
    }

    /// Index of the snake counter for `group`; every group has its own.
    fn visit_slot(group: FieldPositionGroup) -> usize {
        match group {
            FieldPositionGroup::Goalkeeper => 0,
            FieldPositionGroup::Defender => 1,
            FieldPositionGroup::Midfielder => 2,
            FieldPositionGroup::Forward => 3,
        }
    }

    /// Outfield group furthest below its quota share in `group`, falling back
    /// to the first non-empty queue in DEF, MID, FWD order.
    fn most_needed(
        group: &Group,
        quota: &GroupQuota,
        queues: &CategoryQueues,
    ) -> Option<FieldPositionGroup> {
        let mut best: Option<(FieldPositionGroup, f64)> = None;

        for category in FieldPositionGroup::OUTFIELD {
            let target = quota.count(category);
            if target == 0 || !queues.has(category) {
                continue;
            }

            let deficit = (target as f64 - group.count_of(category) as f64) / target as f64;
            if deficit <= 0.0 {
                continue;
            }

            if best.is_none_or(|(_, best_deficit)| deficit > best_deficit) {
                best = Some((category, deficit));
            }
        }

        best.map(|(category, _)| category).or_else(|| {
            FieldPositionGroup::OUTFIELD
                .into_iter()
                .find(|category| queues.has(*category))
        })
    }

    fn drain_leftovers(groups: &mut Vec<Group>, queues: &mut CategoryQueues, capacity: usize) {
        let drain_order = [
            FieldPositionGroup::Defender,
            FieldPositionGroup::Midfielder,
            FieldPositionGroup::Forward,
            FieldPositionGroup::Goalkeeper,
        ];

        for category in drain_order {
            while let Some(member) = queues.pop(category) {
                Self::place(groups, member, capacity);
            }
        }
    }

    fn place(groups: &mut Vec<Group>, member: CategorizedIndividual, capacity: usize) {
        let member = match groups.iter_mut().find(|group| !group.is_full()) {
            Some(group) => match group.try_add(member) {
                Ok(()) => return,
                Err(member) => member,
            },
            None => member,
        };

        debug!("All groups full, opening group {} for {}", groups.len() + 1, member.individual);

        let mut group = Group::with_capacity(capacity);
        if let Err(member) = group.try_add(member) {
            warn!("Cannot place {} into an empty group", member.individual);
        }
        groups.push(group);
    }
}
