use crate::squad::CategorizedIndividual;
use crate::FieldPositionGroup;
use std::cmp::Ordering;

/// Rating-ordered queue read through a cursor; the backing vector never changes.
#[derive(Debug, Clone, Default)]
pub struct CategoryQueue {
    items: Vec<CategorizedIndividual>,
    cursor: usize,
}

impl CategoryQueue {
    /// Sorts by rating descending, then status priority, then input order.
    pub fn new(mut items: Vec<CategorizedIndividual>) -> Self {
        items.sort_by(Self::compare);

        CategoryQueue { items, cursor: 0 }
    }

    fn compare(a: &CategorizedIndividual, b: &CategorizedIndividual) -> Ordering {
        b.rating.total_cmp(&a.rating).then_with(|| {
            a.individual
                .tie_break_priority()
                .cmp(&b.individual.tie_break_priority())
        })
    }

    pub fn peek(&self) -> Option<&CategorizedIndividual> {
        self.items.get(self.cursor)
    }

    pub fn pop(&mut self) -> Option<CategorizedIndividual> {
        let item = self.items.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(item)
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryQueues {
    goalkeepers: CategoryQueue,
    defenders: CategoryQueue,
    midfielders: CategoryQueue,
    forwards: CategoryQueue,
}

impl CategoryQueues {
    pub fn new(individuals: &[CategorizedIndividual]) -> Self {
        let of_group = |group: FieldPositionGroup| {
            CategoryQueue::new(
                individuals
                    .iter()
                    .filter(|i| i.group == group)
                    .cloned()
                    .collect(),
            )
        };

        CategoryQueues {
            goalkeepers: of_group(FieldPositionGroup::Goalkeeper),
            defenders: of_group(FieldPositionGroup::Defender),
            midfielders: of_group(FieldPositionGroup::Midfielder),
            forwards: of_group(FieldPositionGroup::Forward),
        }
    }

    pub fn queue(&self, group: FieldPositionGroup) -> &CategoryQueue {
        match group {
            FieldPositionGroup::Goalkeeper => &self.goalkeepers,
            FieldPositionGroup::Defender => &self.defenders,
            FieldPositionGroup::Midfielder => &self.midfielders,
            FieldPositionGroup::Forward => &self.forwards,
        }
    }

    fn queue_mut(&mut self, group: FieldPositionGroup) -> &mut CategoryQueue {
        match group {
            FieldPositionGroup::Goalkeeper => &mut self.goalkeepers,
            FieldPositionGroup::Defender => &mut self.defenders,
            FieldPositionGroup::Midfielder => &mut self.midfielders,
            FieldPositionGroup::Forward => &mut self.forwards,
        }
    }

    pub fn has(&self, group: FieldPositionGroup) -> bool {
        !self.queue(group).is_empty()
    }

    pub fn pop(&mut self, group: FieldPositionGroup) -> Option<CategorizedIndividual> {
        self.queue_mut(group).pop()
    }

    pub fn outfield_remaining(&self) -> usize {
        FieldPositionGroup::OUTFIELD
            .iter()
            .map(|group| self.queue(*group).remaining())
            .sum()
    }
}
