use crate::{FieldPositionGroup, Individual, PositionClassifier, RatingCalculator};
use serde::Serialize;

/// An individual with its position group and balancing rating resolved for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedIndividual {
    pub individual: Individual,
    pub group: FieldPositionGroup,
    pub rating: f64,
}

impl CategorizedIndividual {
    pub fn new(individual: Individual, group: FieldPositionGroup, rating: f64) -> Self {
        CategorizedIndividual {
            individual,
            group,
            rating,
        }
    }

    pub fn from_individual(individual: &Individual) -> Self {
        CategorizedIndividual {
            group: PositionClassifier::classify(&individual.position),
            rating: RatingCalculator::calculate(individual),
            individual: individual.clone(),
        }
    }

    pub fn id(&self) -> u32 {
        self.individual.id
    }
}

/// Members in placement order; never holds more than `capacity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    capacity: usize,
    members: Vec<CategorizedIndividual>,
}

impl Group {
    pub fn with_capacity(capacity: usize) -> Self {
        Group {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    /// Hands the member back when the group is already full.
    pub fn try_add(
        &mut self,
        member: CategorizedIndividual,
    ) -> Result<(), CategorizedIndividual> {
        if self.is_full() {
            return Err(member);
        }

        self.members.push(member);
        Ok(())
    }

    pub fn members(&self) -> &[CategorizedIndividual] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [CategorizedIndividual] {
        &mut self.members
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn count_of(&self, group: FieldPositionGroup) -> usize {
        self.members.iter().filter(|m| m.group == group).count()
    }

    pub fn total_rating(&self) -> f64 {
        self.members.iter().map(|m| m.rating).sum()
    }

    pub fn average_rating(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }

        self.total_rating() / self.members.len() as f64
    }

    pub fn contains(&self, id: u32) -> bool {
        self.members.iter().any(|m| m.id() == id)
    }

    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            size: self.len(),
            goalkeepers: self.count_of(FieldPositionGroup::Goalkeeper),
            defenders: self.count_of(FieldPositionGroup::Defender),
            midfielders: self.count_of(FieldPositionGroup::Midfielder),
            forwards: self.count_of(FieldPositionGroup::Forward),
            total_rating: self.total_rating(),
            average_rating: self.average_rating(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub size: usize,
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
    pub total_rating: f64,
    pub average_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squad::fixtures::member;
    use crate::FieldPositionGroup::*;

    #[test]
    fn capacity_is_enforced_on_insert() {
        let mut group = Group::with_capacity(2);

        assert!(group.try_add(member(1, Defender, 1.0)).is_ok());
        assert!(group.try_add(member(2, Forward, 2.0)).is_ok());

        let rejected = group.try_add(member(3, Midfielder, 3.0));
        assert_eq!(rejected.map_err(|m| m.id()), Err(3));
        assert_eq!(group.len(), 2);
        assert!(group.is_full());
    }

    #[test]
    fn empty_group_averages_zero() {
        assert_eq!(Group::with_capacity(5).average_rating(), 0.0);
    }

    #[test]
    fn summary_counts_groups_and_ratings() {
        let mut group = Group::with_capacity(5);
        for m in [
            member(1, Defender, 2.0),
            member(2, Defender, 3.0),
            member(3, Forward, 4.0),
        ] {
            group.try_add(m).unwrap();
        }

        let summary = group.summary();
        assert_eq!(summary.size, 3);
        assert_eq!(summary.defenders, 2);
        assert_eq!(summary.forwards, 1);
        assert_eq!(summary.midfielders, 0);
        assert!((summary.total_rating - 9.0).abs() < 1e-9);
        assert!((summary.average_rating - 3.0).abs() < 1e-9);
        assert!(group.contains(3));
        assert!(!group.contains(4));
    }

    #[test]
    fn from_individual_classifies_and_rates() {
        let individual = Individual::builder()
            .id(9)
            .full_name("Noa Vik")
            .position("RWB")
            .recommendation(3.0)
            .experience(2.0)
            .build()
            .unwrap();

        let categorized = CategorizedIndividual::from_individual(&individual);
        assert_eq!(categorized.group, Defender);
        assert!((categorized.rating - 3.2).abs() < 1e-9);
        assert_eq!(categorized.id(), 9);
    }
}
