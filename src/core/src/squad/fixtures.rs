use crate::squad::{CategorizedIndividual, Group};
use crate::{FieldPositionGroup, Individual, IndividualStatusType};

pub fn member(id: u32, group: FieldPositionGroup, rating: f64) -> CategorizedIndividual {
    member_with_statuses(id, group, rating, Vec::new())
}

pub fn member_with_statuses(
    id: u32,
    group: FieldPositionGroup,
    rating: f64,
    statuses: Vec<IndividualStatusType>,
) -> CategorizedIndividual {
    let individual = Individual::builder()
        .id(id)
        .full_name(format!("Player {id}"))
        .position(group.get_short_name())
        .statuses(statuses)
        .build()
        .unwrap();

    CategorizedIndividual::new(individual, group, rating)
}

pub fn group_of(capacity: usize, members: Vec<CategorizedIndividual>) -> Group {
    let mut group = Group::with_capacity(capacity);
    for m in members {
        group.try_add(m).unwrap();
    }
    group
}

/// Roster entry whose rating equals `recommendation` exactly.
pub fn roster_entry(id: u32, position: &str, recommendation: f64) -> Individual {
    Individual::builder()
        .id(id)
        .full_name(format!("Player {id}"))
        .position(position)
        .recommendation(recommendation)
        .build()
        .unwrap()
}
