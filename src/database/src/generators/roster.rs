use crate::{RosterError, RosterResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use squad_core::{Individual, IndividualStatusType};

const FIRST_NAMES: &[&str] = &[
    "Adam", "Ben", "Carlos", "Daniel", "Elias", "Felix", "Gabriel", "Hugo", "Isak", "Jonas",
    "Kai", "Leo", "Marco", "Noah", "Oskar", "Pablo", "Rafael", "Samuel", "Theo", "Viktor",
];

const LAST_NAMES: &[&str] = &[
    "Andersen", "Berg", "Costa", "Dahl", "Eriksen", "Fischer", "Garcia", "Hansen", "Ito",
    "Jensen", "Kowalski", "Larsen", "Moreno", "Nilsen", "Olsen", "Petrov", "Rossi", "Silva",
    "Torres", "Weber",
];

// Label and relative weight, roughly what a youth squad sheet looks like.
const POSITION_LABELS: &[(&str, u32)] = &[
    ("GK", 2),
    ("CB", 4),
    ("LB", 2),
    ("RB", 2),
    ("RWB", 1),
    ("CDM", 2),
    ("CM", 3),
    ("CAM", 2),
    ("LM", 1),
    ("ST", 3),
    ("LW", 2),
    ("RW", 2),
    ("LW/ST", 1),
    ("Centre-back", 1),
];

const MIN_AGE: u8 = 16;
const MAX_AGE: u8 = 34;

/// Seeded roster generator: the same seed always yields the same roster.
pub struct RosterGenerator {
    rng: StdRng,
    next_id: u32,
}

impl RosterGenerator {
    pub fn with_seed(seed: u64) -> Self {
        RosterGenerator {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn generate(&mut self, count: usize) -> RosterResult<Vec<Individual>> {
        (0..count).map(|_| self.generate_individual()).collect()
    }

    fn generate_individual(&mut self) -> RosterResult<Individual> {
        let id = self.next_id;
        self.next_id += 1;

        let age = self.rng.random_range(MIN_AGE..=MAX_AGE);
        let experience = self.rng.random_range(0..=(age - MIN_AGE)) as f64;

        let mut builder = Individual::builder()
            .id(id)
            .full_name(self.generate_name())
            .position(self.generate_position())
            .age(age)
            .experience(experience)
            .statuses(self.generate_statuses());

        // Roughly one in six has not been scouted yet.
        if self.rng.random_bool(5.0 / 6.0) {
            let steps: u8 = self.rng.random_range(0..=10);
            builder = builder.recommendation(steps as f64 * 0.5);
        }

        builder
            .build()
            .map_err(|reason| RosterError::InvalidRecord { id, reason })
    }

    fn generate_name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];

        format!("{} {}", first, last)
    }

    fn generate_position(&mut self) -> &'static str {
        let total: u32 = POSITION_LABELS.iter().map(|(_, weight)| weight).sum();
        let mut roll = self.rng.random_range(0..total);

        for &(label, weight) in POSITION_LABELS {
            if roll < weight {
                return label;
            }
            roll -= weight;
        }

        "CM"
    }

    fn generate_statuses(&mut self) -> Vec<IndividualStatusType> {
        let mut statuses = Vec::new();

        if self.rng.random_bool(0.25) {
            statuses.push(IndividualStatusType::HomeGrown);
        }
        if self.rng.random_bool(0.15) {
            statuses.push(IndividualStatusType::PlayerToWatch);
        }
        if self.rng.random_bool(0.05) {
            statuses.push(IndividualStatusType::Unknown);
        }

        statuses
    }
}
