use crate::{Individual, IndividualStatusType};

const HOME_GROWN_BONUS: f64 = 0.5;
const PLAYER_TO_WATCH_BONUS: f64 = 0.3;
const EXPERIENCE_YEARS_PER_POINT: f64 = 10.0;
const MAX_EXPERIENCE_BONUS: f64 = 0.5;

/// Balancing weight of an individual.
///
/// Not a display score: bonuses stack on top of the recommendation, so the
/// total may exceed the 0-5 recommendation scale.
pub struct RatingCalculator;

impl RatingCalculator {
    pub fn calculate(individual: &Individual) -> f64 {
        determine_base_value(individual)
            + determine_status_bonus(individual)
            + determine_experience_bonus(individual)
    }
}

fn determine_base_value(individual: &Individual) -> f64 {
    individual.recommendation.unwrap_or(0.0)
}

fn determine_status_bonus(individual: &Individual) -> f64 {
    let mut bonus = 0.0;

    if individual.has_status(&IndividualStatusType::HomeGrown) {
        bonus += HOME_GROWN_BONUS;
    }

    if individual.has_status(&IndividualStatusType::PlayerToWatch) {
        bonus += PLAYER_TO_WATCH_BONUS;
    }

    bonus
}

/// 0.1 per year of experience, capped at 0.5
fn determine_experience_bonus(individual: &Individual) -> f64 {
    (individual.experience / EXPERIENCE_YEARS_PER_POINT).clamp(0.0, MAX_EXPERIENCE_BONUS)
}
