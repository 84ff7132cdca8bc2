use crate::roster::individual::MAX_RECOMMENDATION;
use crate::roster::{Individual, IndividualStatusType};

// Builder for Individual
#[derive(Default)]
pub struct IndividualBuilder {
    id: Option<u32>,
    full_name: Option<String>,
    position: Option<String>,
    age: Option<u8>,
    experience: Option<f64>,
    statuses: Option<Vec<IndividualStatusType>>,
    tags: Option<Vec<String>>,
    recommendation: Option<f64>,
}

impl IndividualBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn experience(mut self, experience: f64) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn statuses(mut self, statuses: Vec<IndividualStatusType>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    pub fn status(mut self, status: IndividualStatusType) -> Self {
        self.statuses.get_or_insert_with(Vec::new).push(status);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn recommendation(mut self, recommendation: f64) -> Self {
        self.recommendation = Some(recommendation);
        self
    }

    pub fn build(self) -> Result<Individual, String> {
        if let Some(recommendation) = self.recommendation {
            if !(0.0..=MAX_RECOMMENDATION).contains(&recommendation) {
                return Err(format!(
                    "recommendation must be within 0..={MAX_RECOMMENDATION}, got {recommendation}"
                ));
            }
        }

        let experience = self.experience.unwrap_or(0.0);
        if !experience.is_finite() {
            return Err("experience must be a finite number".to_string());
        }

        let full_name = self.full_name.ok_or("full_name is required")?;
        if full_name.trim().is_empty() {
            return Err("full_name must not be empty".to_string());
        }

        Ok(Individual {
            id: self.id.ok_or("id is required")?,
            full_name,
            position: self.position.ok_or("position is required")?,
            age: self.age.unwrap_or_default(),
            experience,
            statuses: self.statuses.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            recommendation: self.recommendation,
        })
    }
}
