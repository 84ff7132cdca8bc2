use crate::{RosterError, RosterResult};
use log::debug;
use serde::Deserialize;
use squad_core::{Individual, IndividualStatusType};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const STATIC_ROSTER_JSON: &str = include_str!("../data/roster.json");

#[derive(Deserialize)]
pub struct IndividualEntity {
    pub id: u32,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub age: u8,
    #[serde(default)]
    pub experience: f64,
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<f64>,
}

impl IndividualEntity {
    fn into_individual(self) -> RosterResult<Individual> {
        let id = self.id;

        let mut builder = Individual::builder()
            .id(id)
            .full_name(self.name)
            .position(self.position)
            .age(self.age)
            .experience(self.experience)
            .statuses(
                self.statuses
                    .iter()
                    .map(|label| IndividualStatusType::from_label(label))
                    .collect(),
            )
            .tags(self.tags);

        if let Some(recommendation) = self.recommendation {
            builder = builder.recommendation(recommendation);
        }

        builder
            .build()
            .map_err(|reason| RosterError::InvalidRecord { id, reason })
    }
}

pub struct RosterLoader;

impl RosterLoader {
    /// The roster bundled with the binary.
    pub fn load() -> RosterResult<Vec<Individual>> {
        Self::from_json(STATIC_ROSTER_JSON)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> RosterResult<Vec<Individual>> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("roster file {} read: {} bytes", path.display(), json.len());

        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> RosterResult<Vec<Individual>> {
        let entities: Vec<IndividualEntity> = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(entities.len());

        entities
            .into_iter()
            .map(|entity| {
                if !seen.insert(entity.id) {
                    return Err(RosterError::DuplicateId(entity.id));
                }
                entity.into_individual()
            })
            .collect()
    }
}
