use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::engines::generation::operators::{SelectionMethod, DEFAULT_MUTATION_PROBABILITY};
use crate::error::AccompanistError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub mutation_probability: f64,
    pub selection_method: SelectionMethod,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            num_generations: 400,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            selection_method: SelectionMethod::Roulette,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), AccompanistError> {
        if self.population_size < 2 {
            return Err(AccompanistError::Configuration(
                "Population size must be at least 2".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(AccompanistError::Configuration(
                "Mutation probability must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest {
                    name: "population_size".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.population_size),
                    min: Some(2.0),
                    max: Some(10000.0),
                    description: "Number of candidate accompaniments per generation".to_string(),
                },
                FieldManifest {
                    name: "num_generations".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.num_generations),
                    min: Some(0.0),
                    max: None,
                    description: "Generations to evolve before picking the best".to_string(),
                },
                FieldManifest {
                    name: "mutation_probability".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(defaults.mutation_probability),
                    min: Some(0.0),
                    max: Some(1.0),
                    description: "Chance that a child gets one chord replaced".to_string(),
                },
                FieldManifest {
                    name: "selection_method".to_string(),
                    field_type: "enum".to_string(),
                    default: serde_json::json!(defaults.selection_method),
                    min: None,
                    max: None,
                    description: "Parent selection: Roulette or Rank".to_string(),
                },
                FieldManifest {
                    name: "seed".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::Value::Null,
                    min: Some(0.0),
                    max: None,
                    description: "Random seed; unset draws from entropy".to_string(),
                },
            ],
        }
    }
}
