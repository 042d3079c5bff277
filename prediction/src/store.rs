use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::RuleModel;
use crate::scorer;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid rule model in {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: scorer::DataError,
    },
}

/// Read-only map from material name to its rule model. Loaded once at
/// startup and shared behind `Arc`; there is no reload mechanism.
#[derive(Debug)]
pub struct ModelStore {
    models: HashMap<String, RuleModel>,
}

impl ModelStore {
    /// Loads one rule file per `(material, file name)` pair from
    /// `dir`, validating each model so bad data fails startup instead
    /// of a later lookup.
    pub fn load<I>(dir: &Path, materials: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut models = HashMap::new();
        for (material, file) in materials {
            let path = dir.join(&file);
            let display_path = path.display().to_string();

            let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: display_path.clone(),
                source,
            })?;
            let model: RuleModel =
                serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                    path: display_path.clone(),
                    source,
                })?;
            scorer::validate_model(&model).map_err(|source| StoreError::Invalid {
                path: display_path,
                source,
            })?;

            tracing::info!(
                material = %material,
                file = %file,
                blocks = model.aggregated_rules.len(),
                "loaded rule model"
            );
            models.insert(material, model);
        }
        Ok(Self { models })
    }

    /// For tests and callers that already hold models in memory.
    pub fn from_models(models: HashMap<String, RuleModel>) -> Self {
        Self { models }
    }

    pub fn get(&self, material: &str) -> Option<&RuleModel> {
        self.models.get(material)
    }

    pub fn materials(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }
}
