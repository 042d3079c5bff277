use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::TrendLabel;
use crate::remote::{PredictionClientError, PredictionServiceClient};
use crate::scorer::{self, DataError};
use crate::store::ModelStore;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Remote(#[from] PredictionClientError),
}

/// A prediction backend. `Ok(None)` means the backend had no answer
/// for the material; callers render that as a warning, not a failure.
#[async_trait]
pub trait TrendPredictor: Send + Sync {
    async fn predict(
        &self,
        material: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<TrendLabel>, PredictError>;
}

/// Scores the precomputed rule model loaded at startup. Year and
/// month are accepted for interface parity with the remote backend
/// but do not influence the lookup.
pub struct LocalRuleScorer {
    store: Arc<ModelStore>,
}

impl LocalRuleScorer {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TrendPredictor for LocalRuleScorer {
    async fn predict(
        &self,
        material: &str,
        _year: i32,
        _month: u32,
    ) -> Result<Option<TrendLabel>, PredictError> {
        let model = self
            .store
            .get(material)
            .ok_or_else(|| PredictError::UnknownMaterial(material.to_string()))?;
        Ok(scorer::select_trend(model)?)
    }
}

/// Forwards the request to the remote prediction service and reads
/// the label off the first returned prediction. An empty predictions
/// list maps to `None`.
pub struct RemotePredictor {
    client: PredictionServiceClient,
    projects: HashMap<String, String>,
}

impl RemotePredictor {
    pub fn new(client: PredictionServiceClient, projects: HashMap<String, String>) -> Self {
        Self { client, projects }
    }
}

#[async_trait]
impl TrendPredictor for RemotePredictor {
    async fn predict(
        &self,
        material: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<TrendLabel>, PredictError> {
        let project_id = self
            .projects
            .get(material)
            .ok_or_else(|| PredictError::UnknownMaterial(material.to_string()))?;

        let instance = serde_json::json!({
            "material": material,
            "year": year,
            "month": month,
        });
        let predictions = self.client.predict(project_id, instance).await?;

        Ok(predictions
            .into_iter()
            .next()
            .and_then(|prediction| prediction.label)
            .map(TrendLabel::from))
    }
}
