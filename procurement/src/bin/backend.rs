use std::path::Path;
use std::sync::Arc;

use common::config::PredictorKind;
use prediction::executable_utils::{initialize_executable, initialize_tracing, run_backend};
use prediction::model::{Credentials, GenericError};
use prediction::predictor::{LocalRuleScorer, RemotePredictor, TrendPredictor};
use prediction::remote::{PredictionServiceClient, PredictionServiceConfig};
use prediction::store::ModelStore;
use procurement::materials;

#[tokio::main]
async fn main() -> Result<(), GenericError> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    initialize_tracing(&config.backend.log_level);

    let predictor: Arc<dyn TrendPredictor> = match config.backend.predictor {
        PredictorKind::Local => {
            let store = ModelStore::load(
                Path::new(&config.common.models_dir),
                materials::store_entries(),
            )?;
            tracing::info!(materials = ?store.materials(), "serving local rule models");
            Arc::new(LocalRuleScorer::new(Arc::new(store)))
        }
        PredictorKind::Remote => {
            let remote = config
                .remote
                .clone()
                .ok_or("backend.predictor is 'remote' but the remote config section is missing")?;
            let client = PredictionServiceClient::new(PredictionServiceConfig {
                base_url: remote.base_url,
                credentials: Credentials {
                    username: remote.username,
                    password: remote.password,
                },
            })?;
            tracing::info!(projects = remote.project_ids.len(), "serving remote predictions");
            Arc::new(RemotePredictor::new(client, remote.project_ids))
        }
    };

    run_backend(config.backend, predictor, materials::names()).await
}
