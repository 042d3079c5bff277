use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::model::{Credentials, Prediction};

#[derive(Debug, Clone)]
pub struct PredictionServiceConfig {
    pub base_url: Url,
    pub credentials: Credentials,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionClientError {
    #[error("authentication failed ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    #[error("prediction request failed ({status}): {body}")]
    Prediction { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed {endpoint} response: {source}")]
    Schema {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    jwt: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    data: PredictData,
}

#[derive(Debug, Deserialize)]
struct PredictData {
    predictions: Vec<Prediction>,
}

/// Two-call client for the remote prediction service: every
/// `predict` logs in first and uses the returned token once. The
/// token is never cached across invocations.
#[derive(Clone)]
pub struct PredictionServiceClient {
    client: Client,
    config: PredictionServiceConfig,
}

impl PredictionServiceClient {
    pub fn new(config: PredictionServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Exchanges the configured credentials for a short-lived token.
    /// Any non-200 is terminal; the predict endpoint is not called.
    async fn login(&self) -> Result<String, PredictionClientError> {
        let response = self
            .client
            .post(self.endpoint("api/auth/login"))
            .json(&self.config.credentials)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(PredictionClientError::Authentication { status, body });
        }

        let envelope: LoginResponse = serde_json::from_str(&body)
            .map_err(|source| PredictionClientError::Schema { endpoint: "login", source })?;
        Ok(envelope.data.user.jwt)
    }

    /// Submits `instance` to the given project's model. An empty
    /// predictions list is a valid "no prediction" answer, not an
    /// error. No retries on failure.
    pub async fn predict(
        &self,
        project_id: &str,
        instance: serde_json::Value,
    ) -> Result<Vec<Prediction>, PredictionClientError> {
        let token = self.login().await?;

        tracing::debug!(project_id, "submitting prediction request");
        let response = self
            .client
            .post(self.endpoint(&format!("api/projects/model/test/{project_id}")))
            .bearer_auth(token)
            .json(&serde_json::json!({ "input": instance }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(PredictionClientError::Prediction { status, body });
        }

        let envelope: PredictResponse = serde_json::from_str(&body)
            .map_err(|source| PredictionClientError::Schema { endpoint: "predict", source })?;
        Ok(envelope.data.predictions)
    }
}
