use serde::Deserialize;
use std::collections::HashMap;
use std::{error::Error, fs};
use url::Url;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    pub models_dir: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PredictorKind {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendConfig {
    pub server_address: String,
    pub log_level: String,
    #[serde(default)]
    pub predictor: PredictorKind,
}

/// Settings for the remote prediction service. Only required when
/// `backend.predictor` is `remote`.
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    pub base_url: Url,
    pub username: String,
    pub password: String,
    /// Material name to remote project id.
    #[serde(default)]
    pub project_ids: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_local_default() {
        let yaml = r#"
common:
  project_name: uplify-predictor
  models_dir: procurement/rules
backend:
  server_address: 127.0.0.1:3000
  log_level: info
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.common.project_name, "uplify-predictor");
        assert_eq!(config.backend.predictor, PredictorKind::Local);
        assert!(config.remote.is_none());
    }

    #[test]
    fn parses_remote_section() {
        let yaml = r#"
common:
  project_name: uplify-predictor
  models_dir: procurement/rules
backend:
  server_address: 127.0.0.1:3000
  log_level: debug
  predictor: remote
remote:
  base_url: http://prediction.example.com:22032/
  username: procurement
  password: secret
  project_ids:
    Cement: proj-cement-01
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.backend.predictor, PredictorKind::Remote);
        let remote = config.remote.unwrap();
        assert_eq!(remote.base_url.as_str(), "http://prediction.example.com:22032/");
        assert_eq!(remote.project_ids["Cement"], "proj-cement-01");
    }
}
