use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::dashboard::metrics::{self, HealthMetric};
use crate::gemini::{GeminiClient, GenerativeClient};
use crate::journal::store::JournalStore;
use crate::profile::UserProfile;

/// Everything lives in memory for the lifetime of the process; there is
/// deliberately no database behind any of it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gemini: Arc<dyn GenerativeClient>,
    pub profile: Arc<RwLock<UserProfile>>,
    pub journal: Arc<JournalStore>,
    pub metrics: Arc<Vec<HealthMetric>>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let gemini = Arc::new(GeminiClient::new(&config.api_key)) as Arc<dyn GenerativeClient>;
        Ok(Self::from_parts(config, gemini))
    }

    pub fn from_parts(config: Arc<AppConfig>, gemini: Arc<dyn GenerativeClient>) -> Self {
        Self {
            config,
            gemini,
            profile: Arc::new(RwLock::new(UserProfile::default())),
            journal: Arc::new(JournalStore::new()),
            metrics: Arc::new(metrics::seed()),
        }
    }

    /// State with a canned stub in place of the real gateway, for tests.
    pub fn fake() -> Self {
        use async_trait::async_trait;

        use crate::gemini::{GeminiError, GroundedAnswer};

        struct StubClient;

        #[async_trait]
        impl GenerativeClient for StubClient {
            async fn generate_text(&self, _m: &str, _p: &str) -> Result<String, GeminiError> {
                Ok("stub tip".into())
            }
            async fn generate_json(
                &self,
                _m: &str,
                _p: &str,
                _s: serde_json::Value,
            ) -> Result<String, GeminiError> {
                Ok("[]".into())
            }
            async fn grounded_generate(
                &self,
                _m: &str,
                _q: &str,
            ) -> Result<GroundedAnswer, GeminiError> {
                Ok(GroundedAnswer {
                    text: "stub answer".into(),
                    sources: vec![],
                })
            }
            async fn chat(&self, _m: &str, _si: &str, _msg: &str) -> Result<String, GeminiError> {
                Ok("stub reply".into())
            }
        }

        Self::from_parts(Self::test_config(), Arc::new(StubClient))
    }

    /// State whose gateway fails every call, for exercising fallbacks.
    pub fn failing() -> Self {
        use async_trait::async_trait;

        use crate::gemini::{GeminiError, GroundedAnswer};

        struct FailingClient;

        #[async_trait]
        impl GenerativeClient for FailingClient {
            async fn generate_text(&self, _m: &str, _p: &str) -> Result<String, GeminiError> {
                Err(GeminiError::EmptyResponse)
            }
            async fn generate_json(
                &self,
                _m: &str,
                _p: &str,
                _s: serde_json::Value,
            ) -> Result<String, GeminiError> {
                Err(GeminiError::EmptyResponse)
            }
            async fn grounded_generate(
                &self,
                _m: &str,
                _q: &str,
            ) -> Result<GroundedAnswer, GeminiError> {
                Err(GeminiError::EmptyResponse)
            }
            async fn chat(&self, _m: &str, _si: &str, _msg: &str) -> Result<String, GeminiError> {
                Err(GeminiError::EmptyResponse)
            }
        }

        Self::from_parts(Self::test_config(), Arc::new(FailingClient))
    }

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            api_key: "test".into(),
            host: "127.0.0.1".into(),
            port: 0,
            models: crate::config::ModelConfig::defaults(),
        })
    }
}
